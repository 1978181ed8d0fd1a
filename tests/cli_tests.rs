use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_execute_init_creates_gostrap_toml() {
    let dir = tempdir().unwrap();
    let dir_path = dir.path();

    let mut cmd = Command::cargo_bin("gostrap").unwrap();
    cmd.current_dir(dir_path)
        .arg("init")
        .assert()
        .success();

    let toml_path = dir_path.join("gostrap.toml");
    assert!(toml_path.exists());
    let content = fs::read_to_string(toml_path).unwrap();
    assert!(content.contains("[toolchain]"));
    assert!(content.contains("[[package]]"));
}

#[test]
fn test_execute_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let dir_path = dir.path();

    Command::cargo_bin("gostrap").unwrap()
        .current_dir(dir_path)
        .arg("init")
        .assert()
        .success();

    Command::cargo_bin("gostrap").unwrap()
        .current_dir(dir_path)
        .arg("init")
        .assert()
        .failure();
}

#[test]
fn test_execute_list_prints_builtin_manifest() {
    let dir = tempdir().unwrap();
    let dir_path = dir.path();

    // no gostrap.toml: list falls back to the built-in manifest
    let output = Command::cargo_bin("gostrap").unwrap()
        .current_dir(dir_path)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8_lossy(&output);
    assert!(output_str.contains("go-hep.org/x/hep: github.com/go-hep/hep"));
    assert!(output_str.contains("gonum.org/v1/gonum: github.com/gonum/gonum"));
}

#[test]
fn test_execute_list_reads_custom_manifest() {
    let dir = tempdir().unwrap();
    let dir_path = dir.path();

    let config = r#"
[toolchain]
version = "1.22.5"
fetch = "example.com/app"

[[package]]
path = "example.com/dep"
repo = "github.com/example/dep"
"#;
    fs::write(dir_path.join("gostrap.toml"), config).unwrap();

    let output = Command::cargo_bin("gostrap").unwrap()
        .current_dir(dir_path)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8_lossy(&output);
    assert!(output_str.contains("example.com/dep: github.com/example/dep"));
    assert!(!output_str.contains("gonum.org"));
}

fn write_manifest(dir: &std::path::Path, packages: &[(&str, &str)]) {
    let mut config = String::from(
        "[toolchain]\nversion = \"1.22.5\"\nfetch = \"example.com/app\"\n",
    );
    for (path, repo) in packages {
        config.push_str(&format!("\n[[package]]\npath = \"{path}\"\nrepo = \"{repo}\"\n"));
    }
    fs::write(dir.join("gostrap.toml"), config).unwrap();
}

#[test]
fn test_clone_prefers_gopath_env_over_toolchain_query() {
    let project = tempdir().unwrap();
    write_manifest(project.path(), &[("example.com/dep", "github.com/example/dep")]);

    let workspace = tempdir().unwrap();
    let target = workspace.path().join("src").join("example.com").join("dep");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join(".keep"), "").unwrap();

    // empty PATH: neither `go env GOPATH` nor `git` can run, so success
    // proves the GOPATH variable was used and nothing was spawned
    let empty_bin = tempdir().unwrap();
    let output = Command::cargo_bin("gostrap").unwrap()
        .current_dir(project.path())
        .env("GOPATH", workspace.path())
        .env("PATH", empty_bin.path())
        .arg("clone")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8_lossy(&output);
    assert!(output_str.contains("skipped example.com/dep"));
}

#[test]
fn test_clone_explicit_workspace_wins_over_gopath_env() {
    let project = tempdir().unwrap();
    write_manifest(project.path(), &[("example.com/dep", "github.com/example/dep")]);

    let explicit = tempdir().unwrap();
    let target = explicit.path().join("src").join("example.com").join("dep");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join(".keep"), "").unwrap();

    let from_env = tempdir().unwrap();
    let empty_bin = tempdir().unwrap();
    Command::cargo_bin("gostrap").unwrap()
        .current_dir(project.path())
        .env("GOPATH", from_env.path())
        .env("PATH", empty_bin.path())
        .args(["clone", "--workspace"])
        .arg(explicit.path())
        .assert()
        .success();

    // the env workspace was never touched
    assert!(!from_env.path().join("src").exists());
}

#[cfg(unix)]
#[test]
fn test_failed_clone_surfaces_output_and_stops() {
    use std::os::unix::fs::PermissionsExt;

    let project = tempdir().unwrap();
    write_manifest(
        project.path(),
        &[
            ("example.com/one", "github.com/example/one"),
            ("example.com/two", "github.com/example/two"),
        ],
    );
    let workspace = tempdir().unwrap();

    // PATH-shadowed git: logs its arguments, prints on both streams, exits 1
    let fake_bin = tempdir().unwrap();
    let git = fake_bin.path().join("git");
    fs::write(
        &git,
        "#!/bin/sh\necho \"$@\" >> \"${0%/*}/invocations.log\"\necho \"fatal: simulated clone failure\"\necho \"remote: access denied\" >&2\nexit 1\n",
    )
    .unwrap();
    fs::set_permissions(&git, fs::Permissions::from_mode(0o755)).unwrap();

    let output = Command::cargo_bin("gostrap").unwrap()
        .current_dir(project.path())
        .env("GOPATH", workspace.path())
        .env("PATH", fake_bin.path())
        .arg("clone")
        .assert()
        .failure()
        .get_output()
        .clone();

    // the combined subprocess output is surfaced verbatim before the fatal message
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fatal: simulated clone failure"));
    assert!(stderr.contains("remote: access denied"));

    // the first failure stops the run: exactly one invocation, for the first entry
    let log = fs::read_to_string(fake_bin.path().join("invocations.log")).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("--depth=5"));
    assert!(log.contains("https://github.com/example/one"));
    assert!(!log.contains("example/two"));
}

#[test]
fn test_install_rejects_bad_version_before_downloading() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("gostrap").unwrap()
        .current_dir(dir.path())
        .args(["install", "--version", "not-a-version"])
        .assert()
        .failure();
}

#[test]
fn test_setup_fails_fast_on_bad_pinned_version() {
    let dir = tempdir().unwrap();
    let config = r#"
[toolchain]
version = "latest"
fetch = "example.com/app"
"#;
    fs::write(dir.path().join("gostrap.toml"), config).unwrap();

    Command::cargo_bin("gostrap").unwrap()
        .current_dir(dir.path())
        .arg("setup")
        .assert()
        .failure();
}
