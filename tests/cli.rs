//! Binary-level tests for argument handling and failure messages.

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("visu-bundle").expect("binary builds")
}

#[test]
fn unknown_os_value_is_rejected() {
    let project = tempfile::tempdir().expect("tempdir");
    bin()
        .args(["--project-root"])
        .arg(project.path())
        .args([
            "--os",
            "beos",
            "--project-name",
            "Demo",
            "--project-version",
            "1.0.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported platform"));
}

#[test]
fn unresolved_project_name_names_the_field() {
    let project = tempfile::tempdir().expect("tempdir");
    bin()
        .args(["--project-root"])
        .arg(project.path())
        .args(["--os", "macos", "--project-version", "1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name"));
}

#[test]
fn missing_output_parent_is_a_configuration_error() {
    let project = tempfile::tempdir().expect("tempdir");
    let bad_output = project.path().join("no/such/parent/out");
    bin()
        .args(["--project-root"])
        .arg(project.path())
        .args(["--output"])
        .arg(&bad_output)
        .args([
            "--os",
            "macos",
            "--project-name",
            "Demo",
            "--project-version",
            "1.0.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn identity_falls_back_to_the_project_manifest() {
    let project = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        project.path().join("project.toml"),
        "[project]\nname = \"Demo\"\nversion = \"0.9.1\"\n",
    )
    .expect("write manifest");
    std::fs::write(project.path().join("main.visu"), b"entry").expect("write");

    // runtime binary the bundle copies in
    let tools = tempfile::tempdir().expect("tempdir");
    let runtime = tools.path().join("visu");
    std::fs::write(&runtime, b"runtime").expect("write runtime");

    bin()
        .args(["--project-root"])
        .arg(project.path())
        .args(["--os", "macos", "--yes", "--runtime"])
        .arg(&runtime)
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo.app"));

    assert!(project.path().join("dist/Demo.app/Contents/Info.plist").is_file());
}
