use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

const PROFILE_CSS: &str = ".profile-page .user-info-card { background-color: blue; }\n\
                           .profile-page .user-info-card .avatar-image { width: 10px; }\n";

const PROFILE_CSS_CONVERTED: &str = ".userInfoCard { background-color: blue; }\n\
                                     .userInfoCard .avatarImage { width: 10px; }\n";

#[test]
fn converts_next_to_input_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Profile.module.css"), PROFILE_CSS).unwrap();

    let mut cmd = cargo_bin_cmd!("css-camelize");
    cmd.current_dir(dir.path()).arg("Profile.module.css");

    cmd.assert()
        .success()
        .stdout("Converted Profile.module.css to Profile.module.css.new\n");

    let written = fs::read_to_string(dir.path().join("Profile.module.css.new")).unwrap();
    assert_eq!(written, PROFILE_CSS_CONVERTED);
}

#[test]
fn honours_output_and_scope_flags() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Settings.module.css"),
        ".settings-page .toggle-row { }\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("css-camelize");
    cmd.current_dir(dir.path())
        .arg("Settings.module.css")
        .args(["--output", "out.css", "--scope", "settings-page"]);

    cmd.assert()
        .success()
        .stdout("Converted Settings.module.css to out.css\n");

    let written = fs::read_to_string(dir.path().join("out.css")).unwrap();
    assert_eq!(written, ".toggleRow { }\n");
}

#[test]
fn uses_project_config_when_no_input_is_given() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Card.module.css"), PROFILE_CSS).unwrap();
    fs::write(
        dir.path().join("css-camelize.toml"),
        "input_path = \"Card.module.css\"\noutput_path = \"Card.camel.css\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("css-camelize");
    cmd.current_dir(dir.path());

    cmd.assert()
        .success()
        .stdout("Converted Card.module.css to Card.camel.css\n");

    let written = fs::read_to_string(dir.path().join("Card.camel.css")).unwrap();
    assert_eq!(written, PROFILE_CSS_CONVERTED);
}

#[test]
fn stdout_mode_prints_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Profile.module.css"), PROFILE_CSS).unwrap();

    let mut cmd = cargo_bin_cmd!("css-camelize");
    cmd.current_dir(dir.path())
        .arg("Profile.module.css")
        .arg("--stdout");

    cmd.assert().success().stdout(PROFILE_CSS_CONVERTED);
    assert!(!dir.path().join("Profile.module.css.new").exists());
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("css-camelize");
    cmd.current_dir(dir.path()).arg("Missing.module.css");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to read Missing.module.css"));

    assert!(!dir.path().join("Missing.module.css.new").exists());
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("css-camelize");
    cmd.current_dir(dir.path())
        .args(["--config", "absent.toml", "In.module.css"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}
