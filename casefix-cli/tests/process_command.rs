//! End-to-end tests running the casefix binary over real directories.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_rewrites_references_to_real_case() {
    let env = TestEnv::with_fixture();

    env.command()
        .arg(env.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("rewrote index.html (2 references)"))
        .stdout(predicate::str::contains(
            "1 of 3 documents changed, 2 references corrected, 0 skipped",
        ));

    assert_eq!(
        env.read("index.html"),
        "<img src=\"Images/Test_Image.jpg\">\n<a href=\"SubDir/Page2.html\">next</a>\n"
    );
    assert_eq!(
        env.read("notes.html"),
        "<a href=\"https://example.com/X.html\">x</a>\n"
    );
}

#[test]
fn test_second_run_changes_nothing() {
    let env = TestEnv::with_fixture();
    env.command().arg(env.root()).assert().success();
    let first = env.read("index.html");

    env.command()
        .arg(env.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 3 documents changed"));
    assert_eq!(env.read("index.html"), first);
}

#[test]
fn test_not_a_directory_exits_with_one() {
    let env = TestEnv::new();
    let file = env.write("plain.txt", "not a directory");

    env.command()
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_missing_directory_exits_with_one() {
    let env = TestEnv::new();

    env.command()
        .arg(env.path("does-not-exist"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_dry_run_leaves_files_untouched() {
    let env = TestEnv::with_fixture();
    let before = env.read("index.html");

    env.command()
        .arg("--dry-run")
        .arg(env.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("would rewrite index.html"));

    assert_eq!(env.read("index.html"), before);
}

#[test]
fn test_dry_run_from_environment() {
    let env = TestEnv::with_fixture();
    let before = env.read("index.html");

    env.command()
        .env("CASEFIX_DRY_RUN", "true")
        .arg(env.root())
        .assert()
        .success();

    assert_eq!(env.read("index.html"), before);
}

#[test]
fn test_root_from_environment() {
    let env = TestEnv::with_fixture();

    env.command()
        .env("CASEFIX_ROOT", env.root())
        .assert()
        .success();

    assert!(env.read("index.html").contains("Images/Test_Image.jpg"));
}

#[test]
fn test_json_summary() {
    let env = TestEnv::with_fixture();

    let output = env
        .command()
        .args(["--format", "json"])
        .arg(env.root())
        .output()
        .expect("Failed to run casefix");
    assert!(output.status.success());

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(summary["scanned"], 3);
    assert_eq!(summary["rewritten"], 1);
    assert_eq!(summary["references_corrected"], 2);
    assert_eq!(summary["dry_run"], false);
    assert_eq!(summary["documents"][0]["changes"][0]["tag"], "<img>");
    assert_eq!(
        summary["documents"][0]["changes"][0]["corrected"],
        "Images/Test_Image.jpg"
    );
}

#[test]
fn test_json_summary_stays_parseable_with_skipped_documents() {
    let env = TestEnv::with_fixture();
    env.write("latin1.html", b"<p>caf\xe9</p>");

    let output = env
        .command()
        .args(["--format", "json"])
        .arg(env.root())
        .output()
        .expect("Failed to run casefix");
    assert!(output.status.success());

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(summary["skipped"].as_array().map(Vec::len), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error processing"));
}

#[test]
fn test_quiet_suppresses_summary() {
    let env = TestEnv::with_fixture();

    env.command()
        .arg("--quiet")
        .arg(env.root())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(env.read("index.html").contains("SubDir/Page2.html"));
}

#[test]
fn test_non_utf8_document_is_reported_and_skipped() {
    let env = TestEnv::with_fixture();
    env.write("latin1.html", b"<a href=\"subdir/page2.html\">caf\xe9</a>");

    env.command()
        .arg(env.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error processing"))
        .stdout(predicate::str::contains("latin1.html"))
        .stdout(predicate::str::contains("1 skipped"));

    assert_eq!(
        std::fs::read(env.path("latin1.html")).unwrap(),
        b"<a href=\"subdir/page2.html\">caf\xe9</a>"
    );
    assert!(env.read("index.html").contains("Images/Test_Image.jpg"));
}

#[test]
fn test_extension_flag_replaces_defaults() {
    let env = TestEnv::with_fixture();
    env.write("page.xhtml", "<img src=\"IMAGES/TEST_IMAGE.JPG\"/>");

    env.command()
        .args(["--extension", "xhtml"])
        .arg(env.root())
        .assert()
        .success();

    assert_eq!(env.read("page.xhtml"), "<img src=\"Images/Test_Image.jpg\">");
    assert!(env.read("index.html").contains("images/test_image.jpg"));
}

#[test]
fn test_config_file_in_root_is_honored() {
    let env = TestEnv::with_fixture();
    env.write("casefix.yaml", "dry_run: true\n");
    let before = env.read("index.html");

    env.command().arg(env.root()).assert().success();

    assert_eq!(env.read("index.html"), before);
}

#[test]
fn test_invalid_config_file_exits_with_one() {
    let env = TestEnv::with_fixture();
    env.write("casefix.yaml", "no_such_key: 1\n");

    env.command()
        .arg(env.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_document_exits_with_one() {
    use std::os::unix::fs::PermissionsExt;

    if common::running_as_root() {
        return;
    }

    let env = TestEnv::with_fixture();
    let locked = env.write("locked.html", "<a href=\"x.html\">x</a>");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    let assert = env.command().arg(env.root()).assert();

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o644)).unwrap();
    assert
        .code(1)
        .stderr(predicate::str::contains("permission denied"));
}
