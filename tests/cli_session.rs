use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn addrbook(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("addrbook").unwrap();
    cmd.env("ADDRBOOK_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_list_find_exit() {
    let home = tempfile::tempdir().unwrap();

    addrbook(&home)
        .write_stdin(
            "add John Doe p/98765432 pe/john@example.com a/311 Clementi Ave t/friends\n\
             add Alice Tan p/12345 e/alice@example.com a/Blk 1 Tampines\n\
             list\n\
             find alice\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to your Address Book!"))
        .stdout(predicate::str::contains("Using storage file :"))
        .stdout(predicate::str::contains("New person added: John Doe"))
        .stdout(predicate::str::contains("2 persons listed!"))
        .stdout(predicate::str::contains("1 persons listed!"))
        .stdout(predicate::str::contains("Exiting Address Book as requested ..."))
        // private email stays out of listings
        .stdout(predicate::str::contains("John Doe Phone: 98765432 Address: 311 Clementi Ave Tags: [friends]"));
}

#[test]
fn test_book_persists_between_runs() {
    let home = tempfile::tempdir().unwrap();

    addrbook(&home)
        .write_stdin("add Bob p/555 e/bob@example.com a/Somewhere t/work\nexit\n")
        .assert()
        .success();

    assert!(home.path().join("addressbook.json").exists());

    addrbook(&home)
        .write_stdin("listtag\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 tags listed!"))
        .stdout(predicate::str::contains("[work]"))
        .stdout(predicate::str::contains("Bob Phone: 555"));
}

#[test]
fn test_end_of_input_stops_the_session() {
    let home = tempfile::tempdir().unwrap();

    addrbook(&home)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 persons listed!"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_errors_are_feedback_not_failures() {
    let home = tempfile::tempdir().unwrap();

    addrbook(&home)
        .write_stdin("delete 3\nadd Bad p/abc e/x@y a/z\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The person index provided is invalid"))
        .stdout(predicate::str::contains("Person phone numbers should only contain numbers"));
}

#[test]
fn test_explicit_storage_file_argument() {
    let home = tempfile::tempdir().unwrap();
    let custom = home.path().join("nested").join("custom.json");

    addrbook(&home)
        .arg(&custom)
        .write_stdin("add Eve p/1 e/eve@example.com a/Here\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"));

    assert!(custom.exists());
    assert!(!home.path().join("addressbook.json").exists());
}

#[test]
fn test_rejects_non_json_storage_file() {
    let home = tempfile::tempdir().unwrap();

    addrbook(&home)
        .arg(home.path().join("book.xml"))
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Storage file should end with '.json'"));
}

#[test]
fn test_config_can_show_private_details_in_listings() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{"show_private_in_listings": true}"#,
    )
    .unwrap();

    addrbook(&home)
        .write_stdin("add Zed pp/999 e/zed@example.com a/Far\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zed Phone: (private) 999"));
}
