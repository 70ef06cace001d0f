use assert_cmd::Command;
use predicates::prelude::*;

fn abook(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("abook").unwrap();
    cmd.env("ABOOK_DATA_FILE", data_file);
    cmd
}

#[test]
fn basic_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("addressbook.json");

    abook(&data_file)
        .write_stdin(
            "hello\n\
             add alice 1234567890\n\
             phone alice\n\
             all\n\
             frobnicate\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicates::str::contains("Welcome to the assistant bot!"))
        .stdout(predicates::str::contains("How can I help you?"))
        .stdout(predicates::str::contains("Contact added."))
        .stdout(predicates::str::contains(
            "Contact name: alice, phones: 1234567890, birthday: N/A",
        ))
        .stdout(predicates::str::contains("Contacts:"))
        .stdout(predicates::str::contains("Invalid command."))
        .stdout(predicates::str::contains("Goodbye!"));
}

#[test]
fn error_messages() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("addressbook.json");

    abook(&data_file)
        .write_stdin(
            "add alice\n\
             change bob 1234567890 0987654321\n\
             all\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicates::str::contains("Give me name and phone please."))
        .stdout(predicates::str::contains("Contact does not exist."))
        .stdout(predicates::str::contains("Contacts are empty."));
}

#[test]
fn birthday_flow() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("addressbook.json");

    abook(&data_file)
        .write_stdin(
            "add alice 1234567890\n\
             show-birthday alice\n\
             add-birthday alice 05.03.1990\n\
             show-birthday alice\n\
             close\n",
        )
        .assert()
        .success()
        .stdout(predicates::str::contains("No birthday set."))
        .stdout(predicates::str::contains("Birthday added."))
        .stdout(predicates::str::contains("05.03.1990"));
}

#[test]
fn persists_across_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("addressbook.json");

    abook(&data_file)
        .write_stdin(
            "add alice 1234567890\n\
             add bob 0987654321\n\
             add-birthday bob 05.03.1990\n\
             exit\n",
        )
        .assert()
        .success();

    abook(&data_file)
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Contact name: alice, phones: 1234567890, birthday: N/A",
        ))
        .stdout(predicates::str::contains(
            "Contact name: bob, phones: 0987654321, birthday: 05.03.1990",
        ));
}

#[test]
fn eof_persists_like_exit() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("addressbook.json");

    abook(&data_file)
        .write_stdin("add alice 1234567890\n")
        .assert()
        .success();

    abook(&data_file)
        .write_stdin("phone alice\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("1234567890"));
}

#[test]
fn corrupt_snapshot_fails_fast() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("addressbook.json");
    std::fs::write(&data_file, "not json at all").unwrap();

    abook(&data_file)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Snapshot"));
}
