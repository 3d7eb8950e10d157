use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn user_admin(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("user-admin").unwrap();
    cmd.env("USER_ADMIN_DATA_DIR", dir.path())
        .env("USER_ADMIN_LOG", "off");
    cmd
}

fn create_johnny(dir: &TempDir) {
    user_admin(dir)
        .args([
            "users",
            "create",
            "--forename",
            "Johnny",
            "--surname",
            "Blaze",
            "--email",
            "jblaze@example.com",
            "--dob",
            "1994-05-21",
            "--active",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user: Johnny Blaze"));
}

#[test]
fn init_seeds_demo_users() {
    let dir = TempDir::new().unwrap();

    user_admin(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 11 demo users."));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("users.json").exists());

    user_admin(&dir)
        .args(["users", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 11 users"));

    user_admin(&dir)
        .args(["users", "list", "--filter", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 7 users"));

    user_admin(&dir)
        .args(["logs", "list", "--action", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 11 entries"));

    // A second init leaves the store alone
    user_admin(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo users").not());
}

#[test]
fn invalid_user_is_rejected_with_field_messages() {
    let dir = TempDir::new().unwrap();

    user_admin(&dir)
        .args([
            "users",
            "create",
            "--forename",
            "  ",
            "--surname",
            "Poe",
            "--email",
            "cpoe",
            "--dob",
            "2999-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Forename must not be empty or whitespace",
        ))
        .stderr(predicate::str::contains("Email must be a valid email address"))
        .stderr(predicate::str::contains(
            "Date of Birth cannot be in the future",
        ))
        .stderr(predicate::str::contains("Surname").not());

    user_admin(&dir)
        .args(["logs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No log entries found."));
}

#[test]
fn missing_date_of_birth_is_reported() {
    let dir = TempDir::new().unwrap();

    user_admin(&dir)
        .args([
            "users",
            "create",
            "--forename",
            "Cameron",
            "--surname",
            "Poe",
            "--email",
            "cpoe@example.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Date of Birth must be specified"));
}

#[test]
fn edit_is_logged_with_before_and_after() {
    let dir = TempDir::new().unwrap();
    create_johnny(&dir);

    user_admin(&dir)
        .args(["users", "edit", "1", "--email", "johnny@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated user"));

    user_admin(&dir)
        .args(["logs", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User updated with ID '1'"))
        .stdout(predicate::str::contains("Before:"))
        .stdout(predicate::str::contains("After:"))
        .stdout(predicate::str::contains(
            "email: \"jblaze@example.com\" -> \"johnny@example.com\"",
        ));

    user_admin(&dir)
        .args(["users", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("johnny@example.com"))
        .stdout(predicate::str::contains("User created with ID '1'"))
        .stdout(predicate::str::contains("User updated with ID '1'"));
}

#[test]
fn edit_unknown_user_fails() {
    let dir = TempDir::new().unwrap();

    user_admin(&dir)
        .args(["users", "edit", "42", "--forename", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found: 42"));
}

#[test]
fn delete_needs_force_and_keeps_history() {
    let dir = TempDir::new().unwrap();
    create_johnny(&dir);

    user_admin(&dir)
        .args(["users", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));

    user_admin(&dir)
        .args(["users", "delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted user: Johnny Blaze"));

    user_admin(&dir)
        .args(["users", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found."));

    user_admin(&dir)
        .args(["logs", "list", "--user", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User deleted with ID '1'"))
        .stdout(predicate::str::contains("Total: 2 entries"));
}

#[test]
fn users_can_be_addressed_by_email() {
    let dir = TempDir::new().unwrap();
    create_johnny(&dir);

    user_admin(&dir)
        .args(["users", "show", "JBlaze@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User: Johnny Blaze"))
        .stdout(predicate::str::contains("ID:             1"));
}

#[test]
fn unreadable_date_format_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    user_admin(&dir)
        .args(["users", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format '%Q'"))
        .stderr(predicate::str::contains("panicked").not());
}
