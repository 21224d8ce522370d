use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("visa_intake_cli").expect("binary exists");
    cmd.env("VISA_INTAKE_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("VISA_INTAKE_API_BASE_URL")
        .env_remove("VISA_INTAKE_STORAGE_URL");
    cmd
}

#[test]
fn services_lists_every_visa_with_its_routes() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("services")
        .assert()
        .success()
        .stdout(contains("10 Years Golden Residency"))
        .stdout(contains("Dependent Visa"))
        .stdout(contains("/application-form?type=real_estate"))
        .stdout(contains("/retirement-visa-details"));
}

#[test]
fn requirements_for_family_need_visa_copy() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["requirements", "--type", "family"])
        .assert()
        .success()
        .stdout(contains("Visa copy").and(contains("required")))
        .stdout(contains("Dependents: 1 to 10"));
}

#[test]
fn requirements_reject_unknown_type() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["requirements", "--type", "platinum"])
        .assert()
        .failure()
        .stderr(contains("unknown visa type `platinum`"));
}

#[test]
fn unknown_command_suggests_the_closest_one() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("servces")
        .assert()
        .failure()
        .stderr(contains("Unknown command `servces`"))
        .stdout(contains("Suggestion: `services`?"));
}

#[test]
fn dashboard_without_login_asks_to_sign_in() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(contains("Please login to access the dashboard"))
        .stdout(contains("-> /login"));
}

#[test]
fn config_reflects_environment_overrides() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .env("VISA_INTAKE_API_BASE_URL", "http://localhost:8000/api")
        .arg("config")
        .assert()
        .success()
        .stdout(contains("http://localhost:8000/api"))
        .stdout(contains("Page size      : 3"));
}

#[test]
fn no_arguments_prints_help() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .assert()
        .success()
        .stdout(contains("Available commands"))
        .stdout(contains("apply"));
}
