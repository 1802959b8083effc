//! End-to-end tests for the budget-split binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use budget_split::models::{BudgetInput, Household, SavingsRule};
use budget_split::storage::write_plan_file;
use budget_split::templates::{template, TemplateKey};

fn cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget-split").unwrap();
    cmd.env("BUDGET_SPLIT_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn plan_file(dir: &TempDir, name: &str, plan: &BudgetInput) -> std::path::PathBuf {
    let path = dir.path().join(name);
    write_plan_file(&path, plan).unwrap();
    path
}

#[test]
fn test_calc_template_report() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["calc", "--template", "couple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget (Couple)"))
        .stdout(predicate::str::contains("Bill split (proportional)"));
}

#[test]
fn test_calc_json_output() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["calc", "--template", "individual", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalIncome\": 32000.0"))
        .stdout(predicate::str::contains("\"savingsAmount\": 4800.0"))
        .stdout(predicate::str::contains("\"warnings\": []"));
}

#[test]
fn test_calc_from_file_reports_warnings() {
    let data = TempDir::new().unwrap();
    let plan = BudgetInput::new(Household::Individual, 10000.0).with_bill("Rent", 12000.0);
    let path = plan_file(&data, "deficit.json", &plan);

    cmd(&data)
        .arg("calc")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bills exceed income"));
}

#[test]
fn test_share_round_trip_through_cli() {
    let data = TempDir::new().unwrap();
    let plan = BudgetInput::new(Household::couple(10000.0), 30000.0)
        .with_bill("Hyra", 4000.0)
        .with_savings(SavingsRule::fixed(500.0));
    let path = plan_file(&data, "plan.yaml", &plan);

    let output = cmd(&data)
        .args(["share", "encode"])
        .arg(&path)
        .args(["--base", "https://example.com"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let url = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert!(url.starts_with("https://example.com/share?data="));

    cmd(&data)
        .args(["calc", "--json", "--share", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fairBillContribution\": 3000.0"))
        .stdout(predicate::str::contains("\"fairBillContribution\": 1000.0"));
}

#[test]
fn test_corrupt_share_link_is_reported() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["share", "decode", "https://example.com/share?data=%%%nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid or corrupted"));
}

#[test]
fn test_share_link_without_data() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["share", "decode", "https://example.com/share"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing data"));
}

#[test]
fn test_plan_save_list_remove() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .args(["plan", "save", "Our June", "--template", "couple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved plan 'Our June'"));

    cmd(&data)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Our June"))
        .stdout(predicate::str::contains("Couple"));

    cmd(&data)
        .args(["plan", "show", "our june"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bill split"));

    cmd(&data)
        .args(["plan", "remove", "Our June"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 remaining"));

    cmd(&data)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved plans."));
}

#[test]
fn test_corrupt_saved_plans_list_as_empty() {
    let data = TempDir::new().unwrap();
    let store = data.path().join("data");
    std::fs::create_dir_all(&store).unwrap();
    std::fs::write(store.join("budget-split_plans_v1.json"), "{{{ not json").unwrap();

    cmd(&data)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved plans."));
}

#[test]
fn test_unknown_plan_fails() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["plan", "show", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan not found: nothing"));
}

#[test]
fn test_bill_and_settings_editing() {
    let data = TempDir::new().unwrap();
    let path = plan_file(&data, "edit.json", &template(TemplateKey::Student));

    cmd(&data)
        .args(["bill", "add"])
        .arg(&path)
        .args(["Gym", "201"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added bill 'Gym'"));

    cmd(&data)
        .args(["set"])
        .arg(&path)
        .args(["--household", "couple", "--income-b", "7000", "--split", "equal"])
        .assert()
        .success();

    cmd(&data)
        .args(["category", "remove"])
        .arg(&path)
        .arg("buffer")
        .assert()
        .success();

    let plan = budget_split::storage::read_plan_file(&path).unwrap();
    assert!(plan.find_bill("gym").is_some());
    assert!(plan.find_category("Buffer").is_none());
    assert!(plan.household.is_couple());

    cmd(&data)
        .arg("calc")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalIncome\": 20000.0"))
        .stdout(predicate::str::contains("\"splitRule\": \"equal\""));
}

#[test]
fn test_template_list_and_yaml() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["template", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("individual (default)"))
        .stdout(predicate::str::contains("lowincome"));

    cmd(&data)
        .args(["template", "student", "--yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("householdType: student"));
}
