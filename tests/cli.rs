use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const EXTRACT: &str = "\
POLICY_NO,INSURED_NAME,DOCUMENT_DATE,AMOUNT,NARRATION
G/001/07/3005/2020/0007,ACME HOLDINGS LTD,2024-01-15,100.00,Premium
G/001/07/3005/2020/0007,ACME HOLDINGS LTD,2024-03-10,250.50,Premium
G/001/07/3005/2020/0007,ACME HOLDINGS LTD,2023-12-31,49.50,Adjustment
G/002/01/1000/2021/0001,Beta Traders,2024-02-01,75.00,Premium
";

const POLICY: &str = "G/001/07/3005/2020/0007";

struct TestEnv {
    tmp: TempDir,
    fixture: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let fixture = tmp.path().join("statements.csv");
        fs::write(&fixture, EXTRACT).unwrap();
        Self { tmp, fixture }
    }

    fn home(&self) -> PathBuf {
        self.tmp.path().join("home")
    }

    fn bare_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("statements").unwrap();
        cmd.current_dir(self.tmp.path())
            .env("STATEMENT_PORTAL_HOME", self.home())
            .env_remove("STATEMENT_PORTAL_FIXTURE")
            .env_remove("STATEMENT_PORTAL_LOG")
            .env_remove("DB_HOST")
            .env_remove("DB_PORT")
            .env_remove("DB_SERVICE")
            .env_remove("DB_USER")
            .env_remove("DB_PASS");
        cmd
    }

    fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--fixture").arg(&self.fixture);
        cmd
    }
}

#[test]
fn search_by_policy_prints_results_and_summary() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", POLICY])
        .assert()
        .success()
        .stdout(contains("Found 3 record(s)."))
        .stdout(contains("Total Records: 3"))
        .stdout(contains("Total Amount: 400.00"))
        .stdout(contains("Beta Traders").not());
}

#[test]
fn search_by_partial_name_ignores_case() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "--by", "name", "  holdings "])
        .assert()
        .success()
        .stdout(contains("Found 3 record(s)."));
}

#[test]
fn search_with_date_range_filters_rows() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", POLICY, "--start", "2024-01-01", "--end", "2024-12-31"])
        .assert()
        .success()
        .stdout(contains("Found 2 record(s)."))
        .stdout(contains("Total Amount: 350.50"));
}

#[test]
fn search_without_matches_reports_no_records() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "G/999/00/0000/0000/0000"])
        .assert()
        .success()
        .stdout(contains("No records found."))
        .stdout(contains("Total Records").not());
}

#[test]
fn date_range_excluding_every_row_prints_header_only() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", POLICY, "--start", "2020-01-01", "--end", "2020-12-31"])
        .assert()
        .success()
        .stdout(contains("Found 0 record(s)."))
        .stdout(contains("POLICY_NO"))
        .stdout(contains("Total Records: 0"))
        .stdout(contains("No records found.").not());
}

#[test]
fn blank_search_value_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", "   "])
        .assert()
        .failure()
        .stderr(contains("Please enter a search value."));
}

#[test]
fn start_date_requires_end_date() {
    let env = TestEnv::new();
    env.cmd()
        .args(["search", POLICY, "--start", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("--end"));
}

#[test]
fn search_exports_xlsx() {
    let env = TestEnv::new();
    let output = env.tmp.path().join("out.xlsx");

    env.cmd()
        .args(["search", POLICY, "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Exported 3 record(s)"));

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn search_exports_csv() {
    let env = TestEnv::new();
    let output = env.tmp.path().join("out.csv");

    env.cmd()
        .args(["search", POLICY, "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("POLICY_NO,INSURED_NAME,DOCUMENT_DATE,AMOUNT,NARRATION")
    );
    assert_eq!(lines.count(), 3);
}

#[test]
fn search_without_database_settings_fails() {
    let env = TestEnv::new();
    env.bare_cmd()
        .args(["search", POLICY])
        .assert()
        .failure()
        .stderr(contains("DB_HOST is not set"));
}

#[test]
fn config_shows_paths_and_view() {
    let env = TestEnv::new();
    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("BI_CUSTOMER_STATEMENT_VIEW"))
        .stdout(contains("CSV extract"))
        .stdout(contains("customer_statements.xlsx"));

    assert!(env.home().join("config.json").exists());
}

#[test]
fn config_never_prints_the_password() {
    let env = TestEnv::new();
    env.bare_cmd()
        .env("DB_HOST", "db.example.com")
        .env("DB_SERVICE", "ORCL")
        .env("DB_USER", "portal")
        .env("DB_PASS", "hunter2")
        .arg("config")
        .assert()
        .success()
        .stdout(contains("portal@db.example.com:1521/ORCL"))
        .stdout(contains("hunter2").not());
}

#[test]
fn log_file_option_redirects_logs() {
    let env = TestEnv::new();
    let log = env.tmp.path().join("portal.log");

    env.cmd()
        .args(["search", POLICY, "--log-level", "debug", "--log-file"])
        .arg(&log)
        .assert()
        .success();

    assert!(log.exists());
}
