use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn help_lists_connection_options() {
    let mut cmd = cargo_bin_cmd!("roster");
    let output = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&output);
    for flag in ["--api-url", "--per-page", "--timeout", "--yes", "--demo"] {
        assert!(text.contains(flag), "help missing {}", flag);
    }
}

#[test]
fn rejects_malformed_timeout() {
    let mut cmd = cargo_bin_cmd!("roster");
    cmd.args(["--timeout", "soon", "--demo"])
        .assert()
        .failure()
        .stderr(contains("--timeout"));
}

#[test]
fn rejects_out_of_range_page_size() {
    let mut cmd = cargo_bin_cmd!("roster");
    cmd.args(["--per-page", "500", "--demo", "--env-file", "/nonexistent/.env"])
        .env_remove("ROSTER_PER_PAGE")
        .assert()
        .failure()
        .stderr(contains("invalid configuration"));
}
