//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::process::{Command, Stdio};

fn crumbs() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_crumbs"));
    cmd.env_remove("CRUMBS_RECORD").env_remove("CRUMBS_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn run_crumbs(args: &[&str]) -> std::process::Output {
    crumbs().args(args).output().expect("failed to run crumbs binary")
}

#[test]
fn trail_prints_the_repository_trail() {
    let output = run_crumbs(&["trail", "/repository/acme/widgets"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("/repository/acme/widgets\n"));
    assert!(stdout.contains("Repository"));
    assert!(stdout.contains("-> /organization/acme"));
    assert!(stdout.contains("* widgets"));
}

#[test]
fn list_pages_print_no_breadcrumbs() {
    let output = run_crumbs(&["trail", "/organization"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("(no breadcrumbs)"));
}

#[test]
fn trail_json_shares_history_between_visits() {
    let output = run_crumbs(&[
        "trail",
        "--json",
        "/organization/acme",
        "/repository/acme/widgets",
        "/repository/acme/widgets/tag/v1",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let visits: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(visits.len(), 3);
    // Drilled down from the organization page, so the head stays "organization".
    assert_eq!(visits[2]["trail"][0]["title"], "organization");
    assert_eq!(visits[2]["trail"][3]["title"], "v1");
    assert_eq!(visits[2]["trail"][3]["active"], true);
}

#[test]
fn trail_reads_paths_from_stdin() {
    let mut child = crumbs()
        .args(["trail", "--stdin", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn crumbs binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"# visits\n/organization/acme\n/organization/acme/teams/devs\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 2);
}

#[test]
fn resolve_rewrites_shorthand_urls() {
    let output = run_crumbs(&["resolve", "/acme/widgets?tab=tags"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "redirect /repository/acme/widgets?tab=tags\n");

    let output = run_crumbs(&["resolve", "/user/alice"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "passthrough\n");
}

#[test]
fn config_file_reserves_extra_prefixes() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("crumbs.yaml");
    std::fs::write(&config, "reserved_prefixes: [billing]\noutput: json\n").unwrap();

    let output = crumbs()
        .env("CRUMBS_CONFIG", &config)
        .args(["resolve", "/billing/plans"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{\"kind\":\"passthrough\"}\n");
}

#[test]
fn broken_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("crumbs.yaml");
    std::fs::write(&config, "output: [not, a, format]\n").unwrap();

    let output = crumbs().env("CRUMBS_CONFIG", &config).args(["routes"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config file"));
}

#[test]
fn routes_lists_the_table() {
    let output = run_crumbs(&["routes"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("repositoryDetail"));
    assert!(stdout.contains("/organization/:organizationName/teams/:teamName"));
    assert!(stdout.contains("Reserved prefixes:"));
}

#[test]
fn trail_without_paths_shows_error() {
    let output = run_crumbs(&["trail"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("PATH"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_crumbs(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
