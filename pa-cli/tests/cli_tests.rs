use assert_cmd::{cargo_bin_cmd, Command};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn presence_cli() -> Command {
    let mut cmd = cargo_bin_cmd!("presence-cli");
    cmd.env_remove("PRESENCE_API_URL");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    presence_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            contains("users")
                .and(contains("months"))
                .and(contains("start-end"))
                .and(contains("top5"))
                .and(contains("presence-weekday")),
        );
}

#[test]
fn test_missing_user_id_is_rejected() {
    presence_cli()
        .arg("start-end")
        .assert()
        .failure()
        .stderr(contains("<USER_ID>"));
}

#[test]
fn test_unknown_format_is_rejected() {
    presence_cli()
        .args(["--format", "xml", "users"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_invalid_api_url_fails() {
    presence_cli()
        .args(["--api-url", "not a url", "users"])
        .assert()
        .failure()
        .stderr(contains("invalid base url"));
}

#[test]
fn test_unreachable_server_fails() {
    presence_cli()
        .args(["--api-url", "http://127.0.0.1:9", "--timeout-secs", "2", "months"])
        .assert()
        .failure()
        .stderr(contains("Failed to list months"));
}

#[test]
fn test_api_url_from_env() {
    presence_cli()
        .env("PRESENCE_API_URL", "http://127.0.0.1:9")
        .args(["--timeout-secs", "2", "avatar", "10"])
        .assert()
        .failure()
        .stderr(contains("No avatar for user 10"));
}
