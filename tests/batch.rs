// Tue Jan 13 2026 - Alex

#![cfg(unix)]

use beast::{AccountLoader, Orchestrator, Reporter, SyncParameters};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "from_host_username,from_host_password,to_host_username,to_host_password\n";

fn accounts_file(rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# migration batch\n{}{}", HEADER, rows).unwrap();
    file
}

#[test]
fn test_two_account_batch_resolves_destinations() {
    let file = accounts_file("a,pw1,,\nb,pw2,c,pw3\n");
    let accounts = AccountLoader::new(file.path()).load().unwrap();

    let params = SyncParameters::new("h1", "h2")
        .with_workers(2)
        .with_command_template("sh -c 'test -n \"$1\"' sync {account.dest_username}");
    let outcome = Orchestrator::new(&params).unwrap().run(accounts);

    assert_eq!(outcome.total(), 2);
    assert_eq!(outcome.succeeded_count(), 2);

    let mut results = outcome.results.clone();
    results.sort_by(|x, y| x.account.source_username().cmp(y.account.source_username()));

    assert_eq!(results[0].account.dest_username(), "a");
    assert_eq!(results[1].account.dest_username(), "c");
    assert!(results.iter().all(|r| r.source_host == "h1" && r.dest_host == "h2"));
}

#[test]
fn test_hostile_password_reaches_child_as_one_argument() {
    let dir = tempfile::tempdir().unwrap();
    let file = accounts_file("eve,\"x; touch pwned #\",,\n");
    let accounts = AccountLoader::new(file.path()).load().unwrap();

    let params = SyncParameters::new("h1", "h2")
        .with_workers(1)
        .with_logging(dir.path().join("log"))
        .with_command_template("sh -c 'printf \"%s|\" \"$@\"' sync {account.source_password} {dest_port}");
    let outcome = Orchestrator::new(&params).unwrap().run(accounts);

    let result = &outcome.results[0];
    assert!(result.succeeded);

    let logged = fs::read_to_string(result.log_file.as_ref().unwrap()).unwrap();
    assert_eq!(logged, "x; touch pwned #|993|");
}

#[test]
fn test_report_for_mixed_batch() {
    let file = accounts_file("good,pw\nbad,pw\n");
    let accounts = AccountLoader::new(file.path()).load().unwrap();

    let params = SyncParameters::new("h1", "h2")
        .with_workers(2)
        .with_command_template("sh -c 'test \"$1\" = good' sync {account.source_username}");
    let outcome = Orchestrator::new(&params).unwrap().run(accounts);

    let mut out = Vec::new();
    Reporter::new().write(&outcome, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let bad = text.find("h1::bad").unwrap();
    let good = text.find("h1::good").unwrap();
    assert!(bad < good);
    assert!(text.lines().last().unwrap().starts_with("Total duration: "));
}
