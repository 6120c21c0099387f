// Wed Jan 15 2026 - Alex

#![cfg(unix)]

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn beast() -> Command {
    Command::new(env!("CARGO_BIN_EXE_beast"))
}

fn accounts_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "\"from_host_username\",\"from_host_password\",\"to_host_username\",\"to_host_password\"\n\
         \"a@example.org\",\"pw1\"\n\
         \"b@example.org\",\"pw2\",\"b@example.net\",\"pw3\"\n\
         \"c@example.org\",\"it's; rm -rf /\"\n"
    )
    .unwrap();
    file
}

#[test]
fn test_only_assemble_prints_one_command_per_account() {
    let file = accounts_file();
    let output = beast()
        .args(["--source-host", "h1", "--dest-host", "h2", "-o", "--dry-run", "--no-color"])
        .arg("--command-template")
        .arg("/nonexistent/imapsync --user1 {account.source_username} --password1 {account.source_password}")
        .arg("--accounts-file")
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], r#"/nonexistent/imapsync --user1 c@example.org --password1 'it'\''s; rm -rf /' --dry"#);
}

#[test]
fn test_launch_failure_sets_exit_code() {
    let file = accounts_file();
    let output = beast()
        .args(["--source-host", "h1", "--dest-host", "h2", "--no-color", "--workers", "2"])
        .args(["--command-template", "/nonexistent/imapsync {account.source_username}"])
        .arg("--accounts-file")
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Could not run (3)"));
}

#[test]
fn test_failed_syncs_do_not_change_exit_code() {
    let file = accounts_file();
    let output = beast()
        .args(["--source-host", "h1", "--dest-host", "h2", "--no-color"])
        .args(["--command-template", "false"])
        .arg("--accounts-file")
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Failed (3)"));
}

#[test]
fn test_unknown_template_field_is_a_configuration_error() {
    let file = accounts_file();
    let output = beast()
        .args(["--source-host", "h1", "--dest-host", "h2"])
        .args(["--command-template", "imapsync --host1 {from_host}"])
        .arg("--accounts-file")
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("from_host"));
}

#[test]
fn test_print_example_needs_no_hosts() {
    let output = beast().arg("-e").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("from_host_username"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout_is_an_output_error() {
    let file = accounts_file();
    let full = std::fs::OpenOptions::new().write(true).open("/dev/full").unwrap();
    let status = beast()
        .args(["--source-host", "h1", "--dest-host", "h2", "-o"])
        .arg("--accounts-file")
        .arg(file.path())
        .stdout(full)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(3));
}
