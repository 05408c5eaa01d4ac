// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drives the compiled binary end to end.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{TempDir, tempdir};

const ACCOUNT: &str = "alice@example.com";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_vaultkeep"))
}

/// Temp dir holding a config file that points the database inside it.
fn workspace() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("data").join("vault.db");
    let config_path = dir.path().join("vaultkeep.toml");
    let contents = format!(
        "[client]\nlog_level = \"warn\"\n\n[kdf]\niterations = 300000\n\n[storage]\ndatabase_path = {:?}\n",
        db_path.to_string_lossy()
    );
    std::fs::write(&config_path, contents).unwrap();
    (dir, config_path)
}

fn run(dir: &Path, config: &Path, master_password: &str, args: &[&str]) -> Output {
    Command::new(bin())
        .current_dir(dir)
        .arg("--config")
        .arg(config)
        .arg("--account")
        .arg(ACCOUNT)
        .args(args)
        .env("VAULTKEEP_MASTER_PASSWORD", master_password)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn generate_respects_class_flags() {
    let (dir, config) = workspace();
    let output = run(
        dir.path(),
        &config,
        "unused",
        &[
            "generate",
            "--length",
            "20",
            "--no-lowercase",
            "--no-numbers",
            "--no-symbols",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let password = stdout(&output).trim().to_string();
    assert_eq!(password.len(), 20);
    assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    assert!(stderr(&output).contains("strength:"));
}

#[test]
fn strength_prints_score_and_label() {
    let (dir, config) = workspace();
    let output = run(dir.path(), &config, "unused", &["strength", "Abcdefgh1!"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "strength: 5/7 Good");
}

#[test]
fn gen_secret_prints_64_hex_chars() {
    let (dir, config) = workspace();
    let output = run(dir.path(), &config, "unused", &["gen-secret"]);
    assert!(output.status.success());
    let secret = stdout(&output).trim().to_string();
    assert_eq!(secret.len(), 64);
    assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn config_check_reports_weak_kdf() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("weak.toml");
    std::fs::write(&config, "[kdf]\niterations = 1000\n").unwrap();
    let output = run(dir.path(), &config, "unused", &["config", "check"]);
    assert!(!output.status.success());
    let text = stderr(&output);
    assert!(text.contains("iterations"));
    assert!(text.contains("vaultkeep: configuration error"));
}

#[test]
fn config_check_prints_summary() {
    let (dir, config) = workspace();
    let output = run(dir.path(), &config, "unused", &["config", "check"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("configuration OK"));
    assert!(text.contains("pbkdf2-sha256 (300000 iterations)"));
}

#[test]
fn item_lifecycle() {
    let (dir, config) = workspace();
    let master = "correct horse battery staple";

    let added = run(
        dir.path(),
        &config,
        master,
        &[
            "add",
            "--title",
            "Mail",
            "--username",
            "alice",
            "--password",
            "hunter2-distinctive",
        ],
    );
    assert!(added.status.success(), "stderr: {}", stderr(&added));
    let id = stdout(&added)
        .trim()
        .strip_prefix("added ")
        .unwrap()
        .to_string();

    let listed = run(dir.path(), &config, master, &["list"]);
    assert!(listed.status.success());
    let text = stdout(&listed);
    assert!(text.contains(&id));
    assert!(text.contains("Mail"));
    assert!(text.contains("hunt...tive"));
    assert!(!text.contains("hunter2-distinctive"));

    let edited = run(
        dir.path(),
        &config,
        master,
        &["edit", &id, "--username", "bob"],
    );
    assert!(edited.status.success(), "stderr: {}", stderr(&edited));

    let shown = run(dir.path(), &config, master, &["get", &id, "--show"]);
    assert!(shown.status.success());
    let text = stdout(&shown);
    assert!(text.contains("username: bob"));
    assert!(text.contains("password: hunter2-distinctive"));
    assert!(text.contains("title:    Mail"));

    let wrong = run(dir.path(), &config, "not the master password", &["get", &id]);
    assert!(!wrong.status.success());
    assert!(stderr(&wrong).contains("decryption failed"));

    let removed = run(dir.path(), &config, master, &["rm", &id]);
    assert!(removed.status.success());
    assert_eq!(stdout(&removed).trim(), format!("deleted {id}"));

    let gone = run(dir.path(), &config, master, &["get", &id]);
    assert!(!gone.status.success());
    assert!(stderr(&gone).contains("not found"));
}

#[test]
fn wrong_master_password_cannot_add_or_list() {
    let (dir, config) = workspace();
    let master = "correct horse battery staple";
    let first = run(
        dir.path(),
        &config,
        master,
        &["add", "--title", "Mail", "--password", "mail-pw"],
    );
    assert!(first.status.success(), "stderr: {}", stderr(&first));

    let typo = "correct horse battery stapel";
    let refused = run(
        dir.path(),
        &config,
        typo,
        &["add", "--title", "Bank", "--password", "bank-pw"],
    );
    assert!(!refused.status.success());
    assert!(stderr(&refused).contains("decryption failed"));

    let listed = run(dir.path(), &config, typo, &["list"]);
    assert!(!listed.status.success());

    let listed = run(dir.path(), &config, master, &["list"]);
    assert!(listed.status.success());
    let text = stdout(&listed);
    assert!(text.contains("Mail"));
    assert!(!text.contains("Bank"));
}

#[test]
fn database_holds_no_plaintext() {
    let (dir, config) = workspace();
    let output = run(
        dir.path(),
        &config,
        "master password",
        &[
            "add",
            "--title",
            "Bank",
            "--password",
            "plaintext-canary-value",
            "--notes",
            "canary-notes",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let db_dir = dir.path().join("data");
    for entry in std::fs::read_dir(&db_dir).unwrap() {
        let bytes = std::fs::read(entry.unwrap().path()).unwrap();
        let haystack = String::from_utf8_lossy(&bytes);
        assert!(!haystack.contains("plaintext-canary-value"));
        assert!(!haystack.contains("canary-notes"));
        assert!(!haystack.contains("Bank"));
    }
}

#[test]
fn missing_account_fails_cleanly() {
    let (dir, config) = workspace();
    let output = Command::new(bin())
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("list")
        .env("VAULTKEEP_MASTER_PASSWORD", "whatever")
        .env_remove("VAULTKEEP_CLIENT_ACCOUNT")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no account given"));
}
