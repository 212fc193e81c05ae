//! Config layering: defaults < TOML file < environment.

use serde_json::Value;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

const VARS: &[&str] = &[
    "SHOWDOWN_CONFIG",
    "SHOWDOWN_SEED",
    "SHOWDOWN_PLAYERS",
    "SHOWDOWN_LOG",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn set_env(key: &str, value: impl AsRef<std::ffi::OsStr>) {
    unsafe {
        std::env::set_var(key, value);
    }
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["showdown"];
    argv.extend_from_slice(args);
    let code = showdown_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn cfg_json() -> Value {
    let (code, out, err) = run(&["cfg"]);
    assert_eq!(code, 0, "cfg failed: {err}");
    serde_json::from_str(&out).unwrap()
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["players"]["value"], serde_json::json!(["Alex", "Bob", "Jane"]));
    assert_eq!(json["players"]["source"], "default");
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["log_level"]["value"], "warn");
}

#[test]
#[serial]
fn file_overrides_defaults() {
    clear_env();
    let file = config_file("seed = 456\nplayers = [\"Ann\", \"Ben\"]\n");
    set_env("SHOWDOWN_CONFIG", file.path());

    let json = cfg_json();
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["players"]["value"], serde_json::json!(["Ann", "Ben"]));
    assert_eq!(json["players"]["source"], "file");
    assert_eq!(json["log_level"]["source"], "default");
    clear_env();
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let file = config_file("seed = 456\nlog_level = \"info\"\n");
    set_env("SHOWDOWN_CONFIG", file.path());
    set_env("SHOWDOWN_SEED", "789");
    set_env("SHOWDOWN_PLAYERS", "Xia, Yan");

    let json = cfg_json();
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["players"]["value"], serde_json::json!(["Xia", "Yan"]));
    assert_eq!(json["players"]["source"], "env");
    assert_eq!(json["log_level"]["value"], "info");
    assert_eq!(json["log_level"]["source"], "file");
    clear_env();
}

#[test]
#[serial]
fn deal_uses_configured_table_and_seed() {
    clear_env();
    set_env("SHOWDOWN_SEED", "99");
    set_env("SHOWDOWN_PLAYERS", "Ann,Ben");

    let (code, out, err) = run(&["deal"]);
    assert_eq!(code, 0, "deal failed: {err}");
    assert!(out.starts_with("Seed: 99\n"));
    assert!(out.contains("Hole Ann: "));
    assert!(!out.contains("Alex"));

    // flags win over configuration
    let (_, flagged, _) = run(&["deal", "--seed", "5", "--players", "Cy,Di"]);
    assert!(flagged.starts_with("Seed: 5\n"));
    assert!(flagged.contains("Hole Cy: "));
    clear_env();
}

#[test]
#[serial]
fn invalid_env_seed_is_a_config_error() {
    clear_env();
    set_env("SHOWDOWN_SEED", "not-a-number");
    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert_eq!(err, "Error: Configuration error: Invalid seed: not-a-number\n");

    let (code, _, _) = run(&["deal"]);
    assert_eq!(code, 2);
    clear_env();
}

#[test]
#[serial]
fn single_player_table_is_rejected() {
    clear_env();
    set_env("SHOWDOWN_PLAYERS", "Solo");
    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert_eq!(
        err,
        "Error: Configuration error: players must number 2..=22, got 1\n"
    );
    clear_env();
}

#[test]
#[serial]
fn unreadable_config_file_is_an_error() {
    clear_env();
    let file = config_file("seed = \"oops\"\n");
    set_env("SHOWDOWN_CONFIG", file.path());
    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));

    set_env("SHOWDOWN_CONFIG", "/definitely/missing/showdown.toml");
    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"));
    clear_env();
}

#[test]
#[serial]
fn unknown_log_level_is_rejected() {
    clear_env();
    set_env("SHOWDOWN_LOG", "chatty");
    let (code, _, err) = run(&["eval", "--hole", "Ac Kd"]);
    assert_eq!(code, 2);
    assert!(err.contains("unknown log level"));
    clear_env();
}
