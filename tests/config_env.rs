//! FILE_RENAMER_CONFIG handling. These tests mutate process-wide state (env, cwd)
//! and must run serially.

use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use file_renamer::config::CONFIG_ENV;
use file_renamer::{LogLevel, default_config_path, load_config};

#[test]
#[serial]
fn explicit_config_is_loaded() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("custom.xml");
    fs::write(&cfg_path, "<config><log_level>quiet</log_level></config>").unwrap();

    unsafe { std::env::set_var(CONFIG_ENV, &cfg_path) };
    let cfg = load_config();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(cfg.unwrap().log_level, LogLevel::Quiet);
}

#[test]
#[serial]
fn explicit_missing_config_is_an_error() {
    let td = tempdir().unwrap();
    let missing = td.path().join("absent.xml");

    unsafe { std::env::set_var(CONFIG_ENV, &missing) };
    let res = load_config();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    let err = res.unwrap_err();
    assert!(err.to_string().contains("missing file"), "got: {err}");
}

#[test]
#[serial]
fn relative_env_path_is_resolved_against_cwd() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let prev = std::env::current_dir().unwrap();
    std::env::set_current_dir(&base).expect("chdir to temp base");

    unsafe { std::env::set_var(CONFIG_ENV, "rel_config.xml") };
    let resolved = default_config_path();
    unsafe { std::env::remove_var(CONFIG_ENV) };
    std::env::set_current_dir(prev).unwrap();

    assert_eq!(resolved.unwrap(), base.join("rel_config.xml"));
}
