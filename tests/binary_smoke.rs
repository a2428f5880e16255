// use macro form directly; no import needed
use std::process::Command;

#[test]
fn binary_print_config_succeeds() {
    let me = assert_cmd::cargo::cargo_bin!("edmv");
    let out = Command::new(me)
        .arg("--print-config")
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --print-config");
}

#[test]
fn binary_help_mentions_stdin_source() {
    let me = assert_cmd::cargo::cargo_bin!("edmv");
    let out = Command::new(me).arg("--help").output().expect("spawn binary");
    assert!(out.status.success());
    let help = String::from_utf8_lossy(&out.stdout);
    assert!(help.contains("--dry-run"), "{help}");
    assert!(help.contains("stdin"), "{help}");
}
