use clap::Parser;
use edmv::cli::Args;
use edmv::config::types::{Config, LogLevel, PreviewStyle};
use std::path::PathBuf;

#[test]
fn source_defaults_to_current_directory() {
    let args = Args::parse_from(["edmv"]);
    assert_eq!(args.source, PathBuf::from("."));
    assert!(!args.reads_stdin());
}

#[test]
fn dash_means_stdin() {
    let args = Args::parse_from(["edmv", "-"]);
    assert!(args.reads_stdin());
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["edmv", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["edmv", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["edmv"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = Args::try_parse_from(["edmv", "--log-level", "bogus"]).unwrap_err();
    assert!(err.to_string().contains("invalid log level"), "{err}");
    // Aliases accepted by the config file work on the command line too.
    let args = Args::parse_from(["edmv", "--log-level", "VERBOSE"]);
    assert_eq!(args.log_level, Some(LogLevel::Info));
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "edmv",
        "--editor",
        "nano -w",
        "--log-level",
        "info",
        "--log-file",
        "/tmp/edmv.log",
        "--preview",
        "flat",
        "--sort",
        "-y",
        "--dry-run",
        "some/dir",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.editor.as_deref(), Some("nano -w"));
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/edmv.log")));
    assert_eq!(cfg.preview, PreviewStyle::Flat);
    assert!(cfg.sort);
    assert!(cfg.assume_yes);
    assert!(cfg.dry_run);
    assert_eq!(args.source, PathBuf::from("some/dir"));
}

#[test]
fn unset_flags_keep_config_values() {
    let args = Args::parse_from(["edmv"]);
    let mut cfg = Config {
        editor: Some("hx".into()),
        log_level: LogLevel::Quiet,
        sort: true,
        preview: PreviewStyle::Off,
        ..Config::default()
    };
    let before = cfg.clone();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg, before);
}

#[test]
fn preview_accepts_none_and_off() {
    let args = Args::parse_from(["edmv", "--preview", "none"]);
    assert_eq!(args.preview, Some(PreviewStyle::Off));
    let args = Args::parse_from(["edmv", "--preview", "off"]);
    assert_eq!(args.preview, Some(PreviewStyle::Off));
    assert!(Args::try_parse_from(["edmv", "--preview", "sideways"]).is_err());
}

#[test]
fn print_and_init_config_conflict() {
    assert!(Args::try_parse_from(["edmv", "--print-config", "--init-config"]).is_err());
}
