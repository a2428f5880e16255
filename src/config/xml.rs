//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! A missing file means "use defaults". A present but malformed file, or one
//! with unknown fields, is an error: silently ignoring a typo in the config
//! would run with settings the user did not ask for.

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel, PreviewStyle};
use crate::platform::{set_dir_mode_0700, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    editor: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    sort: Option<bool>,
    preview: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

// Map XmlConfig -> Config, starting from defaults.
fn xml_to_config(parsed: XmlConfig, path: &Path) -> Result<Config> {
    let mut cfg = Config::default();

    cfg.editor = non_empty(parsed.editor.as_deref()).map(str::to_owned);
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);
    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s
            .parse::<LogLevel>()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("in config '{}'", path.display()))?;
    }
    if let Some(s) = non_empty(parsed.preview.as_deref()) {
        cfg.preview = s
            .parse::<PreviewStyle>()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("in config '{}'", path.display()))?;
    }
    cfg.sort = parsed.sort.unwrap_or(false);

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    if contents.trim().is_empty() {
        debug!(path = %path.display(), "config file is empty; using defaults");
        return Ok(Config::default());
    }
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed, path)
}

/// Load the config from its usual location. `Ok(None)` when no file exists.
pub fn load_config() -> Result<Option<(PathBuf, Config)>> {
    let path = default_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(None);
    }
    let cfg = load_config_from_xml_path(&path)?;
    Ok(Some((path, cfg)))
}

/// Write a commented template config to `path`. Refuses to overwrite.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("config file already exists: {}", path.display());
    }
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
        let _ = set_dir_mode_0700(parent);
    }

    let content = "<!--\n  edmv configuration (XML)\n\n    editor     -> command used to edit the listing (default: $VISUAL, then $EDITOR)\n    log_level  -> quiet | normal | info | debug\n    log_file   -> path to a log file (optional; stderr is always used)\n    sort       -> true to sort the listing before editing (default: walk order)\n    preview    -> tree | flat | none\n\n  CLI flags override these values.\n-->\n<config>\n  <editor></editor>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n  <sort>false</sort>\n  <preview>tree</preview>\n</config>\n";

    write_config_secure_new_0600(path, content.as_bytes())?;
    info!("Created template config at {}", path.display());
    Ok(())
}
