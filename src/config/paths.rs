//! Default path helpers and symlink checks.
//! Determines the config file location and detects symlinked ancestors for safety.

use anyhow::{anyhow, Context, Result};
use dirs::config_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "EDMV_CONFIG";

/// Config file path: `$EDMV_CONFIG` if set (relative values resolve against
/// the current directory), else `<config dir>/edmv/config.xml`.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        let p = PathBuf::from(p);
        if p.is_absolute() {
            return Ok(p);
        }
        let cwd = env::current_dir().context("resolve current directory for EDMV_CONFIG")?;
        return Ok(cwd.join(p));
    }

    if let Some(mut base) = config_dir() {
        base.push("edmv");
        base.push("config.xml");
        return Ok(base);
    }
    env::var_os("HOME")
        .map(|h| PathBuf::from(h).join(".config").join("edmv").join("config.xml"))
        .ok_or_else(|| anyhow!("cannot determine a config directory (no config dir and no HOME)"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        if let Ok(meta) = fs::symlink_metadata(anc) {
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
