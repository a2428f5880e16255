//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel and PreviewStyle are small user-facing enums with parsing helpers.

use std::fmt;
use std::str::FromStr;
use std::path::PathBuf;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// One line per applied move (default)
    #[default]
    Normal,
    /// Also directory creation and pruning details
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into a LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// How the edited listing is shown before asking for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PreviewStyle {
    /// Indented tree with connectors
    #[default]
    Tree,
    /// Single-line `dir{child, child}` form
    Flat,
    /// No preview, only the list of moves
    #[value(name = "none", alias = "off")]
    Off,
}

impl fmt::Display for PreviewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PreviewStyle::Tree => "tree",
            PreviewStyle::Flat => "flat",
            PreviewStyle::Off => "none",
        })
    }
}

impl FromStr for PreviewStyle {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(PreviewStyle::Tree),
            "flat" => Ok(PreviewStyle::Flat),
            "none" | "off" => Ok(PreviewStyle::Off),
            _ => Err(format!("invalid preview style: '{s}'")),
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Editor command; falls back to $VISUAL / $EDITOR when unset
    pub editor: Option<String>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Sort the listing before editing instead of keeping walk order
    pub sort: bool,
    pub preview: PreviewStyle,
    /// Apply without asking
    pub assume_yes: bool,
    /// Show the planned moves, change nothing
    pub dry_run: bool,
}
