//! Round trip through the user's text editor.
//!
//! The listing is written to a scratch file, the editor runs on it in the
//! foreground, and the file is read back with the same line rules.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::errors::EdmvError;
use crate::fs_ops::io_error_with_help;
use crate::listing::PathList;

#[cfg(windows)]
const FALLBACK_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const FALLBACK_EDITOR: &str = "vi";

/// Editor command: configured value, then `$VISUAL`, then `$EDITOR`, then a platform default.
pub fn resolve_editor(configured: Option<&str>) -> String {
    let non_blank = |s: &str| !s.trim().is_empty();
    configured
        .filter(|s| non_blank(s))
        .map(str::to_owned)
        .or_else(|| env::var("VISUAL").ok().filter(|s| non_blank(s)))
        .or_else(|| env::var("EDITOR").ok().filter(|s| non_blank(s)))
        .unwrap_or_else(|| FALLBACK_EDITOR.to_owned())
}

/// Let the user edit `listing` and return what they saved.
pub fn edit_listing(editor: &str, listing: &PathList) -> Result<PathList> {
    let mut scratch = tempfile::Builder::new()
        .prefix("edmv-")
        .suffix(".txt")
        .tempfile()
        .context("create scratch file for editing")?;
    let path = scratch.path().to_path_buf();

    scratch
        .write_all(listing.to_lines().as_bytes())
        .and_then(|()| scratch.flush())
        .map_err(io_error_with_help("write scratch file", &path))?;

    run_editor(editor, &path)?;

    // Re-read by path: many editors replace the file instead of writing in place.
    let text = fs::read_to_string(&path).map_err(io_error_with_help("read back scratch file", &path))?;
    let edited = PathList::from_lines(&text);
    debug!(lines = edited.len(), "read edited listing");
    Ok(edited)
}

/// Run `editor` (program plus leading arguments) on `file` and wait for it.
pub fn run_editor(editor: &str, file: &Path) -> Result<()> {
    let mut words = editor.split_whitespace();
    let Some(program) = words.next() else {
        bail!("editor command is empty");
    };

    let mut cmd = Command::new(program);
    cmd.args(words).arg(file);
    if let Some(tty) = terminal_stdin() {
        cmd.stdin(tty);
    }

    info!(editor, file = %file.display(), "launching editor");
    let status = cmd
        .status()
        .with_context(|| format!("launch editor '{editor}'"))?;
    if !status.success() {
        return Err(EdmvError::Editor {
            editor: editor.to_owned(),
            status,
        }
        .into());
    }
    Ok(())
}

/// When stdin was consumed as the listing source, hand the editor the terminal instead.
fn terminal_stdin() -> Option<Stdio> {
    if atty::is(atty::Stream::Stdin) {
        return None;
    }
    #[cfg(unix)]
    {
        fs::File::open("/dev/tty").ok().map(Stdio::from)
    }
    #[cfg(not(unix))]
    {
        None
    }
}
