//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the interrupt handler,
//! gathers the listing, runs the editor, previews and confirms the plan, then
//! hands it to the transform engine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use tracing::{debug, error, info, warn};

use edmv::cli::Args;
use edmv::config::{create_template_config, load_config, validate_root, CONFIG_ENV};
use edmv::editor::{edit_listing, resolve_editor};
use edmv::output as out;
use edmv::shutdown::{self, Phase};
use edmv::{
    default_config_path, prune, Config, EdmvError, PathList, PathTree, PreviewStyle, Prompt,
    RenamePlan, Transform,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config / --init-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }
    if args.init_config {
        let path = default_config_path()?;
        create_template_config(&path)?;
        out::print_success(&format!("A template edmv config was written to: {}", path.display()));
        out::print_info("CLI flags still override anything set there.");
        return Ok(());
    }

    let mut cfg = match load_config()? {
        Some((_, cfg)) => cfg,
        None => Config::default(),
    };
    args.apply_overrides(&mut cfg);

    // Initialize logging and capture the guard so the handler can flush it
    let guard_opt = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            match shutdown::phase() {
                Phase::Idle => {
                    out::print_warn("Received interrupt; nothing was changed.");
                    if let Ok(mut g) = guard_slot.lock() {
                        let _ = g.take(); // drop guard here to flush tracing_appender
                    }
                    std::process::exit(130);
                }
                Phase::Editing => {
                    out::print_warn("Received interrupt; stopping once the editor exits.");
                }
                Phase::Applying => {
                    out::print_warn("Received interrupt; moves in progress cannot be cancelled midway.");
                }
            }
        })?;
    }

    debug!("Starting edmv: {:?}", args);

    // Main run (so we can drop guard after)
    let result = (|| -> Result<()> {
        let (root, listing) = gather_listing(&args, cfg.sort)?;
        if listing.is_empty() {
            out::print_info(&format!("No files found under {}", root.display()));
            return Ok(());
        }
        info!(root = %root.display(), files = listing.len(), "listing ready");

        let editor = resolve_editor(cfg.editor.as_deref());
        shutdown::set_phase(Phase::Editing);
        let edited = edit_listing(&editor, &listing);
        shutdown::set_phase(Phase::Idle);
        let edited = edited?;
        if shutdown::is_requested() {
            return Err(EdmvError::Interrupted.into());
        }

        preview(&edited, cfg.preview)?;

        let plan = match prune(listing, edited) {
            Ok(plan) => plan,
            Err(EdmvError::NoOp) => {
                out::print_info("Nothing to do: no line was changed.");
                return Ok(());
            }
            Err(e) => {
                error!(code = e.code(), kind = e.kind(), "{e}");
                out::print_info("Keep one line per file and do not add, remove or reorder lines.");
                return Err(e.into());
            }
        };

        for (from, to) in plan.pairs() {
            out::print_user(&out::format_move(from, to));
        }

        if cfg.dry_run {
            out::print_info(&format!("Dry-run: {} move(s) planned, nothing changed.", plan.len()));
            return Ok(());
        }

        if !cfg.assume_yes && !confirm_plan(&plan, args.reads_stdin())? {
            out::print_info("Aborted; nothing changed.");
            return Ok(());
        }
        if shutdown::is_requested() {
            return Err(EdmvError::Interrupted.into());
        }

        shutdown::set_phase(Phase::Applying);
        let applied = Transform::new(&root).apply(&plan);
        shutdown::set_phase(Phase::Idle);
        match applied {
            Ok(report) => {
                info!(
                    moved = report.moved,
                    copied = report.copied,
                    dirs_created = report.dirs_created,
                    "Transform completed"
                );
                out::print_success(&format!(
                    "{} file(s) moved ({} via copy), {} director(y/ies) created",
                    report.moved, report.copied, report.dirs_created
                ));
                Ok(())
            }
            Err(e) => {
                match &e {
                    EdmvError::Conflict(path) => {
                        error!(code = e.code(), kind = e.kind(), path = %path.display(), "Transform stopped")
                    }
                    EdmvError::DirectoryCreate { path, .. } => {
                        error!(code = e.code(), kind = e.kind(), path = %path.display(), error = %e, "Transform stopped")
                    }
                    EdmvError::CopyFallback { from, to, .. } => {
                        error!(code = e.code(), kind = e.kind(), from = %from.display(), to = %to.display(), error = %e, "Transform stopped")
                    }
                    _ => error!(code = e.code(), kind = e.kind(), error = %e, "Transform stopped"),
                }
                warn!("moves before the failing pair remain applied");
                Err(e.into())
            }
        }
    })();

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn print_config_location() {
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {}\n", cfg_env));
        out::print_info(&format!("To override, unset {CONFIG_ENV} or set it to another file."));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default edmv config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run with --init-config to create a template.");
            }
        }
        Err(e) => {
            out::print_error(&format!("Could not determine a default config path: {e}"));
        }
    }
}

/// Working root plus the listing to edit, from stdin or a directory walk.
fn gather_listing(args: &Args, sort: bool) -> Result<(PathBuf, PathList)> {
    let (root, mut listing) = if args.reads_stdin() {
        let root = validate_root(&std::env::current_dir()?)?;
        (root, PathList::from_reader(io::stdin().lock())?)
    } else {
        let root = validate_root(&args.source)?;
        let listing = PathList::from_directory_walk(&root)?;
        (root, listing)
    };
    if sort {
        listing.sort();
    }
    Ok((root, listing))
}

fn preview(edited: &PathList, style: PreviewStyle) -> Result<()> {
    let tree = PathTree::build(edited);
    let stdout = io::stdout();
    let mut w = stdout.lock();
    match style {
        PreviewStyle::Tree => tree.render_tree(&mut w)?,
        PreviewStyle::Flat => tree.render_flat(&mut w)?,
        PreviewStyle::Off => {}
    }
    w.flush()?;
    Ok(())
}

/// Ask before touching anything. Reads the terminal when stdin held the listing.
fn confirm_plan(plan: &RenamePlan, stdin_consumed: bool) -> Result<bool> {
    let prompt = Prompt::yes_no(format!("Apply {} move(s)?", plan.len()), false);
    let mut stderr = io::stderr();
    if !stdin_consumed {
        return Ok(prompt.confirm(&mut io::stdin().lock(), &mut stderr)?);
    }
    let mut tty = open_terminal()?;
    Ok(prompt.confirm(&mut tty, &mut stderr)?)
}

#[cfg(unix)]
fn open_terminal() -> Result<Box<dyn BufRead>> {
    match std::fs::File::open("/dev/tty") {
        Ok(f) => Ok(Box::new(io::BufReader::new(f))),
        Err(e) => {
            debug!(error = %e, "no controlling terminal");
            bail!("stdin held the listing and no terminal is available for confirmation; pass --yes to apply")
        }
    }
}

#[cfg(not(unix))]
fn open_terminal() -> Result<Box<dyn BufRead>> {
    bail!("stdin held the listing; pass --yes to apply without a prompt")
}
