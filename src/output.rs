//! User-facing terminal messages.
//!
//! Status lines go to stderr with a colored prefix when stderr is a TTY, so
//! stdout only carries the preview and the `from -> to` lines users may
//! pipe elsewhere.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "info:".cyan().bold(), msg);
    } else {
        eprintln!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "ok:".green().bold(), msg);
    } else {
        eprintln!("ok: {}", msg);
    }
}

/// Plain line on stdout, no prefix.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// `from -> to`, arrow dimmed on a TTY.
pub fn format_move(from: &str, to: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        format!("{} {} {}", from, "->".dimmed(), to)
    } else {
        format!("{} -> {}", from, to)
    }
}
