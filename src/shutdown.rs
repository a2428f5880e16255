//! Process-wide interrupt coordination for the Ctrl-C handler.
//!
//! The handler records the request and looks at the current [`Phase`]:
//! - `Idle`: nothing is in flight, the process may exit right away.
//! - `Editing`: the editor owns the terminal; the request is honored once it exits.
//! - `Applying`: moves cannot be cancelled midway; the run finishes or fails on its own.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);
static PHASE: AtomicU8 = AtomicU8::new(Phase::Idle as u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    Idle = 0,
    Editing = 1,
    Applying = 2,
}

/// Request a cooperative shutdown (idempotent; safe from a signal handler).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

pub fn set_phase(phase: Phase) {
    PHASE.store(phase as u8, Ordering::Relaxed);
}

pub fn phase() -> Phase {
    match PHASE.load(Ordering::Relaxed) {
        1 => Phase::Editing,
        2 => Phase::Applying,
        _ => Phase::Idle,
    }
}
