//! Interrupt handling for dispatch runs.
//!
//! A Ctrl+C must reach the tool currently running so it can stop cleanly,
//! and the dispatch loop must stop before launching anything else. The
//! handler records the interrupt and forwards the signal to the tracked
//! child; the loop polls the flag between launches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex};

use tracing::warn;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Pid of the currently running tool process, if any.
static RUNNING_CHILD: LazyLock<Mutex<Option<u32>>> = LazyLock::new(|| Mutex::new(None));

/// Install the Ctrl+C handler for the lifetime of the process.
pub fn install_handler() {
    if let Err(e) = ctrlc::set_handler(request_interrupt) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }
}

/// Record an interrupt and forward it to the running tool, if any.
pub fn request_interrupt() {
    INTERRUPTED.store(true, Ordering::SeqCst);
    forward_to_child();
}

/// Whether an interrupt has been requested.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Track the tool process an interrupt should be forwarded to.
///
/// An interrupt that arrived before tracking began is forwarded right away,
/// so a signal landing between spawn and tracking still reaches the child.
pub fn track_child(pid: u32) {
    if let Ok(mut child) = RUNNING_CHILD.lock() {
        *child = Some(pid);
    }
    if interrupted() {
        forward_to_child();
    }
}

/// Stop tracking the tool process once it has been waited on.
pub fn clear_child() {
    if let Ok(mut child) = RUNNING_CHILD.lock() {
        *child = None;
    }
}

#[cfg(unix)]
#[allow(unsafe_code)]
fn forward_to_child() {
    let pid = RUNNING_CHILD.lock().ok().and_then(|child| *child);
    if let Some(pid) = pid
        && let Ok(pid) = i32::try_from(pid)
    {
        // Worst case is ESRCH for a pid we already waited on.
        unsafe {
            libc::kill(pid, libc::SIGINT);
        }
    }
}

#[cfg(not(unix))]
fn forward_to_child() {
    // Console Ctrl+C on Windows reaches the whole process group, so the
    // child has already been signaled.
}

#[cfg(test)]
pub(crate) fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
    clear_child();
}
