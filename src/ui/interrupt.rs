//! Ctrl+C handling

/// Exit status used when the operator interrupts a run
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Terminate silently on Ctrl+C.
///
/// Child processes share the terminal's process group and receive the
/// interrupt themselves.
pub fn exit_quietly_on_interrupt() {
    if let Err(e) = ctrlc::set_handler(|| {
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }) {
        tracing::debug!(error = %e, "could not install Ctrl+C handler");
    }
}
