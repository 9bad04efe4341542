use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use eligo_core::termination::Cancellation;

/// The signals on which the search stops and reports its best schedule.
const TERMINATION_SIGNALS: &[std::ffi::c_int] =
    &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

/// Creates a [`Cancellation`] which triggers when the process receives SIGINT or SIGTERM.
pub(crate) fn install() -> std::io::Result<Cancellation> {
    let signal_received = Arc::new(AtomicBool::new(false));

    for &signal in TERMINATION_SIGNALS {
        let _ = signal_hook::flag::register(signal, Arc::clone(&signal_received))?;
    }

    Ok(Cancellation::from_flag(signal_received))
}
