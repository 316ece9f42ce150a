//! Application state.

mod app_state;
mod contact_state;
mod map_state;

pub use app_state::{AppState, Section};
pub use contact_state::{ContactState, SubmitStatus};
pub use map_state::MapState;

use std::sync::OnceLock;

use folio_core::LocationTable;

/// Location table override installed from the command line before launch.
static TABLE_OVERRIDE: OnceLock<LocationTable> = OnceLock::new();

/// Set when the deployment disables the pulse filter (`--no-pulse`).
static PULSE_DISABLED: OnceLock<bool> = OnceLock::new();

/// Disables the pulse filter for this run; activation then only opens the
/// disclosure.
pub fn disable_pulse() {
    let _ = PULSE_DISABLED.set(true);
}

pub fn pulse_enabled() -> bool {
    !PULSE_DISABLED.get().copied().unwrap_or(false)
}

/// Installs a replacement location table. Only effective before the first
/// call to [`table`]; returns false if an override was already set.
pub fn install_table(table: LocationTable) -> bool {
    TABLE_OVERRIDE.set(table).is_ok()
}

/// Returns the active location table: the CLI override if one was
/// installed, otherwise the embedded table.
pub fn table() -> &'static LocationTable {
    TABLE_OVERRIDE.get().unwrap_or_else(|| LocationTable::builtin())
}
