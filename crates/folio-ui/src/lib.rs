//! Shared UI components for the Folio portfolio app.
//!
//! Theme handling, the modal overlay used for location disclosures, and the
//! toast notification host live here so every panel renders them the same
//! way.

pub mod modal;
pub mod theme;
pub mod toast;

pub use modal::Modal;
pub use theme::{CURRENT_THEME, Theme, ThemeSwitcher, ThemedRoot};
pub use toast::{ToastHost, ToastKind, push_toast};
