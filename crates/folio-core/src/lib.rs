//! Domain logic for the Folio portfolio app.
//!
//! Everything in this crate is UI-free and synchronous: the immutable
//! location table behind the world-map widget, the keyword matching that
//! drives the pulse filter, contact-form validation, and publication search.

pub mod contact;
pub mod location;
pub mod pulse;
pub mod search;

pub use contact::{ContactMessage, Field, FieldError, ValidationError};
pub use location::{Location, LocationTable, TableError};
pub use pulse::{PULSE_RESTORE, keyword_match, pulse_mask};
pub use search::matches_query;
