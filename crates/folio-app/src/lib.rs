//! Desktop portfolio app with an interactive study-locations map.
//!
//! This crate provides a Dioxus desktop application presenting an academic
//! portfolio: a world-map widget disclosing per-location detail, a project
//! list the widget can pulse-filter, publication search, and a contact form.

pub mod components;
pub mod content;
pub mod settings;
pub mod state;
