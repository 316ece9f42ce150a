//! UI components for the portfolio app.

mod app;
mod contact;
mod hero;
mod journey;
mod navbar;
mod projects;
mod publications;
mod world_map;

pub use app::*;
pub use contact::*;
pub use hero::*;
pub use journey::*;
pub use navbar::*;
pub use projects::*;
pub use publications::*;
pub use world_map::*;
