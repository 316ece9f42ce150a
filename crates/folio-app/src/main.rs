//! Entry point for the Folio portfolio desktop app.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use folio_app::components::App;
use folio_app::settings;
use folio_app::state;
use folio_core::LocationTable;
use folio_ui::{CURRENT_THEME, Theme};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Theme override from the command line, applied once the Dioxus runtime is
/// up (GlobalSignal cannot be written before launch).
static THEME_OVERRIDE: OnceLock<Option<Theme>> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-app")]
#[command(about = "Academic portfolio desktop app")]
struct Args {
    /// Path to a JSON file replacing the built-in location table
    #[arg(short, long)]
    locations: Option<PathBuf>,

    /// Start with this theme instead of the saved preference (light, dark, boreal)
    #[arg(short, long)]
    theme: Option<String>,

    /// Disable the pulse filter; map activation only opens the disclosure
    #[arg(long)]
    no_pulse: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Folio");

    let args = Args::parse();

    if let Some(path) = &args.locations {
        match std::fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|json| {
            LocationTable::from_json(&json).map_err(|e| e.to_string())
        }) {
            Ok(table) => {
                tracing::info!("loaded {} locations from {}", table.len(), path.display());
                state::install_table(table);
            }
            Err(e) => {
                tracing::warn!(
                    "could not load locations from {}: {e}; using built-in table",
                    path.display()
                );
            }
        }
    }

    if args.no_pulse {
        state::disable_pulse();
    }

    THEME_OVERRIDE
        .set(args.theme.as_deref().map(Theme::from_css_value))
        .ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Yu Lin - Portfolio")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(RootApp);
}

/// Root component: applies the initial theme, then renders the app.
#[component]
fn RootApp() -> Element {
    use_hook(|| {
        let initial = THEME_OVERRIDE
            .get()
            .and_then(|t| *t)
            .or_else(settings::load_theme);
        if let Some(theme) = initial {
            *CURRENT_THEME.write() = theme;
        }
    });

    rsx! {
        App {}
    }
}
