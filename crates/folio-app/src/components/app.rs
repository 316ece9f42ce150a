//! Root application component.

use dioxus::prelude::*;

use folio_ui::{CURRENT_THEME, Modal, ToastHost, ThemedRoot};

use crate::content;
use crate::settings;
use crate::state::{self, AppState, ContactState, MapState};

use super::{ContactSection, Hero, Journey, Navbar, Projects, Publications};

/// Root application component.
#[component]
pub fn App() -> Element {
    let app = use_signal(AppState::new);
    let contact = use_signal(ContactState::new);
    let mut map = use_signal(|| MapState::new(content::projects().len(), state::pulse_enabled()));

    // Persist the theme preference whenever it changes.
    use_effect(move || {
        let theme = *CURRENT_THEME.read();
        settings::save_theme(theme);
    });

    rsx! {
        ThemedRoot {
            div {
                class: "portfolio",

                Navbar { app }

                main {
                    class: "page-content",

                    Hero {}
                    Journey { map }
                    Projects { map }
                    Publications { app }
                    ContactSection { contact }
                }

                // Location disclosure modal
                if let Some(location) = map.read().active_location(state::table()) {
                    Modal {
                        title: location.name.clone(),
                        on_close: move |_| map.write().close(),

                        div {
                            class: "location-info",
                            div {
                                class: "info-item",
                                strong { "University" }
                                "{location.institution}"
                            }
                            div {
                                class: "info-item",
                                strong { "Period" }
                                "{location.period}"
                            }
                            div {
                                class: "info-item",
                                strong { "Research Focus" }
                                "{location.role}"
                            }
                            div {
                                class: "info-item",
                                strong { "Details" }
                                "{location.details}"
                            }
                        }
                    }
                }

                ToastHost {}
            }
        }
    }
}
