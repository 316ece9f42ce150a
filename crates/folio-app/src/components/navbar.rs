//! Top navigation bar with section links, compact menu, and theme switcher.

use dioxus::prelude::*;

use folio_ui::ThemeSwitcher;

use crate::state::{AppState, Section};

/// Scrolls the content pane to a section anchor.
fn scroll_to(section: Section) {
    let js = format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
        section.anchor()
    );
    document::eval(&js);
}

/// Navigation bar. Links set the active section and smooth-scroll to it;
/// on narrow windows the links collapse behind a hamburger toggle.
#[component]
pub fn Navbar(app: Signal<AppState>) -> Element {
    let mut app = app;
    let state_read = app.read();
    let active = state_read.active_section;
    let menu_open = state_read.menu_open;

    rsx! {
        header {
            class: "navbar",

            div { class: "nav-brand", "Yu Lin" }

            button {
                class: if menu_open { "hamburger active" } else { "hamburger" },
                onclick: move |_| app.write().toggle_menu(),
                span { class: "hamburger-bar" }
                span { class: "hamburger-bar" }
                span { class: "hamburger-bar" }
            }

            nav {
                class: if menu_open { "nav-menu open" } else { "nav-menu" },
                for section in Section::all() {
                    {
                        let section = *section;
                        let link_class = if section == active {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        rsx! {
                            button {
                                key: "{section.anchor()}",
                                class: "{link_class}",
                                onclick: move |_| {
                                    app.write().go_to(section);
                                    scroll_to(section);
                                },
                                "{section.title()}"
                            }
                        }
                    }
                }
            }

            ThemeSwitcher {}
        }
    }
}
