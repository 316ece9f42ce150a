//! Journey section: the world map paired with the education list.
//!
//! Hovering a map region highlights its paired education entry and vice
//! versa; activating either opens the location disclosure.

use dioxus::prelude::*;

use crate::state::{self, MapState};

use super::world_map::{WorldMap, activate_region};

#[component]
pub fn Journey(map: Signal<MapState>) -> Element {
    let table = state::table();

    rsx! {
        section {
            id: "journey",
            class: "section journey",

            h2 { class: "section-title", "Academic Journey" }

            WorldMap { map }

            div {
                class: "education-list",
                for location in table.iter() {
                    {
                        let highlighted = map.read().is_highlighted(&location.id);
                        let entry_class = if highlighted {
                            "education-item highlighted"
                        } else {
                            "education-item"
                        };
                        let id_click = location.id.clone();
                        let id_hover = location.id.clone();
                        let mut map = map;

                        rsx! {
                            div {
                                key: "{location.id}",
                                class: "{entry_class}",
                                onclick: move |_| activate_region(map, &id_click),
                                onmouseenter: move |_| map.write().highlight(state::table(), &id_hover),
                                onmouseleave: move |_| map.write().clear_highlight(),

                                div {
                                    class: "education-header",
                                    h3 { class: "education-institution", "{location.institution}" }
                                    span { class: "education-period", "{location.period}" }
                                }
                                div { class: "education-role", "{location.role}" }
                                div { class: "education-place", "{location.name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
