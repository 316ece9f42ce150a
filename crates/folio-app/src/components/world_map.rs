//! The world-map location widget: clickable, focusable regions bound to
//! location records.

use dioxus::prelude::*;
use tokio::time::sleep;

use folio_core::PULSE_RESTORE;

use crate::content;
use crate::state::{self, MapState};

/// Activates a region: opens its disclosure and, when a pulse ran,
/// schedules the restore for its generation. Pointer and keyboard paths
/// both land here so they behave identically.
pub(crate) fn activate_region(mut map: Signal<MapState>, id: &str) {
    let items: Vec<String> = content::projects()
        .iter()
        .map(|p| p.matchable_text())
        .collect();

    if let Some(seq) = map.write().activate(state::table(), id, &items) {
        spawn(async move {
            sleep(PULSE_RESTORE).await;
            map.write().restore(seq);
        });
    }
}

/// Stylized world map with one region per location.
#[component]
pub fn WorldMap(map: Signal<MapState>) -> Element {
    let table = state::table();

    rsx! {
        div {
            class: "world-map",

            for location in table.iter() {
                {
                    let region_class = if map.read().is_highlighted(&location.id) {
                        format!("map-region region-{} highlighted", location.id)
                    } else {
                        format!("map-region region-{}", location.id)
                    };
                    let id_click = location.id.clone();
                    let id_key = location.id.clone();
                    let id_hover = location.id.clone();
                    let mut map = map;

                    rsx! {
                        div {
                            key: "{location.id}",
                            class: "{region_class}",
                            role: "button",
                            tabindex: "0",
                            onclick: move |_| activate_region(map, &id_click),
                            onkeydown: move |evt: KeyboardEvent| {
                                let key = evt.key();
                                if key == Key::Enter || key == Key::Character(" ".to_string()) {
                                    evt.prevent_default();
                                    activate_region(map, &id_key);
                                }
                            },
                            onmouseenter: move |_| map.write().highlight(state::table(), &id_hover),
                            onmouseleave: move |_| map.write().clear_highlight(),

                            span { class: "region-dot" }
                            span { class: "region-label", "{location.name}" }
                        }
                    }
                }
            }
        }
    }
}
