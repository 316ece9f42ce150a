//! Projects section: the content list governed by the pulse filter.

use dioxus::prelude::*;

use crate::content;
use crate::state::MapState;

#[component]
pub fn Projects(map: Signal<MapState>) -> Element {
    let projects = content::projects();

    rsx! {
        section {
            id: "projects",
            class: "section projects",

            h2 { class: "section-title", "Projects" }

            div {
                class: "project-grid",
                for (i, project) in projects.iter().enumerate() {
                    div {
                        key: "{project.title}",
                        class: if map.read().is_dimmed(i) { "project-card dimmed" } else { "project-card" },
                        h3 { class: "project-title", "{project.title}" }
                        p { class: "project-summary", "{project.summary}" }
                    }
                }
            }
        }
    }
}
