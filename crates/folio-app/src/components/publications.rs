//! Publications section with live search.

use dioxus::prelude::*;

use folio_core::matches_query;

use crate::content;
use crate::state::AppState;

#[component]
pub fn Publications(app: Signal<AppState>) -> Element {
    let mut app = app;
    let query = app.read().search_query.clone();

    let visible: Vec<_> = content::publications()
        .into_iter()
        .filter(|p| matches_query(&p.searchable_text(), &query))
        .collect();

    rsx! {
        section {
            id: "publications",
            class: "section publications",

            h2 { class: "section-title", "Publications" }

            input {
                class: "publication-search",
                r#type: "search",
                placeholder: "Search publications...",
                value: "{query}",
                oninput: move |evt| app.write().search_query = evt.value(),
            }

            if visible.is_empty() {
                div { class: "publications-empty", "No publications match the search." }
            }

            div {
                class: "publication-list",
                for publication in visible.iter() {
                    div {
                        key: "{publication.title}",
                        class: "publication-item",
                        div { class: "publication-title", "{publication.title}" }
                        div {
                            class: "publication-meta",
                            span { class: "publication-venue", "{publication.venue}" }
                            span { class: "publication-year", "{publication.year}" }
                        }
                    }
                }
            }
        }
    }
}
