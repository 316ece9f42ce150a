//! Modal overlay used for location disclosures.

use dioxus::prelude::*;

/// A centered modal with backdrop.
///
/// Closes on the header button, a click on the backdrop, or Escape. The
/// root grabs focus on mount so Escape works without an extra click.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-root",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "modal-overlay",
                onclick: move |_| on_close.call(()),
            }

            div {
                class: "modal-content",
                div {
                    class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }
                div {
                    class: "modal-body",
                    {children}
                }
            }
        }
    }
}
