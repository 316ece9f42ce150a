//! Contact form with client-side validation and a simulated send.

use dioxus::prelude::*;
use tokio::time::{Duration, sleep};

use folio_core::Field;
use folio_ui::{ToastKind, push_toast};

use crate::state::ContactState;

/// Simulated network delay before the success toast.
const SEND_DELAY: Duration = Duration::from_millis(2000);

fn submit(mut contact: Signal<ContactState>) {
    if contact.write().submit() {
        spawn(async move {
            sleep(SEND_DELAY).await;
            contact.write().finish_send();
            push_toast(
                ToastKind::Success,
                "Thank you for your message! I will get back to you soon.",
            );
        });
    } else {
        push_toast(ToastKind::Error, "Please fill in all fields correctly.");
    }
}

#[component]
pub fn ContactSection(contact: Signal<ContactState>) -> Element {
    let mut contact = contact;
    let state_read = contact.read();
    let sending = state_read.is_sending();

    rsx! {
        section {
            id: "contact",
            class: "section contact",

            h2 { class: "section-title", "Get in Touch" }

            form {
                class: "contact-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit(contact);
                },

                input {
                    class: "contact-input {state_read.field_class(Field::Name)}",
                    placeholder: "Your name",
                    value: "{state_read.message.name}",
                    disabled: sending,
                    oninput: move |evt| contact.write().set_name(evt.value()),
                }

                input {
                    class: "contact-input {state_read.field_class(Field::Email)}",
                    r#type: "email",
                    placeholder: "Your email",
                    value: "{state_read.message.email}",
                    disabled: sending,
                    oninput: move |evt| contact.write().set_email(evt.value()),
                }

                textarea {
                    class: "contact-input contact-message {state_read.field_class(Field::Message)}",
                    placeholder: "Your message",
                    rows: "6",
                    value: "{state_read.message.message}",
                    disabled: sending,
                    oninput: move |evt| contact.write().set_message(evt.value()),
                }

                button {
                    class: "contact-submit",
                    r#type: "submit",
                    disabled: sending,
                    if sending { "Sending..." } else { "Send Message" }
                }
            }
        }
    }
}
