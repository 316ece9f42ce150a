//! Toast notifications.
//!
//! Toasts live in a global signal so any component can raise one; the host
//! renders the stack and each toast dismisses itself after a fixed delay.

use dioxus::prelude::*;
use tokio::time::{Duration, sleep};

/// How long a toast stays on screen.
const TOAST_VISIBLE: Duration = Duration::from_millis(3000);

/// Kind of toast, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

static TOASTS: GlobalSignal<Vec<Toast>> = GlobalSignal::new(Vec::new);
static NEXT_ID: GlobalSignal<u64> = GlobalSignal::new(|| 0);

/// Shows a toast and schedules its dismissal.
///
/// Must be called from within the Dioxus runtime (an event handler or a
/// spawned task).
pub fn push_toast(kind: ToastKind, message: impl Into<String>) {
    let id = {
        let mut next = NEXT_ID.write();
        *next += 1;
        *next
    };

    TOASTS.write().push(Toast {
        id,
        kind,
        message: message.into(),
    });

    spawn(async move {
        sleep(TOAST_VISIBLE).await;
        TOASTS.write().retain(|t| t.id != id);
    });
}

/// Fixed-position host rendering the current toast stack.
#[component]
pub fn ToastHost() -> Element {
    let toasts = TOASTS.read();

    rsx! {
        div {
            class: "toast-host",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.kind.css_class()}",
                    "{toast.message}"
                }
            }
        }
    }
}
