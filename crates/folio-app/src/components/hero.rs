//! Hero section: rotating name, tagline, and animated stat counters.

use dioxus::prelude::*;
use tokio::time::{Duration, sleep};

use crate::content;

/// How often the displayed name rotates.
const NAME_ROTATE_EVERY: Duration = Duration::from_millis(3000);
/// Fade-out time before the name swaps.
const NAME_FADE: Duration = Duration::from_millis(500);
/// Tick count for the ~2s counter animation at 16ms per tick.
const COUNTER_TICKS: u32 = 125;

#[component]
pub fn Hero() -> Element {
    let profile = content::profile();
    let names = profile.names;
    let stats = profile.stats;

    let mut name_index = use_signal(|| 0usize);
    let mut name_fading = use_signal(|| false);
    let mut counts = use_signal(|| vec![0u32; stats.len()]);

    // Name rotation loop.
    use_future(move || async move {
        loop {
            sleep(NAME_ROTATE_EVERY).await;
            name_fading.set(true);
            sleep(NAME_FADE).await;
            let next = (*name_index.read() + 1) % names.len();
            name_index.set(next);
            name_fading.set(false);
        }
    });

    // One-shot counter animation on mount.
    use_future(move || async move {
        for step in 1..=COUNTER_TICKS {
            sleep(Duration::from_millis(16)).await;
            let mut current = counts.write();
            for (i, stat) in stats.iter().enumerate() {
                current[i] = stat.target * step / COUNTER_TICKS;
            }
        }
    });

    let name = names[*name_index.read() % names.len()];
    let name_class = if *name_fading.read() {
        "hero-name fade-out"
    } else {
        "hero-name"
    };

    rsx! {
        section {
            id: "home",
            class: "section hero",

            h1 { class: "{name_class}", "{name}" }
            p { class: "hero-tagline", "{profile.tagline}" }
            p { class: "hero-summary", "{profile.summary}" }

            div {
                class: "hero-stats",
                for (i, stat) in stats.iter().enumerate() {
                    {
                        let shown = counts.read().get(i).copied().unwrap_or(stat.target);
                        rsx! {
                            div {
                                key: "{stat.label}",
                                class: "stat",
                                span { class: "stat-number", "{shown}" }
                                span { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
