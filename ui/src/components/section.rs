use dioxus::prelude::*;

use crate::visibility::{reveal_class, use_on_screen, ObserverOptions, SectionVisibility};

/// Fraction of a section's content that must be on screen before it animates in.
const SECTION_THRESHOLD: f64 = 0.2;

/// Titled page section. Observes its own content container and shares the
/// result with `children` through [`SectionVisibility`].
#[component]
pub fn Section(id: String, title: String, subtitle: String, children: Element) -> Element {
    let content_id = format!("{id}-content");
    let visible = use_on_screen(&content_id, ObserverOptions::threshold(SECTION_THRESHOLD));
    use_context_provider(|| SectionVisibility(visible));

    let reveal = reveal_class(visible());

    rsx! {
        section { id: "{id}", class: "section section--{id}",
            div { id: "{content_id}", class: "section__inner",
                header { class: "section__heading {reveal}",
                    span { class: "section__subtitle", "{subtitle}" }
                    h2 { class: "section__title", "{title}" }
                }
                {children}
            }
        }
    }
}
