use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::t;
use crate::visibility::{delay_style, reveal_class, use_section_visible};

/// Entrance delay between consecutive cards.
const CARD_STAGGER_MS: u32 = 150;

struct FunctionCard {
    key: &'static str,
    icon: &'static str,
    title: String,
    items: Vec<String>,
}

/// The four pillars, each with three bullet points.
#[component]
pub fn CoreFunctions() -> Element {
    let i18n = use_i18n();
    let reveal = reveal_class(use_section_visible());

    let cards = [
        FunctionCard {
            key: "protection",
            icon: "M12 2 L20 5 V11 C20 16 16.5 20 12 22 C7.5 20 4 16 4 11 V5 Z",
            title: t!(i18n, "functions-protection-title"),
            items: i18n.list("functions-protection-item"),
        },
        FunctionCard {
            key: "audit",
            icon: "M4 4 H20 V20 H4 Z M8 9 H16 M8 13 H16 M8 17 H12",
            title: t!(i18n, "functions-audit-title"),
            items: i18n.list("functions-audit-item"),
        },
        FunctionCard {
            key: "identity",
            icon: "M12 12 A4 4 0 1 0 12 4 A4 4 0 1 0 12 12 M4 21 C4 16 8 14 12 14 C16 14 20 16 20 21",
            title: t!(i18n, "functions-identity-title"),
            items: i18n.list("functions-identity-item"),
        },
        FunctionCard {
            key: "encryption",
            icon: "M6 11 H18 V21 H6 Z M8 11 V7 A4 4 0 0 1 16 7 V11",
            title: t!(i18n, "functions-encryption-title"),
            items: i18n.list("functions-encryption-item"),
        },
    ];

    rsx! {
        div { class: "function-grid",
            for (index, card) in cards.into_iter().enumerate() {
                article {
                    key: "{card.key}",
                    class: "function-card function-card--{card.key} {reveal}",
                    style: delay_style(CARD_STAGGER_MS * index as u32),
                    svg {
                        class: "function-card__icon",
                        view_box: "0 0 24 24",
                        fill: "none",
                        "aria-hidden": "true",
                        path {
                            d: card.icon,
                            stroke: "currentColor",
                            stroke_width: "1.5",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                        }
                    }
                    h3 { class: "function-card__title", "{card.title}" }
                    ul { class: "function-card__items",
                        for item in card.items {
                            li { "{item}" }
                        }
                    }
                }
            }
        }
    }
}
