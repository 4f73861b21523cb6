//! Section bodies. Each reads the enclosing section's visibility to time its
//! entrance animation.

use std::time::Duration;

use dioxus::prelude::*;

use super::visuals::{AllianceVisual, HorizonVisual, LedgerVisual, LinkVisual};
use crate::core::clipboard::copy_to_clipboard;
use crate::core::timing::sleep;
use crate::i18n::use_i18n;
use crate::t;
use crate::visibility::{delay_style, reveal_class, use_section_visible};

/// How long the "copied" confirmation stays on the contact button.
const COPIED_FEEDBACK: Duration = Duration::from_millis(2000);

/// Two paragraphs beside a visual: the layout shared by the prose sections.
#[component]
fn ProseBlock(first: String, second: String, visual: Element) -> Element {
    let reveal = reveal_class(use_section_visible());

    rsx! {
        div { class: "prose-block",
            div { class: "prose-block__text",
                p { class: "{reveal}", style: delay_style(150), "{first}" }
                p { class: "{reveal}", style: delay_style(300), "{second}" }
            }
            div { class: "prose-block__visual {reveal}", style: delay_style(450), {visual} }
        }
    }
}

#[component]
pub fn PurposeBlock() -> Element {
    let i18n = use_i18n();
    rsx! {
        ProseBlock {
            first: t!(i18n, "purpose-p1"),
            second: t!(i18n, "purpose-p2"),
            visual: rsx! { AllianceVisual {} },
        }
    }
}

#[component]
pub fn TechBlock() -> Element {
    let i18n = use_i18n();
    rsx! {
        ProseBlock {
            first: t!(i18n, "tech-p1"),
            second: t!(i18n, "tech-p2"),
            visual: rsx! { LedgerVisual {} },
        }
    }
}

#[component]
pub fn FeelinkBlock() -> Element {
    let i18n = use_i18n();
    rsx! {
        ProseBlock {
            first: t!(i18n, "feelink-p1"),
            second: t!(i18n, "feelink-p2"),
            visual: rsx! { LinkVisual {} },
        }
    }
}

#[component]
pub fn VisionBlock() -> Element {
    let i18n = use_i18n();
    rsx! {
        ProseBlock {
            first: t!(i18n, "vision-p1"),
            second: t!(i18n, "vision-p2"),
            visual: rsx! { HorizonVisual {} },
        }
    }
}

/// Accordion; at most one answer open at a time.
#[component]
pub fn FaqBlock() -> Element {
    let i18n = use_i18n();
    let reveal = reveal_class(use_section_visible());
    let mut open = use_signal(|| Option::<usize>::None);

    let current = open();
    let entries: Vec<FaqEntry> = i18n
        .list("faq-question")
        .into_iter()
        .zip(i18n.list("faq-answer"))
        .enumerate()
        .map(|(index, (question, answer))| {
            let is_open = current == Some(index);
            let class = if is_open {
                format!("faq__item faq__item--open {reveal}")
            } else {
                format!("faq__item {reveal}")
            };
            FaqEntry {
                index,
                question,
                answer,
                is_open,
                class,
            }
        })
        .collect();

    rsx! {
        dl { class: "faq",
            for entry in entries {
                div {
                    key: "{entry.index}",
                    class: "{entry.class}",
                    style: delay_style(150 * (entry.index as u32 + 1)),
                    dt {
                        button {
                            class: "faq__question",
                            r#type: "button",
                            aria_expanded: "{entry.is_open}",
                            onclick: move |_| {
                                let next = if entry.is_open { None } else { Some(entry.index) };
                                open.set(next);
                            },
                            span { "{entry.question}" }
                            span { class: "faq__icon", aria_hidden: "true" }
                        }
                    }
                    if entry.is_open {
                        dd { class: "faq__answer", "{entry.answer}" }
                    }
                }
            }
        }
    }
}

struct FaqEntry {
    index: usize,
    question: String,
    answer: String,
    is_open: bool,
    class: String,
}

/// Contact message and a button copying the address to the clipboard.
#[component]
pub fn ContactBlock() -> Element {
    let i18n = use_i18n();
    let reveal = reveal_class(use_section_visible());
    let mut copied = use_signal(|| false);
    // Bumped on every successful copy so only the latest click clears the flag.
    let mut generation = use_signal(|| 0_u64);

    let email = t!(i18n, "contact-email");
    let copied_label = t!(i18n, "contact-copied");
    let button_class = if copied() {
        format!("contact__email contact__email--copied {reveal}")
    } else {
        format!("contact__email {reveal}")
    };
    let button_label = if copied() {
        copied_label
    } else {
        email.clone()
    };

    let on_copy = move |_: MouseEvent| {
        let payload = email.clone();
        async move {
            match copy_to_clipboard(payload).await {
                Ok(()) => {
                    generation += 1;
                    let ticket = *generation.peek();
                    copied.set(true);
                    sleep(COPIED_FEEDBACK).await;
                    if *generation.peek() == ticket {
                        copied.set(false);
                    }
                }
                Err(err) => {
                    tracing::warn!("[contact] copy to clipboard failed: {err}");
                }
            }
        }
    };

    rsx! {
        div { class: "contact",
            p { class: "contact__message {reveal}", style: delay_style(150), {t!(i18n, "contact-message")} }
            button {
                class: "{button_class}",
                r#type: "button",
                style: delay_style(300),
                onclick: on_copy,
                "{button_label}"
            }
        }
    }
}
