use dioxus::prelude::*;

use super::visuals::Logo;
use crate::i18n::{use_i18n, Language, LanguageContext};
use crate::motion::SCROLLED_THRESHOLD_PX;
use crate::t;
use crate::visibility::{use_active_section, SECTION_IDS};

/// Fixed top bar: logo, section links, language picker and the mobile menu.
///
/// The link matching the section under the viewport midline is highlighted.
/// The picker closes on selection or on a click anywhere outside it (a
/// transparent backdrop catches that click).
#[component]
pub fn Header(scroll_y: ReadOnlySignal<f64>) -> Element {
    let i18n = use_i18n();
    let language = use_context::<LanguageContext>();
    let active = use_active_section(&SECTION_IDS);
    let mut menu_open = use_signal(|| false);
    let mut picker_open = use_signal(|| false);

    let select_language = use_callback(move |next: Language| {
        picker_open.set(false);
        if next != language.peek() {
            language.select(next);
        }
    });

    let links = [
        ("purpose", t!(i18n, "nav-purpose")),
        ("functions", t!(i18n, "nav-functions")),
        ("tech", t!(i18n, "nav-tech")),
        ("feelink", t!(i18n, "nav-feelink")),
        ("vision", t!(i18n, "nav-vision")),
        ("faq", t!(i18n, "nav-faq")),
        ("contact", t!(i18n, "nav-contact")),
    ];
    let active_id = active();
    let current = i18n.language;

    let header_class = if scroll_y() > SCROLLED_THRESHOLD_PX {
        "site-header site-header--scrolled"
    } else {
        "site-header"
    };
    let nav_class = if menu_open() {
        "site-nav site-nav--open"
    } else {
        "site-nav"
    };
    let picker_label = t!(i18n, "nav-language-label");
    let menu_label = t!(i18n, "nav-toggle-menu");

    rsx! {
        header { class: "{header_class}",
            div { class: "site-header__inner",
                a { class: "site-header__brand", href: "#top",
                    Logo { size: 32 }
                    span { class: "site-header__wordmark", "DPA" }
                }

                nav { class: "{nav_class}",
                    for (id, label) in links {
                        a {
                            key: "{id}",
                            href: "#{id}",
                            class: if active_id.as_deref() == Some(id) { "site-nav__link site-nav__link--active" } else { "site-nav__link" },
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }

                div { class: "language-picker",
                    button {
                        class: "language-picker__button",
                        r#type: "button",
                        aria_label: "{picker_label}",
                        aria_expanded: "{picker_open}",
                        onclick: move |_| picker_open.toggle(),
                        span { class: "language-picker__badge", "{current.badge()}" }
                    }
                    if picker_open() {
                        div {
                            class: "language-picker__backdrop",
                            onclick: move |_| picker_open.set(false),
                        }
                        ul { class: "language-picker__menu", role: "listbox",
                            for lang in Language::ALL {
                                li { key: "{lang.code()}",
                                    button {
                                        class: if lang == current { "language-picker__option language-picker__option--active" } else { "language-picker__option" },
                                        r#type: "button",
                                        lang: "{lang.code()}",
                                        onclick: move |_| select_language.call(lang),
                                        "{lang.native_name()}"
                                    }
                                }
                            }
                        }
                    }
                }

                button {
                    class: "site-header__menu-toggle",
                    r#type: "button",
                    aria_label: "{menu_label}",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "site-header__menu-bar" }
                    span { class: "site-header__menu-bar" }
                    span { class: "site-header__menu-bar" }
                }
            }
        }
    }
}
