use dioxus::prelude::*;

use super::visuals::DigitalCore;
use crate::i18n::use_i18n;
use crate::motion::use_pointer_offsets;
use crate::t;
use crate::visibility::{delay_style, reveal_class, use_on_screen, ObserverOptions};

#[component]
pub fn Hero() -> Element {
    let i18n = use_i18n();
    let visible = use_on_screen("hero", ObserverOptions::threshold(0.2));
    let layers = use_pointer_offsets();
    let reveal = reveal_class(visible());
    let scroll_label = t!(i18n, "hero-scroll-down");

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero__content",
                h1 { class: "hero__title {reveal}", {t!(i18n, "hero-title")} }
                p { class: "hero__subtitle {reveal}", style: delay_style(150), {t!(i18n, "hero-subtitle")} }
                p { class: "hero__tagline {reveal}", style: delay_style(300), {t!(i18n, "hero-tagline")} }
                p { class: "hero__tagline hero__tagline--en {reveal}", style: delay_style(450), {t!(i18n, "hero-tagline-en")} }
            }
            div { class: "hero__visual {reveal}", style: delay_style(300),
                DigitalCore { layers: layers() }
            }
            a { class: "hero__scroll", href: "#purpose", aria_label: "{scroll_label}",
                span { class: "hero__scroll-arrow" }
            }
        }
    }
}
