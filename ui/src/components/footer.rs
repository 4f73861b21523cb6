use dioxus::prelude::*;
use time::OffsetDateTime;

use super::visuals::Logo;
use crate::config::SiteConfig;
use crate::i18n::use_i18n;
use crate::t;
use crate::visibility::{reveal_class, use_on_screen, ObserverOptions};

#[component]
pub fn Footer() -> Element {
    let i18n = use_i18n();
    let site = use_context::<SiteConfig>();
    let visible = use_on_screen("footer-content", ObserverOptions::threshold(0.1));
    let reveal = reveal_class(visible());
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "site-footer",
            div { id: "footer-content", class: "site-footer__inner {reveal}",
                div { class: "site-footer__brand",
                    Logo { size: 40 }
                    p { class: "site-footer__tagline", {t!(i18n, "footer-tagline")} }
                }
                ul { class: "site-footer__social",
                    for link in site.social_links.iter() {
                        li { key: "{link.label}",
                            a {
                                href: link.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.label}"
                            }
                        }
                    }
                }
                a { class: "site-footer__top", href: "#top", {t!(i18n, "nav-back-to-top")} }
                p { class: "site-footer__copyright", {t!(i18n, "footer-copyright", year = year)} }
            }
        }
    }
}
