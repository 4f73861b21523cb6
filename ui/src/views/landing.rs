use dioxus::prelude::*;

use crate::components::{
    ContactBlock, CoreFunctions, FaqBlock, FeelinkBlock, Footer, Header, Hero, Preloader,
    PurposeBlock, Section, TechBlock, VisionBlock,
};
use crate::config::SiteConfig;
use crate::core::platform::Platform;
use crate::core::timing::use_loading_gate;
use crate::i18n::use_language_provider;
use crate::motion::{scroll_offsets, translate_y, use_scroll_y};
use crate::seo::use_metadata_sync;
use crate::t;

/// Root of the page.
///
/// Provides [`SiteConfig`] and the language context, keeps document metadata
/// in step with the selected language, and holds the preloader up until the
/// loading gate opens. Background parallax only starts once loading is done.
#[component]
pub fn LandingApp() -> Element {
    let site = use_context_provider(SiteConfig::default);
    let language = use_language_provider(&site.language_storage_key);
    use_metadata_sync(&language, &site);
    let loading = use_loading_gate(site.loading_delay);
    let scroll_y = use_scroll_y();

    use_hook(|| {
        tracing::info!(
            "[landing] mounted on {:?} with language {}",
            Platform::current(),
            language.peek()
        );
    });

    let i18n = language.i18n();
    let root_class = if loading() { "landing landing--loading" } else { "landing" };

    rsx! {
        Preloader { loading: loading }
        div { id: "top", class: "{root_class}", lang: "{i18n.language}",
            BackgroundLayers { loading: loading, scroll_y: scroll_y }
            Header { scroll_y: scroll_y }
            main { class: "landing__main",
                Hero {}
                Section {
                    id: "purpose",
                    title: t!(i18n, "section-purpose-title"),
                    subtitle: t!(i18n, "section-purpose-subtitle"),
                    PurposeBlock {}
                }
                Section {
                    id: "functions",
                    title: t!(i18n, "section-functions-title"),
                    subtitle: t!(i18n, "section-functions-subtitle"),
                    CoreFunctions {}
                }
                Section {
                    id: "tech",
                    title: t!(i18n, "section-tech-title"),
                    subtitle: t!(i18n, "section-tech-subtitle"),
                    TechBlock {}
                }
                Section {
                    id: "feelink",
                    title: t!(i18n, "section-feelink-title"),
                    subtitle: t!(i18n, "section-feelink-subtitle"),
                    FeelinkBlock {}
                }
                Section {
                    id: "vision",
                    title: t!(i18n, "section-vision-title"),
                    subtitle: t!(i18n, "section-vision-subtitle"),
                    VisionBlock {}
                }
                Section {
                    id: "faq",
                    title: t!(i18n, "section-faq-title"),
                    subtitle: t!(i18n, "section-faq-subtitle"),
                    FaqBlock {}
                }
                Section {
                    id: "contact",
                    title: t!(i18n, "section-contact-title"),
                    subtitle: t!(i18n, "section-contact-subtitle"),
                    ContactBlock {}
                }
            }
            Footer {}
        }
    }
}

/// Blurred background blobs drifting at different rates as the page scrolls.
#[component]
fn BackgroundLayers(loading: ReadOnlySignal<bool>, scroll_y: ReadOnlySignal<f64>) -> Element {
    let [primary, secondary] = if loading() {
        [0.0, 0.0]
    } else {
        scroll_offsets(scroll_y())
    };
    let primary = translate_y(primary);
    let secondary = translate_y(secondary);

    rsx! {
        div { class: "landing__background", aria_hidden: "true",
            div { class: "blob blob--primary", style: "transform: {primary};" }
            div { class: "blob blob--secondary", style: "transform: {secondary};" }
        }
    }
}
