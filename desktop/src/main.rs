#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::error::PageError;
use ui::seo::{register_metadata_port, DocumentMetadata, MetadataPort};
use ui::views::LandingApp;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    // The only head slot a native window has is its title.
    register_metadata_port(window_title_port);

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("DPA")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    tracing::error!("dpa-desktop built without the `desktop` feature; nothing to launch");
}

/// Mirrors the document title into the native window title.
struct WindowTitle;

impl MetadataPort for WindowTitle {
    fn apply(&mut self, metadata: &DocumentMetadata) -> Result<(), PageError> {
        #[cfg(feature = "desktop")]
        dioxus::desktop::window().set_title(&metadata.title);

        #[cfg(not(feature = "desktop"))]
        let _ = metadata;

        Ok(())
    }
}

fn window_title_port() -> Option<Box<dyn MetadataPort>> {
    Some(Box::new(WindowTitle))
}

#[component]
fn App() -> Element {
    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        LandingApp {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
