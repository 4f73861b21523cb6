use dioxus::prelude::*;

use ui::core::platform::{ensure_mount_point, halt, MOUNT_POINT};
use ui::views::LandingApp;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    // Fail loudly before launch: a page with no mount point renders nothing.
    if let Err(err) = ensure_mount_point(MOUNT_POINT) {
        tracing::error!("[web] no #{MOUNT_POINT} element in the host page");
        halt(&err);
    }

    #[cfg(target_arch = "wasm32")]
    {
        ui::seo::register_metadata_port(ui::seo::WebDocument::port);
        tracing::debug!("[web] document metadata port registered");
    }

    tracing::info!("[web] launching landing page");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        LandingApp {}
    }
}
