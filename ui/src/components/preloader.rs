use dioxus::prelude::*;

use super::visuals::Logo;

/// Full-screen overlay shown until the loading gate opens.
#[component]
pub fn Preloader(loading: ReadOnlySignal<bool>) -> Element {
    let done = !loading();
    let class = if loading() {
        "preloader"
    } else {
        "preloader preloader--done"
    };

    rsx! {
        div { class: "{class}", aria_hidden: "{done}",
            div { class: "preloader__mark",
                Logo { size: 64 }
                div { class: "preloader__bar", div { class: "preloader__bar-fill" } }
            }
        }
    }
}
