//! Shared UI crate for the DPA landing page. Platform crates (web, desktop)
//! only launch [`views::LandingApp`] and register their metadata port.

use dioxus::prelude::*;

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod motion;
pub mod seo;
pub mod views;
pub mod visibility;

pub mod components {
    // Page chrome
    mod header;
    pub use header::Header;
    mod footer;
    pub use footer::Footer;
    mod preloader;
    pub use preloader::Preloader;

    // Hero and section scaffolding
    mod hero;
    pub use hero::Hero;
    mod section;
    pub use section::Section;

    // Section bodies
    mod blocks;
    pub use blocks::{ContactBlock, FaqBlock, FeelinkBlock, PurposeBlock, TechBlock, VisionBlock};
    mod core_functions;
    pub use core_functions::CoreFunctions;

    // Vector artwork
    pub mod visuals;
}

/// Shared theme. Web links it as an asset; desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
