//! Site-wide settings provided to the component tree as a context value.

use std::time::Duration;

/// Canonical origin used for Open Graph, Twitter and canonical URLs.
pub const DEFAULT_BASE_URL: &str = "https://dpa.network";

/// How long the preloader stays up after mount.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(2000);

/// Local storage key (web) / file stem (native) for the language preference.
pub const DEFAULT_LANGUAGE_STORAGE_KEY: &str = "dpa-language";

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub base_url: String,
    /// Path (relative to `base_url`) of the share image.
    pub og_image_path: String,
    pub loading_delay: Duration,
    pub language_storage_key: String,
    pub social_links: Vec<SocialLink>,
}

impl SiteConfig {
    /// `{base_url}?lang={code}`
    pub fn page_url(&self, code: &str) -> String {
        format!("{}?lang={code}", self.base_url)
    }

    pub fn image_url(&self) -> String {
        format!("{}{}", self.base_url, self.og_image_path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            og_image_path: "/og-image.jpg".to_string(),
            loading_delay: DEFAULT_LOADING_DELAY,
            language_storage_key: DEFAULT_LANGUAGE_STORAGE_KEY.to_string(),
            social_links: vec![
                SocialLink {
                    label: "GitHub",
                    href: "https://github.com/dpa-network",
                },
                SocialLink {
                    label: "Matrix",
                    href: "https://matrix.to/#/#dpa_network:matrix.org",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_embeds_language_query() {
        let site = SiteConfig::default();
        assert_eq!(site.page_url("zh-HK"), "https://dpa.network?lang=zh-HK");
        assert_eq!(site.image_url(), "https://dpa.network/og-image.jpg");
    }
}
