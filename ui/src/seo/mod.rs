//! Document metadata synchronization.
//!
//! [`document_metadata`] turns a language into the full set of head slots
//! (title, meta tags, canonical link, JSON-LD block, root `lang`). A
//! [`MetadataPort`] writes that set somewhere: the live DOM on the web, the
//! window title on desktop, or an [`InMemoryDocument`] in tests.
//!
//! Ports upsert: a slot that exists is overwritten, a missing one is created,
//! so applying the same metadata twice leaves the document unchanged.

mod document;
mod tables;

use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::error::PageError;
use crate::i18n::{Language, LanguageContext};

pub use document::{HeadElement, InMemoryDocument};
#[cfg(target_arch = "wasm32")]
pub use document::WebDocument;
pub use tables::seo_config;

/// Marker attribute value identifying the page-level JSON-LD block.
pub const STRUCTURED_DATA_SCHEMA: &str = "webpage";

#[derive(Debug, Clone, PartialEq)]
pub struct SeoConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    /// Open Graph locale, e.g. `ko_KR`.
    pub locale: &'static str,
}

/// SEO copy for a raw code; unknown codes get the default language's copy.
pub fn seo_config_for_code(code: &str) -> &'static SeoConfig {
    seo_config(Language::resolve(code))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttribute {
    Name,
    Property,
}

impl MetaAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttribute::Name => "name",
            MetaAttribute::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetaTag {
    pub attribute: MetaAttribute,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attribute: MetaAttribute::Name,
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attribute: MetaAttribute::Property,
            key,
            content: content.into(),
        }
    }
}

/// Topic of the page in the JSON-LD block (same in every language).
const SCHEMA_ABOUT: &str = "Decentralized Privacy and AI Rights Protection";

/// schema.org `WebPage`, serialized into the JSON-LD block.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WebPageSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    url: &'a str,
    in_language: &'a str,
    is_part_of: SchemaNode<'a>,
    about: SchemaNode<'a>,
    keywords: &'a str,
}

#[derive(Serialize)]
struct SchemaNode<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// Everything the synchronizer writes for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    pub title: String,
    /// Value of the root element's `lang` attribute.
    pub lang: String,
    pub meta: Vec<MetaTag>,
    pub canonical_url: String,
    /// Serialized JSON-LD `WebPage` object.
    pub structured_data: String,
}

pub fn document_metadata(language: Language, site: &SiteConfig) -> DocumentMetadata {
    let config = seo_config(language);
    let code = language.code();
    let page_url = site.page_url(code);
    let image_url = site.image_url();
    let keywords = config.keywords.join(", ");

    let meta = vec![
        MetaTag::name("title", config.title),
        MetaTag::name("description", config.description),
        MetaTag::name("keywords", keywords.clone()),
        MetaTag::property("og:title", config.title),
        MetaTag::property("og:description", config.description),
        MetaTag::property("og:url", page_url.clone()),
        MetaTag::property("og:locale", config.locale),
        MetaTag::property("og:image", image_url.clone()),
        MetaTag::name("twitter:title", config.title),
        MetaTag::name("twitter:description", config.description),
        MetaTag::name("twitter:url", page_url.clone()),
        MetaTag::name("twitter:image", image_url),
    ];

    let schema = WebPageSchema {
        context: "https://schema.org",
        kind: "WebPage",
        name: config.title,
        description: config.description,
        url: &page_url,
        in_language: code,
        is_part_of: SchemaNode {
            kind: "WebSite",
            url: Some(&site.base_url),
            name: None,
        },
        about: SchemaNode {
            kind: "Thing",
            url: None,
            name: Some(SCHEMA_ABOUT),
        },
        keywords: &keywords,
    };
    // Only strings go in, so serialization cannot fail.
    let structured_data = serde_json::to_string_pretty(&schema).unwrap_or_default();

    DocumentMetadata {
        title: config.title.to_string(),
        lang: code.to_string(),
        meta,
        canonical_url: page_url,
        structured_data,
    }
}

/// Somewhere document metadata can be written.
pub trait MetadataPort {
    fn apply(&mut self, metadata: &DocumentMetadata) -> Result<(), PageError>;
}

/// Rewrite the document for `code`. Unknown codes behave exactly like the default language.
pub fn synchronize(
    port: &mut dyn MetadataPort,
    code: &str,
    site: &SiteConfig,
) -> Result<(), PageError> {
    let language = Language::resolve(code);
    port.apply(&document_metadata(language, site))
}

pub type PortFactory = fn() -> Option<Box<dyn MetadataPort>>;

static PORT_FACTORY: OnceCell<PortFactory> = OnceCell::new();

/// Platforms register how to reach their document before launching.
/// Only the first registration sticks.
pub fn register_metadata_port(factory: PortFactory) {
    if PORT_FACTORY.set(factory).is_err() {
        tracing::debug!("[seo] metadata port already registered; ignoring");
    }
}

fn registered_port() -> Option<Box<dyn MetadataPort>> {
    PORT_FACTORY.get().and_then(|factory| factory())
}

/// Synchronize once for the restored language, then on every language change.
pub fn use_metadata_sync(language: &LanguageContext, site: &SiteConfig) {
    let language = language.clone();
    let site = site.clone();
    let subscription = use_hook(move || {
        let Some(mut port) = registered_port() else {
            tracing::warn!("[seo] no metadata port registered; document metadata left untouched");
            return None;
        };
        let initial = language.peek();
        if let Err(err) = synchronize(port.as_mut(), initial.code(), &site) {
            tracing::warn!("[seo] initial metadata sync failed: {err}");
        }
        let id = language.subscribe(move |next| {
            if let Err(err) = synchronize(port.as_mut(), next.code(), &site) {
                tracing::warn!("[seo] metadata sync for {next} failed: {err}");
            }
        });
        Some((language, id))
    });

    use_drop(move || {
        if let Some((language, id)) = subscription {
            language.unsubscribe(id);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_distinct_title_and_locale() {
        for lang in Language::ALL {
            let config = seo_config(lang);
            assert!(config.title.starts_with("DPA - "));
            assert_eq!(config.locale, lang.og_locale());
            assert!(config.keywords.contains(&"DAO"));
        }
        assert_ne!(seo_config(Language::Ko).title, seo_config(Language::En).title);
    }

    #[test]
    fn unknown_code_uses_default_copy() {
        assert_eq!(seo_config_for_code("xx-YY"), seo_config(Language::Ko));
    }

    #[test]
    fn metadata_covers_all_slots() {
        let site = SiteConfig::default();
        let metadata = document_metadata(Language::Ja, &site);
        let keys: Vec<_> = metadata.meta.iter().map(|tag| tag.key).collect();
        for key in [
            "description",
            "keywords",
            "og:title",
            "og:description",
            "og:url",
            "og:locale",
            "og:image",
            "twitter:title",
            "twitter:description",
            "twitter:url",
            "twitter:image",
        ] {
            assert!(keys.contains(&key), "missing meta {key}");
        }
        assert_eq!(metadata.lang, "ja");
        assert_eq!(metadata.canonical_url, "https://dpa.network?lang=ja");

        let og_locale = metadata.meta.iter().find(|tag| tag.key == "og:locale").unwrap();
        assert_eq!(og_locale.attribute, MetaAttribute::Property);
        assert_eq!(og_locale.content, "ja_JP");
    }

    #[test]
    fn structured_data_is_a_webpage() {
        let site = SiteConfig::default();
        let metadata = document_metadata(Language::ZhHk, &site);
        let value: serde_json::Value = serde_json::from_str(&metadata.structured_data).unwrap();
        assert_eq!(value["@type"], "WebPage");
        assert_eq!(value["inLanguage"], "zh-HK");
        assert_eq!(value["url"], "https://dpa.network?lang=zh-HK");
        assert_eq!(value["isPartOf"]["url"], "https://dpa.network");
        assert_eq!(value["name"], seo_config(Language::ZhHk).title);
    }
}
