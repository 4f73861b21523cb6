//! Internationalization (i18n) support for `dpa-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   ko/dpa-ui.ftl      (fallback/reference)
//!   en/dpa-ui.ftl
//!   ja/dpa-ui.ftl
//!   zh-CN/dpa-ui.ftl
//!   ...
//! ```
//!
//! There is no process-wide "current language". A [`LanguageSession`] owns the
//! selected [`Language`], persists it through a [`LanguageStore`] and notifies
//! its subscribers; components reach it through the [`LanguageContext`]
//! context value and read strings from the [`I18n`] snapshot returned by
//! [`use_i18n`]:
//! ```ignore
//! let i18n = use_i18n();
//! let label = t!(i18n, "nav-faq");
//! let items = i18n.list("faq-question");
//! ```
//!
//! To add a message: add it to `ko/dpa-ui.ftl` first, then to every other
//! locale (the completeness tests fail otherwise).
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::storage::{self, LanguageStore};
use crate::error::PageError;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(i18n, "nav-faq")
///     t!(i18n, "footer-copyright", year = 2025)
///
/// `i18n` is anything exposing `loader() -> &FluentLanguageLoader`
/// (usually the [`I18n`] snapshot). Keys are checked against the fallback
/// bundle at compile time.
#[macro_export]
macro_rules! t {
    ($i18n:expr, $key:literal) => {
        $crate::i18n::fl!($i18n.loader(), $key)
    };
    ($i18n:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($i18n.loader(), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/ko/{DOMAIN}.ftl`
const DOMAIN: &str = "dpa-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Languages the page ships with. `Ko` is the default and fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Ko,
    En,
    Ja,
    ZhCn,
    ZhHk,
    Ru,
    Es,
    Pt,
    Fr,
    De,
    Hi,
}

impl Language {
    pub const DEFAULT: Language = Language::Ko;

    /// Display order of the language picker.
    pub const ALL: [Language; 11] = [
        Language::Ko,
        Language::En,
        Language::Ja,
        Language::ZhCn,
        Language::ZhHk,
        Language::Ru,
        Language::Es,
        Language::Pt,
        Language::Fr,
        Language::De,
        Language::Hi,
    ];

    /// BCP 47 code, also the bundle folder name and the `lang` attribute value.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Ja => "ja",
            Language::ZhCn => "zh-CN",
            Language::ZhHk => "zh-HK",
            Language::Ru => "ru",
            Language::Es => "es",
            Language::Pt => "pt",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Hi => "hi",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ko => "한국어",
            Language::En => "English",
            Language::Ja => "日本語",
            Language::ZhCn => "中文 (简体)",
            Language::ZhHk => "中文 (繁體)",
            Language::Ru => "Русский",
            Language::Es => "Español",
            Language::Pt => "Português",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Hi => "हिन्दी",
        }
    }

    /// Short badge shown on the picker button.
    pub fn badge(self) -> &'static str {
        match self {
            Language::Ko => "KO",
            Language::En => "EN",
            Language::Ja => "JA",
            Language::ZhCn => "ZH",
            Language::ZhHk => "HK",
            Language::Ru => "RU",
            Language::Es => "ES",
            Language::Pt => "PT",
            Language::Fr => "FR",
            Language::De => "DE",
            Language::Hi => "HI",
        }
    }

    /// Open Graph locale (`og:locale`).
    pub fn og_locale(self) -> &'static str {
        match self {
            Language::Ko => "ko_KR",
            Language::En => "en_US",
            Language::Ja => "ja_JP",
            Language::ZhCn => "zh_CN",
            Language::ZhHk => "zh_HK",
            Language::Ru => "ru_RU",
            Language::Es => "es_ES",
            Language::Pt => "pt_BR",
            Language::Fr => "fr_FR",
            Language::De => "de_DE",
            Language::Hi => "hi_IN",
        }
    }

    /// Match a raw code against the supported set.
    ///
    /// Exact (case-insensitive) match first, then the primary subtag
    /// (`en-US` -> `en`, `zh` / `zh-TW` -> `zh-CN`).
    pub fn from_code(raw: &str) -> Option<Language> {
        let raw = raw.trim().replace('_', "-");
        if raw.is_empty() {
            return None;
        }
        if let Some(exact) = Self::ALL
            .iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(&raw))
        {
            return Some(*exact);
        }
        let primary = raw.split('-').next().unwrap_or_default();
        Self::ALL
            .iter()
            .find(|lang| {
                lang.code()
                    .split('-')
                    .next()
                    .is_some_and(|p| p.eq_ignore_ascii_case(primary))
            })
            .copied()
    }

    /// Like [`Language::from_code`] but never fails: unknown codes map to the default.
    pub fn resolve(raw: &str) -> Language {
        Self::from_code(raw).unwrap_or(Self::DEFAULT)
    }

    fn identifier(self) -> LanguageIdentifier {
        // All codes above are valid BCP 47 tags.
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// List embedded language folders (for diagnostics and tests).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Owns a Fluent loader. Cheap to clone; clones share the loaded bundles.
#[derive(Clone)]
pub struct Localizer {
    loader: Arc<FluentLanguageLoader>,
}

impl Localizer {
    /// Loader with only the fallback (`ko`) bundle selected.
    pub fn new() -> Self {
        let loader = FluentLanguageLoader::new(DOMAIN, Language::DEFAULT.identifier());
        loader.set_use_isolating(false);
        let localizer = Self {
            loader: Arc::new(loader),
        };
        if let Err(err) = localizer.select(Language::DEFAULT) {
            tracing::error!("[i18n] fallback bundle failed to load: {err}");
        }
        localizer
    }

    /// Switch bundles. The fallback bundle stays loaded behind the requested one.
    pub fn select(&self, language: Language) -> Result<(), PageError> {
        i18n_embed::select(&*self.loader, &Localizations, &[language.identifier()])?;
        Ok(())
    }

    pub fn loader(&self) -> &FluentLanguageLoader {
        &self.loader
    }

    /// Dynamic lookup (falls back to `ko` when the key is missing).
    pub fn get(&self, key: &str) -> String {
        self.loader.get(key)
    }

    /// Collect the string array stored as `{prefix}-1`, `{prefix}-2`, ...
    pub fn list(&self, prefix: &str) -> Vec<String> {
        (1..)
            .map(|index| format!("{prefix}-{index}"))
            .take_while(|key| self.loader.has(key))
            .map(|key| self.loader.get(&key))
            .collect()
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Language)>;

/// Selected language, its persistence and the callbacks interested in changes.
///
/// Subscribers run synchronously inside [`LanguageSession::select`] and must
/// not call back into the session.
pub struct LanguageSession {
    current: Language,
    store: Box<dyn LanguageStore>,
    localizer: Localizer,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl LanguageSession {
    /// Read the stored preference once; absent or unrecognized codes yield the default.
    pub fn restore(store: Box<dyn LanguageStore>, localizer: Localizer) -> Self {
        let current = store
            .load()
            .and_then(|code| Language::from_code(&code))
            .unwrap_or(Language::DEFAULT);
        if let Err(err) = localizer.select(current) {
            tracing::warn!("[i18n] could not select {current}: {err}; continuing with fallback");
        }
        tracing::debug!("[i18n] restored language {current}");
        Self {
            current,
            store,
            localizer,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn subscribe(&mut self, callback: impl FnMut(Language) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    /// Switch bundles, persist the choice and notify subscribers.
    ///
    /// A persistence failure is logged and does not abort the switch.
    pub fn select(&mut self, language: Language) -> Result<(), PageError> {
        self.localizer.select(language)?;
        if let Err(err) = self.store.save(language.code()) {
            tracing::warn!("[i18n] language preference not persisted: {err}");
        }
        self.current = language;
        tracing::info!("[i18n] language changed to {language}");
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(language);
        }
        Ok(())
    }
}

/// Context value giving components access to the language session.
#[derive(Clone)]
pub struct LanguageContext {
    language: Signal<Language>,
    localizer: Localizer,
    session: Rc<RefCell<LanguageSession>>,
}

impl LanguageContext {
    /// Reactive read: the calling component re-renders on language change.
    pub fn current(&self) -> Language {
        (self.language)()
    }

    /// Non-reactive read.
    pub fn peek(&self) -> Language {
        *self.language.peek()
    }

    pub fn select(&self, language: Language) {
        if let Err(err) = self.session.borrow_mut().select(language) {
            tracing::warn!("[i18n] failed switching to {language}: {err}");
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(Language) + 'static) -> SubscriptionId {
        self.session.borrow_mut().subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.session.borrow_mut().unsubscribe(id);
    }

    /// Rendering snapshot. Reactive like [`LanguageContext::current`].
    pub fn i18n(&self) -> I18n {
        I18n::new(self.current(), self.localizer.clone())
    }
}

/// Build the session from the platform store and provide it to descendants.
pub fn use_language_provider(storage_key: &str) -> LanguageContext {
    let storage_key = storage_key.to_string();
    use_context_provider(move || {
        let session = LanguageSession::restore(storage::platform_store(&storage_key), Localizer::new());
        let localizer = session.localizer().clone();
        let language = Signal::new(session.current());
        let session = Rc::new(RefCell::new(session));
        {
            let mut language = language;
            session.borrow_mut().subscribe(move |lang| language.set(lang));
        }
        LanguageContext {
            language,
            localizer,
            session,
        }
    })
}

/// Snapshot of the active language for rendering.
#[derive(Clone)]
pub struct I18n {
    pub language: Language,
    localizer: Localizer,
}

impl I18n {
    pub fn new(language: Language, localizer: Localizer) -> Self {
        Self {
            language,
            localizer,
        }
    }

    pub fn loader(&self) -> &FluentLanguageLoader {
        self.localizer.loader()
    }

    pub fn list(&self, prefix: &str) -> Vec<String> {
        self.localizer.list(prefix)
    }
}

/// Subscribe the calling component to language changes and hand out the localizer.
pub fn use_i18n() -> I18n {
    use_context::<LanguageContext>().i18n()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::i18n::fl;

    #[test]
    fn every_language_has_an_embedded_bundle() {
        let embedded = available_languages();
        for lang in Language::ALL {
            assert!(
                embedded.iter().any(|l| l == lang.code()),
                "missing bundle folder for {lang}"
            );
        }
    }

    #[test]
    fn basic_lookup_uses_fallback() {
        let localizer = Localizer::new();
        let s = fl!(localizer.loader(), "nav-faq");
        assert_eq!(s, "자주 묻는 질문");
    }

    #[test]
    fn switching_changes_lookups() {
        let localizer = Localizer::new();
        localizer.select(Language::En).unwrap();
        assert_eq!(localizer.get("nav-contact"), "Contact");
        localizer.select(Language::De).unwrap();
        assert_eq!(localizer.get("nav-contact"), "Kontakt");
    }

    #[test]
    fn list_collects_numbered_keys() {
        let localizer = Localizer::new();
        localizer.select(Language::En).unwrap();
        assert_eq!(localizer.list("faq-question").len(), 3);
        assert_eq!(localizer.list("functions-audit-item").len(), 3);
        assert!(localizer.list("no-such-prefix").is_empty());
    }

    #[test]
    fn codes_resolve_with_fallback() {
        assert_eq!(Language::from_code("zh-cn"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("zh"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("zh-TW"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("zh_HK"), Some(Language::ZhHk));
        assert_eq!(Language::from_code("en-US"), Some(Language::En));
        assert_eq!(Language::from_code("pt-PT"), Some(Language::Pt));
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::resolve("xx"), Language::Ko);
        assert_eq!(Language::resolve(""), Language::Ko);
        for lang in Language::ALL {
            assert_eq!(Language::resolve(lang.code()), lang);
        }
    }

    #[test]
    fn restore_falls_back_on_unknown_stored_code() {
        let store = MemoryStore::with_value("klingon");
        let session = LanguageSession::restore(Box::new(store), Localizer::new());
        assert_eq!(session.current(), Language::Ko);

        let empty = LanguageSession::restore(Box::new(MemoryStore::default()), Localizer::new());
        assert_eq!(empty.current(), Language::Ko);
    }

    #[test]
    fn select_notifies_subscribers_and_persists() {
        let store = MemoryStore::default();
        let mut session = LanguageSession::restore(Box::new(store.clone()), Localizer::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = session.subscribe(move |lang| sink.borrow_mut().push(lang));

        session.select(Language::Ja).unwrap();
        session.unsubscribe(id);
        session.select(Language::Fr).unwrap();

        assert_eq!(*seen.borrow(), vec![Language::Ja]);
        assert_eq!(store.value().as_deref(), Some("fr"));
        assert_eq!(session.current(), Language::Fr);
        assert_eq!(session.localizer().get("nav-contact"), "Contact");
    }
}
