//! Language switching end to end: stored preference, session, subscribers and
//! the document metadata they keep in step. Runs against the in-memory store
//! and document so no browser is needed.

use std::cell::RefCell;
use std::rc::Rc;

use ui::config::SiteConfig;
use ui::core::storage::MemoryStore;
use ui::i18n::{Language, LanguageSession, Localizer};
use ui::seo::{seo_config, synchronize, InMemoryDocument};

/// Session restored from `store`, with a subscriber mirroring every change
/// into a shared document (the same wiring the page sets up at mount).
fn wired_session(store: &MemoryStore, site: &SiteConfig) -> (LanguageSession, Rc<RefCell<InMemoryDocument>>) {
    let mut session = LanguageSession::restore(Box::new(store.clone()), Localizer::new());
    let document = Rc::new(RefCell::new(InMemoryDocument::default()));

    synchronize(&mut *document.borrow_mut(), session.current().code(), site)
        .expect("initial sync");

    let sink = document.clone();
    let site = site.clone();
    session.subscribe(move |language| {
        synchronize(&mut *sink.borrow_mut(), language.code(), &site).expect("sync on change");
    });

    (session, document)
}

#[test]
fn restored_english_then_korean_selection() {
    let site = SiteConfig::default();
    let store = MemoryStore::with_value("en");
    let (mut session, document) = wired_session(&store, &site);

    assert_eq!(session.current(), Language::En);
    assert_eq!(document.borrow().title, seo_config(Language::En).title);
    assert_eq!(document.borrow().lang.as_deref(), Some("en"));

    session.select(Language::Ko).expect("select ko");

    assert_eq!(store.value().as_deref(), Some("ko"));
    let doc = document.borrow();
    assert_eq!(doc.title, seo_config(Language::Ko).title);
    assert_eq!(doc.lang.as_deref(), Some("ko"));
    assert_eq!(doc.canonical_href(), Some("https://dpa.network?lang=ko"));
    assert_eq!(
        doc.meta_content("property", "og:locale"),
        Some("ko_KR")
    );
}

#[test]
fn every_language_sets_its_own_title_and_is_idempotent() {
    let site = SiteConfig::default();
    for language in Language::ALL {
        let mut document = InMemoryDocument::default();
        synchronize(&mut document, language.code(), &site).expect("first sync");
        let first = document.clone();
        synchronize(&mut document, language.code(), &site).expect("second sync");

        assert_eq!(document.title, seo_config(language).title, "title for {language}");
        assert_eq!(document, first, "re-sync changed the document for {language}");
        assert_eq!(document.count("link", &[("rel", "canonical")]), 1);
        assert_eq!(
            document.canonical_href().map(str::to_string),
            Some(format!("https://dpa.network?lang={}", language.code()))
        );
    }
}

#[test]
fn unknown_code_renders_like_korean() {
    let site = SiteConfig::default();
    let mut unknown = InMemoryDocument::default();
    let mut korean = InMemoryDocument::default();

    synchronize(&mut unknown, "tlh", &site).expect("unknown code");
    synchronize(&mut korean, "ko", &site).expect("ko");

    assert_eq!(unknown, korean);
}

#[test]
fn switching_back_and_forth_keeps_a_single_set_of_tags() {
    let site = SiteConfig::default();
    let store = MemoryStore::default();
    let (mut session, document) = wired_session(&store, &site);
    let baseline = document.borrow().head.len();

    for language in [Language::Ja, Language::De, Language::Hi, Language::Ko] {
        session.select(language).expect("select");
    }

    let doc = document.borrow();
    assert_eq!(doc.head.len(), baseline);
    assert_eq!(doc.lang.as_deref(), Some("ko"));
    assert_eq!(store.value().as_deref(), Some("ko"));
}
