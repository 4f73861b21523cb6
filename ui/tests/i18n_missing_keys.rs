use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (ko) `dpa-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a locale:
/// 1. Create `ui/i18n/<locale>/dpa-ui.ftl`
/// 2. Copy all keys from `ko/dpa-ui.ftl`
/// 3. Add a `Language` variant and register the file below.
#[test]
fn all_locales_have_all_fallback_keys() {
    const KO: &str = include_str!("../i18n/ko/dpa-ui.ftl");

    let fallback_keys = extract_keys(KO);

    assert!(!fallback_keys.is_empty(), "Fallback (ko) contains no keys.");
    assert_no_dup_keys(KO, "ko");

    let locales: &[(&str, &str)] = &[
        ("en", include_str!("../i18n/en/dpa-ui.ftl")),
        ("ja", include_str!("../i18n/ja/dpa-ui.ftl")),
        ("zh-CN", include_str!("../i18n/zh-CN/dpa-ui.ftl")),
        ("zh-HK", include_str!("../i18n/zh-HK/dpa-ui.ftl")),
        ("ru", include_str!("../i18n/ru/dpa-ui.ftl")),
        ("es", include_str!("../i18n/es/dpa-ui.ftl")),
        ("pt", include_str!("../i18n/pt/dpa-ui.ftl")),
        ("fr", include_str!("../i18n/fr/dpa-ui.ftl")),
        ("de", include_str!("../i18n/de/dpa-ui.ftl")),
        ("hi", include_str!("../i18n/hi/dpa-ui.ftl")),
    ];

    assert_eq!(
        locales.len() + 1,
        ui::i18n::Language::ALL.len(),
        "every selectable language needs a bundle registered here"
    );

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let mut missing: BTreeSet<String> = BTreeSet::new();

        for k in &fallback_keys {
            if !keys.contains(k) {
                missing.insert(k.clone());
            }
        }

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from ko, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
