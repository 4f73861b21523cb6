//! Error type shared by the landing page runtime.
//!
//! Almost every failure on this page is absorbed (fallback language, skipped
//! observer, silent clipboard miss). The variants exist so those paths can be
//! logged with context before being dropped; only `MissingMountPoint` halts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("localization bundles could not be selected: {0}")]
    Localization(#[from] i18n_embed::I18nEmbedError),

    #[error("language preference storage failed: {0}")]
    Storage(String),

    #[error("document metadata update failed: {0}")]
    Document(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("mount point `#{0}` not found; the page cannot render")]
    MissingMountPoint(String),
}
