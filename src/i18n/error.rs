use thiserror::Error;

/// Errors raised by the i18n layer.
///
/// Path resolution never produces these: an unrecognised path segment simply
/// resolves to the default locale. They surface for explicit user input and
/// for translation tables that are incomplete at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("Missing translation table for locale '{0}'")]
    MissingTranslation(&'static str),

    #[error("Duplicate translation table for locale '{0}'")]
    DuplicateTranslation(&'static str),
}
