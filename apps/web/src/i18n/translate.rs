use std::sync::Arc;

use crate::i18n::catalog::{LocaleCatalogs, Message};
use crate::i18n::Locale;

/// Resolves display strings against the per-locale message catalogs.
///
/// Every resolution path has a deterministic substitute value: an unsupported
/// locale degrades to the default locale's catalog, and a missing key comes
/// back as the key itself so untranslated strings stay visible in the UI
/// instead of rendering blank.
#[derive(Clone)]
pub struct Translator {
    catalogs: Arc<LocaleCatalogs>,
    default_locale: Locale,
}

impl Translator {
    pub fn new(catalogs: Arc<LocaleCatalogs>, default_locale: Locale) -> Self {
        Translator {
            catalogs,
            default_locale,
        }
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Catalog for `code`, or the default locale's catalog when `code` is not
    /// a supported locale. Never fails.
    pub fn messages(&self, code: &str) -> &Message {
        self.catalogs
            .get(Locale::parse(code).unwrap_or(self.default_locale))
    }

    /// Translates `key` for `code` with no parameters.
    pub fn translate(&self, code: &str, key: &str) -> String {
        self.translate_with(code, key, &[])
    }

    /// Translates `key` for `code`, replacing every `{name}` occurrence in
    /// the template with the matching parameter value. Unmatched placeholders
    /// stay literal; unused parameters are ignored.
    pub fn translate_with(&self, code: &str, key: &str, params: &[(&str, &str)]) -> String {
        match self.messages(code).lookup(key) {
            Some(template) => interpolate(template, params),
            None => key.to_string(),
        }
    }
}

/// Naive global substring replacement of `{name}` placeholders. Placeholder
/// names are matched exactly and case-sensitively; values are opaque strings.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut resolved = template.to_owned();
    for (name, value) in params {
        resolved = resolved.replace(&format!("{{{name}}}"), value);
    }
    resolved
}
