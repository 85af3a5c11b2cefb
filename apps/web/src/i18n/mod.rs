// Internationalization layer: embedded message catalogs, the translator,
// and locale resolution from the URL prefix.

pub mod catalog;
pub mod locale;
pub mod translate;

use std::fmt;

/// Supported UI locales. Exactly one message catalog exists per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Es,
    Zh,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Es, Locale::Zh, Locale::Ja];

    /// Parses a supported locale code. Case-sensitive: URL prefixes and
    /// `DEFAULT_LOCALE` are expected in lowercase.
    pub fn parse(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            "zh" => Some(Locale::Zh),
            "ja" => Some(Locale::Ja),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
