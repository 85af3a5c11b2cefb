use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::i18n::Locale;

/// One node of a message catalog: either a leaf template or a nested table.
///
/// The `en` document is authoritative for the shape; the other locales are
/// expected (not enforced) to mirror it key for key.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Leaf(String),
    Nested(BTreeMap<String, Message>),
}

impl Message {
    /// Walks a dot-delimited key down to a leaf template.
    ///
    /// Returns `None` when any segment is absent or the terminal value is a
    /// nested table rather than a string.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = self;
        for segment in key.split('.') {
            match node {
                Message::Nested(table) => node = table.get(segment)?,
                Message::Leaf(_) => return None,
            }
        }
        match node {
            Message::Leaf(template) => Some(template),
            Message::Nested(_) => None,
        }
    }
}

/// All message catalogs for the process: one per supported locale, parsed
/// once at startup from the JSON documents embedded in the binary. Read-only
/// for the process lifetime; no mutation API exists.
#[derive(Debug)]
pub struct LocaleCatalogs {
    en: Message,
    es: Message,
    zh: Message,
    ja: Message,
}

impl LocaleCatalogs {
    /// Parses the embedded catalogs.
    pub fn load() -> Result<Self> {
        Self::from_json(
            include_str!("../../locales/en.json"),
            include_str!("../../locales/es.json"),
            include_str!("../../locales/zh.json"),
            include_str!("../../locales/ja.json"),
        )
    }

    /// Builds catalogs from raw JSON documents. Tests use this to swap in
    /// small fixture catalogs.
    pub fn from_json(en: &str, es: &str, zh: &str, ja: &str) -> Result<Self> {
        Ok(LocaleCatalogs {
            en: parse_catalog(en).context("locales/en.json")?,
            es: parse_catalog(es).context("locales/es.json")?,
            zh: parse_catalog(zh).context("locales/zh.json")?,
            ja: parse_catalog(ja).context("locales/ja.json")?,
        })
    }

    pub fn get(&self, locale: Locale) -> &Message {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
            Locale::Zh => &self.zh,
            Locale::Ja => &self.ja,
        }
    }
}

fn parse_catalog(json: &str) -> Result<Message> {
    serde_json::from_str(json).context("catalog is not valid JSON")
}
