use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use ammonia::Builder;

/// Allow-list used for server-authored rich text embedded in pages:
/// inline emphasis plus links, nothing else.
const ALLOWED_TAGS: &[&str] = &["strong", "em", "u", "a"];
const ALLOWED_LINK_ATTRS: &[&str] = &["href", "target", "rel"];

fn cleaner() -> &'static Builder<'static> {
    static CLEANER: OnceLock<Builder<'static>> = OnceLock::new();
    CLEANER.get_or_init(|| {
        let mut builder = Builder::default();
        builder.tags(HashSet::from_iter(ALLOWED_TAGS.iter().copied()));
        builder.tag_attributes(HashMap::from([(
            "a",
            HashSet::from_iter(ALLOWED_LINK_ATTRS.iter().copied()),
        )]));
        // rel is allow-listed explicitly, so disable ammonia's rel rewriting
        builder.link_rel(None);
        builder
    })
}

/// Sanitizes untrusted rich text down to the allow-list. Never fails:
/// malformed input reduces to a valid (possibly empty) string, and plain
/// text comes back entity-escaped.
pub fn sanitize_rich_text(input: &str) -> String {
    cleaner().clean(input).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_allowed_inline_tags() {
        assert_eq!(
            sanitize_rich_text("<strong>Led</strong> a team of <em>12</em>"),
            "<strong>Led</strong> a team of <em>12</em>"
        );
    }

    #[test]
    fn test_keeps_link_attributes() {
        let out = sanitize_rich_text(r#"<a href="https://example.com" target="_blank" rel="noopener">site</a>"#);
        assert!(out.contains(r#"href="https://example.com""#));
        assert!(out.contains(r#"target="_blank""#));
        assert!(out.contains(r#"rel="noopener""#));
    }

    #[test]
    fn test_strips_script() {
        assert_eq!(sanitize_rich_text("<script>alert(1)</script>hi"), "hi");
    }

    #[test]
    fn test_strips_disallowed_tags_keeps_text() {
        assert_eq!(sanitize_rich_text("<div><p>text</p></div>"), "text");
    }

    #[test]
    fn test_strips_event_handler_attributes() {
        let out = sanitize_rich_text(r#"<a href="/x" onclick="evil()">x</a>"#);
        assert!(!out.contains("onclick"));
        assert!(out.contains(r#"href="/x""#));
    }

    #[test]
    fn test_escapes_plain_text() {
        assert_eq!(sanitize_rich_text("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn test_malformed_input_never_errors() {
        for garbage in ["<a<<<", "<strong>unclosed", "</em>", "<>", ""] {
            let _ = sanitize_rich_text(garbage);
        }
    }
}
