use axum::extract::Request;
use axum::http::header::CONTENT_LANGUAGE;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

/// Returns the first non-empty path segment when it looks like a locale
/// prefix, else `None`.
pub fn locale_from_path(path: &str) -> Option<&str> {
    let candidate = path.split('/').find(|s| !s.is_empty())?;
    is_locale_segment(candidate).then_some(candidate)
}

/// Locale prefix pattern: 2-5 characters, ASCII letters and hyphens only.
///
/// Deliberately not cross-checked against the supported-locale set: the
/// prefix only feeds language metadata, and the Translator's own fallback
/// covers pattern-valid but unsupported codes.
pub fn is_locale_segment(segment: &str) -> bool {
    (2..=5).contains(&segment.len())
        && segment.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}

/// Response middleware mirroring the resolved locale prefix into the
/// `Content-Language` header. Runs on every request; a pattern-invalid or
/// absent prefix leaves the response untouched.
pub async fn content_language(req: Request, next: Next) -> Response {
    let resolved = locale_from_path(req.uri().path()).map(str::to_owned);
    let mut response = next.run(req).await;
    if let Some(code) = resolved {
        if let Ok(value) = HeaderValue::from_str(&code) {
            response.headers_mut().insert(CONTENT_LANGUAGE, value);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_first_segment() {
        assert_eq!(locale_from_path("/es/dashboard"), Some("es"));
        assert_eq!(locale_from_path("/en/resume/abc-123"), Some("en"));
    }

    #[test]
    fn test_region_subtag_is_pattern_valid() {
        assert_eq!(locale_from_path("/pt-BR/dashboard"), Some("pt-BR"));
    }

    #[test]
    fn test_digits_fail_the_pattern() {
        assert_eq!(locale_from_path("/12/dashboard"), None);
    }

    #[test]
    fn test_length_bounds() {
        assert!(!is_locale_segment("e"));
        assert!(is_locale_segment("en"));
        assert!(is_locale_segment("pt-BR"));
        assert!(!is_locale_segment("toolong"));
    }

    #[test]
    fn test_non_letter_characters_rejected() {
        assert!(!is_locale_segment("e_n"));
        assert!(!is_locale_segment("en!"));
        assert!(!is_locale_segment("e1"));
    }

    #[test]
    fn test_empty_and_rootless_paths() {
        assert_eq!(locale_from_path("/"), None);
        assert_eq!(locale_from_path(""), None);
        assert_eq!(locale_from_path("//es//x"), Some("es"));
    }

    #[test]
    fn test_long_first_segment_is_not_a_locale() {
        assert_eq!(locale_from_path("/dashboard"), None);
    }
}
