// Legacy pre-internationalization routes, kept alive only to forward old
// links to their localized successors. Each handler is a pure one-shot
// transition: compute exactly one target from the configured default locale,
// redirect, done. No request data other than the path parameter is consulted.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::Redirect;

use crate::i18n::Locale;
use crate::state::AppState;

/// Target for the legacy `/match` route.
pub fn match_target(default_locale: Locale) -> String {
    format!("/{default_locale}/match")
}

/// Target for the legacy `/resume` routes. A missing or empty id degrades to
/// the bare résumé path rather than producing a malformed URL.
pub fn resume_target(default_locale: Locale, id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => format!("/{default_locale}/resume/{id}"),
        _ => format!("/{default_locale}/resume"),
    }
}

/// GET /match
pub async fn legacy_match(State(state): State<AppState>) -> Redirect {
    Redirect::permanent(&match_target(state.config.default_locale))
}

/// GET /resume
pub async fn legacy_resume(State(state): State<AppState>) -> Redirect {
    Redirect::permanent(&resume_target(state.config.default_locale, None))
}

/// GET /resume/:resume_id
///
/// The path parameter bag is awaited as part of extraction; a bag without a
/// `resume_id` entry falls back to the bare résumé path.
pub async fn legacy_resume_by_id(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
) -> Redirect {
    let id = params.get("resume_id").map(String::as_str);
    Redirect::permanent(&resume_target(state.config.default_locale, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_target_default_locale() {
        assert_eq!(match_target(Locale::En), "/en/match");
        assert_eq!(match_target(Locale::Ja), "/ja/match");
    }

    #[test]
    fn test_resume_target_without_id() {
        assert_eq!(resume_target(Locale::En, None), "/en/resume");
    }

    #[test]
    fn test_resume_target_with_id() {
        assert_eq!(
            resume_target(Locale::En, Some("abc-123")),
            "/en/resume/abc-123"
        );
    }

    #[test]
    fn test_resume_target_empty_id_degrades() {
        assert_eq!(resume_target(Locale::En, Some("")), "/en/resume");
    }

    #[test]
    fn test_resume_target_follows_configured_default() {
        assert_eq!(
            resume_target(Locale::Es, Some("abc-123")),
            "/es/resume/abc-123"
        );
    }
}
