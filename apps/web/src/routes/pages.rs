// Localized page handlers. Presentation is deliberately minimal: the pages
// exist to put translated strings and upstream display data on screen, with
// upstream failures degrading to a rendered page rather than an error.

use axum::extract::{Path, State};
use axum::response::Html;
use tracing::warn;

use crate::i18n::locale::is_locale_segment;
use crate::sanitize::sanitize_rich_text;
use crate::state::AppState;

fn page(lang: &str, title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\"><head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>{body}</body></html>"
    ))
}

/// Language attribute for a page: the pattern-valid URL prefix as-is
/// (supported or not), else the configured default.
fn display_lang<'a>(state: &'a AppState, locale: &'a str) -> &'a str {
    if is_locale_segment(locale) {
        locale
    } else {
        state.config.default_locale.as_str()
    }
}

/// GET /:locale/dashboard
pub async fn dashboard_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Html<String> {
    let t = &state.translator;
    let lang = display_lang(&state, &locale);
    let title = t.translate(&locale, "DashboardPage.title");
    let body = format!(
        "<h1>{title}</h1><p>{}</p><nav><a href=\"/{lang}/match\">{}</a> <a href=\"/{lang}/resume\">{}</a></nav>",
        t.translate(&locale, "DashboardPage.subtitle"),
        t.translate(&locale, "Nav.match"),
        t.translate(&locale, "Nav.resume"),
    );
    page(lang, &title, &body)
}

/// GET /:locale/match
pub async fn match_page(State(state): State<AppState>, Path(locale): Path<String>) -> Html<String> {
    let t = &state.translator;
    let lang = display_lang(&state, &locale);
    let title = t.translate(&locale, "MatchPage.title");
    let overview = match state.api.match_overview().await {
        Ok(overview) => {
            let matched = overview.matched.to_string();
            let open_roles = overview.open_roles.to_string();
            t.translate_with(
                &locale,
                "MatchPage.overview",
                &[("matched", matched.as_str()), ("openRoles", open_roles.as_str())],
            )
        }
        Err(e) => {
            warn!("match overview unavailable: {e}");
            t.translate(&locale, "Common.upstreamUnavailable")
        }
    };
    let body = format!(
        "<h1>{title}</h1><p>{}</p><p>{overview}</p>",
        t.translate(&locale, "MatchPage.tagline"),
    );
    page(lang, &title, &body)
}

/// GET /:locale/resume
pub async fn resume_upload_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Html<String> {
    let t = &state.translator;
    let lang = display_lang(&state, &locale);
    let title = t.translate(&locale, "ResumeUploadPage.title");
    let body = format!(
        "<h1>{title}</h1><p>{}</p><button>{}</button>",
        t.translate(&locale, "ResumeUploadPage.hint"),
        t.translate(&locale, "ResumeUploadPage.cta"),
    );
    page(lang, &title, &body)
}

/// GET /:locale/resume/:resume_id
pub async fn resume_detail_page(
    State(state): State<AppState>,
    Path((locale, resume_id)): Path<(String, String)>,
) -> Html<String> {
    let t = &state.translator;
    let lang = display_lang(&state, &locale);
    // URL-derived, entity-escape before embedding
    let safe_id = sanitize_rich_text(&resume_id);
    let title = t.translate_with(&locale, "ResumeDetailPage.title", &[("id", safe_id.as_str())]);
    let detail = match state.api.resume_summary(&resume_id).await {
        Ok(summary) => {
            let highlights = summary
                .highlights_html
                .as_deref()
                .map(sanitize_rich_text)
                .unwrap_or_default();
            format!(
                "<p>{}: {}</p><h2>{}</h2><div>{highlights}</div>",
                t.translate(&locale, "ResumeDetailPage.statusLabel"),
                sanitize_rich_text(&summary.status),
                t.translate(&locale, "ResumeDetailPage.highlightsTitle"),
            )
        }
        Err(e) => {
            warn!("résumé summary unavailable for {resume_id}: {e}");
            format!("<p>{}</p>", t.translate(&locale, "ResumeDetailPage.notFound"))
        }
    };
    page(lang, &title, &format!("<h1>{title}</h1>{detail}"))
}
