use crate::api_client::ApiClient;
use crate::config::Config;
use crate::i18n::translate::Translator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Translator over the message catalogs loaded at startup. The catalogs
    /// are immutable for the process lifetime, so cloning the state shares
    /// them without locking.
    pub translator: Translator,
    pub api: ApiClient,
}
