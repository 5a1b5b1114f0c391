use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::interview::scoring::ResponseScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded at startup; nothing reads it after the router is built.
    #[allow(dead_code)]
    pub config: Config,
    /// Static catalogs: skill taxonomy, career paths, interview banks,
    /// market snapshot. Validated at startup.
    pub catalog: Arc<Catalog>,
    /// Pluggable response scorer. Default: KeywordResponseScorer.
    pub response_scorer: Arc<dyn ResponseScorer>,
}

#[cfg(test)]
impl AppState {
    /// State with built-in catalogs and the default scorer, for handler tests.
    pub fn for_tests() -> Self {
        use crate::interview::scoring::KeywordResponseScorer;

        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
            },
            catalog: Arc::new(Catalog::builtin()),
            response_scorer: Arc::new(KeywordResponseScorer),
        }
    }
}
