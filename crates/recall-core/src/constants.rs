/// Recall system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Starting score for a best-match scan. Strictly below any valid cosine
/// similarity, so the first scored alias always replaces it unless it is
/// itself exactly -1.0.
pub const SCORE_SENTINEL: f64 = -1.0;

/// Score attached to every gated, empty-knowledge, or failed result.
pub const GATED_SCORE: f64 = 0.0;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "RECALL_LOG";
