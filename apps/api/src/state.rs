use std::sync::Arc;

use crate::db::PostmetaSource;
use crate::generation::generator::ResumeGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Row fetch collaborator. Default: `MySqlPostmetaSource`.
    pub rows: Arc<dyn PostmetaSource>,
    /// Resume text generator. Default: `LlmResumeGenerator`.
    pub generator: Arc<dyn ResumeGenerator>,
}
