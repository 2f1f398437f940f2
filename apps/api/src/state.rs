use crate::agent::tools::ToolContext;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// The agent's external collaborators: content generator + both search
    /// clients. Handlers pass this straight into the orchestration loop.
    pub tools: ToolContext,
}
