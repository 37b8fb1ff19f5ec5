use crate::config::Config;
use crate::templates::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide template catalog. Immutable after initialization in
    /// steady state; administrative mutation is guarded inside the registry.
    pub registry: &'static TemplateRegistry,
    pub config: Config,
}
