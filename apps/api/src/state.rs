use std::sync::Arc;

use crate::identity::IdentityResolver;
use crate::llm_client::ModelInvoker;
use crate::persistence::PersistenceGateway;

/// The pipeline's external collaborators, injected at construction.
/// Tests substitute each one independently.
#[derive(Clone)]
pub struct Services {
    pub identity: Arc<dyn IdentityResolver>,
    pub llm: Arc<dyn ModelInvoker>,
    pub store: Arc<dyn PersistenceGateway>,
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}
