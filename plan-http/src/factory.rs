use async_trait::async_trait;
use plan_core::{AnalysisService, ServiceConfig, ServiceError, ServiceFactory};

use crate::client::HttpAnalysisService;

/// [`ServiceFactory`] for the HTTP backend.
///
/// Register this with a [`plan_core::ServiceRegistry`] to make the `"http"`
/// backend available:
///
/// ```rust,no_run
/// use plan_core::ServiceRegistry;
/// use plan_http::HttpServiceFactory;
///
/// let mut registry = ServiceRegistry::new();
/// registry.register(Box::new(HttpServiceFactory));
/// ```
pub struct HttpServiceFactory;

#[async_trait]
impl ServiceFactory for HttpServiceFactory {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    /// Build a client for `config.base_url`. No request is made here, so an
    /// unreachable server only surfaces once a stage runs.
    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn AnalysisService>, ServiceError> {
        Ok(Box::new(HttpAnalysisService::new(config)?))
    }
}
