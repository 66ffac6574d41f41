pub mod analysis;
pub mod factory;

pub use analysis::{AnalysisService, ServiceError};
pub use factory::{ServiceConfig, ServiceFactory, ServiceRegistry};
