pub mod form;
pub mod mapper;
pub mod models;
pub mod parse;
pub mod pipeline;
pub mod service;

pub use form::{EntityCollection, FormRecord, PlanFormState, Toggled};
pub use mapper::map_submission;
pub use models::*;
pub use pipeline::{PipelineOrchestrator, PipelineOutcome, Stage, StageResultStore, StageState};
pub use service::{AnalysisService, ServiceConfig, ServiceError, ServiceFactory, ServiceRegistry};
