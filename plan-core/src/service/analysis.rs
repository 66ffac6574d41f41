use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Analysis, GoalSuggestion, Recommendations, SubmissionPayload};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Decode(err.to_string())
    }
}

/// The remote analysis service, one method per pipeline stage.
///
/// Every method receives the same submission payload and returns its result
/// already decoded into the canonical shape.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn suggest_goals(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Vec<GoalSuggestion>, ServiceError>;

    async fn analyze(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Option<Analysis>, ServiceError>;

    async fn recommend(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Option<Recommendations>, ServiceError>;
}
