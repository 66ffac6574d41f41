use std::time::Duration;

use async_trait::async_trait;
use plan_core::models::results::{decode_analysis, decode_recommendations, decode_suggestions};
use plan_core::{
    Analysis, AnalysisService, GoalSuggestion, Recommendations, ServiceConfig, ServiceError, Stage,
    SubmissionPayload,
};
use reqwest::Client;
use tracing::debug;

/// [`AnalysisService`] that talks JSON over HTTP to the analysis backend.
pub struct HttpAnalysisService {
    base_url: String,
    client: Client,
}

impl HttpAnalysisService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(
        &self,
        stage: Stage,
    ) -> String {
        format!("{}{}", self.base_url, stage.endpoint())
    }

    /// POST the payload to the stage endpoint and return the raw response body.
    async fn post(
        &self,
        stage: Stage,
        payload: &SubmissionPayload,
    ) -> Result<String, ServiceError> {
        let url = self.url_for(stage);
        debug!(%stage, %url, "Sending stage request");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<String, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn suggest_goals(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Vec<GoalSuggestion>, ServiceError> {
        let body = self.post(Stage::Suggest, payload).await?;
        Ok(decode_suggestions(&body)?)
    }

    async fn analyze(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Option<Analysis>, ServiceError> {
        let body = self.post(Stage::Analyze, payload).await?;
        Ok(decode_analysis(&body)?)
    }

    async fn recommend(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Option<Recommendations>, ServiceError> {
        let body = self.post(Stage::Recommend, payload).await?;
        Ok(decode_recommendations(&body)?)
    }
}
