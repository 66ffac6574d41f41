//! Drives the three analysis stages against a single submission.
//!
//! Stages run strictly one after another in [`Stage::ORDER`]. Every stage
//! settles its own slot in the [`StageResultStore`] whether its call
//! succeeded or not, and the driver always moves on to the next stage.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info, warn};

use super::stage::{Stage, StageResultStore, StageState};
use crate::models::SubmissionPayload;
use crate::service::{AnalysisService, ServiceError};

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// No submission was available. No stage was started.
    NoInput,
    /// All stages settled. Individual stages may still have failed.
    Completed(StageResultStore),
}

pub struct PipelineOrchestrator {
    service: Arc<dyn AnalysisService>,
    store_tx: watch::Sender<StageResultStore>,
}

impl PipelineOrchestrator {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        let (store_tx, _) = watch::channel(StageResultStore::default());
        Self { service, store_tx }
    }

    /// Receive a fresh store snapshot every time a stage settles.
    pub fn subscribe(&self) -> watch::Receiver<StageResultStore> {
        self.store_tx.subscribe()
    }

    pub fn snapshot(&self) -> StageResultStore {
        self.store_tx.borrow().clone()
    }

    /// Run every stage against `payload`.
    ///
    /// A missing payload returns [`PipelineOutcome::NoInput`] without
    /// touching the service or the store.
    pub async fn run(
        &self,
        payload: Option<&SubmissionPayload>,
    ) -> PipelineOutcome {
        let Some(payload) = payload else {
            warn!("No submission available, pipeline not started");
            return PipelineOutcome::NoInput;
        };

        self.store_tx.send_replace(StageResultStore::default());
        info!(name = %payload.name, "Starting analysis pipeline");

        for stage in Stage::ORDER {
            self.run_stage(stage, payload).await;
        }

        let store = self.snapshot();
        let failed = Stage::ORDER
            .iter()
            .filter(|stage| store.error(**stage).is_some())
            .count();
        info!(failed, "Analysis pipeline finished");

        PipelineOutcome::Completed(store)
    }

    async fn run_stage(
        &self,
        stage: Stage,
        payload: &SubmissionPayload,
    ) {
        info!(%stage, "Stage started");

        match stage {
            Stage::Suggest => {
                let outcome = self.service.suggest_goals(payload).await.map(Some);
                self.store_tx
                    .send_modify(|store| settle_stage(stage, &mut store.suggestions, outcome));
            }
            Stage::Analyze => {
                let outcome = self.service.analyze(payload).await;
                self.store_tx
                    .send_modify(|store| settle_stage(stage, &mut store.analysis, outcome));
            }
            Stage::Recommend => {
                let outcome = self.service.recommend(payload).await;
                self.store_tx.send_modify(|store| {
                    settle_stage(stage, &mut store.recommendations, outcome)
                });
            }
        }
    }
}

fn settle_stage<R>(
    stage: Stage,
    state: &mut StageState<R>,
    outcome: Result<Option<R>, ServiceError>,
) {
    let outcome = outcome.map_err(|err| {
        error!(%stage, error = %err, "Stage failed");
        err.to_string()
    });

    if state.settle(outcome) {
        info!(%stage, has_result = state.result.is_some(), "Stage settled");
    }
}
