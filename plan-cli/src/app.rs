use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use plan_core::{PipelineOrchestrator, PipelineOutcome, PlanFormState, ServiceConfig, ServiceRegistry};
use plan_http::HttpServiceFactory;
use tracing::{debug, info, warn};

use crate::profile_loader;

/// Build a [`ServiceRegistry`] with every backend compiled into this binary.
pub fn build_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register(Box::new(HttpServiceFactory));
    registry
}

/// Assemble the form from the files given on the command line.
///
/// Returns `None` when no profile was supplied; loan and goal files are
/// ignored in that case since there is nothing to attach them to.
pub fn load_form(
    profile: Option<&Path>,
    loans: Option<&Path>,
    goals: Option<&Path>,
) -> Result<Option<PlanFormState>> {
    let Some(profile) = profile else {
        if loans.is_some() || goals.is_some() {
            warn!("Loan/goal files given without a profile, ignoring them");
        }
        return Ok(None);
    };

    let mut form = profile_loader::load_profile_file(profile)
        .with_context(|| format!("failed to load profile '{}'", profile.display()))?;

    if let Some(path) = loans {
        let added = profile_loader::append_loans_file(&mut form, path)
            .with_context(|| format!("failed to load loans '{}'", path.display()))?;
        debug!(added, "Loans appended from CSV");
    }
    if let Some(path) = goals {
        let added = profile_loader::append_goals_file(&mut form, path)
            .with_context(|| format!("failed to load goals '{}'", path.display()))?;
        debug!(added, "Goals appended from CSV");
    }

    Ok(Some(form))
}

/// Map the form (if any) and run the analysis pipeline against the configured backend.
pub async fn run_plan(
    registry: &ServiceRegistry,
    config: &ServiceConfig,
    form: Option<&PlanFormState>,
) -> Result<PipelineOutcome> {
    debug!(backend = %config.backend, url = %config.base_url, "Creating analysis service");
    let service = registry
        .create(config)
        .await
        .context("failed to create analysis service")?;

    let payload = form.map(PlanFormState::to_payload);
    let orchestrator = PipelineOrchestrator::new(Arc::from(service));
    let outcome = orchestrator.run(payload.as_ref()).await;

    if let PipelineOutcome::Completed(store) = &outcome {
        info!(complete = store.is_complete(), "Plan analysed");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use plan_core::{
        Analysis, AnalysisService, GoalSuggestion, Recommendations, ServiceError, ServiceFactory,
        Stage, SubmissionPayload,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    struct CountingService(Arc<AtomicUsize>);

    #[async_trait]
    impl AnalysisService for CountingService {
        async fn suggest_goals(
            &self,
            _payload: &SubmissionPayload,
        ) -> Result<Vec<GoalSuggestion>, ServiceError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
        async fn analyze(
            &self,
            _payload: &SubmissionPayload,
        ) -> Result<Option<Analysis>, ServiceError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(ServiceError::Status {
                status: 500,
                body: String::new(),
            })
        }
        async fn recommend(
            &self,
            _payload: &SubmissionPayload,
        ) -> Result<Option<Recommendations>, ServiceError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }
    }

    struct CountingFactory(Arc<AtomicUsize>);

    #[async_trait]
    impl ServiceFactory for CountingFactory {
        fn backend_name(&self) -> &'static str {
            "counting"
        }
        async fn create(
            &self,
            _config: &ServiceConfig,
        ) -> Result<Box<dyn AnalysisService>, ServiceError> {
            Ok(Box::new(CountingService(self.0.clone())))
        }
    }

    fn counting_registry() -> (ServiceRegistry, ServiceConfig, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = ServiceRegistry::new();
        registry.register(Box::new(CountingFactory(calls.clone())));
        let config = ServiceConfig {
            backend: "counting".into(),
            ..Default::default()
        };
        (registry, config, calls)
    }

    #[test]
    fn registry_offers_http_backend() {
        assert_eq!(build_registry().available_backends(), vec!["http"]);
    }

    #[test]
    fn no_profile_means_no_form() {
        let form = load_form(None, Some(Path::new("loans.csv")), None).unwrap();
        assert_eq!(form, None);
    }

    #[tokio::test]
    async fn missing_form_runs_nothing() {
        let (registry, config, calls) = counting_registry();

        let outcome = run_plan(&registry, &config, None).await.unwrap();

        assert_eq!(outcome, PipelineOutcome::NoInput);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn form_runs_all_three_stages() {
        let (registry, config, calls) = counting_registry();
        let form = PlanFormState::with_starter_rows();

        let outcome = run_plan(&registry, &config, Some(&form)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        let PipelineOutcome::Completed(store) = outcome else {
            panic!("expected Completed");
        };
        assert!(store.error(Stage::Analyze).is_some());
        assert!(store.error(Stage::Recommend).is_none());
    }

    #[tokio::test]
    async fn unknown_backend_is_an_error() {
        let config = ServiceConfig {
            backend: "smtp".into(),
            ..Default::default()
        };
        let err = run_plan(&build_registry(), &config, None).await.unwrap_err();
        assert!(format!("{err:#}").contains("smtp"));
    }
}
