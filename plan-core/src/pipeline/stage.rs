use std::fmt;

use tracing::debug;

use crate::models::{Analysis, GoalSuggestion, Recommendations};

/// One of the three remote operations run by the results pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Suggest,
    Analyze,
    Recommend,
}

impl Stage {
    /// Execution order. Each stage starts only after the previous one settles.
    pub const ORDER: [Stage; 3] = [Stage::Suggest, Stage::Analyze, Stage::Recommend];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Suggest => "suggest",
            Stage::Analyze => "analyze",
            Stage::Recommend => "recommend",
        }
    }

    /// Path of the endpoint serving this stage, relative to the service base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            Stage::Suggest => "/suggest-goals/",
            Stage::Analyze => "/analyze",
            Stage::Recommend => "/get_stock_recommendations/",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of a single stage: created pending, settled exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageState<R> {
    pub result: Option<R>,
    pub loading: bool,
    /// Failure message when the stage call did not succeed.
    pub error: Option<String>,
}

impl<R> StageState<R> {
    pub fn pending() -> Self {
        Self {
            result: None,
            loading: true,
            error: None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Record the outcome of the stage call and clear `loading`.
    ///
    /// Returns `false` (and leaves the state untouched) if the stage had
    /// already settled.
    pub fn settle(
        &mut self,
        outcome: Result<Option<R>, String>,
    ) -> bool {
        if !self.loading {
            debug!("Ignoring repeated settle of an already settled stage");
            return false;
        }

        match outcome {
            Ok(result) => self.result = result,
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
        true
    }
}

impl<R> Default for StageState<R> {
    fn default() -> Self {
        Self::pending()
    }
}

/// Per-stage results consumed by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageResultStore {
    pub suggestions: StageState<Vec<GoalSuggestion>>,
    pub analysis: StageState<Analysis>,
    pub recommendations: StageState<Recommendations>,
}

impl StageResultStore {
    pub fn is_loading(
        &self,
        stage: Stage,
    ) -> bool {
        match stage {
            Stage::Suggest => self.suggestions.loading,
            Stage::Analyze => self.analysis.loading,
            Stage::Recommend => self.recommendations.loading,
        }
    }

    pub fn error(
        &self,
        stage: Stage,
    ) -> Option<&str> {
        match stage {
            Stage::Suggest => self.suggestions.error.as_deref(),
            Stage::Analyze => self.analysis.error.as_deref(),
            Stage::Recommend => self.recommendations.error.as_deref(),
        }
    }

    /// True once every stage has settled, successfully or not.
    pub fn is_complete(&self) -> bool {
        Stage::ORDER.iter().all(|stage| !self.is_loading(*stage))
    }
}
