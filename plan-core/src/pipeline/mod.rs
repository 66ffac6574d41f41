mod orchestrator;
mod stage;

pub use orchestrator::{PipelineOrchestrator, PipelineOutcome};
pub use stage::{Stage, StageResultStore, StageState};
