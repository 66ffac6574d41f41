mod collection;
mod state;

pub use collection::{EntityCollection, FormRecord, Toggled};
pub use state::PlanFormState;
