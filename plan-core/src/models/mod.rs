mod goal;
mod insurance;
mod loan;
mod payload;
mod profile;
pub mod results;

pub use goal::{Goal, GoalField};
pub use insurance::{InsuranceCategory, InsurancePolicy};
pub use loan::{Loan, LoanField, LoanType};
pub use payload::{GoalPayload, LoanPayload, SubmissionPayload};
pub use profile::{Profile, ProfileField, RiskProfile};
pub use results::{
    Allocation, Analysis, GoalAssessment, GoalRecommendation, GoalSuggestion, PickItem,
    Recommendations,
};
