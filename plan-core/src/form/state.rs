//! The plan form as one owned value.
//!
//! Holds the scalar profile plus the three sub-entity collections. There is
//! no global store: whoever drives the form owns a `PlanFormState` and passes
//! it (or `&mut` to it) to whatever needs to read or edit it.

use crate::mapper::map_submission;
use crate::models::{
    Goal, InsuranceCategory, InsurancePolicy, Loan, Profile, ProfileField, RiskProfile,
    SubmissionPayload,
};

use super::collection::{EntityCollection, Toggled};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanFormState {
    profile: Profile,
    insurances: EntityCollection<InsurancePolicy>,
    loans: EntityCollection<Loan>,
    goals: EntityCollection<Goal>,
}

impl PlanFormState {
    /// An empty form: blank profile, no insurances, loans or goals.
    pub fn new() -> Self {
        Self::default()
    }

    /// A blank form with one empty loan row and one empty goal row, the way
    /// the form is first shown to a user.
    pub fn with_starter_rows() -> Self {
        let mut form = Self::new();
        form.loans.add_default();
        form.goals.add_default();
        form
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Sets one text-edited scalar field.
    pub fn update(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) {
        self.profile.set_field(field, value.into());
    }

    pub fn risk_profile(&self) -> Option<RiskProfile> {
        self.profile.risk_profile
    }

    pub fn set_risk_profile(
        &mut self,
        risk_profile: Option<RiskProfile>,
    ) {
        self.profile.risk_profile = risk_profile;
    }

    pub fn insurances(&self) -> &EntityCollection<InsurancePolicy> {
        &self.insurances
    }

    pub fn insurances_mut(&mut self) -> &mut EntityCollection<InsurancePolicy> {
        &mut self.insurances
    }

    /// Checkbox-style membership toggle for a catalog coverage.
    pub fn toggle_insurance(
        &mut self,
        category: InsuranceCategory,
    ) -> Toggled {
        self.insurances.toggle(category.into())
    }

    pub fn loans(&self) -> &EntityCollection<Loan> {
        &self.loans
    }

    pub fn loans_mut(&mut self) -> &mut EntityCollection<Loan> {
        &mut self.loans
    }

    pub fn goals(&self) -> &EntityCollection<Goal> {
        &self.goals
    }

    pub fn goals_mut(&mut self) -> &mut EntityCollection<Goal> {
        &mut self.goals
    }

    /// Clear all entered data for starting fresh.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Normalizes the current form into the payload sent to the service.
    pub fn to_payload(&self) -> SubmissionPayload {
        map_submission(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{GoalField, LoanField};

    #[test]
    fn new_form_is_empty_and_blank() {
        let form = PlanFormState::new();

        assert_eq!(form.profile(), &Profile::default());
        assert!(form.insurances().is_empty());
        assert!(form.loans().is_empty());
        assert!(form.goals().is_empty());
    }

    #[test]
    fn starter_rows_are_structurally_complete() {
        let form = PlanFormState::with_starter_rows();

        assert_eq!(form.loans().as_slice(), &[Loan::default()]);
        assert_eq!(form.goals().as_slice(), &[Goal::default()]);
    }

    #[test]
    fn update_touches_one_scalar() {
        let mut form = PlanFormState::new();
        form.update(ProfileField::Name, "Asha");
        form.update(ProfileField::Age, "34");

        form.update(ProfileField::Age, "35");

        assert_eq!(form.profile().name, "Asha");
        assert_eq!(form.profile().age, "35");
        assert_eq!(form.profile().income, "");
    }

    #[test]
    fn collection_edits_leave_scalars_alone() {
        let mut form = PlanFormState::new();
        form.update(ProfileField::Income, "90000");
        form.set_risk_profile(Some(RiskProfile::Moderate));
        let profile_before = form.profile().clone();

        let loan = form.loans_mut().add_default();
        form.loans_mut().update_field(loan, LoanField::Amount, "250000");
        let goal = form.goals_mut().add_default();
        form.goals_mut().update_field(goal, GoalField::Name, "Car");
        form.toggle_insurance(InsuranceCategory::Health);

        assert_eq!(form.profile(), &profile_before);
        assert_eq!(form.loans().get(0).map(|l| l.amount.as_str()), Some("250000"));
        assert_eq!(form.goals().get(0).map(|g| g.name.as_str()), Some("Car"));
        assert!(form.insurances().contains(&InsuranceCategory::Health.into()));
    }

    #[test]
    fn toggle_insurance_never_duplicates_a_category() {
        let mut form = PlanFormState::new();

        assert_eq!(form.toggle_insurance(InsuranceCategory::Life), Toggled::Added);
        assert_eq!(form.toggle_insurance(InsuranceCategory::Pet), Toggled::Added);
        assert_eq!(form.toggle_insurance(InsuranceCategory::Life), Toggled::Removed);

        assert_eq!(
            form.insurances().as_slice(),
            &[InsurancePolicy::from(InsuranceCategory::Pet)]
        );
    }

    #[test]
    fn snapshot_is_independent_of_later_edits() {
        let mut form = PlanFormState::with_starter_rows();
        form.goals_mut().update_field(0, GoalField::Name, "House");
        let snapshot = form.clone();

        form.goals_mut().remove_at(0);

        assert_eq!(snapshot.goals().len(), 1);
        assert!(form.goals().is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = PlanFormState::with_starter_rows();
        form.update(ProfileField::Name, "Asha");
        form.toggle_insurance(InsuranceCategory::Auto);

        form.clear();

        assert_eq!(form, PlanFormState::new());
    }
}
