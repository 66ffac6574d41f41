use serde::{Deserialize, Serialize};

/// The fixed catalog of coverage types offered as checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsuranceCategory {
    Health,
    Life,
    Auto,
    HomeownersRenters,
    Disability,
    LongTermCare,
    Travel,
    Pet,
}

impl InsuranceCategory {
    pub const ALL: [InsuranceCategory; 8] = [
        InsuranceCategory::Health,
        InsuranceCategory::Life,
        InsuranceCategory::Auto,
        InsuranceCategory::HomeownersRenters,
        InsuranceCategory::Disability,
        InsuranceCategory::LongTermCare,
        InsuranceCategory::Travel,
        InsuranceCategory::Pet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Health => "Health Insurance",
            Self::Life => "Life Insurance",
            Self::Auto => "Auto Insurance",
            Self::HomeownersRenters => "Homeowners/Renters Insurance",
            Self::Disability => "Disability Insurance",
            Self::LongTermCare => "Long-term Care Insurance",
            Self::Travel => "Travel Insurance",
            Self::Pet => "Pet Insurance",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// One held coverage, identified only by its label.
///
/// Labels are usually one of [`InsuranceCategory`], but free text is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsurancePolicy(String);

impl InsurancePolicy {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// The catalog entry this policy matches, if any.
    pub fn category(&self) -> Option<InsuranceCategory> {
        InsuranceCategory::from_label(&self.0)
    }

    pub fn into_label(self) -> String {
        self.0
    }
}

impl From<InsuranceCategory> for InsurancePolicy {
    fn from(category: InsuranceCategory) -> Self {
        Self(category.label().to_string())
    }
}

impl From<&str> for InsurancePolicy {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_round_trips_through_its_label() {
        for category in InsuranceCategory::ALL {
            assert_eq!(InsuranceCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn free_text_policy_has_no_category() {
        let policy = InsurancePolicy::new("Crop Insurance");
        assert_eq!(policy.category(), None);
        assert_eq!(policy.label(), "Crop Insurance");
    }
}
