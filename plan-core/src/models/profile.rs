use std::fmt;

use serde::{Deserialize, Serialize};

/// Investor risk appetite chosen on the profile section of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        }
    }

    /// Case-insensitive lookup by label. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|profile| profile.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text-edited scalar fields of [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Age,
    Income,
    Expenses,
    Dependents,
    EmergencyFund,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Age,
        ProfileField::Income,
        ProfileField::Expenses,
        ProfileField::Dependents,
        ProfileField::EmergencyFund,
    ];

    /// Wire/file key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Income => "income",
            Self::Expenses => "expenses",
            Self::Dependents => "dependents",
            Self::EmergencyFund => "emergency_fund",
        }
    }
}

/// Scalar profile attributes as the user typed them.
///
/// Numeric values stay text until submission; an untouched field is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    /// Age in years.
    pub age: String,
    /// Monthly income.
    pub income: String,
    /// Monthly expenses.
    pub expenses: String,
    /// Number of dependents.
    pub dependents: String,
    /// Current emergency-fund balance.
    pub emergency_fund: String,
    pub risk_profile: Option<RiskProfile>,
}

impl Profile {
    pub fn field(
        &self,
        field: ProfileField,
    ) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Age => &self.age,
            ProfileField::Income => &self.income,
            ProfileField::Expenses => &self.expenses,
            ProfileField::Dependents => &self.dependents,
            ProfileField::EmergencyFund => &self.emergency_fund,
        }
    }

    pub fn set_field(
        &mut self,
        field: ProfileField,
        value: String,
    ) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Age => &mut self.age,
            ProfileField::Income => &mut self.income,
            ProfileField::Expenses => &mut self.expenses,
            ProfileField::Dependents => &mut self.dependents,
            ProfileField::EmergencyFund => &mut self.emergency_fund,
        };
        *slot = value;
    }
}
