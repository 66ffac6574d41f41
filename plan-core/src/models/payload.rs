use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RiskProfile;

/// The normalized request body sent to every analysis endpoint.
///
/// Produced only by [`crate::mapper::map_submission`]; currency and rate
/// fields are decimals, month and count fields are integers, and all text
/// passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub age: i32,
    pub income: Decimal,
    pub expenses: Decimal,
    pub dependents: i32,
    pub emergency_fund: Decimal,
    pub insurances: Vec<String>,
    pub loans: Vec<LoanPayload>,
    pub goals: Vec<GoalPayload>,
    /// Sent as `""` when unset; the service expects a string.
    #[serde(
        serialize_with = "risk_profile_as_text",
        deserialize_with = "risk_profile_from_text"
    )]
    pub risk_profile: Option<RiskProfile>,
}

fn risk_profile_as_text<S>(
    risk_profile: &Option<RiskProfile>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(risk_profile.map_or("", |profile| profile.as_str()))
}

fn risk_profile_from_text<'de, D>(deserializer: D) -> Result<Option<RiskProfile>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }
    RiskProfile::parse(&text)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown risk profile '{text}'")))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPayload {
    #[serde(rename = "type")]
    pub loan_type: String,
    pub amount: Decimal,
    pub tenure_months: i32,
    pub installment: Decimal,
    pub interest_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPayload {
    pub name: String,
    pub target_amount: Decimal,
    pub months_to_achieve: i32,
    pub current_savings: Decimal,
    pub sip: Decimal,
    pub priority: String,
}
