//! Canonical stage results and the decoders that produce them.
//!
//! The analysis service has shipped several response shapes over time
//! (suggestions as bare strings or as `{goal, reason}` objects, optional
//! explanation fields, a nullable recommendations envelope). Everything is
//! decoded here into one internal shape so nothing downstream has to care.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// A goal the service thinks the user should add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalSuggestion {
    pub goal: String,
    /// Missing for legacy plain-string suggestions.
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub equity: Decimal,
    pub bonds: Decimal,
    pub commodities: Decimal,
}

/// What the service suggests when a goal is not reachable as planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecommendation {
    pub suggested_sip: Decimal,
    #[serde(deserialize_with = "lenient_months")]
    pub extend_by_months: i32,
}

/// Feasibility verdict for one submitted goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAssessment {
    pub name: String,
    pub target: Decimal,
    #[serde(deserialize_with = "lenient_months")]
    pub horizon_months: i32,
    pub expected_return_annual: Decimal,
    pub projected_value: Decimal,
    pub feasible: bool,
    #[serde(default)]
    pub recommendation: Option<GoalRecommendation>,
}

impl GoalAssessment {
    /// Projected value as a percentage of target, capped at 100.
    ///
    /// A ratio too large to represent is also reported as 100.
    pub fn progress_percent(&self) -> Decimal {
        if self.target <= Decimal::ZERO {
            return Decimal::ONE_HUNDRED;
        }
        self.projected_value
            .checked_div(self.target)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Decimal::ONE_HUNDRED, |percent| percent.min(Decimal::ONE_HUNDRED))
    }
}

/// Result of the Analyze stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub monthly_surplus: Decimal,
    pub emergency_fund_ok: bool,
    pub ideal_emergency_fund: Decimal,
    pub recommended_allocation: Allocation,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goal_analysis: Vec<GoalAssessment>,
    #[serde(default)]
    pub allocation_explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickItem {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub horizon: String,
    #[serde(default)]
    pub reason: String,
}

/// Result of the Recommend stage: instrument picks per asset class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub equity_picks: Vec<PickItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bond_picks: Vec<PickItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commodity_picks: Vec<PickItem>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.equity_picks.is_empty() && self.bond_picks.is_empty() && self.commodity_picks.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Wire envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuggestionWire {
    Detailed {
        goal: String,
        #[serde(default)]
        reason: Option<String>,
    },
    Plain(String),
}

impl From<SuggestionWire> for GoalSuggestion {
    fn from(wire: SuggestionWire) -> Self {
        match wire {
            SuggestionWire::Detailed { goal, reason } => GoalSuggestion { goal, reason },
            SuggestionWire::Plain(goal) => GoalSuggestion { goal, reason: None },
        }
    }
}

#[derive(Debug, Deserialize)]
struct SuggestGoalsEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    suggested_goals: Vec<SuggestionWire>,
}

#[derive(Debug, Deserialize)]
struct RecommendationsEnvelope {
    #[serde(default)]
    recommendations: Option<Recommendations>,
}

/// Decodes a `/suggest-goals/` response body.
///
/// A missing or null `suggested_goals` list is an empty result, not an error.
pub fn decode_suggestions(body: &str) -> Result<Vec<GoalSuggestion>, serde_json::Error> {
    let envelope: SuggestGoalsEnvelope = serde_json::from_str(body)?;
    Ok(envelope
        .suggested_goals
        .into_iter()
        .map(GoalSuggestion::from)
        .collect())
}

/// Decodes an `/analyze` response body. A JSON `null` body yields `None`.
pub fn decode_analysis(body: &str) -> Result<Option<Analysis>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Decodes a `/get_stock_recommendations/` response body.
///
/// A missing or null `recommendations` object yields `None`.
pub fn decode_recommendations(body: &str) -> Result<Option<Recommendations>, serde_json::Error> {
    let envelope: Option<RecommendationsEnvelope> = serde_json::from_str(body)?;
    Ok(envelope.and_then(|e| e.recommendations))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Month counts sometimes arrive as floats (`24.0`); truncate them.
fn lenient_months<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let months = <Decimal as Deserialize>::deserialize(deserializer)?;
    months
        .trunc()
        .to_i32()
        .ok_or_else(|| D::Error::custom(format!("month count {months} out of range")))
}
