//! Loads a financial profile from disk into a [`PlanFormState`].
//!
//! ## Profile file (TOML)
//!
//! Every key is optional. Scalar values may be written as strings or bare
//! numbers; they land in the form verbatim, so anything unparsable is later
//! submitted as 0.
//!
//! ```toml
//! name = "Asha"
//! age = 32
//! income = "1,20,000"
//! expenses = 65000
//! dependents = 2
//! emergency_fund = 150000
//! risk_profile = "Moderate"
//! insurances = ["Health Insurance", "Term Life Insurance"]
//!
//! [[loans]]
//! type = "Home Loan"
//! amount = 2500000
//! tenure_months = 240
//! installment = 22000
//! interest_rate = 8.4
//!
//! [[goals]]
//! name = "Car"
//! target_amount = 500000
//! months_to_achieve = 24
//! ```
//!
//! ## Loans / goals (CSV)
//!
//! Headers are matched by name against the record keys
//! (`type,amount,tenure_months,installment,interest_rate` for loans,
//! `name,target_amount,months_to_achieve,current_savings,sip,priority` for
//! goals). Missing columns leave the field blank. Unknown columns are ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use plan_core::{
    EntityCollection, FormRecord, GoalField, InsurancePolicy, LoanField, PlanFormState,
    ProfileField, RiskProfile,
};
use serde::Deserialize;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ProfileLoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("profile parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// `risk_profile` was set to something other than
    /// Conservative / Moderate / Aggressive.
    #[error("unrecognised risk profile '{0}'")]
    InvalidRiskProfile(String),
}

// ---------------------------------------------------------------------------
// File layout
// ---------------------------------------------------------------------------

/// A scalar cell, accepted as text or as a bare TOML number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TextValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for TextValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            TextValue::Text(s) => f.write_str(s),
            TextValue::Integer(n) => write!(f, "{n}"),
            TextValue::Float(x) => write!(f, "{x}"),
        }
    }
}

type RawRecord = BTreeMap<String, TextValue>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileFile {
    name: Option<TextValue>,
    age: Option<TextValue>,
    income: Option<TextValue>,
    expenses: Option<TextValue>,
    dependents: Option<TextValue>,
    emergency_fund: Option<TextValue>,
    risk_profile: Option<String>,
    insurances: Vec<String>,
    loans: Vec<RawRecord>,
    goals: Vec<RawRecord>,
}

impl ProfileFile {
    fn scalar(
        &self,
        field: ProfileField,
    ) -> Option<&TextValue> {
        match field {
            ProfileField::Name => self.name.as_ref(),
            ProfileField::Age => self.age.as_ref(),
            ProfileField::Income => self.income.as_ref(),
            ProfileField::Expenses => self.expenses.as_ref(),
            ProfileField::Dependents => self.dependents.as_ref(),
            ProfileField::EmergencyFund => self.emergency_fund.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Record filling
// ---------------------------------------------------------------------------

/// Append one blank record and copy every known key of `row` into it.
fn append_record<T, V>(
    collection: &mut EntityCollection<T>,
    row: &BTreeMap<String, V>,
    fields: &[T::Field],
    key_of: impl Fn(T::Field) -> &'static str,
) where
    T: FormRecord,
    V: fmt::Display,
{
    let index = collection.add_default();
    for &field in fields {
        if let Some(value) = row.get(key_of(field)) {
            collection.update_field(index, field, value.to_string());
        }
    }

    for key in row.keys() {
        if !fields.iter().any(|&field| key_of(field) == key) {
            debug!(key = %key, "Ignoring unknown column");
        }
    }
}

fn append_loan<V: fmt::Display>(
    form: &mut PlanFormState,
    row: &BTreeMap<String, V>,
) {
    append_record(form.loans_mut(), row, &LoanField::ALL, |f| f.key());
}

fn append_goal<V: fmt::Display>(
    form: &mut PlanFormState,
    row: &BTreeMap<String, V>,
) {
    append_record(form.goals_mut(), row, &GoalField::ALL, |f| f.key());
}

fn read_to_string(path: &Path) -> Result<String, ProfileLoadError> {
    std::fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Profile loader
// ---------------------------------------------------------------------------

/// Parse profile TOML text into a fresh form.
///
/// # Errors
///
/// * [`ProfileLoadError::Toml`] if the document is not valid TOML or a value
///   has the wrong shape (e.g. `insurances` is not a list).
/// * [`ProfileLoadError::InvalidRiskProfile`] for an unknown risk profile.
pub fn load_profile_str(input: &str) -> Result<PlanFormState, ProfileLoadError> {
    let file: ProfileFile = toml::from_str(input)?;
    let mut form = PlanFormState::new();

    for field in ProfileField::ALL {
        if let Some(value) = file.scalar(field) {
            form.update(field, value.to_string());
        }
    }

    if let Some(raw) = file.risk_profile.as_deref().map(str::trim) {
        if !raw.is_empty() {
            let risk = RiskProfile::parse(raw)
                .ok_or_else(|| ProfileLoadError::InvalidRiskProfile(raw.to_string()))?;
            form.set_risk_profile(Some(risk));
        }
    }

    for label in &file.insurances {
        let policy = InsurancePolicy::from(label.as_str());
        if policy.category().is_none() {
            debug!(label = %label, "Insurance is not in the catalog, keeping as free text");
        }
        if form.insurances().contains(&policy) {
            warn!(label = %label, "Duplicate insurance entry ignored");
            continue;
        }
        form.insurances_mut().add(policy);
    }

    for row in &file.loans {
        append_loan(&mut form, row);
    }
    for row in &file.goals {
        append_goal(&mut form, row);
    }

    debug!(
        insurances = form.insurances().len(),
        loans = form.loans().len(),
        goals = form.goals().len(),
        "Profile loaded"
    );
    Ok(form)
}

/// Read a profile file from disk and delegate to [`load_profile_str`].
pub fn load_profile_file(path: &Path) -> Result<PlanFormState, ProfileLoadError> {
    let contents = read_to_string(path)?;
    load_profile_str(&contents)
}

// ---------------------------------------------------------------------------
// CSV loaders
// ---------------------------------------------------------------------------

fn csv_rows(input: &str) -> Result<Vec<BTreeMap<String, String>>, ProfileLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<BTreeMap<String, String>>()
        .map(|row| row.map_err(ProfileLoadError::from))
        .collect()
}

/// Append every loan row of a CSV document to the form. Returns the row count.
pub fn append_loans_csv(
    form: &mut PlanFormState,
    input: &str,
) -> Result<usize, ProfileLoadError> {
    let rows = csv_rows(input)?;
    for row in &rows {
        append_loan(form, row);
    }
    Ok(rows.len())
}

/// Append every goal row of a CSV document to the form. Returns the row count.
pub fn append_goals_csv(
    form: &mut PlanFormState,
    input: &str,
) -> Result<usize, ProfileLoadError> {
    let rows = csv_rows(input)?;
    for row in &rows {
        append_goal(form, row);
    }
    Ok(rows.len())
}

pub fn append_loans_file(
    form: &mut PlanFormState,
    path: &Path,
) -> Result<usize, ProfileLoadError> {
    append_loans_csv(form, &read_to_string(path)?)
}

pub fn append_goals_file(
    form: &mut PlanFormState,
    path: &Path,
) -> Result<usize, ProfileLoadError> {
    append_goals_csv(form, &read_to_string(path)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use plan_core::{InsuranceCategory, Loan};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_document_is_blank_form() {
        let form = load_profile_str("").unwrap();
        assert_eq!(form, PlanFormState::new());
    }

    #[test]
    fn numbers_and_strings_both_land_as_text() {
        let form = load_profile_str(
            r#"
name = "Asha"
age = 32
income = "1,20,000"
emergency_fund = 1500.5
"#,
        )
        .unwrap();

        assert_eq!(form.profile().name, "Asha");
        assert_eq!(form.profile().age, "32");
        assert_eq!(form.profile().income, "1,20,000");
        assert_eq!(form.profile().emergency_fund, "1500.5");
        assert_eq!(form.profile().expenses, "");

        let payload = form.to_payload();
        assert_eq!(payload.income, dec!(120000));
        assert_eq!(payload.emergency_fund, dec!(1500.5));
    }

    #[test]
    fn risk_profile_is_case_insensitive() {
        let form = load_profile_str(r#"risk_profile = "aggressive""#).unwrap();
        assert_eq!(form.risk_profile(), Some(RiskProfile::Aggressive));
    }

    #[test]
    fn blank_risk_profile_stays_unset() {
        let form = load_profile_str(r#"risk_profile = "  ""#).unwrap();
        assert_eq!(form.risk_profile(), None);
    }

    #[test]
    fn unknown_risk_profile_is_an_error() {
        let err = load_profile_str(r#"risk_profile = "YOLO""#).unwrap_err();
        assert!(matches!(err, ProfileLoadError::InvalidRiskProfile(ref s) if s == "YOLO"));
    }

    #[test]
    fn insurances_keep_order_and_skip_duplicates() {
        let form = load_profile_str(
            r#"insurances = ["Pet Insurance", "Crop Insurance", "Pet Insurance"]"#,
        )
        .unwrap();

        let labels: Vec<_> = form.insurances().iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Pet Insurance", "Crop Insurance"]);
        assert_eq!(
            form.insurances().get(0).and_then(|p| p.category()),
            Some(InsuranceCategory::Pet)
        );
    }

    #[test]
    fn loan_tables_fill_known_keys_only() {
        let form = load_profile_str(
            r#"
[[loans]]
type = "Auto Loan"
amount = 400000
lender = "ignored"
"#,
        )
        .unwrap();

        assert_eq!(
            form.loans().get(0),
            Some(&Loan {
                loan_type: "Auto Loan".into(),
                amount: "400000".into(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = load_profile_str("name = ").unwrap_err();
        assert!(matches!(err, ProfileLoadError::Toml(_)));
    }

    #[test]
    fn goals_csv_appends_in_file_order() {
        let mut form = PlanFormState::new();
        let added = append_goals_csv(
            &mut form,
            "\
name,target_amount,months_to_achieve
Car,500000,24
House, 3000000 ,120
",
        )
        .unwrap();

        assert_eq!(added, 2);
        let names: Vec<_> = form.goals().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Car", "House"]);
        assert_eq!(form.goals().get(1).map(|g| g.target_amount.as_str()), Some("3000000"));
        assert_eq!(form.goals().get(0).map(|g| g.sip.as_str()), Some(""));
    }

    #[test]
    fn loans_csv_appends_after_existing_rows() {
        let mut form = PlanFormState::with_starter_rows();
        append_loans_csv(
            &mut form,
            "type,amount,tenure_months,installment,interest_rate\nHome Loan,2500000,240,22000,8.4\n",
        )
        .unwrap();

        assert_eq!(form.loans().len(), 2);
        assert_eq!(form.loans().get(0), Some(&Loan::default()));
        assert_eq!(
            form.loans().get(1).map(|l| l.interest_rate.as_str()),
            Some("8.4")
        );
    }

    #[test]
    fn ragged_csv_is_a_parse_error() {
        let mut form = PlanFormState::new();
        let err = append_goals_csv(&mut form, "name,target_amount\nCar\n").unwrap_err();
        assert!(matches!(err, ProfileLoadError::Csv(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_profile_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
