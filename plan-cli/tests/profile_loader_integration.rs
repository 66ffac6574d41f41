use std::path::{Path, PathBuf};

use plan_cli::app;
use plan_cli::profile_loader::{append_goals_file, append_loans_file, load_profile_file};
use plan_core::{InsuranceCategory, RiskProfile};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn sample_profile_maps_to_expected_payload() {
    let form = load_profile_file(&fixture("sample_profile.toml")).unwrap();
    let payload = form.to_payload();

    assert_eq!(payload.name, "Asha Menon");
    assert_eq!(payload.age, 34);
    assert_eq!(payload.income, dec!(120000));
    assert_eq!(payload.expenses, dec!(65000));
    assert_eq!(payload.dependents, 2);
    // Unparsable amounts are submitted as zero.
    assert_eq!(payload.emergency_fund, dec!(0));
    assert_eq!(payload.risk_profile, Some(RiskProfile::Moderate));
    assert_eq!(
        payload.insurances,
        vec!["Health Insurance".to_string(), "Term Life Insurance".to_string()]
    );

    assert_eq!(payload.loans.len(), 1);
    assert_eq!(payload.loans[0].loan_type, "Home Loan");
    assert_eq!(payload.loans[0].interest_rate, dec!(8.4));

    assert_eq!(payload.goals.len(), 1);
    assert_eq!(payload.goals[0].target_amount, dec!(500000));
    assert_eq!(payload.goals[0].months_to_achieve, 24);
    assert_eq!(payload.goals[0].priority, "High");
}

#[test]
fn free_text_insurance_is_kept_alongside_catalog_entries() {
    let form = load_profile_file(&fixture("sample_profile.toml")).unwrap();

    let categories: Vec<_> = form.insurances().iter().map(|p| p.category()).collect();
    assert_eq!(categories, vec![Some(InsuranceCategory::Health), None]);
}

#[test]
fn csv_rows_are_appended_after_profile_rows() {
    let mut form = load_profile_file(&fixture("sample_profile.toml")).unwrap();
    assert_eq!(append_loans_file(&mut form, &fixture("loans.csv")).unwrap(), 2);
    assert_eq!(append_goals_file(&mut form, &fixture("goals.csv")).unwrap(), 2);

    let payload = form.to_payload();

    let loan_types: Vec<_> = payload.loans.iter().map(|l| l.loan_type.as_str()).collect();
    assert_eq!(loan_types, vec!["Home Loan", "Auto Loan", "Credit Card"]);
    // Blank CSV cells map to zero.
    assert_eq!(payload.loans[2].tenure_months, 0);
    assert_eq!(payload.loans[2].interest_rate, dec!(36));

    let goal_names: Vec<_> = payload.goals.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(goal_names, vec!["Car", "Child Education", "Vacation"]);
    assert_eq!(payload.goals[2].target_amount, dec!(150000));
    // Fractional months are not an integer.
    assert_eq!(payload.goals[2].months_to_achieve, 0);
    // Columns absent from the CSV stay blank.
    assert_eq!(payload.goals[1].sip, dec!(0));
}

#[test]
fn load_form_combines_all_sources() {
    let form = app::load_form(
        Some(fixture("sample_profile.toml").as_path()),
        Some(fixture("loans.csv").as_path()),
        Some(fixture("goals.csv").as_path()),
    )
    .unwrap()
    .expect("form");

    assert_eq!(form.loans().len(), 3);
    assert_eq!(form.goals().len(), 3);
}

#[test]
fn load_form_reports_missing_csv() {
    let err = app::load_form(
        Some(fixture("sample_profile.toml").as_path()),
        Some(fixture("no_such_loans.csv").as_path()),
        None,
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("no_such_loans.csv"));
}
