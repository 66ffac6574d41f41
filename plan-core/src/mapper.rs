//! Form snapshot → submission payload.
//!
//! This is the only place text-edited numbers become numbers. Currency and
//! rate fields go through [`decimal_or_zero`], month and count fields through
//! [`integer_or_zero`]; anything unparsable is 0, never an error. Text and
//! enum fields are copied through unchanged.

use crate::form::PlanFormState;
use crate::models::{Goal, GoalPayload, Loan, LoanPayload, SubmissionPayload};
use crate::parse::{decimal_or_zero, integer_or_zero};

/// Builds the normalized payload for `form`. Pure and deterministic.
pub fn map_submission(form: &PlanFormState) -> SubmissionPayload {
    let profile = form.profile();

    SubmissionPayload {
        name: profile.name.clone(),
        age: integer_or_zero(&profile.age),
        income: decimal_or_zero(&profile.income),
        expenses: decimal_or_zero(&profile.expenses),
        dependents: integer_or_zero(&profile.dependents),
        emergency_fund: decimal_or_zero(&profile.emergency_fund),
        insurances: form
            .insurances()
            .iter()
            .map(|policy| policy.label().to_string())
            .collect(),
        loans: form.loans().iter().map(map_loan).collect(),
        goals: form.goals().iter().map(map_goal).collect(),
        risk_profile: profile.risk_profile,
    }
}

fn map_loan(loan: &Loan) -> LoanPayload {
    LoanPayload {
        loan_type: loan.loan_type.clone(),
        amount: decimal_or_zero(&loan.amount),
        tenure_months: integer_or_zero(&loan.tenure_months),
        installment: decimal_or_zero(&loan.installment),
        interest_rate: decimal_or_zero(&loan.interest_rate),
    }
}

fn map_goal(goal: &Goal) -> GoalPayload {
    GoalPayload {
        name: goal.name.clone(),
        target_amount: decimal_or_zero(&goal.target_amount),
        months_to_achieve: integer_or_zero(&goal.months_to_achieve),
        current_savings: decimal_or_zero(&goal.current_savings),
        sip: decimal_or_zero(&goal.sip),
        priority: goal.priority.clone(),
    }
}
