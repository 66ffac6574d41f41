//! Plain-text rendering of a finished pipeline run.

use std::fmt;

use plan_core::{
    Analysis, GoalAssessment, GoalSuggestion, PickItem, Recommendations, StageResultStore,
    StageState,
};
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole rupees with Indian digit grouping, e.g. `₹12,34,567`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if digits.len() <= 3 {
        return format!("{sign}₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{sign}₹{},{tail}", groups.join(","))
}

fn section<R>(
    out: &mut fmt::Formatter<'_>,
    title: &str,
    state: &StageState<R>,
    render: impl FnOnce(&mut fmt::Formatter<'_>, &R) -> fmt::Result,
    empty: &str,
) -> fmt::Result {
    writeln!(out, "== {title} ==")?;
    if state.loading {
        writeln!(out, "  still loading")?;
    } else if let Some(error) = &state.error {
        writeln!(out, "  unavailable: {error}")?;
    } else if let Some(result) = &state.result {
        render(out, result)?;
    } else {
        writeln!(out, "  {empty}")?;
    }
    writeln!(out)
}

fn render_suggestions(
    out: &mut fmt::Formatter<'_>,
    suggestions: &[GoalSuggestion],
) -> fmt::Result {
    if suggestions.is_empty() {
        return writeln!(out, "  No suggested goals found.");
    }
    for suggestion in suggestions {
        match &suggestion.reason {
            Some(reason) => writeln!(out, "  - {}: {reason}", suggestion.goal)?,
            None => writeln!(out, "  - {}", suggestion.goal)?,
        }
    }
    Ok(())
}

fn render_goal(
    out: &mut fmt::Formatter<'_>,
    goal: &GoalAssessment,
) -> fmt::Result {
    let verdict = if goal.feasible {
        "Feasible"
    } else {
        "Needs Adjustment"
    };
    writeln!(out, "  {} [{verdict}]", goal.name)?;
    writeln!(
        out,
        "    Target {} / projected {} ({:.1}% funded)",
        format_currency(goal.target),
        format_currency(goal.projected_value),
        goal.progress_percent()
    )?;
    writeln!(
        out,
        "    Horizon {} months, expected return {}%",
        goal.horizon_months, goal.expected_return_annual
    )?;
    if let Some(rec) = &goal.recommendation {
        writeln!(
            out,
            "    Suggested SIP {} or extend by {} months",
            format_currency(rec.suggested_sip),
            rec.extend_by_months
        )?;
    }
    Ok(())
}

fn render_analysis(
    out: &mut fmt::Formatter<'_>,
    analysis: &Analysis,
) -> fmt::Result {
    writeln!(
        out,
        "  Monthly surplus:      {}",
        format_currency(analysis.monthly_surplus)
    )?;
    writeln!(
        out,
        "  Emergency fund OK:    {}",
        if analysis.emergency_fund_ok { "Yes" } else { "No" }
    )?;
    writeln!(
        out,
        "  Ideal emergency fund: {}",
        format_currency(analysis.ideal_emergency_fund)
    )?;

    let alloc = &analysis.recommended_allocation;
    writeln!(
        out,
        "  Allocation: Equity {}% / Bonds {}% / Commodities {}%",
        alloc.equity, alloc.bonds, alloc.commodities
    )?;
    if let Some(explanation) = &analysis.allocation_explanation {
        writeln!(out, "  {explanation}")?;
    }

    if !analysis.goal_analysis.is_empty() {
        writeln!(out, "  Goal feasibility:")?;
        for goal in &analysis.goal_analysis {
            render_goal(out, goal)?;
        }
    }
    Ok(())
}

fn render_picks(
    out: &mut fmt::Formatter<'_>,
    heading: &str,
    picks: &[PickItem],
) -> fmt::Result {
    if picks.is_empty() {
        return Ok(());
    }
    writeln!(out, "  {heading}:")?;
    for item in picks {
        writeln!(
            out,
            "    - {} - {} ({}): {}",
            item.ticker, item.name, item.horizon, item.reason
        )?;
    }
    Ok(())
}

fn render_recommendations(
    out: &mut fmt::Formatter<'_>,
    recs: &Recommendations,
) -> fmt::Result {
    if let Some(summary) = &recs.summary {
        writeln!(out, "  {summary}")?;
    }
    render_picks(out, "Equity", &recs.equity_picks)?;
    render_picks(out, "Bonds", &recs.bond_picks)?;
    render_picks(out, "Commodities", &recs.commodity_picks)
}

/// Every stage of a [`StageResultStore`], in pipeline order.
pub struct Report<'a>(pub &'a StageResultStore);

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let store = self.0;
        section(
            f,
            "Suggested Goals",
            &store.suggestions,
            |out, suggestions: &Vec<GoalSuggestion>| render_suggestions(out, suggestions),
            "No suggested goals found.",
        )?;
        section(
            f,
            "Financial Analysis",
            &store.analysis,
            render_analysis,
            "No analysis returned.",
        )?;
        section(
            f,
            "Top Picks",
            &store.recommendations,
            render_recommendations,
            "No recommendations returned.",
        )
    }
}

pub fn render_report(store: &StageResultStore) -> String {
    Report(store).to_string()
}
