//! Lenient numeric parsing for text-edited form fields.
//!
//! Every numeric field in the plan form is edited as free text. These helpers
//! resolve that text to a number exactly once, at submission time, and never
//! fail: anything that does not parse becomes zero.

use rust_decimal::Decimal;

/// Normalizes input for numeric parsing: trims whitespace and removes commas (thousands separator).
fn normalize_numeric_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a currency or rate field into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
/// Non-empty input that cannot be parsed is also 0, and logs a warning.
pub fn decimal_or_zero(s: &str) -> Decimal {
    let normalized = normalize_numeric_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "invalid decimal, using 0: {}", e);
        Decimal::ZERO
    })
}

/// Parses a month or count field into an `i32`.
///
/// Same normalization and fallback as [`decimal_or_zero`]. Fractional input
/// such as `"12.5"` is not an integer and falls back to 0.
pub fn integer_or_zero(s: &str) -> i32 {
    let normalized = normalize_numeric_input(s);
    if normalized.is_empty() {
        return 0;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "invalid integer, using 0: {}", e);
        0
    })
}
