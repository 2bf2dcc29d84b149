//! # Money Module
//!
//! Cent rounding and currency formatting for monetary values.
//!
//! ## Why a Single Rounding Point?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In raw f64 math:                                                       │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A labor sum like 1.005000000000001 must never reach a report.          │
//! │                                                                         │
//! │  OUR SOLUTION: round on the cent scale, in exactly one place            │
//! │    value × 100 → round half away from zero → ÷ 100                     │
//! │                                                                         │
//! │  Every other module routes each reportable figure through              │
//! │  round_cents exactly once. Summing already-rounded components can      │
//! │  drift by up to half a cent; that drift is accepted, not               │
//! │  compensated, except where a total is rounded only after summing       │
//! │  unrounded sub-totals (labor totals).                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use craftledger_core::money::{format_currency, round_cents};
//!
//! assert_eq!(round_cents(1.235), 1.24);
//! assert_eq!(format_currency(1234.5), "$1,234.50");
//! ```

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a dollar amount to the nearest cent (two decimal places).
///
/// ## Semantics
/// "Round half away from zero" on the cent-scaled value: multiply by
/// 100, round, divide back by 100. `f64::round` already rounds
/// half-way cases away from zero, so `1.235 → 1.24` and
/// `-1.235 → -1.24`.
///
/// ## Contract
/// - Total over all finite reals; no error conditions
/// - Idempotent: `round_cents(round_cents(x)) == round_cents(x)`
/// - The single source of truth for monetary rounding - callers must
///   route every monetary output through it exactly once per
///   reportable figure
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a dollar amount as a US-style currency string with
/// thousands separators and two decimal places.
///
/// ## Examples
/// ```rust
/// use craftledger_core::money::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(0.0), "$0.00");
/// assert_eq!(format_currency(-5.5), "-$5.50");
/// ```
///
/// ## Note
/// This is presentation-layer formatting. Calculations never consume
/// the formatted string; they work on the rounded f64 values.
pub fn format_currency(amount: f64) -> String {
    // Work on whole cents so 1234.5 renders as "$1,234.50" and sub-cent
    // noise from upstream sums cannot leak into the output.
    let total_cents = (amount * 100.0).round() as i64;
    let sign = if total_cents < 0 { "-" } else { "" };
    let dollars = (total_cents / 100).abs();
    let cents = (total_cents % 100).abs();

    let mut grouped = String::new();
    let digits = dollars.to_string();
    let first_group = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", sign, grouped, cents)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_two_decimal_places() {
        assert_eq!(round_cents(1.234), 1.23);
        assert_eq!(round_cents(1.235), 1.24);
        assert_eq!(round_cents(1.999), 2.0);
    }

    #[test]
    fn test_whole_numbers_pass_through() {
        assert_eq!(round_cents(5.0), 5.0);
        assert_eq!(round_cents(100.0), 100.0);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn test_negative_values_round_away_from_zero() {
        assert_eq!(round_cents(-1.234), -1.23);
        assert_eq!(round_cents(-1.235), -1.24);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for value in [1.234, 1.235, -7.777, 0.005, 1234.5678, 99.999] {
            let once = round_cents(value);
            assert_eq!(round_cents(once), once);
        }
    }

    #[test]
    fn test_cleans_floating_point_drift() {
        // 0.1 + 0.2 produces 0.30000000000000004 in raw f64 math
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(15.0), "$15.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(-5.5), "-$5.50");
        assert_eq!(format_currency(-1234.56), "-$1,234.56");
    }
}
