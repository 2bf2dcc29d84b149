//! # Validation Module
//!
//! Two validation layers with very different contracts:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Degrade guards (InputStatus)                                 │
//! │  ├── Used INSIDE the calculators                                       │
//! │  ├── One tagged check per primitive, replacing scattered booleans      │
//! │  └── Never error: a Degraded input means a $0 contribution             │
//! │           │                                                             │
//! │  Layer 2: Boundary validators (ValidationResult)                       │
//! │  ├── Used by the presentation layer BEFORE calling the engine          │
//! │  ├── Catch blank names, negative amounts, wild percentages             │
//! │  └── Produce user-facing messages ("name is required")                 │
//! │                                                                         │
//! │  The engine itself only runs Layer 1. Layer 2 is advisory.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{KilnBatchConfig, OverheadInput, StaffRole};

// =============================================================================
// Degrade Guards
// =============================================================================

/// Outcome of a primitive's input guard.
///
/// `Degraded` means the computation proceeds but this component
/// contributes $0 - division by a zero/negative denominator and
/// negative rates, times, or counts all land here. The input itself
/// is never clamped or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// Inputs are usable; compute the cost normally.
    Usable,
    /// Inputs are invalid; the component's contribution is $0.
    Degraded,
}

impl InputStatus {
    /// True when the guard tripped.
    #[inline]
    pub fn is_degraded(self) -> bool {
        self == InputStatus::Degraded
    }
}

/// Guard for shared-attention staff labor: the customer count is a
/// denominator, so zero or negative degrades, as do negative rates
/// and times.
pub fn staff_role_status(role: &StaffRole) -> InputStatus {
    if role.customers_simultaneous <= 0.0
        || role.hourly_rate < 0.0
        || role.minutes_per_customer < 0.0
    {
        InputStatus::Degraded
    } else {
        InputStatus::Usable
    }
}

/// Guard for kiln firing labor: pieces per firing is a denominator;
/// rate, worker count, and firing time must not be negative.
pub fn kiln_status(config: &KilnBatchConfig) -> InputStatus {
    if config.pieces_per_firing <= 0.0
        || config.hourly_rate < 0.0
        || config.kiln_worker_count < 0.0
        || config.minutes_per_firing < 0.0
    {
        InputStatus::Degraded
    } else {
        InputStatus::Usable
    }
}

/// Guard for per-piece overhead allocation: monthly production is a
/// denominator and the overhead total must not be negative.
pub fn overhead_status(input: &OverheadInput) -> InputStatus {
    if input.pieces_per_month <= 0.0 || input.monthly_overhead < 0.0 {
        InputStatus::Degraded
    } else {
        InputStatus::Usable
    }
}

// =============================================================================
// Boundary Validators
// =============================================================================

/// Validates a display name (product, role, overhead item).
///
/// ## Rules
/// - Must not be blank
/// - Must be at most 200 characters
pub fn validate_display_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a dollar amount, rate, or duration that may be zero but
/// not negative.
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a count that serves as a denominator (pieces per firing,
/// customers served, pieces per month). Zero is rejected here even
/// though the engine would merely degrade, because a zero denominator
/// in a form is always a data-entry mistake worth surfacing.
pub fn validate_positive_count(field: &str, value: f64) -> ValidationResult<()> {
    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an allocation percentage.
///
/// Advisory only: the engine accepts any percentage and lets
/// cumulative allocations exceed 100%. Forms use this to warn on
/// values outside 0-100.
pub fn validate_percentage(field: &str, value: f64) -> ValidationResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn guide() -> StaffRole {
        StaffRole {
            name: "Glazing Guide".to_string(),
            hourly_rate: 15.0,
            minutes_per_customer: 20.0,
            customers_simultaneous: 4.0,
        }
    }

    #[test]
    fn test_staff_role_guard() {
        assert_eq!(staff_role_status(&guide()), InputStatus::Usable);

        let zero_customers = StaffRole {
            customers_simultaneous: 0.0,
            ..guide()
        };
        assert!(staff_role_status(&zero_customers).is_degraded());

        let negative_rate = StaffRole {
            hourly_rate: -15.0,
            ..guide()
        };
        assert!(staff_role_status(&negative_rate).is_degraded());

        let negative_minutes = StaffRole {
            minutes_per_customer: -20.0,
            ..guide()
        };
        assert!(staff_role_status(&negative_minutes).is_degraded());
    }

    #[test]
    fn test_kiln_guard() {
        let kiln = KilnBatchConfig {
            hourly_rate: 17.0,
            minutes_per_firing: 30.0,
            kiln_worker_count: 2.0,
            pieces_per_firing: 20.0,
        };
        assert_eq!(kiln_status(&kiln), InputStatus::Usable);

        assert!(kiln_status(&KilnBatchConfig {
            pieces_per_firing: 0.0,
            ..kiln
        })
        .is_degraded());
        assert!(kiln_status(&KilnBatchConfig {
            kiln_worker_count: -2.0,
            ..kiln
        })
        .is_degraded());
    }

    #[test]
    fn test_overhead_guard() {
        let input = OverheadInput {
            monthly_overhead: 6000.0,
            pieces_per_month: 400.0,
        };
        assert_eq!(overhead_status(&input), InputStatus::Usable);

        assert!(overhead_status(&OverheadInput {
            pieces_per_month: 0.0,
            ..input
        })
        .is_degraded());
        assert!(overhead_status(&OverheadInput {
            monthly_overhead: -6000.0,
            ..input
        })
        .is_degraded());
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("name", "Snowman Globe").is_ok());
        assert!(validate_display_name("name", "").is_err());
        assert!(validate_display_name("name", "   ").is_err());
        assert!(validate_display_name("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_numeric_bounds() {
        assert!(validate_non_negative("amount", 0.0).is_ok());
        assert!(validate_non_negative("amount", -0.01).is_err());

        assert!(validate_positive_count("piecesPerFiring", 20.0).is_ok());
        assert!(validate_positive_count("piecesPerFiring", 0.0).is_err());

        assert!(validate_percentage("percentage", 100.0).is_ok());
        assert!(validate_percentage("percentage", 150.0).is_err());
        assert!(validate_percentage("percentage", -1.0).is_err());
    }
}
