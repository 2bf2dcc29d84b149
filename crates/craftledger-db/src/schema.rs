//! # Stored Payload Schema Upgrades
//!
//! Settings documents live in SQLite as JSON. When the document shape
//! evolves, old documents must still load: each known historical shape
//! gets a variant here and upgrades to the current shape on read.
//! Unrecognized JSON fails loudly instead of degrading silently.
//!
//! ## Upgrade Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Studio Settings Upgrade                               │
//! │                                                                         │
//! │  raw JSON from the settings table                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Matches current shape?  ──yes──► StudioSettings (as-is)               │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  Matches legacy shape?   ──yes──► wrap flat monthlyOverhead as one     │
//! │       │ no                        fixed "Other" line item              │
//! │       ▼                                                                 │
//! │  StoreError::InvalidPayload                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Deserialize;
use serde_json::Value;

use craftledger_core::types::{
    KilnBatchConfig, OverheadItem, OverheadSettings, StudioSettings,
};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Historical Shapes
// =============================================================================

/// The shape before overhead was itemized: a single flat monthly total.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyStudioSettings {
    /// Absent in the very earliest documents; treated as $0.
    #[serde(default)]
    monthly_overhead: f64,
    pieces_per_month: f64,
    glaze_cost_per_piece: f64,
    kiln: KilnBatchConfig,
}

/// Tagged union over every studio-settings shape ever written.
///
/// Untagged deserialization tries variants in order, so the current
/// shape must come first. The legacy variant can't shadow it: the
/// current shape has no `monthlyOverhead` field and the legacy shape
/// has no `overhead` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredStudioSettings {
    Current(StudioSettings),
    Legacy(LegacyStudioSettings),
}

// =============================================================================
// Upgrade
// =============================================================================

/// Upgrades a raw studio-settings document to the current shape.
///
/// A legacy flat `monthlyOverhead` becomes a single fixed-cost line
/// item named "Other" so the user's total carries over and can be
/// split into real categories later. The fixed `id` keeps re-reads
/// idempotent.
pub fn upgrade_studio_settings(key: &str, value: Value) -> StoreResult<StudioSettings> {
    let stored: StoredStudioSettings = serde_json::from_value(value)
        .map_err(|e| StoreError::invalid_payload(key, e.to_string()))?;

    Ok(match stored {
        StoredStudioSettings::Current(settings) => settings,
        StoredStudioSettings::Legacy(legacy) => StudioSettings {
            overhead: OverheadSettings {
                fixed_costs: vec![OverheadItem {
                    id: "1".to_string(),
                    name: "Other".to_string(),
                    amount: legacy.monthly_overhead,
                }],
                variable_costs: Vec::new(),
            },
            pieces_per_month: legacy.pieces_per_month,
            glaze_cost_per_piece: legacy.glaze_cost_per_piece,
            kiln: legacy.kiln,
        },
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kiln_json() -> Value {
        json!({
            "hourlyRate": 17.0,
            "minutesPerFiring": 30.0,
            "kilnWorkerCount": 2.0,
            "piecesPerFiring": 20.0
        })
    }

    #[test]
    fn test_current_shape_loads_unchanged() {
        let value = json!({
            "overhead": {
                "fixedCosts": [
                    {"id": "1", "name": "Rent", "amount": 2000.0}
                ],
                "variableCosts": [
                    {"id": "2", "name": "Supplies", "amount": 500.0}
                ]
            },
            "piecesPerMonth": 400.0,
            "glazeCostPerPiece": 0.75,
            "kiln": kiln_json()
        });

        let settings = upgrade_studio_settings("studio-settings", value).unwrap();

        assert_eq!(settings.overhead.fixed_costs.len(), 1);
        assert_eq!(settings.overhead.fixed_costs[0].name, "Rent");
        assert_eq!(settings.overhead.variable_costs[0].amount, 500.0);
        assert_eq!(settings.pieces_per_month, 400.0);
    }

    #[test]
    fn test_legacy_flat_overhead_upgrades() {
        let value = json!({
            "monthlyOverhead": 6000.0,
            "piecesPerMonth": 400.0,
            "glazeCostPerPiece": 0.75,
            "kiln": kiln_json()
        });

        let settings = upgrade_studio_settings("studio-settings", value).unwrap();

        // The flat total lands as one fixed "Other" line item
        assert_eq!(settings.overhead.fixed_costs.len(), 1);
        assert_eq!(settings.overhead.fixed_costs[0].id, "1");
        assert_eq!(settings.overhead.fixed_costs[0].name, "Other");
        assert_eq!(settings.overhead.fixed_costs[0].amount, 6000.0);
        assert!(settings.overhead.variable_costs.is_empty());
        assert_eq!(settings.glaze_cost_per_piece, 0.75);
        assert_eq!(settings.kiln.pieces_per_firing, 20.0);
    }

    #[test]
    fn test_legacy_missing_monthly_overhead_defaults_to_zero() {
        let value = json!({
            "piecesPerMonth": 400.0,
            "glazeCostPerPiece": 0.75,
            "kiln": kiln_json()
        });

        let settings = upgrade_studio_settings("studio-settings", value).unwrap();

        assert_eq!(settings.overhead.fixed_costs[0].name, "Other");
        assert_eq!(settings.overhead.fixed_costs[0].amount, 0.0);
        assert!(settings.overhead.variable_costs.is_empty());
    }

    #[test]
    fn test_unrecognized_shape_fails_loudly() {
        let value = json!({"garbage": true});

        let err = upgrade_studio_settings("studio-settings", value).unwrap_err();

        match err {
            StoreError::InvalidPayload { key, .. } => assert_eq!(key, "studio-settings"),
            other => panic!("expected InvalidPayload, got {other:?}"),
        }
    }
}
