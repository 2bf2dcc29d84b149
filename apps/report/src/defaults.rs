//! Starter documents written on first run (and by `craftledger seed`).
//!
//! Amounts default to zero; the named overhead categories are there so
//! the user edits numbers instead of inventing a chart of accounts.

use craftledger_core::types::{
    KilnBatchConfig, OverheadItem, OverheadSettings, StaffRole, StudioSettings,
};
use craftledger_db::SeedDefaults;

fn item(id: &str, name: &str) -> OverheadItem {
    OverheadItem {
        id: id.to_string(),
        name: name.to_string(),
        amount: 0.0,
    }
}

/// Default studio configuration for first-time users.
///
/// Kiln numbers reflect a typical pottery studio: 2 workers at $17/hr
/// for a 30-minute kiln cycle that holds 20 pieces.
pub fn seed_defaults() -> SeedDefaults {
    SeedDefaults {
        catalog: Vec::new(),
        studio: StudioSettings {
            overhead: OverheadSettings {
                fixed_costs: vec![
                    item("1", "Rent"),
                    item("2", "Insurance"),
                    item("3", "Property Taxes"),
                ],
                variable_costs: vec![item("4", "Utilities"), item("5", "Supplies")],
            },
            pieces_per_month: 400.0,
            glaze_cost_per_piece: 0.75,
            kiln: KilnBatchConfig {
                hourly_rate: 17.0,
                minutes_per_firing: 30.0,
                kiln_worker_count: 2.0,
                pieces_per_firing: 20.0,
            },
        },
        // Typical paint-your-own pottery studio: a guide helping
        // customers paint and a manager
        staff_roles: vec![
            StaffRole {
                name: "Glazing Guide".to_string(),
                hourly_rate: 15.0,
                minutes_per_customer: 20.0,
                customers_simultaneous: 4.0,
            },
            StaffRole {
                name: "Manager".to_string(),
                hourly_rate: 20.0,
                minutes_per_customer: 5.0,
                customers_simultaneous: 3.0,
            },
        ],
    }
}
