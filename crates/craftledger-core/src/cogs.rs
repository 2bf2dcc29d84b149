//! # COGS Assemblers
//!
//! The terminal entry points: combine the labor, kiln, overhead, and
//! product primitives into total-plus-breakdown results.
//!
//! ## Assembly Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         COGS Assembly                                   │
//! │                                                                         │
//! │  calculate_cogs            purchase + shipping + labor                  │
//! │       │                    (one product line)                           │
//! │       ▼                                                                 │
//! │  CogsResult { total, cost_per_unit?, breakdown }                        │
//! │                                                                         │
//! │  calculate_multi_product_cogs                                           │
//! │       │                    per-product costs + shared shipping/labor    │
//! │       ▼                    distributed evenly per unit                   │
//! │  MultiProductCogsResult { total, by_product, cost_per_unit }            │
//! │                                                                         │
//! │  calculate_piece_cogs                                                   │
//! │       │                    bisque + glaze + staff labor + kiln +        │
//! │       ▼                    overhead, per customer piece                  │
//! │  PieceCogsResult { total, breakdown }                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::breakdown::OrderedMap;
use crate::costing::{calculate_kiln_labor_cost, calculate_overhead_cost};
use crate::labor::calculate_staff_labor_cost;
use crate::money::round_cents;
use crate::types::{
    CogsBreakdown, CogsResult, KilnBatchConfig, MultiProductCogsResult, OverheadInput,
    PieceCogsBreakdown, PieceCogsResult, ProductEntry, ProductLine, StaffRole,
};

// =============================================================================
// Simple COGS
// =============================================================================

/// Inputs for a simple single-product COGS computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CogsInput {
    /// Cost to purchase or produce the goods.
    pub purchase_cost: f64,

    /// Shipping and freight costs.
    pub shipping_cost: f64,

    /// Labor cost (often `calculate_labor_cost(...).total_labor_cost`).
    pub labor_cost: f64,

    /// Units produced; enables the per-unit figure when positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

/// Total COGS from purchase, shipping, and labor costs.
///
/// The breakdown echoes the three raw inputs unrounded; only the
/// total and the optional per-unit figure are rounded.
///
/// ## Example
/// ```rust
/// use craftledger_core::cogs::{calculate_cogs, CogsInput};
///
/// let result = calculate_cogs(&CogsInput {
///     purchase_cost: 100.0,
///     shipping_cost: 15.0,
///     labor_cost: 25.0,
///     quantity: None,
/// });
///
/// assert_eq!(result.total_cogs, 140.0);
/// assert_eq!(result.cost_per_unit, None);
/// ```
pub fn calculate_cogs(input: &CogsInput) -> CogsResult {
    let total_cogs = round_cents(input.purchase_cost + input.shipping_cost + input.labor_cost);

    let cost_per_unit = match input.quantity {
        Some(quantity) if quantity > 0.0 => Some(round_cents(total_cogs / quantity)),
        _ => None,
    };

    CogsResult {
        total_cogs,
        cost_per_unit,
        breakdown: CogsBreakdown {
            purchase_cost: input.purchase_cost,
            shipping_cost: input.shipping_cost,
            labor_cost: input.labor_cost,
        },
    }
}

// =============================================================================
// Multi-Product COGS
// =============================================================================

/// Inputs for a multi-product COGS computation with shared costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiProductCogsInput {
    /// The product lines being costed.
    pub products: Vec<ProductEntry>,

    /// Shipping cost shared across every unit of every product.
    pub shipping_cost: f64,

    /// Labor cost shared across every unit of every product.
    pub labor_cost: f64,
}

/// COGS across heterogeneous product lines, with shipping and labor
/// distributed evenly per unit.
///
/// ## Shared-Cost Distribution
/// `shared_cost_per_unit = (shipping + labor) / total_units` when any
/// units exist, else 0. The division is deliberately unrounded; each
/// product's all-in per-unit cost then rounds
/// `unit_cost + shared_cost_per_unit` - using the ORIGINAL unit cost,
/// not the rounded `product_cost / quantity`, so per-unit figures can
/// differ slightly when the unit cost carries sub-cent precision.
///
/// Duplicate product names are last-write-wins in both output maps.
pub fn calculate_multi_product_cogs(input: &MultiProductCogsInput) -> MultiProductCogsResult {
    let mut by_product: OrderedMap<ProductLine> = OrderedMap::new();
    let mut total_product_cost_raw = 0.0;
    let mut total_units = 0.0;

    for product in &input.products {
        let product_cost = round_cents(product.unit_cost * product.quantity);
        by_product.insert(
            &product.name,
            ProductLine {
                quantity: product.quantity,
                product_cost,
            },
        );
        total_product_cost_raw += product_cost;
        total_units += product.quantity;
    }

    let total_product_cost = round_cents(total_product_cost_raw);
    let total_cogs = round_cents(total_product_cost + input.shipping_cost + input.labor_cost);

    let shared_cost_per_unit = if total_units > 0.0 {
        (input.shipping_cost + input.labor_cost) / total_units
    } else {
        0.0
    };

    let mut cost_per_unit: OrderedMap<f64> = OrderedMap::new();
    for product in &input.products {
        cost_per_unit.insert(
            &product.name,
            round_cents(product.unit_cost + shared_cost_per_unit),
        );
    }

    MultiProductCogsResult {
        total_cogs,
        total_product_cost,
        shared_cost_per_unit,
        by_product,
        cost_per_unit,
    }
}

// =============================================================================
// Piece COGS
// =============================================================================

/// Inputs for a full single-piece COGS computation.
///
/// When overhead is tracked as categorized line items, compute
/// `overhead.monthly_overhead` with
/// [`calculate_total_overhead`](crate::costing::calculate_total_overhead)
/// first; this assembler takes the monthly total as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceCogsInput {
    /// Wholesale cost of the unpainted ceramic piece.
    pub bisque_cost: f64,

    /// Glaze, brushes, and supplies consumed per piece.
    pub glaze_cost_per_piece: f64,

    /// Staff roles that contribute labor to a customer's piece.
    pub staff_roles: Vec<StaffRole>,

    /// Kiln firing labor parameters.
    pub kiln: KilnBatchConfig,

    /// Monthly overhead total and production volume.
    pub overhead: OverheadInput,
}

/// Total COGS for a single customer piece:
/// bisque + glaze + staff labor + kiln labor + overhead.
///
/// ## Behavior
/// - Each role's cost comes from
///   [`calculate_staff_labor_cost`]; `labor_by_role` is keyed by role
///   name with last-write-wins on duplicates, but `labor_total` sums
///   EVERY role's cost, colliding names included, and rounds once
///   after summing.
/// - Kiln and overhead go through their own guarded primitives.
/// - The grand total rounds once over the five components.
pub fn calculate_piece_cogs(input: &PieceCogsInput) -> PieceCogsResult {
    let mut labor_by_role: OrderedMap<f64> = OrderedMap::new();
    let mut labor_total_raw = 0.0;

    for role in &input.staff_roles {
        let cost = calculate_staff_labor_cost(role);
        labor_by_role.insert(&role.name, cost);
        labor_total_raw += cost;
    }

    // Round after summing to avoid accumulated floating-point drift
    let labor_total = round_cents(labor_total_raw);

    let kiln_cost = calculate_kiln_labor_cost(&input.kiln);
    let overhead_cost = calculate_overhead_cost(&input.overhead);

    let total_cogs = round_cents(
        input.bisque_cost + input.glaze_cost_per_piece + labor_total + kiln_cost + overhead_cost,
    );

    PieceCogsResult {
        total_cogs,
        breakdown: PieceCogsBreakdown {
            bisque_cost: input.bisque_cost,
            glaze_cost: input.glaze_cost_per_piece,
            labor_by_role,
            labor_total,
            kiln_cost,
            overhead_cost,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_from_purchase_shipping_and_labor() {
        let result = calculate_cogs(&CogsInput {
            purchase_cost: 100.0,
            shipping_cost: 15.0,
            labor_cost: 25.0,
            quantity: None,
        });

        assert_eq!(result.total_cogs, 140.0);
        assert_eq!(result.cost_per_unit, None);
    }

    #[test]
    fn test_per_unit_cost_when_quantity_given() {
        let result = calculate_cogs(&CogsInput {
            purchase_cost: 100.0,
            shipping_cost: 20.0,
            labor_cost: 30.0,
            quantity: Some(10.0),
        });

        assert_eq!(result.total_cogs, 150.0);
        assert_eq!(result.cost_per_unit, Some(15.0));
    }

    #[test]
    fn test_zero_quantity_suppresses_per_unit() {
        let result = calculate_cogs(&CogsInput {
            purchase_cost: 100.0,
            shipping_cost: 20.0,
            labor_cost: 30.0,
            quantity: Some(0.0),
        });

        assert_eq!(result.cost_per_unit, None);
    }

    #[test]
    fn test_decimal_inputs_round_in_the_total() {
        let result = calculate_cogs(&CogsInput {
            purchase_cost: 99.99,
            shipping_cost: 12.50,
            labor_cost: 7.51,
            quantity: None,
        });

        assert_eq!(result.total_cogs, 120.0);
    }

    #[test]
    fn test_breakdown_echoes_raw_inputs() {
        let result = calculate_cogs(&CogsInput {
            purchase_cost: 50.0,
            shipping_cost: 10.0,
            labor_cost: 5.0,
            quantity: None,
        });

        assert_eq!(result.breakdown.purchase_cost, 50.0);
        assert_eq!(result.breakdown.shipping_cost, 10.0);
        assert_eq!(result.breakdown.labor_cost, 5.0);
    }

    fn entry(name: &str, unit_cost: f64, quantity: f64) -> ProductEntry {
        ProductEntry {
            name: name.to_string(),
            unit_cost,
            quantity,
        }
    }

    #[test]
    fn test_multi_product_distributes_shared_costs_per_unit() {
        let result = calculate_multi_product_cogs(&MultiProductCogsInput {
            products: vec![entry("Cookie", 0.50, 100.0), entry("Muffin", 0.75, 100.0)],
            shipping_cost: 20.0,
            labor_cost: 80.0,
        });

        // shared = (20 + 80) / 200 units = $0.50/unit
        assert_eq!(result.shared_cost_per_unit, 0.5);
        assert_eq!(result.cost_per_unit.get("Cookie"), Some(&1.0));
        assert_eq!(result.cost_per_unit.get("Muffin"), Some(&1.25));

        assert_eq!(result.total_product_cost, 125.0);
        assert_eq!(result.total_cogs, 225.0);
        assert_eq!(
            result.by_product.get("Cookie"),
            Some(&ProductLine {
                quantity: 100.0,
                product_cost: 50.0
            })
        );
    }

    #[test]
    fn test_multi_product_with_no_units_has_zero_shared_cost() {
        let result = calculate_multi_product_cogs(&MultiProductCogsInput {
            products: vec![entry("Phantom", 2.0, 0.0)],
            shipping_cost: 20.0,
            labor_cost: 80.0,
        });

        assert_eq!(result.shared_cost_per_unit, 0.0);
        // Shared costs still land in the grand total
        assert_eq!(result.total_cogs, 100.0);
        assert_eq!(result.cost_per_unit.get("Phantom"), Some(&2.0));
    }

    #[test]
    fn test_multi_product_per_unit_uses_original_unit_cost() {
        // unit_cost 0.333 × 3 = 0.999 → product_cost rounds to 1.00,
        // i.e. product_cost / quantity = 0.3333. The per-unit figure
        // must start from the raw 0.333 instead.
        let result = calculate_multi_product_cogs(&MultiProductCogsInput {
            products: vec![entry("Scone", 0.333, 3.0)],
            shipping_cost: 0.0,
            labor_cost: 0.0,
        });

        assert_eq!(result.by_product.get("Scone").unwrap().product_cost, 1.0);
        assert_eq!(result.cost_per_unit.get("Scone"), Some(&0.33));
    }

    #[test]
    fn test_multi_product_duplicate_names_last_write_wins() {
        let result = calculate_multi_product_cogs(&MultiProductCogsInput {
            products: vec![entry("Cookie", 0.50, 100.0), entry("Cookie", 0.60, 50.0)],
            shipping_cost: 0.0,
            labor_cost: 0.0,
        });

        // Map holds the later line; totals count both
        assert_eq!(result.by_product.len(), 1);
        assert_eq!(result.by_product.get("Cookie").unwrap().product_cost, 30.0);
        assert_eq!(result.total_product_cost, 80.0);
    }

    fn studio_roles() -> Vec<StaffRole> {
        vec![
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
        ]
    }

    #[test]
    fn test_piece_cogs_full_breakdown() {
        let result = calculate_piece_cogs(&PieceCogsInput {
            bisque_cost: 4.50,
            glaze_cost_per_piece: 0.75,
            staff_roles: studio_roles(),
            kiln: KilnBatchConfig {
                hourly_rate: 17.0,
                minutes_per_firing: 30.0,
                kiln_worker_count: 2.0,
                pieces_per_firing: 20.0,
            },
            overhead: OverheadInput {
                monthly_overhead: 6000.0,
                pieces_per_month: 400.0,
            },
        });

        // guide $1.25 + manager $0.56 = $1.81 labor
        assert_eq!(result.breakdown.labor_by_role.get("Glazing Guide"), Some(&1.25));
        assert_eq!(result.breakdown.labor_by_role.get("Manager"), Some(&0.56));
        assert_eq!(result.breakdown.labor_total, 1.81);
        assert_eq!(result.breakdown.kiln_cost, 0.85);
        assert_eq!(result.breakdown.overhead_cost, 15.0);
        assert_eq!(result.breakdown.bisque_cost, 4.50);
        assert_eq!(result.breakdown.glaze_cost, 0.75);

        // 4.50 + 0.75 + 1.81 + 0.85 + 15.00 = 22.91
        assert_eq!(result.total_cogs, 22.91);
    }

    #[test]
    fn test_piece_cogs_with_no_staff_roles() {
        let result = calculate_piece_cogs(&PieceCogsInput {
            bisque_cost: 4.0,
            glaze_cost_per_piece: 1.0,
            staff_roles: Vec::new(),
            kiln: KilnBatchConfig {
                hourly_rate: 17.0,
                minutes_per_firing: 30.0,
                kiln_worker_count: 2.0,
                pieces_per_firing: 20.0,
            },
            overhead: OverheadInput {
                monthly_overhead: 0.0,
                pieces_per_month: 400.0,
            },
        });

        assert!(result.breakdown.labor_by_role.is_empty());
        assert_eq!(result.breakdown.labor_total, 0.0);
        assert_eq!(result.total_cogs, 5.85);
    }

    #[test]
    fn test_piece_cogs_duplicate_role_names_still_sum_in_total() {
        let twin = StaffRole {
            name: "Guide".to_string(),
            hourly_rate: 15.0,
            minutes_per_customer: 20.0,
            customers_simultaneous: 4.0,
        };
        let result = calculate_piece_cogs(&PieceCogsInput {
            bisque_cost: 0.0,
            glaze_cost_per_piece: 0.0,
            staff_roles: vec![twin.clone(), twin],
            kiln: KilnBatchConfig {
                hourly_rate: 0.0,
                minutes_per_firing: 0.0,
                kiln_worker_count: 0.0,
                pieces_per_firing: 1.0,
            },
            overhead: OverheadInput {
                monthly_overhead: 0.0,
                pieces_per_month: 1.0,
            },
        });

        // One reported line, but both roles count toward the total
        assert_eq!(result.breakdown.labor_by_role.len(), 1);
        assert_eq!(result.breakdown.labor_by_role.get("Guide"), Some(&1.25));
        assert_eq!(result.breakdown.labor_total, 2.5);
        assert_eq!(result.total_cogs, 2.5);
    }
}
