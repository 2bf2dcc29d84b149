//! # Batch and Unit Cost Primitives
//!
//! Kiln firing labor amortized per piece, overhead aggregation and
//! per-piece allocation, and ingredient-based recipe costing.
//!
//! ## Cost Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  KilnBatchConfig ──► calculate_kiln_labor_cost ──► $/piece              │
//! │                                                                         │
//! │  OverheadSettings ──► calculate_total_overhead ─┐                       │
//! │                                                 ▼                       │
//! │  OverheadInput { monthly, pieces } ──► calculate_overhead_cost          │
//! │                                                 │                       │
//! │  ProductRecipe ──► calculate_product_cost ──► total + $/unit            │
//! │                                                 │                       │
//! │                        all feed the assemblers in cogs.rs               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::breakdown::OrderedMap;
use crate::money::round_cents;
use crate::types::{
    KilnBatchConfig, OverheadInput, OverheadItem, OverheadSettings, ProductCostResult,
    ProductRecipe,
};
use crate::validation::{kiln_status, overhead_status};
use crate::MINUTES_PER_HOUR;

// =============================================================================
// Kiln Labor
// =============================================================================

/// Kiln firing labor cost allocated to a single piece.
///
/// Formula: `(hourly_rate × minutes_per_firing / 60) × kiln_worker_count / pieces_per_firing`
///
/// First the total labor cost for one firing (rate × time × workers),
/// then divided by the pieces in that firing for the per-piece share.
///
/// ## Example
/// 2 workers at $17/hr, 30-minute firing, 20 pieces per load:
/// total firing labor = ($17 × 30/60) × 2 = $17.00; per piece = $0.85.
///
/// Returns $0 when the guard trips (zero/negative pieces per firing,
/// negative rate, workers, or minutes).
pub fn calculate_kiln_labor_cost(config: &KilnBatchConfig) -> f64 {
    if kiln_status(config).is_degraded() {
        return 0.0;
    }

    let total_firing_labor =
        (config.hourly_rate * config.minutes_per_firing / MINUTES_PER_HOUR)
            * config.kiln_worker_count;
    round_cents(total_firing_labor / config.pieces_per_firing)
}

// =============================================================================
// Overhead
// =============================================================================

/// Adds up a list of overhead line items, treating any negative
/// amount as $0. A negative line item is a data-entry error and must
/// never reduce the total.
pub fn sum_overhead_items(items: &[OverheadItem]) -> f64 {
    items.iter().map(|item| item.amount.max(0.0)).sum()
}

/// Combined monthly total of all fixed and variable overhead items.
pub fn calculate_total_overhead(settings: &OverheadSettings) -> f64 {
    sum_overhead_items(&settings.fixed_costs) + sum_overhead_items(&settings.variable_costs)
}

/// Overhead cost allocated to a single piece.
///
/// Formula: `monthly_overhead / pieces_per_month`
///
/// ## Example
/// $6,000/month overhead across 400 pieces/month = $15.00 per piece.
///
/// Returns $0 when the guard trips (zero/negative monthly production,
/// negative overhead total).
pub fn calculate_overhead_cost(input: &OverheadInput) -> f64 {
    if overhead_status(input).is_degraded() {
        return 0.0;
    }

    round_cents(input.monthly_overhead / input.pieces_per_month)
}

// =============================================================================
// Recipe Costing
// =============================================================================

/// Ingredient-based product cost with optional per-unit yield cost.
///
/// ## Behavior
/// - Each ingredient's line cost is `round(quantity × unit_cost)`,
///   keyed by ingredient name. A duplicate name overwrites the earlier
///   line (last-write-wins) while keeping its position.
/// - `total_cost` rounds the sum of the breakdown values, summed in
///   input order.
/// - `cost_per_unit` = `round(total_cost / yield)` only when a
///   positive yield was given.
///
/// ## Example
/// ```rust
/// use craftledger_core::costing::calculate_product_cost;
/// use craftledger_core::types::{Ingredient, ProductRecipe};
///
/// let result = calculate_product_cost(&ProductRecipe {
///     name: "Sourdough".to_string(),
///     ingredients: vec![
///         Ingredient { name: "Flour".to_string(), quantity: 2.0, unit_cost: 1.5 },
///         Ingredient { name: "Salt".to_string(), quantity: 0.05, unit_cost: 4.0 },
///     ],
///     yield_count: Some(4.0),
/// });
///
/// assert_eq!(result.total_cost, 3.2);
/// assert_eq!(result.cost_per_unit, Some(0.8));
/// ```
pub fn calculate_product_cost(recipe: &ProductRecipe) -> ProductCostResult {
    let mut breakdown: OrderedMap<f64> = OrderedMap::new();
    for ingredient in &recipe.ingredients {
        breakdown.insert(&ingredient.name, round_cents(ingredient.cost()));
    }

    let total_cost = round_cents(breakdown.values().sum());

    let cost_per_unit = match recipe.yield_count {
        Some(yield_count) if yield_count > 0.0 => Some(round_cents(total_cost / yield_count)),
        _ => None,
    };

    ProductCostResult {
        name: recipe.name.clone(),
        breakdown,
        total_cost,
        cost_per_unit,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ingredient;

    fn kiln() -> KilnBatchConfig {
        KilnBatchConfig {
            hourly_rate: 17.0,
            minutes_per_firing: 30.0,
            kiln_worker_count: 2.0,
            pieces_per_firing: 20.0,
        }
    }

    #[test]
    fn test_kiln_labor_cost_per_piece() {
        // ($17 × 30/60 × 2 workers) / 20 pieces = $0.85
        assert_eq!(calculate_kiln_labor_cost(&kiln()), 0.85);
    }

    #[test]
    fn test_kiln_guards_return_zero() {
        assert_eq!(
            calculate_kiln_labor_cost(&KilnBatchConfig {
                pieces_per_firing: 0.0,
                ..kiln()
            }),
            0.0
        );
        assert_eq!(
            calculate_kiln_labor_cost(&KilnBatchConfig {
                pieces_per_firing: -5.0,
                ..kiln()
            }),
            0.0
        );
        assert_eq!(
            calculate_kiln_labor_cost(&KilnBatchConfig {
                hourly_rate: -17.0,
                ..kiln()
            }),
            0.0
        );
        assert_eq!(
            calculate_kiln_labor_cost(&KilnBatchConfig {
                kiln_worker_count: -2.0,
                ..kiln()
            }),
            0.0
        );
        assert_eq!(
            calculate_kiln_labor_cost(&KilnBatchConfig {
                minutes_per_firing: -30.0,
                ..kiln()
            }),
            0.0
        );
    }

    fn item(id: &str, name: &str, amount: f64) -> OverheadItem {
        OverheadItem {
            id: id.to_string(),
            name: name.to_string(),
            amount,
        }
    }

    #[test]
    fn test_sum_overhead_items() {
        let items = [item("1", "Rent", 2000.0), item("2", "Insurance", 300.0)];
        assert_eq!(sum_overhead_items(&items), 2300.0);
        assert_eq!(sum_overhead_items(&[]), 0.0);
    }

    #[test]
    fn test_negative_line_items_contribute_nothing() {
        let items = [item("1", "Refund?", -500.0), item("2", "Rent", 300.0)];
        assert_eq!(sum_overhead_items(&items), 300.0);
    }

    #[test]
    fn test_total_overhead_combines_categories() {
        let settings = OverheadSettings {
            fixed_costs: vec![item("1", "Rent", 2000.0), item("2", "Insurance", 300.0)],
            variable_costs: vec![item("3", "Supplies", 450.0)],
        };
        assert_eq!(calculate_total_overhead(&settings), 2750.0);
    }

    #[test]
    fn test_overhead_cost_per_piece() {
        assert_eq!(
            calculate_overhead_cost(&OverheadInput {
                monthly_overhead: 6000.0,
                pieces_per_month: 400.0,
            }),
            15.0
        );
        // $5000 / 300 = $16.666... → $16.67
        assert_eq!(
            calculate_overhead_cost(&OverheadInput {
                monthly_overhead: 5000.0,
                pieces_per_month: 300.0,
            }),
            16.67
        );
    }

    #[test]
    fn test_overhead_guards_return_zero() {
        assert_eq!(
            calculate_overhead_cost(&OverheadInput {
                monthly_overhead: -6000.0,
                pieces_per_month: 400.0,
            }),
            0.0
        );
        assert_eq!(
            calculate_overhead_cost(&OverheadInput {
                monthly_overhead: 6000.0,
                pieces_per_month: 0.0,
            }),
            0.0
        );
        assert_eq!(
            calculate_overhead_cost(&OverheadInput {
                monthly_overhead: 6000.0,
                pieces_per_month: -100.0,
            }),
            0.0
        );
    }

    fn ingredient(name: &str, quantity: f64, unit_cost: f64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            quantity,
            unit_cost,
        }
    }

    #[test]
    fn test_product_cost_itemizes_and_totals() {
        let result = calculate_product_cost(&ProductRecipe {
            name: "Chocolate Chip Cookie".to_string(),
            ingredients: vec![
                ingredient("Flour", 2.0, 1.5),
                ingredient("Butter", 1.0, 3.25),
                ingredient("Chocolate Chips", 0.5, 6.0),
            ],
            yield_count: Some(24.0),
        });

        assert_eq!(result.breakdown.get("Flour"), Some(&3.0));
        assert_eq!(result.breakdown.get("Butter"), Some(&3.25));
        assert_eq!(result.breakdown.get("Chocolate Chips"), Some(&3.0));
        assert_eq!(result.total_cost, 9.25);
        // 9.25 / 24 = 0.3854... → 0.39
        assert_eq!(result.cost_per_unit, Some(0.39));
    }

    #[test]
    fn test_product_cost_without_yield_has_no_per_unit() {
        let result = calculate_product_cost(&ProductRecipe {
            name: "Glaze Batch".to_string(),
            ingredients: vec![ingredient("Clear Glaze", 3.0, 12.0)],
            yield_count: None,
        });

        assert_eq!(result.total_cost, 36.0);
        assert_eq!(result.cost_per_unit, None);

        let zero_yield = calculate_product_cost(&ProductRecipe {
            name: "Glaze Batch".to_string(),
            ingredients: vec![ingredient("Clear Glaze", 3.0, 12.0)],
            yield_count: Some(0.0),
        });
        assert_eq!(zero_yield.cost_per_unit, None);
    }

    #[test]
    fn test_duplicate_ingredient_name_is_last_write_wins() {
        let result = calculate_product_cost(&ProductRecipe {
            name: "Odd Recipe".to_string(),
            ingredients: vec![
                ingredient("Flour", 1.0, 2.0),
                ingredient("Sugar", 1.0, 1.0),
                ingredient("Flour", 1.0, 5.0),
            ],
            yield_count: None,
        });

        // The second "Flour" line overwrote the first in the breakdown,
        // so the total reflects only the surviving lines.
        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.breakdown.get("Flour"), Some(&5.0));
        assert_eq!(result.total_cost, 6.0);

        let keys: Vec<&str> = result.breakdown.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Flour", "Sugar"]);
    }
}
