//! # Domain Types
//!
//! Input records and result records for the cost-allocation engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Input Records                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Employee     │   │   StaffRole     │   │ KilnBatchConfig │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  hourly_rate    │   │  name           │   │  hourly_rate    │       │
//! │  │  hours_worked   │   │  hourly_rate    │   │  minutes/firing │       │
//! │  │  role? shift?   │   │  minutes/cust   │   │  workers        │       │
//! │  └─────────────────┘   │  simultaneous   │   │  pieces/firing  │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  OverheadItem → OverheadSettings     Ingredient → ProductRecipe        │
//! │  ProductEntry, LaborAllocation       BisquePiece, StudioSettings       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All records are immutable values: created fresh per computation and
//! discarded after use, or persisted as raw input state by the store
//! crate. Serde uses camelCase so stored payloads match the JSON the
//! original web app wrote.
//!
//! Numeric fields are `f64` throughout, including worker and piece
//! counts: the engine's guard clauses (not the type system) decide
//! what a usable value is, so a negative or fractional count degrades
//! to a $0 contribution instead of being unrepresentable.

use serde::{Deserialize, Serialize};

use crate::breakdown::OrderedMap;

// =============================================================================
// Labor Inputs
// =============================================================================

/// One worker-shift entry: a person, their wage, and the hours they
/// worked. `role` and `shift` are optional grouping labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Hourly wage in dollars (e.g. 15.0 for $15/hr).
    pub hourly_rate: f64,

    /// Hours worked in this entry.
    pub hours_worked: f64,

    /// Optional role label for grouping (e.g. "cashier").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Optional shift label for grouping (e.g. "morning").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
}

/// A recurring staff position whose attention-time cost is shared
/// across the customers served at the same time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRole {
    /// Display name for this role (e.g. "Glazing Guide", "Manager").
    pub name: String,

    /// Hourly wage in dollars.
    pub hourly_rate: f64,

    /// Minutes this employee spends helping one customer.
    pub minutes_per_customer: f64,

    /// Customers this employee helps at the same time (shared attention).
    pub customers_simultaneous: f64,
}

impl StaffRole {
    /// True when the role has a non-blank display name.
    ///
    /// The engine performs no presence validation; the presentation
    /// layer uses this to drop placeholder rows before calculating.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A fraction of one employee's shift cost assigned to a product.
///
/// `percentage` is expected in the 0-100 range but is NOT clamped or
/// validated: allocations summing past 100% are permitted and surface
/// as negative unallocated labor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborAllocation {
    /// Index into the employee list this allocation draws from.
    pub employee_index: usize,

    /// Percentage of that employee's total shift cost (0-100 expected).
    pub percentage: f64,
}

/// A product's ordered list of labor allocations. The ordered-pair
/// form replaces the original's name-keyed object so that report
/// ordering is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAllocations {
    /// Product the allocations are credited to.
    pub product_name: String,

    /// Allocation entries, in report order.
    pub entries: Vec<LaborAllocation>,
}

// =============================================================================
// Batch / Kiln Inputs
// =============================================================================

/// One kiln firing cycle's labor parameters, amortized per piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KilnBatchConfig {
    /// Hourly wage of a kiln worker.
    pub hourly_rate: f64,

    /// How long one firing takes, in minutes (load + fire + unload).
    pub minutes_per_firing: f64,

    /// Workers involved in each firing.
    pub kiln_worker_count: f64,

    /// Customer pieces that fit in the kiln per firing.
    pub pieces_per_firing: f64,
}

// =============================================================================
// Overhead Inputs
// =============================================================================

/// A single overhead line item (e.g. "Rent" = $2000).
///
/// A negative amount is treated as a data-entry error and contributes
/// $0 when summed; it is never subtracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverheadItem {
    /// Stable identifier for editing and persistence.
    pub id: String,

    /// Display name (e.g. "Rent", "Insurance").
    pub name: String,

    /// Monthly dollar amount for this cost.
    pub amount: f64,
}

/// Monthly overhead split into fixed costs (rent, insurance) and
/// variable costs (supplies, packaging).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverheadSettings {
    pub fixed_costs: Vec<OverheadItem>,
    pub variable_costs: Vec<OverheadItem>,
}

/// Monthly overhead total and production volume, for per-piece
/// allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverheadInput {
    /// Total monthly overhead in dollars (fixed + variable).
    pub monthly_overhead: f64,

    /// Estimated customer pieces produced per month.
    pub pieces_per_month: f64,
}

// =============================================================================
// Recipe / Product Inputs
// =============================================================================

/// One ingredient line in a product recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Display name (keys the ingredient breakdown).
    pub name: String,

    /// Quantity used per batch.
    pub quantity: f64,

    /// Cost per unit of quantity.
    pub unit_cost: f64,
}

impl Ingredient {
    /// Unrounded line cost: `quantity × unit_cost`.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

/// A product recipe: ingredients plus an optional batch yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecipe {
    pub name: String,

    pub ingredients: Vec<Ingredient>,

    /// Units produced per batch. Per-unit cost is reported only when
    /// this is present and positive.
    #[serde(default, rename = "yield", skip_serializing_if = "Option::is_none")]
    pub yield_count: Option<f64>,
}

/// A product line in a multi-product COGS computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    pub name: String,

    /// Per-unit purchase/production cost.
    pub unit_cost: f64,

    /// Units produced or purchased.
    pub quantity: f64,
}

// =============================================================================
// Catalog / Settings Records
// =============================================================================

/// A piece in the studio's bisque catalog (e.g. "Snowman Globe", $4.50).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BisquePiece {
    /// Stable identifier for selection and persistence.
    pub id: String,

    /// Display name shown in the catalog.
    pub name: String,

    /// What the studio pays the supplier for this piece.
    pub wholesale_cost: f64,
}

impl BisquePiece {
    /// True when the piece has a non-blank display name. Blank entries
    /// are in-progress rows the presentation layer filters out.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Studio-wide settings that feed the per-piece COGS computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioSettings {
    /// Categorized monthly overhead line items.
    pub overhead: OverheadSettings,

    /// Estimated customer pieces produced per month.
    pub pieces_per_month: f64,

    /// Glaze, brushes, and supplies consumed per piece.
    pub glaze_cost_per_piece: f64,

    /// Kiln firing labor parameters.
    pub kiln: KilnBatchConfig,
}

// =============================================================================
// Result Records
// =============================================================================
// Results are output-only: they serialize (for JSON reports) but are
// never read back, so none of them implement Deserialize.

/// Echo of the three raw inputs to a simple COGS computation.
/// Deliberately unrounded: these are the caller's own figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CogsBreakdown {
    pub purchase_cost: f64,
    pub shipping_cost: f64,
    pub labor_cost: f64,
}

/// Simple COGS result: total plus itemized breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CogsResult {
    /// Rounded total cost of goods sold.
    pub total_cogs: f64,

    /// Rounded per-unit cost; absent when no positive quantity was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_unit: Option<f64>,

    pub breakdown: CogsBreakdown,
}

/// Per-group labor rollup (by role or by shift).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTotals {
    /// Employees in this group.
    pub count: usize,

    /// Unrounded group wage total.
    pub total_cost: f64,
}

/// Shift-sheet labor aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborCostResult {
    /// Unrounded sum of every employee's wage cost.
    pub total_labor_cost: f64,

    pub employee_count: usize,

    /// Rounded average; absent for an empty employee list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_cost_per_employee: Option<f64>,

    /// Present only when at least one employee carries a role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_role: Option<OrderedMap<GroupTotals>>,

    /// Present only when at least one employee carries a shift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_shift: Option<OrderedMap<GroupTotals>>,
}

/// One allocation line in a per-product labor detail list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationDetail {
    /// The employee's role, or "unassigned".
    pub role: String,

    /// The allocation percentage as given (not clamped).
    pub percentage: f64,

    /// Rounded allocated cost for this entry.
    pub cost: f64,
}

/// Result of allocating employee shift costs across products.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborAllocationResult {
    /// Rounded allocated labor per product.
    pub labor_by_product: OrderedMap<f64>,

    /// Ordered allocation lines per product, matching input order.
    pub detail_by_product: OrderedMap<Vec<AllocationDetail>>,

    /// Rounded total of all allocated labor.
    pub total_allocated: f64,

    /// Rounded remainder of employee cost not allocated to any
    /// product. Negative when allocations exceed 100% cumulative.
    pub unallocated_labor: f64,
}

/// Ingredient-based product cost result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCostResult {
    pub name: String,

    /// Rounded per-ingredient costs, keyed by ingredient name
    /// (last-write-wins on duplicate names).
    pub breakdown: OrderedMap<f64>,

    /// Rounded sum of the breakdown values.
    pub total_cost: f64,

    /// Rounded cost per yielded unit; absent without a positive yield.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_unit: Option<f64>,
}

/// One product line in a multi-product COGS result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub quantity: f64,

    /// Rounded `unit_cost × quantity`.
    pub product_cost: f64,
}

/// Multi-product COGS with shared shipping/labor distributed per unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiProductCogsResult {
    /// Rounded grand total: products + shipping + labor.
    pub total_cogs: f64,

    /// Rounded sum of per-product costs.
    pub total_product_cost: f64,

    /// Unrounded shared cost per unit; 0 when no units were produced.
    pub shared_cost_per_unit: f64,

    /// Quantity and rounded cost per product (last-write-wins on
    /// duplicate names).
    pub by_product: OrderedMap<ProductLine>,

    /// Rounded all-in per-unit cost per product. Built from the
    /// original unit cost, not the rounded product cost, so it can
    /// differ slightly from `product_cost / quantity`.
    pub cost_per_unit: OrderedMap<f64>,
}

/// Line-by-line breakdown of a single piece's COGS.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceCogsBreakdown {
    pub bisque_cost: f64,
    pub glaze_cost: f64,

    /// Rounded labor per staff role (last-write-wins on duplicate
    /// names; the labor total still counts every role).
    pub labor_by_role: OrderedMap<f64>,

    /// Rounded sum of all per-role costs.
    pub labor_total: f64,

    pub kiln_cost: f64,
    pub overhead_cost: f64,
}

/// Full per-piece COGS: total plus itemized breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceCogsResult {
    pub total_cogs: f64,
    pub breakdown: PieceCogsBreakdown,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_serde_uses_camel_case() {
        let employee = Employee {
            hourly_rate: 15.0,
            hours_worked: 8.0,
            role: Some("stocker".to_string()),
            shift: None,
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["hourlyRate"], 15.0);
        assert_eq!(json["hoursWorked"], 8.0);
        assert_eq!(json["role"], "stocker");
        // Absent optionals are omitted, not serialized as null
        assert!(json.get("shift").is_none());
    }

    #[test]
    fn test_recipe_yield_round_trips_under_its_json_name() {
        let recipe: ProductRecipe = serde_json::from_str(
            r#"{"name":"Sourdough","ingredients":[{"name":"Flour","quantity":2.0,"unitCost":1.5}],"yield":12}"#,
        )
        .unwrap();

        assert_eq!(recipe.yield_count, Some(12.0));
        assert_eq!(recipe.ingredients[0].cost(), 3.0);
    }

    #[test]
    fn test_blank_names_are_flagged_as_placeholders() {
        let piece = BisquePiece {
            id: "1".to_string(),
            name: "   ".to_string(),
            wholesale_cost: 4.5,
        };
        assert!(!piece.is_named());

        let role = StaffRole {
            name: "Manager".to_string(),
            hourly_rate: 20.0,
            minutes_per_customer: 5.0,
            customers_simultaneous: 3.0,
        };
        assert!(role.is_named());
    }

    #[test]
    fn test_studio_settings_match_stored_payload_shape() {
        let settings: StudioSettings = serde_json::from_str(
            r#"{
                "overhead": {
                    "fixedCosts": [{"id":"1","name":"Rent","amount":2000}],
                    "variableCosts": []
                },
                "piecesPerMonth": 400,
                "glazeCostPerPiece": 0.75,
                "kiln": {
                    "hourlyRate": 17,
                    "minutesPerFiring": 30,
                    "kilnWorkerCount": 2,
                    "piecesPerFiring": 20
                }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.overhead.fixed_costs[0].amount, 2000.0);
        assert_eq!(settings.kiln.pieces_per_firing, 20.0);
    }
}
