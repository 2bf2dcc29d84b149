//! # Labor Cost Primitives
//!
//! Per-employee wage costs, shift-sheet aggregation with role/shift
//! grouping, percentage-based allocation across products, and
//! shared-attention staff labor.
//!
//! ## Rounding Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Where labor figures round                                              │
//! │                                                                         │
//! │  labor_cost(employee)            UNROUNDED  (summation primitive)       │
//! │  total_labor_cost                UNROUNDED  (raw sum, by contract)      │
//! │  average_cost_per_employee       rounded once                           │
//! │  by_role / by_shift totals       UNROUNDED  (accumulated raw)           │
//! │                                                                         │
//! │  allocate_labor:                                                        │
//! │    per-employee cost             rounded once                           │
//! │    per-entry allocated cost      rounded once                           │
//! │    per-product total             rounded after summing entries          │
//! │    total_allocated               rounded once over the running sum      │
//! │    unallocated_labor             rounded difference                     │
//! │                                                                         │
//! │  calculate_staff_labor_cost      rounded once (a reportable figure)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::breakdown::OrderedMap;
use crate::money::round_cents;
use crate::types::{
    AllocationDetail, Employee, GroupTotals, LaborAllocationResult, LaborCostResult,
    ProductAllocations, StaffRole,
};
use crate::validation::staff_role_status;
use crate::{MINUTES_PER_HOUR, UNASSIGNED_GROUP};

// =============================================================================
// Per-Employee Cost
// =============================================================================

/// One employee's wage cost for their shift: `hourly_rate × hours_worked`.
///
/// Unrounded on purpose - this is the summation primitive. Callers
/// that report the figure round it themselves.
#[inline]
pub fn labor_cost(employee: &Employee) -> f64 {
    employee.hourly_rate * employee.hours_worked
}

// =============================================================================
// Shift-Sheet Aggregation
// =============================================================================

/// Aggregates a list of worker-shift entries into a labor summary.
///
/// ## Behavior
/// - `total_labor_cost` is the raw (unrounded) sum of every entry
/// - `average_cost_per_employee` is rounded, and absent for an empty list
/// - `by_role` / `by_shift` appear only when at least one employee
///   carries the field; entries lacking it are then bucketed under
///   "unassigned". Group keys keep first-seen order and accumulate
///   unrounded per-employee cost.
///
/// ## Example
/// ```rust
/// use craftledger_core::labor::calculate_labor_cost;
/// use craftledger_core::types::Employee;
///
/// let result = calculate_labor_cost(&[
///     Employee { hourly_rate: 15.0, hours_worked: 8.0, role: None, shift: None },
///     Employee { hourly_rate: 18.0, hours_worked: 8.0, role: None, shift: None },
/// ]);
///
/// assert_eq!(result.total_labor_cost, 264.0);
/// assert_eq!(result.average_cost_per_employee, Some(132.0));
/// assert!(result.by_role.is_none());
/// ```
pub fn calculate_labor_cost(employees: &[Employee]) -> LaborCostResult {
    let total_labor_cost: f64 = employees.iter().map(labor_cost).sum();
    let employee_count = employees.len();

    let average_cost_per_employee = if employee_count > 0 {
        Some(round_cents(total_labor_cost / employee_count as f64))
    } else {
        None
    };

    LaborCostResult {
        total_labor_cost,
        employee_count,
        average_cost_per_employee,
        by_role: group_totals(employees, |e| e.role.as_deref()),
        by_shift: group_totals(employees, |e| e.shift.as_deref()),
    }
}

/// Groups employees by an optional label field.
///
/// Returns `None` when no employee carries the field at all, so the
/// corresponding breakdown is omitted entirely rather than reported
/// as an empty object.
fn group_totals<'a>(
    employees: &'a [Employee],
    field: impl Fn(&'a Employee) -> Option<&'a str>,
) -> Option<OrderedMap<GroupTotals>> {
    let labeled = |e: &'a Employee| field(e).filter(|label| !label.trim().is_empty());

    if !employees.iter().any(|e| labeled(e).is_some()) {
        return None;
    }

    let mut groups: OrderedMap<GroupTotals> = OrderedMap::new();
    for employee in employees {
        let key = labeled(employee).unwrap_or(UNASSIGNED_GROUP);
        let group = groups.entry_or_insert(
            key,
            GroupTotals {
                count: 0,
                total_cost: 0.0,
            },
        );
        group.count += 1;
        group.total_cost += labor_cost(employee);
    }

    Some(groups)
}

// =============================================================================
// Percentage Allocation
// =============================================================================

/// Allocates fractions of employee shift costs to named products.
///
/// ## Behavior
/// - Each employee's shift cost is rounded once up front
/// - Each allocation entry's cost is `round(cost × percentage / 100)`
/// - Per-product totals and the grand total round after summing
/// - `unallocated_labor` = round(Σ employee cost − total_allocated);
///   it goes negative when allocations exceed 100% cumulative, which
///   is permitted (percentage sums are never clamped or validated)
/// - An out-of-range `employee_index` contributes a $0 entry labeled
///   "unassigned" instead of failing
///
/// ## Example
/// ```rust
/// use craftledger_core::labor::allocate_labor;
/// use craftledger_core::types::{Employee, LaborAllocation, ProductAllocations};
///
/// let employees = [Employee {
///     hourly_rate: 20.0,
///     hours_worked: 5.0,
///     role: Some("baker".to_string()),
///     shift: None,
/// }];
/// let allocations = [ProductAllocations {
///     product_name: "Sourdough".to_string(),
///     entries: vec![LaborAllocation { employee_index: 0, percentage: 100.0 }],
/// }];
///
/// let result = allocate_labor(&employees, &allocations);
/// assert_eq!(result.total_allocated, 100.0);
/// assert_eq!(result.unallocated_labor, 0.0);
/// ```
pub fn allocate_labor(
    employees: &[Employee],
    allocations: &[ProductAllocations],
) -> LaborAllocationResult {
    // Rounded once per employee; every allocation draws from these.
    let employee_costs: Vec<f64> = employees
        .iter()
        .map(|e| round_cents(labor_cost(e)))
        .collect();

    let mut labor_by_product: OrderedMap<f64> = OrderedMap::new();
    let mut detail_by_product: OrderedMap<Vec<AllocationDetail>> = OrderedMap::new();
    let mut running_allocated = 0.0;

    for product in allocations {
        let mut product_total = 0.0;
        let mut details = Vec::with_capacity(product.entries.len());

        for entry in &product.entries {
            let employee_cost = employee_costs
                .get(entry.employee_index)
                .copied()
                .unwrap_or(0.0);
            let cost = round_cents(employee_cost * entry.percentage / 100.0);

            product_total += cost;
            running_allocated += cost;

            // Blank roles bucket like missing roles, matching the
            // shift-sheet grouping
            let role = employees
                .get(entry.employee_index)
                .and_then(|e| e.role.as_deref())
                .filter(|role| !role.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| UNASSIGNED_GROUP.to_string());
            details.push(AllocationDetail {
                role,
                percentage: entry.percentage,
                cost,
            });
        }

        // A product name appearing twice accumulates into the same line.
        let slot = labor_by_product.entry_or_insert(&product.product_name, 0.0);
        *slot = round_cents(*slot + product_total);
        detail_by_product
            .entry_or_insert(&product.product_name, Vec::new())
            .extend(details);
    }

    let total_allocated = round_cents(running_allocated);
    let total_employee_cost: f64 = employee_costs.iter().sum();

    LaborAllocationResult {
        labor_by_product,
        detail_by_product,
        total_allocated,
        unallocated_labor: round_cents(total_employee_cost - total_allocated),
    }
}

// =============================================================================
// Shared-Attention Staff Labor
// =============================================================================

/// One staff member's labor cost per customer piece.
///
/// Formula: `(hourly_rate × minutes_per_customer / 60) / customers_simultaneous`
///
/// The divide-by-60 converts minutes into a fraction of an hour;
/// dividing by the simultaneous customer count splits the cost because
/// the employee's attention is shared across those customers.
///
/// ## Example
/// A guide earns $15/hr, spends 20 minutes per customer, and helps
/// 4 customers at once: ($15 × 20 / 60) / 4 = $1.25 per piece.
///
/// Returns $0 when the guard trips (zero/negative customer count,
/// negative rate or time).
pub fn calculate_staff_labor_cost(role: &StaffRole) -> f64 {
    if staff_role_status(role).is_degraded() {
        return 0.0;
    }

    let cost =
        (role.hourly_rate * role.minutes_per_customer / MINUTES_PER_HOUR)
            / role.customers_simultaneous;
    round_cents(cost)
}

// =============================================================================
// Unit Tests
// =============================================================================
