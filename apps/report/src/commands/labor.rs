//! Labor breakdown report, with optional per-product allocation.

use std::path::{Path, PathBuf};

use tracing::warn;

use craftledger_core::format_currency;
use craftledger_core::labor::{allocate_labor, calculate_labor_cost};
use craftledger_core::types::{Employee, ProductAllocations};
use craftledger_core::validation::validate_percentage;

use crate::commands::{print_json, read_json};

pub fn run(employees: &Path, allocations: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let employees: Vec<Employee> = read_json(employees)?;
    let result = calculate_labor_cost(&employees);

    if json {
        print_json(&result)?;
    } else {
        println!("\n=== LABOR BREAKDOWN ===\n");
        println!("Total Labor Cost:    {}", format_currency(result.total_labor_cost));
        println!("Employee Count:      {}", result.employee_count);
        if let Some(average) = result.average_cost_per_employee {
            println!("Avg per Employee:    {}", format_currency(average));
        }

        if let Some(by_role) = &result.by_role {
            println!("\nBy Role:");
            for (role, totals) in by_role.iter() {
                println!(
                    "  {role}: {} employees, {}",
                    totals.count,
                    format_currency(totals.total_cost)
                );
            }
        }
        if let Some(by_shift) = &result.by_shift {
            println!("\nBy Shift:");
            for (shift, totals) in by_shift.iter() {
                println!(
                    "  {shift}: {} employees, {}",
                    totals.count,
                    format_currency(totals.total_cost)
                );
            }
        }
    }

    if let Some(path) = allocations {
        let products: Vec<ProductAllocations> = read_json(&path)?;

        // The engine allows over-allocation (it surfaces as negative
        // unallocated labor), so out-of-range entries are flagged, not
        // rejected
        for product in &products {
            for entry in &product.entries {
                if let Err(err) = validate_percentage("percentage", entry.percentage) {
                    warn!(
                        product = %product.product_name,
                        %err,
                        "allocation entry outside the expected range"
                    );
                }
            }
        }

        let allocated = allocate_labor(&employees, &products);

        if json {
            print_json(&allocated)?;
        } else {
            println!("\n=== LABOR ALLOCATION ===\n");
            for (product, cost) in allocated.labor_by_product.iter() {
                println!("  {product}: {}", format_currency(*cost));
            }
            println!("\nTotal Allocated:     {}", format_currency(allocated.total_allocated));
            println!("Unallocated Labor:   {}", format_currency(allocated.unallocated_labor));
        }
    }

    Ok(())
}
