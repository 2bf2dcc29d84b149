//! Simple COGS summary from command-line figures.

use tracing::warn;

use craftledger_core::cogs::{calculate_cogs, CogsInput};
use craftledger_core::format_currency;
use craftledger_core::validation::validate_non_negative;

use crate::commands::print_json;

pub fn run(
    purchase: f64,
    shipping: f64,
    labor: f64,
    quantity: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    for (field, value) in [("purchase", purchase), ("shipping", shipping), ("labor", labor)] {
        if let Err(err) = validate_non_negative(field, value) {
            warn!(%err, "continuing with the figure as given");
        }
    }

    let result = calculate_cogs(&CogsInput {
        purchase_cost: purchase,
        shipping_cost: shipping,
        labor_cost: labor,
        quantity,
    });

    if json {
        return print_json(&result);
    }

    println!("\n=== COGS SUMMARY ===\n");
    println!("Purchase Cost:       {}", format_currency(result.breakdown.purchase_cost));
    println!("Shipping Cost:       {}", format_currency(result.breakdown.shipping_cost));
    println!("Labor Cost:          {}", format_currency(result.breakdown.labor_cost));
    println!("─────────────────────────");
    println!("Total COGS:          {}", format_currency(result.total_cogs));
    if let Some(per_unit) = result.cost_per_unit {
        println!("Cost per Unit:       {}", format_currency(per_unit));
    }

    Ok(())
}
