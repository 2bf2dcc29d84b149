//! Recipe costing report: itemized ingredient costs per batch.

use std::path::Path;

use anyhow::Context;

use craftledger_core::costing::calculate_product_cost;
use craftledger_core::format_currency;
use craftledger_core::types::ProductRecipe;
use craftledger_core::validation::validate_display_name;

use crate::commands::{print_json, read_json};

pub fn run(recipe: &Path, json: bool) -> anyhow::Result<()> {
    let recipe: ProductRecipe = read_json(recipe)?;
    validate_display_name("recipe name", &recipe.name).context("invalid recipe file")?;

    let result = calculate_product_cost(&recipe);

    if json {
        return print_json(&result);
    }

    println!("\n=== {} ===\n", result.name);
    for (ingredient, cost) in result.breakdown.iter() {
        println!("  {ingredient}: {}", format_currency(*cost));
    }
    println!("─────────────────────────");
    println!("Batch Cost:          {}", format_currency(result.total_cost));
    if let Some(per_unit) = result.cost_per_unit {
        println!("Cost per Unit:       {}", format_currency(per_unit));
    }

    Ok(())
}
