//! Multi-product COGS report with shared shipping and labor.

use std::path::Path;

use tracing::warn;

use craftledger_core::cogs::{calculate_multi_product_cogs, MultiProductCogsInput};
use craftledger_core::format_currency;
use craftledger_core::types::ProductEntry;
use craftledger_core::validation::validate_positive_count;

use crate::commands::{print_json, read_json};

pub fn run(products: &Path, shipping: f64, labor: f64, json: bool) -> anyhow::Result<()> {
    let products: Vec<ProductEntry> = read_json(products)?;

    for product in &products {
        if let Err(err) = validate_positive_count("quantity", product.quantity) {
            warn!(product = %product.name, %err, "line contributes no units");
        }
    }
    let result = calculate_multi_product_cogs(&MultiProductCogsInput {
        products,
        shipping_cost: shipping,
        labor_cost: labor,
    });

    if json {
        return print_json(&result);
    }

    println!("\n=== MULTI-PRODUCT COGS ===\n");
    for (name, line) in result.by_product.iter() {
        let per_unit = result
            .cost_per_unit
            .get(name)
            .map(|c| format_currency(*c))
            .unwrap_or_default();
        println!(
            "  {name}: {} units, {} ({per_unit}/unit all-in)",
            line.quantity,
            format_currency(line.product_cost)
        );
    }
    println!("\nProduct Cost:        {}", format_currency(result.total_product_cost));
    println!("Shared per Unit:     {}", format_currency(result.shared_cost_per_unit));
    println!("─────────────────────────");
    println!("Total COGS:          {}", format_currency(result.total_cogs));

    Ok(())
}
