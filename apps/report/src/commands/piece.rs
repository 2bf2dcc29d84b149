//! Per-piece COGS report from the stored studio data.

use anyhow::bail;
use tracing::debug;

use craftledger_core::cogs::{calculate_piece_cogs, PieceCogsInput};
use craftledger_core::costing::calculate_total_overhead;
use craftledger_core::format_currency;
use craftledger_core::types::{OverheadInput, PieceCogsResult};
use craftledger_db::Store;

use crate::commands::print_json;

pub async fn run(store: &Store, name: Option<String>, json: bool) -> anyhow::Result<()> {
    let repo = store.settings();
    let catalog = repo.load_catalog().await?;
    let settings = repo.load_studio_settings().await?;
    let staff_roles = repo.load_staff_roles().await?;

    // Blank rows are in-progress edits, not real data
    let named: Vec<_> = catalog.iter().filter(|p| p.is_named()).collect();
    let roles: Vec<_> = staff_roles.into_iter().filter(|r| r.is_named()).collect();

    let selected: Vec<_> = match &name {
        Some(wanted) => {
            let found: Vec<_> = named
                .iter()
                .filter(|p| p.name.eq_ignore_ascii_case(wanted))
                .copied()
                .collect();
            if found.is_empty() {
                bail!("no catalog piece named '{wanted}'");
            }
            found
        }
        None => {
            if named.is_empty() {
                bail!("the catalog has no named pieces; run `craftledger seed` and add some");
            }
            named
        }
    };

    let monthly_overhead = calculate_total_overhead(&settings.overhead);
    debug!(monthly_overhead, pieces = selected.len(), "Reporting piece COGS");

    for piece in selected {
        let result = calculate_piece_cogs(&PieceCogsInput {
            bisque_cost: piece.wholesale_cost,
            glaze_cost_per_piece: settings.glaze_cost_per_piece,
            staff_roles: roles.clone(),
            kiln: settings.kiln,
            overhead: OverheadInput {
                monthly_overhead,
                pieces_per_month: settings.pieces_per_month,
            },
        });

        if json {
            print_json(&result)?;
        } else {
            print_report(&piece.name, &result);
        }
    }

    Ok(())
}

fn print_report(name: &str, result: &PieceCogsResult) {
    let b = &result.breakdown;

    println!("\n=== {name} ===\n");
    println!("Bisque Cost:         {}", format_currency(b.bisque_cost));
    println!("Glaze Cost:          {}", format_currency(b.glaze_cost));
    for (role, cost) in b.labor_by_role.iter() {
        println!("  {role}: {}", format_currency(*cost));
    }
    println!("Labor Total:         {}", format_currency(b.labor_total));
    println!("Kiln Cost:           {}", format_currency(b.kiln_cost));
    println!("Overhead Cost:       {}", format_currency(b.overhead_cost));
    println!("─────────────────────────");
    println!("Total COGS:          {}", format_currency(result.total_cogs));
}
