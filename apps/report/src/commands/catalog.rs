//! Catalog management: add and list bisque pieces.

use anyhow::Context;

use craftledger_core::format_currency;
use craftledger_core::types::BisquePiece;
use craftledger_core::validation::{validate_display_name, validate_non_negative};
use craftledger_db::repository::settings::new_item_id;
use craftledger_db::{Store, StoreError};

use crate::commands::{print_json, CatalogAction};

pub async fn run(store: &Store, action: CatalogAction, json: bool) -> anyhow::Result<()> {
    match action {
        CatalogAction::Add { name, cost } => add(store, name, cost).await,
        CatalogAction::List => list(store, json).await,
    }
}

async fn add(store: &Store, name: String, cost: f64) -> anyhow::Result<()> {
    validate_display_name("piece name", &name).context("refusing to add the piece")?;
    validate_non_negative("cost", cost).context("refusing to add the piece")?;

    let repo = store.settings();
    // First add on a fresh database starts an empty catalog
    let mut catalog = match repo.load_catalog().await {
        Ok(catalog) => catalog,
        Err(StoreError::NotFound { .. }) => Vec::new(),
        Err(err) => return Err(err.into()),
    };

    let piece = BisquePiece {
        id: new_item_id(),
        name,
        wholesale_cost: cost,
    };
    println!("Added {} ({})", piece.name, format_currency(piece.wholesale_cost));

    catalog.push(piece);
    repo.save_catalog(&catalog).await?;
    Ok(())
}

async fn list(store: &Store, json: bool) -> anyhow::Result<()> {
    let catalog = store.settings().load_catalog().await?;
    let named: Vec<_> = catalog.into_iter().filter(|p| p.is_named()).collect();

    if json {
        return print_json(&named);
    }

    if named.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }
    for piece in &named {
        println!("  {} ({})", piece.name, format_currency(piece.wholesale_cost));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use craftledger_db::StoreConfig;

    async fn test_store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_add_creates_pieces_with_distinct_ids() {
        let store = test_store().await;

        add(&store, "Mug".to_string(), 3.0).await.unwrap();
        add(&store, "Bowl".to_string(), 5.0).await.unwrap();

        let catalog = store.settings().load_catalog().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Mug");
        assert_eq!(catalog[1].wholesale_cost, 5.0);
        assert_ne!(catalog[0].id, catalog[1].id);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_names_and_negative_costs() {
        let store = test_store().await;

        assert!(add(&store, "   ".to_string(), 3.0).await.is_err());
        assert!(add(&store, "Mug".to_string(), -1.0).await.is_err());

        // Nothing was written
        let loaded = store.settings().load_catalog().await;
        assert!(matches!(loaded, Err(StoreError::NotFound { .. })));
    }
}
