//! Seeds starter documents for any key that has never been stored.

use craftledger_db::Store;

use crate::defaults;

pub async fn run(store: &Store) -> anyhow::Result<()> {
    let seeded = store
        .settings()
        .seed_defaults(&defaults::seed_defaults())
        .await?;

    if seeded == 0 {
        println!("All settings already present; nothing to seed.");
    } else {
        println!("Seeded {seeded} starter document(s).");
    }
    Ok(())
}
