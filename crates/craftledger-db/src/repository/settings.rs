//! # Settings Repository
//!
//! Reads and writes the JSON documents in the `settings` table.
//!
//! ## Document Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        settings table                                   │
//! │                                                                         │
//! │  key                value                                              │
//! │  ───────────────    ─────────────────────────────────────────────      │
//! │  catalog            [{"id":..,"name":"Snowman Globe",...}, ...]        │
//! │  studio-settings    {"overhead":{...},"piecesPerMonth":400,...}        │
//! │  staff-roles        [{"name":"Glazing Guide",...}, ...]                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Typed loaders run every document through [`crate::schema`] so that
//! historical shapes upgrade transparently on read. Writers always
//! store the current shape.

use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use craftledger_core::types::{BisquePiece, StaffRole, StudioSettings};

use crate::error::{StoreError, StoreResult};
use crate::repository::{CATALOG_KEY, STAFF_ROLES_KEY, STUDIO_SETTINGS_KEY};
use crate::schema;

/// Generates a fresh line-item id for catalog and overhead rows.
pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Startup documents written only when a key has never been stored.
#[derive(Debug, Clone)]
pub struct SeedDefaults {
    pub catalog: Vec<BisquePiece>,
    pub studio: StudioSettings,
    pub staff_roles: Vec<StaffRole>,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for the settings key-value table.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new settings repository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    // -------------------------------------------------------------------------
    // Raw access
    // -------------------------------------------------------------------------

    /// Fetches the raw JSON document under a key, if any.
    pub async fn get_raw(&self, key: &str) -> StoreResult<Option<Value>> {
        let row: Option<String> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(text) => {
                let value = serde_json::from_str(&text)
                    .map_err(|e| StoreError::invalid_payload(key, e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Stores a document under a key, replacing any previous value.
    pub async fn put<D: Serialize>(&self, key: &str, document: &D) -> StoreResult<()> {
        let text = serde_json::to_string(document)
            .map_err(|e| StoreError::invalid_payload(key, e.to_string()))?;
        let updated_at = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO settings (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(&text)
        .bind(&updated_at)
        .execute(&self.pool)
        .await?;

        debug!(key = key, "Stored settings document");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Typed loaders / writers
    // -------------------------------------------------------------------------

    /// Loads the bisque piece catalog.
    pub async fn load_catalog(&self) -> StoreResult<Vec<BisquePiece>> {
        let value = self
            .get_raw(CATALOG_KEY)
            .await?
            .ok_or_else(|| StoreError::not_found(CATALOG_KEY))?;

        serde_json::from_value(value)
            .map_err(|e| StoreError::invalid_payload(CATALOG_KEY, e.to_string()))
    }

    /// Replaces the bisque piece catalog.
    pub async fn save_catalog(&self, catalog: &[BisquePiece]) -> StoreResult<()> {
        self.put(CATALOG_KEY, &catalog).await
    }

    /// Loads studio settings, upgrading historical shapes on read.
    pub async fn load_studio_settings(&self) -> StoreResult<StudioSettings> {
        let value = self
            .get_raw(STUDIO_SETTINGS_KEY)
            .await?
            .ok_or_else(|| StoreError::not_found(STUDIO_SETTINGS_KEY))?;

        schema::upgrade_studio_settings(STUDIO_SETTINGS_KEY, value)
    }

    /// Replaces studio settings (always written in the current shape).
    pub async fn save_studio_settings(&self, settings: &StudioSettings) -> StoreResult<()> {
        self.put(STUDIO_SETTINGS_KEY, settings).await
    }

    /// Loads the staff role list.
    pub async fn load_staff_roles(&self) -> StoreResult<Vec<StaffRole>> {
        let value = self
            .get_raw(STAFF_ROLES_KEY)
            .await?
            .ok_or_else(|| StoreError::not_found(STAFF_ROLES_KEY))?;

        serde_json::from_value(value)
            .map_err(|e| StoreError::invalid_payload(STAFF_ROLES_KEY, e.to_string()))
    }

    /// Replaces the staff role list.
    pub async fn save_staff_roles(&self, roles: &[StaffRole]) -> StoreResult<()> {
        self.put(STAFF_ROLES_KEY, &roles).await
    }

    // -------------------------------------------------------------------------
    // Seeding
    // -------------------------------------------------------------------------

    /// Writes each default document whose key has never been stored.
    ///
    /// Existing documents are left untouched, so this is safe to call
    /// on every startup. Returns how many keys were seeded.
    pub async fn seed_defaults(&self, defaults: &SeedDefaults) -> StoreResult<usize> {
        let mut seeded = 0;

        if self.get_raw(CATALOG_KEY).await?.is_none() {
            self.save_catalog(&defaults.catalog).await?;
            seeded += 1;
        }
        if self.get_raw(STUDIO_SETTINGS_KEY).await?.is_none() {
            self.save_studio_settings(&defaults.studio).await?;
            seeded += 1;
        }
        if self.get_raw(STAFF_ROLES_KEY).await?.is_none() {
            self.save_staff_roles(&defaults.staff_roles).await?;
            seeded += 1;
        }

        if seeded > 0 {
            info!(seeded = seeded, "Seeded default settings");
        }
        Ok(seeded)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
