//! # craftledger-db: Settings Store for Craftledger
//!
//! This crate persists user input for the Craftledger COGS engine.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Craftledger Data Flow                              │
//! │                                                                         │
//! │  Report binary (apps/report)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  craftledger-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ (settings.rs) │    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │                        ┌───────┴───────┐                       │   │
//! │  │                        │    schema     │  Payload upgrades     │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: settings(key, value JSON, updated_at)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`schema`] - Stored payload shape upgrades
//! - [`error`] - Store error types
//! - [`repository`] - Settings repository and well-known keys
//!
//! ## Usage
//!
//! ```rust,ignore
//! use craftledger_db::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("craftledger.db")).await?;
//! let settings = store.settings().load_studio_settings().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};
pub use repository::settings::{SeedDefaults, SettingsRepository};
