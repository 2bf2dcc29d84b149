//! # craftledger-core: Pure Cost-Allocation Engine
//!
//! This crate is the **heart** of Craftledger. It turns raw business
//! inputs (employee hours, ingredient quantities, overhead categories,
//! kiln batch parameters, percentage-based labor allocation) into
//! validated, rounded, itemized cost results.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Craftledger Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Report Shell (apps/report)                     │   │
//! │  │    piece report ──► labor report ──► simple COGS report        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ craftledger-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   labor   │  │  costing  │  │   cogs    │  │   │
//! │  │   │ rounding  │  │  shifts   │  │ kiln/ovh  │  │ assembly  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NEVER THROWS • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 craftledger-db (Settings Store)                 │   │
//! │  │          SQLite key-value store, payload migrations             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Cent rounding and currency formatting
//! - [`types`] - Input records and result records
//! - [`breakdown`] - Insertion-ordered breakdown maps
//! - [`labor`] - Labor cost primitives and allocation
//! - [`costing`] - Kiln, overhead, and recipe primitives
//! - [`cogs`] - COGS assemblers
//! - [`validation`] - Degrade guards and boundary validators
//! - [`error`] - Boundary validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Never Throw**: Invalid numeric inputs degrade to a $0 contribution
//! 4. **Single Rounding Point**: Every reportable figure routes through
//!    [`money::round_cents`] exactly once
//!
//! ## Example Usage
//!
//! ```rust
//! use craftledger_core::cogs::{calculate_cogs, CogsInput};
//!
//! let result = calculate_cogs(&CogsInput {
//!     purchase_cost: 100.0,
//!     shipping_cost: 20.0,
//!     labor_cost: 30.0,
//!     quantity: Some(10.0),
//! });
//!
//! assert_eq!(result.total_cogs, 150.0);
//! assert_eq!(result.cost_per_unit, Some(15.0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod cogs;
pub mod costing;
pub mod error;
pub mod labor;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use craftledger_core::round_cents` instead of
// `use craftledger_core::money::round_cents`

pub use breakdown::OrderedMap;
pub use error::ValidationError;
pub use money::{format_currency, round_cents};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Grouping key used for employees that carry no role or shift when at
/// least one other employee does.
///
/// ## Why a constant?
/// The same literal appears in shift-sheet grouping and in allocation
/// detail rows; a typo in one of them would silently split the bucket.
pub const UNASSIGNED_GROUP: &str = "unassigned";

/// Minutes per hour, named so the wage conversions read as formulas.
pub const MINUTES_PER_HOUR: f64 = 60.0;
