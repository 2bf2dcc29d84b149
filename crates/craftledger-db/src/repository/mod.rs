//! # Repository Layer
//!
//! Data access built on the `settings` key-value table. Each well-known
//! key holds one JSON document of user input.

pub mod settings;

/// Key for the bisque piece catalog (`Vec<BisquePiece>`).
pub const CATALOG_KEY: &str = "catalog";

/// Key for studio-wide settings (`StudioSettings`).
pub const STUDIO_SETTINGS_KEY: &str = "studio-settings";

/// Key for the staff role list (`Vec<StaffRole>`).
pub const STAFF_ROLES_KEY: &str = "staff-roles";
