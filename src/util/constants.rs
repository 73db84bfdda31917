// tabulog - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "tabulog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Output sheet layout
// =============================================================================

/// Header row: the five output column names, in order.
pub const COLUMN_HEADERS: [&str; 5] = ["Seconds", "Seconds since", "Error", "Body", "Notes"];

/// Cell of the base-time row's "Seconds since" column. The analyst edits
/// this into a real base time after opening the sheet; until then every
/// `=A<row>-B2` formula resolves against zero.
pub const BASE_TIME_SEED: &str = "0";

/// Fixed cell reference of the base-time value, used by every row formula.
pub const BASE_TIME_CELL: &str = "B2";

/// Error column content for lines that carried a leading [ERROR] tag.
pub const ERROR_FLAG: &str = "E";
