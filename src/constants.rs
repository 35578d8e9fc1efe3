//! Application constants for the campus energy service
//!
//! Column names, default locations and limits shared by the parser,
//! the aggregator and the HTTP surface.

// =============================================================================
// CSV Columns
// =============================================================================

/// Column holding the hour-ending timestamp of each reading
pub const TIMESTAMP_COLUMN: &str = "Timestamp (Hour Ending)";

/// Balancing-authority code column, never emitted in aggregates
pub const BA_CODE_COLUMN: &str = "BA Code";

/// Columns never emitted in aggregated output
pub const EXCLUDED_COLUMNS: &[&str] = &[BA_CODE_COLUMN, TIMESTAMP_COLUMN];

// =============================================================================
// Defaults
// =============================================================================

/// Default CSV location, relative to the working directory
pub const DEFAULT_CSV_PATH: &str = "data/energy.csv";

/// Default bind address for the HTTP server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Number of raw timestamps shown by the coverage report
pub const DEFAULT_SAMPLE_SIZE: usize = 6;

/// Application directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "campus-energy";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Hours
// =============================================================================

/// Highest valid hour-of-day bucket
pub const MAX_HOUR: u32 = 23;
