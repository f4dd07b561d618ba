//! Application-wide constants
//!
//! This module contains all constant values used throughout the crate.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default root path under which `uploads/attachments/<problem>` lives
pub const DEFAULT_ROOT_PATH: &str = ".";

// =============================================================================
// PROBLEM LIMITS
// =============================================================================

/// Minimum number of tests a problem may declare
pub const MIN_TESTS: i32 = 1;

/// Maximum number of tests a problem may declare
pub const MAX_TESTS: i32 = 100;

/// Problem names are short lowercase slugs
pub const PROBLEM_NAME_PATTERN: &str = r"^[a-z0-9]{2,15}$";

/// Default time limit for freshly created problems (milliseconds)
pub const DEFAULT_TIME_LIMIT_MS: i32 = 2000;

/// Default memory limit for freshly created problems (kilobytes)
pub const DEFAULT_MEMORY_LIMIT_KB: i32 = 256 * 1024;

/// Earliest year a problem may be attributed to
pub const MIN_YEAR: i32 = 1970;

/// Lowest numeric school grade
pub const MIN_GRADE: u8 = 5;

/// Highest numeric school grade
pub const MAX_GRADE: u8 = 12;

/// Points a problem is worth in total, split across its tests
pub const TOTAL_POINTS: f64 = 100.0;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const ORGANIZER: &str = "organizer";
    pub const PARTICIPANT: &str = "participant";
    pub const SPECTATOR: &str = "spectator";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, ORGANIZER, PARTICIPANT, SPECTATOR];
}

// =============================================================================
// FORM FIELDS
// =============================================================================

/// Keys under which validation messages are reported to the edit form
pub mod fields {
    pub const NAME: &str = "name";
    pub const STATEMENT: &str = "statement";
    pub const NUM_TESTS: &str = "numTests";
    pub const TIME_LIMIT: &str = "timeLimit";
    pub const MEMORY_LIMIT: &str = "memoryLimit";
    pub const GRADER: &str = "grader";
    pub const PUBLIC_SOURCES: &str = "publicSources";
    pub const PUBLIC_TESTS: &str = "publicTests";
    pub const YEAR: &str = "year";
    pub const GRADE: &str = "grade";
    pub const TEST_GROUPS: &str = "testGroups";
}
