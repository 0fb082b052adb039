//! Application-wide constants

/// Maximum number of primary entries in an attribute or goal collection.
pub const MAX_PRIMARY_SLOTS: usize = 3;
/// Maximum number of secondary entries in an attribute or goal collection.
pub const MAX_SECONDARY_SLOTS: usize = 3;
pub const MAX_COLLECTION_SIZE: usize = MAX_PRIMARY_SLOTS + MAX_SECONDARY_SLOTS;

pub const MIN_IMPORTANCE: i32 = 0;
pub const MAX_IMPORTANCE: i32 = 100;
/// Expected importance total once every attribute slot is filled.
pub const TARGET_TOTAL_WEIGHT: i32 = 100;

pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 50;
pub const DEFAULT_MAX_WIZARD_SESSIONS: usize = 100;
pub const DEFAULT_WIZARD_SESSION_TTL_SECS: u64 = 1800;
pub const ROLE_HEADER: &str = "x-wps-role";
