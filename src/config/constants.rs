//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Default allowed CORS origin (the admin console dev server)
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

// =============================================================================
// Seed Admin
// =============================================================================

/// Username of the admin account created at boot
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password of the admin account created at boot
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Email of the admin account created at boot
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@hostel.edu";

// =============================================================================
// User Types
// =============================================================================

/// Administrator account type
pub const USER_TYPE_ADMIN: &str = "admin";

/// Default status for newly created courses and students
pub const DEFAULT_RECORD_STATUS: &str = "active";

// =============================================================================
// Dashboard
// =============================================================================

/// Building floors reported in the dashboard, in display order
pub const HOSTEL_FLOORS: [i32; 4] = [1, 2, 3, 4];

/// Activity older than this many whole days is left out of the feed
pub const RECENT_ACTIVITY_WINDOW_DAYS: i64 = 7;

/// Maximum number of entries in the recent activity feed
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Seconds in one day, used for whole-day differences
pub const SECONDS_PER_DAY: i64 = 86_400;
