//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum report title length
pub const MAX_REPORT_TITLE_LENGTH: u64 = 255;

/// Maximum report description length
pub const MAX_REPORT_DESCRIPTION_LENGTH: u64 = 255;

/// Maximum recorded IP address length
pub const MAX_REPORT_IP_ADDRESS_LENGTH: u64 = 255;
