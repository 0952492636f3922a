// Localized message ids printed to players

/// Printed to a player when they become an active builder
pub const PERMISSION_GRANTED_MESSAGE: &str = "worldedit.permission.granted";

/// Printed to a builder whose permission tag has disappeared
pub const PERMISSION_REVOKED_MESSAGE: &str = "worldedit.permission.revoked";

/// Printed, when enabled, to a connected player that lacks a permission tag
pub const PERMISSION_MISSING_MESSAGE: &str = "worldedit.permission.missing";

// Permissions

/// Any player tag starting with this prefix grants builder capability
pub const PERMISSION_TAG_PREFIX: &str = "worldedit";

// Persisted world state

/// World-scoped dynamic property holding the JSON list of registered ticking areas
pub const TICKING_AREA_PROPERTY: &str = "wedit_ticking_areas";

/// Maximum raw length of the ticking area property, as registered with the host
pub const TICKING_AREA_PROPERTY_MAX_LENGTH: usize = 500;
