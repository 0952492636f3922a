use std::default::Default;

use wedit_shared::{
    PERMISSION_GRANTED_MESSAGE, PERMISSION_MISSING_MESSAGE, PERMISSION_REVOKED_MESSAGE,
    PERMISSION_TAG_PREFIX, TICKING_AREA_PROPERTY, TICKING_AREA_PROPERTY_MAX_LENGTH,
};

/// Contains Config properties which will be used by the Server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// A player is eligible to build while any of their tags starts with
    /// this prefix
    pub permission_tag_prefix: String,
    /// Name of the world property that records registered ticking areas
    pub ticking_area_property: String,
    /// Maximum serialized length of the ticking area property
    pub ticking_area_property_max_length: usize,
    /// Message id printed to a player when they become a builder
    pub granted_message: String,
    /// Message id printed to a builder who lost their permission tag
    pub revoked_message: String,
    /// Message id printed once to a connected player without a permission
    /// tag. Set to `None` to only emit [`crate::PermissionMissingEvent`].
    pub missing_message: Option<String>,
    /// Whether to restore hotbars left stashed by a previous builder session
    /// when the player is not currently managed
    pub restore_stashed_hotbars: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            permission_tag_prefix: PERMISSION_TAG_PREFIX.to_string(),
            ticking_area_property: TICKING_AREA_PROPERTY.to_string(),
            ticking_area_property_max_length: TICKING_AREA_PROPERTY_MAX_LENGTH,
            granted_message: PERMISSION_GRANTED_MESSAGE.to_string(),
            revoked_message: PERMISSION_REVOKED_MESSAGE.to_string(),
            missing_message: Some(PERMISSION_MISSING_MESSAGE.to_string()),
            restore_stashed_hotbars: true,
        }
    }
}
