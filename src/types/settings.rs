use serde::{Deserialize, Serialize};

/// Default key under which the favorites array is stored.
pub const DEFAULT_STORAGE_KEY: &str = "FAVORITES_V1";

/// Default maximum number of favorites.
pub const DEFAULT_CAPACITY: usize = 10;

/// Default prefix for share links built from coordinates.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://www.yr.no/en/details/table/2-";

/// Settings for the favorites subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FavoritesSettings {
    /// Storage key holding the serialized list.
    pub storage_key: String,
    /// Maximum number of entries kept.
    pub capacity: usize,
    /// Prefix of share links; `"{lat},{lon}"` (three decimals) is appended.
    pub share_base_url: String,
    /// DOM id of the search input that navigation writes into.
    pub search_input_id: String,
}

impl Default for FavoritesSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            capacity: DEFAULT_CAPACITY,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            search_input_id: "q".to_string(),
        }
    }
}
