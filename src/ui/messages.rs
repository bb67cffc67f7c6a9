// User-facing strings shown by the favorites panel.

pub const PANEL_TITLE: &str = "Favorites";
pub const CLEAR_ALL_LABEL: &str = "Clear all";
pub const NAVIGATE_LABEL: &str = "Go";
pub const SHARE_LABEL: &str = "Share";
pub const DELETE_LABEL: &str = "Delete";
pub const EMPTY_PLACEHOLDER: &str = "No saved favorites.";

pub const CONFIRM_DELETE: &str = "Delete this favorite?";
pub const CONFIRM_CLEAR_ALL: &str = "Delete all favorites?";

pub const ADDED: &str = "Added to favorites.";
pub const CLEARED: &str = "All favorites were deleted.";
pub const SHARE_UNAVAILABLE: &str = "Sharing is not available yet.";
pub const STORAGE_FAILED: &str = "Favorites could not be saved.";

/// Notice shown when the list is full.
pub fn capacity_reached(max: usize) -> String {
    format!("You can save at most {} favorites.", max)
}

pub fn share_failed(reason: &str) -> String {
    format!("Sharing failed: {}", reason)
}
