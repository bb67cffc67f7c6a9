use std::fmt;

// === FavoriteError ===

/// Errors returned by favorites store mutations.
#[derive(Debug)]
pub enum FavoriteError {
    /// The candidate had no name.
    Validation,
    /// A coordinate was NaN or infinite.
    InvalidCoordinates,
    /// The list already holds the maximum number of entries.
    Capacity(usize),
    /// Writing the list back to storage failed.
    Storage(String),
}

impl FavoriteError {
    /// Short machine-readable reason used in add results.
    pub fn reason(&self) -> &'static str {
        match self {
            FavoriteError::Validation => "empty",
            FavoriteError::InvalidCoordinates => "coordinates",
            FavoriteError::Capacity(_) => "limit",
            FavoriteError::Storage(_) => "storage",
        }
    }
}

impl fmt::Display for FavoriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoriteError::Validation => write!(f, "Favorite name must not be empty"),
            FavoriteError::InvalidCoordinates => {
                write!(f, "Favorite coordinates must be finite numbers")
            }
            FavoriteError::Capacity(max) => {
                write!(f, "Favorites limit reached: at most {} entries", max)
            }
            FavoriteError::Storage(msg) => write!(f, "Favorites storage error: {}", msg),
        }
    }
}

impl std::error::Error for FavoriteError {}

impl From<StorageError> for FavoriteError {
    fn from(e: StorageError) -> Self {
        FavoriteError::Storage(e.to_string())
    }
}

// === StorageError ===

/// Errors raised by key-value storage backends.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize a value before writing it.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}

// === ShareError ===

/// Errors related to the sharing integration.
#[derive(Debug)]
pub enum ShareError {
    /// No sharing integration is registered.
    Unavailable,
    /// The sharing integration rejected the request.
    Failed(String),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Unavailable => write!(f, "Sharing is not available"),
            ShareError::Failed(msg) => write!(f, "Share failed: {}", msg),
        }
    }
}

impl std::error::Error for ShareError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
