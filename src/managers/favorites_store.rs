//! Favorites Store.
//!
//! Implements `FavoritesStoreTrait`: a bounded, deduplicated, most-recent-first
//! list of bookmarks persisted as one JSON array under a single storage key.
//! Every mutation is a full read-modify-write of that key.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::storage::KeyValueStore;
use crate::types::errors::FavoriteError;
use crate::types::favorite::{AddOutcome, Bookmark, EntryId, NewBookmark, Selection};
use crate::types::settings::{FavoritesSettings, DEFAULT_CAPACITY, DEFAULT_STORAGE_KEY};

/// Trait defining favorites store operations.
pub trait FavoritesStoreTrait {
    /// Reads the persisted list. Absent or unparseable content yields an empty list.
    fn load(&self) -> Vec<Bookmark>;
    /// Overwrites the persisted list.
    fn save(&mut self, list: &[Bookmark]) -> Result<(), FavoriteError>;
    fn add(&mut self, item: NewBookmark) -> Result<AddOutcome, FavoriteError>;
    /// Removes the entry at `index`. Out-of-range indices are ignored.
    fn remove(&mut self, index: i64) -> Result<(), FavoriteError>;
    fn list(&self) -> Vec<Bookmark>;
    /// Erases the whole persisted list.
    fn clear_all(&mut self) -> Result<(), FavoriteError>;
    fn set_current(&mut self, selection: Selection);
    fn current(&self) -> Option<&Selection>;
}

/// Favorites store over any key-value backend.
pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
    key: String,
    capacity: usize,
    current: Option<Selection>,
    clock: fn() -> i64,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Creates a store using the default key and capacity.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: DEFAULT_STORAGE_KEY.to_string(),
            capacity: DEFAULT_CAPACITY,
            current: None,
            clock: Self::now_millis,
        }
    }

    /// Creates a store using the key and capacity from `settings`.
    pub fn with_settings(storage: S, settings: &FavoritesSettings) -> Self {
        Self {
            key: settings.storage_key.clone(),
            capacity: settings.capacity,
            ..Self::new(storage)
        }
    }

    /// Switches to the key and capacity from `settings`.
    ///
    /// A lower capacity does not drop entries already saved; it only blocks
    /// further additions.
    pub fn apply_settings(&mut self, settings: &FavoritesSettings) {
        self.key = settings.storage_key.clone();
        self.capacity = settings.capacity;
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the entry with the given identifier.
    pub fn find(&self, id: &EntryId) -> Option<Bookmark> {
        self.load().into_iter().find(|b| &b.id() == id)
    }

    /// Returns the current index of the entry with the given identifier.
    pub fn index_of(&self, id: &EntryId) -> Option<usize> {
        self.load().iter().position(|b| &b.id() == id)
    }

    /// Adds the recorded selection, if any.
    pub fn add_current(&mut self) -> Result<AddOutcome, FavoriteError> {
        match self.current.clone() {
            Some(sel) => self.add(sel.into()),
            None => Err(FavoriteError::Validation),
        }
    }

    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

impl<S: KeyValueStore> FavoritesStoreTrait for FavoritesStore<S> {
    fn load(&self) -> Vec<Bookmark> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "favorites read failed, using empty list");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                warn!(key = %self.key, error = %e, "favorites content unparseable, using empty list");
                Vec::new()
            }
        }
    }

    fn save(&mut self, list: &[Bookmark]) -> Result<(), FavoriteError> {
        let json = serde_json::to_string(list)
            .map_err(|e| FavoriteError::Storage(format!("Failed to serialize favorites: {}", e)))?;
        self.storage.set_item(&self.key, &json).map_err(|e| {
            warn!(key = %self.key, error = %e, "favorites write failed");
            FavoriteError::from(e)
        })
    }

    /// Adds `item`, or refreshes the entry sharing its identity key.
    ///
    /// Both new and refreshed entries end up at index 0.
    fn add(&mut self, item: NewBookmark) -> Result<AddOutcome, FavoriteError> {
        if item.name.is_empty() {
            return Err(FavoriteError::Validation);
        }
        // serde_json writes non-finite floats as null, which would not load back.
        if !item.lat.is_finite() || !item.lon.is_finite() {
            return Err(FavoriteError::InvalidCoordinates);
        }

        let mut list = self.load();
        let ts = (self.clock)();

        if let Some(pos) = list
            .iter()
            .position(|b| b.same_place(&item.name, item.lat, item.lon))
        {
            list.remove(pos);
            list.insert(0, item.stamp(ts));
            self.save(&list)?;
            debug!(from = pos, size = list.len(), "favorite updated");
            return Ok(AddOutcome::Updated { size: list.len() });
        }

        if list.len() >= self.capacity {
            debug!(capacity = self.capacity, "favorite rejected, list full");
            return Err(FavoriteError::Capacity(self.capacity));
        }

        list.insert(0, item.stamp(ts));
        self.save(&list)?;
        debug!(size = list.len(), "favorite added");
        Ok(AddOutcome::Added { size: list.len() })
    }

    fn remove(&mut self, index: i64) -> Result<(), FavoriteError> {
        let mut list = self.load();
        if index < 0 || index as usize >= list.len() {
            debug!(index, len = list.len(), "remove ignored, index out of range");
            return Ok(());
        }
        list.remove(index as usize);
        self.save(&list)?;
        debug!(index, size = list.len(), "favorite removed");
        Ok(())
    }

    fn list(&self) -> Vec<Bookmark> {
        self.load()
    }

    fn clear_all(&mut self) -> Result<(), FavoriteError> {
        self.storage.remove_item(&self.key)?;
        debug!(key = %self.key, "favorites cleared");
        Ok(())
    }

    fn set_current(&mut self, selection: Selection) {
        self.current = Some(selection);
    }

    fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }
}
