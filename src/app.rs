//! App core.
//!
//! Owns the favorites store, the panel, and the sharing capability. It is
//! built once at startup and handed by reference to whatever needs it.

use tracing::info;

use crate::managers::favorites_store::FavoritesStore;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::share::{NoShare, ShareProvider};
use crate::storage::{KeyValueStore, MemoryStorage, SqliteStorage};
use crate::types::errors::{FavoriteError, SettingsError};
use crate::types::favorite::{AddOutcome, NewBookmark};
use crate::types::panel::{PanelCommand, PanelEffect};
use crate::types::settings::FavoritesSettings;
use crate::ui::panel::{notify_add, FavoritesPanel, Prompt};

/// Central application struct.
pub struct App {
    pub settings: FavoritesSettings,
    pub store: FavoritesStore<Box<dyn KeyValueStore>>,
    pub panel: FavoritesPanel,
    pub share: Box<dyn ShareProvider>,
    /// Settings file backing `settings`; `None` for in-memory apps.
    engine: Option<SettingsEngine>,
}

impl App {
    /// Opens the SQLite store at `db_path` and loads settings from `config_path`
    /// (or the platform config directory when `None`).
    pub fn new(db_path: &str, config_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut engine = SettingsEngine::new(config_path);
        let settings = engine.load()?;
        let storage = SqliteStorage::open(db_path)?;
        info!(
            db = db_path,
            schema = storage.database().schema_version(),
            config = engine.get_config_path(),
            "favorites opened"
        );
        let mut app = Self::with_parts(Box::new(storage), Box::new(NoShare), settings);
        app.engine = Some(engine);
        Ok(app)
    }

    /// Builds an app over an in-memory store with default settings.
    pub fn in_memory() -> Self {
        Self::with_parts(
            Box::new(MemoryStorage::new()),
            Box::new(NoShare),
            FavoritesSettings::default(),
        )
    }

    pub fn with_parts(
        storage: Box<dyn KeyValueStore>,
        share: Box<dyn ShareProvider>,
        settings: FavoritesSettings,
    ) -> Self {
        let store = FavoritesStore::with_settings(storage, &settings);
        let panel = FavoritesPanel::new(&settings);
        Self {
            settings,
            store,
            panel,
            share,
            engine: None,
        }
    }

    /// Updates one setting, persists it and applies it to the running store and panel.
    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let engine = self.engine.as_mut().ok_or_else(no_settings_file)?;
        engine.set_value(key, value)?;
        let settings = engine.get_settings().clone();
        self.apply_settings(settings);
        Ok(())
    }

    /// Restores default settings, persists them and applies them.
    pub fn reset_settings(&mut self) -> Result<(), SettingsError> {
        let engine = self.engine.as_mut().ok_or_else(no_settings_file)?;
        engine.reset()?;
        let settings = engine.get_settings().clone();
        self.apply_settings(settings);
        Ok(())
    }

    fn apply_settings(&mut self, settings: FavoritesSettings) {
        self.store.apply_settings(&settings);
        self.panel.apply_settings(&settings);
        info!(key = %settings.storage_key, capacity = settings.capacity, "settings applied");
        self.settings = settings;
    }

    /// Replaces the sharing capability.
    pub fn set_share_provider(&mut self, share: Box<dyn ShareProvider>) {
        self.share = share;
    }

    /// Adds `item` and shows the matching notice.
    pub fn add_favorite(
        &mut self,
        item: NewBookmark,
        prompt: &mut dyn Prompt,
    ) -> Result<AddOutcome, FavoriteError> {
        use crate::managers::favorites_store::FavoritesStoreTrait;
        let result = self.store.add(item);
        notify_add(&result, prompt);
        result
    }

    /// Adds the current selection and shows the matching notice.
    pub fn add_current(&mut self, prompt: &mut dyn Prompt) -> Result<AddOutcome, FavoriteError> {
        let result = self.store.add_current();
        notify_add(&result, prompt);
        result
    }

    /// Routes a panel command to the panel with this app's store and share provider.
    pub fn dispatch(&mut self, command: PanelCommand, prompt: &mut dyn Prompt) -> Vec<PanelEffect> {
        self.panel
            .dispatch(command, &mut self.store, self.share.as_mut(), prompt)
    }
}

fn no_settings_file() -> SettingsError {
    SettingsError::IoError("no settings file attached".to_string())
}
