//! Favorites dropdown panel.
//!
//! The panel is a two-state machine (`Closed` / `Open`). Host events arrive as
//! [`PanelCommand`]s; the panel mutates the store, asks the [`Prompt`] for
//! confirmations and notices, and returns the [`PanelEffect`]s the page must
//! apply. Row commands name entries by [`EntryId`], so a row always acts on
//! the entry it was rendered for even if the list changed since.

use tracing::{debug, warn};

use crate::managers::favorites_store::{FavoritesStore, FavoritesStoreTrait};
use crate::services::share::{share_url, ShareProvider};
use crate::storage::KeyValueStore;
use crate::types::errors::{FavoriteError, ShareError};
use crate::types::favorite::{AddOutcome, EntryId};
use crate::types::panel::{PanelCommand, PanelEffect, PanelState};
use crate::types::settings::FavoritesSettings;

use super::markup;
use super::messages;

/// Modal confirmations and notices.
pub trait Prompt {
    /// Asks a yes/no question. `false` means the user declined.
    fn confirm(&mut self, message: &str) -> bool;
    /// Shows a notice.
    fn alert(&mut self, message: &str);
}

/// Prompt with a fixed answer that records everything it was shown.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answer: bool,
    pub questions: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Default::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answer
    }

    fn alert(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Shows the notice that goes with an add result.
///
/// Updates and empty names are silent; additions, a full list and storage
/// failures are announced.
pub fn notify_add(result: &Result<AddOutcome, FavoriteError>, prompt: &mut dyn Prompt) {
    match result {
        Ok(AddOutcome::Added { .. }) => prompt.alert(messages::ADDED),
        Ok(AddOutcome::Updated { .. })
        | Err(FavoriteError::Validation)
        | Err(FavoriteError::InvalidCoordinates) => {}
        Err(FavoriteError::Capacity(max)) => prompt.alert(&messages::capacity_reached(*max)),
        Err(FavoriteError::Storage(_)) => prompt.alert(messages::STORAGE_FAILED),
    }
}

/// The favorites dropdown.
pub struct FavoritesPanel {
    state: PanelState,
    html: String,
    search_input_id: String,
    share_base_url: String,
}

impl FavoritesPanel {
    pub fn new(settings: &FavoritesSettings) -> Self {
        Self {
            state: PanelState::Closed,
            html: String::new(),
            search_input_id: settings.search_input_id.clone(),
            share_base_url: settings.share_base_url.clone(),
        }
    }

    pub fn apply_settings(&mut self, settings: &FavoritesSettings) {
        self.search_input_id = settings.search_input_id.clone();
        self.share_base_url = settings.share_base_url.clone();
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Markup from the most recent render.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Re-reads the full list and rebuilds the markup.
    pub fn render<S: KeyValueStore>(&mut self, store: &FavoritesStore<S>) -> PanelEffect {
        self.html = markup::render_panel(&store.list());
        PanelEffect::Render {
            html: self.html.clone(),
        }
    }

    /// Applies one command and returns the effects for the host page.
    pub fn dispatch<S: KeyValueStore>(
        &mut self,
        command: PanelCommand,
        store: &mut FavoritesStore<S>,
        share: &mut dyn ShareProvider,
        prompt: &mut dyn Prompt,
    ) -> Vec<PanelEffect> {
        debug!(?command, state = ?self.state, "panel command");
        match command {
            PanelCommand::Toggle => match self.state {
                PanelState::Closed => {
                    self.state = PanelState::Open;
                    vec![self.render(store)]
                }
                PanelState::Open => {
                    self.state = PanelState::Closed;
                    Vec::new()
                }
            },
            PanelCommand::OutsideClick => {
                self.state = PanelState::Closed;
                Vec::new()
            }
            _ if !self.is_open() => {
                debug!("panel closed, command ignored");
                Vec::new()
            }
            PanelCommand::Navigate(id) => self.navigate(&id, store),
            PanelCommand::Share(id) => self.share(&id, store, share, prompt),
            PanelCommand::Delete(id) => self.delete(&id, store, prompt),
            PanelCommand::ClearAll => self.clear_all(store, prompt),
        }
    }

    fn navigate<S: KeyValueStore>(
        &mut self,
        id: &EntryId,
        store: &FavoritesStore<S>,
    ) -> Vec<PanelEffect> {
        let Some(bookmark) = store.find(id) else {
            return Vec::new();
        };
        self.state = PanelState::Closed;
        vec![PanelEffect::SearchInput {
            input_id: self.search_input_id.clone(),
            value: bookmark.name,
        }]
    }

    fn share<S: KeyValueStore>(
        &mut self,
        id: &EntryId,
        store: &FavoritesStore<S>,
        share: &mut dyn ShareProvider,
        prompt: &mut dyn Prompt,
    ) -> Vec<PanelEffect> {
        let Some(bookmark) = store.find(id) else {
            return Vec::new();
        };
        let url = share_url(&bookmark, &self.share_base_url);
        match share.share(bookmark.lat, bookmark.lon, &url, &bookmark.name) {
            Ok(()) => {}
            Err(ShareError::Unavailable) => prompt.alert(messages::SHARE_UNAVAILABLE),
            Err(ShareError::Failed(reason)) => {
                warn!(%reason, "share failed");
                prompt.alert(&messages::share_failed(&reason));
            }
        }
        self.state = PanelState::Closed;
        Vec::new()
    }

    fn delete<S: KeyValueStore>(
        &mut self,
        id: &EntryId,
        store: &mut FavoritesStore<S>,
        prompt: &mut dyn Prompt,
    ) -> Vec<PanelEffect> {
        if store.index_of(id).is_none() {
            return Vec::new();
        }
        if !prompt.confirm(messages::CONFIRM_DELETE) {
            return Vec::new();
        }
        // Resolve again after the modal; the list is re-read on every mutation.
        if let Some(index) = store.index_of(id) {
            if store.remove(index as i64).is_err() {
                prompt.alert(messages::STORAGE_FAILED);
            }
        }
        let effect = self.render(store);
        self.state = PanelState::Closed;
        vec![effect]
    }

    fn clear_all<S: KeyValueStore>(
        &mut self,
        store: &mut FavoritesStore<S>,
        prompt: &mut dyn Prompt,
    ) -> Vec<PanelEffect> {
        if !prompt.confirm(messages::CONFIRM_CLEAR_ALL) {
            return Vec::new();
        }
        let cleared = store.clear_all();
        let effects = vec![self.render(store)];
        match cleared {
            Ok(()) => prompt.alert(messages::CLEARED),
            Err(_) => prompt.alert(messages::STORAGE_FAILED),
        }
        effects
    }
}
