use serde::{Deserialize, Serialize};

use super::favorite::EntryId;

/// Visibility of the favorites dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Actions the panel reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "act", content = "id", rename_all = "snake_case")]
pub enum PanelCommand {
    /// Header trigger was activated.
    Toggle,
    /// A click landed outside the panel.
    OutsideClick,
    Navigate(EntryId),
    Share(EntryId),
    Delete(EntryId),
    ClearAll,
}

/// Side effects the host page must carry out after a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelEffect {
    /// Write `value` into the search input `input_id` and fire an input event.
    SearchInput { input_id: String, value: String },
    /// Replace the panel body with `html`.
    Render { html: String },
}
