//! Unit tests for the favorites panel state machine and command dispatch.

use mapfav::managers::favorites_store::{FavoritesStore, FavoritesStoreTrait};
use mapfav::services::share::{NoShare, ShareProvider};
use mapfav::storage::MemoryStorage;
use mapfav::types::errors::ShareError;
use mapfav::types::favorite::{EntryId, NewBookmark};
use mapfav::types::panel::{PanelCommand, PanelEffect, PanelState};
use mapfav::types::settings::FavoritesSettings;
use mapfav::ui::messages;
use mapfav::ui::panel::{FavoritesPanel, ScriptedPrompt};

/// Share provider that remembers its calls.
#[derive(Default)]
struct RecordingShare {
    calls: Vec<(f64, f64, String, String)>,
}

impl ShareProvider for RecordingShare {
    fn share(&mut self, lat: f64, lon: f64, url: &str, name: &str) -> Result<(), ShareError> {
        self.calls.push((lat, lon, url.to_string(), name.to_string()));
        Ok(())
    }
}

fn setup() -> (FavoritesPanel, FavoritesStore<MemoryStorage>) {
    let mut store = FavoritesStore::new(MemoryStorage::new());
    store.add(NewBookmark::new("Seoul", 37.5668, 126.978)).unwrap();
    store
        .add(NewBookmark::new("Busan", 35.1796, 129.0756).with_url("https://example.com/busan"))
        .unwrap();
    (FavoritesPanel::new(&FavoritesSettings::default()), store)
}

fn open(panel: &mut FavoritesPanel, store: &mut FavoritesStore<MemoryStorage>) {
    let mut prompt = ScriptedPrompt::answering(false);
    panel.dispatch(PanelCommand::Toggle, store, &mut NoShare, &mut prompt);
    assert_eq!(panel.state(), PanelState::Open);
}

fn id(name: &str, lat: f64, lon: f64) -> EntryId {
    EntryId::of(name, lat, lon)
}

// ---------------------------------------------------------------------------
// Open / close
// ---------------------------------------------------------------------------

#[test]
fn test_toggle_opens_with_fresh_render_then_closes() {
    let (mut panel, mut store) = setup();
    let mut prompt = ScriptedPrompt::answering(false);

    let effects = panel.dispatch(PanelCommand::Toggle, &mut store, &mut NoShare, &mut prompt);
    assert_eq!(panel.state(), PanelState::Open);
    match &effects[..] {
        [PanelEffect::Render { html }] => {
            assert!(html.contains("Seoul"));
            assert!(html.contains("Busan"));
            assert!(html.find("Busan").unwrap() < html.find("Seoul").unwrap());
        }
        other => panic!("unexpected effects: {:?}", other),
    }

    let effects = panel.dispatch(PanelCommand::Toggle, &mut store, &mut NoShare, &mut prompt);
    assert!(effects.is_empty());
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn test_reopen_reflects_external_changes() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut prompt = ScriptedPrompt::answering(false);
    panel.dispatch(PanelCommand::Toggle, &mut store, &mut NoShare, &mut prompt);

    store.add(NewBookmark::new("Jeju", 33.4996, 126.5312)).unwrap();
    open(&mut panel, &mut store);
    assert!(panel.html().contains("Jeju"));
}

#[test]
fn test_outside_click_closes() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut prompt = ScriptedPrompt::answering(false);
    panel.dispatch(PanelCommand::OutsideClick, &mut store, &mut NoShare, &mut prompt);
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn test_row_commands_ignored_when_closed() {
    let (mut panel, mut store) = setup();
    let mut prompt = ScriptedPrompt::answering(true);
    let effects = panel.dispatch(
        PanelCommand::Delete(id("Seoul", 37.5668, 126.978)),
        &mut store,
        &mut NoShare,
        &mut prompt,
    );
    assert!(effects.is_empty());
    assert!(prompt.questions.is_empty());
    assert_eq!(store.list().len(), 2);
}

// ---------------------------------------------------------------------------
// Navigate / share
// ---------------------------------------------------------------------------

#[test]
fn test_navigate_fills_search_input_and_closes() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut prompt = ScriptedPrompt::answering(false);
    let effects = panel.dispatch(
        PanelCommand::Navigate(id("Seoul", 37.5668, 126.978)),
        &mut store,
        &mut NoShare,
        &mut prompt,
    );
    assert_eq!(
        effects,
        vec![PanelEffect::SearchInput {
            input_id: "q".to_string(),
            value: "Seoul".to_string()
        }]
    );
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn test_unknown_id_is_noop() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut prompt = ScriptedPrompt::answering(true);
    let effects = panel.dispatch(
        PanelCommand::Navigate(EntryId::from("missing|0|0")),
        &mut store,
        &mut NoShare,
        &mut prompt,
    );
    assert!(effects.is_empty());
    assert_eq!(panel.state(), PanelState::Open);
}

#[test]
fn test_share_uses_stored_url() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut share = RecordingShare::default();
    let mut prompt = ScriptedPrompt::answering(false);
    panel.dispatch(
        PanelCommand::Share(id("Busan", 35.1796, 129.0756)),
        &mut store,
        &mut share,
        &mut prompt,
    );
    assert_eq!(
        share.calls,
        vec![(35.1796, 129.0756, "https://example.com/busan".to_string(), "Busan".to_string())]
    );
    assert!(prompt.notices.is_empty());
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn test_share_derives_url_from_coordinates() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut share = RecordingShare::default();
    let mut prompt = ScriptedPrompt::answering(false);
    panel.dispatch(
        PanelCommand::Share(id("Seoul", 37.5668, 126.978)),
        &mut store,
        &mut share,
        &mut prompt,
    );
    assert_eq!(
        share.calls[0].2,
        "https://www.yr.no/en/details/table/2-37.567,126.978"
    );
}

#[test]
fn test_share_unavailable_is_reported() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut prompt = ScriptedPrompt::answering(false);
    panel.dispatch(
        PanelCommand::Share(id("Seoul", 37.5668, 126.978)),
        &mut store,
        &mut NoShare,
        &mut prompt,
    );
    assert_eq!(prompt.notices, vec![messages::SHARE_UNAVAILABLE.to_string()]);
    assert_eq!(panel.state(), PanelState::Closed);
}

// ---------------------------------------------------------------------------
// Delete / clear all
// ---------------------------------------------------------------------------

#[test]
fn test_delete_declined_keeps_entry() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut prompt = ScriptedPrompt::answering(false);
    let effects = panel.dispatch(
        PanelCommand::Delete(id("Seoul", 37.5668, 126.978)),
        &mut store,
        &mut NoShare,
        &mut prompt,
    );
    assert!(effects.is_empty());
    assert_eq!(prompt.questions, vec![messages::CONFIRM_DELETE.to_string()]);
    assert_eq!(store.list().len(), 2);
    assert_eq!(panel.state(), PanelState::Open);
}

#[test]
fn test_delete_confirmed_removes_targeted_entry() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut prompt = ScriptedPrompt::answering(true);
    let effects = panel.dispatch(
        PanelCommand::Delete(id("Seoul", 37.5668, 126.978)),
        &mut store,
        &mut NoShare,
        &mut prompt,
    );
    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Busan");
    match &effects[..] {
        [PanelEffect::Render { html }] => assert!(!html.contains("Seoul")),
        other => panic!("unexpected effects: {:?}", other),
    }
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn test_delete_targets_entry_even_after_reorder() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    // Reorders the list after the panel rendered: Seoul moves to index 0.
    store.add(NewBookmark::new("Seoul", 37.5668, 126.978)).unwrap();

    let mut prompt = ScriptedPrompt::answering(true);
    panel.dispatch(
        PanelCommand::Delete(id("Busan", 35.1796, 129.0756)),
        &mut store,
        &mut NoShare,
        &mut prompt,
    );
    let names: Vec<_> = store.list().into_iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["Seoul"]);
}

#[test]
fn test_clear_all_confirmed_shows_placeholder() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut prompt = ScriptedPrompt::answering(true);
    let effects = panel.dispatch(PanelCommand::ClearAll, &mut store, &mut NoShare, &mut prompt);

    assert!(store.list().is_empty());
    match &effects[..] {
        [PanelEffect::Render { html }] => assert!(html.contains(messages::EMPTY_PLACEHOLDER)),
        other => panic!("unexpected effects: {:?}", other),
    }
    assert_eq!(prompt.notices, vec![messages::CLEARED.to_string()]);
}

#[test]
fn test_clear_all_declined_keeps_list() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let mut prompt = ScriptedPrompt::answering(false);
    let effects = panel.dispatch(PanelCommand::ClearAll, &mut store, &mut NoShare, &mut prompt);
    assert!(effects.is_empty());
    assert_eq!(store.list().len(), 2);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_stored_names_are_escaped() {
    let mut store = FavoritesStore::new(MemoryStorage::new());
    store
        .add(NewBookmark::new("<img src=x onerror=\"alert('x')\">", 1.0, 2.0))
        .unwrap();
    let mut panel = FavoritesPanel::new(&FavoritesSettings::default());
    open(&mut panel, &mut store);

    let html = panel.html();
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt;"));
}

#[test]
fn test_rows_carry_ids_and_coordinates() {
    let (mut panel, mut store) = setup();
    open(&mut panel, &mut store);
    let html = panel.html();
    assert!(html.contains("37.567, 126.978"));
    assert!(html.contains("data-act=\"navigate\" data-id=\"Seoul|37.5668|126.978\""));
    assert!(html.contains("data-act=\"clear_all\""));
}
