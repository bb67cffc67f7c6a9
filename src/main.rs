//! Console demo for mapfav.
//!
//! Walks through the favorites store and panel against an in-memory backend.
//! The page host talks to `mapfav-rpc` instead.

use mapfav::app::App;
use mapfav::managers::favorites_store::FavoritesStoreTrait;
use mapfav::types::favorite::{AddResult, NewBookmark};
use mapfav::types::panel::{PanelCommand, PanelEffect};
use mapfav::ui::panel::ScriptedPrompt;

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                mapfav v{} · Demo Mode                     ║", env!("CARGO_PKG_VERSION"));
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut app = App::in_memory();

    demo_add(&mut app);
    demo_limit(&mut app);
    demo_remove(&mut app);
    demo_panel(&mut app);
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn show(label: &str, result: AddResult, prompt: &ScriptedPrompt) {
    let json = serde_json::to_string(&result).unwrap_or_default();
    println!("  {:<28} {}", label, json);
    for notice in &prompt.notices {
        println!("    ! {}", notice);
    }
}

fn demo_add(app: &mut App) {
    section("Add / update");
    for label in ["add A(1,2)", "add A(1,2) again"] {
        let mut prompt = ScriptedPrompt::default();
        let result = app.add_favorite(NewBookmark::new("A", 1.0, 2.0), &mut prompt);
        show(label, AddResult::from(&result), &prompt);
    }
    let mut prompt = ScriptedPrompt::default();
    let result = app.add_favorite(NewBookmark::new("", 1.0, 2.0), &mut prompt);
    show("add without a name", AddResult::from(&result), &prompt);
    println!();
}

fn demo_limit(app: &mut App) {
    section("Capacity");
    for i in 0..9 {
        let mut prompt = ScriptedPrompt::default();
        let _ = app.add_favorite(NewBookmark::new(format!("P{}", i), i as f64, 0.0), &mut prompt);
    }
    println!("  size: {}", app.store.list().len());
    let mut prompt = ScriptedPrompt::default();
    let result = app.add_favorite(NewBookmark::new("K", 9.0, 9.0), &mut prompt);
    show("add K(9,9) to a full list", AddResult::from(&result), &prompt);
    println!();
}

fn demo_remove(app: &mut App) {
    section("Remove");
    for index in [-1, 999, 0] {
        let _ = app.store.remove(index);
        println!("  remove({:>3}) -> size {}", index, app.store.list().len());
    }
    println!();
}

fn demo_panel(app: &mut App) {
    section("Panel");
    let mut prompt = ScriptedPrompt::answering(true);
    for effect in app.dispatch(PanelCommand::Toggle, &mut prompt) {
        if let PanelEffect::Render { html } = effect {
            println!("  rendered {} bytes, state {:?}", html.len(), app.panel.state());
        }
    }
    if let Some(first) = app.store.list().first() {
        let effects = app.dispatch(PanelCommand::Navigate(first.id()), &mut prompt);
        println!("  navigate -> {:?}, state {:?}", effects, app.panel.state());
    }
    app.dispatch(PanelCommand::Toggle, &mut prompt);
    app.dispatch(PanelCommand::ClearAll, &mut prompt);
    println!("  clear all -> size {}, notices {:?}", app.store.list().len(), prompt.notices);
    println!();
}
