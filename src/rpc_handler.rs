//! RPC method handler for the favorites JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the store or panel held by `App`.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::favorites_store::FavoritesStoreTrait;
use crate::types::favorite::{AddResult, EntryId, NewBookmark, Selection};
use crate::types::panel::PanelCommand;
use crate::ui::panel::ScriptedPrompt;

/// Reads `params.confirm`, the host's answer to any confirmation the call raises.
fn prompt_from(params: &Value) -> ScriptedPrompt {
    let answer = params.get("confirm").and_then(|v| v.as_bool()).unwrap_or(false);
    ScriptedPrompt::answering(answer)
}

fn entry_id(params: &Value) -> Result<EntryId, String> {
    params
        .get("id")
        .and_then(|v| v.as_str())
        .map(EntryId::from)
        .ok_or_else(|| "missing id".to_string())
}

/// Parses an add candidate. A missing payload becomes an unnamed candidate,
/// which the store rejects as empty; a mistyped field is a request error.
fn candidate(params: &Value) -> Result<NewBookmark, String> {
    if !params.is_object() {
        return Ok(NewBookmark::default());
    }
    serde_json::from_value(params.clone()).map_err(|e| format!("invalid candidate: {}", e))
}

fn add_response(result: AddResult, prompt: ScriptedPrompt) -> Result<Value, String> {
    let mut val = serde_json::to_value(result).map_err(|e| e.to_string())?;
    val["notices"] = json!(prompt.notices);
    Ok(val)
}

fn run_panel(app: &Mutex<App>, command: PanelCommand, params: &Value) -> Result<Value, String> {
    let mut prompt = prompt_from(params);
    let mut a = app.lock().map_err(|e| e.to_string())?;
    let effects = a.dispatch(command, &mut prompt);
    Ok(json!({
        "state": a.panel.state(),
        "effects": effects,
        "notices": prompt.notices,
    }))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Favorites ───
        "favorites.set_current" => {
            if !params.is_object() {
                return Ok(Value::Null);
            }
            let selection: Selection =
                serde_json::from_value(params.clone()).map_err(|e| format!("invalid selection: {}", e))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.store.set_current(selection);
            Ok(Value::Null)
        }
        "favorites.current" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.store.current()).map_err(|e| e.to_string())
        }
        "favorites.add" => {
            let item = candidate(params)?;
            let mut prompt = prompt_from(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let result = a.add_favorite(item, &mut prompt);
            add_response(AddResult::from(&result), prompt)
        }
        "favorites.add_current" => {
            let mut prompt = prompt_from(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let result = a.add_current(&mut prompt);
            add_response(AddResult::from(&result), prompt)
        }
        "favorites.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.store.list()).map_err(|e| e.to_string())
        }
        "favorites.remove" => {
            let index = params.get("index").ok_or("missing index")?;
            // A non-integer index can never point at an entry.
            let Some(index) = index.as_i64() else {
                return Ok(Value::Null);
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.store.remove(index).map_err(|e| e.to_string())?;
            Ok(Value::Null)
        }
        "favorites.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.store.clear_all().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(&a.settings).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            serde_json::to_value(&a.settings).map_err(|e| e.to_string())
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.reset_settings().map_err(|e| e.to_string())?;
            serde_json::to_value(&a.settings).map_err(|e| e.to_string())
        }

        // ─── Panel ───
        "panel.toggle" => run_panel(app, PanelCommand::Toggle, params),
        "panel.outside_click" => run_panel(app, PanelCommand::OutsideClick, params),
        "panel.navigate" => run_panel(app, PanelCommand::Navigate(entry_id(params)?), params),
        "panel.share" => run_panel(app, PanelCommand::Share(entry_id(params)?), params),
        "panel.delete" => run_panel(app, PanelCommand::Delete(entry_id(params)?), params),
        "panel.clear_all" => run_panel(app, PanelCommand::ClearAll, params),
        "panel.dispatch" => {
            let command: PanelCommand = params
                .get("command")
                .cloned()
                .ok_or("missing command")
                .and_then(|v| serde_json::from_value(v).map_err(|_| "invalid command"))?;
            run_panel(app, command, params)
        }
        "panel.render" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let effect = a.panel.render(&a.store);
            Ok(json!({"state": a.panel.state(), "effects": [effect]}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
