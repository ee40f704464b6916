//! RPC method handler for the Career Buddy JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested directly. The
//! `handle_method` function dispatches a call to the component owned by `App`.

use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::debug;

use crate::app::App;
use crate::managers::activity_tracker::ActivityTrackerTrait;
use crate::services::auth_service::AuthServiceTrait;
use crate::services::chat_assistant::ChatAssistantTrait;
use crate::services::known_pages;
use crate::services::settings_engine::SettingsEngineTrait;

fn activity_list(app: &App) -> Value {
    json!(app.activity_tracker.get_activities())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    debug!(method, "rpc call");
    match method {
        // ─── Recent activity ───
        "activity.track" => {
            let path = params.get("path").and_then(|v| v.as_str()).ok_or("missing path")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.activity_tracker.track_page_visit(path);
            Ok(activity_list(&a))
        }
        "activity.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(activity_list(&a))
        }
        "activity.load" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.activity_tracker.load_activities();
            Ok(activity_list(&a))
        }
        "activity.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.activity_tracker.clear_activities();
            Ok(json!({"ok": true}))
        }
        "pages.list" => Ok(json!(known_pages::all())),

        // ─── Auth ───
        "auth.login" => {
            let username = params.get("username").and_then(|v| v.as_str()).ok_or("missing username")?;
            let password = params.get("password").and_then(|v| v.as_str()).ok_or("missing password")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let user = a.auth_service.login(username, password).map_err(|e| e.to_string())?;
            serde_json::to_value(user).map_err(|e| e.to_string())
        }
        "auth.logout" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.auth_service.logout();
            Ok(json!({"ok": true}))
        }
        "auth.status" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({
                "authenticated": a.auth_service.is_authenticated(),
                "user": a.auth_service.current_user(),
            }))
        }

        // ─── Chat ───
        "chat.ask" => {
            let message = params.get("message").and_then(|v| v.as_str()).ok_or("missing message")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let reply = a.chat_assistant.ask(message).map_err(|e| e.to_string())?;
            serde_json::to_value(reply).map_err(|e| e.to_string())
        }
        "chat.history" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.chat_assistant.history()))
        }
        "chat.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.chat_assistant.clear_history();
            Ok(json!({"ok": true}))
        }
        "chat.suggestions" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.chat_assistant.suggested_prompts()))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
