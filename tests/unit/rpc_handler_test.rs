//! Unit tests for the RPC handler: every JSON-RPC method dispatched by `handle_method`.
//!
//! These go through the same code path as the `careerbuddy-rpc` binary, using a
//! temporary on-disk database and settings file.

use std::sync::Mutex;

use serde_json::json;
use tempfile::TempDir;

use careerbuddy::app::App;
use careerbuddy::rpc_handler::handle_method;

fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let app = open_app(&tmp);
    (Mutex::new(app), tmp)
}

fn open_app(tmp: &TempDir) -> App {
    let db_path = tmp.path().join("test.db");
    let settings_path = tmp.path().join("settings.json");
    App::new(
        db_path.to_str().unwrap(),
        Some(settings_path.to_string_lossy().to_string()),
    )
    .expect("Failed to init App")
}

// ─── Ping / unknown ───

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "ping", &json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Activity ───

#[test]
fn test_activity_track_and_list() {
    let (app, _tmp) = setup();

    let res = handle_method(&app, "activity.track", &json!({"path": "/resume"})).unwrap();
    assert_eq!(res.as_array().unwrap().len(), 1);

    handle_method(&app, "activity.track", &json!({"path": "/interview"})).unwrap();
    handle_method(&app, "activity.track", &json!({"path": "/unknown"})).unwrap();

    let list = handle_method(&app, "activity.list", &json!({})).unwrap();
    let arr = list.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["path"], "/interview");
    assert_eq!(arr[1]["path"], "/resume");
    assert!(arr[0]["time"].as_str().unwrap().ends_with("ago"));
}

#[test]
fn test_activity_track_missing_path() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "activity.track", &json!({})).unwrap_err();
    assert_eq!(err, "missing path");
}

#[test]
fn test_activity_clear() {
    let (app, _tmp) = setup();
    handle_method(&app, "activity.track", &json!({"path": "/chat"})).unwrap();
    handle_method(&app, "activity.clear", &json!({})).unwrap();

    let list = handle_method(&app, "activity.load", &json!({})).unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[test]
fn test_activity_survives_app_restart() {
    let tmp = TempDir::new().unwrap();
    {
        let app = Mutex::new(open_app(&tmp));
        handle_method(&app, "activity.track", &json!({"path": "/help"})).unwrap();
    }

    let mut app = open_app(&tmp);
    app.startup();
    let app = Mutex::new(app);
    let list = handle_method(&app, "activity.list", &json!({})).unwrap();
    assert_eq!(list[0]["path"], "/help");
}

#[test]
fn test_pages_list() {
    let (app, _tmp) = setup();
    let pages = handle_method(&app, "pages.list", &json!({})).unwrap();
    let arr = pages.as_array().unwrap();
    assert_eq!(arr.len(), 20);
    assert_eq!(arr[0]["path"], "/dashboard");
    assert!(arr[0].get("label").is_some());
    assert!(arr[0].get("icon").is_some());
}

// ─── Auth ───

#[test]
fn test_auth_login_status_logout() {
    let (app, _tmp) = setup();

    let status = handle_method(&app, "auth.status", &json!({})).unwrap();
    assert_eq!(status["authenticated"], false);

    let user = handle_method(
        &app,
        "auth.login",
        &json!({"username": "demo", "password": "careerbuddy2024"}),
    )
    .unwrap();
    assert_eq!(user["username"], "demo");

    let status = handle_method(&app, "auth.status", &json!({})).unwrap();
    assert_eq!(status["authenticated"], true);
    assert_eq!(status["user"]["username"], "demo");

    handle_method(&app, "auth.logout", &json!({})).unwrap();
    let status = handle_method(&app, "auth.status", &json!({})).unwrap();
    assert_eq!(status["authenticated"], false);
}

#[test]
fn test_auth_login_bad_password() {
    let (app, _tmp) = setup();
    let err = handle_method(
        &app,
        "auth.login",
        &json!({"username": "demo", "password": "nope"}),
    )
    .unwrap_err();
    assert!(err.contains("Invalid username or password"));
}

#[test]
fn test_auth_login_missing_params() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "auth.login", &json!({"username": "demo"})).is_err());
    assert!(handle_method(&app, "auth.login", &json!({"password": "x"})).is_err());
}

// ─── Chat ───

#[test]
fn test_chat_ask_history_clear() {
    let (app, _tmp) = setup();

    let reply = handle_method(&app, "chat.ask", &json!({"message": "interview tips?"})).unwrap();
    assert_eq!(reply["role"], "assistant");
    assert_eq!(reply["topic"], "interview");

    let history = handle_method(&app, "chat.history", &json!({})).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 2);
    assert_eq!(history[0]["role"], "user");

    handle_method(&app, "chat.clear", &json!({})).unwrap();
    let history = handle_method(&app, "chat.history", &json!({})).unwrap();
    assert!(history.as_array().unwrap().is_empty());
}

#[test]
fn test_chat_empty_message() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "chat.ask", &json!({"message": ""})).unwrap_err();
    assert_eq!(err, "Chat message is empty");
}

#[test]
fn test_chat_suggestions() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "chat.suggestions", &json!({})).unwrap();
    assert!(!res.as_array().unwrap().is_empty());
}

// ─── Settings ───

#[test]
fn test_settings_get_and_set() {
    let (app, _tmp) = setup();

    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["activity"]["tracking_enabled"], true);

    handle_method(
        &app,
        "settings.set",
        &json!({"key": "general.session_id", "value": "alt"}),
    )
    .unwrap();
    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["general"]["session_id"], "alt");
}

#[test]
fn test_assistant_name_setting_reaches_chat() {
    let (app, _tmp) = setup();
    handle_method(
        &app,
        "settings.set",
        &json!({"key": "chat.assistant_name", "value": "Coach"}),
    )
    .unwrap();

    let reply = handle_method(&app, "chat.ask", &json!({"message": "hi"})).unwrap();
    assert!(reply["content"].as_str().unwrap().starts_with("Hi, I'm Coach!"));
}

#[test]
fn test_disabling_tracking_through_settings() {
    let (app, _tmp) = setup();
    handle_method(
        &app,
        "settings.set",
        &json!({"key": "activity.tracking_enabled", "value": false}),
    )
    .unwrap();

    let list = handle_method(&app, "activity.track", &json!({"path": "/resume"})).unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[test]
fn test_settings_set_invalid_key() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "settings.set", &json!({"key": "bogus", "value": 1})).unwrap_err();
    assert!(err.contains("Invalid settings key"));
}

#[test]
fn test_log_level_is_readable_before_app_starts() {
    use careerbuddy::app::configured_log_level;

    let tmp = TempDir::new().unwrap();
    let settings_path = tmp.path().join("settings.json").to_string_lossy().to_string();
    assert_eq!(configured_log_level(Some(settings_path.clone())), "info");

    std::fs::write(&settings_path, "{ broken").unwrap();
    assert_eq!(configured_log_level(Some(settings_path.clone())), "info");

    std::fs::write(
        &settings_path,
        json!({
            "general": {"session_id": "default"},
            "activity": {"tracking_enabled": true},
            "chat": {"assistant_name": "Career Buddy"},
            "logging": {"level": "debug"}
        })
        .to_string(),
    )
    .unwrap();
    assert_eq!(configured_log_level(Some(settings_path)), "debug");
}
