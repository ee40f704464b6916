//! App Core for Career Buddy.
//!
//! Owns the one instance of every manager and service. Hosts hold a single
//! `App` and pass it by reference; nothing here is global.

use std::sync::Arc;

use tracing::{info, warn};

use crate::database::connection::Database;
use crate::managers::activity_tracker::{ActivityTracker, ActivityTrackerTrait};
use crate::services::auth_service::{AuthService, AuthServiceTrait};
use crate::services::chat_assistant::ChatAssistant;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::SqliteStore;
use crate::types::settings::LoggingSettings;

/// Store namespace for state that outlives a session (the signed-in user).
pub const LOCAL_NAMESPACE: &str = "local";

/// Store namespace for one session's state.
pub fn session_namespace(session_id: &str) -> String {
    format!("session:{}", session_id)
}

/// Log level from the settings file, read ahead of [`App::new`] so a host can
/// install its subscriber before anything is logged. Unreadable settings give
/// the default level.
pub fn configured_log_level(settings_path: Option<String>) -> String {
    let mut engine = SettingsEngine::new(settings_path);
    match engine.load() {
        Ok(settings) => settings.logging.level,
        Err(_) => LoggingSettings::default().level,
    }
}

/// Central application struct holding all managers and services.
pub struct App {
    pub db: Arc<Database>,
    pub activity_tracker: ActivityTracker,
    pub auth_service: AuthService,
    pub chat_assistant: ChatAssistant,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Opens the database at `db_path` and wires every component.
    ///
    /// Settings are read from `settings_path` (or the platform default) so the
    /// configured session id picks the activity namespace. A malformed settings
    /// file falls back to defaults.
    pub fn new(db_path: &str, settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            warn!(error = %e, "using default settings");
        }
        let session_id = settings_engine.get_settings().general.session_id.clone();

        let activity_tracker =
            ActivityTracker::new(SqliteStore::new(db.clone(), &session_namespace(&session_id)));
        let auth_service = AuthService::new(SqliteStore::new(db.clone(), LOCAL_NAMESPACE));
        let chat_assistant = ChatAssistant::new();

        let mut app = Self {
            db,
            activity_tracker,
            auth_service,
            chat_assistant,
            settings_engine,
        };
        app.apply_settings();
        Ok(app)
    }

    /// Pushes the current settings into the components that depend on them.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings();
        self.activity_tracker
            .set_tracking_enabled(settings.activity.tracking_enabled);
        self.chat_assistant
            .set_assistant_name(&settings.chat.assistant_name);
    }

    /// Startup sequence: restore recent activity and the signed-in user.
    pub fn startup(&mut self) {
        self.activity_tracker.load_activities();
        let user = self.auth_service.restore();
        info!(
            activities = self.activity_tracker.activities().len(),
            signed_in = user.is_some(),
            "session restored"
        );
    }
}
