use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub activity: ActivitySettings,
    pub chat: ChatSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Namespace used by the persistent session store. Two hosts sharing the
    /// same id see the same recent activity.
    pub session_id: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            session_id: "default".to_string(),
        }
    }
}

/// Recent-activity tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivitySettings {
    pub tracking_enabled: bool,
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            tracking_enabled: true,
        }
    }
}

/// Career chat settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatSettings {
    /// Name the assistant introduces itself with.
    pub assistant_name: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            assistant_name: "Career Buddy".to_string(),
        }
    }
}

/// Log verbosity used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
