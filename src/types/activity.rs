use serde::{Deserialize, Serialize};

/// A single recorded page visit, as shown in the "recent activity" panel.
///
/// `time` is derived from `timestamp` at read time. It is stored alongside the
/// other fields but treated as stale whenever an entry is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackedActivity {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub time: String,
    pub icon: String,
    pub timestamp: i64,
    pub path: String,
}
