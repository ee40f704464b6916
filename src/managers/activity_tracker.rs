//! Recent-activity tracker for Career Buddy.
//!
//! Keeps the last few known pages the user visited, newest first, and mirrors
//! the list into a session-scoped [`SessionStore`] after every change. Storage
//! is best-effort: a missing or corrupt entry reads as an empty list and write
//! failures are logged, never returned.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::services::known_pages;
use crate::services::relative_time::format_relative_time;
use crate::storage::SessionStore;
use crate::types::activity::TrackedActivity;
use crate::types::errors::ActivityError;

/// Maximum number of entries kept at any time.
pub const MAX_ACTIVITIES: usize = 4;

/// Repeat visits to the same path within this window are ignored.
pub const VISIT_COOLDOWN_MS: i64 = 60_000;

/// Session store key holding the JSON-encoded list.
pub const STORAGE_KEY: &str = "careerbuddy_recent_activity";

/// Trait defining recent-activity operations.
pub trait ActivityTrackerTrait {
    fn track_page_visit(&mut self, path: &str);
    fn get_activities(&self) -> Vec<TrackedActivity>;
    fn load_activities(&mut self);
    fn clear_activities(&mut self);
    fn activities(&self) -> &[TrackedActivity];
    fn is_tracking_enabled(&self) -> bool;
    fn set_tracking_enabled(&mut self, enabled: bool);
}

/// Parses a stored activity list.
pub fn parse_activities(raw: &str) -> Result<Vec<TrackedActivity>, ActivityError> {
    serde_json::from_str(raw).map_err(|e| ActivityError::ParseError(e.to_string()))
}

/// Encodes an activity list for storage.
pub fn serialize_activities(activities: &[TrackedActivity]) -> Result<String, ActivityError> {
    serde_json::to_string(activities).map_err(|e| ActivityError::SerializationError(e.to_string()))
}

/// The single recent-activity list for one session.
pub struct ActivityTracker {
    store: Box<dyn SessionStore>,
    clock: Box<dyn Clock>,
    activities: Vec<TrackedActivity>,
    tracking_enabled: bool,
}

impl ActivityTracker {
    /// Creates an empty tracker persisting into `store`, reading the system clock.
    pub fn new<S: SessionStore + 'static>(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }

    /// Creates an empty tracker with an explicit clock.
    pub fn with_clock<S, C>(store: S, clock: C) -> Self
    where
        S: SessionStore + 'static,
        C: Clock + 'static,
    {
        Self {
            store: Box::new(store),
            clock: Box::new(clock),
            activities: Vec::new(),
            tracking_enabled: true,
        }
    }

    fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Writes the current list to the store. Failures are logged and dropped.
    fn persist(&self) {
        if !self.store.is_available() {
            return;
        }
        let result = serialize_activities(&self.activities)
            .and_then(|json| self.store.set(STORAGE_KEY, &json).map_err(ActivityError::from));
        if let Err(e) = result {
            warn!(error = %e, "failed to persist recent activity");
        }
    }

    /// Reads and parses the stored list. `Ok(None)` means nothing was stored.
    fn read_stored(&self) -> Result<Option<Vec<TrackedActivity>>, ActivityError> {
        match self.store.get(STORAGE_KEY)? {
            Some(raw) => parse_activities(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Drops unknown paths, duplicate paths and pre-epoch timestamps, keeps
    /// newest-first order, and caps the length.
    fn sanitize(mut entries: Vec<TrackedActivity>) -> Vec<TrackedActivity> {
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let mut kept: Vec<TrackedActivity> = Vec::with_capacity(MAX_ACTIVITIES);
        for entry in entries {
            if kept.len() == MAX_ACTIVITIES {
                break;
            }
            if entry.timestamp < 0 || known_pages::lookup(&entry.path).is_none() {
                continue;
            }
            if kept.iter().any(|k| k.path == entry.path) {
                continue;
            }
            kept.push(entry);
        }
        kept
    }

    fn refresh_times(&mut self) {
        let now = self.now();
        for entry in &mut self.activities {
            entry.time = format_relative_time(entry.timestamp, now);
        }
    }
}

impl ActivityTrackerTrait for ActivityTracker {
    /// Records a visit to `path` if it is a known page and was not already
    /// recorded within the cooldown window.
    fn track_page_visit(&mut self, path: &str) {
        if !self.tracking_enabled {
            return;
        }

        let path = known_pages::normalize_path(path);
        let page = match known_pages::lookup(&path) {
            Some(page) => page,
            None => {
                debug!(path = %path, "ignoring visit to unknown page");
                return;
            }
        };

        let now = self.now();
        let in_cooldown = self
            .activities
            .iter()
            .any(|a| a.path == path && now.saturating_sub(a.timestamp) < VISIT_COOLDOWN_MS);
        if in_cooldown {
            return;
        }

        let entry = TrackedActivity {
            id: Uuid::new_v4().to_string(),
            text: page.label.to_string(),
            time: format_relative_time(now, now),
            icon: page.icon.to_string(),
            timestamp: now,
            path,
        };

        self.activities.retain(|a| a.path != entry.path);
        debug!(path = %entry.path, "recorded page visit");
        self.activities.insert(0, entry);
        self.activities.truncate(MAX_ACTIVITIES);

        self.persist();
    }

    /// Returns a snapshot with `time` recomputed against the current clock.
    fn get_activities(&self) -> Vec<TrackedActivity> {
        let now = self.now();
        self.activities
            .iter()
            .map(|a| TrackedActivity {
                time: format_relative_time(a.timestamp, now),
                ..a.clone()
            })
            .collect()
    }

    /// Replaces the in-memory list with whatever the store holds. Anything
    /// missing or unreadable leaves the list empty.
    fn load_activities(&mut self) {
        self.activities = match self.read_stored() {
            Ok(Some(entries)) => Self::sanitize(entries),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "discarding stored recent activity");
                Vec::new()
            }
        };
        self.refresh_times();
    }

    /// Empties the list and removes the stored copy.
    fn clear_activities(&mut self) {
        self.activities.clear();
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            warn!(error = %e, "failed to remove stored recent activity");
        }
    }

    /// The shared list as last written. `time` may be stale; use
    /// [`get_activities`](Self::get_activities) for display.
    fn activities(&self) -> &[TrackedActivity] {
        &self.activities
    }

    fn is_tracking_enabled(&self) -> bool {
        self.tracking_enabled
    }

    fn set_tracking_enabled(&mut self, enabled: bool) {
        self.tracking_enabled = enabled;
    }
}
