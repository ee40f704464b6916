// Career Buddy state managers
// Managers own mutable per-session state.

pub mod activity_tracker;
