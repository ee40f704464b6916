// Career Buddy shared type definitions
// Each submodule defines types used across the application.

pub mod activity;
pub mod auth;
pub mod chat;
pub mod errors;
pub mod page;
pub mod settings;
