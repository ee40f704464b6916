//! Career Buddy: career-preparation companion core.
//!
//! Recent-activity tracking, the demo login, and the canned career chat, plus
//! the settings and storage they sit on. This library crate exposes all modules
//! for use by the binaries and integration tests.

pub mod app;
pub mod clock;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
