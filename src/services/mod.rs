// Career Buddy services
// Services wrap static tables and app-wide concerns: known pages, time
// formatting, login, chat, and settings.

pub mod auth_service;
pub mod chat_assistant;
pub mod known_pages;
pub mod relative_time;
pub mod settings_engine;
