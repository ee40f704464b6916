//! Career Buddy: career-preparation companion.
//!
//! Entry point: runs a console walkthrough of every component against an
//! in-memory store and a hand-driven clock.

use careerbuddy::clock::ManualClock;
use careerbuddy::managers::activity_tracker::{ActivityTracker, ActivityTrackerTrait, STORAGE_KEY};
use careerbuddy::services::auth_service::{AuthService, AuthServiceTrait};
use careerbuddy::services::chat_assistant::{ChatAssistant, ChatAssistantTrait};
use careerbuddy::services::known_pages;
use careerbuddy::storage::{MemoryStore, SessionStore};

fn main() {
    println!();
    println!("══════════════════════════════════════════════════");
    println!("  Career Buddy v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!("══════════════════════════════════════════════════");
    println!();

    demo_known_pages();
    demo_activity_tracker();
    demo_auth();
    demo_chat();

    println!("══════════════════════════════════════════════════");
    println!("  All components demonstrated.");
    println!("══════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("──────────────────────────────────────────────────");
    println!("  {}", name);
    println!("──────────────────────────────────────────────────");
}

fn demo_known_pages() {
    section("Known Pages");
    for page in known_pages::all().iter().take(5) {
        println!("  {:<24} {:<32} {}", page.path, page.label, page.icon);
    }
    println!("  ... {} pages total", known_pages::all().len());
    println!();
}

fn demo_activity_tracker() {
    section("Recent Activity");

    let store = MemoryStore::new();
    let clock = ManualClock::new(1_700_000_000_000);
    let mut tracker = ActivityTracker::with_clock(store.clone(), clock.clone());

    for path in ["/dashboard", "/resume", "/interview", "/networking", "/job-search"] {
        tracker.track_page_visit(path);
        clock.advance_secs(90);
    }
    tracker.track_page_visit("/not-a-page");
    clock.advance_secs(2 * 3600);

    for activity in tracker.get_activities() {
        println!("  {:<20} {:<30} {}", activity.path, activity.text, activity.time);
    }

    let mut restored = ActivityTracker::with_clock(store.clone(), clock.clone());
    restored.load_activities();
    println!("  Restored {} entries from the session store", restored.activities().len());

    restored.clear_activities();
    println!(
        "  Cleared; stored copy present: {}",
        store.get(STORAGE_KEY).ok().flatten().is_some()
    );
    println!();
}

fn demo_auth() {
    section("Demo Login");
    let mut auth = AuthService::new(MemoryStore::new());
    match auth.login("demo", "wrong") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  Wrong password: {}", e),
    }
    match auth.login("demo", "careerbuddy2024") {
        Ok(user) => println!("  Signed in as {} <{}>", user.display_name, user.email),
        Err(e) => println!("  Login failed: {}", e),
    }
    auth.logout();
    println!("  Signed out: {}", !auth.is_authenticated());
    println!();
}

fn demo_chat() {
    section("Career Chat");
    let mut chat = ChatAssistant::new();
    for question in ["How do I get past ATS filters?", "Tips for salary negotiation?", "What is the weather?"] {
        if let Ok(reply) = chat.ask(question) {
            println!("  > {}", question);
            println!("    {}", reply.content);
        }
    }
    println!("  History: {} messages", chat.history().len());
    println!();
}
