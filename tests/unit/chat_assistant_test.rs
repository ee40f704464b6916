//! Unit tests for the canned-response career chat.

use careerbuddy::clock::ManualClock;
use careerbuddy::services::chat_assistant::{match_topic, ChatAssistant, ChatAssistantTrait};
use careerbuddy::types::chat::ChatRole;
use careerbuddy::types::errors::ChatError;
use rstest::rstest;

#[rstest]
#[case("How do I improve my resume?", Some("resume"))]
#[case("Can you review my COVER LETTER", Some("cover_letter"))]
#[case("Will ATS reject my PDF?", Some("ats"))]
#[case("Tips for a phone interview", Some("interview"))]
#[case("How do I negotiate an offer?", Some("salary"))]
#[case("How can I ask for a referral", Some("networking"))]
#[case("Improve my LinkedIn headline", Some("linkedin"))]
#[case("Is this recruiter a scam?", Some("scams"))]
#[case("Where should I apply?", Some("job_search"))]
#[case("hello there", Some("greeting"))]
#[case("What's the weather like?", None)]
fn test_topic_matching(#[case] message: &str, #[case] expected: Option<&str>) {
    assert_eq!(match_topic(message).map(|t| t.name), expected, "message: {message}");
}

#[test]
fn test_ask_appends_user_and_assistant_messages() {
    let mut chat = ChatAssistant::with_clock(ManualClock::new(5_000));
    let reply = chat.ask("  help with my resume  ").unwrap();

    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.topic.as_deref(), Some("resume"));
    assert_eq!(reply.timestamp, 5_000);

    let history = chat.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, ChatRole::User);
    assert_eq!(history[0].content, "help with my resume");
    assert_eq!(history[1], reply);
    assert_ne!(history[0].id, history[1].id);
}

#[test]
fn test_unmatched_message_gets_fallback() {
    let mut chat = ChatAssistant::new();
    let reply = chat.ask("tell me a joke").unwrap();
    assert_eq!(reply.topic, None);
    assert!(reply.content.contains("resumes"));
}

#[test]
fn test_empty_message_is_rejected() {
    let mut chat = ChatAssistant::new();
    assert!(matches!(chat.ask("   "), Err(ChatError::EmptyMessage)));
    assert!(chat.history().is_empty());
}

#[test]
fn test_clear_history() {
    let mut chat = ChatAssistant::new();
    chat.ask("hi").unwrap();
    chat.clear_history();
    assert!(chat.history().is_empty());
}

#[test]
fn test_suggested_prompts_all_have_answers() {
    let chat = ChatAssistant::new();
    let prompts = chat.suggested_prompts();
    assert!(!prompts.is_empty());
    for prompt in prompts {
        assert!(match_topic(&prompt).is_some(), "no topic for {prompt}");
    }
}

#[test]
fn test_greeting_and_fallback_use_the_assistant_name() {
    let mut chat = ChatAssistant::with_clock(ManualClock::new(0));
    assert_eq!(chat.assistant_name(), "Career Buddy");

    chat.set_assistant_name("Coach");
    let greeting = chat.ask("hello").unwrap();
    assert!(greeting.content.starts_with("Hi, I'm Coach!"));

    let fallback = chat.ask("what is the weather").unwrap();
    assert!(fallback.content.starts_with("Coach here."));
}

#[test]
fn test_blank_assistant_name_falls_back_to_default() {
    let mut chat = ChatAssistant::with_clock(ManualClock::new(0));
    chat.set_assistant_name("   ");
    assert_eq!(chat.assistant_name(), "Career Buddy");
}
