//! Career chat with canned answers.
//!
//! Replies come from an ordered topic table: the first topic with a keyword
//! phrase present in the message wins, otherwise a fallback reply is used.
//! Keywords match whole words, case-insensitively.

use tracing::debug;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::types::chat::{ChatMessage, ChatRole, ChatTopic};
use crate::types::errors::ChatError;

const TOPICS: &[ChatTopic] = &[
    ChatTopic {
        name: "cover_letter",
        keywords: &["cover letter", "cover letters", "motivation letter"],
        reply: "A strong cover letter is three short paragraphs: why this company, the one or two achievements that prove you fit the role, and a clear call to action. Tailor the first sentence to the job posting every time.",
    },
    ChatTopic {
        name: "ats",
        keywords: &["ats", "applicant tracking", "keywords"],
        reply: "Applicant tracking systems read plain structure best. Use standard section headings, avoid tables and text boxes, and mirror the exact skill phrases from the job description where they are true for you.",
    },
    ChatTopic {
        name: "resume",
        keywords: &["resume", "resumes", "cv"],
        reply: "Lead each resume bullet with an action verb and end it with a measurable result. Keep it to one page unless you have ten or more years of relevant experience, and put your strongest section first.",
    },
    ChatTopic {
        name: "interview",
        keywords: &["interview", "interviews", "interviewing", "star method"],
        reply: "Prepare five stories using the STAR method (Situation, Task, Action, Result) that you can adapt to most behavioral questions. Research the company, and have two thoughtful questions ready for the end.",
    },
    ChatTopic {
        name: "salary",
        keywords: &["salary", "negotiate", "negotiation", "offer", "compensation", "pay"],
        reply: "Research the market range for the role before the conversation, let the employer name a number first when you can, and negotiate the whole package: base, bonus, equity, and time off.",
    },
    ChatTopic {
        name: "networking",
        keywords: &["network", "networking", "referral", "informational", "coffee chat"],
        reply: "Reach out with a short, specific message: who you are, why them, and one concrete ask such as a 15-minute call. Follow up once after a week, and always thank people who help you.",
    },
    ChatTopic {
        name: "linkedin",
        keywords: &["linkedin", "profile", "headline"],
        reply: "Your LinkedIn headline should say what you do and for whom, not just your job title. Add a professional photo, a summary written in the first person, and featured work that shows results.",
    },
    ChatTopic {
        name: "scams",
        keywords: &["scam", "scams", "fake", "fraud", "suspicious"],
        reply: "Be wary of offers that skip the interview, ask you to pay for training or equipment, or request bank details up front. Verify the recruiter on the company's official site before sharing anything personal.",
    },
    ChatTopic {
        name: "job_search",
        keywords: &["job", "jobs", "apply", "application", "applications", "hiring"],
        reply: "Focus on quality over volume: pick roles that match at least 70% of the requirements, tailor each application, and track everything in a simple spreadsheet so you can follow up on time.",
    },
    ChatTopic {
        name: "greeting",
        keywords: &["hi", "hello", "hey", "good morning", "good afternoon"],
        reply: "I can help with resumes, cover letters, interviews, networking, salary negotiation, and your job search. What are you working on today?",
    },
];

/// Default assistant name, matching the settings default.
pub const DEFAULT_ASSISTANT_NAME: &str = "Career Buddy";

const FALLBACK_REPLY: &str = "I'm not sure about that one yet. Try asking me about resumes, interviews, networking, salary negotiation, or job searching.";

const SUGGESTED_PROMPTS: &[&str] = &[
    "How do I make my resume ATS friendly?",
    "How should I prepare for a behavioral interview?",
    "How do I negotiate my salary?",
    "How do I ask for a referral?",
];

/// Trait defining chat operations.
pub trait ChatAssistantTrait {
    fn ask(&mut self, message: &str) -> Result<ChatMessage, ChatError>;
    fn history(&self) -> &[ChatMessage];
    fn clear_history(&mut self);
    fn suggested_prompts(&self) -> Vec<String>;
}

/// Picks the topic answering `message`, if any.
pub fn match_topic(message: &str) -> Option<&'static ChatTopic> {
    let words: Vec<String> = message
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();
    let haystack = format!(" {} ", words.join(" "));

    TOPICS.iter().find(|topic| {
        topic
            .keywords
            .iter()
            .any(|kw| haystack.contains(&format!(" {} ", kw)))
    })
}

pub struct ChatAssistant {
    clock: Box<dyn Clock>,
    assistant_name: String,
    history: Vec<ChatMessage>,
}

impl Default for ChatAssistant {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatAssistant {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock<C: Clock + 'static>(clock: C) -> Self {
        Self {
            clock: Box::new(clock),
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            history: Vec::new(),
        }
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    /// Renames the assistant. A blank name falls back to the default.
    pub fn set_assistant_name(&mut self, name: &str) {
        let name = name.trim();
        self.assistant_name = if name.is_empty() {
            DEFAULT_ASSISTANT_NAME.to_string()
        } else {
            name.to_string()
        };
    }

    fn message(&self, role: ChatRole, content: &str, topic: Option<&str>) -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.to_string(),
            timestamp: self.clock.now_millis(),
            topic: topic.map(str::to_string),
        }
    }
}

impl ChatAssistantTrait for ChatAssistant {
    /// Records the user's message and returns the canned reply.
    fn ask(&mut self, message: &str) -> Result<ChatMessage, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let user = self.message(ChatRole::User, message, None);
        self.history.push(user);

        let topic = match_topic(message);
        debug!(topic = topic.map(|t| t.name).unwrap_or("fallback"), "chat reply");
        let reply = match topic {
            Some(t) if t.name == "greeting" => {
                let content = format!("Hi, I'm {}! {}", self.assistant_name, t.reply);
                self.message(ChatRole::Assistant, &content, Some(t.name))
            }
            Some(t) => self.message(ChatRole::Assistant, t.reply, Some(t.name)),
            None => {
                let content = format!("{} here. {}", self.assistant_name, FALLBACK_REPLY);
                self.message(ChatRole::Assistant, &content, None)
            }
        };
        self.history.push(reply.clone());
        Ok(reply)
    }

    fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    fn clear_history(&mut self) {
        self.history.clear();
    }

    fn suggested_prompts(&self) -> Vec<String> {
        SUGGESTED_PROMPTS.iter().map(|s| s.to_string()).collect()
    }
}
