use serde::{Deserialize, Serialize};

/// Role of a participant in the career chat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single message in the chat history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: i64,
    /// Topic that produced an assistant reply; `None` for user messages and fallbacks.
    pub topic: Option<String>,
}

/// A keyword-matched topic with its canned reply.
#[derive(Debug, Clone, Copy)]
pub struct ChatTopic {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}
