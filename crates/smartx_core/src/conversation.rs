//! crates/smartx_core/src/conversation.rs
//!
//! In-session chat state: an open conversation with its quick-reply
//! suggestions, and the standalone assistant chat. Neither is persisted.

use crate::assist::{AssistClient, InsightAction, PendingAssist};
use crate::catalog;
use crate::domain::ChatMessage;
use chrono::{Local, Utc};
use serde::Serialize;
use tracing::debug;

//=========================================================================================
// Conversation
//=========================================================================================

/// The append-only message list of one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversation {
    me: String,
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    sent: u64,
}

impl Conversation {
    pub fn new(me: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            me: me.into(),
            messages,
            sent: 0,
        }
    }

    /// Opens the sample thread for the signed-in user.
    pub fn seeded(me: &str) -> Self {
        Self::new(me, catalog::seed_thread(me))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends a message from the local user. Blank input is ignored.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        // Millisecond stamps repeat under fast input; the counter keeps ids unique.
        self.sent += 1;
        let message = ChatMessage {
            id: format!("{}-{}", Utc::now().timestamp_millis(), self.sent),
            sender: self.me.clone(),
            text: text.to_string(),
            timestamp: Local::now().format("%H:%M").to_string(),
            is_me: true,
        };
        self.messages.push(message);
        self.messages.last()
    }

    /// Appends a message from the other party.
    pub fn receive(&mut self, message: ChatMessage) {
        self.messages.push(ChatMessage { is_me: false, ..message });
    }

    /// The text suggestions should be computed against: the latest message, and
    /// only when somebody else wrote it.
    pub fn suggestion_target(&self) -> Option<&str> {
        self.messages
            .last()
            .filter(|m| !m.is_me)
            .map(|m| m.text.as_str())
    }

    /// `sender: text` lines, oldest first.
    pub fn history(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.sender, m.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//=========================================================================================
// OpenChat
//=========================================================================================

/// An open conversation screen. Owns its in-flight assist requests, so closing
/// the screen discards them.
pub struct OpenChat {
    conversation: Conversation,
    client: AssistClient,
    suggestions: Vec<String>,
    pending_suggestions: Option<PendingAssist<Vec<String>>>,
}

impl OpenChat {
    /// Opening a chat immediately evaluates the suggestion trigger.
    pub fn open(conversation: Conversation, client: AssistClient) -> Self {
        let mut chat = Self {
            conversation,
            client,
            suggestions: Vec::new(),
            pending_suggestions: None,
        };
        chat.refresh_suggestions();
        chat
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_suggesting(&self) -> bool {
        self.pending_suggestions.is_some()
    }

    pub fn send(&mut self, text: &str) -> bool {
        let sent = self.conversation.send(text).is_some();
        if sent {
            self.refresh_suggestions();
        }
        sent
    }

    pub fn receive(&mut self, message: ChatMessage) {
        self.conversation.receive(message);
        self.refresh_suggestions();
    }

    /// Re-evaluates the trigger after the message list changed. A previous
    /// in-flight request is dropped, so stale suggestions never land.
    fn refresh_suggestions(&mut self) {
        self.suggestions.clear();
        self.pending_suggestions = self
            .conversation
            .suggestion_target()
            .map(|text| self.client.spawn_quick_replies(text.to_string()));
        debug!(suggesting = self.pending_suggestions.is_some(), "Suggestion trigger evaluated.");
    }

    /// Waits for the in-flight suggestions, if any, and stores them.
    pub async fn settle_suggestions(&mut self) -> &[String] {
        if let Some(pending) = self.pending_suggestions.take() {
            self.suggestions = pending.wait().await.unwrap_or_default();
        }
        &self.suggestions
    }

    /// Picking a suggestion hands its text to the input box and clears the list.
    pub fn take_suggestion(&mut self, index: usize) -> Option<String> {
        if index >= self.suggestions.len() {
            return None;
        }
        let picked = self.suggestions.swap_remove(index);
        self.suggestions.clear();
        Some(picked)
    }

    pub async fn insight(&self, action: InsightAction) -> String {
        self.client
            .chat_insight(&self.conversation.history(), action)
            .await
    }
}

//=========================================================================================
// AssistantChat
//=========================================================================================

pub const ASSISTANT_GREETING: &str = "Namaste! I am your SMARTX Learning Assistant. Need help with a topic, a tutor, or your schedule?";
pub const ASSISTANT_EMPTY_REPLY: &str =
    "I'm having a small connection issue. Could you repeat that?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantTurn {
    pub role: Speaker,
    pub text: String,
}

/// The floating assistant's transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantChat {
    turns: Vec<AssistantTurn>,
}

impl Default for AssistantChat {
    fn default() -> Self {
        Self {
            turns: vec![AssistantTurn {
                role: Speaker::Ai,
                text: ASSISTANT_GREETING.to_string(),
            }],
        }
    }
}

impl AssistantChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[AssistantTurn] {
        &self.turns
    }

    /// Appends the question and the assistant's answer. Blank input is ignored.
    pub async fn ask(&mut self, client: &AssistClient, text: &str) -> Option<&AssistantTurn> {
        if text.trim().is_empty() {
            return None;
        }
        self.turns.push(AssistantTurn {
            role: Speaker::User,
            text: text.to_string(),
        });

        let answer = client.complete(text, None).await;
        let answer = if answer.trim().is_empty() {
            ASSISTANT_EMPTY_REPLY.to_string()
        } else {
            answer
        };
        self.turns.push(AssistantTurn {
            role: Speaker::Ai,
            text: answer,
        });
        self.turns.last()
    }
}
