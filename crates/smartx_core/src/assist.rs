//! crates/smartx_core/src/assist.rs
//!
//! The AI Assist Client: the boundary object for every call to the external
//! text-generation endpoint.
//!
//! Each entry point issues exactly one request with its own fixed system
//! instruction and temperature. Failures never reach the caller; they are logged
//! and converted into that entry point's fallback.

use crate::ports::{GenerationRequest, ModelTier, TextGenerationService};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

//=========================================================================================
// Prompts and Fallbacks
//=========================================================================================

const ASSISTANT_INSTRUCTIONS: &str = "You are SMARTX AI, a helpful educational assistant for students, parents, and teachers in the SMARTX ecosystem. Be concise, encouraging, and accurate.";

const QUICK_REPLY_INSTRUCTIONS: &str = "You are a helpful chat assistant. Provide short, professional, and relevant response suggestions for an educational app.";

const QUICK_REPLY_TEMPLATE: &str = r#"The last message received in a student-tutor chat is: "{message}". Suggest 3 very short, helpful quick replies for the user. Return ONLY a comma-separated list of 3 suggestions, nothing else."#;

const INSIGHT_INSTRUCTIONS: &str =
    "You are a specialized Chat Assistant for SMARTX. Provide concise, helpful insights.";

const RECOMMEND_INSTRUCTIONS: &str =
    "You are an expert education counselor matching students with tutors.";

pub const COMPLETE_FALLBACK: &str =
    "I'm sorry, I'm having trouble connecting right now. Please try again later.";
pub const INSIGHT_FALLBACK: &str = "I couldn't process this insight right now.";
pub const RECOMMEND_FALLBACK: &str = "Error generating recommendations.";

const MAX_QUICK_REPLIES: usize = 3;

/// The three chat-insight actions offered on an open conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightAction {
    Summarize,
    Explain,
    Draft,
}

impl InsightAction {
    fn task(self) -> &'static str {
        match self {
            InsightAction::Summarize => "Summarize this educational chat conversation briefly, highlighting the key takeaway or next steps.",
            InsightAction::Explain => "Explain the main educational concept or topic discussed in this chat in simple terms for a student.",
            InsightAction::Draft => "Draft a polite and professional follow-up reply for the user based on this chat context.",
        }
    }
}

/// Splits a comma-separated model answer into at most three trimmed suggestions.
///
/// The comma convention is a soft contract: fewer than three usable segments
/// simply yields fewer suggestions.
pub fn parse_quick_replies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_QUICK_REPLIES)
        .map(str::to_string)
        .collect()
}

//=========================================================================================
// AssistClient
//=========================================================================================

#[derive(Clone)]
pub struct AssistClient {
    generator: Arc<dyn TextGenerationService>,
}

impl AssistClient {
    pub fn new(generator: Arc<dyn TextGenerationService>) -> Self {
        Self { generator }
    }

    /// Free-form question to the standalone assistant.
    pub async fn complete(&self, prompt: &str, context: Option<&str>) -> String {
        let content = match context.filter(|c| !c.is_empty()) {
            Some(context) => format!("Context: {context}\n\nUser Query: {prompt}"),
            None => format!("User Query: {prompt}"),
        };
        let request = GenerationRequest {
            system_instruction: ASSISTANT_INSTRUCTIONS.to_string(),
            content,
            temperature: Some(0.7),
        };

        match self.generator.generate(request, ModelTier::Fast).await {
            Ok(text) => text,
            Err(e) => {
                error!("Assistant completion failed: {}", e);
                COMPLETE_FALLBACK.to_string()
            }
        }
    }

    /// Up to three short replies to the last message received in a chat.
    pub async fn quick_replies(&self, last_message: &str) -> Vec<String> {
        let request = GenerationRequest {
            system_instruction: QUICK_REPLY_INSTRUCTIONS.to_string(),
            content: QUICK_REPLY_TEMPLATE.replace("{message}", last_message),
            temperature: Some(0.5),
        };

        match self.generator.generate(request, ModelTier::Fast).await {
            Ok(text) => {
                let replies = parse_quick_replies(&text);
                info!("Generated {} quick replies.", replies.len());
                replies
            }
            Err(e) => {
                error!("Quick reply generation failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Summarize, explain or draft a reply for a rendered chat history.
    pub async fn chat_insight(&self, history: &str, action: InsightAction) -> String {
        let request = GenerationRequest {
            system_instruction: INSIGHT_INSTRUCTIONS.to_string(),
            content: format!("Chat History:\n{history}\n\nTask: {}", action.task()),
            temperature: Some(0.6),
        };

        match self.generator.generate(request, ModelTier::Fast).await {
            Ok(text) => text,
            Err(e) => {
                error!("Chat insight ({:?}) failed: {}", action, e);
                INSIGHT_FALLBACK.to_string()
            }
        }
    }

    /// Tutor profiles and learning strategies for free-text student preferences.
    pub async fn recommend_tutors(&self, preferences: &str) -> String {
        let request = GenerationRequest {
            system_instruction: RECOMMEND_INSTRUCTIONS.to_string(),
            content: format!(
                "Based on these preferences: {preferences}, suggest 3 ideal tutor profiles and learning strategies. Return in plain text."
            ),
            temperature: None,
        };

        match self.generator.generate(request, ModelTier::Reasoning).await {
            Ok(text) => text,
            Err(e) => {
                error!("Tutor recommendation failed: {}", e);
                RECOMMEND_FALLBACK.to_string()
            }
        }
    }

    /// Starts `quick_replies` as a screen-scoped task.
    pub fn spawn_quick_replies(&self, last_message: String) -> PendingAssist<Vec<String>> {
        let client = self.clone();
        PendingAssist::spawn(async move { client.quick_replies(&last_message).await })
    }

    /// Starts `chat_insight` as a screen-scoped task.
    pub fn spawn_chat_insight(&self, history: String, action: InsightAction) -> PendingAssist<String> {
        let client = self.clone();
        PendingAssist::spawn(async move { client.chat_insight(&history, action).await })
    }
}

//=========================================================================================
// PendingAssist
//=========================================================================================

/// A single-shot, in-flight assist request owned by the screen that issued it.
///
/// Dropping the handle (the screen was dismissed) aborts the task, so a late
/// result is discarded instead of landing on a screen that no longer exists.
pub struct PendingAssist<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> PendingAssist<T> {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(future)),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Waits for the result. `None` only if the task was aborted or panicked.
    pub async fn wait(mut self) -> Option<T> {
        let handle = self.handle.take()?;
        handle.await.ok()
    }
}

impl<T> Drop for PendingAssist<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{PortError, PortResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Answers every request with a canned result and records what it was sent.
    struct ScriptedGenerator {
        answer: Result<String, String>,
        calls: AtomicUsize,
        last: Mutex<Option<(GenerationRequest, ModelTier)>>,
    }

    impl ScriptedGenerator {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                answer: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                answer: Err("connection refused".to_string()),
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }

        fn last_request(&self) -> (GenerationRequest, ModelTier) {
            self.last.lock().unwrap().clone().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerationService for ScriptedGenerator {
        async fn generate(&self, request: GenerationRequest, tier: ModelTier) -> PortResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((request, tier));
            self.answer.clone().map_err(PortError::Unexpected)
        }
    }

    /// Finishes after a short delay and records that it did.
    struct SlowGenerator {
        finished: Arc<AtomicBool>,
    }

    #[async_trait]
    impl TextGenerationService for SlowGenerator {
        async fn generate(&self, _request: GenerationRequest, _tier: ModelTier) -> PortResult<String> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.finished.store(true, Ordering::SeqCst);
            Ok("too late".to_string())
        }
    }

    #[tokio::test]
    async fn quick_replies_keep_first_three_trimmed() {
        let generator = ScriptedGenerator::ok("Sure, Thanks, Okay, Later");
        let client = AssistClient::new(generator.clone());
        assert_eq!(
            client.quick_replies("See you tomorrow?").await,
            vec!["Sure", "Thanks", "Okay"]
        );
        let (request, _) = generator.last_request();
        assert!(request.content.contains("\"See you tomorrow?\""));
        assert_eq!(request.temperature, Some(0.5));
    }

    #[tokio::test]
    async fn quick_replies_degrade_to_fewer_suggestions() {
        let client = AssistClient::new(ScriptedGenerator::ok(" Sure ,, ,Thanks"));
        assert_eq!(client.quick_replies("hi").await, vec!["Sure", "Thanks"]);

        let client = AssistClient::new(ScriptedGenerator::ok(""));
        assert!(client.quick_replies("hi").await.is_empty());
    }

    #[tokio::test]
    async fn quick_replies_on_failure_is_empty() {
        let generator = ScriptedGenerator::failing();
        let client = AssistClient::new(generator.clone());
        assert!(client.quick_replies("hi").await.is_empty());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1, "no retry expected");
    }

    #[tokio::test]
    async fn complete_on_failure_returns_fallback() {
        let client = AssistClient::new(ScriptedGenerator::failing());
        assert_eq!(client.complete("What is a derivative?", None).await, COMPLETE_FALLBACK);
    }

    #[tokio::test]
    async fn complete_includes_context_only_when_given() {
        let generator = ScriptedGenerator::ok("A rate of change.");
        let client = AssistClient::new(generator.clone());

        assert_eq!(client.complete("What is a derivative?", Some("Calculus")).await, "A rate of change.");
        let (request, tier) = generator.last_request();
        assert_eq!(request.content, "Context: Calculus\n\nUser Query: What is a derivative?");
        assert_eq!(request.system_instruction, ASSISTANT_INSTRUCTIONS);
        assert_eq!(tier, ModelTier::Fast);

        client.complete("What is a derivative?", Some("")).await;
        assert_eq!(generator.last_request().0.content, "User Query: What is a derivative?");
    }

    #[tokio::test]
    async fn chat_insight_uses_task_per_action_and_fallback() {
        let generator = ScriptedGenerator::ok("Practice chapter 4.");
        let client = AssistClient::new(generator.clone());
        client.chat_insight("Amit Sir: Hello", InsightAction::Draft).await;
        let (request, _) = generator.last_request();
        assert!(request.content.starts_with("Chat History:\nAmit Sir: Hello\n\nTask: Draft"));
        assert_eq!(request.temperature, Some(0.6));

        let client = AssistClient::new(ScriptedGenerator::failing());
        assert_eq!(
            client.chat_insight("Amit Sir: Hello", InsightAction::Summarize).await,
            INSIGHT_FALLBACK
        );
    }

    #[tokio::test]
    async fn recommendations_use_reasoning_tier() {
        let generator = ScriptedGenerator::ok("1. A patient physics mentor");
        let client = AssistClient::new(generator.clone());
        client.recommend_tutors("Class 10, weak in optics").await;
        let (request, tier) = generator.last_request();
        assert_eq!(tier, ModelTier::Reasoning);
        assert_eq!(request.temperature, None);

        let client = AssistClient::new(ScriptedGenerator::failing());
        assert_eq!(client.recommend_tutors("anything").await, RECOMMEND_FALLBACK);
    }

    #[tokio::test]
    async fn pending_assist_delivers_result() {
        let client = AssistClient::new(ScriptedGenerator::ok("Yes, No"));
        let pending = client.spawn_quick_replies("Ready?".to_string());
        assert_eq!(pending.wait().await, Some(vec!["Yes".to_string(), "No".to_string()]));
    }

    #[tokio::test]
    async fn dropping_pending_assist_aborts_it() {
        let finished = Arc::new(AtomicBool::new(false));
        let client = AssistClient::new(Arc::new(SlowGenerator {
            finished: finished.clone(),
        }));
        let pending = client.spawn_chat_insight("A: hi".to_string(), InsightAction::Explain);
        tokio::task::yield_now().await;
        assert!(!pending.is_finished());

        drop(pending);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }
}
