//! services/app/src/adapters/generation_llm.rs
//!
//! This module contains the adapter for the hosted text-generation endpoint.
//! It implements the `TextGenerationService` port from the `core` crate against
//! any OpenAI-compatible chat-completions API (OpenAI itself, or Gemini through
//! its OpenAI-compatible base URL).

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use smartx_core::ports::{
    GenerationRequest, ModelTier, PortError, PortResult, TextGenerationService,
};
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TextGenerationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiGenerationAdapter {
    client: Client<OpenAIConfig>,
    fast_model: String,
    reasoning_model: String,
}

impl OpenAiGenerationAdapter {
    /// Creates a new `OpenAiGenerationAdapter`.
    pub fn new(client: Client<OpenAIConfig>, fast_model: String, reasoning_model: String) -> Self {
        Self {
            client,
            fast_model,
            reasoning_model,
        }
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast_model,
            ModelTier::Reasoning => &self.reasoning_model,
        }
    }
}

//=========================================================================================
// `TextGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextGenerationService for OpenAiGenerationAdapter {
    /// Sends one chat completion with the call-site's system instruction and returns its text.
    async fn generate(&self, request: GenerationRequest, tier: ModelTier) -> PortResult<String> {
        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(request.system_instruction)
                    .build()
                    .map_err(|e| PortError::Unexpected(e.to_string()))?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(request.content)
                    .build()
                    .map_err(|e| PortError::Unexpected(e.to_string()))?,
            ),
        ];

        let model = self.model_for(tier);
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(model).messages(messages).n(1);
        if let Some(temperature) = request.temperature {
            args.temperature(temperature);
        }
        let completion = args
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(completion)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        debug!(model, choices = response.choices.len(), "Generation response received.");

        // A choice without text content is an empty answer, not a failure.
        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content.unwrap_or_default()),
            None => Err(PortError::Unexpected(
                "Generation endpoint returned no choices in its response.".to_string(),
            )),
        }
    }
}
