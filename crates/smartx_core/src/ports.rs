//! crates/smartx_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the concrete storage medium and generation provider.

use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// A durable, device-scoped key-value medium. Values are opaque text.
///
/// No transactional guarantees across keys are expected from implementors.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written or was removed.
    async fn get(&self, key: &str) -> PortResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> PortResult<()>;

    /// Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> PortResult<()>;
}

/// One outbound request to a hosted text-generation endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub content: String,
    /// `None` leaves the provider's default in place.
    pub temperature: Option<f32>,
}

/// Which tier of model a call-site asks for. The adapter maps it to a concrete model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelTier {
    #[default]
    Fast,
    Reasoning,
}

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Submits text and receives generated text. An empty string is a valid answer.
    async fn generate(&self, request: GenerationRequest, tier: ModelTier) -> PortResult<String>;
}
