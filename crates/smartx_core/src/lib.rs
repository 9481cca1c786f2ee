pub mod assist;
pub mod catalog;
pub mod client;
pub mod conversation;
pub mod domain;
pub mod memory;
pub mod onboarding;
pub mod ports;
pub mod preferences;
pub mod router;
pub mod screens;
pub mod session;

pub use assist::{AssistClient, InsightAction, PendingAssist};
pub use client::{ClientError, RenderedScreen, SmartxClient};
pub use domain::{ChatMessage, Language, Preferences, Role, Theme, Tutor, User};
pub use onboarding::{OnboardingError, OnboardingForm};
pub use ports::{
    GenerationRequest, KeyValueStore, ModelTier, PortError, PortResult, TextGenerationService,
};
pub use preferences::{FavoriteSet, PreferenceStore};
pub use router::{Destination, Route};
pub use screens::{Screen, ScreenQuery};
pub use session::{SessionError, SessionResolver, SessionState};
