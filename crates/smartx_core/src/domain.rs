//! crates/smartx_core/src/domain.rs
//!
//! Defines the core data structures for the application.
//! These structs carry serde derives because the persisted session and the
//! view-models handed to the UI shell are JSON, but they know nothing about
//! the storage medium or the transport.

use serde::{Deserialize, Serialize};

//=========================================================================================
// Identity
//=========================================================================================

/// One of the four fixed account types. Drives every role-conditioned screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Parent,
    Tutor,
    Institute,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Student, Role::Parent, Role::Tutor, Role::Institute];

    /// Tutors and institutes see the provider side of the marketplace.
    pub fn is_edu_provider(self) -> bool {
        matches!(self, Role::Tutor | Role::Institute)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Tutor => "Tutor",
            Role::Institute => "Institute",
        }
    }
}

/// The locally persisted claim of who is using this device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub email: String,
}

//=========================================================================================
// Preferences
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }

    pub fn is_hindi(self) -> bool {
        self == Language::Hi
    }
}

/// Both display preferences, as returned to the UI shell in one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

//=========================================================================================
// Catalog Data
//=========================================================================================

/// A tutor as listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub id: String,
    pub name: String,
    pub subject: Vec<String>,
    pub rating: f32,
    pub reviews_count: u32,
    pub hourly_rate: u32,
    pub experience: String,
    pub verified: bool,
    pub avatar: String,
}

/// A single message within one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub timestamp: String,
    pub is_me: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
    Away,
}

/// One row of the messaging inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: String,
    pub name: String,
    pub last_msg: String,
    pub time: String,
    pub unread: u32,
    pub avatar: String,
    pub status: Presence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Live,
    Recorded,
}

/// A class session shown on the sessions screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: String,
    pub title: String,
    pub tutor_name: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    pub subject: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockTest {
    pub id: String,
    pub title: String,
    pub category: String,
    pub duration: String,
    pub questions: u32,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectShelf {
    pub name: String,
    pub items: u32,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialItem {
    pub title: String,
    pub format: String,
    pub size: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Free,
    Pending,
}

/// A ledger row on the payments screen. Amounts are display labels only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: String,
    pub status: TransactionStatus,
    pub date: String,
}

/// An open request from a student, shown to tutors and institutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRequest {
    pub name: String,
    pub subject: String,
    pub detail: String,
}
