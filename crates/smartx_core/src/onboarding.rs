//! crates/smartx_core/src/onboarding.rs
//!
//! Role selection, phone-number validation and local user synthesis. No
//! server round-trip: a valid form produces a `User` on the spot.

use crate::domain::{Language, Role, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    /// Carries the message to show, already localized.
    #[error("{0}")]
    InvalidPhone(String),
}

/// Keeps only digits and caps the number at ten of them, as typed input is normalized.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(PHONE_DIGITS).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OnboardingForm {
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub phone: String,
}

fn default_role() -> Role {
    Role::Student
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            role: default_role(),
            phone: String::new(),
        }
    }
}

impl OnboardingForm {
    /// Validates the form and synthesizes the user it describes.
    /// An invalid form mutates nothing.
    pub fn submit(&self, language: Language) -> Result<User, OnboardingError> {
        let phone = normalize_phone(&self.phone);
        if phone.len() < PHONE_DIGITS {
            let message = if language.is_hindi() {
                "कृपया वैध 10-अंकीय मोबाइल नंबर दर्ज करें"
            } else {
                "Please enter a valid 10-digit mobile number"
            };
            return Err(OnboardingError::InvalidPhone(message.to_string()));
        }

        let name = if language.is_hindi() { "अर्जुन गुप्ता" } else { "Arjun Gupta" };
        Ok(User {
            id: synthesize_user_id(),
            name: name.to_string(),
            role: self.role,
            avatar: None,
            email: "arjun@example.com".to_string(),
        })
    }
}

/// `usr_` followed by nine lowercase alphanumerics.
fn synthesize_user_id() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("usr_{}", &simple[..9])
}

/// One selectable role card on the onboarding screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleOption {
    pub role: Role,
    pub icon: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub selected: bool,
}

pub fn role_options(selected: Role, language: Language) -> Vec<RoleOption> {
    Role::ALL
        .into_iter()
        .map(|role| {
            let (icon, label, placeholder) = role_copy(role, language);
            RoleOption {
                role,
                icon,
                label,
                placeholder,
                selected: role == selected,
            }
        })
        .collect()
}

fn role_copy(role: Role, language: Language) -> (&'static str, &'static str, &'static str) {
    match (role, language) {
        (Role::Student, Language::En) => ("backpack", "Student", "Enter Student ID"),
        (Role::Student, Language::Hi) => ("backpack", "छात्र", "छात्र आईडी दर्ज करें"),
        (Role::Parent, Language::En) => ("family_restroom", "Parent", "Enter Parent ID"),
        (Role::Parent, Language::Hi) => ("family_restroom", "अभिभावक", "अभिभावक आईडी दर्ज करें"),
        (Role::Tutor, Language::En) => ("cast_for_education", "Teacher", "Enter Teacher ID"),
        (Role::Tutor, Language::Hi) => ("cast_for_education", "शिक्षक", "शिक्षक आईडी दर्ज करें"),
        (Role::Institute, Language::En) => ("apartment", "Institute", "Enter Institute ID"),
        (Role::Institute, Language::Hi) => ("apartment", "संस्थान", "संस्थान आईडी दर्ज करें"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_normalized_to_ten_digits() {
        assert_eq!(normalize_phone("+91 98765-43210 ext 9"), "9198765432");
        assert_eq!(normalize_phone("98765 xxxxx"), "98765");
    }

    #[test]
    fn short_phone_is_rejected_with_localized_message() {
        let form = OnboardingForm { role: Role::Parent, phone: "98765".to_string() };
        assert_eq!(
            form.submit(Language::En),
            Err(OnboardingError::InvalidPhone("Please enter a valid 10-digit mobile number".to_string()))
        );
        let Err(OnboardingError::InvalidPhone(hindi)) = form.submit(Language::Hi) else {
            panic!("expected a rejection");
        };
        assert!(hindi.contains("10"));
    }

    #[test]
    fn valid_form_synthesizes_user_with_selected_role() {
        let form = OnboardingForm { role: Role::Institute, phone: "98765 43210".to_string() };
        let user = form.submit(Language::En).unwrap();
        assert_eq!(user.role, Role::Institute);
        assert_eq!(user.name, "Arjun Gupta");
        assert!(user.id.starts_with("usr_"));
        assert_eq!(user.id.len(), 13);
        assert!(user.id[4..].chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn role_options_mark_selection_and_use_teacher_label() {
        let options = role_options(Role::Tutor, Language::En);
        assert_eq!(options.len(), 4);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "Teacher");
        assert_eq!(selected[0].placeholder, "Enter Teacher ID");
    }

    #[test]
    fn default_form_selects_student() {
        let form: OnboardingForm = serde_json::from_str(r#"{"phone":"9876543210"}"#).unwrap();
        assert_eq!(form, OnboardingForm { role: Role::Student, phone: "9876543210".to_string() });
        assert_eq!(OnboardingForm::default().role, Role::Student);
    }
}
