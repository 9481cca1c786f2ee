//! crates/smartx_core/src/screens.rs
//!
//! Role-conditioned view-models. Every screen that varies by role dispatches on
//! the closed `Role` enum in exactly one `match`, so adding a role is one new arm
//! per screen rather than scattered conditionals.

use crate::catalog::{self, DIRECTORY_SUBJECTS, TEST_CATEGORIES};
use crate::domain::{
    ChatSummary, ClassSession, Language, MaterialItem, MockTest, Preferences, Role, SessionKind,
    StudentRequest, SubjectShelf, Theme, Transaction, Tutor, User,
};
use crate::onboarding::{role_options, RoleOption};
use crate::preferences::FavoriteSet;
use crate::router::Route;
use serde::{Deserialize, Serialize};

//=========================================================================================
// Screen Inputs
//=========================================================================================

/// Local UI state a screen may be asked to render with: search text, chips, tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScreenQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub tab: Option<SessionKind>,
    #[serde(default)]
    pub category: Option<String>,
}

//=========================================================================================
// View-Models
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Onboarding(OnboardingView),
    Home(HomeView),
    Directory(DirectoryView),
    TutorDetail(TutorDetailView),
    Sessions(SessionsView),
    Tests(TestsView),
    Materials(MaterialsView),
    Messaging(MessagingView),
    Payments(PaymentsView),
    Profile(ProfileView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingView {
    pub greeting: &'static str,
    pub headline: &'static str,
    pub prompt: &'static str,
    pub language_switch: &'static str,
    pub roles: Vec<RoleOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub icon: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub role: Role,
    pub dashboard_title: String,
    pub user_name: String,
    pub primary_heading: &'static str,
    pub stats: Vec<QuickStat>,
    pub shortcuts: Vec<Shortcut>,
    pub view_all_path: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorCard {
    #[serde(flatten)]
    pub tutor: Tutor,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum DirectoryView {
    /// Students and parents browse tutors.
    Mentors {
        title: &'static str,
        subtitle: &'static str,
        search_placeholder: &'static str,
        subjects: Vec<&'static str>,
        selected_subject: String,
        tutors: Vec<TutorCard>,
    },
    /// Tutors and institutes browse open student requests.
    Opportunities {
        title: &'static str,
        subtitle: &'static str,
        search_placeholder: &'static str,
        trending: &'static str,
        requests: Vec<StudentRequest>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorDetailView {
    #[serde(flatten)]
    pub tutor: Tutor,
    pub bio: &'static str,
    pub qualifications: Vec<&'static str>,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionsView {
    pub title: &'static str,
    pub live_tab: &'static str,
    pub recorded_tab: &'static str,
    pub active_tab: SessionKind,
    pub can_schedule: bool,
    pub sessions: Vec<ClassSession>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestsView {
    pub categories: Vec<&'static str>,
    pub active_category: String,
    pub tests: Vec<MockTest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialsView {
    pub subjects: Vec<SubjectShelf>,
    pub recent: Vec<MaterialItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagingView {
    pub chats: Vec<ChatSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentsView {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub user: User,
    pub role: Role,
    pub headline_stat: QuickStat,
    pub favorites_heading: &'static str,
    pub favorite_tutors: Vec<Tutor>,
    pub empty_favorites: &'static str,
    pub theme_action: &'static str,
    pub language_action: &'static str,
    pub sign_out: &'static str,
}

//=========================================================================================
// Builders
//=========================================================================================

pub fn onboarding(language: Language) -> OnboardingView {
    let hindi = language.is_hindi();
    OnboardingView {
        greeting: if hindi { "नमस्ते!" } else { "Namaste!" },
        headline: if hindi { "आज ही सीखना शुरू करें" } else { "Start Learning Today" },
        prompt: if hindi { "जारी रखने के लिए अपनी भूमिका चुनें:" } else { "Select who you are to continue:" },
        language_switch: if hindi { "Eng / Hin" } else { "Hin / Eng" },
        roles: role_options(Role::Student, language),
    }
}

/// Builds the view-model for an authenticated route.
pub fn build(
    route: &Route,
    user: &User,
    preferences: Preferences,
    favorites: &FavoriteSet,
    query: &ScreenQuery,
) -> Screen {
    match route {
        Route::Home => Screen::Home(home(user)),
        Route::Directory => Screen::Directory(directory(user.role, favorites, query)),
        Route::TutorDetail(id) => Screen::TutorDetail(tutor_detail(id, favorites)),
        Route::Sessions => Screen::Sessions(sessions(user.role, query.tab)),
        Route::Tests => Screen::Tests(test_center(query.category.as_deref())),
        Route::Materials => Screen::Materials(MaterialsView {
            subjects: catalog::subject_shelves(),
            recent: catalog::recent_materials(),
        }),
        Route::Messaging => Screen::Messaging(MessagingView {
            chats: catalog::chats(),
        }),
        Route::Payments => Screen::Payments(PaymentsView {
            transactions: catalog::transactions(),
        }),
        Route::Profile => Screen::Profile(profile(user, preferences, favorites)),
    }
}

fn stat(value: &'static str, label: &'static str) -> QuickStat {
    QuickStat { value, label }
}

fn shortcut(icon: &'static str, label: &'static str, path: &'static str) -> Shortcut {
    Shortcut { icon, label, path }
}

pub fn home(user: &User) -> HomeView {
    let (primary_heading, stats, shortcuts) = match user.role {
        Role::Student => (
            "Happening Now",
            vec![stat("12", "Hours Learned"), stat("85%", "Avg Score"), stat("4", "Assignments")],
            vec![
                shortcut("menu_book", "Library", "/study-materials"),
                shortcut("edit_note", "Tests", "/tests"),
                shortcut("forum", "Doubts", "/messages"),
                shortcut("workspace_premium", "Awards", "/profile"),
            ],
        ),
        Role::Parent => (
            "Child's Schedule",
            vec![stat("92%", "Attendance"), stat("A-", "Latest Grade"), stat("\u{20B9}2.5k", "Pending Fees")],
            vec![
                shortcut("visibility", "Grades", "/tests"),
                shortcut("calendar_today", "Events", "/classes"),
                shortcut("chat", "Teacher", "/messages"),
                shortcut("credit_card", "Fees", "/payments"),
            ],
        ),
        Role::Tutor => (
            "Your Next Class",
            vec![stat("\u{20B9}42k", "Earnings"), stat("128", "Students"), stat("4.9", "Rating")],
            vec![
                shortcut("add_box", "Create", "/classes"),
                shortcut("upload_file", "Upload", "/study-materials"),
                shortcut("grading", "Grading", "/tests"),
                shortcut("bar_chart", "Stats", "/profile"),
            ],
        ),
        Role::Institute => (
            "Institute Overview",
            vec![stat("\u{20B9}3.2L", "Revenue"), stat("24", "Tutors"), stat("840", "Enrollments")],
            vec![
                shortcut("person_add", "Hiring", "/browse"),
                shortcut("payments", "Payroll", "/payments"),
                shortcut("hub", "Batches", "/classes"),
                shortcut("campaign", "Notice", "/messages"),
            ],
        ),
    };

    HomeView {
        role: user.role,
        dashboard_title: format!("{} Dashboard", user.role.as_str()),
        user_name: user.name.clone(),
        primary_heading,
        stats,
        shortcuts,
        view_all_path: if user.role == Role::Student { "/classes" } else { "/browse" },
    }
}

fn matches_search(tutor: &Tutor, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    needle.is_empty()
        || tutor.name.to_lowercase().contains(&needle)
        || tutor.subject.iter().any(|s| s.to_lowercase().contains(&needle))
}

pub fn directory(role: Role, favorites: &FavoriteSet, query: &ScreenQuery) -> DirectoryView {
    if role.is_edu_provider() {
        return DirectoryView::Opportunities {
            title: "Market",
            subtitle: "Opportunities",
            search_placeholder: "Search student requests...",
            trending: "Mathematics is in high demand this week!",
            requests: catalog::student_requests(),
        };
    }

    let selected_subject = query
        .subject
        .as_deref()
        .filter(|s| DIRECTORY_SUBJECTS.contains(s))
        .unwrap_or("All")
        .to_string();
    let search = query.search.as_deref().unwrap_or("");

    let tutors = catalog::tutors()
        .into_iter()
        .filter(|t| selected_subject == "All" || t.subject.contains(&selected_subject))
        .filter(|t| matches_search(t, search))
        .map(|tutor| TutorCard {
            favorite: favorites.contains(&tutor.id),
            tutor,
        })
        .collect();

    DirectoryView::Mentors {
        title: "Explore",
        subtitle: "Top Mentors",
        search_placeholder: "Search courses, tutors...",
        subjects: DIRECTORY_SUBJECTS.to_vec(),
        selected_subject,
        tutors,
    }
}

/// Unknown ids still render, using the first catalog record's profile under the requested id.
pub fn tutor_detail(id: &str, favorites: &FavoriteSet) -> TutorDetailView {
    let tutor = catalog::find_tutor(id).unwrap_or_else(|| {
        let mut fallback = catalog::tutors().remove(0);
        fallback.id = id.to_string();
        fallback
    });
    let bio = catalog::tutor_bio();
    TutorDetailView {
        favorite: favorites.contains(&tutor.id),
        tutor,
        bio: bio.bio,
        qualifications: bio.qualifications.to_vec(),
    }
}

pub fn sessions(role: Role, tab: Option<SessionKind>) -> SessionsView {
    let active_tab = tab.unwrap_or(SessionKind::Live);
    let (title, live_tab, recorded_tab, can_schedule) = if role.is_edu_provider() {
        ("Manage Sessions", "Upcoming", "Library", true)
    } else {
        ("Your Classes", "Live Sessions", "Recorded Videos", false)
    };
    SessionsView {
        title,
        live_tab,
        recorded_tab,
        active_tab,
        can_schedule,
        sessions: catalog::class_sessions()
            .into_iter()
            .filter(|s| s.kind == active_tab)
            .collect(),
    }
}

pub fn test_center(category: Option<&str>) -> TestsView {
    let active_category = category
        .filter(|c| TEST_CATEGORIES.contains(c))
        .unwrap_or("All")
        .to_string();
    TestsView {
        categories: TEST_CATEGORIES.to_vec(),
        tests: catalog::mock_tests()
            .into_iter()
            .filter(|t| active_category == "All" || t.category == active_category)
            .collect(),
        active_category,
    }
}

pub fn profile(user: &User, preferences: Preferences, favorites: &FavoriteSet) -> ProfileView {
    let hindi = preferences.language.is_hindi();
    let headline_stat = match user.role {
        Role::Student => stat("12", "Hours Learned"),
        Role::Parent => stat("92%", "Attendance"),
        Role::Tutor => stat("4.9", "Rating"),
        Role::Institute => stat("840", "Enrollments"),
    };
    let theme_action = match (preferences.theme, hindi) {
        (Theme::Dark, false) => "Light Mode",
        (Theme::Dark, true) => "लाइट मोड",
        (Theme::Light, false) => "Dark Mode",
        (Theme::Light, true) => "डार्क मोड",
    };

    ProfileView {
        user: user.clone(),
        role: user.role,
        headline_stat,
        favorites_heading: if hindi { "पसंदीदा शिक्षक" } else { "Favorite Tutors" },
        favorite_tutors: catalog::tutors()
            .into_iter()
            .filter(|t| favorites.contains(&t.id))
            .collect(),
        empty_favorites: if hindi { "अभी तक कोई पसंदीदा नहीं" } else { "No favorites yet. Explore mentors!" },
        theme_action,
        language_action: if hindi { "English (En)" } else { "Hindi (हिं)" },
        sign_out: if hindi { "लॉग आउट" } else { "Sign Out" },
    }
}
