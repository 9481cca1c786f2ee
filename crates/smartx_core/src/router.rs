//! crates/smartx_core/src/router.rs
//!
//! The View Router: a static lookup from a requested path to the screen to
//! render. Anonymous sessions only ever reach onboarding.

use crate::session::SessionState;
use serde::Serialize;

/// The fixed set of authenticated routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "id", rename_all = "snake_case")]
pub enum Route {
    Home,
    Directory,
    TutorDetail(String),
    Sessions,
    Tests,
    Materials,
    Messaging,
    Payments,
    Profile,
}

impl Route {
    /// Parses a path, ignoring a leading `#` and a trailing slash.
    /// Returns `None` for anything outside the route table.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim().trim_start_matches('#');
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        let route = match path {
            "/" => Route::Home,
            "/browse" => Route::Directory,
            "/classes" => Route::Sessions,
            "/tests" => Route::Tests,
            "/study-materials" => Route::Materials,
            "/messages" => Route::Messaging,
            "/payments" => Route::Payments,
            "/profile" => Route::Profile,
            other => {
                let id = other.strip_prefix("/tutor/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Route::TutorDetail(id.to_string())
            }
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Directory => "/browse".to_string(),
            Route::TutorDetail(id) => format!("/tutor/{id}"),
            Route::Sessions => "/classes".to_string(),
            Route::Tests => "/tests".to_string(),
            Route::Materials => "/study-materials".to_string(),
            Route::Messaging => "/messages".to_string(),
            Route::Payments => "/payments".to_string(),
            Route::Profile => "/profile".to_string(),
        }
    }
}

/// What the router decided to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Onboarding,
    Screen(Route),
}

/// Resolves a requested path against the current session state.
pub fn resolve(state: &SessionState, path: &str) -> Destination {
    match state {
        SessionState::Anonymous => Destination::Onboarding,
        SessionState::Authenticated(_) => {
            Destination::Screen(Route::parse(path).unwrap_or(Route::Home))
        }
    }
}

//=========================================================================================
// Bottom Navigation
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/browse", "Browse"),
    ("/classes", "Classes"),
    ("/messages", "Messages"),
    ("/profile", "Profile"),
];

/// The bottom navigation bar. Only authenticated screens carry it.
pub fn navigation(current: &Route) -> Vec<NavItem> {
    let current_path = current.path();
    NAV_ITEMS
        .iter()
        .map(|&(path, label)| NavItem {
            path,
            label,
            active: current_path == path,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, User};

    const ALL_PATHS: [&str; 11] = [
        "/",
        "/browse",
        "/tutor/1",
        "/classes",
        "/tests",
        "/study-materials",
        "/messages",
        "/payments",
        "/profile",
        "/nowhere",
        "",
    ];

    fn signed_in() -> SessionState {
        SessionState::Authenticated(User {
            id: "usr_1".to_string(),
            name: "Arjun Gupta".to_string(),
            role: Role::Student,
            avatar: None,
            email: "arjun@example.com".to_string(),
        })
    }

    #[test]
    fn anonymous_always_gets_onboarding() {
        for path in ALL_PATHS {
            assert_eq!(resolve(&SessionState::Anonymous, path), Destination::Onboarding, "{path}");
        }
    }

    #[test]
    fn authenticated_paths_map_to_routes() {
        let state = signed_in();
        assert_eq!(resolve(&state, "/profile"), Destination::Screen(Route::Profile));
        assert_eq!(resolve(&state, "#/browse/"), Destination::Screen(Route::Directory));
        assert_eq!(
            resolve(&state, "/tutor/42"),
            Destination::Screen(Route::TutorDetail("42".to_string()))
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        let state = signed_in();
        for path in ["/nowhere", "/tutor/", "/tutor/1/extra", "/PROFILE"] {
            assert_eq!(resolve(&state, path), Destination::Screen(Route::Home), "{path}");
        }
    }

    #[test]
    fn every_route_path_parses_back() {
        for path in ALL_PATHS.iter().take(9) {
            let route = Route::parse(path).unwrap();
            assert_eq!(route.path(), *path);
        }
    }

    #[test]
    fn navigation_marks_only_the_current_tab() {
        let items = navigation(&Route::Messaging);
        let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.label).collect();
        assert_eq!(active, vec!["Messages"]);
        assert!(navigation(&Route::Payments).iter().all(|i| !i.active));
    }
}
