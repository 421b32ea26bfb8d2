//! Route table and the dashboard access gate

use crate::state::auth::AuthState;

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const PRIVACY: &str = "/privacy";
pub const SIGN_UP: &str = "/signup";
pub const SIGN_IN: &str = "/signin";
pub const DASHBOARD: &str = "/dashboard";
pub const TRANSACTION_DETAIL: &str = "/dashboard/transactions/:reference";

/// Which layout wraps a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutGroup {
    /// Navbar and footer around the page
    Public,
    /// Wallet state provider, no chrome
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub title: &'static str,
    pub layout: LayoutGroup,
    pub show_in_nav: bool,
}

pub const ROUTES: [RouteEntry; 7] = [
    RouteEntry { path: HOME, title: "Home", layout: LayoutGroup::Public, show_in_nav: true },
    RouteEntry { path: ABOUT, title: "About", layout: LayoutGroup::Public, show_in_nav: true },
    RouteEntry { path: PRIVACY, title: "Privacy", layout: LayoutGroup::Public, show_in_nav: true },
    RouteEntry { path: SIGN_UP, title: "Sign Up", layout: LayoutGroup::Public, show_in_nav: false },
    RouteEntry { path: SIGN_IN, title: "Sign In", layout: LayoutGroup::Public, show_in_nav: false },
    RouteEntry { path: DASHBOARD, title: "Dashboard", layout: LayoutGroup::Protected, show_in_nav: false },
    RouteEntry {
        path: TRANSACTION_DETAIL,
        title: "Transaction",
        layout: LayoutGroup::Protected,
        show_in_nav: false,
    },
];

/// Links shown in the public navbar, in order.
pub fn nav_links() -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(|r| r.show_in_nav)
}

/// Table entry for a concrete path; `:param` segments match any value.
pub fn find_route(path: &str) -> Option<&'static RouteEntry> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    ROUTES.iter().find(|entry| {
        let mut pattern = entry.path.split('/');
        let mut actual = path.split('/');
        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return true,
                (Some(p), Some(a)) if p.starts_with(':') && !a.is_empty() => continue,
                (Some(p), Some(a)) if p == a => continue,
                _ => return false,
            }
        }
    })
}

/// Path of the detail page for one transaction.
pub fn transaction_path(reference: &str) -> String {
    format!("{}/transactions/{}", DASHBOARD, urlencoding::encode(reference))
}

/// What a protected page does for the current auth state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Startup check still running; show a loader
    Wait,
    /// Navigate away without rendering protected content
    Redirect(&'static str),
    Render,
}

pub fn dashboard_gate(auth: &AuthState) -> GateDecision {
    if auth.is_loading {
        GateDecision::Wait
    } else if !auth.is_authenticated() {
        GateDecision::Redirect(SIGN_IN)
    } else {
        GateDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::UserProfile;

    fn profile() -> UserProfile {
        serde_json::from_str(
            r#"{"id":7,"email":"ada@example.com","username":"ada","date_joined":"2024-03-01T09:30:00Z"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_gate_waits_while_loading() {
        assert_eq!(dashboard_gate(&AuthState::default()), GateDecision::Wait);
    }

    #[test]
    fn test_gate_redirects_without_session() {
        let state = AuthState {
            user: None,
            is_loading: false,
        };
        assert_eq!(dashboard_gate(&state), GateDecision::Redirect("/signin"));
    }

    #[test]
    fn test_gate_renders_for_signed_in_user() {
        let state = AuthState {
            user: Some(profile()),
            is_loading: false,
        };
        assert_eq!(dashboard_gate(&state), GateDecision::Render);
    }

    #[test]
    fn test_route_table_layouts() {
        assert_eq!(find_route("/").unwrap().layout, LayoutGroup::Public);
        assert_eq!(find_route("/signin").unwrap().title, "Sign In");
        assert_eq!(find_route("/dashboard/").unwrap().layout, LayoutGroup::Protected);
        let detail = find_route("/dashboard/transactions/FUND-1?tab=info").unwrap();
        assert_eq!(detail.path, TRANSACTION_DETAIL);
        assert!(find_route("/dashboard/transactions/").is_none());
        assert!(find_route("/nope").is_none());
    }

    #[test]
    fn test_nav_links_are_public() {
        let titles: Vec<&str> = nav_links().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Home", "About", "Privacy"]);
        assert!(nav_links().all(|r| r.layout == LayoutGroup::Public));
    }

    #[test]
    fn test_transaction_path_encodes_reference() {
        assert_eq!(transaction_path("FUND 1"), "/dashboard/transactions/FUND%201");
    }
}
