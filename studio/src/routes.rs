//! Page routes, navigation order and page titles.

use crate::site::SITE_TITLE;

/// A registered page. Anything else falls through to the not-found page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    About,
    Projects,
    TechStack,
}

impl AppRoute {
    /// Navbar order.
    pub const ALL: [AppRoute; 4] = [
        AppRoute::Home,
        AppRoute::About,
        AppRoute::Projects,
        AppRoute::TechStack,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::About => "/about",
            AppRoute::Projects => "/projects",
            AppRoute::TechStack => "/tech-stack",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::About => "About",
            AppRoute::Projects => "Projects",
            AppRoute::TechStack => "Tech Stack",
        }
    }

    /// Resolve a pathname. `None` means the not-found page.
    pub fn from_path(pathname: &str) -> Option<AppRoute> {
        let normalized = normalize(pathname);
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Whether the navbar link for this route is highlighted at `pathname`.
    pub fn is_active(self, pathname: &str) -> bool {
        Self::from_path(pathname) == Some(self)
    }

    /// Document title for this page.
    pub fn title(self) -> String {
        match self {
            AppRoute::Home => SITE_TITLE.to_string(),
            other => format!("{} · {SITE_TITLE}", other.label()),
        }
    }
}

/// Title of the fallback page.
pub fn not_found_title() -> String {
    format!("Page not found · {SITE_TITLE}")
}

/// Log line emitted when the fallback page renders for `pathname`.
pub fn not_found_message(pathname: &str) -> String {
    format!("404 Error: User attempted to access non-existent route: {pathname}")
}

/// Drop one trailing slash from non-root paths.
fn normalize(pathname: &str) -> &str {
    match pathname.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => pathname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registered_paths_resolve() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/about"), Some(AppRoute::About));
        assert_eq!(AppRoute::from_path("/projects"), Some(AppRoute::Projects));
        assert_eq!(AppRoute::from_path("/tech-stack"), Some(AppRoute::TechStack));
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(AppRoute::from_path("/about/"), Some(AppRoute::About));
        assert_eq!(AppRoute::from_path("/about//"), None);
    }

    #[test]
    fn unregistered_paths_fall_through() {
        assert_eq!(AppRoute::from_path("/blog"), None);
        assert_eq!(AppRoute::from_path("/projects/1"), None);
        assert_eq!(AppRoute::from_path("/About"), None);
        assert_eq!(AppRoute::from_path(""), None);
    }

    #[test]
    fn exactly_one_link_is_active_per_page() {
        for route in AppRoute::ALL {
            let active: Vec<_> = AppRoute::ALL
                .into_iter()
                .filter(|r| r.is_active(route.path()))
                .collect();
            assert_eq!(active, vec![route]);
        }
    }

    #[test]
    fn no_link_is_active_on_unknown_path() {
        assert!(AppRoute::ALL.iter().all(|r| !r.is_active("/nope")));
    }

    #[test]
    fn home_is_not_active_on_subpages() {
        assert!(!AppRoute::Home.is_active("/about"));
        assert!(AppRoute::Home.is_active("/"));
    }

    #[test]
    fn not_found_message_names_the_attempted_path() {
        assert_eq!(
            not_found_message("/blog/old-post"),
            "404 Error: User attempted to access non-existent route: /blog/old-post"
        );
    }

    #[test]
    fn titles() {
        assert_eq!(AppRoute::Home.title(), "Lyndon's Virtual Studio");
        assert_eq!(AppRoute::TechStack.title(), "Tech Stack · Lyndon's Virtual Studio");
        assert_eq!(not_found_title(), "Page not found · Lyndon's Virtual Studio");
    }
}
