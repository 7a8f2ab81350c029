use super::icons::*;
use crate::dom;
use crate::routes::AppRoute;
use crate::site::{NAV_SCROLL_THRESHOLD_PX, OWNER_FIRST_NAME, OWNER_LAST_NAME};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Whether the page is scrolled far enough to condense the navbar.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "site-header scrolled" } else { "site-header" }
}

fn nav_link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

fn route_icon(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Home => ICON_HOME,
        AppRoute::About => ICON_USER,
        AppRoute::Projects => ICON_FOLDER,
        AppRoute::TechStack => ICON_CODE,
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let initial = match dom::scroll_offset() {
        Ok(y) => is_scrolled(y),
        Err(err) => {
            log::warn!("[nav] cannot read scroll offset: {err}");
            false
        }
    };
    let (scrolled, set_scrolled) = signal(initial);

    let handle = window_event_listener(leptos::ev::scroll, move |_| match dom::scroll_offset() {
        Ok(y) => set_scrolled.set(is_scrolled(y)),
        Err(err) => log::warn!("[nav] cannot read scroll offset: {err}"),
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class=move || header_class(scrolled.get())>
            <div class="container header-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-brand-first">{OWNER_FIRST_NAME}</span>
                    " "
                    {OWNER_LAST_NAME}
                </a>
                <nav class="nav-links">
                    {AppRoute::ALL
                        .into_iter()
                        .map(|route| view! { <NavLink route=route /> })
                        .collect_view()}
                </nav>
                <div class="nav-actions">
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(route: AppRoute) -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| location.pathname.with(|path| route.is_active(path)));

    view! {
        <a
            href=route.path()
            class=move || nav_link_class(active.get())
            aria-current=move || active.get().then_some("page")
        >
            <Icon path=route_icon(route) />
            <span class="nav-link-label">{route.label()}</span>
            <Show when=move || active.get()>
                <span class="nav-link-underline"></span>
            </Show>
        </a>
    }
}

/// Colour scheme, applied as the `dark` class on `<html>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    const DARK_CLASS: &'static str = "dark";

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon of the theme the button switches *to*.
    fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => ICON_MOON,
            Theme::Dark => ICON_SUN,
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let initial = match dom::root_has_class(Theme::DARK_CLASS) {
        Ok(true) => Theme::Dark,
        Ok(false) => Theme::Light,
        Err(err) => {
            log::warn!("[theme] cannot read root classes: {err}");
            Theme::Light
        }
    };
    let theme = RwSignal::new(initial);

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        match dom::set_root_class(Theme::DARK_CLASS, next.is_dark()) {
            Ok(()) => {
                log::debug!("[theme] switched to {next:?}");
                theme.set(next);
            }
            Err(err) => log::warn!("[theme] cannot apply {next:?}: {err}"),
        }
    };

    view! {
        <button
            class="theme-toggle"
            on:click=toggle
            aria-label=move || theme.get().toggle_label()
            title=move || theme.get().toggle_label()
        >
            {move || view! { <Icon path=theme.get().toggle_icon() size="18" /> }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_condenses_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
        assert!(is_scrolled(800.0));
    }

    #[test]
    fn header_and_link_classes() {
        assert_eq!(header_class(false), "site-header");
        assert_eq!(header_class(true), "site-header scrolled");
        assert_eq!(nav_link_class(true), "nav-link active");
        assert_eq!(nav_link_class(false), "nav-link");
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_icon(), ICON_MOON);
        assert_eq!(Theme::Dark.toggle_icon(), ICON_SUN);
    }

    #[test]
    fn every_route_has_a_distinct_icon() {
        let mut icons: Vec<_> = AppRoute::ALL.into_iter().map(route_icon).collect();
        icons.sort_unstable();
        icons.dedup();
        assert_eq!(icons.len(), AppRoute::ALL.len());
    }
}
