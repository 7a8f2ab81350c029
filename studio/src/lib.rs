//! # Lyndon's Virtual Studio
//!
//! Personal portfolio site rendered client-side with
//! [Leptos](https://leptos.dev/) 0.8 and compiled to WebAssembly.
//!
//! ## Routes
//!
//! | Path          | Page            |
//! |---------------|-----------------|
//! | `/`           | [`pages::HomePage`] |
//! | `/about`      | [`pages::AboutPage`] |
//! | `/projects`   | [`pages::ProjectsPage`] |
//! | `/tech-stack` | [`pages::TechStackPage`] |
//! | anything else | [`pages::NotFound`] |
//!
//! ## Architecture
//!
//! - [`content`] - hard-coded projects, tools and biography
//! - [`filter`] - category filter shared by the gallery and the toolkit
//! - [`routes`] - route table, navbar order and page titles
//! - [`sections`] - navbar, custom cursor and page building blocks
//! - [`pages`] - route-level components
//! - [`dom`] / [`error`] - fallible browser access
//! - [`site`] - names, contact and layout thresholds
//!
//! Presentation logic (filtering, active links, cursor classes, tilt) is
//! kept in plain functions so it is unit-tested natively, without a
//! browser.
//!
//! ---
//!
//! Developed by Lyndon Domini Catan (c)2025

pub mod content;
pub mod dom;
pub mod error;
pub mod filter;
pub mod pages;
pub mod routes;
pub mod sections;
pub mod site;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::*;
use sections::{CURSOR_ROOT_CLASS, CustomCursor, Navbar};

/// Application shell: title, router, navbar, cursor and the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Decided once at start-up; resizing does not toggle it.
    let cursor_enabled = match dom::viewport_width() {
        Ok(width) => site::is_desktop_width(width),
        Err(err) => {
            log::warn!("[app] cannot read viewport width: {err}");
            false
        }
    };
    log::debug!("[app] custom cursor enabled: {cursor_enabled}");
    // The native cursor is hidden by this class, never by a media query, so
    // it stays visible whenever the custom one is not mounted.
    if cursor_enabled {
        if let Err(err) = dom::set_root_class(CURSOR_ROOT_CLASS, true) {
            log::warn!("[app] cannot hide native cursor: {err}");
        }
    }

    view! {
        <Title text=site::SITE_TITLE />
        <Router>
            <Navbar />
            {cursor_enabled.then(|| view! { <CustomCursor /> })}
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/projects") view=ProjectsPage />
                <Route path=path!("/tech-stack") view=TechStackPage />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::routes::AppRoute;
    use super::sections::CURSOR_ROOT_CLASS;

    const STYLESHEET: &str = include_str!("../style/main.css");

    #[test]
    fn native_cursor_is_hidden_only_with_root_class() {
        let scoped = format!("html.{CURSOR_ROOT_CLASS} body {{ cursor: none; }}");
        assert!(STYLESHEET.contains(&scoped));
        for line in STYLESHEET.lines() {
            if line.contains("cursor: none") {
                assert!(line.contains(&format!("html.{CURSOR_ROOT_CLASS}")), "{line}");
            }
        }
    }

    #[test]
    fn route_table_matches_registered_routes() {
        let paths: Vec<_> = AppRoute::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths, vec!["/", "/about", "/projects", "/tech-stack"]);
    }
}
