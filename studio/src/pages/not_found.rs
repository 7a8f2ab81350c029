// 404 page - router fallback
use crate::routes::{not_found_message, not_found_title};
use crate::sections::*;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

/// Fallback for unregistered paths. The address bar keeps the attempted
/// path; it is only logged.
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        log::error!("{}", location.pathname.with(|path| not_found_message(path)));
    });

    view! {
        <Title text=not_found_title() />
        <main class="not-found">
            <div class="not-found-inner animate-fade-in">
                <div class="not-found-code">"404"</div>
                <h1 class="not-found-title">"Page not found"</h1>
                <p class="muted">"The page you are looking for doesn't exist or has been moved."</p>
                <a href="/" class="btn btn-primary btn-lg return-home">
                    <Icon path=ICON_ARROW_LEFT class="btn-icon-left" />
                    "Return Home"
                </a>
            </div>
        </main>
    }
}
