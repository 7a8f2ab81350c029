use leptos::prelude::*;

/// Eyebrow line, title and lead paragraph at the top of an inner page.
#[component]
pub fn PageHeader(
    eyebrow: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="page-header animate-fade-in">
            <div class="page-eyebrow">
                <span class="page-eyebrow-bar"></span>
                <span class="page-eyebrow-text">{eyebrow}</span>
            </div>
            <h1 class="page-title">{title}</h1>
            <p class="page-description">{description}</p>
        </div>
    }
}
