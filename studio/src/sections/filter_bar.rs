use crate::filter::{Category, CategoryFilter};
use leptos::prelude::*;

/// Row of category buttons; clicking one replaces the selected filter.
#[component]
pub fn FilterBar<C>(
    options: Vec<CategoryFilter<C>>,
    selected: RwSignal<CategoryFilter<C>>,
) -> impl IntoView
where
    C: Category,
{
    view! {
        <div class="filter-bar animate-fade-in" style="animation-delay: 200ms">
            {options
                .into_iter()
                .map(move |option| {
                    view! {
                        <button
                            class=move || filter_btn_class(selected.get() == option)
                            on:click=move |_| selected.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn filter_btn_class(active: bool) -> &'static str {
    if active { "filter-btn active" } else { "filter-btn" }
}

/// Staggered entrance delay for the `index`-th card, e.g. `animation-delay: 500ms`.
pub fn stagger(property: &str, base_ms: u32, index: usize) -> String {
    format!("{property}: {}ms", base_ms as usize + index * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_selected_button_is_active() {
        assert_eq!(filter_btn_class(true), "filter-btn active");
        assert_eq!(filter_btn_class(false), "filter-btn");
    }

    #[test]
    fn stagger_adds_100ms_per_card() {
        assert_eq!(stagger("animation-delay", 300, 0), "animation-delay: 300ms");
        assert_eq!(stagger("animation-delay", 300, 3), "animation-delay: 600ms");
        assert_eq!(stagger("transition-delay", 500, 11), "transition-delay: 1600ms");
    }
}
