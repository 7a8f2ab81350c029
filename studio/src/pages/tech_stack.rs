// Tech stack page - filterable toolkit + design process
use crate::content::{PROCESS_STEPS, TOOLS, Tool, ToolCategory};
use crate::filter::{Category, CategoryFilter};
use crate::routes::AppRoute;
use crate::sections::*;
use crate::site::mailto;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn TechStackPage() -> impl IntoView {
    let selected = RwSignal::new(CategoryFilter::<ToolCategory>::All);
    let options = CategoryFilter::<ToolCategory>::every_option();
    let step_count = PROCESS_STEPS.len();

    view! {
        <Title text=AppRoute::TechStack.title() />
        <main class="page">
            <div class="container">
                <PageHeader
                    eyebrow="My Toolkit"
                    title="Tech & Design Stack"
                    description="The tools and technologies I use to bring ideas to life"
                />

                <FilterBar options=options selected=selected />

                <div class="card-grid">
                    {move || {
                        selected
                            .get()
                            .apply(TOOLS)
                            .into_iter()
                            .enumerate()
                            .map(|(index, tool)| view! { <ToolCard tool=tool index=index /> })
                            .collect_view()
                    }}
                </div>

                <section class="glass card process animate-fade-in" style="animation-delay: 800ms">
                    <h2 class="section-title">"Design Process"</h2>
                    <div class="process-grid">
                        {PROCESS_STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, step)| {
                                view! {
                                    <div class="process-step">
                                        <div class="process-number">{step.step}</div>
                                        <h3 class="card-title">{step.title}</h3>
                                        <p class="muted">{step.description}</p>
                                        {has_connector(i, step_count)
                                            .then(|| view! { <span class="process-connector"></span> })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="cta animate-fade-in" style="animation-delay: 1000ms">
                    <h2 class="section-title">"Looking to Start a Project?"</h2>
                    <p class="cta-description">
                        "With my technical skillset and design expertise, I can help bring your ideas to life."
                    </p>
                    <div class="cta-actions">
                        <a href=AppRoute::Projects.path() class="btn btn-primary btn-lg">
                            "View My Projects"
                            <Icon path=ICON_CHEVRON_RIGHT class="btn-icon-right" />
                        </a>
                        <a href=mailto() class="btn btn-outline btn-lg">
                            "Get In Touch"
                            <Icon path=ICON_EXTERNAL_LINK class="btn-icon-right" />
                        </a>
                    </div>
                </section>
            </div>
        </main>
    }
}

/// Every step but the last links to the next one.
fn has_connector(index: usize, step_count: usize) -> bool {
    index + 1 < step_count
}

#[component]
fn ToolCard(tool: &'static Tool, index: usize) -> impl IntoView {
    view! {
        <article class="glass card tool-card animate-fade-in" style=stagger("animation-delay", 300, index)>
            <div class="tool-head">
                <div class="tool-icon">{tool.icon}</div>
                <div>
                    <h3 class="tool-name">{tool.name}</h3>
                    <span class="muted small">{tool.category.label()}</span>
                </div>
            </div>
            <p class="muted">{tool.description}</p>
            <div class="proficiency">
                <div class="proficiency-row">
                    <span class="small strong">"Proficiency"</span>
                    <span class="small strong">{tool.proficiency.label()}</span>
                </div>
                <div
                    class="proficiency-track"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=tool.proficiency.percent().to_string()
                >
                    <div
                        class="proficiency-fill"
                        style=format!(
                            "{}; {}",
                            tool.proficiency.width_style(),
                            stagger("transition-delay", 500, index),
                        )
                    ></div>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectors_between_steps_only() {
        assert!(has_connector(0, 4));
        assert!(has_connector(2, 4));
        assert!(!has_connector(3, 4));
    }

    #[test]
    fn empty_process_has_no_connector() {
        assert!(!has_connector(0, 0));
    }
}
