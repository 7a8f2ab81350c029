// Projects page - filterable gallery
use crate::content::{PROJECTS, Project, ProjectCategory};
use crate::filter::CategoryFilter;
use crate::routes::AppRoute;
use crate::sections::*;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let selected = RwSignal::new(CategoryFilter::<ProjectCategory>::All);
    let options = CategoryFilter::options_for(PROJECTS);

    view! {
        <Title text=AppRoute::Projects.title() />
        <main class="page">
            <div class="container">
                <PageHeader
                    eyebrow="My Work"
                    title="Selected Projects"
                    description="A showcase of my design work across various industries and platforms"
                />

                <FilterBar options=options selected=selected />

                <div class="card-grid">
                    {move || {
                        selected
                            .get()
                            .apply(PROJECTS)
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                            .collect_view()
                    }}
                </div>

                <section class="cta animate-fade-in" style="animation-delay: 800ms">
                    <h2 class="section-title">"Want to Work Together?"</h2>
                    <p class="cta-description">
                        "I'm always open to discussing new projects, creative ideas or opportunities to be part of your vision."
                    </p>
                    <div class="cta-actions">
                        <a href=AppRoute::About.path() class="btn btn-primary btn-lg">
                            "Learn More About Me"
                            <Icon path=ICON_CHEVRON_RIGHT class="btn-icon-right" />
                        </a>
                    </div>
                </section>
            </div>
        </main>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    view! {
        <article
            class="glass project-card animate-fade-in"
            style=stagger("animation-delay", 300, index)
            data-project-id=project.id.to_string()
        >
            <div class="project-cover">
                <img src=project.image_path alt=project.title />
            </div>
            <div class="project-body">
                <span class="project-meta">{project.meta_line()}</span>
                <h3 class="card-title project-title">{project.title}</h3>
                <p class="muted clamp-3">{project.description}</p>
                <a href=project.link target="_blank" rel="noopener noreferrer" class="btn btn-ghost btn-sm">
                    "View Project"
                    <Icon path=ICON_EXTERNAL_LINK size="12" class="btn-icon-right" />
                </a>
            </div>
        </article>
    }
}
