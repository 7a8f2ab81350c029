// About page - biography, profile card, timeline
use crate::content::{BIOGRAPHY, FactIcon, PROFILE_FACTS, TIMELINE, TimelineEntry, TimelineKind};
use crate::routes::AppRoute;
use crate::sections::*;
use crate::site::OWNER_NAME;
use leptos::prelude::*;
use leptos_meta::Title;

fn fact_icon(icon: FactIcon) -> &'static str {
    match icon {
        FactIcon::User => ICON_USER,
        FactIcon::Mail => ICON_MAIL,
        FactIcon::MapPin => ICON_MAP_PIN,
        FactIcon::Award => ICON_AWARD,
    }
}

fn timeline_icon(kind: TimelineKind) -> &'static str {
    match kind {
        TimelineKind::Work => ICON_CLOCK,
        TimelineKind::Education => ICON_BOOK_OPEN,
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::About.title() />
        <main class="page">
            <div class="container narrow">
                <PageHeader
                    eyebrow="About Me"
                    title=OWNER_NAME
                    description="UI/UX Designer with a passion for creating intuitive and engaging digital experiences"
                />

                <div class="about-grid">
                    <div class="about-bio animate-fade-in" style="animation-delay: 200ms">
                        {BIOGRAPHY.iter().map(|p| view! { <p class="lead">{*p}</p> }).collect_view()}
                    </div>

                    <div class="glass card about-facts animate-fade-in" style="animation-delay: 400ms">
                        {PROFILE_FACTS
                            .iter()
                            .map(|fact| {
                                view! {
                                    <div class="fact">
                                        <Icon path=fact_icon(fact.icon) size="20" class="accent" />
                                        <div>
                                            <div class="fact-label">{fact.label}</div>
                                            <div class="fact-value">{fact.value}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <section class="timeline-section animate-fade-in" style="animation-delay: 600ms">
                    <h2 class="section-title">"Experience & Education"</h2>
                    <div class="timeline">
                        {TIMELINE.iter().map(|entry| view! { <TimelineItem entry=entry /> }).collect_view()}
                    </div>
                </section>

                <section class="cta animate-fade-in" style="animation-delay: 800ms">
                    <h2 class="section-title">"Let's Work Together"</h2>
                    <p class="cta-description">
                        "I'm always looking for new challenges and opportunities to create meaningful design solutions."
                    </p>
                    <div class="cta-actions">
                        <a href=AppRoute::Projects.path() class="btn btn-primary btn-lg">
                            "View My Projects"
                        </a>
                        <a href=AppRoute::TechStack.path() class="btn btn-outline btn-lg">
                            "Explore My Tech Stack"
                        </a>
                    </div>
                </section>
            </div>
        </main>
    }
}

#[component]
fn TimelineItem(entry: &'static TimelineEntry) -> impl IntoView {
    let marker = if entry.current { "timeline-marker current" } else { "timeline-marker" };

    view! {
        <div class="timeline-item">
            <span class=marker></span>
            <div class="timeline-period">
                <Icon path=timeline_icon(entry.kind) class="muted" />
                <span class="muted small">{entry.period}</span>
            </div>
            <h3 class="card-title">{entry.role}</h3>
            <p class="muted">{entry.organisation}</p>
            <p class="timeline-summary">{entry.summary}</p>
        </div>
    }
}
