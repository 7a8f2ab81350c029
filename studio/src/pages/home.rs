// Home page - animated hero with pointer tilt + highlights
use crate::content::HIGHLIGHTS;
use crate::dom;
use crate::routes::AppRoute;
use crate::sections::*;
use crate::site::{HERO_TILT_DEGREES, OWNER_NAME, OWNER_ROLE, is_desktop_width};
use leptos::html::Div;
use leptos::prelude::*;
use leptos_meta::Title;

/// Transform of the hero when the pointer is not over it.
pub const RESTING_TRANSFORM: &str =
    "perspective(1000px) rotateY(0deg) rotateX(0deg) translateZ(0px)";

/// Client-space box of the hero container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer offset from the box centre, normalised to `-0.5..=0.5`.
/// Degenerate boxes count as centred.
fn offset(pointer: f64, start: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        (pointer - start) / extent - 0.5
    } else {
        0.0
    }
}

/// Perspective tilt following the pointer across the hero.
pub fn tilt_transform(client_x: f64, client_y: f64, bounds: Bounds) -> String {
    let x = offset(client_x, bounds.left, bounds.width);
    let y = offset(client_y, bounds.top, bounds.height);
    // + 0.0 folds -0.0 so a centred pointer prints as 0.00
    let rotate_y = x * HERO_TILT_DEGREES + 0.0;
    let rotate_x = -y * HERO_TILT_DEGREES + 0.0;
    format!(
        "perspective(1000px) rotateY({rotate_y:.2}deg) rotateX({rotate_x:.2}deg) translateZ(10px)"
    )
}

#[component]
pub fn HomePage() -> impl IntoView {
    let tilt_enabled = match dom::viewport_width() {
        Ok(width) => is_desktop_width(width),
        Err(err) => {
            log::warn!("[home] cannot read viewport width: {err}");
            false
        }
    };
    let hero_ref: NodeRef<Div> = NodeRef::new();
    let transform = RwSignal::new(RESTING_TRANSFORM.to_string());

    let on_move = move |ev: web_sys::MouseEvent| {
        if !tilt_enabled {
            return;
        }
        let Some(hero) = hero_ref.get() else { return };
        let rect = hero.get_bounding_client_rect();
        let bounds = Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        transform.set(tilt_transform(ev.client_x() as f64, ev.client_y() as f64, bounds));
    };
    let on_leave = move |_| transform.set(RESTING_TRANSFORM.to_string());

    let scroll_down = move |_| {
        if let Err(err) = dom::scroll_one_viewport() {
            log::warn!("[home] smooth scroll failed: {err}");
        }
    };

    view! {
        <Title text=AppRoute::Home.title() />
        <main class="home">
            <section class="hero">
                <div
                    class="hero-inner"
                    node_ref=hero_ref
                    on:mousemove=on_move
                    on:mouseleave=on_leave
                    style:transform=move || transform.get()
                >
                    <div class="hero-badge animate-fade-in" style="animation-delay: 200ms">
                        <span class="hero-badge-icon">
                            <Icon path=ICON_POINTER size="20" />
                        </span>
                        <span class="hero-badge-text">{OWNER_ROLE}</span>
                    </div>
                    <h1 class="hero-title">
                        <div class="reveal-line">
                            <span class="animate-text-reveal" style="animation-delay: 400ms">
                                {format!("Hi, I'm {OWNER_NAME}")}
                            </span>
                        </div>
                        <div class="reveal-line">
                            <span class="animate-text-reveal hero-title-accent" style="animation-delay: 600ms">
                                "Creating Interactive Experiences"
                            </span>
                        </div>
                    </h1>
                    <p class="hero-description animate-fade-in" style="animation-delay: 800ms">
                        "I craft intuitive digital experiences through thoughtful UI/UX design, "
                        "focusing on clean aesthetics and seamless interactions."
                    </p>
                    <div class="hero-actions animate-fade-in" style="animation-delay: 1000ms">
                        <a href=AppRoute::Projects.path() class="btn btn-primary btn-lg">
                            "Explore Projects"
                            <Icon path=ICON_CHEVRON_RIGHT class="btn-icon-right" />
                        </a>
                        <a href=AppRoute::About.path() class="btn btn-outline btn-lg">
                            "Learn More About Me"
                        </a>
                    </div>
                </div>
            </section>

            <div class="scroll-hint animate-fade-in" style="animation-delay: 1200ms">
                <button class="btn btn-ghost scroll-down animate-pulse-slow" on:click=scroll_down>
                    <span class="muted">"Scroll Down"</span>
                    <Icon path=ICON_ARROW_DOWN />
                </button>
            </div>

            <section class="highlights">
                <div class="container narrow">
                    <h2 class="highlights-title">
                        "Creating "
                        <span class="accent">"Human-Centered"</span>
                        " Digital Experiences"
                    </h2>
                    <p class="highlights-description">
                        "I believe that great design goes beyond aesthetics—it solves real problems "
                        "and creates meaningful connections between people and technology."
                    </p>
                    <div class="highlights-grid">
                        {HIGHLIGHTS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="glass card">
                                        <h3 class="card-title">{item.title}</h3>
                                        <p class="muted">{item.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Bounds = Bounds { left: 100.0, top: 50.0, width: 200.0, height: 100.0 };

    #[test]
    fn centred_pointer_is_neutral() {
        assert_eq!(
            tilt_transform(200.0, 100.0, BOX),
            "perspective(1000px) rotateY(0.00deg) rotateX(0.00deg) translateZ(10px)"
        );
    }

    #[test]
    fn pointer_in_lower_right_quadrant() {
        // x = 0.25, y = 0.25 -> rotateY 0.75, rotateX -0.75
        assert_eq!(
            tilt_transform(250.0, 125.0, BOX),
            "perspective(1000px) rotateY(0.75deg) rotateX(-0.75deg) translateZ(10px)"
        );
    }

    #[test]
    fn corners_reach_half_the_tilt() {
        assert_eq!(
            tilt_transform(100.0, 50.0, BOX),
            "perspective(1000px) rotateY(-1.50deg) rotateX(1.50deg) translateZ(10px)"
        );
    }

    #[test]
    fn zero_sized_box_never_divides_by_zero() {
        let empty = Bounds { width: 0.0, height: 0.0, ..BOX };
        assert_eq!(
            tilt_transform(999.0, -3.0, empty),
            "perspective(1000px) rotateY(0.00deg) rotateX(0.00deg) translateZ(10px)"
        );
    }
}
