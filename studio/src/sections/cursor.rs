//! Custom animated cursor: a small dot plus a trailing ring that react to
//! links, presses and the pointer leaving the page.

use crate::dom;
use leptos::prelude::*;

/// Class put on `<html>` while the custom cursor replaces the native one.
pub const CURSOR_ROOT_CLASS: &str = "custom-cursor";

/// Everything the two cursor layers render from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    pub x: i32,
    pub y: i32,
    /// Pointer is over something with `cursor: pointer`.
    pub over_pointer: bool,
    pub clicking: bool,
    pub hidden: bool,
}

impl CursorState {
    fn emphasized(&self) -> bool {
        self.over_pointer || self.clicking
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }

    pub fn layer_class(&self) -> &'static str {
        if self.hidden { "cursor-layer hidden" } else { "cursor-layer" }
    }

    /// Dot grows and softens while emphasized.
    pub fn dot_class(&self) -> &'static str {
        if self.emphasized() { "cursor-dot emphasized" } else { "cursor-dot" }
    }

    /// Ring shrinks and fades out while emphasized.
    pub fn ring_class(&self) -> &'static str {
        if self.emphasized() { "cursor-ring emphasized" } else { "cursor-ring" }
    }
}

/// Interactive elements advertise themselves through the computed cursor.
pub fn is_pointer_style(cursor: Option<&str>) -> bool {
    cursor.is_some_and(|value| value.trim() == "pointer")
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let state = RwSignal::new(CursorState::default());

    let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
        let (x, y) = (ev.client_x(), ev.client_y());
        let over_pointer = match dom::cursor_style_at(x, y) {
            Ok(style) => is_pointer_style(style.as_deref()),
            Err(err) => {
                log::warn!("[cursor] cannot inspect element under pointer: {err}");
                state.with_untracked(|s| s.over_pointer)
            }
        };
        state.update(|s| {
            s.x = x;
            s.y = y;
            s.over_pointer = over_pointer;
        });
    });
    let on_down = window_event_listener(leptos::ev::mousedown, move |_| {
        state.update(|s| s.clicking = true);
    });
    let on_up = window_event_listener(leptos::ev::mouseup, move |_| {
        state.update(|s| s.clicking = false);
    });
    on_cleanup(move || {
        on_move.remove();
        on_down.remove();
        on_up.remove();
    });

    // mouseleave/mouseenter do not reach the window, listen on <html>.
    for (event, hidden) in [("mouseleave", true), ("mouseenter", false)] {
        if let Err(err) = dom::listen_on_root(event, move |_| state.update(|s| s.hidden = hidden)) {
            log::warn!("[cursor] cannot listen for {event}: {err}");
        }
    }

    view! {
        <div
            class=move || state.with(|s| format!("{} cursor-dot-layer", s.layer_class()))
            style:transform=move || state.with(CursorState::transform)
        >
            <div class=move || state.with(CursorState::dot_class)></div>
        </div>
        <div
            class=move || state.with(|s| format!("{} cursor-ring-layer", s.layer_class()))
            style:transform=move || state.with(CursorState::transform)
        >
            <div class=move || state.with(CursorState::ring_class)></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_cursor_is_small_dot_and_wide_ring() {
        let state = CursorState::default();
        assert_eq!(state.dot_class(), "cursor-dot");
        assert_eq!(state.ring_class(), "cursor-ring");
        assert_eq!(state.layer_class(), "cursor-layer");
    }

    #[test]
    fn pointer_or_click_emphasizes() {
        let over = CursorState { over_pointer: true, ..Default::default() };
        let pressed = CursorState { clicking: true, ..Default::default() };
        for state in [over, pressed] {
            assert_eq!(state.dot_class(), "cursor-dot emphasized");
            assert_eq!(state.ring_class(), "cursor-ring emphasized");
        }
    }

    #[test]
    fn hidden_cursor_fades_layers() {
        let state = CursorState { hidden: true, ..Default::default() };
        assert_eq!(state.layer_class(), "cursor-layer hidden");
    }

    #[test]
    fn transform_follows_pointer() {
        let state = CursorState { x: 120, y: -4, ..Default::default() };
        assert_eq!(state.transform(), "translate(120px, -4px)");
    }

    #[test]
    fn pointer_style_detection() {
        assert!(is_pointer_style(Some("pointer")));
        assert!(is_pointer_style(Some(" pointer ")));
        assert!(!is_pointer_style(Some("auto")));
        assert!(!is_pointer_style(Some("")));
        assert!(!is_pointer_style(None));
    }
}
