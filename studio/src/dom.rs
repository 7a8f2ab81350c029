//! Thin, fallible wrappers around the web-sys calls the sections need.

use crate::error::{Result, SiteError};
use wasm_bindgen::prelude::*;

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

fn root_element() -> Result<web_sys::Element> {
    document()?.document_element().ok_or(SiteError::NoRootElement)
}

fn as_px(value: JsValue, what: &str) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| SiteError::Js(format!("{what} is not a number")))
}

/// `window.innerWidth`
pub fn viewport_width() -> Result<f64> {
    as_px(window()?.inner_width()?, "innerWidth")
}

/// `window.innerHeight`
pub fn viewport_height() -> Result<f64> {
    as_px(window()?.inner_height()?, "innerHeight")
}

/// `window.scrollY`
pub fn scroll_offset() -> Result<f64> {
    Ok(window()?.scroll_y()?)
}

/// Computed `cursor` style of the topmost element at the given viewport
/// coordinates, or `None` when nothing is under the point.
pub fn cursor_style_at(x: i32, y: i32) -> Result<Option<String>> {
    let Some(target) = document()?.element_from_point(x as f32, y as f32) else {
        return Ok(None);
    };
    let Some(style) = window()?.get_computed_style(&target)? else {
        return Ok(None);
    };
    Ok(Some(style.get_property_value("cursor")?))
}

/// Smooth-scroll the window down to one viewport height.
pub fn scroll_one_viewport() -> Result<()> {
    let height = viewport_height()?;
    let options = web_sys::ScrollToOptions::new();
    options.set_top(height);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Whether `<html>` carries `class`.
pub fn root_has_class(class: &str) -> Result<bool> {
    Ok(root_element()?.class_list().contains(class))
}

/// Force `class` on or off on `<html>`.
pub fn set_root_class(class: &str, on: bool) -> Result<()> {
    root_element()?.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Attach a listener to `<html>` for the lifetime of the page.
///
/// Only for sections mounted once by the shell; the closure is leaked.
pub fn listen_on_root<F>(event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    root_element()?.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Keep the closure alive
    Ok(())
}
