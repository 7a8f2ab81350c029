// Lyndon's Virtual Studio — Leptos 0.8 Edition
// Developed by Lyndon Domini Catan (c)2025

use leptos::prelude::*;
use studio::App;

fn main() {
    console_error_panic_hook::set_once();
    studio::site::init_logging();
    leptos::mount::mount_to_body(|| view! { <App/> });
}
