// Route-level pages
// Developed by Lyndon Domini Catan (c)2025

mod about;
mod home;
mod not_found;
mod projects;
mod tech_stack;

pub use about::AboutPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use projects::ProjectsPage;
pub use tech_stack::TechStackPage;
