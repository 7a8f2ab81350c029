// Hard-coded site content
// Developed by Lyndon Domini Catan (c)2025

mod profile;
mod projects;
mod tools;

pub use profile::{
    BIOGRAPHY, FactIcon, HIGHLIGHTS, Highlight, PROCESS_STEPS, PROFILE_FACTS, ProcessStep,
    ProfileFact, TIMELINE, TimelineEntry, TimelineKind,
};
pub use projects::{PROJECTS, Project, ProjectCategory};
pub use tools::{Proficiency, TOOLS, Tool, ToolCategory};
