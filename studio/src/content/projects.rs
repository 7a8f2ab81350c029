//! Project gallery entries.

use crate::filter::{Categorized, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    UiDesign,
    UxResearch,
    UiUx,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[
        ProjectCategory::UiDesign,
        ProjectCategory::UxResearch,
        ProjectCategory::UiUx,
    ];

    fn label(self) -> &'static str {
        match self {
            ProjectCategory::UiDesign => "UI Design",
            ProjectCategory::UxResearch => "UX Research",
            ProjectCategory::UiUx => "UI/UX",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub image_path: &'static str,
    pub link: &'static str,
    pub year: &'static str,
}

impl Categorized for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }
}

impl Project {
    /// Meta line above the card title, e.g. `UI Design • 2023`.
    pub fn meta_line(&self) -> String {
        format!("{} • {}", self.category.label(), self.year)
    }
}

const COVER: &str = "/assets/project-cover.svg";

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Redesign of Financial App",
        category: ProjectCategory::UiDesign,
        description: "A complete redesign of a financial management application focusing on simplifying complex data visualization and improving user navigation.",
        image_path: COVER,
        link: "#",
        year: "2023",
    },
    Project {
        id: 2,
        title: "E-commerce User Experience",
        category: ProjectCategory::UxResearch,
        description: "In-depth UX research and redesign for an e-commerce platform, increasing conversion rates and improving overall customer satisfaction.",
        image_path: COVER,
        link: "#",
        year: "2022",
    },
    Project {
        id: 3,
        title: "Healthcare Portal",
        category: ProjectCategory::UiUx,
        description: "Design of a patient-centered healthcare portal that simplifies appointment scheduling and access to medical records.",
        image_path: COVER,
        link: "#",
        year: "2022",
    },
    Project {
        id: 4,
        title: "Travel App Concept",
        category: ProjectCategory::UiDesign,
        description: "Conceptual design for a travel planning application with focus on visual appeal and intuitive itinerary management.",
        image_path: COVER,
        link: "#",
        year: "2021",
    },
    Project {
        id: 5,
        title: "Music Streaming Redesign",
        category: ProjectCategory::UiUx,
        description: "Redesign of a music streaming service interface with improved content discovery and personalization features.",
        image_path: COVER,
        link: "#",
        year: "2021",
    },
    Project {
        id: 6,
        title: "Productivity Tool",
        category: ProjectCategory::UxResearch,
        description: "User research and interface design for a productivity application focused on task management and time tracking.",
        image_path: COVER,
        link: "#",
        year: "2020",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn filter_options_follow_first_appearance() {
        let labels: Vec<_> = CategoryFilter::options_for(PROJECTS)
            .into_iter()
            .map(CategoryFilter::label)
            .collect();
        assert_eq!(labels, vec!["All", "UI Design", "UX Research", "UI/UX"]);
    }

    #[test]
    fn ui_design_filter_selects_exact_matches() {
        let titles: Vec<_> = CategoryFilter::Only(ProjectCategory::UiDesign)
            .apply(PROJECTS)
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Redesign of Financial App", "Travel App Concept"]);
    }

    #[test]
    fn every_category_filter_partitions_the_gallery() {
        let total: usize = ProjectCategory::ALL
            .iter()
            .map(|c| CategoryFilter::Only(*c).apply(PROJECTS).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
        assert_eq!(CategoryFilter::All.apply(PROJECTS).len(), PROJECTS.len());
    }

    #[test]
    fn meta_line_joins_category_and_year() {
        assert_eq!(PROJECTS[2].meta_line(), "UI/UX • 2022");
    }
}
