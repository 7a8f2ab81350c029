//! Design and development toolkit.

use crate::filter::{Categorized, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    Design,
    Prototyping,
    Development,
    Other,
}

impl Category for ToolCategory {
    const ALL: &'static [Self] = &[
        ToolCategory::Design,
        ToolCategory::Prototyping,
        ToolCategory::Development,
        ToolCategory::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            ToolCategory::Design => "Design",
            ToolCategory::Prototyping => "Prototyping",
            ToolCategory::Development => "Development",
            ToolCategory::Other => "Other",
        }
    }
}

/// Skill level as a percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MAX: u8 = 100;

    /// Saturates at 100.
    pub const fn new(percent: u8) -> Self {
        if percent > Self::MAX {
            Proficiency(Self::MAX)
        } else {
            Proficiency(percent)
        }
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Text next to the bar, e.g. `95%`.
    pub fn label(self) -> String {
        format!("{}%", self.0)
    }

    /// Inline style for the bar fill.
    pub fn width_style(self) -> String {
        format!("width: {}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub category: ToolCategory,
    pub icon: &'static str,
    pub description: &'static str,
    pub proficiency: Proficiency,
}

impl Categorized for Tool {
    type Category = ToolCategory;

    fn category(&self) -> ToolCategory {
        self.category
    }
}

pub static TOOLS: &[Tool] = &[
    Tool {
        name: "Figma",
        category: ToolCategory::Design,
        icon: "F",
        description: "My primary tool for UI design, prototyping, and design systems.",
        proficiency: Proficiency::new(95),
    },
    Tool {
        name: "Adobe XD",
        category: ToolCategory::Design,
        icon: "XD",
        description: "Used for UI/UX design, wireframing, and interactive prototypes.",
        proficiency: Proficiency::new(90),
    },
    Tool {
        name: "Photoshop",
        category: ToolCategory::Design,
        icon: "PS",
        description: "Image editing, manipulation, and compositing.",
        proficiency: Proficiency::new(85),
    },
    Tool {
        name: "Illustrator",
        category: ToolCategory::Design,
        icon: "AI",
        description: "Vector graphics and illustrations for UI elements and logos.",
        proficiency: Proficiency::new(80),
    },
    Tool {
        name: "Sketch",
        category: ToolCategory::Design,
        icon: "SK",
        description: "Interface design for web and mobile applications.",
        proficiency: Proficiency::new(75),
    },
    Tool {
        name: "InVision",
        category: ToolCategory::Prototyping,
        icon: "IV",
        description: "Creating interactive prototypes and collecting feedback.",
        proficiency: Proficiency::new(85),
    },
    Tool {
        name: "Principle",
        category: ToolCategory::Prototyping,
        icon: "PR",
        description: "Advanced animations and interactive user interfaces.",
        proficiency: Proficiency::new(70),
    },
    Tool {
        name: "Framer",
        category: ToolCategory::Prototyping,
        icon: "FM",
        description: "High-fidelity interactive prototypes with advanced animations.",
        proficiency: Proficiency::new(75),
    },
    Tool {
        name: "HTML/CSS",
        category: ToolCategory::Development,
        icon: "</>",
        description: "Frontend development and implementation of designs.",
        proficiency: Proficiency::new(80),
    },
    Tool {
        name: "JavaScript",
        category: ToolCategory::Development,
        icon: "JS",
        description: "Creating interactive elements and functionality.",
        proficiency: Proficiency::new(65),
    },
    Tool {
        name: "React",
        category: ToolCategory::Development,
        icon: "⚛️",
        description: "Building user interfaces for web applications.",
        proficiency: Proficiency::new(60),
    },
    Tool {
        name: "Miro",
        category: ToolCategory::Other,
        icon: "M",
        description: "Collaborative whiteboarding and UX flow mapping.",
        proficiency: Proficiency::new(85),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use pretty_assertions::assert_eq;

    #[test]
    fn proficiency_saturates_at_100() {
        assert_eq!(Proficiency::new(0).percent(), 0);
        assert_eq!(Proficiency::new(100).percent(), 100);
        assert_eq!(Proficiency::new(101).percent(), 100);
        assert_eq!(Proficiency::new(u8::MAX).percent(), 100);
    }

    #[test]
    fn every_tool_renders_width_equal_to_its_proficiency() {
        for tool in TOOLS {
            let p = tool.proficiency.percent();
            assert!(p <= 100, "{} out of range", tool.name);
            assert_eq!(tool.proficiency.width_style(), format!("width: {p}%"));
            assert_eq!(tool.proficiency.label(), format!("{p}%"));
        }
    }

    #[test]
    fn tool_names_are_unique() {
        let mut names: Vec<_> = TOOLS.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TOOLS.len());
    }

    #[test]
    fn filter_bar_lists_fixed_categories() {
        let labels: Vec<_> = CategoryFilter::<ToolCategory>::every_option()
            .into_iter()
            .map(CategoryFilter::label)
            .collect();
        assert_eq!(
            labels,
            vec!["All", "Design", "Prototyping", "Development", "Other"]
        );
    }

    #[test]
    fn prototyping_filter_selects_exact_matches() {
        let names: Vec<_> = CategoryFilter::Only(ToolCategory::Prototyping)
            .apply(TOOLS)
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["InVision", "Principle", "Framer"]);
    }

    #[test]
    fn all_filter_keeps_every_tool() {
        assert_eq!(CategoryFilter::All.apply(TOOLS).len(), TOOLS.len());
    }
}
