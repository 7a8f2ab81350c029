//! Biography, profile facts, timeline and the smaller content blocks.

use crate::site::{CONTACT_EMAIL, OWNER_NAME, OWNER_ROLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Work,
    Education,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub organisation: &'static str,
    pub summary: &'static str,
    pub kind: TimelineKind,
    /// Current position, drawn with the accent marker.
    pub current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactIcon {
    User,
    Mail,
    MapPin,
    Award,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFact {
    pub icon: FactIcon,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static BIOGRAPHY: &[&str] = &[
    "I'm a UI/UX designer focused on creating digital products that are both beautiful and functional. With a background in visual design and user research, I strive to create experiences that not only look great but also solve real problems for users.",
    "My approach combines aesthetic sensibility with a deep understanding of user needs. I believe that great design should be invisible, enabling users to accomplish their goals without friction or confusion.",
    "When I'm not designing, you can find me exploring new design trends, learning new techniques, or seeking inspiration from the world around me.",
];

pub static PROFILE_FACTS: &[ProfileFact] = &[
    ProfileFact { icon: FactIcon::User, label: "Name", value: OWNER_NAME },
    ProfileFact { icon: FactIcon::Mail, label: "Email", value: CONTACT_EMAIL },
    ProfileFact { icon: FactIcon::MapPin, label: "Location", value: "Metro Manila, Marikina City" },
    ProfileFact { icon: FactIcon::Award, label: "Specialization", value: "UI/UX Design" },
];

pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2022 - Present",
        role: OWNER_ROLE,
        organisation: "Digital Innovation Agency",
        summary: "Responsible for research, wireframing, prototyping, and design system development.",
        kind: TimelineKind::Work,
        current: true,
    },
    TimelineEntry {
        period: "2022 - 2023",
        role: "UI Designer",
        organisation: "Creative",
        summary: "Designed user interfaces for web and mobile applications. Collaborated with development teams to ensure design implementation.",
        kind: TimelineKind::Work,
        current: false,
    },
    TimelineEntry {
        period: "2023 - 2024",
        role: "Continuing Education",
        organisation: "Ongoing",
        summary: "Self-directed study in interaction design and front-end development.",
        kind: TimelineKind::Education,
        current: false,
    },
];

pub static HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "UI Design",
        description: "Creating intuitive visual interfaces with careful attention to every detail.",
    },
    Highlight {
        title: "UX Research",
        description: "Understanding user needs and behaviors to inform meaningful design decisions.",
    },
    Highlight {
        title: "Interaction",
        description: "Crafting seamless interactions that delight users and enhance functionality.",
    },
];

pub static PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Research",
        description: "Understanding user needs, business goals, and industry context.",
    },
    ProcessStep {
        step: "02",
        title: "Ideation",
        description: "Exploring concepts, brainstorming solutions, and sketching ideas.",
    },
    ProcessStep {
        step: "03",
        title: "Prototyping",
        description: "Creating wireframes, mockups, and interactive prototypes.",
    },
    ProcessStep {
        step: "04",
        title: "Testing",
        description: "User testing, gathering feedback, and iterating on designs.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_current_position() {
        assert_eq!(TIMELINE.iter().filter(|e| e.current).count(), 1);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.step, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn profile_email_is_contact_address() {
        let email = PROFILE_FACTS.iter().find(|f| f.label == "Email");
        assert_eq!(email.map(|f| f.value), Some(CONTACT_EMAIL));
    }
}
