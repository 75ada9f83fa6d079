//! Static content of the secondary pages.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShowcaseTab {
    #[default]
    Engineer,
    Chef,
}

impl ShowcaseTab {
    pub const ALL: [Self; 2] = [Self::Engineer, Self::Chef];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Engineer => "💡 Engineer",
            Self::Chef => "🍳 Chef",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCardVm {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub href: Option<&'static str>,
    /// Video played in the demo modal.
    pub demo: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoVm {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLinkVm {
    pub label: &'static str,
    pub href: &'static str,
}

pub const ENGINEER_PROJECTS: [ProjectCardVm; 2] = [
    ProjectCardVm {
        title: "NC EMPT Testing Platform",
        blurb: "I served as a software engineer on a real-time math placement platform used \
                across North Carolina. Built to be reliable under load and simple for students \
                and staff.",
        tags: &["Full-stack", "Real-time", "Education"],
        href: Some("https://ncempt.org"),
        demo: Some("/ncempt-demo.mp4"),
    },
    ProjectCardVm {
        title: "Restaurant Inventory & Ordering System",
        blurb: "I solved food-cost issues by digitizing inventory and par-based ordering, \
                helping create an effective workplace without trading labor costs for food \
                costs.",
        tags: &["Operations", "Cost Control", "Inventory"],
        href: None,
        demo: None,
    },
];

pub const CHEF_TAGLINE: &str = "Some people write with code. I write with garlic.";

pub const DISHES: [PhotoVm; 5] = [
    PhotoVm { src: "/alfajores.png", alt: "Alfajores", caption: "Alfajores" },
    PhotoVm { src: "/potpie.jpg", alt: "Chicken Pot Pie", caption: "Chicken Pot Pie" },
    PhotoVm {
        src: "/villaluz.jpg",
        alt: "The Villaluz Sandwich",
        caption: "The Villaluz Sandwich",
    },
    PhotoVm { src: "/pasta.jpg", alt: "Steak & Pappardelle", caption: "Steak & Pappardelle" },
    PhotoVm { src: "/chowder.jpg", alt: "Dill Chowder", caption: "Dill Chowder" },
];

pub const CONTACT_EMAIL: ContactLinkVm = ContactLinkVm {
    label: "Email Me",
    href: "mailto:ryanjoshvillaluz@gmail.com",
};

pub const SOCIAL_LINKS: [ContactLinkVm; 2] = [
    ContactLinkVm {
        label: "github.com/villaluzr20",
        href: "https://github.com/villaluzr20",
    },
    ContactLinkVm {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ryan-josh-villaluz-10a812170/?skipRedirect=true",
    },
];

pub const RESUME_DOCUMENT: &str = "/resume.pdf#view=fitH";
