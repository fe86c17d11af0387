mod errors;

pub use errors::{Error, Result};

/// Client project categories used by the portfolio filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    WebDevelopment,
    AppDevelopment,
    UiUxDesign,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::WebDevelopment,
        Category::AppDevelopment,
        Category::UiUxDesign,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::WebDevelopment => "Web Development",
            Category::AppDevelopment => "App Development",
            Category::UiUxDesign => "UI/UX Design",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub link: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub category: Category,
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

/// The portfolio, featured work first.
pub const PROJECTS: &[Project] = &[
    Project {
        name: "Classic Team Realty",
        link: "https://classicteamrealty.com",
        image: "/images/classic-realty.png",
        description: "A welcoming online experience helping families effortlessly find their next home.",
        tags: &["Instagram Integration", "Custom Listings Search Bar"],
        category: Category::WebDevelopment,
        featured: true,
    },
    Project {
        name: "Fromm Scratch",
        link: "https://frommscratch.com",
        image: "/images/fromm-scratch.png",
        description: "A warm and inviting baking and lifestyle blog by Caroline Fromm.",
        tags: &["Squarespace", "SEO Optimization", "Responsive Design"],
        category: Category::WebDevelopment,
        featured: true,
    },
    Project {
        name: "Mitch Harris",
        link: "https://mitchharris.com",
        image: "/images/mitch-harris-hero.png",
        description: "An online showcase for Mitch Harris highlighting his journey from Navy veteran to MLB pitcher, speaker, and author, while promoting his bestselling new book.",
        tags: &["Book Promotion", "Booking Form"],
        category: Category::WebDevelopment,
        featured: true,
    },
    Project {
        name: "Friend Group Leader",
        link: "https://apps.apple.com/us/app/friend-group-leader/id6744416226",
        image: "/images/friend-group-leader.png",
        description: "A mobile app for generating comedic group photo insights using custom AI analysis.",
        tags: &["1K+ Users", "$400+ Revenue", "React Native", "Firebase"],
        category: Category::AppDevelopment,
        featured: false,
    },
    Project {
        name: "ROAM Performance",
        link: "https://useroamperformance.com",
        image: "/images/roam-hero.png",
        description: "A sleek, high-converting SaaS landing page that showcases their real-time goal tracking and custom reward platform.",
        tags: &["Next.js", "Framer Motion", "Tailwind CSS"],
        category: Category::WebDevelopment,
        featured: false,
    },
    Project {
        name: "Safeguard Solutions",
        link: "https://safeguard-property.com",
        image: "/images/safeguard-hero.png",
        description: "A clean marketing site for Safeguard Property Solutions highlighting their trusted commercial roofing services.",
        tags: &["Squarespace", "SEO Optimization", "Responsive Design"],
        category: Category::WebDevelopment,
        featured: false,
    },
    Project {
        name: "Drake Contracting",
        link: "https://drakegc.com",
        image: "/images/drakegc.png",
        description: "An SEO-optimized and informative website for Drake General Contracting.",
        tags: &["SEO Optimization", "Responsive Design"],
        category: Category::WebDevelopment,
        featured: false,
    },
    Project {
        name: "CA Autographs",
        link: "https://ca-autographs.com",
        image: "/images/ca-autographs.png",
        description: "A compelling website for sports memorabilia and event-planning company, CA Autographs.",
        tags: &["Social Media Integration", "Custom Shop"],
        category: Category::WebDevelopment,
        featured: false,
    },
    Project {
        name: "Nashville Maps",
        link: "https://motley-stealer-5b1.notion.site/Nashville-TN-Real-Estate-Listing-Maps-2531d8dcfa7e80c69e4de761e4912f41?source=copy_link",
        image: "/images/whitley-maps.png",
        description: "Designed two compelling and informative interactive property maps for Nashville, TN real estate listings.",
        tags: &["Figma"],
        category: Category::UiUxDesign,
        featured: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "His design skills are top-notch—clean, beautiful, and exactly what I envisioned!",
        author: "Caroline O.",
        company: "Fromm Scratch",
        avatar: "/images/fromm-photo.png",
    },
    Testimonial {
        quote: "Aidan created a specific, elaborate and creative map for me...highly recommend!",
        author: "Chandler W.",
        company: "Chandler Whitley Realty",
        avatar: "/images/chandler-whitley.png",
    },
    Testimonial {
        quote: "The site captured my story better than I could have told it myself, and the booking form started filling up within the first week of launch.",
        author: "Mitch H.",
        company: "MitchHarris.com",
        avatar: "/images/mitch-harris.png",
    },
    Testimonial {
        quote: "We came in with nothing but a logo and a rough idea of what we wanted to say. Aidan turned that into a landing page that actually converts—our demo signups more than doubled in the first month, and he kept iterating with us until every section felt right.",
        author: "Tyler R.",
        company: "ROAM Performance",
        avatar: "/images/roam-team.png",
    },
    Testimonial {
        quote: "Fast, professional, and easy to work with. Our new site ranks for the local searches we care about and finally looks like the company we are.",
        author: "Dan S.",
        company: "Safeguard Property Solutions",
        avatar: "/images/safeguard-team.png",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Custom websites built with modern frameworks",
        icon: "💻",
        features: &["Responsive Design", "SEO Optimized", "Fast Loading"],
    },
    Service {
        title: "App Development",
        description: "Native and cross-platform mobile applications",
        icon: "📱",
        features: &["iOS & Android", "React Native", "Custom Backend"],
    },
    Service {
        title: "UI/UX Design",
        description: "Stunning interfaces that users love and convert like crazy",
        icon: "🎨",
        features: &["Figma Prototyping", "User Research", "Brand Identity"],
    },
];

pub const STATS: &[Stat] = &[
    Stat { label: "Industries Served", value: "8+", icon: "🏢" },
    Stat { label: "Projects Launched", value: "15", icon: "🚀" },
    Stat { label: "Avg. Traffic Uplift", value: "30%", icon: "📈" },
];

/// External booking link used by the navigation and call-to-action buttons.
pub const BOOKING_URL: &str = "https://calendly.com/kaneaidan12/made-by-kane-chat";

pub fn featured() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|project| project.featured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_is_a_prefix_of_the_catalog() {
        let featured_count = featured().count();
        assert_eq!(3, featured_count);
        for project in &PROJECTS[..featured_count] {
            assert!(project.featured);
        }
        for project in &PROJECTS[featured_count..] {
            assert!(!project.featured);
        }
    }

    #[test]
    fn every_category_has_a_distinct_label() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label));
        }
    }
}
