//! Literal display data for the page.
//!
//! Everything here is defined once and never mutated. Order is meaningful:
//! components render each table in sequence.

/// Primary navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

/// Feature card in the "Discover the Magic" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Client quote shown in the testimonial carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// Headline number with a caption ("700+ Artworks").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Instagram,
    TikTok,
    LinkedIn,
    Facebook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const BRAND_FIRST: &str = "Digital";
pub const BRAND_ACCENT: &str = "Dreamland";
pub const TRADEMARK: &str = "amidigiart™";
pub const TAGLINE: &str = "Where imagination becomes digital reality.";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Blog", path: "/blog" },
    NavLink { name: "About", path: "/about" },
    NavLink { name: "FAQs", path: "/faqs" },
    NavLink { name: "Authors", path: "/authors" },
    NavLink { name: "Events", path: "/events" },
    NavLink { name: "Shop", path: "/shop" },
    NavLink { name: "Patterns", path: "/patterns" },
    NavLink { name: "Themes", path: "/themes" },
];

/// Number of nav links in the footer's first ("Navigation") column.
pub const FOOTER_PRIMARY_LINKS: usize = 4;

/// Splits the navigation table into the two footer columns.
pub fn footer_groups() -> (&'static [NavLink], &'static [NavLink]) {
    NAV_LINKS.split_at(FOOTER_PRIMARY_LINKS.min(NAV_LINKS.len()))
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Stunning Fantasy Worlds",
        description: "Immerse yourself in breathtaking digital landscapes that transport you to otherworldly realms.",
        icon: "✨",
    },
    Feature {
        title: "Unique Digital Art",
        description: "Discover one-of-a-kind creations that blend technical skill with boundless imagination.",
        icon: "🎨",
    },
    Feature {
        title: "Customized Creations",
        description: "Commission personalized digital artwork tailored to your specific vision and requirements.",
        icon: "⚡",
    },
    Feature {
        title: "Community Events",
        description: "Join our vibrant community of digital artists and enthusiasts in regular online events.",
        icon: "🌟",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Digital Dreamland transformed my concept into a breathtaking visual masterpiece. The attention to detail and creative execution exceeded all my expectations.",
        author: "Sophia Chen",
        role: "Art Director",
    },
    Testimonial {
        text: "The artwork I commissioned captured exactly what I envisioned but couldn't articulate. The team's ability to translate ideas into visual reality is truly remarkable.",
        author: "Marcus Johnson",
        role: "Game Designer",
    },
    Testimonial {
        text: "Working with Digital Dreamland was an incredible experience. Their artists have a unique ability to create digital worlds that feel alive and immersive.",
        author: "Elena Rodriguez",
        role: "Author",
    },
];

pub const HERO_BADGES: &[Stat] = &[
    Stat { value: "700+", label: "Artworks" },
    Stat { value: "12k+", label: "Happy Clients" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "700+", label: "Artworks" },
    Stat { value: "150+", label: "Artists" },
    Stat { value: "12k+", label: "Clients" },
];

pub const EXPERIENCE: Stat = Stat { value: "5+", label: "Years of Experience" };

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Instagram", href: "#", icon: SocialIcon::Instagram },
    SocialLink { label: "TikTok", href: "https://tiktok.com/@amidigiart", icon: SocialIcon::TikTok },
    SocialLink { label: "LinkedIn", href: "#", icon: SocialIcon::LinkedIn },
    SocialLink { label: "Facebook", href: "#", icon: SocialIcon::Facebook },
];

// External media, referenced by literal address
pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1593073637686-cc056c151c1e";
pub const LANDSCAPE_IMAGE: &str = "https://images.unsplash.com/photo-1491466424936-e304919aada7";
pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1555212697-194d092e3b8f";
pub const TESTIMONIAL_BACKDROP: &str = "https://images.unsplash.com/photo-1634017839464-5c339ebe3cb4";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_paths_are_fixed_and_ordered() {
        let paths: Vec<_> = NAV_LINKS.iter().map(|l| l.path).collect();
        assert_eq!(
            paths,
            ["/blog", "/about", "/faqs", "/authors", "/events", "/shop", "/patterns", "/themes"]
        );
    }

    #[test]
    fn footer_groups_cover_every_link_once() {
        let (first, rest) = footer_groups();
        assert_eq!(first.len(), 4);
        assert_eq!(rest.len(), 4);
        assert_eq!(first[0].name, "Blog");
        assert_eq!(rest[0].name, "Events");

        for link in NAV_LINKS {
            let hits = first.iter().chain(rest).filter(|l| *l == link).count();
            assert_eq!(hits, 1, "{} should appear in exactly one footer group", link.name);
        }
    }

    #[test]
    fn first_testimonial_opens_the_carousel() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS[0].text.starts_with("Digital Dreamland transformed my concept"));
    }

    #[test]
    fn feature_table_has_four_entries() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "Stunning Fantasy Worlds",
                "Unique Digital Art",
                "Customized Creations",
                "Community Events"
            ]
        );
    }
}
