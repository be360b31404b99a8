//! Everything the sections display. Plain `'static` data, mapped into views
//! by `app::sections`.

pub const OWNER_NAME: &str = "Umashankar S Gouda";
pub const CONTACT_EMAIL: &str = "umashankars.work@gmail.com";
pub const BLOG_URL: &str = "https://blogs.umashankars.co.in";
pub const GITHUB_URL: &str = "https://github.com/UmashankarGouda";
pub const SIGNATURE_SVG: &str = "/assets/signature.svg";
pub const AVATAR: &str = "/assets/avatar.jpg";

/// `rel` for every link that leaves the site.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Widths at or below this many pixels get the compact layout.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

pub fn mobile_media_query() -> String {
    format!("(max-width: {MOBILE_BREAKPOINT_PX}px)")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavItem {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Open Source", href: "#open-source" },
    NavItem { name: "Experience", href: "#experience" },
    NavItem { name: "Certifications", href: "#certifications" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Achievements", href: "#achievements" },
    NavItem { name: "Gallery", href: "#gallery" },
    NavItem { name: "Blogs", href: BLOG_URL },
    NavItem { name: "Contact", href: "#contact" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm an engineering student who enjoys building things that actually do something, from Java-based backend systems and cloud-deployed platforms to clean, scroll-stopping designs.",
    "I live at the intersection of technology, creativity, and impact. One day I'm designing posters and managing social media for brands, the next I'm working on blockchain verification portals, voice-driven AI solutions in regional languages, or leading teams under IEEE CIS. I've built projects for hackathons, startups, college clubs, and open-source communities, always with the same goal: make tech useful, accessible, and human.",
    "I'm especially interested in Java backend development, cloud computing, AI/ML applications, and product thinking, and I learn best by building real systems end-to-end rather than just reading about them. Along the way, I've picked up experience in leadership, project coordination, client communication, and turning vague ideas into shipped products.",
    "And when I need a creative reset, I genuinely enjoy experimenting with graphic design and visual storytelling.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Tools,
}

impl SkillCategory {
    pub const ALL: [Self; 3] = [Self::Languages, Self::Frameworks, Self::Tools];

    pub fn label(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Frameworks => "Frameworks",
            Self::Tools => "Tools",
        }
    }

    pub fn skills(self) -> &'static [Skill] {
        match self {
            Self::Languages => LANGUAGES,
            Self::Frameworks => FRAMEWORKS,
            Self::Tools => TOOLS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Dark glyphs that need inverting on the dark theme.
    pub invert_on_dark: bool,
}

const fn skill(name: &'static str, icon: &'static str) -> Skill {
    Skill {
        name,
        icon,
        invert_on_dark: false,
    }
}

const LANGUAGES: &[Skill] = &[
    skill("Java", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg"),
    skill("C", "https://cdn.simpleicons.org/c/00599C"),
    skill("Python", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg"),
    skill("JavaScript", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg"),
    skill("SQL", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg"),
    skill("HTML & CSS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg"),
    skill("LaTeX", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/latex/latex-original.svg"),
    skill("MATLAB", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/matlab/matlab-original.svg"),
];

const FRAMEWORKS: &[Skill] = &[
    skill("Spring Boot", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/spring/spring-original.svg"),
    skill("Node.js", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg"),
    skill("React", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"),
    Skill {
        name: "Express.js",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/express/express-original.svg",
        invert_on_dark: true,
    },
];

const TOOLS: &[Skill] = &[
    skill("Git & GitHub", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg"),
    skill("Docker", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg"),
    skill("AWS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-plain-wordmark.svg"),
    skill("Supabase", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/supabase/supabase-original.svg"),
    skill("MySQL", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg"),
    skill("Postman", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postman/postman-original.svg"),
    skill("Figma", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-original.svg"),
    skill("Canva", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/canva/canva-original.svg"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub logo: &'static str,
    pub role: &'static str,
    pub date_range: &'static str,
    pub work_link: &'static str,
}

/// Newest first.
pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Leap Quest",
        logo: "/assets/leapquest-logo.svg",
        role: "Academic Editor",
        date_range: "Aug 2025 - Present",
        work_link: "https://drive.google.com/placeholder-leapquest",
    },
    Experience {
        company: "Student Branch Chapter",
        logo: "/assets/ieee-cis-logo.svg",
        role: "Chair, IEEE CIS BMSIT&M",
        date_range: "Jan 2025 - Jan 2026",
        work_link: "https://drive.google.com/placeholder-ieee-cis",
    },
    Experience {
        company: "CODING CLUB BMSIT",
        logo: "/assets/coding-club-logo.svg",
        role: "Vice Head of Design Team",
        date_range: "Aug 2024 - Sep 2025",
        work_link: "https://drive.google.com/placeholder-coding-club",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub image: &'static str,
    pub issued: &'static str,
    pub expires: &'static str,
    pub credential_id: &'static str,
    pub verify_link: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[Certification {
    name: "Oracle Cloud Infrastructure Foundations Associate",
    image: "/assets/oracle-foundation-certificate.png",
    issued: "Oct 2025",
    expires: "Oct 2027",
    credential_id: "OCI25FNDCFA",
    verify_link: "https://catalog-education.oracle.com/ords/certview/sharebadge?id=2D712365D57E90E1F211192955CEA08A2CD818E95393FD7C55A4A2570CD63569",
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Software,
    GraphicDesign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTab {
    All,
    Software,
    GraphicDesign,
}

impl ProjectTab {
    pub const ALL: [Self; 3] = [Self::All, Self::Software, Self::GraphicDesign];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Software => "Software",
            Self::GraphicDesign => "Graphic Design",
        }
    }

    /// The `All` tab only shows the software work.
    pub fn projects(self) -> &'static [Project] {
        match self {
            Self::All | Self::Software => SOFTWARE_PROJECTS,
            Self::GraphicDesign => DESIGN_PROJECTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub badge: Option<&'static str>,
    pub blog_link: Option<&'static str>,
    pub github_link: Option<&'static str>,
    pub live_link: Option<&'static str>,
}

impl Project {
    /// Label for the write-up link: design work links to a portfolio folder.
    pub fn blog_label(&self) -> &'static str {
        match self.category {
            ProjectCategory::Software => "Read Blog",
            ProjectCategory::GraphicDesign => "View Work",
        }
    }
}

const SOFTWARE_PROJECTS: &[Project] = &[
    Project {
        title: "Academic Credential Verification and Issuance System",
        description: "Authentix is a decentralized digital credential verification and issuance system that ensures certificates remain secure, tamper-proof, and accessible even if the issuing institution goes offline.",
        image: "/assets/authentix-project.png",
        category: ProjectCategory::Software,
        technologies: &["AES-GCM Cryptography", "RSA-OAEP Encryption", "Shamir's SS Algorithm", "Ethereum"],
        badge: Some("Web3 + IPFS Project"),
        blog_link: Some("https://blogs.umashankars.co.in/blog/academic-credential-system"),
        github_link: Some("https://github.com/UmashankarGouda/Authentix-System"),
        live_link: None,
    },
    Project {
        title: "AI-Powered Multi-Agent Agriculture Management & Crop Rotation Platform",
        description: "AI-powered agricultural platform that helps farmers plan optimal crop rotations using a Multi-Agent RAG system trained on ICAR and IEEE research, and satellite insights from ISRO's Bhuvan, combined with farm analytics.",
        image: "/assets/krishi-chakra.png",
        category: ProjectCategory::Software,
        technologies: &["ISRO's Bhuvan", "Blockchain Certification", "GPT4 LLM", "FAISS Vector DB"],
        badge: Some("🏆 Multi-Hackathon Winning Project"),
        blog_link: Some("https://blogs.umashankars.co.in/blog/krishi-sakhi"),
        github_link: Some("https://github.com/UmashankarGouda/KrishiChakra"),
        live_link: None,
    },
    Project {
        title: "Gamified Sustainable Farming Platform",
        description: "A mobile-first gamified platform that encourages farmers to adopt sustainable agricultural practices through quests, rewards, and community learning.",
        image: "/assets/nelotsavam-project.png",
        category: ProjectCategory::Software,
        technologies: &["Mobile-First Interface", "Voice Assistant", "FastAPI Backend", "Farmer Community Network"],
        badge: Some("SIH Project"),
        blog_link: Some("https://blogs.umashankars.co.in/blog/nelotsavam"),
        github_link: Some("https://github.com/UmashankarGouda/Natively-app-nelotsavam"),
        live_link: None,
    },
];

const DESIGN_FOLDER: &str =
    "https://drive.google.com/drive/folders/12kPvL0hpGdZeOXVgjiHr5qF1sEfEBJcH?usp=sharing";

const DESIGN_PROJECTS: &[Project] = &[
    Project {
        title: "Social Media Content Creation – Maitri Jaipur",
        description: "Created reels, carousels, and context-driven visual content for a clothing brand, contributing to growth beyond 50K followers through consistent design, trend-aligned storytelling, and audience-focused creatives.",
        image: "/assets/maitri-jaipur.png",
        category: ProjectCategory::GraphicDesign,
        technologies: &["Reels", "Carousels", "Brand Aesthetics", "SMMA", "Canva"],
        badge: None,
        blog_link: Some(DESIGN_FOLDER),
        github_link: None,
        live_link: Some("https://www.instagram.com/maitrijaipurofficial/"),
    },
    Project {
        title: "Content Creation & Social Media Management – Galactic Void",
        description: "Managed and created visual content for the Galactic Void page, handling 200K+ Instagram and 900K Facebook followers. Designed posts in Canva and used Publer Analytics for scheduling, automation, and performance tracking.",
        image: "/assets/galactic-void.png",
        category: ProjectCategory::GraphicDesign,
        technologies: &["Canva", "Publer", "Brand Analytics", "Automation", "SMMA"],
        badge: None,
        blog_link: Some(DESIGN_FOLDER),
        github_link: None,
        live_link: Some("https://www.instagram.com/thegalacticvoid/"),
    },
    Project {
        title: "YouTube Thumbnail Design",
        description: "Designed eye-catching thumbnails for a YouTube channel, focusing on visual hierarchy, typography, and click-through optimization to enhance video engagement and brand consistency.",
        image: "/assets/thumbnails.png",
        category: ProjectCategory::GraphicDesign,
        technologies: &["Youtube", "Thumbnail", "Canva", "Typography"],
        badge: None,
        blog_link: Some(DESIGN_FOLDER),
        github_link: None,
        live_link: Some("https://www.youtube.com/@TristanPhleetSMS"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Campus,
    Office,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub venue: Venue,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "1st Prize Winner at ImpactX 2025 Hackathon",
        description: "Built a multi-agent AI and blockchain powered agricultural ecosystem using RAG based LLMs for crop planning and biowaste management along with a transparent farmer to market platform.",
        location: "RNSIT, Bengaluru",
        image: "/assets/impactx-hackathon.png",
        venue: Venue::Campus,
    },
    Achievement {
        title: "DECODEX 2025 Prize Winner",
        description: "Competed in a 24-hour Capture The Flag cybersecurity challenge involving hardware and software puzzles, cryptography, and ESP32 tasks. Achieved a winning position through teamwork, endurance, and advanced problem-solving skills.",
        location: "BMSIT&M, Bengaluru",
        image: "/assets/decodex-hackathon.png",
        venue: Venue::Campus,
    },
    Achievement {
        title: "BMSIT&M Student Delegate at DeepTech Hackers Day 2025",
        description: "Represented BMSIT&M at a full-day deep-tech innovation event focused on AI, Web3, and Quantum technologies, engaging with builders, founders, and industry experts through talks, demos, and networking.",
        location: "Startup Park, Kormangala, Bengaluru",
        image: "/assets/deeptech-hackersday.png",
        venue: Venue::Office,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub media: &'static str,
    pub caption: &'static str,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        media: "/assets/gallery/My Speech at IEEE AGM 2025.png",
        caption: "My Speech as Chair, CIS Society\nat IEEE AGM 2025",
    },
    GalleryItem {
        media: "/assets/gallery/deeptech_hackersday_2025.mp4",
        caption: "DeepTech HackersDay 2025",
    },
    GalleryItem {
        media: "/assets/gallery/Hack with UttarPradesh National level hackathon Finale.png",
        caption: "Hack with UttarPradesh\nNational level hackathon Finale",
    },
    GalleryItem {
        media: "/assets/gallery/Our Booth at Comsif Conference.png",
        caption: "Our Booth at\nComsif Conference",
    },
    GalleryItem {
        media: "/assets/gallery/Gate Bootcamp organised by our Society.png",
        caption: "Gate Bootcamp\norganised by our Society",
    },
    GalleryItem {
        media: "/assets/gallery/Campus Tank Event.png",
        caption: "Campus Tank Event",
    },
    GalleryItem {
        media: "/assets/gallery/Our Winter of Projects team.png",
        caption: "Our Winter of\nProjects team",
    },
    GalleryItem {
        media: "/assets/gallery/decodex-hackathon.png",
        caption: "Decodex Hackathon",
    },
    GalleryItem {
        media: "/assets/gallery/impactx-hackathon.png",
        caption: "ImpactX Hackathon",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelIcon {
    Mail,
    LinkedIn,
    GitHub,
    Steam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub display: &'static str,
    pub link: &'static str,
    pub icon: ChannelIcon,
    pub color: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "EMAIL",
        display: CONTACT_EMAIL,
        link: "mailto:umashankars.work@gmail.com",
        icon: ChannelIcon::Mail,
        color: "text-red-500",
    },
    ContactChannel {
        label: "LINKEDIN",
        display: "umashankargouda",
        link: "https://www.linkedin.com/in/umashankargouda/",
        icon: ChannelIcon::LinkedIn,
        color: "text-blue-500",
    },
    ContactChannel {
        label: "GITHUB",
        display: "UmashankarGouda",
        link: GITHUB_URL,
        icon: ChannelIcon::GitHub,
        color: "text-gray-800",
    },
    ContactChannel {
        label: "STEAM",
        display: "theungovernable",
        link: "https://steamcommunity.com/id/iungovernbale/",
        icon: ChannelIcon::Steam,
        color: "text-blue-700",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    #[test]
    fn test_all_tab_is_software() {
        assert_eq!(ProjectTab::All.projects(), ProjectTab::Software.projects());
        assert!(ProjectTab::All
            .projects()
            .iter()
            .all(|p| p.category == ProjectCategory::Software));
        assert!(ProjectTab::GraphicDesign
            .projects()
            .iter()
            .all(|p| p.category == ProjectCategory::GraphicDesign && p.live_link.is_some()));
    }

    #[test]
    fn test_nav_items() {
        let external = NAV_ITEMS.iter().filter(|n| n.is_external()).collect::<Vec<_>>();
        assert_eq!(external.len(), 1);
        assert_eq!(external[0].href, BLOG_URL);
        assert!(NAV_ITEMS
            .iter()
            .filter(|n| !n.is_external())
            .all(|n| n.href.starts_with('#')));
        let skills = NAV_ITEMS.iter().position(|n| n.href == "#skills");
        let open_source = NAV_ITEMS.iter().position(|n| n.href == "#open-source");
        assert_eq!(open_source, skills.map(|i| i + 1));
    }

    #[test]
    fn test_gallery_media_classifies() {
        for item in GALLERY {
            assert!(MediaKind::classify(item.media).is_ok(), "{}", item.media);
        }
        assert_eq!(
            MediaKind::classify(GALLERY[1].media),
            Ok(MediaKind::Video)
        );
    }

    #[test]
    fn test_skill_categories() {
        let total = SkillCategory::ALL
            .iter()
            .map(|c| c.skills().len())
            .sum::<usize>();
        assert_eq!(total, 20);
        assert!(FRAMEWORKS.iter().any(|s| s.invert_on_dark));
        assert!(LANGUAGES.iter().all(|s| s.icon.starts_with("https://")));
        assert!(TOOLS.iter().all(|s| s.icon.contains("devicon")));
    }

    #[test]
    fn test_mobile_query() {
        assert_eq!(mobile_media_query(), "(max-width: 768px)");
    }
}
