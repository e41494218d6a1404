// Neonfolio page content
//
// Static, read-only records rendered by the page. Nothing here is mutated at
// runtime; views hold indices into these slices.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Who the page is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub greeting: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub logo: &'static str,
    pub socials: &'static [SocialLink],
}

pub const PROFILE: Profile = Profile {
    first_name: "RAJ",
    last_name: "PATIL",
    greeting: "// Welcome to my digital space",
    summary: "Passionate about crafting immersive digital experiences that push the \
              boundaries of web technology. Specializing in full-stack development \
              with a focus on performance, accessibility, and cutting-edge design.",
    email: "hello@johncyber.dev",
    location: "San Francisco, CA",
    logo: "<CYBER/>",
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "#",
        },
        SocialLink {
            label: "LinkedIn",
            href: "#",
        },
        SocialLink {
            label: "Twitter",
            href: "#",
        },
    ],
};

/// Phrases cycled by the hero typewriter
pub const TYPING_TAGS: [&str; 5] = [
    "Full Stack Developer",
    "Creative Technologist",
    "UI/UX Enthusiast",
    "Open Source Contributor",
    "Problem Solver",
];

/// Boot log revealed line by line by the preloader
pub const STATUS_MESSAGES: [&str; 6] = [
    "Initializing Neural Link...",
    "Loading Core Systems...",
    "Establishing Secure Protocol...",
    "Syncing Quantum Networks...",
    "Activating Visual Matrix...",
    "System Ready.",
];

pub const WELCOME_TEXT: &str = "WELCOME TO WORLD";
pub const GLITCH_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`01";

/// Counter on the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
    pub suffix: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: 50,
        label: "Projects Completed",
        suffix: "+",
    },
    Stat {
        value: 3,
        label: "Years Experience",
        suffix: "+",
    },
    Stat {
        value: 15,
        label: "Certifications",
        suffix: "",
    },
    Stat {
        value: 20,
        label: "Happy Clients",
        suffix: "+",
    },
];

/// A label drifting on the skill canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillMarker {
    pub name: &'static str,
    pub color: &'static str,
}

pub const SKILL_MARKERS: [SkillMarker; 12] = [
    SkillMarker { name: "React", color: "#61DAFB" },
    SkillMarker { name: "Node.js", color: "#339933" },
    SkillMarker { name: "TypeScript", color: "#3178C6" },
    SkillMarker { name: "MongoDB", color: "#47A248" },
    SkillMarker { name: "Next.js", color: "#ffffff" },
    SkillMarker { name: "Tailwind", color: "#06B6D4" },
    SkillMarker { name: "GraphQL", color: "#E10098" },
    SkillMarker { name: "React Native", color: "#61DAFB" },
    SkillMarker { name: "Docker", color: "#2496ED" },
    SkillMarker { name: "AWS", color: "#FF9900" },
    SkillMarker { name: "Security", color: "#00D4AA" },
    SkillMarker { name: "Performance", color: "#FFD700" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Neural Commerce",
        description: "A next-gen e-commerce platform with AI-powered recommendations and \
                      real-time inventory management. Built with microservices architecture.",
        tags: &["Next.js", "Node.js", "MongoDB", "AI/ML"],
        live_url: "#",
        github_url: "#",
        featured: true,
    },
    Project {
        id: 2,
        title: "CyberChat",
        description: "Real-time messaging application with end-to-end encryption, voice \
                      calls, and AI-powered content moderation.",
        tags: &["React", "Socket.io", "WebRTC", "Redis"],
        live_url: "#",
        github_url: "#",
        featured: true,
    },
    Project {
        id: 3,
        title: "DataViz Pro",
        description: "Interactive data visualization dashboard with custom charts, \
                      real-time updates, and exportable reports.",
        tags: &["D3.js", "React", "GraphQL", "PostgreSQL"],
        live_url: "#",
        github_url: "#",
        featured: true,
    },
    Project {
        id: 4,
        title: "CloudSync",
        description: "Cloud file synchronization service with version control, team \
                      collaboration, and automated backups.",
        tags: &["AWS", "Node.js", "React Native", "S3"],
        live_url: "#",
        github_url: "#",
        featured: false,
    },
    Project {
        id: 5,
        title: "TaskFlow",
        description: "Project management tool with Kanban boards, time tracking, and \
                      team analytics.",
        tags: &["Vue.js", "Express", "MongoDB", "Docker"],
        live_url: "#",
        github_url: "#",
        featured: false,
    },
    Project {
        id: 6,
        title: "HealthTrack",
        description: "Personal health monitoring app with wearable integration and AI \
                      health insights.",
        tags: &["React Native", "Firebase", "TensorFlow", "IoT"],
        live_url: "#",
        github_url: "#",
        featured: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Education,
    Work,
    Achievement,
}

impl TimelineKind {
    pub fn legend(&self) -> &'static str {
        match self {
            TimelineKind::Education => "Education",
            TimelineKind::Work => "Work Experience",
            TimelineKind::Achievement => "Achievement",
        }
    }
}

impl fmt::Display for TimelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineKind::Education => write!(f, "education"),
            TimelineKind::Work => write!(f, "work"),
            TimelineKind::Achievement => write!(f, "achievement"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: u32,
    pub kind: TimelineKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [TimelineEntry; 6] = [
    TimelineEntry {
        id: 1,
        kind: TimelineKind::Education,
        title: "Bachelor of Computer Science",
        organization: "Tech University",
        date: "2018 - 2022",
        description: "Graduated with honors, specializing in Software Engineering and \
                      Artificial Intelligence.",
    },
    TimelineEntry {
        id: 2,
        kind: TimelineKind::Work,
        title: "Junior Developer",
        organization: "StartUp Labs",
        date: "2022 - 2023",
        description: "Built responsive web applications and contributed to the development \
                      of internal tools.",
    },
    TimelineEntry {
        id: 3,
        kind: TimelineKind::Achievement,
        title: "AWS Certified Developer",
        organization: "Amazon Web Services",
        date: "2023",
        description: "Achieved professional certification in cloud development and \
                      architecture.",
    },
    TimelineEntry {
        id: 4,
        kind: TimelineKind::Work,
        title: "Full Stack Developer",
        organization: "Digital Innovations Inc.",
        date: "2023 - 2024",
        description: "Led development of customer-facing applications serving 100K+ users.",
    },
    TimelineEntry {
        id: 5,
        kind: TimelineKind::Education,
        title: "Master of Software Engineering",
        organization: "Tech Institute",
        date: "2024 - Present",
        description: "Pursuing advanced studies in distributed systems and machine learning.",
    },
    TimelineEntry {
        id: 6,
        kind: TimelineKind::Work,
        title: "Senior Developer",
        organization: "CyberTech Solutions",
        date: "2024 - Present",
        description: "Architecting scalable solutions and mentoring junior developers in \
                      best practices.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub color: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 7] = [
    SkillCategory {
        title: "Programming Languages",
        color: "#00D4FF",
        skills: &["JavaScript", "TypeScript", "Python", "Java", "C++", "Go", "Rust"],
    },
    SkillCategory {
        title: "Frameworks",
        color: "#FF00D4",
        skills: &["React", "Next.js", "Vue.js", "Angular", "Express.js", "NestJS", "Django"],
    },
    SkillCategory {
        title: "Libraries",
        color: "#00FF88",
        skills: &[
            "Redux",
            "Zustand",
            "TanStack Query",
            "Framer Motion",
            "Three.js",
            "Socket.io",
            "Axios",
        ],
    },
    SkillCategory {
        title: "Databases",
        color: "#FFD700",
        skills: &["MongoDB", "PostgreSQL", "MySQL", "Redis", "Firebase", "Supabase", "DynamoDB"],
    },
    SkillCategory {
        title: "Web Development",
        color: "#FF6B6B",
        skills: &["HTML5", "CSS3", "SASS", "Tailwind CSS", "REST APIs", "GraphQL", "WebSockets"],
    },
    SkillCategory {
        title: "Core Concepts",
        color: "#9D4EDD",
        skills: &[
            "Data Structures",
            "Algorithms",
            "System Design",
            "OOP",
            "Design Patterns",
            "Testing",
            "CI/CD",
        ],
    },
    SkillCategory {
        title: "Soft Skills",
        color: "#06D6A0",
        skills: &[
            "Problem Solving",
            "Team Leadership",
            "Communication",
            "Agile/Scrum",
            "Mentoring",
            "Time Management",
        ],
    },
];

/// A proficiency ring shown under the skill categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillLevel {
    pub level: &'static str,
    percentage: u8,
    pub color: &'static str,
}

impl SkillLevel {
    /// Percentages above 100 are clamped.
    pub const fn new(level: &'static str, percentage: u8, color: &'static str) -> Self {
        let percentage = if percentage > 100 { 100 } else { percentage };
        Self {
            level,
            percentage,
            color,
        }
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Filled fraction of the ring, in [0, 1]
    pub fn fraction(&self) -> f32 {
        self.percentage as f32 / 100.0
    }
}

pub const SKILL_LEVELS: [SkillLevel; 4] = [
    SkillLevel::new("Expert", 90, "#00D4FF"),
    SkillLevel::new("Advanced", 75, "#FF00D4"),
    SkillLevel::new("Intermediate", 60, "#00FF88"),
    SkillLevel::new("Learning", 40, "#FFD700"),
];

/// Parse a `#RRGGBB` colour.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_projects() {
        let featured: Vec<&str> = PROJECTS
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.title)
            .collect();
        assert_eq!(featured, vec!["Neural Commerce", "CyberChat", "DataViz Pro"]);
    }

    #[test]
    fn test_skill_level_clamped() {
        let level = SkillLevel::new("Overachiever", 140, "#FFFFFF");
        assert_eq!(level.percentage(), 100);
        assert_eq!(level.fraction(), 1.0);
        for level in SKILL_LEVELS {
            assert!(level.percentage() <= 100);
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#61DAFB"), Some((0x61, 0xDA, 0xFB)));
        assert_eq!(parse_hex_color("#ffffff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("61DAFB"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }

    #[test]
    fn test_marker_colors_parse() {
        for marker in SKILL_MARKERS {
            assert!(parse_hex_color(marker.color).is_some(), "{}", marker.name);
        }
    }

    #[test]
    fn test_status_messages_end_ready() {
        assert_eq!(STATUS_MESSAGES.len(), 6);
        assert_eq!(STATUS_MESSAGES.last(), Some(&"System Ready."));
    }
}
