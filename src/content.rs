//! Fixed biographical content rendered by the page sections.

use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub handle: &'static str,
    pub email: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub resume: &'static str,
    pub status: &'static str,
    pub location: &'static str,
    pub about: &'static [&'static str],
    pub contact_pitch: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    first_name: "Usman",
    last_name: "Siddique",
    role: "Junior DevOps Engineer",
    tagline: "Junior DevOps Engineer | Building, Deploying, Scaling",
    handle: "usman",
    email: "contact@myselfusman.com",
    image: "/usman-bg.webp",
    image_alt: "Usman Siddique - DevOps Engineer",
    resume: "#",
    status: "available for hire",
    location: "ready to deploy",
    about: &[
        "I'm a Junior DevOps Engineer passionate about automating infrastructure and streamlining deployment pipelines. Currently completing my internship, I specialize in containerization, CI/CD, and cloud technologies.",
        "I love turning complex deployment challenges into automated, scalable solutions. My goal is to bridge the gap between development and operations, ensuring smooth, reliable, and efficient software delivery.",
    ],
    contact_pitch: "Ready to automate, deploy, and scale? Let's build something amazing together.",
};

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    /// Sections linked from the navigation bar.
    pub const NAV: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Certifications => "certifications",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certifications",
            SectionId::Contact => "Contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About Me",
            SectionId::Skills => "Skills & Tech Stack",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certifications",
            SectionId::Contact => "Let's Connect",
        }
    }

    /// Heading comment such as `// 02`. The hero carries none.
    pub fn ordinal(self) -> Option<String> {
        SectionId::NAV
            .iter()
            .position(|s| *s == self)
            .map(|i| format!("// {:02}", i + 1))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const CURRENT_SKILLS: &[Skill] = &[
    Skill { name: "Docker", icon: "🐳" },
    Skill { name: "Jenkins", icon: "⚙️" },
    Skill { name: "AWS", icon: "☁️" },
    Skill { name: "Git", icon: "📦" },
    Skill { name: "CI/CD", icon: "🔄" },
    Skill { name: "Linux", icon: "🐧" },
    Skill { name: "Python", icon: "🐍" },
    Skill { name: "Bash", icon: "💻" },
];

pub const LEARNING_SKILLS: &[Skill] = &[
    Skill { name: "Kubernetes", icon: "☸️" },
    Skill { name: "Terraform", icon: "🏗️" },
    Skill { name: "Ansible", icon: "📜" },
    Skill { name: "Prometheus", icon: "📊" },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repository: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Production CI/CD Deployment – Next.js on AWS EC2",
        description: "Designed and implemented a production-style CI/CD pipeline to deploy a Next.js application to AWS EC2 using GitHub Actions. Implemented atomic release strategy with versioned folders, automated deployments on push to main, configured Nginx as reverse proxy, and successfully troubleshooted real production issues including OOM crashes, SSH authentication failures, and 502 Bad Gateway errors.",
        tech: &["GitHub Actions", "Next.js", "AWS EC2", "Nginx", "PM2", "rsync", "Linux"],
        repository: "https://github.com/myselfusman",
    },
    Project {
        title: "Next.js Web App Deployment",
        description: "Deployed a production-ready Next.js application using Docker containers and CI/CD pipeline with automated testing and deployment to AWS",
        tech: &["Next.js", "Docker", "Jenkins", "AWS"],
        repository: "https://github.com/myselfusman",
    },
    Project {
        title: "React.js App with CI/CD",
        description: "Built and deployed a React.js application with automated build pipeline, containerization, and cloud deployment",
        tech: &["React.js", "Docker", "Git", "AWS"],
        repository: "https://github.com/myselfusman",
    },
    Project {
        title: "Netflix Clone Static Website",
        description: "Created and deployed a static Netflix clone with responsive design, containerized deployment, and automated CI/CD workflow",
        tech: &["HTML/CSS/JS", "Docker", "Jenkins"],
        repository: "https://github.com/myselfusman",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub platform: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Docker Certification",
        platform: "LinkedIn Learning",
    },
    Certification {
        name: "GitHub Certification",
        platform: "LinkedIn Learning",
    },
    Certification {
        name: "GitLab Certification",
        platform: "LinkedIn Learning",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Email,
    LinkedIn,
    GitHub,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
    pub label: &'static str,
}

impl SocialLink {
    pub fn name(&self) -> &'static str {
        match self.kind {
            SocialKind::Email => "Email",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::GitHub => "GitHub",
        }
    }

    /// Icon font class for the link glyph.
    pub fn icon_class(&self) -> &'static str {
        match self.kind {
            SocialKind::Email => "icon-mail",
            SocialKind::LinkedIn => "devicon-linkedin-plain",
            SocialKind::GitHub => "devicon-github-original",
        }
    }

    /// Mail links stay in the current tab; profiles open a new one.
    pub fn opens_new_tab(&self) -> bool {
        self.kind != SocialKind::Email
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::Email,
        href: "mailto:contact@myselfusman.com",
        label: "contact@myselfusman.com",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        href: "https://www.linkedin.com/in/myself-usman/",
        label: "linkedin.com/in/myself-usman",
    },
    SocialLink {
        kind: SocialKind::GitHub,
        href: "https://github.com/myselfusman",
        label: "github.com/myselfusman",
    },
];

pub const SITE_TITLE: &str = "Usman Siddique | Junior DevOps Engineer";
pub const SITE_DESCRIPTION: &str = "Portfolio of Usman Siddique - Junior DevOps Engineer specializing in Docker, Jenkins, AWS, and CI/CD pipelines. Building, Deploying, Scaling.";
pub const SITE_KEYWORDS: &[&str] = &[
    "DevOps",
    "Docker",
    "Jenkins",
    "AWS",
    "CI/CD",
    "Kubernetes",
    "Terraform",
];
pub const OG_DESCRIPTION: &str = "Building, Deploying, Scaling - DevOps Portfolio";
pub const THEME_COLOR: &str = "#0A192F";
/// Served from `public/`.
pub const FAVICON: &str = "/favicon.svg";

/// schema.org `Person` record embedded as JSON-LD in the document head.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    job_title: &'static str,
    email: String,
    image: &'static str,
    same_as: Vec<&'static str>,
    knows_about: Vec<&'static str>,
}

impl PersonSchema {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn person_schema() -> PersonSchema {
    PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: PROFILE.full_name(),
        job_title: PROFILE.role,
        email: PROFILE.mailto(),
        image: PROFILE.image,
        same_as: SOCIAL_LINKS
            .iter()
            .filter(|l| l.opens_new_tab())
            .map(|l| l.href)
            .collect(),
        knows_about: CURRENT_SKILLS.iter().map(|s| s.name).collect(),
    }
}
