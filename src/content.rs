pub const OWNER: &str = "Harrison Kirigwi";
pub const TAGLINE: &str = "Full Stack Developer";
pub const LOCATION: &str = "Nairobi, Kenya";
pub const RESUME_LINK: &str =
    "https://drive.google.com/file/d/1Y9hdb4pkBE2rbiKSzXoQP9ls13rUVpHc/view?usp=drive_link";
pub const PROFILE_IMAGE: &str = "/images/portfolio-background.jpeg";
pub const ABOUT_SUMMARY: &str = "I'm a passionate Software Engineer with expertise in full-stack development, specializing in creating robust and scalable web applications. With a strong background in React, Node.js, and modern web technologies, I transform complex problems into elegant digital solutions.";
pub const BUILT_WITH: &[&str] = &["Rust", "Leptos", "Tailwind CSS"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Class(&'static str),
    Text(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub github_link: &'static str,
    pub live_link: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub icon: Glyph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub label: &'static str,
    pub display_value: &'static str,
    pub target_link: &'static str,
    pub style_hint: &'static str,
    pub icon: Glyph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Glyph,
    pub hover_class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub name: &'static str,
    pub icon: Glyph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechIcon {
    pub icon: &'static str,
    pub color: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with React and Node.js",
        technologies: &["React", "Node.js", "MongoDB"],
        category: "Web App",
        github_link: "https://github.com/HarryKirigwi/Brilliant-Essays/",
        live_link: "https://brilliantessays.vercel.app",
        image: "/images/brilliant-essay.png",
    },
    Project {
        id: 2,
        title: "University Website",
        description: "Productivity tracking application with real-time updates",
        technologies: &["React", "Firebase", "Tailwind CSS"],
        category: "Web App",
        github_link: "#",
        live_link: "#",
        image: "/images/synapsse-display.png",
    },
    Project {
        id: 3,
        title: "Portfolio Website",
        description: "Personal portfolio showcasing professional work",
        technologies: &["React", "Framer Motion", "Tailwind CSS"],
        category: "Web Design",
        github_link: "https://github.com/HarryKirigwi/portfolio-site",
        live_link: "#",
        image: "/images/portfolio-website.png",
    },
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        skills: &["React", "JavaScript", "Tailwind CSS"],
        icon: Glyph::Text("🎨"),
    },
    SkillCategory {
        name: "Backend",
        skills: &["Node.js", "Express", "Python"],
        icon: Glyph::Text("⚙️"),
    },
    SkillCategory {
        name: "Databases",
        skills: &["MongoDB", "PostgreSQL", "MySQL"],
        icon: Glyph::Text("🗄️"),
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "John Doe",
        role: "CEO, Brilliant Essays",
        quote: "Working with Harry was an absolute pleasure. His attention to detail and commitment to delivering high-quality work is unmatched.",
        image: "https://via.placeholder.com/150",
    },
    Testimonial {
        id: 2,
        name: "Jane Smith",
        role: "Product Manager, Tech Corp",
        quote: "Harry is a talented developer who always goes above and beyond to ensure the project is a success. Highly recommended!",
        image: "https://via.placeholder.com/150",
    },
    Testimonial {
        id: 3,
        name: "Michael Johnson",
        role: "Founder, EduTech Solutions",
        quote: "Harry's ability to solve complex problems and deliver on time is truly impressive. A great asset to any team.",
        image: "https://via.placeholder.com/150",
    },
];

pub static CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "WhatsApp",
        display_value: "+254 712 345 678",
        target_link: "https://wa.me/254712345678",
        style_hint: "text-green-500",
        icon: Glyph::Text("💬"),
    },
    ContactMethod {
        label: "Call Me",
        display_value: "+254 712 345 678",
        target_link: "tel:+254712345678",
        style_hint: "text-blue-500",
        icon: Glyph::Text("📞"),
    },
    ContactMethod {
        label: "Email",
        display_value: "harrison.kirigwi@example.com",
        target_link: "mailto:harrison.kirigwi@example.com",
        style_hint: "text-red-500",
        icon: Glyph::Text("📧"),
    },
];

pub static HEADER_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/harrisonkirigwi",
        icon: Glyph::Class("devicon-github-plain"),
        hover_class: "hover:text-purple-500",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/harrisonkirigwi",
        icon: Glyph::Class("devicon-linkedin-plain"),
        hover_class: "hover:text-blue-500",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com/harrisonkirigwi",
        icon: Glyph::Class("devicon-twitter-original"),
        hover_class: "hover:text-cyan-500",
    },
];

pub static FOOTER_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/harrisonkirigwi",
        icon: Glyph::Class("devicon-github-plain"),
        hover_class: "hover:text-secondary",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/harrisonkirigwi",
        icon: Glyph::Class("devicon-linkedin-plain"),
        hover_class: "hover:text-secondary",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com/harrisonkirigwi",
        icon: Glyph::Class("devicon-twitter-original"),
        hover_class: "hover:text-secondary",
    },
    SocialLink {
        label: "Email",
        href: "mailto:harrison.kirigwi@example.com",
        icon: Glyph::Text("📧"),
        hover_class: "hover:text-secondary",
    },
];

pub static HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        name: "Frontend",
        icon: Glyph::Text("💻"),
    },
    Highlight {
        name: "Backend",
        icon: Glyph::Text("🖥️"),
    },
    Highlight {
        name: "Full Stack",
        icon: Glyph::Text("🚀"),
    },
];

pub fn tech_icon(tech: &str) -> Option<TechIcon> {
    let (icon, color) = match tech {
        "React" => ("devicon-react-original", "text-blue-500"),
        "Node.js" => ("devicon-nodejs-plain", "text-green-500"),
        "MongoDB" => ("devicon-mongodb-plain", "text-green-600"),
        "Firebase" => ("devicon-firebase-plain", "text-yellow-500"),
        "Tailwind CSS" => ("devicon-tailwindcss-original", "text-blue-400"),
        "Framer Motion" => ("devicon-framermotion-original", "text-purple-500"),
        "CSS" => ("devicon-css3-plain", "text-blue-300"),
        _ => return None,
    };
    Some(TechIcon { icon, color })
}
