pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Vaishnavi",
    headline: "Full Stack Developer crafting beautiful, user-focused digital experiences",
    tagline: "Passionate about building exceptional web applications with modern technologies and clean, maintainable code",
    email: "vaishnavi@example.com",
    location: "San Francisco, CA",
    github: "https://github.com",
    linkedin: "https://linkedin.com",
};

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Code,
    Palette,
    Zap,
}

pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: FeatureIcon::Code,
        title: "Clean Code",
        description: "Writing maintainable, scalable code that follows best practices and industry standards",
    },
    Feature {
        icon: FeatureIcon::Palette,
        title: "Modern Design",
        description: "Creating beautiful, intuitive interfaces with attention to detail and user experience",
    },
    Feature {
        icon: FeatureIcon::Zap,
        title: "Performance",
        description: "Building fast, optimized applications that deliver exceptional performance",
    },
];

pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        category: "Frontend",
        skills: &["React", "TypeScript", "Tailwind CSS", "Next.js", "Vue.js", "HTML/CSS"],
    },
    SkillCategory {
        category: "Backend",
        skills: &["Node.js", "Express", "PostgreSQL", "MongoDB", "REST APIs", "GraphQL"],
    },
    SkillCategory {
        category: "Tools & Others",
        skills: &["Git", "Docker", "AWS", "CI/CD", "Jest", "Figma"],
    },
];

/// Preview art drawn at the top of each project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Illustration {
    Storefront,
    TaskBoard,
    Dashboard,
}

pub struct ProjectEntry {
    pub illustration: Illustration,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub repository: &'static str,
    pub demo: &'static str,
}

pub static PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        illustration: Illustration::Storefront,
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform with user authentication, product management, shopping cart, and payment integration.",
        tags: &["React", "Node.js", "PostgreSQL", "Stripe"],
        repository: "https://github.com",
        demo: "https://demo.com",
    },
    ProjectEntry {
        illustration: Illustration::TaskBoard,
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, team collaboration features, and project tracking.",
        tags: &["TypeScript", "React", "Firebase", "Tailwind"],
        repository: "https://github.com",
        demo: "https://demo.com",
    },
    ProjectEntry {
        illustration: Illustration::Dashboard,
        title: "Social Media Dashboard",
        description: "Analytics dashboard for social media management with data visualization, scheduling features, and performance metrics.",
        tags: &["Next.js", "Chart.js", "MongoDB", "Express"],
        repository: "https://github.com",
        demo: "https://demo.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_fixed_order() {
        let titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "E-Commerce Platform",
                "Task Management App",
                "Social Media Dashboard"
            ]
        );
        for p in &PROJECTS {
            assert_eq!(p.tags.len(), 4, "{}", p.title);
        }
    }

    #[test]
    fn test_each_project_has_its_own_illustration() {
        let ills = PROJECTS.iter().map(|p| p.illustration).collect::<Vec<_>>();
        assert_eq!(
            ills,
            vec![
                Illustration::Storefront,
                Illustration::TaskBoard,
                Illustration::Dashboard
            ]
        );
    }

    #[test]
    fn test_skill_categories() {
        let names = SKILL_CATEGORIES
            .iter()
            .map(|c| c.category)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Frontend", "Backend", "Tools & Others"]);
        assert!(SKILL_CATEGORIES.iter().all(|c| c.skills.len() == 6));
    }

    #[test]
    fn test_links() {
        assert_eq!(PROFILE.mailto(), "mailto:vaishnavi@example.com");
        for url in [PROFILE.github, PROFILE.linkedin] {
            assert!(url.starts_with("https://"));
        }
    }
}
