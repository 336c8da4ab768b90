//! The portfolio content.
//!
//! Hand-authored records for every page section. The data is immutable for
//! the process lifetime and lives here as plain constants — the filesystem
//! holds only binary assets (photos, the CV document). Editing the site
//! means editing this module and rebuilding, which is the point: the
//! content is versioned, typechecked, and impossible to drift from the
//! markup that renders it.
//!
//! The only logic here is the project category filter, a pure predicate
//! over the project list used by the render stage to pre-compute one grid
//! per category.

use serde::Serialize;

/// Identity block used by the hero, about, and contact sections.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub full_name: &'static str,
    /// Role strings rotated by the hero's typed-text effect.
    pub roles: &'static [&'static str],
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    /// Path under `/assets/` to the downloadable CV.
    pub cv_file: &'static str,
    /// Path under `/assets/` to the about-section photo.
    pub photo: &'static str,
}

/// One entry in the education carousel.
#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub start_year: &'static str,
    /// `None` renders as "Present".
    pub end_year: Option<&'static str>,
    pub description: &'static str,
    /// Path under `/assets/` to the institution logo.
    pub logo: &'static str,
    pub achievements: &'static [&'static str],
}

/// One card in the skills grid.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub technologies: &'static [&'static str],
}

/// Completion state shown on a project card's badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    OnHold,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

/// Group or individual work, shown on the card's corner badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Contribution {
    Group,
    Individual,
}

impl Contribution {
    pub fn label(self) -> &'static str {
        match self {
            Contribution::Group => "Group",
            Contribution::Individual => "Individual",
        }
    }
}

/// One card in the project grid.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub status: ProjectStatus,
    /// Filter category tag. Must match one of [`Portfolio::categories`].
    pub category: &'static str,
    /// Path under `/assets/` to the card image.
    pub image: Option<&'static str>,
    pub contribution: Contribution,
}

/// A link in the navbar (anchor within the page).
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

/// A social profile link (hero rail and footer).
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// A direct contact channel (contact section sidebar).
#[derive(Debug, Clone, Serialize)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

/// Everything the site renders, as one borrowed bundle.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub nav: &'static [NavLink],
    pub socials: &'static [SocialLink],
    pub education: &'static [EducationEntry],
    pub skills: &'static [SkillGroup],
    pub projects: &'static [Project],
    pub channels: &'static [ContactChannel],
}

/// Sentinel category that selects every project.
pub const ALL_CATEGORY: &str = "All";

impl Portfolio {
    /// Filter categories in display order: the `All` sentinel first, then
    /// each distinct project category in first-appearance order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut out = vec![ALL_CATEGORY];
        for project in self.projects {
            if !out.contains(&project.category) {
                out.push(project.category);
            }
        }
        out
    }

    /// Projects matching a category tag. The `All` sentinel matches
    /// everything; a tag with no matching projects yields an empty set
    /// (the grid renders its "no projects found" path, not an error).
    pub fn projects_in(&self, category: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| category == ALL_CATEGORY || p.category == category)
            .collect()
    }
}

/// The site content. One hand-authored instance for the whole process.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Anjana Nimesh",
            full_name: "Anjana Nimesh Sathsara",
            roles: &["Full Stack Developer", "IT Undergraduate"],
            tagline: "Undergraduate at University of Moratuwa, passionate about \
                      creating innovative solutions and pushing the boundaries of \
                      technology.",
            about: &[
                "I am a third-year undergraduate at the Faculty of Information \
                 Technology, University of Moratuwa, with a strong passion for \
                 Software Engineering and technology driven problem solving. I \
                 enjoy designing and building efficient, scalable solutions that \
                 make a real impact.",
                "With expertise in modern web technologies and software \
                 development practices, I specialize in creating innovative \
                 applications that bridge the gap between complex technical \
                 requirements and user-friendly experiences. My journey combines \
                 academic excellence with practical project experience, \
                 leadership skills, and a commitment to continuous learning in \
                 the ever evolving tech landscape.",
            ],
            location: "Moratuwa, Sri Lanka",
            email: "anjananimesh22@gmail.com",
            phone: "+94 71 328 8667",
            cv_file: "Anjana_Nimesh_CV.pdf",
            photo: "image.jpg",
        },
        nav: &[
            NavLink { label: "Home", anchor: "home" },
            NavLink { label: "About", anchor: "about" },
            NavLink { label: "Education", anchor: "education" },
            NavLink { label: "Skills", anchor: "skills" },
            NavLink { label: "Projects", anchor: "projects" },
            NavLink { label: "Contact", anchor: "contact" },
        ],
        socials: &[
            SocialLink {
                name: "GitHub",
                url: "https://github.com/AnjanaNimesh",
            },
            SocialLink {
                name: "LinkedIn",
                url: "https://www.linkedin.com/in/anjana-nimesh-8801a8271/",
            },
            SocialLink {
                name: "Medium",
                url: "https://medium.com/@anjana.n.sathsara.j.k.d",
            },
            SocialLink {
                name: "Email",
                url: "mailto:anjananimesh22@gmail.com",
            },
        ],
        education: &[
            EducationEntry {
                degree: "B.Sc. (Hons) in Information Technology",
                institution: "University of Moratuwa",
                start_year: "2023",
                end_year: None,
                description: "Currently a third-year undergraduate at the \
                              University of Moratuwa, pursuing a BSc in \
                              Information Technology, while actively gaining \
                              hands-on experience through academic work and \
                              practical projects.",
                logo: "uom.png",
                achievements: &["CGPA - 3.64"],
            },
            EducationEntry {
                degree: "G.C.E Advanced Level Examination",
                institution: "Saranath National College",
                start_year: "2018",
                end_year: Some("2021"),
                description: "I completed my Advanced Level studies in the Bio \
                              Science stream, which helped me build a strong \
                              foundation in analytical thinking and \
                              problem-solving, paving the way for my interest \
                              and growth in technological work.",
                logo: "school.png",
                achievements: &["Z-score - 1.7426", "AAC Passes"],
            },
        ],
        skills: &[
            SkillGroup {
                title: "Programming Languages",
                technologies: &["C", "Java", "JavaScript", "TypeScript"],
            },
            SkillGroup {
                title: "Frontend Development",
                technologies: &[
                    "ReactJs",
                    "NextJs",
                    "Tailwind CSS",
                    "React Native(Mobile)",
                    "HTML",
                    "CSS",
                ],
            },
            SkillGroup {
                title: "Backend Development",
                technologies: &["NodeJs", "NestJs", "ExpressJs"],
            },
            SkillGroup {
                title: "Database",
                technologies: &["MongoDB", "MySQL"],
            },
            SkillGroup {
                title: "Others",
                technologies: &["Git", "Figma", "Click Up"],
            },
        ],
        projects: &[
            Project {
                title: "CeyAgro - IoT Dashboard",
                description: "CeyAgro is a cloud-based IoT platform designed for \
                              real-time monitoring and analysis of sensor data \
                              from remote devices. The system supports multiple \
                              users, allowing them to visualize, manage, and \
                              analyze IoT device data through interactive \
                              dashboards.",
                technologies: &[
                    "Nextjs",
                    "Nestjs",
                    "MongoDB",
                    "AWS IoT Core",
                    "AWS S3",
                    "Ardunio",
                ],
                live_url: None,
                github_url: Some("https://github.com/MohamedASHRIF/CeyAgro-IOT"),
                status: ProjectStatus::Completed,
                category: "Web App",
                image: Some("ceyagro.png"),
                contribution: Contribution::Group,
            },
            Project {
                title: "Sign Bridge - Gesture to Speech Glove",
                description: "Sign Bridge is a wearable microcontroller-based \
                              glove designed to assist individuals who use sign \
                              language by converting hand gestures into spoken \
                              words",
                technologies: &["Ardunio", "C++"],
                live_url: None,
                github_url: None,
                status: ProjectStatus::Completed,
                category: "IoT",
                image: Some("Sign.png"),
                contribution: Contribution::Group,
            },
            Project {
                title: "Personal Portfolio",
                description: "This portfolio showcases my education, projects, \
                              and technical skills, along with detailed \
                              descriptions and visuals, presenting my work and \
                              achievements in a clear and engaging manner.",
                technologies: &["Rust", "Axum", "Maud"],
                live_url: Some("https://anjana-nimesh.vercel.app/"),
                github_url: Some("https://github.com/AnjanaNimesh/Portfolio"),
                status: ProjectStatus::Completed,
                category: "Web App",
                image: Some("portfolio.png"),
                contribution: Contribution::Individual,
            },
            Project {
                title: "Stray Care - Community Platform",
                description: "Stray Care is a web application that supports \
                              stray animal welfare by allowing users to report, \
                              register, and help stray dogs and cats, while \
                              connecting volunteers for care and donations.",
                technologies: &["ReactJS", "Tailwind CSS", "Ballerina", "MongoDB"],
                live_url: None,
                github_url: Some("https://github.com/AnjanaNimesh/Stray-Care-Ballerina"),
                status: ProjectStatus::Completed,
                category: "Web App",
                image: Some("stray.png"),
                contribution: Contribution::Group,
            },
        ],
        channels: &[
            ContactChannel {
                title: "Email",
                value: "anjananimesh22@gmail.com",
                link: Some("mailto:anjananimesh22@gmail.com"),
            },
            ContactChannel {
                title: "Phone",
                value: "+94 71 328 8667",
                link: None,
            },
            ContactChannel {
                title: "Location",
                value: "Moratuwa, Sri Lanka",
                link: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_start_with_all_sentinel() {
        let p = portfolio();
        let categories = p.categories();
        assert_eq!(categories[0], ALL_CATEGORY);
        assert!(categories.contains(&"Web App"));
        assert!(categories.contains(&"IoT"));
    }

    #[test]
    fn categories_are_distinct() {
        let p = portfolio();
        let categories = p.categories();
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(categories, deduped);
    }

    #[test]
    fn all_sentinel_selects_every_project() {
        let p = portfolio();
        assert_eq!(p.projects_in(ALL_CATEGORY).len(), p.projects.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let p = portfolio();
        for project in p.projects_in("IoT") {
            assert_eq!(project.category, "IoT");
        }
        assert!(!p.projects_in("IoT").is_empty());
    }

    #[test]
    fn unmatched_category_yields_empty_set() {
        let p = portfolio();
        assert!(p.projects_in("Machine Learning").is_empty());
    }

    #[test]
    fn every_project_category_is_listed() {
        let p = portfolio();
        let categories = p.categories();
        for project in p.projects {
            assert!(categories.contains(&project.category));
        }
    }
}
