//! HTML rendering.
//!
//! Produces the whole portfolio page from the content records. One
//! document, anchor-navigable sections, in source order:
//!
//! ```text
//! #home       Hero with typed-text roles, CV download, social rail
//! #about      Photo + bio + identity card
//! #education  Carousel, one pre-rendered page per slice
//! #skills     Skill-group grid with icon lookup
//! #projects   Filter bar + one pre-rendered grid per category
//! #contact    Channels sidebar + the contact form
//! ```
//!
//! ## No Client State
//!
//! The carousel and the project filter are computed here, not in script.
//! Every carousel page and every category view is in the document; CSS
//! `:target` rules decide which one is visible, and the prev/next/filter
//! controls are plain anchors whose targets come from
//! [`Carousel`](crate::carousel::Carousel) wrap arithmetic and
//! [`Portfolio::projects_in`](crate::content::Portfolio::projects_in).
//! The embedded script handles only the typed-text effect and the contact
//! form's submit lifecycle.
//!
//! All `:target` switching shares the one URL fragment with section
//! navigation, so following a carousel control resets the active project
//! filter to its default view and vice versa. The non-targeted fallback
//! rules in the stylesheet keep a default page and grid visible whenever
//! the fragment points elsewhere.
//!
//! ## CSS and JavaScript
//!
//! Both are embedded at compile time and inlined into the document:
//! - `static/style.css`: base styles (accent colors injected from config)
//! - `static/app.js`: typed-text effect + contact form handling
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::carousel::{Carousel, Direction};
use crate::config::{SiteConfig, ThemeConfig};
use crate::content::{
    ALL_CATEGORY, ContactChannel, EducationEntry, NavLink, Portfolio, Profile, Project,
    ProjectStatus, SkillGroup, SocialLink,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/app.js");

/// What `write_site` produced, for CLI reporting.
#[derive(Debug)]
pub struct BuildSummary {
    pub index_bytes: usize,
    pub assets_copied: usize,
}

/// Render the portfolio document as a string, ready to serve or write.
pub fn render_page(portfolio: &Portfolio, config: &SiteConfig) -> String {
    let css = format!("{}\n\n{}", theme_css(&config.theme), CSS_STATIC);
    let endpoint = format!("{}/api/contact", config.site.base_url);

    let content = html! {
        (navbar(portfolio.nav, portfolio.profile.name))
        main {
            (hero(&portfolio.profile, portfolio.socials))
            (about(&portfolio.profile))
            (education(portfolio.education, config.theme.education_per_page))
            (skills(portfolio.skills))
            (projects(portfolio))
            (contact(portfolio.channels, portfolio.socials, &endpoint))
        }
        (footer(portfolio.profile.name, portfolio.nav))
        script { (PreEscaped(JS)) }
    };

    base_document(portfolio.profile.name, &css, content).into_string()
}

/// Write the rendered site to `output_dir` and copy the assets directory
/// alongside it, producing a tree any static file server can host.
pub fn write_site(
    portfolio: &Portfolio,
    config: &SiteConfig,
    output_dir: &Path,
    assets_dir: &Path,
) -> Result<BuildSummary, RenderError> {
    fs::create_dir_all(output_dir)?;

    let page = render_page(portfolio, config);
    let index_bytes = page.len();
    fs::write(output_dir.join("index.html"), page)?;

    let mut assets_copied = 0;
    if assets_dir.is_dir() {
        let dst = output_dir.join("assets");
        fs::create_dir_all(&dst)?;
        assets_copied = copy_dir_recursive(assets_dir, &dst)?;
    }

    Ok(BuildSummary {
        index_bytes,
        assets_copied,
    })
}

/// CSS custom properties from the theme config, prepended to the static
/// stylesheet so the accent color is configurable without a rebuild of
/// the stylesheet itself.
fn theme_css(theme: &ThemeConfig) -> String {
    format!(
        ":root {{\n  --accent: {};\n  --accent-soft: {};\n}}",
        theme.accent, theme.accent_soft
    )
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// URL-safe slug for a category anchor: lowercased, spaces to dashes.
fn category_slug(category: &str) -> String {
    category.to_lowercase().replace(' ', "-")
}

// ============================================================================
// Document chrome
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Fixed top navbar. The hamburger is a checkbox toggle so collapse works
/// without script.
fn navbar(nav: &[NavLink], brand: &str) -> Markup {
    html! {
        header.navbar {
            a.brand href="#home" { (brand) }
            input.nav-toggle type="checkbox" id="nav-toggle";
            label.nav-hamburger for="nav-toggle" {
                span.hamburger-line {}
                span.hamburger-line {}
                span.hamburger-line {}
            }
            nav.nav-links {
                ul {
                    @for link in nav {
                        li {
                            a href={ "#" (link.anchor) } { (link.label) }
                        }
                    }
                }
            }
        }
    }
}

fn footer(name: &str, nav: &[NavLink]) -> Markup {
    let year = current_year();
    html! {
        footer.site-footer {
            nav.footer-nav {
                ul {
                    @for link in nav {
                        li { a href={ "#" (link.anchor) } { (link.label) } }
                    }
                }
            }
            p.copyright { "© " (year) " " (name) ". All rights reserved." }
            a.back-to-top href="#home" aria-label="Scroll to top" { "↑" }
        }
    }
}

fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

/// Section heading with the accent underline bar.
fn section_heading(title: &str, blurb: Option<&str>) -> Markup {
    html! {
        div.section-heading {
            h2 { (title) }
            div.heading-bar {}
            @if let Some(text) = blurb {
                p.section-blurb { (text) }
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

fn hero(profile: &Profile, socials: &[SocialLink]) -> Markup {
    let roles = profile.roles.join("\u{1f}");
    html! {
        section #home.hero {
            div.social-rail {
                @for social in socials {
                    a.social-link href=(social.url) target="_blank" rel="noopener noreferrer"
                        aria-label=(social.name) title=(social.name) {
                        (social_icon(social.name))
                    }
                }
            }
            p.hero-greeting { "Hello, I'm" }
            h1.hero-name { (profile.name) }
            // The script rotates through the roles; unit-separator keeps
            // the attribute unambiguous for role strings with commas.
            p.hero-role data-roles=(roles) {
                span.typed-text { (profile.roles.first().copied().unwrap_or_default()) }
                span.typed-cursor { "|" }
            }
            p.hero-tagline { (profile.tagline) }
            div.hero-actions {
                a.button-solid href={ "assets/" (profile.cv_file) } download=(profile.cv_file) {
                    "Download CV"
                }
                a.button-outline href="#contact" { "Contact Me" }
            }
            a.scroll-cue href="#about" {
                span { "Scroll Down" }
                div.scroll-mouse { div.scroll-dot {} }
            }
        }
    }
}

fn about(profile: &Profile) -> Markup {
    html! {
        section #about.about {
            (section_heading("About Me", None))
            div.about-grid {
                div.about-photo {
                    img src={ "assets/" (profile.photo) } alt=(profile.full_name);
                }
                div.about-card {
                    @for paragraph in profile.about {
                        p { (paragraph) }
                    }
                    div.about-facts {
                        div.fact-card {
                            p { strong { "Name: " } (profile.full_name) }
                            p { strong { "Location: " } (profile.location) }
                        }
                        div.fact-card {
                            p { strong { "Email: " } (profile.email) }
                            p { strong { "Phone: " } (profile.phone) }
                        }
                    }
                }
            }
        }
    }
}

fn education(entries: &[EducationEntry], per_page: usize) -> Markup {
    let carousel = Carousel::new(entries.len(), per_page);
    html! {
        section #education.education {
            (section_heading(
                "Education Journey",
                Some("My academic milestones and educational achievements that \
                      have shaped my journey."),
            ))
            div.carousel {
                @for page in carousel.pages() {
                    (education_page(entries, &carousel, page))
                }
            }
        }
    }
}

/// One carousel page: its slice of entries plus wrap-aware controls and
/// progress dots. Controls are anchors, so paging is render-time data.
fn education_page(entries: &[EducationEntry], carousel: &Carousel, page: usize) -> Markup {
    let bounds = carousel.page_bounds(page);
    html! {
        div.carousel-page id={ "edu-page-" (page) } {
            div.carousel-track {
                @if carousel.has_pages() {
                    a.carousel-control.(Direction::Right.class())
                        href={ "#edu-page-" (carousel.prev_page(page)) }
                        aria-label="Previous" { "‹" }
                }
                div.carousel-cards {
                    @for entry in &entries[bounds] {
                        (education_card(entry))
                    }
                }
                @if carousel.has_pages() {
                    a.carousel-control.(Direction::Left.class())
                        href={ "#edu-page-" (carousel.next_page(page)) }
                        aria-label="Next" { "›" }
                }
            }
            @if carousel.has_pages() {
                div.carousel-dots {
                    @for dot in carousel.pages() {
                        a.dot.active[dot == page] href={ "#edu-page-" (dot) }
                            aria-label={ "Page " (dot + 1) } {}
                    }
                }
            }
        }
    }
}

fn education_card(entry: &EducationEntry) -> Markup {
    html! {
        article.education-card {
            div.education-side {
                div.education-logo {
                    img src={ "assets/" (entry.logo) } alt={ (entry.institution) " logo" };
                }
                p.education-years {
                    (entry.start_year) " - " (entry.end_year.unwrap_or("Present"))
                }
                h5 { (entry.institution) }
            }
            div.education-body {
                h3 { (entry.degree) }
                p { (entry.description) }
                ul.achievements {
                    @for achievement in entry.achievements {
                        li { (achievement) }
                    }
                }
            }
        }
    }
}

fn skills(groups: &[SkillGroup]) -> Markup {
    html! {
        section #skills.skills {
            (section_heading(
                "My Skills",
                Some("Technologies and tools I work with."),
            ))
            @if groups.is_empty() {
                p.empty-note { "No skills found." }
            } @else {
                div.skills-grid {
                    @for group in groups {
                        div.skill-card {
                            div.skill-head {
                                span.skill-icon { (skill_icon(group.title)) }
                                h3 { (group.title) }
                            }
                            div.tech-tags {
                                @for tech in group.technologies {
                                    span.tag { (tech) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn projects(portfolio: &Portfolio) -> Markup {
    let categories = portfolio.categories();
    html! {
        section #projects.projects {
            (section_heading(
                "My Projects",
                Some("Explore the projects I've worked on during my software \
                      engineering journey."),
            ))
            div.filter-bar {
                @for category in &categories {
                    a.filter-chip href={ "#cat-" (category_slug(category)) } { (category) }
                }
            }
            div.filter-views {
                @for category in &categories {
                    (project_grid(category, &portfolio.projects_in(category)))
                }
            }
        }
    }
}

/// The grid for one category view, including the empty path: a category
/// with no matching projects renders a note, never nothing.
fn project_grid(category: &str, projects: &[&Project]) -> Markup {
    html! {
        div.filter-view id={ "cat-" (category_slug(category)) } {
            @if projects.is_empty() {
                p.empty-note {
                    @if category == ALL_CATEGORY {
                        "No projects found."
                    } @else {
                        "No projects found in \"" (category) "\" category."
                    }
                }
            } @else {
                div.project-grid {
                    @for project in projects {
                        (project_card(project))
                    }
                }
            }
        }
    }
}

fn project_card(project: &Project) -> Markup {
    html! {
        article.project-card {
            div.project-media {
                span.status-badge.(status_class(project.status)) {
                    (project.status.label())
                }
                @if let Some(image) = project.image {
                    img src={ "assets/" (image) } alt=(project.title) loading="lazy";
                }
            }
            div.project-body {
                div.project-title-row {
                    h3 { (project.title) }
                    span.category-pill { (project.category) }
                }
                p.project-description { (project.description) }
                div.tech-tags {
                    @for tech in project.technologies {
                        span.tag { (tech) }
                    }
                }
                div.project-links {
                    @if let Some(url) = project.live_url {
                        a href=(url) target="_blank" rel="noopener noreferrer" { "Live Demo" }
                    }
                    @if let Some(url) = project.github_url {
                        a href=(url) target="_blank" rel="noopener noreferrer" { "Source Code" }
                    }
                    span.contribution-pill { (project.contribution.label()) }
                }
            }
        }
    }
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "badge-completed",
        ProjectStatus::InProgress => "badge-progress",
        ProjectStatus::OnHold => "badge-hold",
    }
}

fn contact(channels: &[ContactChannel], socials: &[SocialLink], endpoint: &str) -> Markup {
    html! {
        section #contact.contact {
            (section_heading(
                "Get In Touch",
                Some("Have a question or want to work together? Feel free to \
                      contact me!"),
            ))
            div.contact-grid {
                div.contact-info {
                    h3 { "Contact Information" }
                    @for channel in channels {
                        div.channel {
                            h4 { (channel.title) }
                            @if let Some(link) = channel.link {
                                a href=(link) { (channel.value) }
                            } @else {
                                p { (channel.value) }
                            }
                        }
                    }
                    h4 { "Follow Me" }
                    div.contact-socials {
                        @for social in socials {
                            a href=(social.url) target="_blank" rel="noopener noreferrer"
                                aria-label=(social.name) {
                                (social_icon(social.name))
                            }
                        }
                    }
                }
                div.contact-form-panel {
                    h3 { "Send Me a Message" }
                    (contact_form(endpoint))
                }
            }
        }
    }
}

/// The submission form. The script reads `data-endpoint`, drives the
/// idle/submitting/success/error lifecycle, and toggles the two status
/// boxes; without script the form is inert by design (the relay only
/// accepts JSON).
fn contact_form(endpoint: &str) -> Markup {
    html! {
        form #contact-form data-endpoint=(endpoint) novalidate {
            div.form-row {
                div.form-field {
                    label for="name" { "Your Name" }
                    input type="text" id="name" name="name" placeholder="John Doe" required;
                }
                div.form-field {
                    label for="email" { "Your Email" }
                    input type="email" id="email" name="email"
                        placeholder="john@example.com" required;
                }
            }
            div.form-field {
                label for="subject" { "Subject" }
                input type="text" id="subject" name="subject"
                    placeholder="Project Inquiry" required;
            }
            div.form-field {
                label for="message" { "Message" }
                textarea id="message" name="message" rows="5"
                    placeholder="Your message here..." required {}
            }
            div.form-submit {
                button type="submit" id="contact-submit" { "Send Message" }
            }
            div.form-status.status-success hidden {
                "Your message has been sent successfully!"
            }
            div.form-status.status-error hidden {
                "Failed to send message. Please try again later."
            }
        }
    }
}

// ============================================================================
// Icons
// ============================================================================

/// Social glyph by profile name, with a generic link glyph fallback.
fn social_icon(name: &str) -> Markup {
    let path = match name {
        "GitHub" => {
            "M12 .5C5.7.5.5 5.7.5 12c0 5.1 3.3 9.4 7.9 10.9.6.1.8-.3.8-.6v-2c-3.2.7-3.9-1.5-3.9-1.5-.5-1.3-1.3-1.7-1.3-1.7-1-.7.1-.7.1-.7 1.2.1 1.8 1.2 1.8 1.2 1 1.8 2.7 1.3 3.4 1 .1-.8.4-1.3.7-1.6-2.6-.3-5.3-1.3-5.3-5.7 0-1.3.4-2.3 1.2-3.1-.1-.3-.5-1.5.1-3.1 0 0 1-.3 3.2 1.2a11 11 0 0 1 5.8 0C17.2 4.8 18.2 5 18.2 5c.6 1.6.2 2.8.1 3.1.8.8 1.2 1.8 1.2 3.1 0 4.5-2.7 5.4-5.3 5.7.4.3.8 1 .8 2.1v3.1c0 .3.2.7.8.6a11.5 11.5 0 0 0 7.7-10.9C23.5 5.7 18.3.5 12 .5z"
        }
        "LinkedIn" => {
            "M20.4 20.5h-3.5v-5.6c0-1.3 0-3-1.9-3s-2.1 1.4-2.1 2.9v5.7H9.4V9h3.4v1.6c.5-.9 1.6-1.9 3.4-1.9 3.6 0 4.3 2.4 4.3 5.5v6.3zM5.3 7.4a2.1 2.1 0 1 1 0-4.1 2.1 2.1 0 0 1 0 4.1zm1.8 13.1H3.6V9h3.5v11.5zM22.2 0H1.8C.8 0 0 .8 0 1.7v20.5C0 23.2.8 24 1.8 24h20.4c1 0 1.8-.8 1.8-1.7V1.7c0-1-.8-1.7-1.8-1.7z"
        }
        "Medium" => {
            "M13.5 12a6.8 6.8 0 0 1-6.8 6.8A6.8 6.8 0 0 1 0 12a6.8 6.8 0 0 1 6.8-6.8A6.8 6.8 0 0 1 13.5 12zM21 12c0 3.5-1.5 6.4-3.4 6.4S14.2 15.5 14.2 12s1.5-6.4 3.4-6.4S21 8.5 21 12zM24 12c0 3.2-.5 5.7-1.2 5.7S21.6 15.2 21.6 12s.5-5.7 1.2-5.7S24 8.8 24 12z"
        }
        "Email" => {
            "M24 5.5v13.9c0 .9-.7 1.6-1.6 1.6h-3.8V11.7L12 16.6l-6.5-4.9v9.3H1.6A1.6 1.6 0 0 1 0 19.4V5.5c0-.9.7-1.6 1.6-1.6h1L12 10.9l9.4-7h1c.9 0 1.6.7 1.6 1.6z"
        }
        _ => {
            "M10.6 13.4a1 1 0 0 0 1.4 0l6-6a3 3 0 0 0-4.2-4.2l-2.3 2.3 1.4 1.4 2.3-2.3a1 1 0 0 1 1.4 1.4l-6 6zm2.8-2.8a1 1 0 0 0-1.4 0l-6 6a3 3 0 0 0 4.2 4.2l2.3-2.3-1.4-1.4-2.3 2.3a1 1 0 0 1-1.4-1.4l6-6z"
        }
    };
    html! {
        svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"
            xmlns="http://www.w3.org/2000/svg" {
            path d=(path) {}
        }
    }
}

/// Skill-group glyph by group title. A plain keyed lookup with a globe
/// fallback for titles the table does not know.
fn skill_icon(title: &str) -> Markup {
    let body: Markup = match title {
        "Programming Languages" => html! {
            polyline points="16 18 22 12 16 6" {}
            polyline points="8 6 2 12 8 18" {}
        },
        "Frontend Development" => html! {
            rect x="3" y="3" width="18" height="18" rx="2" {}
            line x1="3" y1="9" x2="21" y2="9" {}
            line x1="9" y1="21" x2="9" y2="9" {}
        },
        "Backend Development" => html! {
            rect x="2" y="2" width="20" height="8" rx="2" {}
            rect x="2" y="14" width="20" height="8" rx="2" {}
            line x1="6" y1="6" x2="6.01" y2="6" {}
            line x1="6" y1="18" x2="6.01" y2="18" {}
        },
        "Database" => html! {
            ellipse cx="12" cy="5" rx="9" ry="3" {}
            path d="M3 5v14a9 3 0 0 0 18 0V5" {}
            path d="M3 12a9 3 0 0 0 18 0" {}
        },
        "DevOps" => html! {
            path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z" {}
        },
        // Default: globe
        _ => html! {
            circle cx="12" cy="12" r="10" {}
            line x1="2" y1="12" x2="22" y2="12" {}
            path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" {}
        },
    };
    html! {
        svg width="24" height="24" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg" {
            (body)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
