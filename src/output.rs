//! CLI output formatting for build and check.
//!
//! Output is information-centric: the primary display for every record is
//! its semantic identity (title, positional index, category), with counts
//! and status as indented context lines. `check` prints the full content
//! inventory; `build` prints what was written where.
//!
//! ```text
//! Education
//! 001 B.Sc. (Hons) in Information Technology
//!     University of Moratuwa, 2023 - Present
//! 002 G.C.E Advanced Level Examination
//!     Saranath National College, 2018 - 2021
//!
//! Projects
//! 001 CeyAgro - IoT Dashboard [Web App]
//! ...
//! ```
//!
//! Formatting is split from printing so tests can assert on lines.

use crate::config::SiteConfig;
use crate::content::Portfolio;
use crate::render::BuildSummary;
use std::path::Path;

/// Format the content inventory shown by `folio check`.
pub fn format_inventory(portfolio: &Portfolio, config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Profile: {}", portfolio.profile.full_name));
    lines.push(format!("    Roles: {}", portfolio.profile.roles.join(", ")));
    lines.push(format!("    CV: assets/{}", portfolio.profile.cv_file));
    lines.push(String::new());

    lines.push("Education".to_string());
    for (idx, entry) in portfolio.education.iter().enumerate() {
        lines.push(format!("{:03} {}", idx + 1, entry.degree));
        lines.push(format!(
            "    {}, {} - {}",
            entry.institution,
            entry.start_year,
            entry.end_year.unwrap_or("Present")
        ));
    }
    lines.push(String::new());

    lines.push("Skills".to_string());
    for (idx, group) in portfolio.skills.iter().enumerate() {
        lines.push(format!(
            "{:03} {} ({} technologies)",
            idx + 1,
            group.title,
            group.technologies.len()
        ));
    }
    lines.push(String::new());

    lines.push("Projects".to_string());
    for (idx, project) in portfolio.projects.iter().enumerate() {
        lines.push(format!(
            "{:03} {} [{}]",
            idx + 1,
            project.title,
            project.category
        ));
        lines.push(format!(
            "    {}, {}",
            project.status.label(),
            project.contribution.label()
        ));
    }
    lines.push(String::new());

    lines.push("Contact relay".to_string());
    if config.mail_ready() {
        lines.push(format!(
            "    SMTP: {}:{} → {}",
            config.mail.smtp_host,
            config.mail.smtp_port,
            config.mail.delivery_inbox()
        ));
    } else {
        lines.push("    SMTP: credentials not set (EMAIL_USER / EMAIL_PASS)".to_string());
    }

    lines
}

/// Format the summary shown after `folio build`.
pub fn format_build_summary(summary: &BuildSummary, output_dir: &Path) -> Vec<String> {
    vec![
        format!(
            "Wrote index.html ({} bytes) to {}",
            summary.index_bytes,
            output_dir.display()
        ),
        format!("Copied {} asset files", summary.assets_copied),
    ]
}

pub fn print_inventory(portfolio: &Portfolio, config: &SiteConfig) {
    for line in format_inventory(portfolio, config) {
        println!("{line}");
    }
}

pub fn print_build_summary(summary: &BuildSummary, output_dir: &Path) {
    for line in format_build_summary(summary, output_dir) {
        println!("{line}");
    }
}
