//! Résumé Renderer — StructuredResume → paginated PDF.
//!
//! Fixed section order: header/contact, summary, experience, education,
//! skills, projects, certifications, achievements. A section with no data is
//! omitted entirely, never rendered as an empty heading.

use crate::errors::AppError;
use crate::models::resume::StructuredResume;

use super::{pdf, Block};

pub fn render_resume_pdf(resume: &StructuredResume) -> Result<Vec<u8>, AppError> {
    let title = format!("{} — Resume", display_name(resume));
    pdf::render_blocks(&title, &resume_blocks(resume))
}

/// Builds the ordered block list. Public for section-presence tests.
pub fn resume_blocks(resume: &StructuredResume) -> Vec<Block> {
    let mut blocks = Vec::new();
    let info = &resume.personal_info;

    blocks.push(Block::Title(display_name(resume)));

    let mut contact_parts = Vec::new();
    for part in [&info.email, &info.phone, &info.location] {
        if !part.trim().is_empty() {
            contact_parts.push(part.clone());
        }
    }
    if let Some(linkedin) = info.linkedin.as_deref().filter(|s| !s.trim().is_empty()) {
        contact_parts.push(format!("LinkedIn: {linkedin}"));
    }
    if let Some(site) = info.portfolio.as_deref().filter(|s| !s.trim().is_empty()) {
        contact_parts.push(format!("Portfolio: {site}"));
    }
    if !contact_parts.is_empty() {
        blocks.push(Block::Contact(contact_parts.join(" | ")));
    }
    blocks.push(Block::Spacer(4.0));

    if !resume.professional_summary.trim().is_empty() {
        blocks.push(Block::Heading("PROFESSIONAL SUMMARY".to_string()));
        blocks.push(Block::Text(resume.professional_summary.clone()));
        blocks.push(Block::Spacer(2.0));
    }

    if !resume.experience.is_empty() {
        blocks.push(Block::Heading("PROFESSIONAL EXPERIENCE".to_string()));
        for exp in &resume.experience {
            let mut line = format!("{} | {}", exp.title, exp.company);
            if let Some(location) = exp.location.as_deref().filter(|s| !s.trim().is_empty()) {
                line.push_str(&format!(" | {location}"));
            }
            blocks.push(Block::SubHeading(line));
            if !exp.duration.trim().is_empty() {
                blocks.push(Block::Italic(exp.duration.clone()));
            }
            for achievement in &exp.achievements {
                blocks.push(Block::Bullet(strip_bullet(achievement)));
            }
            blocks.push(Block::Spacer(3.0));
        }
    }

    if !resume.education.is_empty() {
        blocks.push(Block::Heading("EDUCATION".to_string()));
        for edu in &resume.education {
            let mut parts = vec![edu.degree.clone()];
            if !edu.institution.trim().is_empty() {
                parts.push(edu.institution.clone());
            }
            if let Some(location) = edu.location.as_deref().filter(|s| !s.trim().is_empty()) {
                parts.push(location.to_string());
            }
            if let Some(graduation) = edu.graduation.as_deref().filter(|s| !s.trim().is_empty()) {
                parts.push(graduation.to_string());
            }
            blocks.push(Block::SubHeading(parts.join(" | ")));
            if let Some(gpa) = edu.gpa.as_deref().filter(|s| !s.trim().is_empty()) {
                blocks.push(Block::Text(format!("GPA: {gpa}")));
            }
            if let Some(honors) = edu.honors.as_deref().filter(|s| !s.trim().is_empty()) {
                blocks.push(Block::Text(format!("Honors: {honors}")));
            }
            blocks.push(Block::Spacer(2.0));
        }
    }

    let skills: Vec<_> = resume
        .skills
        .iter()
        .filter(|(_, list)| !list.is_empty())
        .collect();
    if !skills.is_empty() {
        blocks.push(Block::Heading("TECHNICAL SKILLS".to_string()));
        for (category, list) in skills {
            blocks.push(Block::Text(format!(
                "{}: {}",
                category_title(category),
                list.join(", ")
            )));
        }
        blocks.push(Block::Spacer(2.0));
    }

    if !resume.projects.is_empty() {
        blocks.push(Block::Heading("PROJECTS".to_string()));
        for project in &resume.projects {
            blocks.push(Block::SubHeading(project.name.clone()));
            if !project.description.trim().is_empty() {
                blocks.push(Block::Text(project.description.clone()));
            }
            if let Some(link) = project.link.as_deref().filter(|s| !s.trim().is_empty()) {
                blocks.push(Block::Text(format!("Link: {link}")));
            }
            blocks.push(Block::Spacer(2.0));
        }
    }

    if !resume.certifications.is_empty() {
        blocks.push(Block::Heading("CERTIFICATIONS".to_string()));
        for cert in &resume.certifications {
            blocks.push(Block::Bullet(cert.clone()));
        }
        blocks.push(Block::Spacer(2.0));
    }

    if !resume.achievements.is_empty() {
        blocks.push(Block::Heading("ACHIEVEMENTS".to_string()));
        for achievement in &resume.achievements {
            blocks.push(Block::Bullet(achievement.clone()));
        }
    }

    blocks
}

fn display_name(resume: &StructuredResume) -> String {
    let name = resume.personal_info.name.trim();
    if name.is_empty() {
        "Your Name".to_string()
    } else {
        name.to_string()
    }
}

/// The model sometimes emits bullets that already carry a bullet glyph.
fn strip_bullet(text: &str) -> String {
    text.trim_start_matches(['•', '-', ' ']).trim().to_string()
}

/// "technical_skills" → "Technical Skills"
fn category_title(category: &str) -> String {
    category
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
