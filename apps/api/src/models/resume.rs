//! Structured resume contract — output of the optimization stage, input to
//! every renderer.
//!
//! Deserialization is deliberately lenient: the model occasionally omits
//! optional sections, and an omitted section renders as an omitted section
//! rather than a failed stage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub graduation: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub honors: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// The optimized resume. Section order in rendered documents is fixed by the
/// renderers, not by this struct; `skills` keys sort alphabetically so prompt
/// embedding and rendering are deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredResume {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub professional_summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl StructuredResume {
    /// Flat view of every listed skill across categories, used when
    /// assembling question-generation and cover-letter prompts.
    pub fn all_skills(&self) -> Vec<&str> {
        self.skills
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_deserializes_from_model_shape() {
        let json = r#"{
            "personal_info": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "555-0100",
                "location": "London, UK",
                "linkedin": "https://linkedin.com/in/ada"
            },
            "professional_summary": "Analytical engineer.",
            "experience": [{
                "title": "Engineer",
                "company": "Analytical Engines Ltd",
                "location": "London, UK",
                "duration": "01/2020 - Present",
                "achievements": ["Shipped the difference engine", "Cut compute cost 40%"]
            }],
            "education": [{
                "degree": "BSc Mathematics",
                "institution": "University of London",
                "graduation": "06/2019"
            }],
            "skills": {
                "technical": ["Rust", "Python"],
                "tools": ["Git"]
            },
            "projects": [{"name": "Notes", "description": "First published program"}],
            "certifications": [],
            "achievements": ["First programmer"]
        }"#;
        let resume: StructuredResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.personal_info.name, "Ada Lovelace");
        assert_eq!(resume.experience[0].achievements.len(), 2);
        assert!(resume.personal_info.portfolio.is_none());
        assert!(resume.education[0].gpa.is_none());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let resume: StructuredResume = serde_json::from_str(r#"{}"#).unwrap();
        assert!(resume.experience.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.professional_summary.is_empty());
    }

    #[test]
    fn test_all_skills_flattens_categories_in_key_order() {
        let mut resume = StructuredResume::default();
        resume
            .skills
            .insert("technical".to_string(), vec!["Rust".to_string()]);
        resume
            .skills
            .insert("languages".to_string(), vec!["English".to_string()]);
        // BTreeMap: "languages" sorts before "technical"
        assert_eq!(resume.all_skills(), vec!["English", "Rust"]);
    }
}
