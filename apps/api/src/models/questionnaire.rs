//! Questionnaire data contract. Submitted once per session; immutable after.

use serde::{Deserialize, Serialize};

/// Target industry — drives keyword choice in prompts and the portfolio theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetIndustry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Consulting,
    Marketing,
    Sales,
    Manufacturing,
    #[serde(rename = "Non-profit")]
    NonProfit,
    Government,
    Other,
}

impl std::fmt::Display for TargetIndustry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TargetIndustry::Technology => "Technology",
            TargetIndustry::Healthcare => "Healthcare",
            TargetIndustry::Finance => "Finance",
            TargetIndustry::Education => "Education",
            TargetIndustry::Consulting => "Consulting",
            TargetIndustry::Marketing => "Marketing",
            TargetIndustry::Sales => "Sales",
            TargetIndustry::Manufacturing => "Manufacturing",
            TargetIndustry::NonProfit => "Non-profit",
            TargetIndustry::Government => "Government",
            TargetIndustry::Other => "Other",
        };
        write!(f, "{s}")
    }
}

/// Company size preference, value set mirrored from the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "Startup (1-50)")]
    Startup,
    #[serde(rename = "Small (51-200)")]
    Small,
    #[serde(rename = "Medium (201-1000)")]
    Medium,
    #[serde(rename = "Large (1000+)")]
    Large,
    #[serde(rename = "Enterprise (5000+)")]
    Enterprise,
    #[serde(rename = "No preference")]
    NoPreference,
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompanySize::Startup => "Startup (1-50)",
            CompanySize::Small => "Small (51-200)",
            CompanySize::Medium => "Medium (201-1000)",
            CompanySize::Large => "Large (1000+)",
            CompanySize::Enterprise => "Enterprise (5000+)",
            CompanySize::NoPreference => "No preference",
        };
        write!(f, "{s}")
    }
}

/// Target position level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLevel {
    #[serde(rename = "Entry Level")]
    Entry,
    #[serde(rename = "Mid Level")]
    Mid,
    #[serde(rename = "Senior Level")]
    Senior,
    #[serde(rename = "Lead/Principal")]
    LeadPrincipal,
    Management,
    Executive,
}

impl std::fmt::Display for TargetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TargetLevel::Entry => "Entry Level",
            TargetLevel::Mid => "Mid Level",
            TargetLevel::Senior => "Senior Level",
            TargetLevel::LeadPrincipal => "Lead/Principal",
            TargetLevel::Management => "Management",
            TargetLevel::Executive => "Executive",
        };
        write!(f, "{s}")
    }
}

/// The user's questionnaire answers. `career_objective` and `achievements`
/// are required at submission; the workflow rejects blanks before any
/// generation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponses {
    pub career_objective: String,
    pub achievements: String,
    #[serde(default)]
    pub skills_to_add: String,
    #[serde(default)]
    pub recent_projects: String,
    pub target_industry: TargetIndustry,
    pub target_level: TargetLevel,
    pub company_size: CompanySize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_serde_uses_form_values() {
        let industry: TargetIndustry = serde_json::from_str(r#""Non-profit""#).unwrap();
        assert_eq!(industry, TargetIndustry::NonProfit);
        assert_eq!(serde_json::to_string(&industry).unwrap(), r#""Non-profit""#);
    }

    #[test]
    fn test_company_size_serde_roundtrip() {
        let size: CompanySize = serde_json::from_str(r#""Startup (1-50)""#).unwrap();
        assert_eq!(size, CompanySize::Startup);
        assert_eq!(size.to_string(), "Startup (1-50)");
    }

    #[test]
    fn test_target_level_display_matches_serde() {
        let level: TargetLevel = serde_json::from_str(r#""Lead/Principal""#).unwrap();
        assert_eq!(level, TargetLevel::LeadPrincipal);
        assert_eq!(level.to_string(), "Lead/Principal");
    }

    #[test]
    fn test_responses_deserialize_with_optional_blanks() {
        let responses: UserResponses = serde_json::from_str(
            r#"{
                "career_objective": "Senior backend role",
                "achievements": "Cut infra spend 30%",
                "target_industry": "Finance",
                "target_level": "Senior Level",
                "company_size": "No preference"
            }"#,
        )
        .unwrap();
        assert!(responses.skills_to_add.is_empty());
        assert!(responses.recent_projects.is_empty());
        assert_eq!(responses.target_industry, TargetIndustry::Finance);
    }

    #[test]
    fn test_unknown_industry_value_is_rejected() {
        let result: Result<TargetIndustry, _> = serde_json::from_str(r#""Aerospace""#);
        assert!(result.is_err(), "form enums are closed sets");
    }
}
