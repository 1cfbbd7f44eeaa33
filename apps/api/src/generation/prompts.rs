// All LLM prompt constants for the optimization stages.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{FACTUAL_INSTRUCTION, JSON_ONLY_INSTRUCTION};
use crate::llm_client::PromptSpec;
use crate::models::assessment::Assessment;
use crate::models::questionnaire::UserResponses;
use crate::models::resume::StructuredResume;

/// System prompt for ATS resume optimization — enforces JSON-only output.
pub const OPTIMIZE_SYSTEM: &str = "You are an expert resume writer specializing in \
    ATS-optimized resumes that pass automated screening and impress hiring managers. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

const OPTIMIZE_TEMPERATURE: f32 = 0.2;
const OPTIMIZE_MAX_TOKENS: u32 = 3500;

/// ATS optimization prompt template.
/// Replace: {factual}, {resume_text}, {score}, {experience_level},
///          {current_skills}, {recommended_skills}, {improvements},
///          {missing_sections}, the questionnaire fields, and {json_only}.
const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"Create an ATS-optimized, professional resume combining the original resume, assessment feedback, and the candidate's answers.

{factual}

ORIGINAL RESUME:
{resume_text}

ASSESSMENT RESULTS:
- Overall Score: {score}/10
- Experience Level: {experience_level}
- Current Skills: {current_skills}
- Recommended Skills: {recommended_skills}
- Areas for Improvement: {improvements}
- Missing Sections: {missing_sections}

CANDIDATE ANSWERS:
- Career Objective: {career_objective}
- Key Achievements: {achievements}
- Additional Skills: {skills_to_add}
- Recent Projects: {recent_projects}
- Target Industry: {target_industry}
- Target Level: {target_level}
- Company Size Preference: {company_size}

Requirements:
1. Use industry-specific keywords for {target_industry}
2. Format for {target_level} positions
3. Include quantified achievements from the candidate's answers
4. Use strong action verbs and measurable results
5. Ensure ATS-friendly formatting with clear section headers
6. Incorporate both existing and recommended skills strategically
7. Create a compelling professional summary targeting the candidate's objective

{json_only}

Return a JSON object with this EXACT structure:
{
    "personal_info": {
        "name": "Full Name",
        "email": "email@example.com",
        "phone": "Phone Number",
        "location": "City, State",
        "linkedin": "LinkedIn URL (if available)",
        "portfolio": "Website URL (if available)"
    },
    "professional_summary": "2-3 sentence compelling summary with keywords for the target industry and level",
    "experience": [
        {
            "title": "Job Title",
            "company": "Company Name",
            "location": "City, State",
            "duration": "MM/YYYY - MM/YYYY",
            "achievements": [
                "Enhanced achievement with quantified results and strong action verbs",
                "Another achievement showing impact and using industry keywords"
            ]
        }
    ],
    "education": [
        {
            "degree": "Degree Type and Major",
            "institution": "University Name",
            "location": "City, State",
            "graduation": "MM/YYYY",
            "gpa": "GPA (if 3.5+, otherwise omit)",
            "honors": "Relevant honors/awards (optional)"
        }
    ],
    "skills": {
        "technical": ["Priority technical skills for the target role"],
        "tools": ["Industry-relevant tools and platforms"],
        "languages": ["Programming/spoken languages if relevant"]
    },
    "projects": [
        {
            "name": "Project Name",
            "description": "Description emphasizing technologies and impact with measurable results",
            "link": "GitHub/Demo link (if available)"
        }
    ],
    "certifications": ["Relevant certifications"],
    "achievements": ["Key career achievements with quantified results"]
}

CRITICAL ATS OPTIMIZATION RULES:
- Use exact keywords from the target industry and role level
- Include metrics and numbers wherever possible
- Use standard section headers (EXPERIENCE, EDUCATION, SKILLS, etc.)
- Front-load important keywords in achievement bullets
- Include both hard and soft skills relevant to the target role"#;

/// Builds the resume optimization prompt. Deterministic for fixed inputs.
pub fn build_optimize_prompt(
    resume_text: &str,
    assessment: &Assessment,
    responses: &UserResponses,
) -> PromptSpec {
    PromptSpec {
        system: OPTIMIZE_SYSTEM,
        prompt: OPTIMIZE_PROMPT_TEMPLATE
            .replace("{factual}", FACTUAL_INSTRUCTION)
            .replace("{resume_text}", resume_text)
            .replace("{score}", &assessment.overall_score.to_string())
            .replace("{experience_level}", &assessment.experience_level)
            .replace("{current_skills}", &assessment.current_skills.join(", "))
            .replace(
                "{recommended_skills}",
                &assessment.recommended_skills.join(", "),
            )
            .replace("{improvements}", &assessment.improvements.join(", "))
            .replace(
                "{missing_sections}",
                &assessment.missing_sections.join(", "),
            )
            .replace("{career_objective}", &responses.career_objective)
            .replace("{achievements}", &responses.achievements)
            .replace("{skills_to_add}", &responses.skills_to_add)
            .replace("{recent_projects}", &responses.recent_projects)
            .replace("{target_industry}", &responses.target_industry.to_string())
            .replace("{target_level}", &responses.target_level.to_string())
            .replace("{company_size}", &responses.company_size.to_string())
            .replace("{json_only}", JSON_ONLY_INSTRUCTION),
        temperature: OPTIMIZE_TEMPERATURE,
        max_tokens: OPTIMIZE_MAX_TOKENS,
    }
}

/// System prompt for interview question generation — enforces JSON-only output.
pub const QUESTIONS_SYSTEM: &str = "You are an experienced technical interviewer. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

const QUESTIONS_TEMPERATURE: f32 = 0.5;
const QUESTIONS_MAX_TOKENS: u32 = 2048;

/// Interview question prompt template.
/// Replace: {skills}, {experience_level}, {json_only}.
const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Based on the following skills and experience level, generate 10 relevant technical and behavioral interview questions.

Skills: {skills}
Experience Level: {experience_level}

Mix technical questions that probe depth in the listed skills with behavioral questions appropriate for the experience level. `type` must be exactly "technical" or "behavioral"; `skill_area` names the skill each question targets.

{json_only}

Return a JSON object with this EXACT structure:
{
    "questions": [
        {
            "question": "Question text here",
            "type": "technical",
            "skill_area": "relevant skill"
        }
    ]
}"#;

/// Builds the interview-question prompt from the assessed skills plus any
/// comma-separated additions the candidate supplied.
pub fn build_questions_prompt(skills: &[String], experience_level: &str) -> PromptSpec {
    PromptSpec {
        system: QUESTIONS_SYSTEM,
        prompt: QUESTIONS_PROMPT_TEMPLATE
            .replace("{skills}", &skills.join(", "))
            .replace("{experience_level}", experience_level)
            .replace("{json_only}", JSON_ONLY_INSTRUCTION),
        temperature: QUESTIONS_TEMPERATURE,
        max_tokens: QUESTIONS_MAX_TOKENS,
    }
}

/// System prompt for cover letter generation — free text, no JSON.
pub const COVER_LETTER_SYSTEM: &str = "You are an expert cover letter writer. \
    Respond with the complete cover letter text and nothing else — \
    no preamble, no commentary, no markdown fences.";

const COVER_LETTER_TEMPERATURE: f32 = 0.4;
const COVER_LETTER_MAX_TOKENS: u32 = 1500;

/// Cover letter prompt template.
/// Replace: {name}, {summary}, {experience_list}, {skills},
///          {career_objective}, {target_industry}, {target_level},
///          {achievements}, {company_size}, {company_name}, {job_description}.
const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Create a professional, compelling cover letter based on the following information.

RESUME DATA:
- Name: {name}
- Professional Summary: {summary}
- Experience: {experience_list}
- Skills: {skills}

CANDIDATE GOALS:
- Career Objective: {career_objective}
- Target Industry: {target_industry}
- Target Level: {target_level}
- Key Achievements: {achievements}
- Company Size Preference: {company_size}

JOB DETAILS:
- Company Name: {company_name}
- Job Description: {job_description}

Create a cover letter that:
1. Has a strong opening that grabs attention
2. Demonstrates knowledge of the company/role (if provided)
3. Highlights relevant experience and achievements with specific examples
4. Shows enthusiasm for the target industry and role
5. Includes a compelling call to action
6. Is 3-4 paragraphs long
7. Uses industry-appropriate language and keywords
8. Shows personality while maintaining professionalism

Format as a complete cover letter with proper structure:
- Date
- Recipient (Dear Hiring Manager or specific name if provided)
- Body paragraphs
- Professional closing
- Signature line

Make it compelling and personalized, not generic."#;

/// Builds the cover letter prompt. `company_name` and `job_description`
/// default to neutral phrasing when absent so the untargeted letter still
/// reads naturally.
pub fn build_cover_letter_prompt(
    resume: &StructuredResume,
    responses: &UserResponses,
    company_name: Option<&str>,
    job_description: Option<&str>,
) -> PromptSpec {
    let experience_list = resume
        .experience
        .iter()
        .map(|e| format!("{} at {}", e.title, e.company))
        .collect::<Vec<_>>()
        .join("; ");

    PromptSpec {
        system: COVER_LETTER_SYSTEM,
        prompt: COVER_LETTER_PROMPT_TEMPLATE
            .replace("{name}", &resume.personal_info.name)
            .replace("{summary}", &resume.professional_summary)
            .replace("{experience_list}", &experience_list)
            .replace("{skills}", &resume.all_skills().join(", "))
            .replace("{career_objective}", &responses.career_objective)
            .replace("{target_industry}", &responses.target_industry.to_string())
            .replace("{target_level}", &responses.target_level.to_string())
            .replace("{achievements}", &responses.achievements)
            .replace("{company_size}", &responses.company_size.to_string())
            .replace(
                "{company_name}",
                company_name.filter(|s| !s.trim().is_empty()).unwrap_or("the company"),
            )
            .replace(
                "{job_description}",
                job_description.filter(|s| !s.trim().is_empty()).unwrap_or("the position"),
            ),
        temperature: COVER_LETTER_TEMPERATURE,
        max_tokens: COVER_LETTER_MAX_TOKENS,
    }
}
