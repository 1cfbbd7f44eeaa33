//! Portfolio Renderer — StructuredResume + UserResponses → self-contained
//! HTML page.
//!
//! The page skeleton is a template constant with `{placeholder}`
//! substitution; the repeated fragments (skill cards, timeline items,
//! project cards) are built by small helpers. Every user-provided value
//! passes through `escape_html` before it reaches the page.

use crate::models::questionnaire::{TargetIndustry, UserResponses};
use crate::models::resume::StructuredResume;

/// Color triple for the portfolio theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// Baseline theme, used for every industry without a dedicated palette.
const DEFAULT_THEME: Theme = Theme {
    primary: "#667eea",
    secondary: "#764ba2",
    accent: "#f093fb",
};

/// Fixed industry → color lookup. Unlisted industries get the baseline.
pub fn theme_for_industry(industry: TargetIndustry) -> Theme {
    match industry {
        TargetIndustry::Technology => DEFAULT_THEME,
        TargetIndustry::Healthcare => Theme {
            primary: "#11998e",
            secondary: "#38ef7d",
            accent: "#73c8a9",
        },
        TargetIndustry::Finance => Theme {
            primary: "#2c3e50",
            secondary: "#3498db",
            accent: "#85c1e5",
        },
        TargetIndustry::Education => Theme {
            primary: "#8e44ad",
            secondary: "#3498db",
            accent: "#bb6bd9",
        },
        TargetIndustry::Marketing => Theme {
            primary: "#e74c3c",
            secondary: "#f39c12",
            accent: "#f8b500",
        },
        TargetIndustry::Consulting => Theme {
            primary: "#34495e",
            secondary: "#95a5a6",
            accent: "#bdc3c7",
        },
        _ => DEFAULT_THEME,
    }
}

/// Minimal HTML entity escaping for text and attribute positions.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the complete portfolio page.
pub fn render_portfolio_html(resume: &StructuredResume, responses: &UserResponses) -> String {
    let theme = theme_for_industry(responses.target_industry);
    let info = &resume.personal_info;

    let name = escape_html(non_empty(&info.name, "Your Name"));
    let email = escape_html(non_empty(&info.email, "email@example.com"));
    let phone = escape_html(non_empty(&info.phone, "Phone Number"));
    let location = escape_html(non_empty(&info.location, "Location"));
    let summary = escape_html(non_empty(
        &resume.professional_summary,
        "Professional summary goes here.",
    ));
    let objective = escape_html(non_empty(
        &responses.career_objective,
        "Professional seeking new opportunities",
    ));

    PAGE_TEMPLATE
        .replace("{primary}", theme.primary)
        .replace("{secondary}", theme.secondary)
        .replace("{accent}", theme.accent)
        .replace("{name}", &name)
        .replace("{objective}", &objective)
        .replace("{summary}", &summary)
        .replace("{location}", &location)
        .replace("{industry}", &escape_html(&responses.target_industry.to_string()))
        .replace("{level}", &escape_html(&responses.target_level.to_string()))
        .replace("{skills_cards}", &skills_cards(resume))
        .replace("{timeline_items}", &timeline_items(resume))
        .replace("{project_cards}", &project_cards(resume))
        .replace("{extra_contacts}", &extra_contacts(resume, theme))
        .replace("{email}", &email)
        .replace("{phone}", &phone)
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
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

fn skills_cards(resume: &StructuredResume) -> String {
    let mut out = String::new();
    for (category, list) in resume.skills.iter().filter(|(_, l)| !l.is_empty()) {
        let tags: String = list
            .iter()
            .map(|s| format!(r#"<span class="skill-tag">{}</span>"#, escape_html(s)))
            .collect();
        out.push_str(&format!(
            r#"
            <div class="skill-category fade-in">
                <h3>{}</h3>
                <div class="skill-tags">{tags}</div>
            </div>"#,
            escape_html(&category_title(category))
        ));
    }
    out
}

fn timeline_items(resume: &StructuredResume) -> String {
    let mut out = String::new();
    for exp in &resume.experience {
        let achievements = if exp.achievements.is_empty() {
            String::new()
        } else {
            let items: String = exp
                .achievements
                .iter()
                .map(|a| format!("<li>{}</li>", escape_html(a.trim_start_matches(['•', ' ']).trim())))
                .collect();
            format!("<ul>{items}</ul>")
        };
        out.push_str(&format!(
            r#"
            <div class="timeline-item fade-in">
                <div class="job-title">{}</div>
                <div class="company">{}</div>
                <div class="duration">{}</div>
                <div class="description">{achievements}</div>
            </div>"#,
            escape_html(non_empty(&exp.title, "Job Title")),
            escape_html(non_empty(&exp.company, "Company Name")),
            escape_html(non_empty(&exp.duration, "Duration")),
        ));
    }
    out
}

/// Project cards; when no projects exist, achievements stand in so the
/// section never renders empty.
fn project_cards(resume: &StructuredResume) -> String {
    let mut out = String::new();

    for project in &resume.projects {
        let link = match project.link.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(url) => format!(
                r#"<a href="{}" target="_blank">View Project →</a>"#,
                escape_html(url)
            ),
            None => String::new(),
        };
        out.push_str(&format!(
            r#"
            <div class="project-card fade-in">
                <div class="project-header"><h3>{}</h3></div>
                <div class="project-body"><p>{}</p>{link}</div>
            </div>"#,
            escape_html(non_empty(&project.name, "Project")),
            escape_html(&project.description),
        ));
    }

    if resume.projects.is_empty() {
        for (i, achievement) in resume.achievements.iter().enumerate() {
            out.push_str(&format!(
                r#"
            <div class="project-card fade-in">
                <div class="project-header"><h3>Achievement {}</h3></div>
                <div class="project-body"><p>{}</p></div>
            </div>"#,
                i + 1,
                escape_html(achievement),
            ));
        }
    }

    out
}

fn extra_contacts(resume: &StructuredResume, theme: Theme) -> String {
    let mut out = String::new();
    let info = &resume.personal_info;
    if let Some(linkedin) = info.linkedin.as_deref().filter(|s| !s.trim().is_empty()) {
        out.push_str(&format!(
            r#"
            <div class="contact-item">
                <i class="fab fa-linkedin"></i>
                <a href="{}" target="_blank" style="color: {};">LinkedIn</a>
            </div>"#,
            escape_html(linkedin),
            theme.primary
        ));
    }
    if let Some(site) = info.portfolio.as_deref().filter(|s| !s.trim().is_empty()) {
        out.push_str(&format!(
            r#"
            <div class="contact-item">
                <i class="fas fa-globe"></i>
                <a href="{}" target="_blank" style="color: {};">Website</a>
            </div>"#,
            escape_html(site),
            theme.primary
        ));
    }
    out
}

/// Page skeleton. Styling and script follow the shipped design: fixed
/// navbar, gradient hero, skills grid, experience timeline, project cards,
/// contact footer, scroll-triggered fade-ins.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - Portfolio</title>
    <link href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css" rel="stylesheet">
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Arial', sans-serif;
            line-height: 1.6;
            color: #333;
            overflow-x: hidden;
        }

        .navbar {
            position: fixed;
            top: 0;
            width: 100%;
            background: rgba(255, 255, 255, 0.95);
            backdrop-filter: blur(10px);
            padding: 1rem 2rem;
            z-index: 1000;
            transition: all 0.3s ease;
        }

        .nav-container {
            display: flex;
            justify-content: space-between;
            align-items: center;
            max-width: 1200px;
            margin: 0 auto;
        }

        .logo {
            font-size: 1.5rem;
            font-weight: bold;
            color: {primary};
        }

        .nav-links {
            display: flex;
            list-style: none;
            gap: 2rem;
        }

        .nav-links a {
            color: #333;
            text-decoration: none;
            transition: color 0.3s ease;
        }

        .nav-links a:hover {
            color: {primary};
        }

        .hero {
            height: 100vh;
            background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
            color: white;
            position: relative;
        }

        .hero-content h1 {
            font-size: 3.5rem;
            margin-bottom: 1rem;
            animation: fadeInUp 1s ease;
        }

        .hero-content p {
            font-size: 1.3rem;
            margin-bottom: 2rem;
            animation: fadeInUp 1s ease 0.2s both;
        }

        .cta-button {
            display: inline-block;
            padding: 12px 30px;
            background: {accent};
            color: white;
            text-decoration: none;
            border-radius: 50px;
            transition: transform 0.3s ease;
            animation: fadeInUp 1s ease 0.4s both;
        }

        .cta-button:hover {
            transform: translateY(-3px);
        }

        .section {
            padding: 80px 2rem;
            max-width: 1200px;
            margin: 0 auto;
        }

        .section h2 {
            text-align: center;
            font-size: 2.5rem;
            margin-bottom: 3rem;
            color: {primary};
        }

        .about-content {
            display: grid;
            grid-template-columns: 1fr 2fr;
            gap: 3rem;
            align-items: center;
        }

        .profile-image {
            width: 300px;
            height: 300px;
            border-radius: 50%;
            background: linear-gradient(135deg, {primary}, {secondary});
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 6rem;
            color: white;
            margin: 0 auto;
        }

        .skills-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 2rem;
            margin-top: 2rem;
        }

        .skill-category {
            background: white;
            padding: 2rem;
            border-radius: 10px;
            box-shadow: 0 5px 15px rgba(0,0,0,0.1);
            transition: transform 0.3s ease;
        }

        .skill-category:hover {
            transform: translateY(-5px);
        }

        .skill-category h3 {
            color: {primary};
            margin-bottom: 1rem;
        }

        .skill-tags {
            display: flex;
            flex-wrap: wrap;
            gap: 0.5rem;
        }

        .skill-tag {
            background: {primary};
            color: white;
            padding: 5px 12px;
            border-radius: 20px;
            font-size: 0.9rem;
        }

        .timeline {
            position: relative;
            padding-left: 2rem;
        }

        .timeline::before {
            content: '';
            position: absolute;
            left: 0;
            top: 0;
            height: 100%;
            width: 2px;
            background: {primary};
        }

        .timeline-item {
            position: relative;
            margin-bottom: 3rem;
            background: white;
            padding: 2rem;
            border-radius: 10px;
            box-shadow: 0 5px 15px rgba(0,0,0,0.1);
            margin-left: 2rem;
        }

        .timeline-item::before {
            content: '';
            position: absolute;
            left: -3rem;
            top: 2rem;
            width: 12px;
            height: 12px;
            background: {primary};
            border-radius: 50%;
        }

        .job-title {
            font-size: 1.3rem;
            font-weight: bold;
            color: {primary};
        }

        .company {
            color: {secondary};
            margin-bottom: 0.5rem;
        }

        .duration {
            color: #666;
            font-style: italic;
            margin-bottom: 1rem;
        }

        .projects-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 2rem;
            margin-top: 2rem;
        }

        .project-card {
            background: white;
            border-radius: 10px;
            overflow: hidden;
            box-shadow: 0 5px 15px rgba(0,0,0,0.1);
            transition: transform 0.3s ease;
        }

        .project-card:hover {
            transform: translateY(-5px);
        }

        .project-header {
            background: linear-gradient(135deg, {primary}, {secondary});
            color: white;
            padding: 1.5rem;
        }

        .project-body {
            padding: 1.5rem;
        }

        .project-body a {
            color: {primary};
        }

        .contact {
            background: #f8f9fa;
            text-align: center;
        }

        .contact-info {
            display: flex;
            justify-content: center;
            gap: 3rem;
            margin-top: 2rem;
            flex-wrap: wrap;
        }

        .contact-item {
            display: flex;
            align-items: center;
            gap: 1rem;
        }

        .contact-item i {
            font-size: 1.5rem;
            color: {primary};
        }

        @keyframes fadeInUp {
            from {
                opacity: 0;
                transform: translateY(30px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }

        .fade-in {
            opacity: 0;
            transform: translateY(30px);
            transition: all 0.6s ease;
        }

        .fade-in.visible {
            opacity: 1;
            transform: translateY(0);
        }

        @media (max-width: 768px) {
            .hero-content h1 {
                font-size: 2.5rem;
            }

            .about-content {
                grid-template-columns: 1fr;
                text-align: center;
            }

            .nav-links {
                display: none;
            }

            .contact-info {
                flex-direction: column;
                gap: 1rem;
            }
        }
    </style>
</head>
<body>
    <nav class="navbar">
        <div class="nav-container">
            <div class="logo">{name}</div>
            <ul class="nav-links">
                <li><a href="#about">About</a></li>
                <li><a href="#skills">Skills</a></li>
                <li><a href="#experience">Experience</a></li>
                <li><a href="#projects">Projects</a></li>
                <li><a href="#contact">Contact</a></li>
            </ul>
        </div>
    </nav>

    <section class="hero">
        <div class="hero-content">
            <h1>{name}</h1>
            <p>{objective}</p>
            <a href="#contact" class="cta-button">Get In Touch</a>
        </div>
    </section>

    <section id="about" class="section">
        <h2>About Me</h2>
        <div class="about-content">
            <div class="profile-image">
                <i class="fas fa-user"></i>
            </div>
            <div>
                <p style="font-size: 1.1rem; margin-bottom: 1.5rem;">{summary}</p>
                <p><strong>Location:</strong> {location}</p>
                <p><strong>Industry Focus:</strong> {industry}</p>
                <p><strong>Experience Level:</strong> {level}</p>
            </div>
        </div>
    </section>

    <section id="skills" class="section">
        <h2>Skills &amp; Expertise</h2>
        <div class="skills-grid">{skills_cards}
        </div>
    </section>

    <section id="experience" class="section">
        <h2>Professional Experience</h2>
        <div class="timeline">{timeline_items}
        </div>
    </section>

    <section id="projects" class="section">
        <h2>Featured Projects</h2>
        <div class="projects-grid">{project_cards}
        </div>
    </section>

    <section id="contact" class="section contact">
        <h2>Let's Connect</h2>
        <p style="font-size: 1.1rem; margin-bottom: 2rem;">Ready to collaborate? I'd love to hear from you!</p>
        <div class="contact-info">
            <div class="contact-item">
                <i class="fas fa-envelope"></i>
                <span>{email}</span>
            </div>
            <div class="contact-item">
                <i class="fas fa-phone"></i>
                <span>{phone}</span>
            </div>{extra_contacts}
        </div>
    </section>

    <script>
        document.querySelectorAll('a[href^="#"]').forEach(anchor => {
            anchor.addEventListener('click', function (e) {
                e.preventDefault();
                const target = document.querySelector(this.getAttribute('href'));
                if (target) {
                    target.scrollIntoView({
                        behavior: 'smooth',
                        block: 'start'
                    });
                }
            });
        });

        const observer = new IntersectionObserver((entries) => {
            entries.forEach(entry => {
                if (entry.isIntersecting) {
                    entry.target.classList.add('visible');
                }
            });
        }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });

        document.querySelectorAll('.fade-in').forEach(el => {
            observer.observe(el);
        });

        window.addEventListener('scroll', () => {
            const navbar = document.querySelector('.navbar');
            if (window.scrollY > 100) {
                navbar.style.background = 'rgba(255, 255, 255, 0.98)';
                navbar.style.boxShadow = '0 2px 20px rgba(0,0,0,0.1)';
            } else {
                navbar.style.background = 'rgba(255, 255, 255, 0.95)';
                navbar.style.boxShadow = 'none';
            }
        });

        const heroTitle = document.querySelector('.hero-content h1');
        const originalText = heroTitle.textContent;
        heroTitle.textContent = '';

        let i = 0;
        const typeWriter = () => {
            if (i < originalText.length) {
                heroTitle.textContent += originalText.charAt(i);
                i++;
                setTimeout(typeWriter, 100);
            }
        };

        setTimeout(typeWriter, 1000);
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questionnaire::{CompanySize, TargetLevel};
    use crate::models::resume::{ExperienceEntry, PersonalInfo, Project};

    fn fixture_responses(industry: TargetIndustry) -> UserResponses {
        UserResponses {
            career_objective: "Senior engineer role".to_string(),
            achievements: "Shipped things".to_string(),
            skills_to_add: String::new(),
            recent_projects: String::new(),
            target_industry: industry,
            target_level: TargetLevel::Senior,
            company_size: CompanySize::NoPreference,
        }
    }

    fn fixture_resume() -> StructuredResume {
        let mut resume = StructuredResume {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Austin, TX".to_string(),
                linkedin: Some("https://linkedin.com/in/jane".to_string()),
                portfolio: None,
            },
            professional_summary: "Platform engineer.".to_string(),
            experience: vec![ExperienceEntry {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: None,
                duration: "2020 - Present".to_string(),
                achievements: vec!["• Did a thing".to_string()],
            }],
            projects: vec![Project {
                name: "Billing".to_string(),
                description: "Invoice rewrite".to_string(),
                link: Some("https://github.com/jane/billing".to_string()),
            }],
            achievements: vec!["Award".to_string()],
            ..Default::default()
        };
        resume
            .skills
            .insert("technical".to_string(), vec!["Rust".to_string()]);
        resume
    }

    #[test]
    fn test_finance_theme_triple() {
        let theme = theme_for_industry(TargetIndustry::Finance);
        assert_eq!(theme.primary, "#2c3e50");
        assert_eq!(theme.secondary, "#3498db");
        assert_eq!(theme.accent, "#85c1e5");
    }

    #[test]
    fn test_unlisted_industry_gets_default_theme() {
        for industry in [
            TargetIndustry::Sales,
            TargetIndustry::Manufacturing,
            TargetIndustry::NonProfit,
            TargetIndustry::Government,
            TargetIndustry::Other,
        ] {
            assert_eq!(theme_for_industry(industry), DEFAULT_THEME);
        }
    }

    #[test]
    fn test_escape_html_entities() {
        assert_eq!(
            escape_html(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_page_contains_all_sections() {
        let html = render_portfolio_html(&fixture_resume(), &fixture_responses(TargetIndustry::Technology));
        for anchor in ["id=\"about\"", "id=\"skills\"", "id=\"experience\"", "id=\"projects\"", "id=\"contact\""] {
            assert!(html.contains(anchor), "missing {anchor}");
        }
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Senior engineer role"));
        assert!(html.contains("Rust"));
        assert!(html.contains("View Project →"));
    }

    #[test]
    fn test_theme_colors_are_substituted() {
        let html = render_portfolio_html(&fixture_resume(), &fixture_responses(TargetIndustry::Finance));
        assert!(html.contains("#2c3e50"));
        assert!(!html.contains("{primary}"));
        assert!(!html.contains("{skills_cards}"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut resume = fixture_resume();
        resume.personal_info.name = "<b>Jane</b>".to_string();
        let html = render_portfolio_html(&resume, &fixture_responses(TargetIndustry::Technology));
        assert!(html.contains("&lt;b&gt;Jane&lt;/b&gt;"));
        assert!(!html.contains("<b>Jane</b>"));
    }

    #[test]
    fn test_achievements_stand_in_when_no_projects() {
        let mut resume = fixture_resume();
        resume.projects.clear();
        let html = render_portfolio_html(&resume, &fixture_responses(TargetIndustry::Technology));
        assert!(html.contains("Achievement 1"));
        assert!(html.contains("Award"));
    }

    #[test]
    fn test_blank_fields_fall_back_to_placeholders() {
        let resume = StructuredResume::default();
        let html = render_portfolio_html(&resume, &fixture_responses(TargetIndustry::Technology));
        assert!(html.contains("Your Name"));
        assert!(html.contains("email@example.com"));
    }
}
