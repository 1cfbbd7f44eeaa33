//! Document renderers.
//!
//! Each renderer is pure: structured data in, bytes out. The PDF renderers
//! emit an ordered list of styled [`Block`]s consumed by the shared paginated
//! engine in [`pdf`]; the portfolio renderer emits a self-contained HTML page.

use chrono::NaiveDate;

pub mod pdf;
pub mod portfolio;
pub mod report_pdf;
pub mod resume_pdf;

/// One styled content block of a paginated document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Document title, large bold, centered.
    Title(String),
    /// Centered contact line under the title.
    Contact(String),
    /// Section heading.
    Heading(String),
    /// Bold body line (job title, question, category).
    SubHeading(String),
    /// Italic body line (duration).
    Italic(String),
    /// Regular body text, wrapped.
    Text(String),
    /// Bulleted body text, wrapped with hanging indent.
    Bullet(String),
    /// Vertical gap in millimeters.
    Spacer(f64),
}

/// Date-stamped download filename: `resume_20260806.pdf`.
pub fn stamped_filename(stem: &str, ext: &str, date: NaiveDate) -> String {
    format!("{stem}_{}.{ext}", date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_filename_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(stamped_filename("resume", "pdf", date), "resume_20260806.pdf");
        assert_eq!(
            stamped_filename("cover_letter", "txt", date),
            "cover_letter_20260806.txt"
        );
    }

    #[test]
    fn test_stamped_filename_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(
            stamped_filename("portfolio", "html", date),
            "portfolio_20260102.html"
        );
    }
}
