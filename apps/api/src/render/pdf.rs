//! Shared paginated PDF engine: ordered content blocks in, PDF bytes out.
//!
//! Built on printpdf's builtin Helvetica family. Layout is a simple cursor
//! walk down the page with character-count line wrapping; a block that would
//! cross the bottom margin starts a new page.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::io::BufWriter;

use crate::errors::AppError;

use super::Block;

// US letter
const PAGE_WIDTH: f64 = 215.9;
const PAGE_HEIGHT: f64 = 279.4;
const MARGIN: f64 = 20.0;
const BOTTOM: f64 = 18.0;
const BULLET_INDENT: f64 = 5.0;

const TITLE_SIZE: f64 = 18.0;
const CONTACT_SIZE: f64 = 10.0;
const HEADING_SIZE: f64 = 13.0;
const SUBHEADING_SIZE: f64 = 11.0;
const BODY_SIZE: f64 = 10.0;

struct Cursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    y: f64,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Cursor {
    fn new(title: &str) -> Result<Self, AppError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::Render(format!("PDF font error: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::Render(format!("PDF font error: {e}")))?;
        let oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| AppError::Render(format!("PDF font error: {e}")))?;

        Ok(Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
            regular,
            bold,
            oblique,
        })
    }

    /// Starts a new page when fewer than `needed` millimeters remain.
    fn ensure_room(&mut self, needed: f64) {
        if self.y - needed < BOTTOM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn write_line(&mut self, text: &str, size: f64, x: f64, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
        self.y -= line_height(size);
    }

    fn finish(self) -> Result<Vec<u8>, AppError> {
        let mut buf = BufWriter::new(Vec::new());
        self.doc
            .save(&mut buf)
            .map_err(|e| AppError::Render(format!("PDF save error: {e}")))?;
        buf.into_inner()
            .map_err(|e| AppError::Render(format!("PDF buffer error: {e}")))
    }
}

/// Renders an ordered block list to PDF bytes.
pub fn render_blocks(title: &str, blocks: &[Block]) -> Result<Vec<u8>, AppError> {
    let mut cur = Cursor::new(title)?;

    for block in blocks {
        match block {
            Block::Title(text) => {
                cur.ensure_room(line_height(TITLE_SIZE));
                let x = centered_x(text, TITLE_SIZE);
                let bold = cur.bold.clone();
                cur.write_line(text, TITLE_SIZE, x, &bold);
            }
            Block::Contact(text) => {
                cur.ensure_room(line_height(CONTACT_SIZE));
                let x = centered_x(text, CONTACT_SIZE);
                let regular = cur.regular.clone();
                cur.write_line(text, CONTACT_SIZE, x, &regular);
            }
            Block::Heading(text) => {
                // Keep a heading attached to at least one following line.
                cur.ensure_room(line_height(HEADING_SIZE) + line_height(BODY_SIZE) * 2.0);
                cur.y -= 2.0;
                let bold = cur.bold.clone();
                cur.write_line(text, HEADING_SIZE, MARGIN, &bold);
                cur.y -= 1.0;
            }
            Block::SubHeading(text) => {
                let bold = cur.bold.clone();
                write_wrapped(&mut cur, text, SUBHEADING_SIZE, MARGIN, &bold);
            }
            Block::Italic(text) => {
                let oblique = cur.oblique.clone();
                write_wrapped(&mut cur, text, BODY_SIZE, MARGIN, &oblique);
            }
            Block::Text(text) => {
                let regular = cur.regular.clone();
                write_wrapped(&mut cur, text, BODY_SIZE, MARGIN, &regular);
            }
            Block::Bullet(text) => {
                let regular = cur.regular.clone();
                let lines = wrap_text(text, wrap_width(BODY_SIZE, MARGIN + BULLET_INDENT));
                for (i, line) in lines.iter().enumerate() {
                    cur.ensure_room(line_height(BODY_SIZE));
                    let prefixed = if i == 0 {
                        format!("• {line}")
                    } else {
                        format!("  {line}")
                    };
                    cur.write_line(&prefixed, BODY_SIZE, MARGIN + BULLET_INDENT, &regular);
                }
            }
            Block::Spacer(mm) => {
                cur.y -= mm;
            }
        }
    }

    cur.finish()
}

fn line_height(size: f64) -> f64 {
    size * 0.47
}

/// Approximate centering for Helvetica: average glyph width ~0.5 em.
fn centered_x(text: &str, size: f64) -> f64 {
    let est_width = text.chars().count() as f64 * size * 0.5 * 0.3528;
    ((PAGE_WIDTH - est_width) / 2.0).max(MARGIN)
}

/// Characters that fit on one line at the given size and left margin.
fn wrap_width(size: f64, left: f64) -> usize {
    let usable = PAGE_WIDTH - left - MARGIN;
    (usable / (size * 0.5 * 0.3528)) as usize
}

fn write_wrapped(cur: &mut Cursor, text: &str, size: f64, x: f64, font: &IndirectFontRef) {
    for line in wrap_text(text, wrap_width(size, x)) {
        cur.ensure_room(line_height(size));
        cur.write_line(&line, size, x, font);
    }
}

/// Greedy word wrap on a character budget. Overlong single words get a line
/// of their own rather than being split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_respects_budget() {
        let lines = wrap_text("one two three four five six seven", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 10, "line too long: {line}");
        }
    }

    #[test]
    fn test_wrap_text_keeps_overlong_word_whole() {
        let lines = wrap_text("supercalifragilisticexpialidocious ok", 10);
        assert_eq!(lines[0], "supercalifragilisticexpialidocious");
        assert_eq!(lines[1], "ok");
    }

    #[test]
    fn test_wrap_text_empty_input_yields_one_blank_line() {
        assert_eq!(wrap_text("", 40), vec![String::new()]);
    }

    #[test]
    fn test_centered_x_never_left_of_margin() {
        let long = "x".repeat(400);
        assert!((centered_x(&long, TITLE_SIZE) - MARGIN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_render_blocks_produces_pdf_bytes() {
        let blocks = vec![
            Block::Title("Jane Doe".to_string()),
            Block::Contact("jane@example.com | 555-0100".to_string()),
            Block::Heading("PROFESSIONAL SUMMARY".to_string()),
            Block::Text("Engineer with a decade of shipping.".to_string()),
            Block::Bullet("Cut costs 40%".to_string()),
            Block::Spacer(6.0),
        ];
        let bytes = render_blocks("Jane Doe — Resume", &blocks).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_blocks_paginates_long_documents() {
        fn page_tokens(bytes: &[u8]) -> usize {
            bytes.windows(5).filter(|w| w == b"/Page").count()
        }

        let short = render_blocks("Short", &[Block::Bullet("one line".to_string())]).unwrap();
        // Enough bullets to overflow a single US-letter page.
        let blocks: Vec<Block> = (0..120)
            .map(|i| Block::Bullet(format!("Achievement number {i} with some detail text")))
            .collect();
        let long = render_blocks("Long", &blocks).unwrap();

        assert!(long.starts_with(b"%PDF"));
        assert!(
            page_tokens(&long) > page_tokens(&short),
            "overflowing content must add pages"
        );
    }
}
