//! Minimal markdown-subset renderer for model output.
//!
//! Recognized: `- ` / `* ` bullet lines, `### ` sub-heading lines, and
//! `**…**` strong spans. Nothing else — no links, code blocks, or
//! numbered lists. Unrecognized syntax passes through as plain text.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Bullet { spans: Vec<Span> },
    Paragraph { spans: Vec<Span> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Strong(String),
}

/// Renders text into display blocks, one block per input line.
pub fn render(text: &str) -> Vec<Block> {
    text.lines().map(render_line).collect()
}

fn render_line(line: &str) -> Block {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        Block::Bullet {
            spans: parse_spans(rest),
        }
    } else if let Some(rest) = trimmed.strip_prefix("### ") {
        // Headings are taken as plain text; the original renderer does
        // not bold-parse them either.
        Block::Heading {
            text: rest.to_string(),
        }
    } else {
        Block::Paragraph {
            spans: parse_spans(line),
        }
    }
}

/// Splits a line into plain and `**strong**` spans. An unpaired `**`
/// stays literal.
fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        match rest[open + 2..].find("**") {
            Some(close) => {
                if open > 0 {
                    spans.push(Span::Text(rest[..open].to_string()));
                }
                spans.push(Span::Strong(rest[open + 2..open + 2 + close].to_string()));
                rest = &rest[open + 2 + close + 2..];
            }
            None => break,
        }
    }
    if !rest.is_empty() {
        spans.push(Span::Text(rest.to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    fn strong(s: &str) -> Span {
        Span::Strong(s.to_string())
    }

    #[test]
    fn test_plain_line_is_paragraph() {
        assert_eq!(
            render("hello world"),
            vec![Block::Paragraph {
                spans: vec![text("hello world")]
            }]
        );
    }

    #[test]
    fn test_dash_and_star_bullets() {
        let blocks = render("- first\n* second");
        assert_eq!(
            blocks,
            vec![
                Block::Bullet {
                    spans: vec![text("first")]
                },
                Block::Bullet {
                    spans: vec![text("second")]
                },
            ]
        );
    }

    #[test]
    fn test_indented_bullet_is_recognized() {
        assert_eq!(
            render("  - padded"),
            vec![Block::Bullet {
                spans: vec![text("padded")]
            }]
        );
    }

    #[test]
    fn test_heading_line() {
        assert_eq!(
            render("### Experience"),
            vec![Block::Heading {
                text: "Experience".to_string()
            }]
        );
    }

    #[test]
    fn test_heading_keeps_bold_markers_literal() {
        assert_eq!(
            render("### **SSGB** topics"),
            vec![Block::Heading {
                text: "**SSGB** topics".to_string()
            }]
        );
    }

    #[test]
    fn test_bold_span_in_paragraph() {
        assert_eq!(
            render("I hold the **SSGB** certification"),
            vec![Block::Paragraph {
                spans: vec![text("I hold the "), strong("SSGB"), text(" certification")]
            }]
        );
    }

    #[test]
    fn test_multiple_bold_spans() {
        assert_eq!(
            parse_spans("**a** and **b**"),
            vec![strong("a"), text(" and "), strong("b")]
        );
    }

    #[test]
    fn test_unpaired_marker_stays_literal() {
        assert_eq!(parse_spans("broken ** marker"), vec![text("broken ** marker")]);
    }

    #[test]
    fn test_bold_inside_bullet() {
        assert_eq!(
            render("- led **8D** reviews"),
            vec![Block::Bullet {
                spans: vec![text("led "), strong("8D"), text(" reviews")]
            }]
        );
    }

    #[test]
    fn test_numbered_lists_are_not_special() {
        // Only `- `, `* `, `### `, and `**…**` are recognized.
        assert_eq!(
            render("1. not a list item"),
            vec![Block::Paragraph {
                spans: vec![text("1. not a list item")]
            }]
        );
    }

    #[test]
    fn test_empty_line_renders_empty_paragraph() {
        assert_eq!(render("a\n\nb").len(), 3);
        assert_eq!(render("a\n\nb")[1], Block::Paragraph { spans: vec![] });
    }
}
