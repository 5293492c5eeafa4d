use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// One line of the rendered report, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    Bullet(&'a str),
    Numbered { marker: &'a str, text: &'a str },
    /// A line inside a ``` fence, kept verbatim.
    Preformatted(&'a str),
    Text(&'a str),
    Blank,
}

/// Split the Markdown report into blocks. Only the subset the visit
/// report template emits is recognised; anything else is plain text.
pub fn parse_blocks(markdown: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut in_fence = false;

    for line in markdown.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            blocks.push(Block::Preformatted(line));
            continue;
        }

        let trimmed = line.trim();
        let block = if trimmed.is_empty() {
            Block::Blank
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            Block::Heading { level: 3, text }
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            Block::Heading { level: 2, text }
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            Block::Heading { level: 1, text }
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            Block::Bullet(text)
        } else if let Some((marker, text)) = numbered(trimmed) {
            Block::Numbered { marker, text }
        } else {
            Block::Text(trimmed)
        };
        blocks.push(block);
    }

    blocks
}

fn numbered(line: &str) -> Option<(&str, &str)> {
    let dot = line.find(". ")?;
    let marker = &line[..dot];
    if marker.is_empty() || !marker.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&line[..dot + 1], &line[dot + 2..]))
}

/// Build a DOCX from the rendered Markdown report.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = styles.margin_twips();
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style(1, styles))
        .add_style(heading_style(2, styles))
        .add_style(heading_style(3, styles));

    let blocks = parse_blocks(rendered);
    let count = blocks.len();
    for block in blocks {
        docx = docx.add_paragraph(paragraph(block, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(blocks = count, bytes = buf.get_ref().len(), "docx packed");
    Ok(buf.into_inner())
}

fn heading_style(level: u8, styles: &DocumentStyles) -> Style {
    Style::new(format!("Heading{level}"), StyleType::Paragraph)
        .name(format!("heading {level}"))
        .size(styles.heading_size(level) * 2) // half-points
}

fn paragraph(block: Block<'_>, styles: &DocumentStyles) -> Paragraph {
    match block {
        Block::Heading { level, text } => Paragraph::new().style(&format!("Heading{level}")).add_run(
            Run::new()
                .add_text(text)
                .bold()
                .size(styles.heading_size(level) * 2)
                .fonts(RunFonts::new().ascii(&styles.heading_font)),
        ),
        Block::Bullet(text) => with_inline(prefixed("\u{2022} ", styles), text, styles),
        Block::Numbered { marker, text } => {
            with_inline(prefixed(&format!("{marker} "), styles), text, styles)
        }
        Block::Preformatted(line) => Paragraph::new().add_run(
            Run::new()
                .add_text(line)
                .size(styles.body_size * 2)
                .fonts(RunFonts::new().ascii(&styles.mono_font)),
        ),
        Block::Text(text) => with_inline(Paragraph::new().align(AlignmentType::Left), text, styles),
        Block::Blank => Paragraph::new(),
    }
}

fn prefixed(prefix: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(prefix, styles))
}

fn with_inline(mut para: Paragraph, text: &str, styles: &DocumentStyles) -> Paragraph {
    for (segment, bold) in inline_segments(text) {
        let run = body_run(segment, styles);
        para = para.add_run(if bold { run.bold() } else { run });
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// `**bold**` spans as `(text, is_bold)`. An unclosed `**` is literal.
pub fn inline_segments(text: &str) -> Vec<(&str, bool)> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            segments.push((&rest[..start], false));
        }
        if end > 0 {
            segments.push((&after[..end], true));
        }
        rest = &after[end + 2..];
    }

    if !rest.is_empty() {
        segments.push((rest, false));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_report_lines() {
        let md = "# Title\n\n## 1. Section\n- **BP:** 120/80\n3. Ask this?\n```text\n- raw line\n\n```\n3.5 is text";
        assert_eq!(
            parse_blocks(md),
            vec![
                Block::Heading { level: 1, text: "Title" },
                Block::Blank,
                Block::Heading { level: 2, text: "1. Section" },
                Block::Bullet("**BP:** 120/80"),
                Block::Numbered { marker: "3.", text: "Ask this?" },
                Block::Preformatted("- raw line"),
                Block::Preformatted(""),
                Block::Text("3.5 is text"),
            ]
        );
    }

    #[test]
    fn bold_spans() {
        assert_eq!(
            inline_segments("**Pulse:** 72 bpm"),
            vec![("Pulse:", true), (" 72 bpm", false)]
        );
        assert_eq!(
            inline_segments("a **b** c"),
            vec![("a ", false), ("b", true), (" c", false)]
        );
        assert_eq!(inline_segments("open ** only"), vec![("open ** only", false)]);
    }

    #[test]
    fn packs_a_zip_container() {
        let bytes = generate_docx(
            "# Visit Prep\n\n- **Pulse:** 72 bpm\n1. First question\n```text\nPatient: N/A\n```",
            &DocumentStyles::default(),
        )
        .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
