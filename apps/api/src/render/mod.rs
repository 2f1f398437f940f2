//! Presentation-layer parsing — splits generated Markdown documents into
//! named sections for display.
//!
//! The generators return flat text and nothing upstream depends on this
//! structure; it exists only so the consumer can render each section on its
//! own.

use serde::Serialize;

/// One named document section, in source order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// Splits a Markdown resume into sections.
///
/// `## X` starts section X; a top-level `# ` heading is treated as contact
/// info; blank lines and code fences are skipped; lines before any heading
/// are dropped.
pub fn parse_resume_sections(markdown: &str) -> Vec<Section> {
    let mut sections: Vec<(String, Vec<&str>)> = Vec::new();

    for line in markdown.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("```") {
            continue;
        }
        if let Some(heading) = line.strip_prefix("## ") {
            sections.push((heading.trim().to_string(), Vec::new()));
        } else if let Some(contact) = line.strip_prefix("# ") {
            sections.push(("Contact".to_string(), vec![contact.trim()]));
        } else if let Some((_, body)) = sections.last_mut() {
            body.push(line);
        }
    }

    join_sections(sections)
}

/// Splits a cover letter into sections. Any text before the first `## `
/// heading is collected under "Opening".
pub fn parse_cover_sections(markdown: &str) -> Vec<Section> {
    let mut sections: Vec<(String, Vec<&str>)> = Vec::new();

    for line in markdown.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("```") {
            continue;
        }
        if let Some(heading) = line.strip_prefix("## ") {
            sections.push((heading.trim().to_string(), Vec::new()));
        } else if let Some((_, body)) = sections.last_mut() {
            body.push(line);
        } else {
            sections.push(("Opening".to_string(), vec![line]));
        }
    }

    join_sections(sections)
}

fn join_sections(sections: Vec<(String, Vec<&str>)>) -> Vec<Section> {
    sections
        .into_iter()
        .map(|(heading, lines)| Section {
            heading,
            body: lines.join("\n").trim().to_string(),
        })
        .collect()
}
