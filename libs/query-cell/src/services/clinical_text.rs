use std::sync::OnceLock;

use regex::Regex;

use crate::models::ClinicalSection;

fn markdown_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s{0,3}#{1,6}\s+(.+?)\s*$").unwrap())
}

fn bold_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\*\*([^*]{1,80}?)\*\*:?\s*$").unwrap())
}

fn titled_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([A-Z][A-Za-z0-9 ()/&',-]{1,60}):\s*$").unwrap())
}

/// Split an AI draft into titled sections for the doctor review screen.
///
/// Recognizes markdown headings, bold-line headings and short `Title:` lines.
/// Text before the first heading comes back untitled; a draft with no
/// recognizable headings comes back whole as a single untitled section.
/// Never fails - worst case the caller shows the raw draft.
pub fn parse_draft_sections(draft: &str) -> Vec<ClinicalSection> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut sections: Vec<ClinicalSection> = Vec::new();
    let mut heading: Option<String> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in trimmed.lines() {
        match heading_of(line) {
            Some(title) => {
                flush(&mut sections, heading.take(), &body);
                body.clear();
                heading = Some(title);
            }
            None => body.push(line),
        }
    }
    flush(&mut sections, heading, &body);

    sections
}

fn heading_of(line: &str) -> Option<String> {
    let captures = markdown_heading()
        .captures(line)
        .or_else(|| bold_heading().captures(line))
        .or_else(|| titled_heading().captures(line))?;

    let title = captures[1].trim().trim_end_matches(':').trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn flush(sections: &mut Vec<ClinicalSection>, heading: Option<String>, body: &[&str]) {
    let body = body.join("\n").trim().to_string();
    if heading.is_none() && body.is_empty() {
        return;
    }
    sections.push(ClinicalSection { heading, body });
}
