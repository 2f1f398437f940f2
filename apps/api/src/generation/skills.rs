//! Skill extraction — asks the backend for a comma-separated skill list and
//! parses it into clean terms.

use tracing::debug;

use crate::generation::prompts::skills_prompt;
use crate::llm_client::{ContentGenerator, GenerationTask, LlmError};

/// Upper bound on extracted skills. The prompt asks for 8-12; anything past
/// 12 is noise from a rambling completion.
pub const MAX_SKILLS: usize = 12;

/// Asks the backend which skills a `job_title` role requires.
///
/// The parsed list is bounded (≤ 12 entries), free of empty fragments and
/// leading numbering, and deliberately NOT deduplicated or validated — the
/// terms are whatever the backend said they are. A backend failure is the
/// caller's to degrade; no placeholder text is ever parsed into "skills".
pub async fn extract_skills(
    llm: &dyn ContentGenerator,
    job_title: &str,
) -> Result<Vec<String>, LlmError> {
    let raw = llm
        .generate(&skills_prompt(job_title), GenerationTask::Skills)
        .await?;
    let skills = parse_skill_list(&raw);
    debug!("Extracted {} skills for '{job_title}'", skills.len());
    Ok(skills)
}

/// Splits a raw completion into skill terms. Commas, newlines, and bullet
/// characters all act as separators; numbering prefixes ("1. ", "2) ") are
/// stripped; empty fragments are dropped.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n', '•', '-'])
        .map(str::trim)
        .map(strip_numbering)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .take(MAX_SKILLS)
        .collect()
}

/// Strips a leading `1. ` / `12) ` style numbering prefix, if present.
fn strip_numbering(fragment: &str) -> &str {
    let digits_end = fragment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(fragment.len());
    if digits_end == 0 {
        return fragment;
    }
    match fragment[digits_end..].strip_prefix(['.', ')']) {
        Some(tail) => tail.trim_start(),
        None => fragment,
    }
}
