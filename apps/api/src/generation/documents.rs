//! Resume and cover-letter drafting.
//!
//! Fail-soft boundary: a backend failure here degrades to a visible
//! placeholder string instead of failing the run. This is the ONLY place the
//! placeholder is produced — everything below this layer returns `Result`.

use tracing::warn;

use crate::generation::prompts::{cover_letter_prompt, resume_prompt};
use crate::llm_client::{ContentGenerator, GenerationTask};

/// Shown in place of a document when the backend call fails.
pub const GENERATION_FAILURE: &str = "Error: Unable to generate content. Please try again.";

/// Drafts a one-page Markdown resume for `job_title` around the first 8 skills.
pub async fn generate_resume(
    llm: &dyn ContentGenerator,
    job_title: &str,
    skills: &[String],
) -> String {
    let prompt = resume_prompt(job_title, skills);
    match llm.generate(&prompt, GenerationTask::Resume).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume generation failed for '{job_title}': {e}");
            GENERATION_FAILURE.to_string()
        }
    }
}

/// Drafts a cover letter for `job_title` around the first 5 skills.
pub async fn generate_cover_letter(
    llm: &dyn ContentGenerator,
    job_title: &str,
    skills: &[String],
) -> String {
    let prompt = cover_letter_prompt(job_title, skills);
    match llm.generate(&prompt, GenerationTask::CoverLetter).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Cover letter generation failed for '{job_title}': {e}");
            GENERATION_FAILURE.to_string()
        }
    }
}
