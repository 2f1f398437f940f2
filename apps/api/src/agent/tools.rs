//! Tool Dispatcher — maps a planned tool to its implementation and writes
//! the output into shared memory under that tool's slot.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::agent::memory::Memory;
use crate::errors::AppError;
use crate::generation::documents::{generate_cover_letter, generate_resume};
use crate::generation::skills::extract_skills;
use crate::llm_client::ContentGenerator;
use crate::search::jobs::{JobListing, JobSearchClient};
use crate::search::posts::{Post, PostSearchClient};

/// The closed set of tools a plan may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolName {
    Skills,
    Resume,
    Cover,
    Jobs,
    Posts,
}

impl ToolName {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::Skills => "skills",
            ToolName::Resume => "resume",
            ToolName::Cover => "cover",
            ToolName::Jobs => "jobs",
            ToolName::Posts => "posts",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = AppError;

    /// The only runtime path where an unknown tool name can appear — once
    /// parsed, dispatch is exhaustive over the enum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skills" => Ok(ToolName::Skills),
            "resume" => Ok(ToolName::Resume),
            "cover" => Ok(ToolName::Cover),
            "jobs" => Ok(ToolName::Jobs),
            "posts" => Ok(ToolName::Posts),
            other => Err(AppError::UnknownTool(other.to_string())),
        }
    }
}

/// The collaborators every tool may need. Cloned from `AppState` per run.
#[derive(Clone)]
pub struct ToolContext {
    pub llm: Arc<dyn ContentGenerator>,
    pub jobs: JobSearchClient,
    pub posts: PostSearchClient,
}

/// What a single tool produced, tagged by kind for logging and storage.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Skills(Vec<String>),
    Document(String),
    Jobs(Vec<JobListing>),
    Posts(Vec<Post>),
}

impl ToolOutput {
    /// Human-readable form for the OBSERVE trace line (clipped by the loop).
    pub fn observation(&self) -> String {
        match self {
            ToolOutput::Skills(skills) => format!("{skills:?}"),
            ToolOutput::Document(text) => text.clone(),
            ToolOutput::Jobs(jobs) => format!("{jobs:?}"),
            ToolOutput::Posts(posts) => format!("{posts:?}"),
        }
    }
}

/// Runs one tool against shared memory.
///
/// Backend failures degrade inside the tool implementations (placeholder
/// document, fallback listing, empty list) and never propagate. The
/// `Result` exists for the dispatcher's contract — a tool name outside the
/// closed set — which the enum makes unrepresentable past parsing.
pub async fn use_tool(
    ctx: &ToolContext,
    tool: ToolName,
    memory: &mut Memory,
    goal: &str,
) -> Result<ToolOutput, AppError> {
    match tool {
        ToolName::Skills => {
            let skills = extract_skills(ctx.llm.as_ref(), goal)
                .await
                .unwrap_or_else(|e| {
                    warn!("Skill extraction failed for '{goal}': {e}");
                    Vec::new()
                });
            memory.skills = Some(skills.clone());
            Ok(ToolOutput::Skills(skills))
        }
        ToolName::Resume => {
            let skills = skills_for_documents(ctx, memory, goal).await;
            let resume = generate_resume(ctx.llm.as_ref(), goal, &skills).await;
            memory.resume = Some(resume.clone());
            Ok(ToolOutput::Document(resume))
        }
        ToolName::Cover => {
            let skills = skills_for_documents(ctx, memory, goal).await;
            let cover = generate_cover_letter(ctx.llm.as_ref(), goal, &skills).await;
            memory.cover = Some(cover.clone());
            Ok(ToolOutput::Document(cover))
        }
        ToolName::Jobs => {
            let listings = ctx.jobs.search(goal, &memory.location).await;
            memory.jobs = Some(listings.clone());
            Ok(ToolOutput::Jobs(listings))
        }
        ToolName::Posts => {
            let posts = ctx.posts.search(goal, &memory.company, &memory.location).await;
            memory.posts = Some(posts.clone());
            Ok(ToolOutput::Posts(posts))
        }
    }
}

/// Skills for the document tools: the stored list when one is present and
/// non-empty, otherwise a fresh on-demand extraction.
///
/// The on-demand result is deliberately NOT written back — only the `skills`
/// tool owns that memory slot.
async fn skills_for_documents(ctx: &ToolContext, memory: &Memory, goal: &str) -> Vec<String> {
    match memory.skills.as_ref().filter(|s| !s.is_empty()) {
        Some(stored) => stored.clone(),
        None => extract_skills(ctx.llm.as_ref(), goal)
            .await
            .unwrap_or_else(|e| {
                warn!("On-demand skill extraction failed for '{goal}': {e}");
                Vec::new()
            }),
    }
}
