//! Axum route handlers for the Agent API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::memory::Memory;
use crate::agent::planner::{generate_tasks, tasks_for, Task};
use crate::agent::tools::ToolName;
use crate::agent::{run_agent, run_plan};
use crate::errors::AppError;
use crate::render::{parse_cover_sections, parse_resume_sections, Section};
use crate::search::jobs::JobListing;
use crate::search::posts::Post;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub job_title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// Optional explicit tool list to run instead of the full plan.
    #[serde(default)]
    pub tools: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub run_id: Uuid,
    pub jobs: Vec<JobListing>,
    pub posts: Vec<Post>,
    pub resume: String,
    pub cover: String,
    pub resume_sections: Vec<Section>,
    pub cover_sections: Vec<Section>,
    pub trace: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/agent/plan
///
/// Previews the task list for a job title without executing anything.
pub async fn handle_plan(
    State(_state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let job_title = request.job_title.trim();
    if job_title.is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    Ok(Json(PlanResponse {
        tasks: generate_tasks(job_title),
    }))
}

/// POST /api/v1/agent/run
///
/// Runs the plan-then-act loop and returns the accumulated results plus the
/// full trace. Unknown names in `tools` are rejected before anything runs.
pub async fn handle_run(
    State(state): State<AppState>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunResponse>, AppError> {
    let job_title = request.job_title.trim().to_string();
    if job_title.is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let mut memory = Memory::new();
    memory.location = request.location.unwrap_or_default();
    memory.company = request.company.unwrap_or_default();

    let mut trace = Vec::new();
    let sink = |line: String| trace.push(line);

    let bundle = match &request.tools {
        Some(names) => {
            let tools = names
                .iter()
                .map(|name| name.parse::<ToolName>())
                .collect::<Result<Vec<_>, _>>()?;
            let tasks = tasks_for(&tools, &job_title);
            run_plan(&state.tools, tasks, &job_title, &mut memory, sink).await?
        }
        None => run_agent(&state.tools, &job_title, &mut memory, sink).await?,
    };

    let resume_sections = parse_resume_sections(&bundle.resume);
    let cover_sections = parse_cover_sections(&bundle.cover);

    Ok(Json(RunResponse {
        run_id: Uuid::new_v4(),
        jobs: bundle.jobs,
        posts: bundle.posts,
        resume: bundle.resume,
        cover: bundle.cover,
        resume_sections,
        cover_sections,
        trace,
    }))
}
