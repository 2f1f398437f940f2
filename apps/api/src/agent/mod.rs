// Plan-then-act agent core: a static planner, a typed memory blackboard,
// and a tool dispatcher looped over strictly in plan order.

pub mod handlers;
pub mod memory;
pub mod planner;
pub mod tools;

use tracing::info;

use crate::agent::memory::{Memory, ResultBundle};
use crate::agent::planner::{generate_tasks, Task};
use crate::agent::tools::{use_tool, ToolContext};
use crate::errors::AppError;

/// Observations logged to the trace are clipped to this many characters.
const OBSERVATION_LIMIT: usize = 600;

/// Runs the full default plan for `job_title`.
pub async fn run_agent<F>(
    ctx: &ToolContext,
    job_title: &str,
    memory: &mut Memory,
    log: F,
) -> Result<ResultBundle, AppError>
where
    F: FnMut(String),
{
    run_plan(ctx, generate_tasks(job_title), job_title, memory, log).await
}

/// Executes `tasks` strictly in order, threading one shared memory through
/// every dispatch so later tools see earlier tools' writes.
///
/// Emits a rationale line before each task and a clipped observation line
/// after it; the caller's sink receives every line in execution order. The
/// final bundle reads fixed memory slots with defaults for tools that never
/// ran.
pub async fn run_plan<F>(
    ctx: &ToolContext,
    tasks: Vec<Task>,
    job_title: &str,
    memory: &mut Memory,
    mut log: F,
) -> Result<ResultBundle, AppError>
where
    F: FnMut(String),
{
    log(format!("PLAN: Generating tasks for → {job_title}"));

    for task in tasks {
        log(format!("THOUGHT: {}", task.thought));
        let output = use_tool(ctx, task.tool, memory, job_title).await?;
        log(format!(
            "OBSERVE: {}",
            clip(&output.observation(), OBSERVATION_LIMIT)
        ));
    }

    log("FINISH.".to_string());
    info!("Agent run complete for '{job_title}'");
    Ok(memory.bundle())
}

/// Clips to `limit` characters on a char boundary.
fn clip(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
