//! Planner — produces the ordered task list for a job title.
//!
//! Planning is static: the same five tools in the same order, with the
//! rationale templated on the goal. Planning happens once, up front — the
//! loop never re-plans mid-run.

use serde::{Deserialize, Serialize};

use crate::agent::tools::ToolName;

/// One planned step: which tool to run and why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub tool: ToolName,
    pub thought: String,
}

/// The fixed tool order of a full run: skills first so the document tools
/// can reuse them, then both documents, then the two searches.
pub const DEFAULT_PLAN: [ToolName; 5] = [
    ToolName::Skills,
    ToolName::Resume,
    ToolName::Cover,
    ToolName::Jobs,
    ToolName::Posts,
];

/// The default plan for `job_title`.
pub fn generate_tasks(job_title: &str) -> Vec<Task> {
    tasks_for(&DEFAULT_PLAN, job_title)
}

/// Builds a plan from an explicit tool list, keeping the requested order.
pub fn tasks_for(tools: &[ToolName], job_title: &str) -> Vec<Task> {
    tools
        .iter()
        .map(|&tool| Task {
            tool,
            thought: thought_for(tool, job_title),
        })
        .collect()
}

fn thought_for(tool: ToolName, job_title: &str) -> String {
    match tool {
        ToolName::Skills => {
            format!("I should identify the core skills and technologies a {job_title} needs.")
        }
        ToolName::Resume => {
            format!("With the skill list in memory, I can draft a resume tailored to a {job_title} role.")
        }
        ToolName::Cover => {
            "A cover letter should highlight the same skills for consistency.".to_string()
        }
        ToolName::Jobs => format!("Now I should look up current {job_title} openings."),
        ToolName::Posts => {
            format!("Finally, I should gather recent articles and discussions around {job_title} careers.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_order_is_fixed() {
        let tasks = generate_tasks("Data Analyst");
        let tools: Vec<ToolName> = tasks.iter().map(|t| t.tool).collect();
        assert_eq!(
            tools,
            vec![
                ToolName::Skills,
                ToolName::Resume,
                ToolName::Cover,
                ToolName::Jobs,
                ToolName::Posts,
            ]
        );
    }

    #[test]
    fn test_each_tool_appears_at_most_once_in_the_default_plan() {
        let tasks = generate_tasks("Data Analyst");
        for (i, task) in tasks.iter().enumerate() {
            assert!(
                tasks.iter().skip(i + 1).all(|t| t.tool != task.tool),
                "duplicate tool in plan: {}",
                task.tool
            );
        }
    }

    #[test]
    fn test_thoughts_are_nonempty_and_templated_on_the_goal() {
        let tasks = generate_tasks("Data Analyst");
        assert!(tasks.iter().all(|t| !t.thought.is_empty()));
        assert!(tasks[0].thought.contains("Data Analyst"));
        assert!(tasks[3].thought.contains("Data Analyst"));
    }

    #[test]
    fn test_tasks_for_subset_keeps_requested_order() {
        let tasks = tasks_for(&[ToolName::Jobs, ToolName::Skills], "Nurse");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].tool, ToolName::Jobs);
        assert_eq!(tasks[1].tool, ToolName::Skills);
    }

    #[test]
    fn test_task_serializes_tool_in_lowercase() {
        let task = Task {
            tool: ToolName::Cover,
            thought: "why".to_string(),
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["tool"], "cover");
    }
}
