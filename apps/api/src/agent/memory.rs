//! Shared memory blackboard for one agent run.

use serde::Serialize;

use crate::search::jobs::JobListing;
use crate::search::posts::Post;

/// Accumulates tool outputs across one run. One slot per tool; a slot is
/// written at most once per run (each tool appears at most once in a plan)
/// and later tools read earlier slots. `location` and `company` are context
/// the caller sets before the run starts.
///
/// Created at run start, discarded at run end — nothing persists across runs.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    pub skills: Option<Vec<String>>,
    pub resume: Option<String>,
    pub cover: Option<String>,
    pub jobs: Option<Vec<JobListing>>,
    pub posts: Option<Vec<Post>>,
    pub location: String,
    pub company: String,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the final run state, with defaults for tools that never
    /// ran or produced nothing.
    pub fn bundle(&self) -> ResultBundle {
        ResultBundle {
            jobs: self.jobs.clone().unwrap_or_default(),
            posts: self.posts.clone().unwrap_or_default(),
            resume: self.resume.clone().unwrap_or_default(),
            cover: self.cover.clone().unwrap_or_default(),
        }
    }
}

/// The orchestration loop's sole return value, consumed by the presentation
/// layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultBundle {
    pub jobs: Vec<JobListing>,
    pub posts: Vec<Post>,
    pub resume: String,
    pub cover: String,
}
