// External search backends: job listings (JSearch) and career articles
// (SerpAPI). Both clients degrade failures internally — neither surfaces an
// error to the agent loop.

pub mod jobs;
pub mod posts;
