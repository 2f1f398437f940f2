//! Job Search Client — queries the JSearch API and normalizes listings.
//!
//! Contract: `search` NEVER returns an empty list. Zero usable results, and
//! every failure mode, collapse to a single synthetic "no results" listing,
//! so downstream consumers can always index the first element.

use serde::{Deserialize, Serialize};
use tracing::warn;

const JSEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
const SEARCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// At most this many listings come back from one search.
pub const MAX_LISTINGS: usize = 10;

/// One normalized job listing. Every field is a `String`: missing source
/// data becomes placeholder text, never null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub date_posted: String,
    pub salary: String,
}

/// Raw listing shape inside the JSearch `data` array.
#[derive(Debug, Deserialize)]
struct RawListing {
    job_title: Option<String>,
    employer_name: Option<String>,
    job_location: Option<String>,
    job_description: Option<String>,
    job_apply_link: Option<String>,
    job_posted_at_datetime_utc: Option<String>,
    job_salary: Option<String>,
}

impl JobListing {
    fn from_raw(raw: RawListing) -> Self {
        Self {
            title: raw.job_title.unwrap_or_else(|| "Unknown Position".to_string()),
            company: raw
                .employer_name
                .unwrap_or_else(|| "Unknown Company".to_string()),
            location: raw
                .job_location
                .unwrap_or_else(|| "Location not specified".to_string()),
            description: raw
                .job_description
                .unwrap_or_else(|| "No description available".to_string()),
            url: raw.job_apply_link.unwrap_or_default(),
            date_posted: raw
                .job_posted_at_datetime_utc
                .as_deref()
                .map(posted_date)
                .unwrap_or_default(),
            salary: raw.job_salary.unwrap_or_default(),
        }
    }
}

/// Truncates a posting timestamp to its calendar date (`YYYY-MM-DD`).
fn posted_date(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        // Not RFC 3339 — keep the first 10 chars, the date prefix in every
        // format this API has been seen to emit.
        Err(_) => timestamp.chars().take(10).collect(),
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: serde_json::Value,
}

/// Parses a JSearch response body into normalized listings.
///
/// `None` signals a malformed response — invalid JSON, or a `data` field
/// that is not an array — and sends the caller to the fallback. A
/// well-formed response with no usable entries is `Some(vec![])`.
fn parse_listings(body: &str) -> Option<Vec<JobListing>> {
    let response: SearchResponse = serde_json::from_str(body).ok()?;
    let items = response.data.as_array()?;
    let listings = items
        .iter()
        .take(MAX_LISTINGS)
        .filter_map(|item| serde_json::from_value::<RawListing>(item.clone()).ok())
        .map(JobListing::from_raw)
        .collect();
    Some(listings)
}

/// `"<query> in <location>"` when a location is given.
fn compose_query(query: &str, location: &str) -> String {
    if location.is_empty() {
        query.to_string()
    } else {
        format!("{query} in {location}")
    }
}

/// The guaranteed-non-empty fallback: one listing whose fields tell the user
/// nothing matched and how to widen the search.
pub fn no_jobs(query: &str, location: &str) -> Vec<JobListing> {
    let title = if location.is_empty() {
        format!("No jobs found for '{query}'")
    } else {
        format!("No jobs found for '{query}' in {location}")
    };
    vec![JobListing {
        title,
        company: String::new(),
        location: if location.is_empty() {
            "Try different search terms".to_string()
        } else {
            location.to_string()
        },
        description: "No job listings matched your search criteria. Try:\n\
                      - Broadening your search terms\n\
                      - Different locations\n\
                      - Related job titles"
            .to_string(),
        url: String::new(),
        date_posted: String::new(),
        salary: String::new(),
    }]
}

/// HTTP client for the JSearch job-listing API.
#[derive(Clone)]
pub struct JobSearchClient {
    client: reqwest::Client,
    api_key: String,
}

impl JobSearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(SEARCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Searches listings for `query`, optionally scoped to `location`.
    ///
    /// Infallible by contract: every failure mode is logged and resolves to
    /// the `no_jobs` fallback. Returns between 1 and 10 listings.
    pub async fn search(&self, query: &str, location: &str) -> Vec<JobListing> {
        let search_query = compose_query(query, location);

        let response = self
            .client
            .get(JSEARCH_URL)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", JSEARCH_HOST)
            .query(&[
                ("query", search_query.as_str()),
                ("page", "1"),
                ("num_pages", "1"),
                ("country", "us"),
                ("date_posted", "all"),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                warn!("Job search request timed out");
                return no_jobs(query, location);
            }
            Err(e) => {
                warn!("Job search request failed: {e}");
                return no_jobs(query, location);
            }
        };

        let status = response.status();
        match status.as_u16() {
            404 => {
                warn!("Job search: invalid endpoint (404)");
                return no_jobs(query, location);
            }
            401 => {
                warn!("Job search: invalid API key or unauthorized access (401)");
                return no_jobs(query, location);
            }
            403 => {
                warn!("Job search: API access forbidden (403)");
                return no_jobs(query, location);
            }
            _ => {}
        }

        let body = response.text().await.unwrap_or_default();
        if !status.is_success() || body.trim().is_empty() {
            warn!("Job search: non-200 ({status}) or empty response");
            return no_jobs(query, location);
        }

        match parse_listings(&body) {
            Some(listings) if !listings.is_empty() => listings,
            Some(_) => {
                warn!("Job search: no listings for '{search_query}'");
                no_jobs(query, location)
            }
            None => {
                warn!("Job search: response format invalid, expected a list");
                no_jobs(query, location)
            }
        }
    }
}
