//! Post Search Client — career articles and discussions via SerpAPI.
//!
//! Queries are attempted most-specific-first and relaxed until one yields
//! results. Unlike job search, an exhausted attempt list legitimately
//! returns an empty list — no synthetic placeholder is produced here.

use serde::{Deserialize, Serialize};
use tracing::warn;

const SERPAPI_URL: &str = "https://serpapi.com/search";
const SEARCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Results requested per query.
pub const MAX_POSTS: usize = 5;

/// OR-clause of career keywords appended to every query.
const CAREER_KEYWORDS: &str = "(career OR trends OR tips OR advice OR news OR discussion)";

/// One normalized search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

impl Post {
    fn from_raw(raw: RawResult) -> Self {
        Self {
            title: raw.title.unwrap_or_else(|| "No title".to_string()),
            link: raw.link.unwrap_or_default(),
            snippet: raw
                .snippet
                .unwrap_or_else(|| "No description available".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
    error: Option<String>,
    #[serde(default)]
    organic_results: Vec<RawResult>,
}

/// Builds the ordered list of query-term combinations, most specific first:
/// {title, company, location} → {title, company} → {title, location} →
/// {title}. Combinations with an empty constituent are skipped.
fn build_attempts(job_title: &str, company: &str, location: &str) -> Vec<Vec<String>> {
    let mut attempts = Vec::new();
    if !job_title.is_empty() && !company.is_empty() && !location.is_empty() {
        attempts.push(vec![
            job_title.to_string(),
            company.to_string(),
            location.to_string(),
        ]);
    }
    if !job_title.is_empty() && !company.is_empty() {
        attempts.push(vec![job_title.to_string(), company.to_string()]);
    }
    if !job_title.is_empty() && !location.is_empty() {
        attempts.push(vec![job_title.to_string(), location.to_string()]);
    }
    if !job_title.is_empty() {
        attempts.push(vec![job_title.to_string()]);
    }
    attempts
}

/// Joins one attempt's terms and appends the career-keyword OR-clause.
fn compose_attempt_query(terms: &[String]) -> String {
    format!("{} {CAREER_KEYWORDS}", terms.join(" "))
}

/// Parses a SerpAPI body. An explicit `error` field marks a failed attempt.
fn parse_results(body: &str) -> Result<Vec<Post>, String> {
    let response: SerpResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    if let Some(error) = response.error {
        return Err(error);
    }
    Ok(response
        .organic_results
        .into_iter()
        .take(MAX_POSTS)
        .map(Post::from_raw)
        .collect())
}

/// HTTP client for the SerpAPI web-search endpoint.
#[derive(Clone)]
pub struct PostSearchClient {
    client: reqwest::Client,
    api_key: String,
}

impl PostSearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(SEARCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Searches for career posts, relaxing the query until something hits.
    ///
    /// Short-circuits on the first attempt with at least one result; a
    /// failed or empty attempt advances to the next combination. Returns
    /// 0 to 5 posts — empty is a legitimate outcome.
    pub async fn search(&self, job_title: &str, company: &str, location: &str) -> Vec<Post> {
        for terms in build_attempts(job_title, company, location) {
            let query = compose_attempt_query(&terms);
            match self.fetch(&query).await {
                Ok(posts) if !posts.is_empty() => return posts,
                Ok(_) => {} // well-formed but empty — relax and retry
                Err(e) => warn!("Post search attempt failed: {e}"),
            }
        }
        Vec::new()
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Post>, String> {
        let num = MAX_POSTS.to_string();
        let response = self
            .client
            .get(SERPAPI_URL)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let body = response.text().await.map_err(|e| e.to_string())?;
        parse_results(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempts_ordered_most_to_least_specific() {
        let attempts = build_attempts("Chef", "Bistro Inc", "Lyon");
        assert_eq!(
            attempts,
            vec![
                vec!["Chef".to_string(), "Bistro Inc".to_string(), "Lyon".to_string()],
                vec!["Chef".to_string(), "Bistro Inc".to_string()],
                vec!["Chef".to_string(), "Lyon".to_string()],
                vec!["Chef".to_string()],
            ]
        );
    }

    #[test]
    fn test_attempts_skip_combinations_with_empty_fields() {
        let attempts = build_attempts("Chef", "", "Lyon");
        assert_eq!(
            attempts,
            vec![
                vec!["Chef".to_string(), "Lyon".to_string()],
                vec!["Chef".to_string()],
            ]
        );
    }

    #[test]
    fn test_attempts_title_only() {
        assert_eq!(
            build_attempts("Chef", "", ""),
            vec![vec!["Chef".to_string()]]
        );
    }

    #[test]
    fn test_attempts_empty_title_yields_no_attempts() {
        assert!(build_attempts("", "Bistro Inc", "Lyon").is_empty());
    }

    #[test]
    fn test_query_appends_career_keyword_clause() {
        let query = compose_attempt_query(&["Chef".to_string(), "Lyon".to_string()]);
        assert_eq!(
            query,
            "Chef Lyon (career OR trends OR tips OR advice OR news OR discussion)"
        );
    }

    #[test]
    fn test_parse_error_field_fails_the_attempt() {
        let result = parse_results(r#"{"error": "quota exceeded"}"#);
        assert_eq!(result.unwrap_err(), "quota exceeded");
    }

    #[test]
    fn test_parse_normalizes_results_with_defaults() {
        let body = r#"{"organic_results": [
            {"title": "Chef careers in 2024", "link": "https://example.com", "snippet": "A look at the trade."},
            {"link": "https://example.org"}
        ]}"#;
        let posts = parse_results(body).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Chef careers in 2024");
        assert_eq!(posts[1].title, "No title");
        assert_eq!(posts[1].snippet, "No description available");
        assert_eq!(posts[1].link, "https://example.org");
    }

    #[test]
    fn test_parse_caps_at_five_posts() {
        let items = (0..8)
            .map(|i| format!(r#"{{"title": "Post {i}"}}"#))
            .collect::<Vec<_>>()
            .join(",");
        let body = format!(r#"{{"organic_results": [{items}]}}"#);
        assert_eq!(parse_results(&body).unwrap().len(), MAX_POSTS);
    }

    #[test]
    fn test_parse_missing_results_field_is_empty_not_error() {
        assert!(parse_results(r#"{"search_metadata": {}}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_results("<!doctype html>").is_err());
    }
}
