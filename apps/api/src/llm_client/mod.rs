/// LLM Client — the single point of entry for all content-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the inference API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: meta-llama/Llama-3.2-3B-Instruct (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const HF_ROUTER_URL: &str = "https://router.huggingface.co/v1/chat/completions";
/// The model used for all generation calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Category of a generation call. Selects the sampling parameters below.
/// The set is closed — callers without a specific category use `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationTask {
    Resume,
    CoverLetter,
    Skills,
    General,
}

/// Sampling parameters for one generation category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl GenerationTask {
    /// Fixed parameter table. Resumes run long and focused; skill lists run
    /// short and near-deterministic; cover letters get a little more room to
    /// vary phrasing.
    pub fn params(self) -> GenerationParams {
        match self {
            GenerationTask::Resume => GenerationParams {
                max_tokens: 2000,
                temperature: 0.3,
                top_p: 0.85,
            },
            GenerationTask::CoverLetter => GenerationParams {
                max_tokens: 1500,
                temperature: 0.4,
                top_p: 0.9,
            },
            GenerationTask::Skills => GenerationParams {
                max_tokens: 200,
                temperature: 0.2,
                top_p: 0.8,
            },
            GenerationTask::General => GenerationParams {
                max_tokens: 1000,
                temperature: 0.5,
                top_p: 0.9,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Extracts the assistant text from the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

/// The content-generation seam. The agent core depends on this trait rather
/// than on the concrete HTTP client, so backends can be swapped and tests
/// can script responses.
///
/// Carried in `ToolContext` as `Arc<dyn ContentGenerator>`.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, task: GenerationTask) -> Result<String, LlmError>;
}

/// Chat-completion client for the Hugging Face router API.
#[derive(Clone)]
pub struct HfClient {
    client: Client,
    token: String,
}

impl HfClient {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            token,
        }
    }
}

#[async_trait]
impl ContentGenerator for HfClient {
    /// Sends the fixed system persona plus `prompt` as a two-message
    /// exchange. Single best-effort attempt: failures are reported to the
    /// caller, never retried here.
    async fn generate(&self, prompt: &str, task: GenerationTask) -> Result<String, LlmError> {
        let params = task.params();
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::CAREER_ADVISOR_SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
        };

        let response = self
            .client
            .post(HF_ROUTER_URL)
            .bearer_auth(&self.token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {status}: {body}");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let text = chat.text().ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded: task={task:?}, {} chars", text.len());
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted generator for tests: records every call and replays canned
    //! responses in order. An exhausted script fails every further call, so
    //! `ScriptedGenerator::new(vec![])` doubles as an always-failing backend.

    use std::sync::Mutex;

    use super::*;

    pub struct ScriptedGenerator {
        responses: Mutex<Vec<Result<String, LlmError>>>,
        calls: Mutex<Vec<(String, GenerationTask)>>,
    }

    impl ScriptedGenerator {
        pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn replying(texts: &[&str]) -> Self {
            Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
        }

        pub fn failing() -> Self {
            Self::new(Vec::new())
        }

        /// Every (prompt, task) pair seen so far, in call order.
        pub fn calls(&self) -> Vec<(String, GenerationTask)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContentGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str, task: GenerationTask) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push((prompt.to_string(), task));
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(LlmError::Api {
                    status: 503,
                    message: "scripted failure".to_string(),
                });
            }
            responses.remove(0)
        }
    }
}
