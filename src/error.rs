use thiserror::Error;

/// Any failure that stops a benchmark run. Nothing below `main` recovers from these.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("conversation creation returned no conversationId")]
    MissingConversationId,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("base URL must be http(s): {0}")]
    UnsupportedBaseUrl(String),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub const SERVICE_HINT: &str = "Make sure AgentFlow is running on 8080 and LLM on 8081.";

/// Line printed by the top-level handler when a run fails.
pub fn failure_message(err: &BenchError) -> String {
    format!("Error: {}. {}", err, SERVICE_HINT)
}
