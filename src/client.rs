use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use std::time::Duration;
use url::Url;

use crate::error::BenchError;
use crate::models::{
    ChatRequest,
    ChatResponse,
    CreateConversationRequest,
    CreateConversationResponse,
    GenerateRequest,
    GenerateResponse,
};

/// The AgentFlow HTTP surface the benchmark drives.
#[async_trait]
pub trait AgentApi: Send + Sync {
    /// Single prompt against the history-less endpoint.
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, BenchError>;

    async fn create_conversation(
        &self,
        system_prompt: &str
    ) -> Result<CreateConversationResponse, BenchError>;

    async fn chat(&self, conversation_id: &str, message: &str) -> Result<ChatResponse, BenchError>;

    async fn delete_conversation(&self, conversation_id: &str) -> Result<(), BenchError>;
}

#[derive(Debug, Clone)]
pub struct AgentFlowClient {
    http: HttpClient,
    base_url: Url,
}

impl AgentFlowClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, BenchError> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(BenchError::UnsupportedBaseUrl(base_url.to_string()));
        }

        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: parsed,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl AgentApi for AgentFlowClient {
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, BenchError> {
        let url = self.endpoint(&["generate"]);
        debug!("POST {}", url);
        let req = GenerateRequest { prompt: prompt.to_string() };
        let resp = self.http.post(url).json(&req).send().await?.error_for_status()?;
        Ok(resp.json::<GenerateResponse>().await?)
    }

    async fn create_conversation(
        &self,
        system_prompt: &str
    ) -> Result<CreateConversationResponse, BenchError> {
        let url = self.endpoint(&["conversations"]);
        debug!("POST {}", url);
        let req = CreateConversationRequest { system_prompt: system_prompt.to_string() };
        let resp = self.http.post(url).json(&req).send().await?.error_for_status()?;
        Ok(resp.json::<CreateConversationResponse>().await?)
    }

    async fn chat(&self, conversation_id: &str, message: &str) -> Result<ChatResponse, BenchError> {
        let url = self.endpoint(&["conversations", conversation_id, "chat"]);
        debug!("POST {}", url);
        let req = ChatRequest { message: message.to_string() };
        let resp = self.http.post(url).json(&req).send().await?.error_for_status()?;
        let data = resp.json::<ChatResponse>().await?;
        debug!("Conversation {} now holds {} messages", conversation_id, data.history.len());
        Ok(data)
    }

    async fn delete_conversation(&self, conversation_id: &str) -> Result<(), BenchError> {
        let url = self.endpoint(&["conversations", conversation_id]);
        debug!("DELETE {}", url);
        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}
