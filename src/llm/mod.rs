pub mod client;
pub mod openai;

pub use client::LlmClient;
pub use openai::OpenAIProvider;

/// A single system + user exchange.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatCompletion {
    pub content: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub finish_reason: Option<String>,
}

/// Chat backend behind [`LlmClient`]. Production uses [`OpenAIProvider`];
/// tests substitute canned replies.
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, req: &ChatRequest) -> anyhow::Result<ChatCompletion>;
}
