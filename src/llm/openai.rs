use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
        CreateChatCompletionResponse,
    },
};

use super::{ChatCompletion, ChatRequest, Provider};

pub struct OpenAIProvider {
    client: Client<OpenAIConfig>,
}

impl OpenAIProvider {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Client::with_config(OpenAIConfig::new().with_api_key(api_key)),
        }
    }
}

fn chat_request(req: &ChatRequest) -> CreateChatCompletionRequest {
    let system = ChatCompletionRequestSystemMessage {
        content: ChatCompletionRequestSystemMessageContent::Text(req.system.clone()),
        name: None,
    };
    let user = ChatCompletionRequestUserMessage {
        content: ChatCompletionRequestUserMessageContent::Text(req.prompt.clone()),
        name: None,
    };

    CreateChatCompletionRequest {
        model: req.model.clone(),
        messages: vec![
            ChatCompletionRequestMessage::System(system),
            ChatCompletionRequestMessage::User(user),
        ],
        ..Default::default()
    }
}

/// First choice only; a choice without text is an error.
fn into_completion(response: CreateChatCompletionResponse) -> anyhow::Result<ChatCompletion> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("completion returned no choices"))?;
    let content = choice
        .message
        .content
        .ok_or_else(|| anyhow::anyhow!("completion returned no message content"))?;
    let usage = response.usage.as_ref();

    Ok(ChatCompletion {
        content,
        model: response.model,
        input_tokens: usage.map_or(0, |u| u.prompt_tokens),
        output_tokens: usage.map_or(0, |u| u.completion_tokens),
        finish_reason: choice
            .finish_reason
            .map(|r| format!("{r:?}").to_lowercase()),
    })
}

#[async_trait::async_trait]
impl Provider for OpenAIProvider {
    async fn complete(&self, req: &ChatRequest) -> anyhow::Result<ChatCompletion> {
        let response = self.client.chat().create(chat_request(req)).await?;
        into_completion(response)
    }
}
