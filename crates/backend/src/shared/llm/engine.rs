use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};

use super::extract::extract_code;
use super::types::RefactorError;
use crate::shared::config::LlmConfig;

/// System instruction pinning the model to a code-only reply.
const INSTRUCTION: &str = "You are a Senior Code Refactorer API.\n\
INPUT: Raw source code.\n\
TASK: Refactor with docstrings, type hints, and clean formatting.\n\
OUTPUT: Return ONLY the code inside a markdown block (```python ... ```). Do not chat.";

/// One chat-completion client wrapped for the single refactoring task.
pub struct RefactorEngine {
    client: Client<OpenAIConfig>,
    model: String,
}

impl RefactorEngine {
    pub fn from_config(config: &LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new();
        match config.resolve_api_key() {
            Some(key) => openai_config = openai_config.with_api_key(key),
            // async-openai reads OPENAI_API_KEY itself as a last resort;
            // without any key, requests fail with an auth error at call time.
            None => tracing::warn!(
                "no LLM API key configured; set [llm].api_key in config.toml or OPENAI_API_KEY"
            ),
        }
        if let Some(endpoint) = &config.api_endpoint {
            openai_config = openai_config.with_api_base(endpoint);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
        }
    }

    /// Run one chat completion over the uploaded source and return the
    /// refactored code.
    pub async fn refactor(&self, filename: &str, source: &str) -> Result<String, RefactorError> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(INSTRUCTION)
                .build()
                .map_err(|e| RefactorError::InvalidRequest(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(format!("Refactor this file named '{filename}':\n\n{source}"))
                .build()
                .map_err(|e| RefactorError::InvalidRequest(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| RefactorError::InvalidRequest(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            let err = e.to_string();
            if err.contains("401") || err.contains("authentication") {
                RefactorError::Auth(err)
            } else if err.contains("429") || err.contains("rate limit") {
                RefactorError::RateLimited
            } else {
                RefactorError::Api(err)
            }
        })?;

        let reply = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();
        if reply.trim().is_empty() {
            return Err(RefactorError::EmptyReply);
        }

        // The model occasionally replies without a fence; returning the raw
        // reply beats failing the request.
        let code = extract_code(&reply);
        Ok(if code.is_empty() { reply } else { code })
    }
}
