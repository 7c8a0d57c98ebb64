use async_trait::async_trait;
use reqwest::Client;

use crate::llm::types::{Content, GenerateContentRequest, GenerateContentResponse};
use crate::providers::{ModelClient, ModelError, ModelSession};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";

/// Stateless Gemini REST client. Sessions are layered on top of it; the
/// client itself holds no conversation state and is cheap to clone.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub(crate) async fn generate_content(
        &self,
        history: &[Content],
    ) -> Result<String, ModelError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: history.to_vec(),
        };

        let res = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| ModelError(err.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let err_text = res
                .text()
                .await
                .map_err(|err| ModelError(err.to_string()))?;
            return Err(ModelError(format!(
                "Gemini API error (status {status}): {err_text}"
            )));
        }

        let body: GenerateContentResponse = res
            .json()
            .await
            .map_err(|err| ModelError(err.to_string()))?;

        body.candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| ModelError("no text candidate in response".to_string()))
    }
}

/// One conversation with Gemini. History lives client-side and is
/// replayed in full on every request, which is how earlier statement text
/// stays in context for later prompts without callers re-sending it.
pub struct GeminiChat {
    client: GeminiClient,
    history: Vec<Content>,
}

impl GeminiChat {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }
}

#[async_trait]
impl ModelSession for GeminiChat {
    async fn send(&mut self, prompt: &str) -> Result<String, ModelError> {
        self.history.push(Content::user(prompt));
        match self.client.generate_content(&self.history).await {
            Ok(reply) => {
                self.history.push(Content::model(reply.clone()));
                Ok(reply)
            }
            Err(err) => {
                // A failed call leaves no half-turn in the history.
                self.history.pop();
                Err(err)
            }
        }
    }
}

impl ModelClient for GeminiClient {
    fn new_session(&self) -> Box<dyn ModelSession> {
        Box::new(GeminiChat::new(self.clone()))
    }
}
