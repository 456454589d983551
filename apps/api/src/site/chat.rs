//! Chat widget model: the visitor's transcript and the client side of `/api/ask`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::ask::handlers::{AskRequest, AskResponse};

/// Shown when the relay could not be reached at all. Relay-side failures come
/// back as a normal answer carrying the relay's own error text.
pub const CLIENT_ERROR_ANSWER: &str = "Error: Could not get an answer.";

#[derive(Debug, Error)]
pub enum RelayClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Whatever answers a question on the widget's behalf.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn ask(&self, question: &str, knowledge: &str) -> Result<String, RelayClientError>;
}

/// Posts questions to a running relay endpoint.
// The served page talks to /api/ask from its inline script; only tests drive this client.
#[allow(dead_code)]
#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    endpoint: String,
}

#[allow(dead_code)] // test-only, see `RelayClient`
impl RelayClient {
    /// `base_url` is the site origin, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Result<Self, RelayClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: format!("{}/api/ask", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl Relay for RelayClient {
    async fn ask(&self, question: &str, knowledge: &str) -> Result<String, RelayClientError> {
        let body = AskRequest {
            question: question.to_string(),
            knowledge: knowledge.to_string(),
        };
        // The relay reports its own failures inside `answer`, so the status is not checked.
        let response: AskResponse = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        Ok(response.answer)
    }
}

/// Append-only, in-memory conversation shown in the widget.
// The browser keeps the live transcript; this model is what the widget tests run against.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

#[allow(dead_code)] // test-only, see `ChatTranscript`
impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
        });
    }

    /// Sends `input` through `relay`. Blank input is dropped without a call.
    /// Otherwise the user entry is appended first, then exactly one AI entry.
    pub async fn send<R: Relay + ?Sized>(&mut self, input: &str, knowledge: &str, relay: &R) {
        if input.trim().is_empty() {
            return;
        }

        self.push(ChatRole::User, input);

        let answer = match relay.ask(input, knowledge).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("chat relay request failed: {e}");
                CLIENT_ERROR_ANSWER.to_string()
            }
        };
        self.push(ChatRole::Ai, answer);
    }
}
