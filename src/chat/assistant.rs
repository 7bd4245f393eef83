//! The chat session manager.
//!
//! This module owns the single conversation with the remote model and the
//! exact user-facing contract around it: [`Assistant::send_message`] always
//! returns a displayable string. Real replies come back verbatim; every
//! failure mode is flattened to one of three fixed sentinel strings, with
//! the structured detail routed to the diagnostics channel.

use std::env;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::client::{API_KEY_ENV, Gemini};
use crate::diagnostics::{Diagnostics, StderrDiagnostics};
use crate::error::Result;
use crate::observability::{
    EMPTY_REPLIES, FAILED_SENDS, OFFLINE_SENDS, SENDS, SESSION_OPENS,
};
use crate::types::{
    Content, GenerateContentRequest, GenerationConfig, Model, SystemInstruction,
};

use super::config::ChatConfig;

/// Returned when no credential is configured. The system is offline and no
/// network interaction is attempted.
pub const OFFLINE_SENTINEL: &str = "Err: API_KEY_MISSING. System offline.";

/// Returned when the remote resolves without producing any text.
pub const NO_RESPONSE_SENTINEL: &str = "Err: NO_RESPONSE.";

/// Returned when the remote call fails for any reason.
pub const CONNECTION_LOST_SENTINEL: &str = "Err: CONNECTION_LOST.";

/// One open conversation with the remote model.
///
/// A session owns its history; configuration is fixed when the session is
/// created and never changes afterwards.
#[async_trait::async_trait]
pub trait Session: Send {
    /// Submit one user turn and await the reply text.
    ///
    /// `Ok(None)` means the remote resolved without producing text.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying call fails; the conversation
    /// history is left as it was before the call.
    async fn exchange(&mut self, message: &str) -> Result<Option<String>>;

    /// Number of turns currently held in history.
    fn turn_count(&self) -> usize;

    /// Drop the conversation history.
    fn reset(&mut self);
}

/// Creates sessions from a credential.
pub trait Connector: Send + Sync {
    /// The session type this connector produces.
    type Session: Session;

    /// Open a session authenticated with the given credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be constructed.
    fn connect(&self, credential: &str) -> Result<Self::Session>;
}

/// The production session over the Generative Language API.
pub struct GeminiSession {
    client: Gemini,
    model: Model,
    system_instruction: Option<SystemInstruction>,
    generation_config: GenerationConfig,
    history: Vec<Content>,
}

impl GeminiSession {
    fn request(&self) -> GenerateContentRequest {
        let mut request = GenerateContentRequest::new(self.history.clone())
            .with_generation_config(self.generation_config.clone());
        if let Some(instruction) = &self.system_instruction {
            request = request.with_system_instruction(instruction.clone());
        }
        request
    }
}

#[async_trait::async_trait]
impl Session for GeminiSession {
    async fn exchange(&mut self, message: &str) -> Result<Option<String>> {
        self.history.push(Content::user(message));
        match self.client.generate(&self.model, self.request()).await {
            Ok(response) => {
                let text = response.text();
                if let Some(text) = &text {
                    self.history.push(Content::model(text.clone()));
                }
                Ok(text)
            }
            Err(err) => {
                // History must match what the session has actually exchanged.
                self.history.pop();
                Err(err)
            }
        }
    }

    fn turn_count(&self) -> usize {
        self.history.len()
    }

    fn reset(&mut self) {
        self.history.clear();
    }
}

/// Default connector producing [`GeminiSession`]s from a [`ChatConfig`].
pub struct GeminiConnector {
    config: ChatConfig,
}

impl GeminiConnector {
    /// Creates a connector with the given configuration.
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }
}

impl Connector for GeminiConnector {
    type Session = GeminiSession;

    fn connect(&self, credential: &str) -> Result<GeminiSession> {
        let client = Gemini::new(Some(credential.to_string()))?;
        let mut generation_config =
            GenerationConfig::new().with_max_output_tokens(self.config.max_output_tokens);
        if let Some(temperature) = self.config.temperature {
            generation_config = generation_config.with_temperature(temperature);
        }
        if let Some(top_p) = self.config.top_p {
            generation_config = generation_config.with_top_p(top_p);
        }
        if let Some(top_k) = self.config.top_k {
            generation_config = generation_config.with_top_k(top_k);
        }
        Ok(GeminiSession {
            client,
            model: self.config.model.clone(),
            system_instruction: self
                .config
                .system_prompt
                .clone()
                .map(SystemInstruction::from_text),
            generation_config,
            history: Vec::new(),
        })
    }
}

/// The studio assistant: at most one session per assistant, created on the
/// first send and reused for every send after it.
///
/// All failure handling happens inside [`send_message`](Self::send_message);
/// callers receive a displayable string no matter what went wrong.
pub struct Assistant<C: Connector = GeminiConnector> {
    credential: Option<String>,
    connector: C,
    session: OnceCell<Mutex<C::Session>>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Assistant<GeminiConnector> {
    /// Creates an assistant with the credential taken from the environment.
    ///
    /// A missing credential is not an error; the assistant runs offline and
    /// every send short-circuits to the offline sentinel.
    pub fn from_env(config: ChatConfig) -> Self {
        Self::with_connector(env::var(API_KEY_ENV).ok(), GeminiConnector::new(config))
    }
}

impl<C: Connector> Assistant<C> {
    /// Creates an assistant with an explicit credential and connector.
    pub fn with_connector(credential: Option<String>, connector: C) -> Self {
        Self {
            credential,
            connector,
            session: OnceCell::new(),
            diagnostics: Arc::new(StderrDiagnostics),
        }
    }

    /// Replaces the diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Whether a credential is configured.
    pub fn is_online(&self) -> bool {
        self.credential.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Submits one user message and returns a displayable reply.
    ///
    /// The credential is checked on every call, before any session exists.
    /// The session is created on the first authenticated send and reused for
    /// the lifetime of the assistant; a failed creation leaves nothing
    /// cached, so a later send may try again. Failures never propagate: the
    /// result is either the reply text, verbatim, or one of the fixed
    /// sentinel strings.
    pub async fn send_message(&self, message: &str) -> String {
        let Some(credential) = self.credential.as_deref().filter(|c| !c.is_empty()) else {
            OFFLINE_SENDS.click();
            return OFFLINE_SENTINEL.to_string();
        };

        let session = match self
            .session
            .get_or_try_init(|| async {
                SESSION_OPENS.click();
                self.connector.connect(credential).map(Mutex::new)
            })
            .await
        {
            Ok(session) => session,
            Err(err) => {
                FAILED_SENDS.click();
                self.diagnostics.record_failure(&err);
                return CONNECTION_LOST_SENTINEL.to_string();
            }
        };

        SENDS.click();
        match session.lock().await.exchange(message).await {
            Ok(Some(reply)) => reply,
            Ok(None) => {
                EMPTY_REPLIES.click();
                NO_RESPONSE_SENTINEL.to_string()
            }
            Err(err) => {
                FAILED_SENDS.click();
                self.diagnostics.record_failure(&err);
                CONNECTION_LOST_SENTINEL.to_string()
            }
        }
    }

    /// Drops the conversation history, if a session exists.
    pub async fn clear(&self) {
        if let Some(session) = self.session.get() {
            session.lock().await.reset();
        }
    }

    /// Number of turns currently held by the session.
    pub async fn turn_count(&self) -> usize {
        match self.session.get() {
            Some(session) => session.lock().await.turn_count(),
            None => 0,
        }
    }
}
