//! Configuration types for the terminal concierge.
//!
//! This module provides CLI argument parsing via `arrrg` and the resolved
//! configuration a session is created from. Session configuration is fixed
//! at creation time; nothing here changes once the session exists.

use std::path::PathBuf;

use arrrg_derive::CommandLine;

use crate::content;
use crate::types::{KnownModel, Model};

/// Default maximum tokens per reply. The system instruction asks for short
/// replies; this cap is best-effort on the remote side, not enforced here.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 256;

/// Command-line arguments for the azmth-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: gemini-2.5-flash)", "MODEL")]
    pub model: Option<String>,

    /// System prompt overriding the studio instruction.
    #[arrrg(optional, "Override the studio system instruction", "PROMPT")]
    pub system: Option<String>,

    /// Maximum tokens per reply.
    #[arrrg(optional, "Max tokens per reply (default: 256)", "TOKENS")]
    pub max_output_tokens: Option<u32>,

    /// Transcript file for /save without an argument.
    #[arrrg(optional, "Default path for saved transcripts", "FILE")]
    pub transcript: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The model to use for generating replies.
    pub model: Model,

    /// System instruction fixed for the session. Defaults to the studio
    /// instruction assembled from the catalog.
    pub system_prompt: Option<String>,

    /// Maximum tokens per reply.
    pub max_output_tokens: u32,

    /// Optional sampling temperature.
    pub temperature: Option<f32>,

    /// Optional top-p nucleus sampling value.
    pub top_p: Option<f32>,

    /// Optional top-k sampling limit.
    pub top_k: Option<u32>,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Default path for saved transcripts.
    pub transcript_path: Option<PathBuf>,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gemini-2.5-flash
    /// - System prompt: the studio instruction
    /// - Max output tokens: 256
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            model: Model::Known(KnownModel::Gemini25Flash),
            system_prompt: Some(content::system_prompt()),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: None,
            top_p: None,
            top_k: None,
            use_color: true,
            transcript_path: None,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    /// Sets the maximum tokens per reply.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the top-p value.
    pub fn with_top_p(mut self, top_p: Option<f32>) -> Self {
        self.top_p = top_p;
        self
    }

    /// Sets the top-k value.
    pub fn with_top_k(mut self, top_k: Option<u32>) -> Self {
        self.top_k = top_k;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Sets the default transcript path.
    pub fn with_transcript_path(mut self, path: Option<PathBuf>) -> Self {
        self.transcript_path = path;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let mut config = ChatConfig::new();
        if let Some(model) = args.model {
            config.model = Model::from_name(&model);
        }
        if let Some(system) = args.system {
            config.system_prompt = Some(system);
        }
        if let Some(max_output_tokens) = args.max_output_tokens {
            config.max_output_tokens = max_output_tokens;
        }
        config.transcript_path = args.transcript.map(PathBuf::from);
        config.use_color = !args.no_color;
        config
    }
}
