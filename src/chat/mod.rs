//! The concierge: session management and the terminal chat surface.
//!
//! This module owns the conversation with the remote model and everything
//! the chat binary needs around it:
//!
//! - [`assistant`]: the session manager and its sentinel-string contract
//! - [`config`]: CLI argument parsing and session configuration
//! - [`commands`]: slash command parsing
//! - [`transcript`]: visit transcript persistence

mod assistant;
mod commands;
mod config;
mod transcript;

pub use assistant::{
    Assistant, CONNECTION_LOST_SENTINEL, Connector, GeminiConnector, GeminiSession,
    NO_RESPONSE_SENTINEL, OFFLINE_SENTINEL, Session,
};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use transcript::{Speaker, Transcript, TranscriptEntry};
