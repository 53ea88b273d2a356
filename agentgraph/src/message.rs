//! Transcript message records.
//!
//! A message is a role plus content. Serialized as `{"role": "...", "content": "..."}`
//! so partial updates coming from JSON producers decode directly into `Message`.

use serde::{Deserialize, Serialize};

/// A single message in the run transcript.
///
/// Roles follow the usual chat convention: system prompt, user input, agent reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "content", rename_all = "lowercase")]
pub enum Message {
    /// System prompt; typically placed first in the message list.
    System(String),
    /// User (task) input.
    User(String),
    /// Agent reply.
    Assistant(String),
}

impl Message {
    /// Builds a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Builds a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Builds an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// Role name as it appears on the wire.
    pub fn role(&self) -> &'static str {
        match self {
            Self::System(_) => "system",
            Self::User(_) => "user",
            Self::Assistant(_) => "assistant",
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::System(s) | Self::User(s) | Self::Assistant(s) => s,
        }
    }
}
