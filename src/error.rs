use crate::set::Set;

use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("unsupported set: {0}")]
    UnsupportedSet(Set),
    #[error("request encoding failed: {0}")]
    Serialization(Arc<serde_json::Error>),
    #[error("request failed: {0}")]
    Transport(Arc<reqwest::Error>),
    #[error("expected status {expected}, got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },
    #[error("malformed set list: {0}")]
    Decode(Arc<serde_json::Error>),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(Arc::new(error))
    }
}
