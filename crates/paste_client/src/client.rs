//! Pastebin actor client

use crate::transport::{HttpTransport, PostTransport};
use serde::Serialize;
use thiserror::Error;
use types::{GetPasteArgs, NewPasteArgs, PasteAction, PasteRequest};

/// Failure of a paste call
#[derive(Error, Debug)]
pub enum PasteClientError<E: std::error::Error + 'static> {
    /// The arguments could not be encoded as JSON; nothing was sent
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Error raised by the transport, unchanged
    #[error(transparent)]
    Transport(E),
}

/// Outcome of a paste call over transport `T`
pub type PasteResult<T> =
    Result<<T as PostTransport>::Response, PasteClientError<<T as PostTransport>::Error>>;

/// Client for the pastebin actor
#[derive(Debug, Clone)]
pub struct PasteClient<T = HttpTransport> {
    transport: T,
}

impl PasteClient<HttpTransport> {
    /// Create a client talking HTTP to `base_url`
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(base_url)?))
    }
}

impl<T: PostTransport> PasteClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a paste. The id is sent as-is, without validation.
    pub async fn get_paste<I: Serialize>(&self, paste_id: I) -> PasteResult<T> {
        self.call(PasteAction::GetPaste, GetPasteArgs { paste_id }).await
    }

    /// Store a new paste. Every call creates a new entry on the backend.
    pub async fn new_paste(&self, code: &str) -> PasteResult<T> {
        self.call(PasteAction::NewPaste, NewPasteArgs { code }).await
    }

    async fn call<A: Serialize>(&self, action: PasteAction, args: A) -> PasteResult<T> {
        let body = serde_json::to_value(PasteRequest::new(args)).map_err(PasteClientError::Encode)?;
        let path = action.path();

        tracing::debug!(action = action.method(), path = %path, "Calling pastebin actor");

        self.transport
            .post_json(&path, &body)
            .await
            .map_err(PasteClientError::Transport)
    }
}
