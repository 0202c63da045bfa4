//! Unified error types for fetchlist.
//!
//! Every failure that can happen while loading the record list is one of
//! two kinds: the transport could not produce a response body, or the body
//! did not decode into records. The list store collapses both into its
//! `Failed` state; the distinction survives here for logging and for the
//! non-interactive surfaces.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetchlist operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchListError {
    /// The record source could not be reached or answered with a failure status
    #[error("Transport failed: {context}")]
    Transport {
        context: String,
        #[source]
        source: TransportErrorKind,
    },

    /// The response body does not match the record schema
    #[error("Decoding failed: {context}")]
    Decode {
        context: String,
        #[source]
        source: DecodeErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific transport error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Server returned HTTP {status}")]
    Status { status: u16 },

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("Simulated failure: {0}")]
    Simulated(String),
}

/// Specific decode error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Unexpected record schema: {0}")]
    Schema(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for fetchlist operations
pub type Result<T> = std::result::Result<T, FetchListError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl FetchListError {
    /// Create a transport error with context
    pub fn transport(context: impl Into<String>, source: TransportErrorKind) -> Self {
        Self::Transport {
            context: context.into(),
            source,
        }
    }

    /// Create a decode error with context
    pub fn decode(context: impl Into<String>, source: DecodeErrorKind) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Render the error together with every underlying cause.
    ///
    /// `Display` shows only the context; this walks the `source()` chain so
    /// the HTTP status, timeout or serde message is kept:
    /// `"Transport failed: record list request: Server returned HTTP 500"`.
    #[must_use]
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }

    /// Whether the error came from the transport layer.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether the error came from decoding the response body.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for FetchListError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for FetchListError {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_data() {
            DecodeErrorKind::Schema(err.to_string())
        } else {
            DecodeErrorKind::InvalidJson(err.to_string())
        };
        Self::decode("JSON deserialization", kind)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The new context is prepended to whatever context the error already
/// carries, so a failure reads outermost-first:
/// `"loading records: fetching https://...: Network error: ..."`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<FetchListError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: FetchListError, new_ctx: &str) -> FetchListError {
    match err {
        FetchListError::Transport {
            context: existing,
            source,
        } => FetchListError::Transport {
            context: chain_context(new_ctx, &existing),
            source,
        },
        FetchListError::Decode {
            context: existing,
            source,
        } => FetchListError::Decode {
            context: chain_context(new_ctx, &existing),
            source,
        },
        FetchListError::Io {
            path,
            message,
            source,
        } => FetchListError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        FetchListError::Config(msg) => FetchListError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// Returns "`new`: `existing`", or just `new` when nothing was there before.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
