//! Error types for loader and resolution operations.
//!
//! This module provides the error types that can occur while populating a
//! loader or resolving an identifier. It uses the `thiserror` crate for
//! error handling.

use thiserror::Error;

/// Opaque failure raised by an external protocol handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while populating a loader or resolving an identifier
#[derive(Error, Debug)]
pub enum LoaderError {
    /// A document offered to the static registry was not a structured value
    #[error("Invalid document: {0}")]
    InvalidArgument(String),

    /// No static entry and no protocol handler produced a document.
    /// External libraries match on the identifier embedded in the message.
    #[error("Document not found in document loader: {0}")]
    NotFound(String),

    /// A protocol handler failed; its error is surfaced unchanged
    #[error(transparent)]
    Handler(HandlerError),
}
