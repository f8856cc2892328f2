//! Core types for document resolution.
//!
//! This module provides the result type handed back to JSON-LD and
//! verifiable-credential tooling, using the field names those processors
//! expect from a document loader.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marks how a resolved document was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentTag {
    /// The document came from the loader's static registry
    #[serde(rename = "static")]
    Static,
}

/// A resolved document together with its retrieval metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteDocument {
    /// URL of a context linked out-of-band (e.g. via an HTTP Link header).
    /// Never set by this loader; nested-context indirection is not supported.
    #[serde(rename = "contextUrl")]
    pub context_url: Option<String>,

    /// The resolved document content
    pub document: Value,

    /// The identifier the document was resolved for
    #[serde(rename = "documentUrl")]
    pub document_url: String,

    /// Present only for documents served from the static registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<DocumentTag>,
}
