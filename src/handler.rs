//! Protocol handler registration.
//!
//! A protocol handler resolves every identifier of one URI scheme by
//! delegating to an external resolver (a DID method driver, an HTTP
//! fetcher). This module only specifies the capability contract and the
//! scheme-to-handler table; implementations live in unrelated code and are
//! treated as opaque, stateless collaborators.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::HandlerError;

/// Capability contract for an external per-scheme resolver
#[async_trait]
pub trait ProtocolHandler: Send + Sync {
    /// Resolves `identifier` to a document.
    ///
    /// Any error raised here reaches the loader's caller unchanged; the
    /// loader adds no wrapping, retry, or fallback.
    async fn resolve(&self, identifier: &str) -> Result<Value, HandlerError>;
}

/// Mapping from URI scheme to the handler responsible for it
#[derive(Clone, Default)]
pub(crate) struct ProtocolHandlerTable {
    handlers: HashMap<String, Arc<dyn ProtocolHandler>>,
}

impl ProtocolHandlerTable {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `scheme`, replacing any previous handler
    pub fn set(&mut self, scheme: impl Into<String>, handler: Arc<dyn ProtocolHandler>) {
        self.handlers.insert(scheme.into(), handler);
    }

    pub fn get(&self, scheme: &str) -> Option<Arc<dyn ProtocolHandler>> {
        self.handlers.get(scheme).cloned()
    }
}

impl fmt::Debug for ProtocolHandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtocolHandlerTable")
            .field("schemes", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
