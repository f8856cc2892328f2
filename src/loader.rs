//! The composition root for document resolution.
//!
//! A [`DocumentLoader`] owns one static registry and one protocol handler
//! table, exposes the mutation API for both, and builds [`Resolver`] values
//! bound to them for hand-off to external tooling.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::error::LoaderError;
use crate::handler::{ProtocolHandler, ProtocolHandlerTable};
use crate::registry::StaticRegistry;
use crate::resolver::Resolver;

/// Registries shared between a loader and the resolvers built from it
#[derive(Debug)]
pub(crate) struct LoaderState {
    pub(crate) documents: StaticRegistry,
    pub(crate) handlers: ProtocolHandlerTable,
}

/// A pluggable document loader.
///
/// Callers pin identifiers to static documents, install per-scheme protocol
/// handlers backed by external resolvers, and hand the built [`Resolver`] to
/// a JSON-LD or verifiable-credential processor, which invokes it per
/// identifier at its own pace.
///
/// Configuration is expected to complete before concurrent resolution
/// traffic begins; mutating a loader while resolutions are in flight is
/// safe but unordered with respect to them.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use jsonld_document_loader::{DocumentLoader, ProtocolHandler};
/// use serde_json::json;
///
/// # fn did_driver() -> Arc<dyn ProtocolHandler> { unimplemented!() }
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let loader = DocumentLoader::new();
///     loader.add_static("https://www.w3.org/ns/did/v1", json!({"@context": {}}))?;
///     loader.set_did_resolver(did_driver());
///
///     let resolver = loader.build();
///     let context = resolver.resolve("https://www.w3.org/ns/did/v1").await?;
///     let did_doc = resolver.resolve("did:ex:12345").await?;
///     println!("{} {}", context.document, did_doc.document);
///     Ok(())
/// }
/// ```
pub struct DocumentLoader {
    state: Arc<RwLock<LoaderState>>,
}

impl DocumentLoader {
    /// Creates a loader with empty registries
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(LoaderState {
                documents: StaticRegistry::new(),
                handlers: ProtocolHandlerTable::new(),
            })),
        }
    }

    /// Pins `identifier` to an exact document, overwriting any prior entry.
    ///
    /// Static entries take precedence over protocol handlers, so pinning an
    /// identifier also shadows any live resolution its scheme would
    /// otherwise receive.
    ///
    /// # Errors
    /// [`LoaderError::InvalidArgument`] if `document` is not a JSON object
    /// or array.
    pub fn add_static(
        &self,
        identifier: impl Into<String>,
        document: Value,
    ) -> Result<(), LoaderError> {
        self.write().documents.add(identifier, document)
    }

    /// Pins every `(identifier, document)` pair in iteration order.
    ///
    /// Later pairs with a repeated identifier overwrite earlier ones. An
    /// invalid document aborts iteration; pairs applied before it keep
    /// their effect.
    pub fn add_documents<I, K>(&self, entries: I) -> Result<(), LoaderError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.write().documents.add_all(entries)
    }

    /// Registers `handler` for identifiers of `scheme`, replacing any
    /// previous handler for that scheme
    pub fn set_protocol_handler(
        &self,
        scheme: impl Into<String>,
        handler: Arc<dyn ProtocolHandler>,
    ) {
        self.write().handlers.set(scheme, handler);
    }

    /// Registers `handler` for the `did` scheme
    pub fn set_did_resolver(&self, handler: Arc<dyn ProtocolHandler>) {
        self.set_protocol_handler("did", handler);
    }

    /// Returns whether `identifier` is pinned in the static registry
    pub fn contains_static(&self, identifier: &str) -> bool {
        self.read().documents.contains(identifier)
    }

    /// Number of pinned static documents
    pub fn static_len(&self) -> usize {
        self.read().documents.len()
    }

    /// Builds a [`Resolver`] bound to this loader's registries.
    ///
    /// Every resolver built from the same loader shares the same
    /// registries; mutations made through the loader afterwards are
    /// observed by all of them.
    pub fn build(&self) -> Resolver {
        Resolver::new(Arc::clone(&self.state))
    }

    fn read(&self) -> RwLockReadGuard<'_, LoaderState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LoaderState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DocumentLoader {
    /// Snapshots this loader into an independent one.
    ///
    /// The clone receives a copy of every currently-pinned document and an
    /// independent scheme-to-handler map; handler objects themselves are
    /// shared by reference, as they are external stateless collaborators.
    /// Subsequent mutation of either loader is invisible to the other.
    fn clone(&self) -> Self {
        let state = self.read();
        Self {
            state: Arc::new(RwLock::new(LoaderState {
                documents: state.documents.clone(),
                handlers: state.handlers.clone(),
            })),
        }
    }
}
