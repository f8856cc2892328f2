//! The resolution dispatch algorithm.
//!
//! A [`Resolver`] consults the static registry first and falls back to the
//! protocol handler registered for the identifier's scheme. Static entries
//! win so callers can pin specific identifiers to exact content, overriding
//! any live resolution a handler would perform for that scheme.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::error::LoaderError;
use crate::loader::LoaderState;
use crate::types::{DocumentTag, RemoteDocument};

/// Resolves identifiers against a loader's registries.
///
/// Obtained from [`DocumentLoader::build`](crate::DocumentLoader::build);
/// cheap to clone and safe to hand to external JSON-LD or
/// verifiable-credential tooling. Every resolver built from the same loader
/// observes that loader's registries, including mutation made after the
/// resolver was built.
#[derive(Clone)]
pub struct Resolver {
    state: Arc<RwLock<LoaderState>>,
}

impl Resolver {
    pub(crate) fn new(state: Arc<RwLock<LoaderState>>) -> Self {
        Self { state }
    }

    /// Resolves `identifier` to a document.
    ///
    /// The static registry is consulted first; a hit is returned with the
    /// `static` tag. On a miss, the handler registered for the identifier's
    /// scheme (the text before the first `:`, empty if there is none) is
    /// awaited and its document is returned untagged.
    ///
    /// # Errors
    /// * [`LoaderError::Handler`] — the protocol handler failed; its error
    ///   is surfaced unchanged.
    /// * [`LoaderError::NotFound`] — neither registry produced a document.
    ///
    /// # Example
    /// ```no_run
    /// use jsonld_document_loader::DocumentLoader;
    /// use serde_json::json;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let loader = DocumentLoader::new();
    ///     loader.add_static("https://www.w3.org/ns/did/v1", json!({"@context": {}}))?;
    ///
    ///     let resolver = loader.build();
    ///     let result = resolver.resolve("https://www.w3.org/ns/did/v1").await?;
    ///     println!("{}", result.document);
    ///     Ok(())
    /// }
    /// ```
    pub async fn resolve(&self, identifier: &str) -> Result<RemoteDocument, LoaderError> {
        // Guard scope ends before the await below; static lookups never
        // suspend and never block on handler latency.
        let handler = {
            let state = self.read();
            if let Some(document) = state.documents.get(identifier) {
                tracing::debug!(identifier, "serving document from static registry");
                return Ok(RemoteDocument {
                    context_url: None,
                    document: document.clone(),
                    document_url: identifier.to_string(),
                    tag: Some(DocumentTag::Static),
                });
            }
            let scheme = identifier.find(':').map_or("", |i| &identifier[..i]);
            state.handlers.get(scheme)
        };

        if let Some(handler) = handler {
            tracing::debug!(identifier, "dispatching to protocol handler");
            let document = handler
                .resolve(identifier)
                .await
                .map_err(LoaderError::Handler)?;
            return Ok(RemoteDocument {
                context_url: None,
                document,
                document_url: identifier.to_string(),
                tag: None,
            });
        }

        Err(LoaderError::NotFound(identifier.to_string()))
    }

    fn read(&self) -> RwLockReadGuard<'_, LoaderState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}
