//! A pluggable document loader for JSON-LD and DID-aware tooling.
//!
//! This library supplies documents (JSON-LD contexts, DID documents) for
//! requested identifiers without performing any network I/O itself. It is
//! designed to sit between a JSON-LD or verifiable-credential processor and
//! two backing sources: an in-memory registry of pinned documents, and
//! caller-installed protocol handlers that resolve identifiers of one URI
//! scheme by delegating to an external resolver.

mod error;
mod handler;
mod loader;
mod registry;
mod resolver;
mod types;

pub use error::{HandlerError, LoaderError};
pub use handler::ProtocolHandler;
pub use loader::DocumentLoader;
pub use resolver::Resolver;
pub use types::{DocumentTag, RemoteDocument};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_pin_and_resolve() {
        let loader = DocumentLoader::new();
        loader
            .add_static("https://www.w3.org/ns/did/v1", json!({"@context": {}}))
            .unwrap();

        let result = loader
            .build()
            .resolve("https://www.w3.org/ns/did/v1")
            .await
            .unwrap();
        assert_eq!(result.tag, Some(DocumentTag::Static));
    }
}
