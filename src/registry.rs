//! The static document registry.
//!
//! Pins identifiers to exact document content supplied ahead of time
//! (vendored contexts, test fixtures), letting callers guarantee
//! deterministic, offline resolution for those identifiers.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::LoaderError;

/// In-memory mapping from identifier to document snapshot
#[derive(Debug, Clone, Default)]
pub(crate) struct StaticRegistry {
    documents: HashMap<String, Value>,
}

impl StaticRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    /// Stores `document` under `identifier`, overwriting any prior entry.
    ///
    /// Only structured values are accepted: a document must be a JSON
    /// object or array. Scalars and null are rejected.
    pub fn add(
        &mut self,
        identifier: impl Into<String>,
        document: Value,
    ) -> Result<(), LoaderError> {
        if !matches!(document, Value::Object(_) | Value::Array(_)) {
            return Err(LoaderError::InvalidArgument(
                "the document must be a JSON object or array".to_string(),
            ));
        }
        self.documents.insert(identifier.into(), document);
        Ok(())
    }

    /// Applies [`add`](Self::add) to every pair in iteration order.
    ///
    /// A later pair with a repeated identifier overwrites the earlier one.
    /// An invalid document aborts iteration; pairs applied before it keep
    /// their effect.
    pub fn add_all<I, K>(&mut self, entries: I) -> Result<(), LoaderError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (identifier, document) in entries {
            self.add(identifier, document)?;
        }
        Ok(())
    }

    /// Returns the stored snapshot for `identifier`, if any
    pub fn get(&self, identifier: &str) -> Option<&Value> {
        self.documents.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.documents.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_accepts_structured_documents() {
        let mut registry = StaticRegistry::new();

        registry
            .add("https://example.com/foo.jsonld", json!({"@context": {}}))
            .unwrap();
        registry
            .add("https://example.com/list.jsonld", json!([1, 2, 3]))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("https://example.com/foo.jsonld"));
    }

    #[test]
    fn test_add_rejects_non_structured_documents() {
        let invalid_documents = vec![
            json!(null),
            json!("a string"),
            json!(42),
            json!(true),
        ];

        for document in invalid_documents {
            let mut registry = StaticRegistry::new();
            let result = registry.add("https://example.com/foo.jsonld", document);
            assert!(matches!(result, Err(LoaderError::InvalidArgument(_))));
            assert_eq!(registry.len(), 0);
        }
    }

    #[test]
    fn test_add_overwrites_silently() {
        let mut registry = StaticRegistry::new();
        let identifier = "https://example.com/foo.jsonld";

        registry.add(identifier, json!({"version": 1})).unwrap();
        registry.add(identifier, json!({"version": 2})).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(identifier), Some(&json!({"version": 2})));
    }

    #[test]
    fn test_add_all_last_duplicate_wins() {
        let mut registry = StaticRegistry::new();

        registry
            .add_all(vec![
                ("https://example.com/a.jsonld", json!({"n": 1})),
                ("https://example.com/b.jsonld", json!({"n": 2})),
                ("https://example.com/a.jsonld", json!({"n": 3})),
            ])
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("https://example.com/a.jsonld"),
            Some(&json!({"n": 3}))
        );
    }

    #[test]
    fn test_add_all_aborts_on_invalid_pair() {
        let mut registry = StaticRegistry::new();

        let result = registry.add_all(vec![
            ("https://example.com/a.jsonld", json!({"n": 1})),
            ("https://example.com/bad.jsonld", json!(null)),
            ("https://example.com/c.jsonld", json!({"n": 3})),
        ]);

        assert!(matches!(result, Err(LoaderError::InvalidArgument(_))));
        // Pairs before the invalid one keep their effect
        assert!(registry.contains("https://example.com/a.jsonld"));
        assert!(!registry.contains("https://example.com/c.jsonld"));
    }

    #[test]
    fn test_get_missing_identifier() {
        let registry = StaticRegistry::new();
        assert!(registry.get("https://example.com/foo.jsonld").is_none());
    }
}
