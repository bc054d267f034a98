use serde::Serialize;
use serde_json::Value;
use snippy_core::{Result, SnippetId, SnippetStore};

pub const COLLECTION_DESCRIPTION: &str = "A code snippet manager";
pub const SNIPPET_DESCRIPTION: &str = "A code snippet";

/// Application state exposed to the agent as read-only context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadableContext {
    pub description: &'static str,
    pub value: Value,
}

impl ReadableContext {
    /// The whole collection, in insertion order
    ///
    /// # Errors
    ///
    /// `Serialization` if the collection cannot be encoded.
    pub fn collection(store: &SnippetStore) -> Result<Self> {
        Ok(Self {
            description: COLLECTION_DESCRIPTION,
            value: serde_json::to_value(store.list())?,
        })
    }

    /// The snippet being viewed, or `{}` when the id is unknown
    ///
    /// # Errors
    ///
    /// `Serialization` if the snippet cannot be encoded.
    pub fn snippet(store: &SnippetStore, id: SnippetId) -> Result<Self> {
        let value = match store.find_by_id(id) {
            Some(snippet) => serde_json::to_value(snippet)?,
            None => Value::Object(serde_json::Map::new()),
        };
        Ok(Self {
            description: SNIPPET_DESCRIPTION,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snippet_context_for_unknown_id_is_empty_object() {
        let store = SnippetStore::in_memory();
        let context = ReadableContext::snippet(&store, 42).unwrap();
        assert_eq!(context.description, "A code snippet");
        assert_eq!(context.value, json!({}));
    }

    #[test]
    fn test_collection_context_lists_snippets() {
        let mut store = SnippetStore::in_memory();
        store
            .create("A".into(), "a".into(), "css".into(), vec!["ui".into()])
            .unwrap();

        let context = ReadableContext::collection(&store).unwrap();

        assert_eq!(context.description, "A code snippet manager");
        assert_eq!(context.value[0]["title"], "A");
        assert_eq!(context.value[0]["tags"], json!(["ui"]));
    }
}
