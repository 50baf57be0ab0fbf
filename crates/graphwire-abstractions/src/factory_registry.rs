// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Content-type keyed registry of parse node and writer factories.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{RegistryError, SerializationError};
use crate::parse_node::ParseNode;
use crate::writer::SerializationWriter;

/// Builds root parse nodes for one content type.
pub trait ParseNodeFactory: Send + Sync {
    /// Content type handled, e.g. `application/json`.
    fn content_type(&self) -> &'static str;

    /// Parse `content` into its root node.
    fn root_parse_node(&self, content: &[u8]) -> Result<Box<dyn ParseNode>, SerializationError>;
}

/// Builds serialization writers for one content type.
pub trait SerializationWriterFactory: Send + Sync {
    /// Content type produced.
    fn content_type(&self) -> &'static str;

    /// Fresh, empty writer.
    fn writer(&self) -> Box<dyn SerializationWriter>;
}

/// Lowercase `content_type`, drop parameters and collapse vendor types:
/// `application/vnd.foo+json; charset=utf-8` becomes `application/json`.
pub fn normalize_content_type(content_type: &str) -> String {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let collapsed = essence.split_once('/').and_then(|(kind, subtype)| {
        subtype
            .rsplit_once('+')
            .map(|(_, suffix)| format!("{kind}/{suffix}"))
    });
    collapsed.unwrap_or(essence)
}

/// Registry of factories keyed by normalized content type.
#[derive(Default, Clone)]
pub struct SerializationRegistry {
    parsers: BTreeMap<String, Arc<dyn ParseNodeFactory>>,
    writers: BTreeMap<String, Arc<dyn SerializationWriterFactory>>,
}

impl SerializationRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parse node factory under its content type.
    pub fn register_parse_node_factory(&mut self, factory: Arc<dyn ParseNodeFactory>) -> Result<(), RegistryError> {
        let key = normalize_content_type(factory.content_type());
        if self.parsers.contains_key(&key) {
            return Err(RegistryError::DuplicateContentType(key));
        }
        self.parsers.insert(key, factory);
        Ok(())
    }

    /// Register a writer factory under its content type.
    pub fn register_writer_factory(&mut self, factory: Arc<dyn SerializationWriterFactory>) -> Result<(), RegistryError> {
        let key = normalize_content_type(factory.content_type());
        if self.writers.contains_key(&key) {
            return Err(RegistryError::DuplicateContentType(key));
        }
        self.writers.insert(key, factory);
        Ok(())
    }

    /// Root node of `content` parsed as `content_type`.
    pub fn parse_node(&self, content_type: &str, content: &[u8]) -> Result<Box<dyn ParseNode>, SerializationError> {
        let key = normalize_content_type(content_type);
        let factory = self
            .parsers
            .get(&key)
            .ok_or(RegistryError::UnknownContentType(key))?;
        factory.root_parse_node(content)
    }

    /// Fresh writer for `content_type`.
    pub fn writer(&self, content_type: &str) -> Result<Box<dyn SerializationWriter>, SerializationError> {
        let key = normalize_content_type(content_type);
        let factory = self
            .writers
            .get(&key)
            .ok_or(RegistryError::UnknownContentType(key))?;
        Ok(factory.writer())
    }

    /// Content types with a parse node factory.
    pub fn parse_content_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.parsers.keys().map(String::as_str)
    }
}

impl fmt::Debug for SerializationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializationRegistry")
            .field("parsers", &self.parsers.keys().collect::<Vec<_>>())
            .field("writers", &self.writers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::parse_node::testing::MapNode;
    use crate::untyped::UntypedNode;

    struct TextFactory;

    impl ParseNodeFactory for TextFactory {
        fn content_type(&self) -> &'static str {
            "text/plain"
        }

        fn root_parse_node(&self, content: &[u8]) -> Result<Box<dyn ParseNode>, SerializationError> {
            let text = String::from_utf8(content.to_vec())
                .map_err(|err| SerializationError::invalid("utf-8", "<bytes>", err))?;
            Ok(Box::new(MapNode(UntypedNode::String(text))))
        }
    }

    #[test]
    fn content_types_are_normalized() {
        assert_eq!(normalize_content_type("Application/JSON; charset=utf-8"), "application/json");
        assert_eq!(normalize_content_type("application/vnd.graph+json"), "application/json");
        assert_eq!(normalize_content_type("text/plain"), "text/plain");
    }

    #[test]
    fn lookup_by_content_type() {
        let mut registry = SerializationRegistry::new();
        registry.register_parse_node_factory(Arc::new(TextFactory)).unwrap();
        assert_eq!(
            registry.register_parse_node_factory(Arc::new(TextFactory)),
            Err(RegistryError::DuplicateContentType("text/plain".into()))
        );

        let node = registry.parse_node("text/plain; charset=utf-8", b"hi").unwrap();
        assert_eq!(node.get_string_value().unwrap().as_deref(), Some("hi"));

        let err = registry
            .parse_node("application/xml", b"<a/>")
            .err()
            .expect("unknown content type");
        assert!(matches!(
            err,
            SerializationError::Registry(RegistryError::UnknownContentType(ref ct)) if ct == "application/xml"
        ));
        assert!(registry.writer("text/plain").is_err());
        assert_eq!(registry.parse_content_types().collect::<Vec<_>>(), vec!["text/plain"]);
    }
}
