// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! graphwire-json: the JSON wire format for graphwire models.
//!
//! [`JsonParseNode`] reads a `serde_json::Value` and [`JsonSerializationWriter`]
//! builds one. The free functions cover the common whole-document cases; use
//! [`register`] to plug both factories into a
//! [`SerializationRegistry`](graphwire_abstractions::SerializationRegistry).

mod parse_node;
mod writer;

use std::sync::Arc;

use graphwire_abstractions::{
    Parsable, ParsableFactory, ParseNode, RegistryError, SerializationError, SerializationRegistry,
    SerializationWriter,
};
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

pub use parse_node::{to_untyped, JsonParseNode, JsonParseNodeFactory};
pub use writer::{JsonSerializationWriter, JsonSerializationWriterFactory};

/// Content type handled by this crate.
pub const CONTENT_TYPE: &str = "application/json";

/// Failure converting between JSON text and models.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// The JSON is well formed but does not fit the model.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

/// Register the JSON parse node and writer factories.
pub fn register(registry: &mut SerializationRegistry) -> Result<(), RegistryError> {
    registry.register_parse_node_factory(Arc::new(JsonParseNodeFactory))?;
    registry.register_writer_factory(Arc::new(JsonSerializationWriterFactory::default()))
}

/// Assemble a model from an already parsed document. A top-level `null`
/// yields `None`.
pub fn from_value<T: ?Sized + Parsable>(
    value: &Value,
    factory: ParsableFactory<T>,
) -> Result<Option<Box<T>>, SerializationError> {
    let node = JsonParseNode::new(value);
    let node: &dyn ParseNode = &node;
    node.get_object_value(factory)
}

/// Parse `content` and assemble a model from it.
pub fn from_slice<T: ?Sized + Parsable>(
    content: &[u8],
    factory: ParsableFactory<T>,
) -> Result<Option<Box<T>>, JsonError> {
    let value: Value = serde_json::from_slice(content)?;
    trace!(bytes = content.len(), "parsed JSON document");
    Ok(from_value(&value, factory)?)
}

/// [`from_slice`] over a string.
pub fn from_str<T: ?Sized + Parsable>(content: &str, factory: ParsableFactory<T>) -> Result<Option<Box<T>>, JsonError> {
    from_slice(content.as_bytes(), factory)
}

fn write_model<T: ?Sized + Parsable>(
    model: &T,
    mut writer: JsonSerializationWriter,
) -> Result<JsonSerializationWriter, SerializationError> {
    {
        let sink: &mut dyn SerializationWriter = &mut writer;
        sink.write_object_value(None, Some(model))?;
    }
    Ok(writer)
}

/// Serialize `model` to a JSON value.
pub fn to_value<T: ?Sized + Parsable>(model: &T) -> Result<Value, SerializationError> {
    let value = write_model(model, JsonSerializationWriter::new())?.into_value()?;
    Ok(value.unwrap_or_default())
}

/// Serialize `model` to compact JSON bytes.
pub fn to_vec<T: ?Sized + Parsable>(model: &T) -> Result<Vec<u8>, SerializationError> {
    write_model(model, JsonSerializationWriter::new())?.content()
}

/// Serialize `model` to indented JSON text.
pub fn to_string_pretty<T: ?Sized + Parsable>(model: &T) -> Result<String, SerializationError> {
    let bytes = write_model(model, JsonSerializationWriter::pretty())?.content()?;
    String::from_utf8(bytes).map_err(|err| SerializationError::invalid("utf-8", "<document>", err))
}
