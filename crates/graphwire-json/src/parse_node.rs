// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! [`ParseNode`] over a `serde_json::Value`.

use std::borrow::Cow;

use graphwire_abstractions::{NodeKind, ParseNode, ParseNodeFactory, SerializationError, UntypedNode};
use serde_json::{Number, Value};

use crate::CONTENT_TYPE;

/// One node of a parsed JSON document.
///
/// The root owns its document; children borrow from their parent.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonParseNode<'a> {
    value: Cow<'a, Value>,
}

impl<'a> JsonParseNode<'a> {
    /// Node borrowing `value`.
    pub fn new(value: &'a Value) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }

    /// Underlying JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    fn mismatch(&self, expected: NodeKind) -> SerializationError {
        SerializationError::UnexpectedNodeType {
            expected: expected.name(),
            found: self.kind().name(),
        }
    }

    fn number(&self) -> Result<Option<&Number>, SerializationError> {
        match self.value() {
            Value::Null => Ok(None),
            Value::Number(number) => Ok(Some(number)),
            _ => Err(self.mismatch(NodeKind::Number)),
        }
    }
}

impl JsonParseNode<'static> {
    /// Root node owning `value`.
    pub fn from_value(value: Value) -> Self {
        Self {
            value: Cow::Owned(value),
        }
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn kind(&self) -> NodeKind {
        match self.value() {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    fn get_child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError> {
        Ok(match self.value() {
            Value::Object(members) => members.get(name).map(|child| JsonParseNode::new(child).boxed()),
            _ => None,
        })
    }

    fn object_members(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, SerializationError> {
        match self.value() {
            Value::Object(members) => Ok(members
                .iter()
                .map(|(name, child)| (name.clone(), JsonParseNode::new(child).boxed()))
                .collect()),
            _ => Err(self.mismatch(NodeKind::Object)),
        }
    }

    fn collection_items(&self) -> Result<Vec<Box<dyn ParseNode + '_>>, SerializationError> {
        match self.value() {
            Value::Array(items) => Ok(items.iter().map(|item| JsonParseNode::new(item).boxed()).collect()),
            _ => Err(self.mismatch(NodeKind::Array)),
        }
    }

    fn get_string_value(&self) -> Result<Option<String>, SerializationError> {
        match self.value() {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(text.clone())),
            _ => Err(self.mismatch(NodeKind::String)),
        }
    }

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError> {
        match self.value() {
            Value::Null => Ok(None),
            Value::Bool(flag) => Ok(Some(*flag)),
            _ => Err(self.mismatch(NodeKind::Bool)),
        }
    }

    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError> {
        self.get_i64_value()?
            .map(|wide| {
                i32::try_from(wide).map_err(|_| SerializationError::OutOfRange {
                    value: wide.to_string(),
                    target: "int32",
                })
            })
            .transpose()
    }

    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError> {
        let Some(number) = self.number()? else {
            return Ok(None);
        };
        if let Some(value) = number.as_i64() {
            return Ok(Some(value));
        }
        if number.is_u64() {
            return Err(SerializationError::OutOfRange {
                value: number.to_string(),
                target: "int64",
            });
        }
        Err(SerializationError::invalid("integer", number.to_string(), "not an integral number"))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn get_f32_value(&self) -> Result<Option<f32>, SerializationError> {
        self.get_f64_value()?
            .map(|wide| {
                if wide.abs() > f64::from(f32::MAX) {
                    return Err(SerializationError::OutOfRange {
                        value: wide.to_string(),
                        target: "float32",
                    });
                }
                Ok(wide as f32)
            })
            .transpose()
    }

    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError> {
        let Some(number) = self.number()? else {
            return Ok(None);
        };
        number
            .as_f64()
            .map(Some)
            .ok_or_else(|| SerializationError::invalid("float64", number.to_string(), "not representable"))
    }

    fn get_untyped_value(&self) -> Result<UntypedNode, SerializationError> {
        to_untyped(self.value())
    }
}

impl<'a> JsonParseNode<'a> {
    fn boxed(self) -> Box<dyn ParseNode + 'a> {
        Box::new(self)
    }
}

/// Schema-less copy of `value`. Integral numbers keep their exact value as
/// [`UntypedNode::Integer`] or [`UntypedNode::UnsignedInteger`], every other
/// number becomes [`UntypedNode::Double`].
pub fn to_untyped(value: &Value) -> Result<UntypedNode, SerializationError> {
    Ok(match value {
        Value::Null => UntypedNode::Null,
        Value::Bool(flag) => UntypedNode::Boolean(*flag),
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                UntypedNode::Integer(integer)
            } else if let Some(unsigned) = number.as_u64() {
                UntypedNode::UnsignedInteger(unsigned)
            } else {
                UntypedNode::Double(
                    number
                        .as_f64()
                        .ok_or_else(|| SerializationError::invalid("number", number.to_string(), "not representable"))?,
                )
            }
        }
        Value::String(text) => UntypedNode::String(text.clone()),
        Value::Array(items) => UntypedNode::Array(items.iter().map(to_untyped).collect::<Result<_, _>>()?),
        Value::Object(members) => UntypedNode::Object(
            members
                .iter()
                .map(|(name, member)| Ok((name.clone(), to_untyped(member)?)))
                .collect::<Result<_, SerializationError>>()?,
        ),
    })
}

/// [`ParseNodeFactory`] for `application/json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParseNodeFactory;

impl ParseNodeFactory for JsonParseNodeFactory {
    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    fn root_parse_node(&self, content: &[u8]) -> Result<Box<dyn ParseNode>, SerializationError> {
        let value: Value = serde_json::from_slice(content).map_err(|err| SerializationError::Malformed {
            content_type: CONTENT_TYPE,
            reason: err.to_string(),
        })?;
        Ok(Box::new(JsonParseNode::from_value(value)))
    }
}
