// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Schema-less wire values for fields a model does not declare.

/// A wire value with no schema attached.
///
/// Object members keep their wire order so unmodeled payloads round-trip
/// without reordering.
#[derive(Debug, Clone, PartialEq)]
pub enum UntypedNode {
    /// Explicit null.
    Null,
    /// Boolean.
    Boolean(bool),
    /// Integral number.
    Integer(i64),
    /// Integral number above `i64::MAX`.
    UnsignedInteger(u64),
    /// Non-integral number.
    Double(f64),
    /// String.
    String(String),
    /// Ordered list.
    Array(Vec<UntypedNode>),
    /// Ordered key/value members.
    Object(Vec<(String, UntypedNode)>),
}

impl UntypedNode {
    /// Short name of the node kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) | Self::UnsignedInteger(_) => "integer",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// `true` for [`UntypedNode::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// String payload, if this is a string node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// First member named `key`, if this is an object node.
    pub fn get(&self, key: &str) -> Option<&UntypedNode> {
        match self {
            Self::Object(members) => members
                .iter()
                .find_map(|(name, value)| (name == key).then_some(value)),
            _ => None,
        }
    }
}

impl From<&str> for UntypedNode {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for UntypedNode {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for UntypedNode {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for UntypedNode {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for UntypedNode {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UnsignedInteger(value), Self::Integer)
    }
}

impl From<f64> for UntypedNode {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}
