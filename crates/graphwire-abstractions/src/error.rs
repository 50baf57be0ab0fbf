// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors for parsing, writing and registry lookups.

use thiserror::Error;

use crate::store::StoreError;

/// Failure while reading a parse node, assigning fields or writing output.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The node holds a different kind of value than requested.
    #[error("expected {expected} node, found {found}")]
    UnexpectedNodeType {
        /// Requested node kind.
        expected: &'static str,
        /// Actual node kind.
        found: &'static str,
    },
    /// A number does not fit the requested width.
    #[error("{value} does not fit in {target}")]
    OutOfRange {
        /// Number as read.
        value: String,
        /// Requested numeric type.
        target: &'static str,
    },
    /// A string could not be converted to the requested type.
    #[error("invalid {kind} `{value}`: {reason}")]
    InvalidValue {
        /// Requested type.
        kind: &'static str,
        /// Offending text.
        value: String,
        /// Why conversion failed.
        reason: String,
    },
    /// The payload as a whole could not be parsed.
    #[error("malformed {content_type} payload: {reason}")]
    Malformed {
        /// Content type being parsed.
        content_type: &'static str,
        /// Parser message.
        reason: String,
    },
    /// A field deserializer failed; `source` holds the cause.
    #[error("field `{field}`: {source}")]
    Field {
        /// Wire name of the field.
        field: String,
        /// Underlying failure.
        #[source]
        source: Box<SerializationError>,
    },
    /// Writer calls were unbalanced or out of place.
    #[error("writer state: {0}")]
    WriterState(&'static str),
    /// Backing store failure while assigning or reading a property.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Content-type or discriminator registry failure.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl SerializationError {
    /// Build an [`SerializationError::InvalidValue`].
    pub fn invalid(kind: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Attach the wire name of the field being processed.
    pub fn in_field(self, field: &str) -> Self {
        Self::Field {
            field: field.to_owned(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping field context.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Dotted path of field names leading to the innermost error.
    pub fn field_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Field { field, source } = current {
            path.push(field.as_str());
            current = &**source;
        }
        path
    }
}

/// Registration or lookup failure in a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A discriminator tag was registered twice for the same base type.
    #[error("discriminator `{0}` is already registered")]
    DuplicateDiscriminator(String),
    /// A factory for this content type is already registered.
    #[error("a factory for content type `{0}` is already registered")]
    DuplicateContentType(String),
    /// No factory handles this content type.
    #[error("no factory registered for content type `{0}`")]
    UnknownContentType(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn field_context_nests() {
        let err = SerializationError::invalid("uuid", "zz", "bad hex")
            .in_field("keyId")
            .in_field("keyCredentials");
        assert_eq!(err.field_path(), vec!["keyCredentials", "keyId"]);
        assert!(matches!(
            err.root_cause(),
            SerializationError::InvalidValue { kind: "uuid", .. }
        ));
        assert_eq!(
            err.to_string(),
            "field `keyCredentials`: field `keyId`: invalid uuid `zz`: bad hex"
        );
    }
}
