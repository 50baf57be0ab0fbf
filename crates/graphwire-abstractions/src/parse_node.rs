// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read side of a wire format: one node of a parsed payload.
//!
//! Adapters implement the object-safe [`ParseNode`] trait (child lookup,
//! members, items, primitives). Typed helpers for enums, collections and
//! nested models live on `dyn ParseNode` so generated field deserializers
//! can call them on any adapter.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use tracing::trace;
use uuid::Uuid;

use crate::duration::IsoDuration;
use crate::enums::WireEnum;
use crate::error::SerializationError;
use crate::parsable::{Parsable, ParsableFactory};
use crate::store::ADDITIONAL_DATA_KEY;
use crate::untyped::UntypedNode;
use crate::value::{AdditionalData, StoreValue};
use crate::writer::SerializationWriter;

/// Shape of a parse node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Explicit null.
    Null,
    /// Boolean.
    Bool,
    /// Number.
    Number,
    /// String.
    String,
    /// Array.
    Array,
    /// Object.
    Object,
}

impl NodeKind {
    /// Lowercase name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of a parsed payload.
///
/// Every `get_*_value` returns `Ok(None)` for a null node and
/// [`SerializationError::UnexpectedNodeType`] for a node of another shape.
/// The string-encoded types (UUID, dates, durations, bytes) have default
/// implementations on top of [`ParseNode::get_string_value`].
pub trait ParseNode {
    /// Shape of this node.
    fn kind(&self) -> NodeKind;

    /// Member `name` of an object node; `None` when absent or when this
    /// node is not an object.
    fn get_child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError>;

    /// Members of an object node, in wire order.
    fn object_members(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, SerializationError>;

    /// Items of an array node, in wire order.
    fn collection_items(&self) -> Result<Vec<Box<dyn ParseNode + '_>>, SerializationError>;

    /// String value.
    fn get_string_value(&self) -> Result<Option<String>, SerializationError>;

    /// Boolean value.
    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError>;

    /// 32-bit integer value.
    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError>;

    /// 64-bit integer value.
    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError>;

    /// 32-bit float value.
    fn get_f32_value(&self) -> Result<Option<f32>, SerializationError>;

    /// 64-bit float value.
    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError>;

    /// Schema-less copy of this node.
    fn get_untyped_value(&self) -> Result<UntypedNode, SerializationError>;

    /// `true` for a null node.
    fn is_null(&self) -> bool {
        self.kind() == NodeKind::Null
    }

    /// Hyphenated UUID.
    fn get_uuid_value(&self) -> Result<Option<Uuid>, SerializationError> {
        self.get_string_value()?
            .map(|raw| Uuid::parse_str(&raw).map_err(|err| SerializationError::invalid("uuid", raw, err)))
            .transpose()
    }

    /// RFC 3339 timestamp.
    fn get_date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, SerializationError> {
        self.get_string_value()?
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw).map_err(|err| SerializationError::invalid("date-time", raw, err))
            })
            .transpose()
    }

    /// `YYYY-MM-DD` date.
    fn get_date_only_value(&self) -> Result<Option<NaiveDate>, SerializationError> {
        self.get_string_value()?
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|err| SerializationError::invalid("date", raw, err))
            })
            .transpose()
    }

    /// `HH:MM:SS[.fraction]` time.
    fn get_time_only_value(&self) -> Result<Option<NaiveTime>, SerializationError> {
        self.get_string_value()?
            .map(|raw| {
                NaiveTime::parse_from_str(&raw, "%H:%M:%S%.f").map_err(|err| SerializationError::invalid("time", raw, err))
            })
            .transpose()
    }

    /// ISO-8601 duration.
    fn get_iso_duration_value(&self) -> Result<Option<IsoDuration>, SerializationError> {
        self.get_string_value()?
            .map(|raw| IsoDuration::parse(&raw).map_err(|err| SerializationError::invalid("duration", raw, err.reason)))
            .transpose()
    }

    /// Standard base64 byte array.
    fn get_byte_array_value(&self) -> Result<Option<Bytes>, SerializationError> {
        self.get_string_value()?
            .map(|raw| match STANDARD.decode(raw.as_bytes()) {
                Ok(bytes) => Ok(Bytes::from(bytes)),
                Err(err) => Err(SerializationError::invalid("base64", raw, err)),
            })
            .transpose()
    }
}

/// Scalar types that can appear in primitive collections.
pub trait Primitive: StoreValue {
    /// Read one value from `node`.
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError>;

    /// Write `self` under `key` (or as a collection item when `None`).
    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), SerializationError>;
}

macro_rules! primitive {
    ($ty:ty, $get:ident, |$value:ident, $writer:ident, $key:ident| $write:expr) => {
        impl Primitive for $ty {
            fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
                node.$get()
            }

            fn write(&self, $writer: &mut dyn SerializationWriter, $key: Option<&str>) -> Result<(), SerializationError> {
                let $value = self;
                $write
            }
        }
    };
}

primitive!(String, get_string_value, |v, w, k| w.write_string_value(k, Some(v.as_str())));
primitive!(bool, get_bool_value, |v, w, k| w.write_bool_value(k, Some(*v)));
primitive!(i32, get_i32_value, |v, w, k| w.write_i32_value(k, Some(*v)));
primitive!(i64, get_i64_value, |v, w, k| w.write_i64_value(k, Some(*v)));
primitive!(f32, get_f32_value, |v, w, k| w.write_f32_value(k, Some(*v)));
primitive!(f64, get_f64_value, |v, w, k| w.write_f64_value(k, Some(*v)));
primitive!(Uuid, get_uuid_value, |v, w, k| w.write_uuid_value(k, Some(v)));
primitive!(DateTime<FixedOffset>, get_date_time_value, |v, w, k| w.write_date_time_value(k, Some(v)));
primitive!(NaiveDate, get_date_only_value, |v, w, k| w.write_date_only_value(k, Some(v)));
primitive!(NaiveTime, get_time_only_value, |v, w, k| w.write_time_only_value(k, Some(v)));
primitive!(IsoDuration, get_iso_duration_value, |v, w, k| w.write_iso_duration_value(k, Some(v)));

impl<'a> dyn ParseNode + 'a {
    /// Enum constant or flag set; unrecognized strings read as `None`.
    pub fn get_enum_value<T: WireEnum>(&self) -> Result<Option<T>, SerializationError> {
        Ok(self.get_string_value()?.and_then(|raw| T::parse_wire(&raw)))
    }

    /// Array of enum strings. Unrecognized members are dropped.
    pub fn get_collection_of_enum_values<T: WireEnum>(&self) -> Result<Option<Vec<T>>, SerializationError> {
        if self.is_null() {
            return Ok(None);
        }
        let mut out = Vec::new();
        for item in self.collection_items()? {
            if let Some(value) = item.get_enum_value::<T>()? {
                out.push(value);
            }
        }
        Ok(Some(out))
    }

    /// Array of primitives. Null items are skipped.
    pub fn get_collection_of_primitive_values<T: Primitive>(&self) -> Result<Option<Vec<T>>, SerializationError> {
        if self.is_null() {
            return Ok(None);
        }
        let mut out = Vec::new();
        for item in self.collection_items()? {
            if let Some(value) = T::read(item.as_ref())? {
                out.push(value);
            }
        }
        Ok(Some(out))
    }

    /// Nested model: `factory` picks the concrete type, then every member is
    /// assigned through [`Parsable::deserialize_field`].
    pub fn get_object_value<T: ?Sized + Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Box<T>>, SerializationError> {
        if self.is_null() {
            return Ok(None);
        }
        let mut value = factory(self)?;
        self.assign_field_values(&mut *value)?;
        Ok(Some(value))
    }

    /// Array of nested models. Null items are skipped.
    pub fn get_collection_of_object_values<T: ?Sized + Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<Box<T>>>, SerializationError> {
        if self.is_null() {
            return Ok(None);
        }
        let mut out = Vec::new();
        for item in self.collection_items()? {
            if let Some(value) = item.get_object_value(factory)? {
                out.push(value);
            }
        }
        Ok(Some(out))
    }

    /// Assign every member of this object node to `target`.
    ///
    /// Declared fields go through the target's field deserializers. Other
    /// members land in additional data when the target accepts it and are
    /// skipped otherwise. The store records no changes for assigned values.
    pub fn assign_field_values<T: ?Sized + Parsable>(&self, target: &mut T) -> Result<(), SerializationError> {
        if self.kind() != NodeKind::Object {
            return Err(SerializationError::UnexpectedNodeType {
                expected: NodeKind::Object.name(),
                found: self.kind().name(),
            });
        }

        target.backing_store_mut().set_initialization_completed(false);
        let applied = self.apply_members(target);
        target.backing_store_mut().set_initialization_completed(true);
        applied
    }

    fn apply_members<T: ?Sized + Parsable>(&self, target: &mut T) -> Result<(), SerializationError> {
        let mut unknown = AdditionalData::new();
        for (name, node) in self.object_members()? {
            if target.deserialize_field(&name, node.as_ref())? {
                continue;
            }
            if target.accepts_additional_data() {
                let value = node.get_untyped_value().map_err(|err| err.in_field(&name))?;
                unknown.insert(name, value);
            } else {
                trace!(field = %name, "skipping undeclared field");
            }
        }

        if !unknown.is_empty() {
            let store = target.backing_store_mut();
            let mut data = store.additional_data()?.unwrap_or_default();
            data.extend(unknown);
            store.set_value(ADDITIONAL_DATA_KEY, Some(data))?;
        }
        Ok(())
    }
}

/// Plain-map parse node used by unit tests across the crate.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct MapNode(pub(crate) UntypedNode);

    impl MapNode {
        pub(crate) fn object(members: &[(&str, UntypedNode)]) -> Self {
            Self(UntypedNode::Object(
                members
                    .iter()
                    .map(|(name, value)| ((*name).to_owned(), value.clone()))
                    .collect(),
            ))
        }

        fn mismatch(&self, expected: NodeKind) -> SerializationError {
            SerializationError::UnexpectedNodeType {
                expected: expected.name(),
                found: self.kind().name(),
            }
        }
    }

    impl ParseNode for MapNode {
        fn kind(&self) -> NodeKind {
            match &self.0 {
                UntypedNode::Null => NodeKind::Null,
                UntypedNode::Boolean(_) => NodeKind::Bool,
                UntypedNode::Integer(_) | UntypedNode::UnsignedInteger(_) | UntypedNode::Double(_) => {
                    NodeKind::Number
                }
                UntypedNode::String(_) => NodeKind::String,
                UntypedNode::Array(_) => NodeKind::Array,
                UntypedNode::Object(_) => NodeKind::Object,
            }
        }

        fn get_child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError> {
            Ok(self
                .0
                .get(name)
                .map(|child| Box::new(Self(child.clone())) as Box<dyn ParseNode>))
        }

        fn object_members(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, SerializationError> {
            match &self.0 {
                UntypedNode::Object(members) => Ok(members
                    .iter()
                    .map(|(name, value)| (name.clone(), Box::new(Self(value.clone())) as Box<dyn ParseNode>))
                    .collect()),
                _ => Err(self.mismatch(NodeKind::Object)),
            }
        }

        fn collection_items(&self) -> Result<Vec<Box<dyn ParseNode + '_>>, SerializationError> {
            match &self.0 {
                UntypedNode::Array(items) => Ok(items
                    .iter()
                    .map(|value| Box::new(Self(value.clone())) as Box<dyn ParseNode>)
                    .collect()),
                _ => Err(self.mismatch(NodeKind::Array)),
            }
        }

        fn get_string_value(&self) -> Result<Option<String>, SerializationError> {
            match &self.0 {
                UntypedNode::Null => Ok(None),
                UntypedNode::String(value) => Ok(Some(value.clone())),
                _ => Err(self.mismatch(NodeKind::String)),
            }
        }

        fn get_bool_value(&self) -> Result<Option<bool>, SerializationError> {
            match &self.0 {
                UntypedNode::Null => Ok(None),
                UntypedNode::Boolean(value) => Ok(Some(*value)),
                _ => Err(self.mismatch(NodeKind::Bool)),
            }
        }

        fn get_i32_value(&self) -> Result<Option<i32>, SerializationError> {
            self.get_i64_value()?
                .map(|value| {
                    i32::try_from(value).map_err(|_| SerializationError::OutOfRange {
                        value: value.to_string(),
                        target: "int32",
                    })
                })
                .transpose()
        }

        fn get_i64_value(&self) -> Result<Option<i64>, SerializationError> {
            match &self.0 {
                UntypedNode::Null => Ok(None),
                UntypedNode::Integer(value) => Ok(Some(*value)),
                UntypedNode::UnsignedInteger(value) => Err(SerializationError::OutOfRange {
                    value: value.to_string(),
                    target: "int64",
                }),
                _ => Err(self.mismatch(NodeKind::Number)),
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        fn get_f32_value(&self) -> Result<Option<f32>, SerializationError> {
            Ok(self.get_f64_value()?.map(|value| value as f32))
        }

        #[allow(clippy::cast_precision_loss)]
        fn get_f64_value(&self) -> Result<Option<f64>, SerializationError> {
            match &self.0 {
                UntypedNode::Null => Ok(None),
                UntypedNode::Integer(value) => Ok(Some(*value as f64)),
                UntypedNode::UnsignedInteger(value) => Ok(Some(*value as f64)),
                UntypedNode::Double(value) => Ok(Some(*value)),
                _ => Err(self.mismatch(NodeKind::Number)),
            }
        }

        fn get_untyped_value(&self) -> Result<UntypedNode, SerializationError> {
            Ok(self.0.clone())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::testing::MapNode;
    use super::*;

    crate::wire_enum! {
        /// Test enum.
        enum Day: "day" {
            /// Monday.
            Monday = "monday",
            /// Tuesday.
            Tuesday = "tuesday",
        }
    }

    fn node(value: UntypedNode) -> Box<dyn ParseNode> {
        Box::new(MapNode(value))
    }

    #[test]
    fn string_encoded_defaults() {
        let id = node("6f9619ff-8b86-d011-b42d-00c04fc964ff".into());
        assert_eq!(
            id.get_uuid_value().unwrap().map(|u| u.to_string()).as_deref(),
            Some("6f9619ff-8b86-d011-b42d-00c04fc964ff")
        );
        let date = node("2024-02-29".into());
        assert_eq!(date.get_date_only_value().unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29));
        let time = node("08:30:00".into());
        assert_eq!(time.get_time_only_value().unwrap(), NaiveTime::from_hms_opt(8, 30, 0));
        let duration = node("P90D".into());
        assert_eq!(duration.get_iso_duration_value().unwrap(), Some(IsoDuration::from_days(90)));
        let bytes = node("aGVsbG8=".into());
        assert_eq!(bytes.get_byte_array_value().unwrap().as_deref(), Some(&b"hello"[..]));
    }

    #[test]
    fn malformed_strings_are_invalid_values() {
        let bad = node("not-a-uuid".into());
        assert!(matches!(
            bad.get_uuid_value(),
            Err(SerializationError::InvalidValue { kind: "uuid", .. })
        ));
        assert!(bad.get_date_time_value().is_err());
        assert!(bad.get_byte_array_value().is_err());
    }

    #[test]
    fn null_reads_as_absent() {
        let null = node(UntypedNode::Null);
        assert_eq!(null.get_string_value().unwrap(), None);
        assert_eq!(null.get_uuid_value().unwrap(), None);
        assert_eq!(null.get_collection_of_primitive_values::<String>().unwrap(), None);
        assert_eq!(null.get_enum_value::<Day>().unwrap(), None);
    }

    #[test]
    fn enums_parse_leniently() {
        assert_eq!(node("tuesday".into()).get_enum_value::<Day>().unwrap(), Some(Day::Tuesday));
        assert_eq!(node("someday".into()).get_enum_value::<Day>().unwrap(), None);

        let days = node(UntypedNode::Array(vec!["monday".into(), "funday".into(), "tuesday".into()]));
        assert_eq!(
            days.get_collection_of_enum_values::<Day>().unwrap(),
            Some(vec![Day::Monday, Day::Tuesday])
        );
    }

    #[test]
    fn primitive_collections_keep_order_and_empty() {
        let ids = node(UntypedNode::Array(vec!["b".into(), "a".into()]));
        assert_eq!(
            ids.get_collection_of_primitive_values::<String>().unwrap(),
            Some(vec!["b".to_owned(), "a".to_owned()])
        );
        let empty = node(UntypedNode::Array(Vec::new()));
        assert_eq!(empty.get_collection_of_primitive_values::<i32>().unwrap(), Some(Vec::new()));
        let wrong = node(UntypedNode::Array(vec![UntypedNode::Boolean(true)]));
        assert!(wrong.get_collection_of_primitive_values::<i32>().is_err());
    }

    #[test]
    fn object_members_keep_wire_order() {
        let object = MapNode::object(&[("z", 1_i64.into()), ("a", 2_i64.into())]);
        let names: Vec<String> = object.object_members().unwrap().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert!(object.get_child_node("missing").unwrap().is_none());
    }
}
