// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Dynamically-typed property values held by a backing store.
//!
//! Every property a model keeps is one [`Value`]. Typed accessors convert in
//! and out through [`StoreValue`] (scalars and their collections), the
//! [`WireEnum`](crate::WireEnum) bit form ([`EnumValue`]), or an opaque
//! [`ObjectValue`] for nested models.

use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::duration::IsoDuration;
use crate::untyped::UntypedNode;

/// Unmodeled wire fields kept for round-tripping, keyed by wire name.
pub type AdditionalData = BTreeMap<String, UntypedNode>;

/// Discriminant of a [`Value`], used in mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// UTF-8 string.
    String,
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// UUID.
    Uuid,
    /// Timestamp with offset.
    DateTime,
    /// Calendar date.
    Date,
    /// Wall-clock time.
    Time,
    /// ISO-8601 duration.
    Duration,
    /// Raw bytes.
    Bytes,
    /// Enum constant or flag set.
    Enum,
    /// Homogeneous collection.
    Collection,
    /// Nested model (or collection of models).
    Object,
    /// Additional-data bucket.
    AdditionalData,
}

impl ValueKind {
    /// Human-readable name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Uuid => "uuid",
            Self::DateTime => "date-time",
            Self::Date => "date",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Bytes => "bytes",
            Self::Enum => "enum",
            Self::Collection => "collection",
            Self::Object => "object",
            Self::AdditionalData => "additional data",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum constant as stored: the enum's schema name plus its integer bits.
///
/// Single-valued enums store their table index; flag enums store the OR of
/// their set bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    /// Schema name of the enum type (`WireEnum::TYPE_NAME`).
    pub type_name: &'static str,
    /// Integer representation.
    pub bits: u64,
}

/// Type-erased nested model value.
///
/// Equality is identity: two `ObjectValue`s are equal when they share the
/// same allocation.
#[derive(Clone)]
pub struct ObjectValue {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ObjectValue {
    /// Wraps `value`, remembering its Rust type name for diagnostics.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Rust type name of the wrapped value.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// One property value held by a backing store.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 string.
    String(String),
    /// Boolean.
    Bool(bool),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 32-bit float.
    Float32(f32),
    /// 64-bit float.
    Float64(f64),
    /// UUID.
    Uuid(Uuid),
    /// Timestamp with offset.
    DateTime(DateTime<FixedOffset>),
    /// Calendar date.
    Date(NaiveDate),
    /// Wall-clock time.
    Time(NaiveTime),
    /// ISO-8601 duration.
    Duration(IsoDuration),
    /// Raw bytes.
    Bytes(Bytes),
    /// Enum constant or flag set.
    Enum(EnumValue),
    /// Homogeneous collection of values.
    Collection(Vec<Value>),
    /// Nested model or collection of models.
    Object(ObjectValue),
    /// Additional-data bucket.
    AdditionalData(AdditionalData),
}

impl Value {
    /// Discriminant of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Uuid(_) => ValueKind::Uuid,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::Duration(_) => ValueKind::Duration,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Enum(_) => ValueKind::Enum,
            Self::Collection(_) => ValueKind::Collection,
            Self::Object(_) => ValueKind::Object,
            Self::AdditionalData(_) => ValueKind::AdditionalData,
        }
    }

    /// Most specific label for diagnostics: the enum or Rust type name for
    /// enums and objects, the kind name otherwise.
    pub const fn type_label(&self) -> &'static str {
        match self {
            Self::Enum(value) => value.type_name,
            Self::Object(value) => value.type_name,
            other => other.kind().name(),
        }
    }
}

/// Conversion between a Rust type and its [`Value`] representation.
pub trait StoreValue: Sized {
    /// Kind produced by [`StoreValue::into_value`].
    const KIND: ValueKind;

    /// Wrap `self` as a store value.
    fn into_value(self) -> Value;

    /// Extract `Self` from `value`; `None` when the variant does not match.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! scalar_store_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl StoreValue for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(Clone::clone(inner)),
                    _ => None,
                }
            }
        }
    )*};
}

scalar_store_value! {
    String => String,
    bool => Bool,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    Uuid => Uuid,
    DateTime<FixedOffset> => DateTime,
    NaiveDate => Date,
    NaiveTime => Time,
    IsoDuration => Duration,
    Bytes => Bytes,
    AdditionalData => AdditionalData,
}

impl<T: StoreValue> StoreValue for Vec<T> {
    const KIND: ValueKind = ValueKind::Collection;

    fn into_value(self) -> Value {
        Value::Collection(self.into_iter().map(StoreValue::into_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Collection(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn scalar_conversion_matches_variant_only() {
        let value = "ada".to_owned().into_value();
        assert_eq!(value.kind(), ValueKind::String);
        assert_eq!(String::from_value(&value).as_deref(), Some("ada"));
        assert_eq!(i32::from_value(&value), None);
    }

    #[test]
    fn collections_reject_mixed_items() {
        let mixed = Value::Collection(vec![Value::Int32(1), Value::String("two".into())]);
        assert_eq!(Vec::<i32>::from_value(&mixed), None);

        let ints = vec![1, 2, 3].into_value();
        assert_eq!(Vec::<i32>::from_value(&ints), Some(vec![1, 2, 3]));
    }

    #[test]
    fn empty_collection_is_not_absent() {
        let empty = Vec::<String>::new().into_value();
        assert_eq!(Vec::<String>::from_value(&empty), Some(Vec::new()));
    }

    #[test]
    fn object_values_compare_by_identity() {
        let a = ObjectValue::new(5_u32);
        let b = a.clone();
        let c = ObjectValue::new(5_u32);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.downcast_ref::<u32>(), Some(&5));
        assert!(a.downcast_ref::<i64>().is_none());
        assert_eq!(Value::Object(a).type_label(), "u32");
    }
}
