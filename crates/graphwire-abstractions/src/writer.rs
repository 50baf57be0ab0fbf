// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Write side of a wire format.
//!
//! Each `write_*` takes an optional key: `Some` writes an object member,
//! `None` writes a collection item. `None` values are skipped entirely, so
//! absent properties never reach the wire.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike};
use uuid::Uuid;

use crate::duration::IsoDuration;
use crate::enums::WireEnum;
use crate::error::SerializationError;
use crate::parsable::Parsable;
use crate::parse_node::Primitive;
use crate::untyped::UntypedNode;
use crate::value::AdditionalData;

/// Sink for typed values, objects and collections.
pub trait SerializationWriter {
    /// Write a string.
    fn write_string_value(&mut self, key: Option<&str>, value: Option<&str>) -> Result<(), SerializationError>;

    /// Write a boolean.
    fn write_bool_value(&mut self, key: Option<&str>, value: Option<bool>) -> Result<(), SerializationError>;

    /// Write a 32-bit integer.
    fn write_i32_value(&mut self, key: Option<&str>, value: Option<i32>) -> Result<(), SerializationError>;

    /// Write a 64-bit integer.
    fn write_i64_value(&mut self, key: Option<&str>, value: Option<i64>) -> Result<(), SerializationError>;

    /// Write an unsigned 64-bit integer.
    fn write_u64_value(&mut self, key: Option<&str>, value: Option<u64>) -> Result<(), SerializationError>;

    /// Write a 32-bit float.
    fn write_f32_value(&mut self, key: Option<&str>, value: Option<f32>) -> Result<(), SerializationError>;

    /// Write a 64-bit float.
    fn write_f64_value(&mut self, key: Option<&str>, value: Option<f64>) -> Result<(), SerializationError>;

    /// Write an explicit null.
    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

    /// Open an object under `key`.
    fn start_object(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

    /// Close the innermost open object.
    fn end_object(&mut self) -> Result<(), SerializationError>;

    /// Open a collection under `key`.
    fn start_collection(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

    /// Close the innermost open collection.
    fn end_collection(&mut self) -> Result<(), SerializationError>;

    /// Serialized bytes of everything written so far.
    fn content(&self) -> Result<Vec<u8>, SerializationError>;

    /// Write a hyphenated UUID.
    fn write_uuid_value(&mut self, key: Option<&str>, value: Option<&Uuid>) -> Result<(), SerializationError> {
        let text = value.map(Uuid::to_string);
        self.write_string_value(key, text.as_deref())
    }

    /// Write an RFC 3339 timestamp (`Z` for UTC). The fraction uses the
    /// fewest digits that keep every nanosecond, so `.1234567` stays as is.
    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: Option<&DateTime<FixedOffset>>,
    ) -> Result<(), SerializationError> {
        let text = value.map(format_date_time);
        self.write_string_value(key, text.as_deref())
    }

    /// Write a `YYYY-MM-DD` date.
    fn write_date_only_value(&mut self, key: Option<&str>, value: Option<&NaiveDate>) -> Result<(), SerializationError> {
        let text = value.map(|v| v.format("%Y-%m-%d").to_string());
        self.write_string_value(key, text.as_deref())
    }

    /// Write an `HH:MM:SS[.fraction]` time.
    fn write_time_only_value(&mut self, key: Option<&str>, value: Option<&NaiveTime>) -> Result<(), SerializationError> {
        let text = value.map(|v| v.format("%H:%M:%S%.f").to_string());
        self.write_string_value(key, text.as_deref())
    }

    /// Write an ISO-8601 duration.
    fn write_iso_duration_value(
        &mut self,
        key: Option<&str>,
        value: Option<&IsoDuration>,
    ) -> Result<(), SerializationError> {
        let text = value.map(IsoDuration::to_string);
        self.write_string_value(key, text.as_deref())
    }

    /// Write bytes as standard base64.
    fn write_byte_array_value(&mut self, key: Option<&str>, value: Option<&[u8]>) -> Result<(), SerializationError> {
        let text = value.map(|v| STANDARD.encode(v));
        self.write_string_value(key, text.as_deref())
    }

    /// Write a schema-less value, recursing into arrays and objects.
    fn write_untyped_value(&mut self, key: Option<&str>, value: &UntypedNode) -> Result<(), SerializationError> {
        match value {
            UntypedNode::Null => self.write_null_value(key),
            UntypedNode::Boolean(v) => self.write_bool_value(key, Some(*v)),
            UntypedNode::Integer(v) => self.write_i64_value(key, Some(*v)),
            UntypedNode::UnsignedInteger(v) => self.write_u64_value(key, Some(*v)),
            UntypedNode::Double(v) => self.write_f64_value(key, Some(*v)),
            UntypedNode::String(v) => self.write_string_value(key, Some(v.as_str())),
            UntypedNode::Array(items) => {
                self.start_collection(key)?;
                for item in items {
                    self.write_untyped_value(None, item)?;
                }
                self.end_collection()
            }
            UntypedNode::Object(members) => {
                self.start_object(key)?;
                for (name, member) in members {
                    self.write_untyped_value(Some(name.as_str()), member)?;
                }
                self.end_object()
            }
        }
    }

    /// Write every additional-data entry as a member of the current object.
    fn write_additional_data(&mut self, data: Option<&AdditionalData>) -> Result<(), SerializationError> {
        for (name, value) in data.into_iter().flatten() {
            self.write_untyped_value(Some(name.as_str()), value)?;
        }
        Ok(())
    }
}

fn format_date_time(value: &DateTime<FixedOffset>) -> String {
    let mut text = value.format("%Y-%m-%dT%H:%M:%S").to_string();
    // Leap seconds carry an extra second in the nanosecond field.
    let nanos = value.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let digits = format!("{nanos:09}");
        text.push('.');
        text.push_str(digits.trim_end_matches('0'));
    }
    if value.offset().local_minus_utc() == 0 {
        text.push('Z');
    } else {
        text.push_str(&value.format("%:z").to_string());
    }
    text
}

impl<'a> dyn SerializationWriter + 'a {
    /// Write an enum constant or flag set as its wire string.
    pub fn write_enum_value<T: WireEnum>(&mut self, key: Option<&str>, value: Option<T>) -> Result<(), SerializationError> {
        let text = value.map(WireEnum::to_wire);
        self.write_string_value(key, text.as_deref())
    }

    /// Write a collection of enum wire strings.
    pub fn write_collection_of_enum_values<T: WireEnum>(
        &mut self,
        key: Option<&str>,
        values: Option<&[T]>,
    ) -> Result<(), SerializationError> {
        let Some(values) = values else {
            return Ok(());
        };
        self.start_collection(key)?;
        for value in values {
            self.write_string_value(None, Some(value.to_wire().as_str()))?;
        }
        self.end_collection()
    }

    /// Write a collection of primitives.
    pub fn write_collection_of_primitive_values<T: Primitive>(
        &mut self,
        key: Option<&str>,
        values: Option<&[T]>,
    ) -> Result<(), SerializationError> {
        let Some(values) = values else {
            return Ok(());
        };
        self.start_collection(key)?;
        for value in values {
            value.write(self, None)?;
        }
        self.end_collection()
    }

    /// Write a nested model through its own serializer.
    pub fn write_object_value<T: ?Sized + Parsable>(
        &mut self,
        key: Option<&str>,
        value: Option<&T>,
    ) -> Result<(), SerializationError> {
        let Some(value) = value else {
            return Ok(());
        };
        self.start_object(key)?;
        value.serialize(self)?;
        self.end_object()
    }

    /// Write a collection of nested models.
    pub fn write_collection_of_object_values<T: ?Sized + Parsable>(
        &mut self,
        key: Option<&str>,
        values: Option<&[Box<T>]>,
    ) -> Result<(), SerializationError> {
        let Some(values) = values else {
            return Ok(());
        };
        self.start_collection(key)?;
        for value in values {
            self.write_object_value(None, Some(&**value))?;
        }
        self.end_collection()
    }
}
