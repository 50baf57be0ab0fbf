// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! [`SerializationWriter`] that builds a `serde_json::Value`.

use graphwire_abstractions::{SerializationError, SerializationWriter, SerializationWriterFactory};
use serde_json::{Map, Number, Value};

use crate::CONTENT_TYPE;

#[derive(Debug)]
enum Frame {
    Object { key: Option<String>, members: Map<String, Value> },
    Collection { key: Option<String>, items: Vec<Value> },
}

/// JSON writer. Objects and collections are opened and closed explicitly;
/// the finished document is read back with [`SerializationWriter::content`]
/// or [`JsonSerializationWriter::into_value`].
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    stack: Vec<Frame>,
    root: Option<Value>,
    pretty: bool,
}

impl JsonSerializationWriter {
    /// Writer producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer producing indented output.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// The finished document, or `None` when nothing was written.
    pub fn into_value(self) -> Result<Option<Value>, SerializationError> {
        if !self.stack.is_empty() {
            return Err(SerializationError::WriterState("unclosed object or collection"));
        }
        Ok(self.root)
    }

    fn place(&mut self, key: Option<&str>, value: Value) -> Result<(), SerializationError> {
        match (self.stack.last_mut(), key) {
            (Some(Frame::Object { members, .. }), Some(key)) => {
                members.insert(key.to_owned(), value);
                Ok(())
            }
            (Some(Frame::Object { .. }), None) => Err(SerializationError::WriterState("object member without a key")),
            (Some(Frame::Collection { items, .. }), None) => {
                items.push(value);
                Ok(())
            }
            (Some(Frame::Collection { .. }), Some(_)) => {
                Err(SerializationError::WriterState("keyed value inside a collection"))
            }
            (None, Some(_)) => Err(SerializationError::WriterState("keyed value outside an object")),
            (None, None) => {
                if self.root.is_some() {
                    return Err(SerializationError::WriterState("document already has a root value"));
                }
                self.root = Some(value);
                Ok(())
            }
        }
    }

    fn place_optional<T>(
        &mut self,
        key: Option<&str>,
        value: Option<T>,
        into: impl FnOnce(T) -> Result<Value, SerializationError>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(value) => {
                let value = into(value)?;
                self.place(key, value)
            }
            None => Ok(()),
        }
    }
}

fn float(kind: &'static str, value: f64, display: String) -> Result<Value, SerializationError> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| SerializationError::invalid(kind, display, "non-finite numbers have no JSON form"))
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: Option<&str>) -> Result<(), SerializationError> {
        self.place_optional(key, value, |text| Ok(Value::String(text.to_owned())))
    }

    fn write_bool_value(&mut self, key: Option<&str>, value: Option<bool>) -> Result<(), SerializationError> {
        self.place_optional(key, value, |flag| Ok(Value::Bool(flag)))
    }

    fn write_i32_value(&mut self, key: Option<&str>, value: Option<i32>) -> Result<(), SerializationError> {
        self.place_optional(key, value, |number| Ok(Value::from(number)))
    }

    fn write_i64_value(&mut self, key: Option<&str>, value: Option<i64>) -> Result<(), SerializationError> {
        self.place_optional(key, value, |number| Ok(Value::from(number)))
    }

    fn write_u64_value(&mut self, key: Option<&str>, value: Option<u64>) -> Result<(), SerializationError> {
        self.place_optional(key, value, |number| Ok(Value::from(number)))
    }

    fn write_f32_value(&mut self, key: Option<&str>, value: Option<f32>) -> Result<(), SerializationError> {
        // Widen through the shortest decimal form so 0.1f32 stays 0.1.
        self.place_optional(key, value, |number| {
            let display = number.to_string();
            let wide = display.parse::<f64>().unwrap_or_else(|_| f64::from(number));
            float("float32", wide, display)
        })
    }

    fn write_f64_value(&mut self, key: Option<&str>, value: Option<f64>) -> Result<(), SerializationError> {
        self.place_optional(key, value, |number| float("float64", number, number.to_string()))
    }

    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.place(key, Value::Null)
    }

    fn start_object(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.stack.push(Frame::Object {
            key: key.map(str::to_owned),
            members: Map::new(),
        });
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), SerializationError> {
        match self.stack.pop() {
            Some(Frame::Object { key, members }) => self.place(key.as_deref(), Value::Object(members)),
            Some(other) => {
                self.stack.push(other);
                Err(SerializationError::WriterState("end_object while a collection is open"))
            }
            None => Err(SerializationError::WriterState("end_object without start_object")),
        }
    }

    fn start_collection(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.stack.push(Frame::Collection {
            key: key.map(str::to_owned),
            items: Vec::new(),
        });
        Ok(())
    }

    fn end_collection(&mut self) -> Result<(), SerializationError> {
        match self.stack.pop() {
            Some(Frame::Collection { key, items }) => self.place(key.as_deref(), Value::Array(items)),
            Some(other) => {
                self.stack.push(other);
                Err(SerializationError::WriterState("end_collection while an object is open"))
            }
            None => Err(SerializationError::WriterState("end_collection without start_collection")),
        }
    }

    fn content(&self) -> Result<Vec<u8>, SerializationError> {
        if !self.stack.is_empty() {
            return Err(SerializationError::WriterState("unclosed object or collection"));
        }
        let Some(root) = &self.root else {
            return Ok(Vec::new());
        };
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(root)
        } else {
            serde_json::to_vec(root)
        };
        encoded.map_err(|err| SerializationError::invalid("json", "<document>", err))
    }
}

/// [`SerializationWriterFactory`] for `application/json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializationWriterFactory {
    pretty: bool,
}

impl JsonSerializationWriterFactory {
    /// Factory whose writers indent their output.
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl SerializationWriterFactory for JsonSerializationWriterFactory {
    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    fn writer(&self) -> Box<dyn SerializationWriter> {
        if self.pretty {
            Box::new(JsonSerializationWriter::pretty())
        } else {
            Box::new(JsonSerializationWriter::new())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use graphwire_abstractions::UntypedNode;
    use serde_json::json;

    fn finish(writer: JsonSerializationWriter) -> Value {
        writer.into_value().unwrap().expect("root value")
    }

    #[test]
    fn members_keep_insertion_order_and_skip_absent_values() {
        let mut writer = JsonSerializationWriter::new();
        writer.start_object(None).unwrap();
        writer.write_string_value(Some("zeta"), Some("z")).unwrap();
        writer.write_i32_value(Some("alpha"), Some(1)).unwrap();
        writer.write_bool_value(Some("skipped"), None).unwrap();
        writer.write_null_value(Some("explicit")).unwrap();
        writer.end_object().unwrap();

        let text = String::from_utf8(writer.content().unwrap()).unwrap();
        assert_eq!(text, r#"{"zeta":"z","alpha":1,"explicit":null}"#);
    }

    #[test]
    fn nested_objects_and_collections() {
        let mut writer = JsonSerializationWriter::new();
        writer.start_object(None).unwrap();
        writer.start_collection(Some("items")).unwrap();
        writer.start_object(None).unwrap();
        writer.write_i64_value(Some("n"), Some(1)).unwrap();
        writer.end_object().unwrap();
        writer.write_string_value(None, Some("tail")).unwrap();
        writer.end_collection().unwrap();
        writer.start_collection(Some("empty")).unwrap();
        writer.end_collection().unwrap();
        writer.end_object().unwrap();

        assert_eq!(finish(writer), json!({ "items": [{ "n": 1 }, "tail"], "empty": [] }));
    }

    #[test]
    fn floats_reject_non_finite_values() {
        let mut writer = JsonSerializationWriter::new();
        writer.start_object(None).unwrap();
        writer.write_f32_value(Some("tenth"), Some(0.1)).unwrap();
        assert!(matches!(
            writer.write_f64_value(Some("nan"), Some(f64::NAN)),
            Err(SerializationError::InvalidValue { kind: "float64", .. })
        ));
        assert!(writer.write_f32_value(Some("inf"), Some(f32::INFINITY)).is_err());
        writer.end_object().unwrap();
        assert_eq!(finish(writer), json!({ "tenth": 0.1 }));
    }

    #[test]
    fn misuse_is_a_writer_state_error() {
        let mut writer = JsonSerializationWriter::new();
        assert!(writer.write_string_value(Some("k"), Some("v")).is_err());
        assert!(writer.end_object().is_err());

        writer.start_object(None).unwrap();
        assert!(writer.write_string_value(None, Some("v")).is_err());
        assert!(writer.end_collection().is_err());
        assert!(matches!(
            writer.content(),
            Err(SerializationError::WriterState("unclosed object or collection"))
        ));
        writer.end_object().unwrap();
        assert!(writer.start_object(None).and_then(|()| writer.end_object()).is_err());
    }

    #[test]
    fn untyped_values_write_through() {
        let mut writer = JsonSerializationWriter::new();
        let value = UntypedNode::Object(vec![
            ("list".into(), UntypedNode::Array(vec![1_i64.into(), UntypedNode::Null])),
            ("pi".into(), 3.5_f64.into()),
            ("max".into(), u64::MAX.into()),
        ]);
        writer.write_untyped_value(None, &value).unwrap();
        assert_eq!(finish(writer), json!({ "list": [1, null], "pi": 3.5, "max": u64::MAX }));
    }

    #[test]
    fn date_times_keep_their_fraction_digits() {
        let mut writer = JsonSerializationWriter::new();
        writer.start_object(None).unwrap();
        for (key, text) in [
            ("graph", "2024-06-01T08:00:00.1234567Z"),
            ("millis", "2024-06-01T08:00:00.5+02:00"),
            ("whole", "2024-06-01T08:00:00Z"),
        ] {
            let value = DateTime::parse_from_rfc3339(text).unwrap();
            writer.write_date_time_value(Some(key), Some(&value)).unwrap();
        }
        writer.end_object().unwrap();
        assert_eq!(
            finish(writer),
            json!({
                "graph": "2024-06-01T08:00:00.1234567Z",
                "millis": "2024-06-01T08:00:00.5+02:00",
                "whole": "2024-06-01T08:00:00Z"
            })
        );
    }

    #[test]
    fn factory_honours_pretty_flag() {
        let mut writer = JsonSerializationWriterFactory::pretty().writer();
        writer.start_object(None).unwrap();
        writer.write_bool_value(Some("on"), Some(true)).unwrap();
        writer.end_object().unwrap();
        let text = String::from_utf8(writer.content().unwrap()).unwrap();
        assert_eq!(text, "{\n  \"on\": true\n}");
        assert!(JsonSerializationWriterFactory::default().writer().content().unwrap().is_empty());
    }
}
