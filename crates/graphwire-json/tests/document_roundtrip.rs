// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::OnceLock;

use graphwire_abstractions::{
    BackingStore, FieldDeserializers, InMemoryBackingStore, Parsable, ParseNode, SerializationError,
    SerializationRegistry, SerializationWriter, UntypedNode, ADDITIONAL_DATA_KEY,
};
use graphwire_json::{from_slice, from_str, to_string_pretty, to_value, to_vec, JsonError, CONTENT_TYPE};
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Note {
    store: InMemoryBackingStore,
}

impl Note {
    fn fields() -> &'static FieldDeserializers<Note> {
        static FIELDS: OnceLock<FieldDeserializers<Note>> = OnceLock::new();
        FIELDS.get_or_init(|| {
            let mut fields = FieldDeserializers::new();
            fields
                .insert("id", |m: &mut Note, n| {
                    let store: &mut dyn BackingStore = &mut m.store;
                    store.set_value("id", n.get_uuid_value()?)?;
                    Ok(())
                })
                .insert("title", |m: &mut Note, n| {
                    let store: &mut dyn BackingStore = &mut m.store;
                    store.set_value("title", n.get_string_value()?)?;
                    Ok(())
                })
                .insert("stars", |m: &mut Note, n| {
                    let store: &mut dyn BackingStore = &mut m.store;
                    store.set_value("stars", n.get_i32_value()?)?;
                    Ok(())
                })
                .insert("tags", |m: &mut Note, n| {
                    let store: &mut dyn BackingStore = &mut m.store;
                    store.set_value("tags", n.get_collection_of_primitive_values::<String>()?)?;
                    Ok(())
                });
            fields
        })
    }

    fn create(_node: &dyn ParseNode) -> Result<Box<Note>, SerializationError> {
        Ok(Box::new(Note::default()))
    }
}

impl Parsable for Note {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::fields().apply(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        let store = self.backing_store();
        writer.write_uuid_value(Some("id"), store.get_value::<Uuid>("id")?.as_ref())?;
        writer.write_string_value(Some("title"), store.get_value::<String>("title")?.as_deref())?;
        writer.write_i32_value(Some("stars"), store.get_value::<i32>("stars")?)?;
        writer.write_collection_of_primitive_values(Some("tags"), store.get_value::<Vec<String>>("tags")?.as_deref())?;
        writer.write_additional_data(store.additional_data()?.as_ref())
    }

    fn backing_store(&self) -> &dyn BackingStore {
        &self.store
    }

    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut self.store
    }

    fn accepts_additional_data(&self) -> bool {
        true
    }
}

const NOTE: &str = r#"{"id":"6f9619ff-8b86-d011-b42d-00c04fc964ff","title":"groceries","stars":4,"tags":["home","weekly"],"pinned":{"at":"top"}}"#;

#[test]
fn document_round_trips_with_unknown_members() {
    let note = from_str(NOTE, Note::create).unwrap().expect("object");
    let store = note.backing_store();
    assert_eq!(store.get_value::<i32>("stars").unwrap(), Some(4));
    assert_eq!(
        store.additional_data().unwrap().and_then(|data| data.get("pinned").cloned()),
        Some(UntypedNode::Object(vec![("at".into(), "top".into())]))
    );
    assert!(store.get(ADDITIONAL_DATA_KEY).unwrap().is_some());

    let written = String::from_utf8(to_vec(&*note).unwrap()).unwrap();
    assert_eq!(written, NOTE);
}

#[test]
fn absent_and_empty_collections_stay_distinct() {
    let empty = from_str(r#"{"tags":[]}"#, Note::create).unwrap().expect("object");
    assert_eq!(to_value(&*empty).unwrap(), json!({ "tags": [] }));

    let absent = from_str("{}", Note::create).unwrap().expect("object");
    assert_eq!(to_value(&*absent).unwrap(), json!({}));
}

#[test]
fn top_level_null_is_absent() {
    assert!(from_slice(b"null", Note::create).unwrap().is_none());
}

#[test]
fn syntax_and_shape_errors_are_separate() {
    assert!(matches!(from_slice(b"{\"title\":", Note::create), Err(JsonError::Syntax(_))));

    let err = from_str(r#"{"stars":"many"}"#, Note::create).err().expect("type error");
    let JsonError::Serialization(err) = err else {
        panic!("expected a serialization error, got {err}");
    };
    assert_eq!(err.field_path(), vec!["stars"]);

    assert!(matches!(
        from_str("[1,2]", Note::create),
        Err(JsonError::Serialization(SerializationError::UnexpectedNodeType { .. }))
    ));
}

#[test]
fn pretty_output_indents() {
    let note = from_str(r#"{"title":"x"}"#, Note::create).unwrap().expect("object");
    assert_eq!(to_string_pretty(&*note).unwrap(), "{\n  \"title\": \"x\"\n}");
}

#[test]
fn registry_round_trip_through_content_type() {
    let mut registry = SerializationRegistry::new();
    graphwire_json::register(&mut registry).unwrap();
    assert!(graphwire_json::register(&mut registry).is_err());

    let root = registry.parse_node("application/json; charset=utf-8", NOTE.as_bytes()).unwrap();
    let note = root.get_object_value(Note::create).unwrap().expect("object");

    let mut writer = registry.writer(CONTENT_TYPE).unwrap();
    writer.write_object_value(None, Some(&*note)).unwrap();
    assert_eq!(String::from_utf8(writer.content().unwrap()).unwrap(), NOTE);
}
