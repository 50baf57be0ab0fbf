// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The model contract and per-type field deserializer maps.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::error::SerializationError;
use crate::parse_node::ParseNode;
use crate::store::BackingStore;
use crate::writer::SerializationWriter;

/// A model that can be assembled from a [`ParseNode`] and written to a
/// [`SerializationWriter`].
///
/// Implementations keep their properties in a [`BackingStore`]; derived
/// types reach their root's store through composition.
pub trait Parsable: Any + fmt::Debug + Send + Sync {
    /// Assign the wire field `name` from `node`. Returns `false` when the
    /// type declares no such field.
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError>;

    /// Write every declared field, base fields first.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError>;

    /// Store holding this instance's properties.
    fn backing_store(&self) -> &dyn BackingStore;

    /// Mutable access to the property store.
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore;

    /// Whether undeclared wire fields are kept as additional data.
    fn accepts_additional_data(&self) -> bool {
        false
    }
}

impl dyn Parsable {
    /// Borrow the concrete model if it is a `T`.
    pub fn downcast_ref<T: Parsable>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// `true` when the concrete model is a `T`.
    pub fn is<T: Parsable>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }
}

/// Picks and constructs the concrete type for a node, usually by
/// discriminator. Fields are assigned afterwards by the caller.
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<Box<T>, SerializationError>;

/// Parse-and-assign closure for one wire field of `T`.
pub type FieldDeserializer<T> = Arc<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), SerializationError> + Send + Sync>;

/// Map from wire field name to its [`FieldDeserializer`].
///
/// A derived type starts from [`FieldDeserializers::inherit`] over its base's
/// map and inserts its own fields, so its map is always a superset of the
/// base's.
pub struct FieldDeserializers<T> {
    entries: BTreeMap<&'static str, FieldDeserializer<T>>,
}

impl<T: 'static> FieldDeserializers<T> {
    /// Empty map, for root types.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Every entry of `base`, lifted to `T` through `project` (which returns
    /// the embedded base value).
    pub fn inherit<B: 'static>(base: &FieldDeserializers<B>, project: fn(&mut T) -> &mut B) -> Self {
        let entries = base
            .entries
            .iter()
            .map(|(name, deserializer)| {
                let deserializer = Arc::clone(deserializer);
                let lifted: FieldDeserializer<T> =
                    Arc::new(move |target: &mut T, node: &dyn ParseNode| (*deserializer)(project(target), node));
                (*name, lifted)
            })
            .collect();
        Self { entries }
    }

    /// Add the deserializer for `name`.
    ///
    /// Replacing an existing entry is logged: derived types are expected to
    /// add fields, not shadow them.
    pub fn insert<F>(&mut self, name: &'static str, deserializer: F) -> &mut Self
    where
        F: Fn(&mut T, &dyn ParseNode) -> Result<(), SerializationError> + Send + Sync + 'static,
    {
        if self.entries.insert(name, Arc::new(deserializer)).is_some() {
            warn!(field = name, "field deserializer replaced an existing entry");
        }
        self
    }

    /// Run the deserializer for `name`, if any. Errors carry the field name.
    pub fn apply(&self, target: &mut T, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        match self.entries.get(name) {
            Some(deserializer) => {
                (**deserializer)(target, node).map_err(|err| err.in_field(name))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether `name` has a deserializer.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no field is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::parse_node::testing::MapNode;
    use crate::store::InMemoryBackingStore;
    use crate::untyped::UntypedNode;
    use crate::value::AdditionalData;

    #[derive(Debug, Default)]
    struct Base {
        store: InMemoryBackingStore,
    }

    #[derive(Debug, Default)]
    struct Derived {
        base: Base,
    }

    fn base_fields() -> FieldDeserializers<Base> {
        let mut fields = FieldDeserializers::new();
        fields.insert("id", |m: &mut Base, n| {
            let value = n.get_string_value()?;
            let store: &mut dyn BackingStore = &mut m.store;
            store.set_value("id", value)?;
            Ok(())
        });
        fields
    }

    fn derived_fields(base: &FieldDeserializers<Base>) -> FieldDeserializers<Derived> {
        let mut fields = FieldDeserializers::inherit(base, |m: &mut Derived| &mut m.base);
        fields.insert("count", |m: &mut Derived, n| {
            if let Some(value) = n.get_i32_value()? {
                let store: &mut dyn BackingStore = &mut m.base.store;
                store.set_value("count", Some(value))?;
            }
            Ok(())
        });
        fields
    }

    impl Parsable for Derived {
        fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
            let base = base_fields();
            derived_fields(&base).apply(self, name, node)
        }

        fn serialize(&self, _writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
            Ok(())
        }

        fn backing_store(&self) -> &dyn BackingStore {
            &self.base.store
        }

        fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
            &mut self.base.store
        }

        fn accepts_additional_data(&self) -> bool {
            true
        }
    }

    #[test]
    fn derived_map_is_a_superset() {
        let base = base_fields();
        let derived = derived_fields(&base);
        assert!(base.names().all(|name| derived.contains(name)));
        assert_eq!(derived.len(), base.len() + 1);
        assert_eq!(derived.names().collect::<Vec<_>>(), vec!["count", "id"]);
    }

    #[test]
    fn inherited_entries_reach_the_embedded_base() {
        let base = base_fields();
        let derived = derived_fields(&base);
        let mut model = Derived::default();
        let node = MapNode("42".into());
        assert!(derived.apply(&mut model, "id", &node).unwrap());
        assert!(!derived.apply(&mut model, "unknown", &node).unwrap());
        assert_eq!(
            model.backing_store().get_value::<String>("id").unwrap().as_deref(),
            Some("42")
        );
    }

    #[test]
    fn errors_name_the_field() {
        let base = base_fields();
        let derived = derived_fields(&base);
        let mut model = Derived::default();
        let err = derived
            .apply(&mut model, "count", &MapNode("many".into()))
            .unwrap_err();
        assert_eq!(err.field_path(), vec!["count"]);
    }

    #[test]
    fn object_assembly_routes_unknown_members_to_additional_data() {
        let node = MapNode::object(&[
            ("id", "7".into()),
            ("count", 3_i64.into()),
            ("extra", UntypedNode::Array(vec![true.into()])),
        ]);
        let node: &dyn ParseNode = &node;
        let model = node
            .get_object_value::<Derived>(|_| Ok(Box::new(Derived::default())))
            .unwrap()
            .expect("object node");

        let store = model.backing_store();
        assert_eq!(store.get_value::<i32>("count").unwrap(), Some(3));
        let mut expected = AdditionalData::new();
        expected.insert("extra".into(), UntypedNode::Array(vec![UntypedNode::Boolean(true)]));
        assert_eq!(store.additional_data().unwrap(), Some(expected));
        assert!(store.initialization_completed());
    }

    #[test]
    fn downcast_through_dyn_parsable() {
        let model: Box<dyn Parsable> = Box::new(Derived::default());
        assert!(model.is::<Derived>());
        assert!(model.downcast_ref::<Derived>().is_some());
    }
}
