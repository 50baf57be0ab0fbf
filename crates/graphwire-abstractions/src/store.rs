// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Backing store port and the in-memory adapter.
//!
//! Models never hold their properties in struct fields; every getter and
//! setter goes through a [`BackingStore`] keyed by property name. The store
//! also tracks which keys changed after initialization so a caller can send
//! only the delta back to a service.

use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::enums::WireEnum;
use crate::value::{AdditionalData, EnumValue, ObjectValue, StoreValue, Value, ValueKind};

/// Store key of the additional-data bucket.
pub const ADDITIONAL_DATA_KEY: &str = "additionalData";

/// Callback invoked on every `set` with `(key, previous, current)`.
pub type StoreSubscriber = Arc<dyn Fn(&str, Option<&Value>, Option<&Value>) + Send + Sync>;

/// Errors raised by backing stores and their typed accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Keys must contain at least one non-whitespace character.
    #[error("backing store keys must not be empty")]
    EmptyKey,
    /// The stored value cannot be read as the requested type.
    ///
    /// This signals schema drift or a bug in a typed accessor, never bad
    /// wire data.
    #[error("property `{key}` holds {found}, expected {expected}")]
    TypeMismatch {
        /// Property name.
        key: String,
        /// Type the accessor asked for.
        expected: &'static str,
        /// Type actually stored.
        found: &'static str,
    },
    /// A subscription with this id already exists.
    #[error("subscription `{0}` is already registered")]
    DuplicateSubscription(String),
    /// No subscription with this id exists.
    #[error("subscription `{0}` is not registered")]
    UnknownSubscription(String),
    /// The process-wide backing store factory was already installed.
    #[error("a backing store factory is already installed")]
    FactoryAlreadyInstalled,
}

impl StoreError {
    fn mismatch(key: &str, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            key: key.to_owned(),
            expected,
            found: found.type_label(),
        }
    }
}

/// Keyed property storage behind every model instance.
///
/// `get` returns `Ok(None)` for unknown keys; only invalid keys are errors.
pub trait BackingStore: fmt::Debug + Send + Sync {
    /// Value stored under `key`, if any (and if visible under the
    /// changed-values filter).
    fn get(&self, key: &str) -> Result<Option<&Value>, StoreError>;

    /// Store `value` under `key`; `None` records an explicit absence.
    fn set(&mut self, key: &str, value: Option<Value>) -> Result<(), StoreError>;

    /// Every visible entry in key order. Explicitly cleared keys appear with `None`.
    fn enumerate(&self) -> Vec<(&str, Option<&Value>)>;

    /// Keys that were changed to `None` after initialization completed.
    fn keys_changed_to_none(&self) -> Vec<&str>;

    /// Register `callback` under a generated id and return the id.
    fn subscribe(&mut self, callback: StoreSubscriber) -> String;

    /// Register `callback` under a caller-chosen id.
    fn subscribe_with_id(&mut self, id: &str, callback: StoreSubscriber) -> Result<(), StoreError>;

    /// Remove the subscription registered under `id`.
    fn unsubscribe(&mut self, id: &str) -> Result<(), StoreError>;

    /// Drop every entry. Subscriptions are kept.
    fn clear(&mut self);

    /// Whether writes are currently recorded as changes.
    fn initialization_completed(&self) -> bool;

    /// Toggle change recording. Every entry's changed flag becomes `!completed`.
    fn set_initialization_completed(&mut self, completed: bool);

    /// Whether reads only see changed entries.
    fn return_only_changed_values(&self) -> bool;

    /// Restrict (or stop restricting) reads to changed entries.
    fn set_return_only_changed_values(&mut self, only_changed: bool);
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    changed: bool,
    value: Option<Value>,
}

/// [`BackingStore`] kept in a `BTreeMap`, with change tracking and subscribers.
#[derive(Clone)]
pub struct InMemoryBackingStore {
    entries: BTreeMap<String, Entry>,
    subscribers: BTreeMap<String, StoreSubscriber>,
    initialization_completed: bool,
    return_only_changed_values: bool,
}

impl InMemoryBackingStore {
    /// Empty store with initialization completed and no read filter.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            subscribers: BTreeMap::new(),
            initialization_completed: true,
            return_only_changed_values: false,
        }
    }

    fn valid_key(key: &str) -> Result<&str, StoreError> {
        let key = key.trim();
        if key.is_empty() {
            Err(StoreError::EmptyKey)
        } else {
            Ok(key)
        }
    }

    fn visible(&self, entry: &Entry) -> bool {
        !self.return_only_changed_values || entry.changed
    }
}

impl Default for InMemoryBackingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryBackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBackingStore")
            .field("entries", &self.entries)
            .field("subscribers", &self.subscribers.len())
            .field("initialization_completed", &self.initialization_completed)
            .field("return_only_changed_values", &self.return_only_changed_values)
            .finish()
    }
}

impl BackingStore for InMemoryBackingStore {
    fn get(&self, key: &str) -> Result<Option<&Value>, StoreError> {
        let key = Self::valid_key(key)?;
        Ok(self
            .entries
            .get(key)
            .filter(|entry| self.visible(entry))
            .and_then(|entry| entry.value.as_ref()))
    }

    fn set(&mut self, key: &str, value: Option<Value>) -> Result<(), StoreError> {
        let key = Self::valid_key(key)?;
        let entry = Entry {
            changed: self.initialization_completed,
            value,
        };
        let previous = self.entries.insert(key.to_owned(), entry);
        if !self.subscribers.is_empty() {
            let current = self.entries.get(key).and_then(|entry| entry.value.as_ref());
            let previous = previous.as_ref().and_then(|entry| entry.value.as_ref());
            for subscriber in self.subscribers.values() {
                (**subscriber)(key, previous, current);
            }
        }
        Ok(())
    }

    fn enumerate(&self) -> Vec<(&str, Option<&Value>)> {
        self.entries
            .iter()
            .filter(|(_, entry)| self.visible(entry))
            .map(|(key, entry)| (key.as_str(), entry.value.as_ref()))
            .collect()
    }

    fn keys_changed_to_none(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.changed && entry.value.is_none())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    fn subscribe(&mut self, callback: StoreSubscriber) -> String {
        let id = Uuid::new_v4().to_string();
        self.subscribers.insert(id.clone(), callback);
        id
    }

    fn subscribe_with_id(&mut self, id: &str, callback: StoreSubscriber) -> Result<(), StoreError> {
        let id = Self::valid_key(id)?;
        if self.subscribers.contains_key(id) {
            return Err(StoreError::DuplicateSubscription(id.to_owned()));
        }
        self.subscribers.insert(id.to_owned(), callback);
        Ok(())
    }

    fn unsubscribe(&mut self, id: &str) -> Result<(), StoreError> {
        self.subscribers
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::UnknownSubscription(id.to_owned()))
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn initialization_completed(&self) -> bool {
        self.initialization_completed
    }

    fn set_initialization_completed(&mut self, completed: bool) {
        self.initialization_completed = completed;
        for entry in self.entries.values_mut() {
            entry.changed = !completed;
        }
    }

    fn return_only_changed_values(&self) -> bool {
        self.return_only_changed_values
    }

    fn set_return_only_changed_values(&mut self, only_changed: bool) {
        self.return_only_changed_values = only_changed;
    }
}

/// Typed accessors used by generated getters and setters.
///
/// Reads return `Ok(None)` for absent properties and
/// [`StoreError::TypeMismatch`] when the stored variant is not the one asked
/// for.
impl<'a> dyn BackingStore + 'a {
    /// Read a scalar or scalar collection.
    pub fn get_value<T: StoreValue>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key)? {
            None => Ok(None),
            Some(value) => T::from_value(value)
                .map(Some)
                .ok_or_else(|| StoreError::mismatch(key, T::KIND.name(), value)),
        }
    }

    /// Write a scalar or scalar collection; `None` clears the property.
    pub fn set_value<T: StoreValue>(&mut self, key: &str, value: Option<T>) -> Result<(), StoreError> {
        self.set(key, value.map(StoreValue::into_value))
    }

    /// Read an enum constant or flag set.
    pub fn get_enum<T: WireEnum>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key)? {
            None => Ok(None),
            Some(value) => decode_enum::<T>(value)
                .map(Some)
                .ok_or_else(|| StoreError::mismatch(key, T::TYPE_NAME, value)),
        }
    }

    /// Write an enum constant or flag set.
    pub fn set_enum<T: WireEnum>(&mut self, key: &str, value: Option<T>) -> Result<(), StoreError> {
        self.set(key, value.map(encode_enum))
    }

    /// Read a collection of enum constants.
    pub fn get_enum_collection<T: WireEnum>(&self, key: &str) -> Result<Option<Vec<T>>, StoreError> {
        match self.get(key)? {
            None => Ok(None),
            Some(value @ Value::Collection(items)) => items
                .iter()
                .map(decode_enum::<T>)
                .collect::<Option<Vec<_>>>()
                .map(Some)
                .ok_or_else(|| StoreError::mismatch(key, T::TYPE_NAME, value)),
            Some(other) => Err(StoreError::mismatch(key, ValueKind::Collection.name(), other)),
        }
    }

    /// Write a collection of enum constants.
    pub fn set_enum_collection<T: WireEnum>(&mut self, key: &str, value: Option<Vec<T>>) -> Result<(), StoreError> {
        self.set(
            key,
            value.map(|items| Value::Collection(items.into_iter().map(encode_enum).collect())),
        )
    }

    /// Borrow a nested model (or collection of models) stored as `T`.
    pub fn get_object<T: Any + Send + Sync>(&self, key: &str) -> Result<Option<&T>, StoreError> {
        match self.get(key)? {
            None => Ok(None),
            Some(value @ Value::Object(object)) => object
                .downcast_ref::<T>()
                .map(Some)
                .ok_or_else(|| StoreError::mismatch(key, type_name::<T>(), value)),
            Some(other) => Err(StoreError::mismatch(key, type_name::<T>(), other)),
        }
    }

    /// Store a nested model (or collection of models).
    pub fn set_object<T: Any + Send + Sync>(&mut self, key: &str, value: Option<T>) -> Result<(), StoreError> {
        self.set(key, value.map(|inner| Value::Object(ObjectValue::new(inner))))
    }

    /// Unmodeled wire fields captured during deserialization.
    pub fn additional_data(&self) -> Result<Option<AdditionalData>, StoreError> {
        self.get_value::<AdditionalData>(ADDITIONAL_DATA_KEY)
    }

    /// Replace the additional-data bucket.
    pub fn set_additional_data(&mut self, data: Option<AdditionalData>) -> Result<(), StoreError> {
        self.set_value(ADDITIONAL_DATA_KEY, data)
    }
}

fn encode_enum<T: WireEnum>(value: T) -> Value {
    Value::Enum(EnumValue {
        type_name: T::TYPE_NAME,
        bits: value.to_bits(),
    })
}

fn decode_enum<T: WireEnum>(value: &Value) -> Option<T> {
    match value {
        Value::Enum(stored) if stored.type_name == T::TYPE_NAME => T::from_bits(stored.bits),
        _ => None,
    }
}
