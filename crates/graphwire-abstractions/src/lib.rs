// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! graphwire-abstractions: the ports every generated graphwire model is written against.
//!
//! A model instance keeps its properties in a [`BackingStore`] (a keyed bag of
//! [`Value`]s) and exposes typed accessors on top of it. Wire formats plug in
//! through two object-safe ports:
//! - [`ParseNode`]: a read-only view of one node of a parsed payload.
//! - [`SerializationWriter`]: a sink for typed values, objects and collections.
//!
//! Polymorphic families resolve their concrete type through a
//! [`DiscriminatorRegistry`] keyed by the `@odata.type` tag, and assign fields
//! through per-type [`FieldDeserializers`] maps that inherit their base's
//! entries.

mod discriminator;
mod duration;
mod enums;
mod error;
mod factory_registry;
mod parsable;
mod parse_node;
mod store;
mod store_factory;
mod untyped;
mod value;
mod writer;

pub use discriminator::{discriminator_value, DiscriminatorRegistry, SubtypeConstructor, ODATA_TYPE};
pub use duration::{DurationParseError, IsoDuration};
pub use enums::WireEnum;
pub use error::{RegistryError, SerializationError};
pub use factory_registry::{
    normalize_content_type, ParseNodeFactory, SerializationRegistry, SerializationWriterFactory,
};
pub use parsable::{FieldDeserializer, FieldDeserializers, Parsable, ParsableFactory};
pub use parse_node::{NodeKind, ParseNode, Primitive};
pub use store::{BackingStore, InMemoryBackingStore, StoreError, StoreSubscriber, ADDITIONAL_DATA_KEY};
pub use store_factory::{install_backing_store_factory, new_backing_store, BackingStoreFactory};
pub use untyped::UntypedNode;
pub use value::{AdditionalData, EnumValue, ObjectValue, StoreValue, Value, ValueKind};
pub use writer::SerializationWriter;
