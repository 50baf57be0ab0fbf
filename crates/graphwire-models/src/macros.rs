// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Boilerplate shared by every model type.

/// `Parsable` and `Default` for model types.
///
/// Each listed type must provide `new()`, `field_deserializers()` and
/// `write_fields(writer)`, and reach a backing store through `store()` /
/// `store_mut()` (directly or by deref to its base).
macro_rules! impl_parsable {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::graphwire_abstractions::Parsable for $ty {
            fn deserialize_field(
                &mut self,
                name: &str,
                node: &dyn ::graphwire_abstractions::ParseNode,
            ) -> ::core::result::Result<bool, ::graphwire_abstractions::SerializationError> {
                Self::field_deserializers().apply(self, name, node)
            }

            fn serialize(
                &self,
                writer: &mut dyn ::graphwire_abstractions::SerializationWriter,
            ) -> ::core::result::Result<(), ::graphwire_abstractions::SerializationError> {
                self.write_fields(writer)
            }

            fn backing_store(&self) -> &dyn ::graphwire_abstractions::BackingStore {
                self.store()
            }

            fn backing_store_mut(&mut self) -> &mut dyn ::graphwire_abstractions::BackingStore {
                self.store_mut()
            }

            fn accepts_additional_data(&self) -> bool {
                true
            }
        }

        impl ::core::default::Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    )+};
}

/// `Deref`/`DerefMut` from a derived model to the base it embeds as `base`.
macro_rules! derive_base {
    ($ty:ty => $base:ty) => {
        impl ::core::ops::Deref for $ty {
            type Target = $base;

            fn deref(&self) -> &$base {
                &self.base
            }
        }

        impl ::core::ops::DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut $base {
                &mut self.base
            }
        }
    };
}

/// Implement a family's capability trait for the base and its descendants
/// by handing out the embedded base through deref coercion.
macro_rules! impl_able {
    ($able:ident { $get:ident, $get_mut:ident } -> $base:ty : $($ty:ty),+ $(,)?) => {$(
        impl $able for $ty {
            fn $get(&self) -> &$base {
                self
            }

            fn $get_mut(&mut self) -> &mut $base {
                self
            }
        }
    )+};
}

/// Store plumbing for a root type that owns `backing_store` directly and
/// carries its own `@odata.type` property: accessors for the store, the
/// discriminator and the additional data, plus `tagged(tag)` for
/// constructors.
macro_rules! root_store {
    ($ty:ty) => {
        impl $ty {
            fn tagged(tag: &'static str) -> Self {
                let mut model = Self {
                    backing_store: ::graphwire_abstractions::new_backing_store(),
                };
                if let Err(err) = model.set_odata_type(Some(tag.to_owned())) {
                    ::tracing::warn!(%err, tag, "backing store rejected the default discriminator");
                }
                model
            }

            /// Property store of this instance.
            pub fn store(&self) -> &dyn ::graphwire_abstractions::BackingStore {
                self.backing_store.as_ref()
            }

            /// Mutable property store of this instance.
            pub fn store_mut(&mut self) -> &mut dyn ::graphwire_abstractions::BackingStore {
                self.backing_store.as_mut()
            }

            /// Replace the property store.
            pub fn set_store(&mut self, store: ::std::boxed::Box<dyn ::graphwire_abstractions::BackingStore>) {
                self.backing_store = store;
            }

            /// Discriminator naming the concrete type.
            pub fn odata_type(
                &self,
            ) -> ::core::result::Result<::core::option::Option<::std::string::String>, ::graphwire_abstractions::StoreError>
            {
                self.store().get_value($crate::entity::ODATA_TYPE_KEY)
            }

            /// Set the discriminator.
            pub fn set_odata_type(
                &mut self,
                value: ::core::option::Option<::std::string::String>,
            ) -> ::core::result::Result<(), ::graphwire_abstractions::StoreError> {
                self.store_mut().set_value($crate::entity::ODATA_TYPE_KEY, value)
            }

            /// Members of the payload that no declared field consumed.
            pub fn additional_data(
                &self,
            ) -> ::core::result::Result<
                ::core::option::Option<::graphwire_abstractions::AdditionalData>,
                ::graphwire_abstractions::StoreError,
            > {
                self.store().additional_data()
            }

            /// Replace the additional data.
            pub fn set_additional_data(
                &mut self,
                value: ::core::option::Option<::graphwire_abstractions::AdditionalData>,
            ) -> ::core::result::Result<(), ::graphwire_abstractions::StoreError> {
                self.store_mut().set_additional_data(value)
            }
        }
    };
}
