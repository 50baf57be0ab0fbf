// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Discriminator-based construction for polymorphic families.
//!
//! Each base type owns one [`DiscriminatorRegistry`] listing only its direct
//! subtypes. Dispatch is one hop: a tag that belongs to a grandchild is not
//! resolved by the grandparent's registry and falls back to the base.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::{RegistryError, SerializationError};
use crate::parse_node::ParseNode;

/// Wire name of the discriminator field.
pub const ODATA_TYPE: &str = "@odata.type";

/// Zero-argument constructor returning the family's capability type.
pub type SubtypeConstructor<T> = fn() -> Box<T>;

/// String value of the node's `@odata.type` member, if present and non-null.
pub fn discriminator_value(node: &dyn ParseNode) -> Result<Option<String>, SerializationError> {
    match node.get_child_node(ODATA_TYPE)? {
        Some(child) => child.get_string_value(),
        None => Ok(None),
    }
}

/// Tag-to-constructor table for one base type.
pub struct DiscriminatorRegistry<T: ?Sized> {
    base_tag: &'static str,
    fallback: SubtypeConstructor<T>,
    subtypes: BTreeMap<&'static str, SubtypeConstructor<T>>,
}

impl<T: ?Sized> DiscriminatorRegistry<T> {
    /// Registry for the base type tagged `base_tag`, constructed by `fallback`
    /// when no subtype matches.
    pub fn new(base_tag: &'static str, fallback: SubtypeConstructor<T>) -> Self {
        Self {
            base_tag,
            fallback,
            subtypes: BTreeMap::new(),
        }
    }

    /// Builder form of [`DiscriminatorRegistry::register`] for static tables.
    /// A duplicate tag keeps the first constructor and logs a warning.
    pub fn with_subtype(mut self, tag: &'static str, constructor: SubtypeConstructor<T>) -> Self {
        if let Err(err) = self.register(tag, constructor) {
            tracing::warn!(base = self.base_tag, %err, "ignoring duplicate subtype");
        }
        self
    }

    /// Add a direct subtype.
    pub fn register(&mut self, tag: &'static str, constructor: SubtypeConstructor<T>) -> Result<(), RegistryError> {
        if self.subtypes.contains_key(tag) {
            return Err(RegistryError::DuplicateDiscriminator(tag.to_owned()));
        }
        self.subtypes.insert(tag, constructor);
        Ok(())
    }

    /// Construct the type named by the node's discriminator, or the base
    /// type when it is missing or unknown. Only node read errors propagate.
    pub fn create(&self, node: &dyn ParseNode) -> Result<Box<T>, SerializationError> {
        let Some(tag) = discriminator_value(node)? else {
            return Ok((self.fallback)());
        };
        if let Some(constructor) = self.subtypes.get(tag.as_str()) {
            return Ok(constructor());
        }
        if tag != self.base_tag {
            debug!(base = self.base_tag, discriminator = %tag, "unknown discriminator, constructing base type");
        }
        Ok((self.fallback)())
    }

    /// Tag of the base type.
    pub const fn base_tag(&self) -> &'static str {
        self.base_tag
    }

    /// Registered subtype tags in sorted order.
    pub fn subtype_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.subtypes.keys().copied()
    }
}

impl<T: ?Sized> fmt::Debug for DiscriminatorRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscriminatorRegistry")
            .field("base_tag", &self.base_tag)
            .field("subtypes", &self.subtypes.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::parse_node::testing::MapNode;
    use crate::untyped::UntypedNode;

    trait Shape: fmt::Debug {
        fn name(&self) -> &'static str;
    }

    #[derive(Debug)]
    struct Plain;
    #[derive(Debug)]
    struct Circle;

    impl Shape for Plain {
        fn name(&self) -> &'static str {
            "plain"
        }
    }

    impl Shape for Circle {
        fn name(&self) -> &'static str {
            "circle"
        }
    }

    fn registry() -> DiscriminatorRegistry<dyn Shape> {
        DiscriminatorRegistry::<dyn Shape>::new("#test.shape", || Box::new(Plain))
            .with_subtype("#test.circle", || Box::new(Circle))
    }

    fn create(members: &[(&str, UntypedNode)]) -> Result<Box<dyn Shape>, SerializationError> {
        registry().create(&MapNode::object(members))
    }

    #[test]
    fn known_tag_builds_the_subtype() {
        assert_eq!(create(&[(ODATA_TYPE, "#test.circle".into())]).unwrap().name(), "circle");
    }

    #[test]
    fn missing_null_or_unknown_tag_builds_the_base() {
        assert_eq!(create(&[]).unwrap().name(), "plain");
        assert_eq!(create(&[(ODATA_TYPE, UntypedNode::Null)]).unwrap().name(), "plain");
        assert_eq!(create(&[(ODATA_TYPE, "#test.somethingUnknown".into())]).unwrap().name(), "plain");
        assert_eq!(create(&[(ODATA_TYPE, "#test.shape".into())]).unwrap().name(), "plain");
    }

    #[test]
    fn non_string_tag_is_a_read_error() {
        assert!(create(&[(ODATA_TYPE, 5_i64.into())]).is_err());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = registry();
        assert_eq!(
            registry.register("#test.circle", || Box::new(Plain)),
            Err(RegistryError::DuplicateDiscriminator("#test.circle".into()))
        );
        assert_eq!(registry.subtype_tags().collect::<Vec<_>>(), vec!["#test.circle"]);
        assert_eq!(registry.base_tag(), "#test.shape");
    }
}
