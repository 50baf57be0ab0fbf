// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Process-wide factory for the backing store of new model instances.

use std::sync::OnceLock;

use crate::store::{BackingStore, InMemoryBackingStore, StoreError};

/// Constructor for a fresh, empty backing store.
pub type BackingStoreFactory = fn() -> Box<dyn BackingStore>;

static FACTORY: OnceLock<BackingStoreFactory> = OnceLock::new();

fn in_memory() -> Box<dyn BackingStore> {
    Box::new(InMemoryBackingStore::new())
}

/// Install the factory used by every subsequent model constructor.
///
/// Can be called once per process, before any model is built with a
/// different store expectation.
pub fn install_backing_store_factory(factory: BackingStoreFactory) -> Result<(), StoreError> {
    FACTORY
        .set(factory)
        .map_err(|_| StoreError::FactoryAlreadyInstalled)
}

/// A fresh store from the installed factory, or an [`InMemoryBackingStore`].
pub fn new_backing_store() -> Box<dyn BackingStore> {
    FACTORY.get().map_or_else(in_memory, |factory| factory())
}
