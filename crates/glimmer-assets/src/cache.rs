//! Memory of asset identities that have finished loading at least once.
//!
//! Entries are never removed: there is no eviction, expiry or persistence.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Mutex, OnceLock, PoisonError};

use rustc_hash::FxHashSet;

use crate::descriptor::AssetIdentity;

/// Capability handed to widgets so they can skip the placeholder for assets
/// that already loaded somewhere else.
pub trait LoadCache {
    fn has(&self, identity: &AssetIdentity) -> bool;

    /// Records `identity`. Inserting an existing identity is a no-op.
    fn insert(&self, identity: AssetIdentity);
}

/// Process-lifetime cache shared by every widget that is not given another one.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalLoadCache;

fn global_set() -> &'static Mutex<FxHashSet<AssetIdentity>> {
    static SET: OnceLock<Mutex<FxHashSet<AssetIdentity>>> = OnceLock::new();
    SET.get_or_init(|| Mutex::new(FxHashSet::default()))
}

impl LoadCache for GlobalLoadCache {
    fn has(&self, identity: &AssetIdentity) -> bool {
        global_set()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(identity)
    }

    fn insert(&self, identity: AssetIdentity) {
        let inserted = global_set()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(identity.clone());
        if inserted {
            log::debug!("cached {identity}");
        }
    }
}

/// Cache owned by a composition root; clones share the same set.
#[derive(Clone, Debug, Default)]
pub struct LocalLoadCache {
    entries: Rc<RefCell<FxHashSet<AssetIdentity>>>,
}

impl LocalLoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl LoadCache for LocalLoadCache {
    fn has(&self, identity: &AssetIdentity) -> bool {
        self.entries.borrow().contains(identity)
    }

    fn insert(&self, identity: AssetIdentity) {
        if self.entries.borrow_mut().insert(identity.clone()) {
            log::debug!("cached {identity}");
        }
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
