//! Packing List Store
//!
//! Root state container built on `reactive_stores`. The item collection is
//! only ever replaced through `dispatch`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;
use crate::packing::{self, PackingAction};

/// Canonical application state
#[derive(Clone, Debug, Default, Store)]
pub struct PackingState {
    /// All items, in insertion order
    pub items: Vec<Item>,
}

impl PackingState {
    pub fn new(seed: Vec<Item>) -> Self {
        Self { items: seed }
    }
}

pub type PackingStore = Store<PackingState>;

/// Apply one action and swap in the resulting collection
pub fn dispatch(store: &PackingStore, action: PackingAction) {
    log::debug!("[STORE] {:?}", action);
    let next = packing::apply(&store.items().read_untracked(), &action);
    *store.items().write() = next;
}
