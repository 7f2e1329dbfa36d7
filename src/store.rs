//! Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::Write;
use reactive_stores::Store;

use crate::list;
use crate::models::ListItem;

/// Screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ScreenState {
    /// Seed collection, written once at construction and read on refresh
    pub seed: Vec<ListItem>,
    /// Items currently on screen, in display order
    pub items: Vec<ListItem>,
    /// True while a refresh delay is in flight
    pub refreshing: bool,
    /// Bumped per refresh request; stale timers observe a newer value
    pub refresh_epoch: u32,
}

/// Type alias for the store
pub type ScreenStore = Store<ScreenState>;

/// Construct a store whose items start as a copy of `seed`
pub fn screen_store_for(seed: Vec<ListItem>) -> ScreenStore {
    debug_assert!(list::has_unique_ids(&seed));
    Store::new(ScreenState {
        items: seed.clone(),
        seed,
        refreshing: false,
        refresh_epoch: 0,
    })
}

// ========================
// Store Helper Functions
// ========================

/// Remove an item from the store by id
pub fn store_remove_item(store: &ScreenStore, item_id: &str) {
    store.items().write().retain(|item| item.id != item_id);
}

/// Replace the store's items wholesale
pub fn store_replace_items(store: &ScreenStore, items: Vec<ListItem>) {
    *store.items().write() = items;
}
