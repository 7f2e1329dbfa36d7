//! Screen Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_swipe::{close_open_row, SwipeSignals};

use crate::list;
use crate::store::{store_remove_item, store_replace_items, ScreenStateStoreFields, ScreenStore};

/// Simulated network delay before a refresh lands
pub const REFRESH_DELAY_MS: u32 = 1_500;

/// Per-screen signals provided via context
#[derive(Clone, Copy)]
pub struct ScreenContext {
    pub store: ScreenStore,
    pub swipe: SwipeSignals,
}

impl ScreenContext {
    pub fn new(store: ScreenStore, swipe: SwipeSignals) -> Self {
        Self { store, swipe }
    }

    /// Remove one item by id. Missing ids are a no-op. Closes the open
    /// swipe row so the action region never outlives its row.
    pub fn delete(&self, item_id: &str) {
        web_sys::console::log_1(&format!("[LIST] Delete item {}", item_id).into());
        close_open_row(&self.swipe);
        store_remove_item(&self.store, item_id);
    }

    /// Start the simulated refresh. A request made while an earlier delay
    /// is still pending supersedes it: the stale timer wakes to a newer
    /// epoch and does nothing.
    pub fn request_refresh(&self) {
        let store = self.store;
        let token = {
            let refresh_epoch = store.refresh_epoch();
            let mut epoch = refresh_epoch.write();
            *epoch += 1;
            *epoch
        };
        *store.refreshing().write() = true;
        web_sys::console::log_1(&format!("[LIST] Refresh requested, token={}", token).into());

        spawn_local(async move {
            TimeoutFuture::new(REFRESH_DELAY_MS).await;
            let seed = store.seed().get_untracked();
            let epoch = store.refresh_epoch().get_untracked();
            match list::apply_refresh(&seed, epoch, token) {
                Some(items) => {
                    store_replace_items(&store, items);
                    *store.refreshing().write() = false;
                    web_sys::console::log_1(&format!("[LIST] Refresh complete, token={}", token).into());
                }
                None => {
                    web_sys::console::log_1(&format!("[LIST] Refresh superseded, token={}", token).into());
                }
            }
        });
    }
}
