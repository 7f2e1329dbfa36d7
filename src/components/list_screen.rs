//! List Screen Component
//!
//! The single parameterized screen: a seed collection, a row-content
//! strategy, and an optional tap action. Both app variants are instances
//! of this component.

use leptos::prelude::*;

use leptos_swipe::{close_open_row, make_on_list_mousedown, PullSignals, SwipeSignals};

use crate::components::{RefreshControl, SwipeRow};
use crate::context::ScreenContext;
use crate::models::ListItem;
use crate::store::{screen_store_for, ScreenStateStoreFields};

/// Swipeable, pull-to-refresh list over the given seed
#[component]
pub fn ListScreen(
    seed: Vec<ListItem>,
    title: &'static str,
    #[prop(into)] render_row: Callback<ListItem, AnyView>,
    /// Bumped by the gesture root when a pull is released past the trigger
    refresh_tick: ReadSignal<u32>,
    #[prop(optional, into)] on_select: Option<Callback<ListItem>>,
) -> impl IntoView {
    let swipe = use_context::<SwipeSignals>().expect("SwipeSignals should be provided");
    let pull = use_context::<PullSignals>().expect("PullSignals should be provided");

    let store = screen_store_for(seed);
    let ctx = ScreenContext::new(store, swipe);
    provide_context(ctx);

    // Each tick past the initial one is a refresh request
    Effect::new(move |prev: Option<u32>| {
        let tick = refresh_tick.get();
        if prev.is_some_and(|p| p != tick) {
            ctx.request_refresh();
        }
        tick
    });

    let on_list_mousedown = make_on_list_mousedown(pull);

    view! {
        <div class="list-screen">
            <h1 class="screen-title">{title}</h1>
            <RefreshControl/>
            <div
                class="item-list"
                on:mousedown=on_list_mousedown
                on:click=move |_| {
                    // Tapping outside a row closes the exposed action region
                    if swipe.open_id_read.get_untracked().is_some()
                        && !swipe.swipe_just_ended_read.get_untracked()
                    {
                        close_open_row(&swipe);
                    }
                }
            >
                <For
                    each=move || store.items().get()
                    key=|item| item.id.clone()
                    children=move |item| {
                        view! {
                            <SwipeRow item=item.clone() on_select=on_select>
                                {render_row.run(item)}
                            </SwipeRow>
                            <div class="separator"></div>
                        }
                    }
                />
            </div>
            <p class="item-count">{move || format!("{} items", store.items().get().len())}</p>
        </div>
    }
}
