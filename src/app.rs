//! Swipelist Frontend App
//!
//! Gesture root plus the variant switcher over the list screen.

use leptos::prelude::*;

use leptos_swipe::{bind_pull_listeners, bind_swipe_listeners, create_pull_signals, create_swipe_signals};

use crate::components::{BasicRow, ListScreen, MenuRow};
use crate::models::ListItem;
use crate::seed::{basic_seed, menu_seed};

/// Which list variant is on screen
#[derive(Clone, Copy, PartialEq)]
enum ScreenVariant {
    Menu,
    Basic,
}

#[component]
pub fn App() -> impl IntoView {
    let (variant, set_variant) = signal(ScreenVariant::Menu);
    let (refresh_tick, set_refresh_tick) = signal(0u32);

    // Gesture root: one set of global listeners for every screen
    let swipe = create_swipe_signals();
    let pull = create_pull_signals();
    bind_swipe_listeners(swipe);
    bind_pull_listeners(pull, move || set_refresh_tick.update(|v| *v += 1));
    provide_context(swipe);
    provide_context(pull);

    // Tap action for the basic variant: surface the name in a blocking dialog
    let select_item = Callback::new(move |item: ListItem| {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(&item.name);
        }
    });

    view! {
        <div class="app-root">
            <nav class="variant-bar">
                <button
                    class=move || if variant.get() == ScreenVariant::Menu { "variant-btn active" } else { "variant-btn" }
                    on:click=move |_| set_variant.set(ScreenVariant::Menu)
                >
                    "Menu"
                </button>
                <button
                    class=move || if variant.get() == ScreenVariant::Basic { "variant-btn active" } else { "variant-btn" }
                    on:click=move |_| set_variant.set(ScreenVariant::Basic)
                >
                    "Items"
                </button>
            </nav>
            {move || match variant.get() {
                ScreenVariant::Menu => view! {
                    <ListScreen
                        seed=menu_seed()
                        title="Menu"
                        render_row=Callback::new(|item: ListItem| view! { <MenuRow item=item/> }.into_any())
                        refresh_tick=refresh_tick
                    />
                }.into_any(),
                ScreenVariant::Basic => view! {
                    <ListScreen
                        seed=basic_seed()
                        title="Items"
                        render_row=Callback::new(|item: ListItem| view! { <BasicRow item=item/> }.into_any())
                        refresh_tick=refresh_tick
                        on_select=select_item
                    />
                }.into_any(),
            }}
        </div>
    }
}
