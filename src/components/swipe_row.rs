//! Swipe Row Component
//!
//! Wraps one row's content in the swipe-reveal container: a right-aligned
//! delete action under a translating content layer.

use leptos::prelude::*;

use leptos_swipe::{close_open_row, make_on_row_mousedown, reveal_scale, REVEAL_WIDTH_PX};

use crate::context::ScreenContext;
use crate::models::ListItem;

#[component]
pub fn SwipeRow(
    item: ListItem,
    #[prop(optional_no_strip, into)] on_select: Option<Callback<ListItem>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<ScreenContext>().expect("ScreenContext should be provided");
    let swipe = ctx.swipe;
    let id = item.id.clone();

    let on_mousedown = make_on_row_mousedown(swipe, id.clone());

    let drag_id = id.clone();
    let is_dragging = move || swipe.dragging_id_read.get().as_deref() == Some(drag_id.as_str());
    let open_row_id = id.clone();
    let is_open = move || swipe.open_id_read.get().as_deref() == Some(open_row_id.as_str());

    // Content offset: live drag while swiping, stuck at the reveal width
    // while open, resting otherwise
    let offset = {
        let is_dragging = is_dragging.clone();
        move || {
            if is_dragging() {
                swipe.drag_x_read.get()
            } else if is_open() {
                -REVEAL_WIDTH_PX
            } else {
                0.0
            }
        }
    };
    let content_style = {
        let offset = offset.clone();
        move || format!("transform: translateX({}px);", offset())
    };
    let content_class = move || {
        if is_dragging() { "row-content dragging" } else { "row-content" }
    };

    // The delete affordance scales with drag distance, clamped at full reveal
    let icon_style = move || format!("transform: scale({:.3});", reveal_scale(offset()));

    let delete_id = id.clone();
    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.delete(&delete_id);
    };

    let select_item = item.clone();
    let on_content_click = move |_ev: web_sys::MouseEvent| {
        // A settling swipe is not a tap
        if swipe.swipe_just_ended_read.get_untracked() {
            return;
        }
        if swipe.open_id_read.get_untracked().is_some() {
            close_open_row(&swipe);
            return;
        }
        if let Some(on_select) = on_select {
            on_select.run(select_item.clone());
        }
    };

    view! {
        <div class="swipe-row">
            <div class="row-actions">
                <button class="row-delete-btn" on:click=on_delete>
                    <span class="row-delete-icon" style=icon_style>"🗑"</span>
                </button>
            </div>
            <div
                class=content_class
                style=content_style
                on:mousedown=on_mousedown
                on:click=on_content_click
            >
                {children()}
            </div>
        </div>
    }
}
