//! Refresh Control Component
//!
//! Pull affordance above the list. Its size and rotation follow pull
//! progress; while a refresh is in flight it renders indeterminate.

use leptos::prelude::*;

use leptos_swipe::{pull_progress, PullSignals};

use crate::context::ScreenContext;
use crate::store::ScreenStateStoreFields;

/// Control height when fully expanded
const CONTROL_HEIGHT_PX: f64 = 48.0;

#[component]
pub fn RefreshControl() -> impl IntoView {
    let ctx = use_context::<ScreenContext>().expect("ScreenContext should be provided");
    let pull = use_context::<PullSignals>().expect("PullSignals should be provided");

    let refreshing = move || ctx.store.refreshing().get();
    let progress = move || pull_progress(pull.delta_y_read.get());

    let control_class = move || {
        let mut c = String::from("refresh-control");
        if refreshing() {
            c.push_str(" refreshing");
        } else if pull.pulling_read.get() {
            c.push_str(" pulling");
        } else {
            c.push_str(" hidden");
        }
        c
    };
    let control_style = move || {
        if refreshing() {
            format!("height: {}px; opacity: 1;", CONTROL_HEIGHT_PX)
        } else {
            format!(
                "height: {:.0}px; opacity: {:.2};",
                progress() * CONTROL_HEIGHT_PX,
                progress()
            )
        }
    };
    // Winds up while pulling; the refreshing class takes over with a spin
    let spinner_style = move || {
        if refreshing() {
            String::new()
        } else {
            format!("transform: rotate({:.0}deg);", progress() * 270.0)
        }
    };

    view! {
        <div class=control_class style=control_style>
            <span class="refresh-spinner" style=spinner_style>"↻"</span>
        </div>
    }
}
