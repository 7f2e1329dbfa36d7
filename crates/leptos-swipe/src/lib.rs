//! Leptos Swipe Utilities
//!
//! Swipe-reveal rows and pull-to-refresh for Leptos using mouse events.
//! Uses movement threshold to distinguish click from swipe.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels before a gesture starts
const DRAG_THRESHOLD_PX: i32 = 5;

/// Horizontal drag at which the action affordance is fully revealed
pub const SCALE_FULL_AT_PX: f64 = 100.0;

/// Width of the revealed action region
pub const REVEAL_WIDTH_PX: f64 = 80.0;

/// Downward pull required to trigger a refresh
pub const PULL_TRIGGER_PX: f64 = 70.0;

/// Swipe-reveal state signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Row currently following the pointer
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    /// Row settled with its action region exposed
    pub open_id_read: ReadSignal<Option<String>>,
    pub open_id_write: WriteSignal<Option<String>>,
    pub swipe_just_ended_read: ReadSignal<bool>,
    pub swipe_just_ended_write: WriteSignal<bool>,
    /// Pending row id (mousedown but not yet swiping)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Content offset at mousedown (non-zero when the row was already open)
    pub base_x_read: ReadSignal<f64>,
    pub base_x_write: WriteSignal<f64>,
    /// Live content offset of the dragging row, clamped to the reveal range
    pub drag_x_read: ReadSignal<f64>,
    pub drag_x_write: WriteSignal<f64>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (open_id_read, open_id_write) = signal(None::<String>);
    let (swipe_just_ended_read, swipe_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (base_x_read, base_x_write) = signal(0f64);
    let (drag_x_read, drag_x_write) = signal(0f64);
    SwipeSignals {
        dragging_id_read,
        dragging_id_write,
        open_id_read,
        open_id_write,
        swipe_just_ended_read,
        swipe_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        base_x_read,
        base_x_write,
        drag_x_read,
        drag_x_write,
    }
}

/// Scale of the action affordance for a given content offset.
/// 0.0 at rest, 1.0 once the drag reaches -SCALE_FULL_AT_PX, clamped at
/// both ends so it neither inverts nor overshoots.
pub fn reveal_scale(drag_px: f64) -> f64 {
    (-drag_px / SCALE_FULL_AT_PX).clamp(0.0, 1.0)
}

/// Clamp a content offset to the reveal range [-REVEAL_WIDTH_PX, 0]
pub fn clamp_offset(offset_px: f64) -> f64 {
    offset_px.clamp(-REVEAL_WIDTH_PX, 0.0)
}

/// Whether a released row settles with its action region exposed
pub fn should_settle_open(drag_px: f64) -> bool {
    drag_px <= -REVEAL_WIDTH_PX / 2.0
}

/// Normalized pull-to-refresh progress for a downward drag
pub fn pull_progress(delta_px: f64) -> f64 {
    (delta_px / PULL_TRIGGER_PX).clamp(0.0, 1.0)
}

/// Close whichever row is currently open
pub fn close_open_row(swipe: &SwipeSignals) {
    swipe.open_id_write.set(None);
}

/// End swipe operation
fn end_swipe(swipe: &SwipeSignals) {
    swipe.dragging_id_write.set(None);
    swipe.pending_id_write.set(None);
    swipe.swipe_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = swipe.swipe_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for swipeable rows
/// Records pending swipe with start position and the row's resting offset
pub fn make_on_row_mousedown(swipe: SwipeSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // An open row starts from its exposed offset so it can swipe back shut
            let base = if swipe.open_id_read.get_untracked().as_deref() == Some(item_id.as_str()) {
                -REVEAL_WIDTH_PX
            } else {
                0.0
            };
            swipe.pending_id_write.set(Some(item_id.clone()));
            swipe.start_x_write.set(ev.client_x());
            swipe.start_y_write.set(ev.client_y());
            swipe.base_x_write.set(base);
            swipe.drag_x_write.set(base);
        }
    }
}

/// Bind global mousemove/mouseup handlers for swipe tracking and settling
pub fn bind_swipe_listeners(swipe: SwipeSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = swipe.pending_id_read.get_untracked();
        if pending.is_none() { return; }
        let dx = ev.client_x() - swipe.start_x_read.get_untracked();
        let dy = ev.client_y() - swipe.start_y_read.get_untracked();

        if swipe.dragging_id_read.get_untracked().is_none() {
            if dx.abs() > DRAG_THRESHOLD_PX && dx.abs() >= dy.abs() {
                // Swiping one row closes any other open row
                if swipe.open_id_read.get_untracked() != pending {
                    swipe.open_id_write.set(None);
                }
                swipe.dragging_id_write.set(pending);
            } else if dy.abs() > DRAG_THRESHOLD_PX {
                // Vertical movement is a scroll, not a swipe
                swipe.pending_id_write.set(None);
                return;
            }
        }

        if swipe.dragging_id_read.get_untracked().is_some() {
            let offset = swipe.base_x_read.get_untracked() + f64::from(dx);
            swipe.drag_x_write.set(clamp_offset(offset));
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = swipe.dragging_id_read.get_untracked();
        swipe.pending_id_write.set(None);

        // If we were actually swiping (not just clicking), settle the row
        if let Some(id) = dragging {
            if should_settle_open(swipe.drag_x_read.get_untracked()) {
                swipe.open_id_write.set(Some(id));
            } else {
                swipe.open_id_write.set(None);
            }
            end_swipe(&swipe);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

/// Pull-to-refresh state signals
#[derive(Clone, Copy)]
pub struct PullSignals {
    /// Mousedown landed while the list was scrolled to the top
    pub armed_read: ReadSignal<bool>,
    pub armed_write: WriteSignal<bool>,
    /// Passed the movement threshold, affordance visible
    pub pulling_read: ReadSignal<bool>,
    pub pulling_write: WriteSignal<bool>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Downward pull distance in pixels
    pub delta_y_read: ReadSignal<f64>,
    pub delta_y_write: WriteSignal<f64>,
}

pub fn create_pull_signals() -> PullSignals {
    let (armed_read, armed_write) = signal(false);
    let (pulling_read, pulling_write) = signal(false);
    let (start_y_read, start_y_write) = signal(0i32);
    let (delta_y_read, delta_y_write) = signal(0f64);
    PullSignals {
        armed_read,
        armed_write,
        pulling_read,
        pulling_write,
        start_y_read,
        start_y_write,
        delta_y_read,
        delta_y_write,
    }
}

/// Create mousedown handler for the list container
/// Arms the pull only when the list is scrolled to the top
pub fn make_on_list_mousedown(pull: PullSignals) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 { return; }
        let at_top = ev.current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.scroll_top() == 0)
            .unwrap_or(false);
        if at_top {
            pull.armed_write.set(true);
            pull.start_y_write.set(ev.client_y());
            pull.delta_y_write.set(0.0);
        }
    }
}

/// Bind global mousemove/mouseup handlers for pull tracking
/// Runs `on_trigger` when a pull is released past full progress
pub fn bind_pull_listeners<F>(pull: PullSignals, on_trigger: F)
where
    F: Fn() + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !pull.armed_read.get_untracked() { return; }
        let dy = ev.client_y() - pull.start_y_read.get_untracked();

        if !pull.pulling_read.get_untracked() && dy > DRAG_THRESHOLD_PX {
            pull.pulling_write.set(true);
        }
        if pull.pulling_read.get_untracked() {
            pull.delta_y_write.set(f64::from(dy.max(0)));
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let was_pulling = pull.pulling_read.get_untracked();
        let delta = pull.delta_y_read.get_untracked();

        pull.armed_write.set(false);
        pull.pulling_write.set(false);
        pull.delta_y_write.set(0.0);

        if was_pulling && pull_progress(delta) >= 1.0 {
            on_trigger();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_scale_endpoints() {
        assert_eq!(reveal_scale(0.0), 0.0);
        assert_eq!(reveal_scale(-SCALE_FULL_AT_PX), 1.0);
    }

    #[test]
    fn test_reveal_scale_clamps() {
        // Never inverts on a rightward drag
        assert_eq!(reveal_scale(40.0), 0.0);
        // Never overshoots past full reveal
        assert_eq!(reveal_scale(-250.0), 1.0);
    }

    #[test]
    fn test_reveal_scale_monotonic_over_reveal_range() {
        let mut last = reveal_scale(0.0);
        for step in 1..=10 {
            let scale = reveal_scale(-10.0 * f64::from(step));
            assert!(scale >= last);
            last = scale;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(-30.0), -30.0);
        assert_eq!(clamp_offset(-500.0), -REVEAL_WIDTH_PX);
        assert_eq!(clamp_offset(25.0), 0.0);
    }

    #[test]
    fn test_should_settle_open_flips_at_half_reveal() {
        assert!(!should_settle_open(0.0));
        assert!(!should_settle_open(-REVEAL_WIDTH_PX / 2.0 + 1.0));
        assert!(should_settle_open(-REVEAL_WIDTH_PX / 2.0));
        assert!(should_settle_open(-REVEAL_WIDTH_PX));
    }

    #[test]
    fn test_pull_progress_clamps() {
        assert_eq!(pull_progress(0.0), 0.0);
        assert_eq!(pull_progress(-20.0), 0.0);
        assert_eq!(pull_progress(PULL_TRIGGER_PX / 2.0), 0.5);
        assert_eq!(pull_progress(PULL_TRIGGER_PX), 1.0);
        assert_eq!(pull_progress(400.0), 1.0);
    }
}
