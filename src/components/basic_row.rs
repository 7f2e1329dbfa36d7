//! Basic Row Component
//!
//! Generic row content: just the item name.

use leptos::prelude::*;

use crate::models::ListItem;

#[component]
pub fn BasicRow(item: ListItem) -> impl IntoView {
    view! {
        <div class="basic-item">
            <span class="basic-name">{item.name}</span>
        </div>
    }
}
