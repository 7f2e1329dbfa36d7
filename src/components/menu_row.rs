//! Menu Row Component
//!
//! Food-menu row content: image, name, category, price, likes.

use leptos::prelude::*;

use crate::models::ListItem;

#[component]
pub fn MenuRow(item: ListItem) -> impl IntoView {
    let alt = item.name.clone();

    view! {
        <div class="menu-item">
            {item.image.map(|src| view! {
                <img class="menu-image" src=src alt=alt.clone()/>
            })}
            <div class="menu-text">
                <span class="menu-name">{item.name}</span>
                {item.category.map(|category| view! {
                    <span class="menu-category">{category}</span>
                })}
                {item.price.map(|price| view! {
                    <span class="menu-price">{price}</span>
                })}
                {item.likes.map(|likes| view! {
                    <span class="menu-likes">{format!("❤️ {} likes", likes)}</span>
                })}
            </div>
        </div>
    }
}
