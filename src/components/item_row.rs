//! Item Row Component
//!
//! One packing-list entry. Holds no state; toggle and delete go to the parent.

use leptos::prelude::*;

use crate::models::{Item, ItemId};

#[component]
pub fn ItemRow(
    item: Item,
    #[prop(into)] on_toggle: Callback<ItemId>,
    #[prop(into)] on_delete: Callback<ItemId>,
) -> impl IntoView {
    let id = item.id;
    let style = if item.packed {
        "text-decoration: line-through"
    } else {
        "text-decoration: none"
    };

    view! {
        <li style=style>
            <input
                type="checkbox"
                checked=item.packed
                on:change=move |_| on_toggle.run(id)
            />
            {format!("{} - {}", item.quantity, item.description)}
            <button on:click=move |_| on_delete.run(id)>"❌"</button>
        </li>
    }
}
