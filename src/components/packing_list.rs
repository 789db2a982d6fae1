//! Packing List Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::models::{Item, ItemId};

/// Renders one row per item, in collection order
#[component]
pub fn PackingList(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] on_toggle: Callback<ItemId>,
    #[prop(into)] on_delete: Callback<ItemId>,
) -> impl IntoView {
    view! {
        <div class="list">
            <ul>
                <For
                    each=move || items.get()
                    // Rows are immutable, so a toggle must produce a new key
                    key=|item| (item.id, item.packed)
                    children=move |item| view! {
                        <ItemRow item=item on_toggle=on_toggle on_delete=on_delete />
                    }
                />
            </ul>
        </div>
    }
}
