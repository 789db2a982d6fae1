//! Add Form Component
//!
//! Collects a description and quantity and hands a new item to the parent.

use leptos::prelude::*;

use crate::draft::ItemDraft;
use crate::ids::{now_ms, IdAllocator};
use crate::models::{parse_quantity, Item, ItemId, QUANTITY_CHOICES};

/// Form for adding items to the packing list
#[component]
pub fn AddForm(
    #[prop(into)] on_add: Callback<Item>,
    ids: StoredValue<IdAllocator>,
) -> impl IntoView {
    let (draft, set_draft) = signal(ItemDraft::default());

    let next_id = move || {
        ids.try_update_value(|ids| ids.allocate(now_ms()))
            .unwrap_or(ItemId(now_ms()))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match set_draft.try_update(|draft| draft.submit(next_id)) {
            Some(Ok(item)) => on_add.run(item),
            Some(Err(e)) => log::debug!("[FORM] submission ignored: {}", e),
            None => {}
        }
    };

    view! {
        <form class="add-form" on:submit=on_submit>
            <h3>"What do you need to pack?"</h3>

            <select
                prop:value=move || draft.get().quantity.to_string()
                on:change=move |ev| match parse_quantity(&event_target_value(&ev)) {
                    Ok(quantity) => set_draft.update(|draft| draft.quantity = quantity),
                    Err(e) => log::warn!("[FORM] {}", e),
                }
            >
                {QUANTITY_CHOICES.iter().map(|q| view! {
                    <option value=q.to_string()>{*q}</option>
                }).collect_view()}
            </select>

            <input
                type="text"
                placeholder="Item..."
                prop:value=move || draft.get().description
                on:input=move |ev| {
                    let description = event_target_value(&ev);
                    set_draft.update(|draft| draft.description = description);
                }
            />

            <button type="submit">"Add"</button>
        </form>
    }
}
