//! Stats Footer Component

use leptos::prelude::*;

use crate::models::Item;
use crate::stats::stats_message;

/// Packing progress, or a prompt when the list is empty
#[component]
pub fn Stats(#[prop(into)] items: Signal<Vec<Item>>) -> impl IntoView {
    view! {
        <footer class="stats">
            <em>{move || items.with(|items| stats_message(items))}</em>
        </footer>
    }
}
