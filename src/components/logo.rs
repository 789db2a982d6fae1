//! Logo Component

use leptos::prelude::*;

/// Page heading
#[component]
pub fn Logo(#[prop(into)] title: String) -> impl IntoView {
    view! { <h1>{title}</h1> }
}
