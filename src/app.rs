//! Travel List App
//!
//! Root component: owns the item store and wires the three mutations into
//! the child views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddForm, Logo, PackingList, Stats};
use crate::config::AppConfig;
use crate::ids::IdAllocator;
use crate::models::{Item, ItemId};
use crate::packing::PackingAction;
use crate::store::{dispatch, PackingState, PackingStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("[APP] starting with {} seed items", config.seed.len());

    // Fresh ids must stay above the seed ids
    let ids = StoredValue::new(IdAllocator::seeded_from(&config.seed));
    let store = Store::new(PackingState::new(config.seed));

    let items = Signal::derive(move || store.items().get());

    let on_add = Callback::new(move |item: Item| dispatch(&store, PackingAction::Add(item)));
    let on_toggle = Callback::new(move |id: ItemId| dispatch(&store, PackingAction::Toggle(id)));
    let on_delete = Callback::new(move |id: ItemId| dispatch(&store, PackingAction::Delete(id)));

    view! {
        <div class="app">
            <Logo title=config.title />
            <AddForm on_add=on_add ids=ids />
            <PackingList items=items on_toggle=on_toggle on_delete=on_delete />
            <Stats items=items />
        </div>
    }
}
