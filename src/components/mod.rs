//! UI Components
//!
//! Leaf views of the packing list. State lives in `App`.

mod add_form;
mod item_row;
mod logo;
mod packing_list;
mod stats_footer;

pub use add_form::AddForm;
pub use item_row::ItemRow;
pub use logo::Logo;
pub use packing_list::PackingList;
pub use stats_footer::Stats;
