pub mod button;
pub mod input;
pub mod select;

pub use button::Button;
pub use input::{EntryKind, Input};
pub use select::GroupedSelect;
