//! Unit converter widget
//!
//! - view_model.rs: session signal and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::UnitConverter;
pub use view_model::UnitConverterViewModel;
