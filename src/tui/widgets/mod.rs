//! Reusable TUI widgets.

pub mod dropdown;
pub mod form;
pub mod status_bar;

pub use dropdown::{Dropdown, draw_dropdown};
pub use form::{FieldKind, Focus, FormField, draw_form};
pub use status_bar::{StatusBarContext, draw_status_bar};
