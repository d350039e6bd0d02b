//! TUI screen implementations.

pub mod event_create;
pub mod event_list;
pub mod help;

pub use event_create::{DropdownKind, EventCreateState, draw_event_create};
pub use event_list::{EventListState, draw_event_list};
pub use help::{HelpState, HelpTopic, draw_help};
