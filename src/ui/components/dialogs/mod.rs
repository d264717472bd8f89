//! Dialog rendering functions

pub mod common;
pub mod contact_dialogs;
pub mod scroll_behavior;
pub mod system_dialogs;
