//! Core UI building blocks.
//!
//! - [`actions`] - everything that can happen to the dashboard, from key presses
//!   to finished backend requests
//! - [`component`] - the trait each screen element implements
//! - [`event_handler`] - terminal event polling
//! - [`task_manager`] - background execution of backend requests
//!
//! Components turn key events into [`Action`]s, the [`TaskManager`] turns
//! backend results into [`Action`]s, and the app component applies both on the
//! UI loop.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
