//! Terminal user interface.
//!
//! [`AppComponent`] owns the [`DashboardState`](crate::dashboard::DashboardState)
//! and routes key presses and background results to it; [`run_app`] drives it
//! on a crossterm terminal.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
