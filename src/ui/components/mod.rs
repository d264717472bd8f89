//! Reusable UI components

// Component architecture
pub mod contact_modal_component;
pub mod contact_table_component;
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;

// Component exports
pub use contact_modal_component::ContactModalComponent;
pub use contact_table_component::ContactTableComponent;
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
