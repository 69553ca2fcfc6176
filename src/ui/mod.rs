//! GUI panels and application state.

pub mod account_panel;
pub mod app;
pub mod components;
pub mod login_panel;
pub mod staff_panel;

pub use app::App;
