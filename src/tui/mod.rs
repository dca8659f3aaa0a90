//! Terminal User Interface module
//!
//! The portal's interactive front end: Search, Summary, Export and Help views
//! over a single App state, driven by key presses.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
