//! Unified Fichas client crate.
//!
//! This crate contains UI, application logic, and infrastructure adapters
//! for the character-sheet page of the tracker.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use state::Platform;
pub use ui::app;
pub use ui::Route;
