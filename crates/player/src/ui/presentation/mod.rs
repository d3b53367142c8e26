pub mod components;
pub mod services;
pub mod state;
pub mod theme;
pub mod views;

pub use services::{use_character_service, use_sheet_loader, Services, UiServices};
