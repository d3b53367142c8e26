//! Fichas Shared - Types shared between the sheet page and the tracker API
//!
//! This crate contains the wire-format contracts the character-sheet client
//! exchanges with the tracker backend:
//! - The `Character` snapshot as the record store serves it
//! - Partial-update request DTOs for the `PUT /character/{id}` endpoint
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **JSON-safe** - Every type round-trips through plain JSON

pub mod character;
pub mod requests;

pub use character::Character;
pub use requests::{UpdateDetailsRequest, UpdateHitPointsRequest};
