pub mod character_service;

pub use character_service::{CharacterService, HitPointsInput};
