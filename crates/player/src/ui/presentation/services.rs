//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components use `use_context` through the hooks below and never depend
//! on infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::loader::SheetLoader;
use crate::application::services::CharacterService;
use crate::ports::outbound::{ApiPort, CharacterStorePort};

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub character: Arc<CharacterService<A>>,
    pub loader: Arc<SheetLoader>,
}

impl<A: ApiPort> Services<A> {
    /// Create all services with the given ports
    pub fn new(api: A, store: Arc<dyn CharacterStorePort>) -> Self {
        Self {
            character: Arc::new(CharacterService::new(api)),
            loader: Arc::new(SheetLoader::new(store)),
        }
    }
}

/// Hook to access the CharacterService from context
pub fn use_character_service() -> Arc<CharacterService<Api>> {
    let services = use_context::<UiServices>();
    services.character.clone()
}

/// Hook to access the SheetLoader from context
pub fn use_sheet_loader() -> Arc<SheetLoader> {
    let services = use_context::<UiServices>();
    services.loader.clone()
}
