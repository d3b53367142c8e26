//! Platform DI Container
//!
//! Aggregates the platform-specific provider implementations behind one
//! injectable type. The provider traits themselves are not object-safe
//! (they require `Clone + 'static`), so the container stores object-safe
//! `*Dyn` wrappers with blanket implementations.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure/platform/desktop.rs`
//! - Injected into Dioxus context by the runner
//! - Accessed in UI via `use_context::<Platform>()`

use std::sync::Arc;

use crate::ports::outbound::{DialogProvider, DocumentProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    document: Arc<dyn DocumentProviderDyn>,
    dialog: Arc<dyn DialogProviderDyn>,
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait DialogProviderDyn: Send + Sync {
    fn alert(&self, message: &str);
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: DialogProvider + Send + Sync> DialogProviderDyn for T {
    fn alert(&self, message: &str) {
        DialogProvider::alert(self, message)
    }
}

impl Platform {
    pub fn new(
        document: impl DocumentProvider + Send + Sync,
        dialog: impl DialogProvider + Send + Sync,
    ) -> Self {
        Self {
            document: Arc::new(document),
            dialog: Arc::new(dialog),
        }
    }

    /// Set the page/window title
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title);
    }

    /// Show a blocking user-facing alert
    pub fn alert(&self, message: &str) {
        self.dialog.alert(message);
    }
}
