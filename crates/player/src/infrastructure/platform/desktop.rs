//! Desktop platform providers
//!
//! Concrete `DocumentProvider`/`DialogProvider` implementations for the
//! desktop webview shell. Both must only be called from inside the Dioxus
//! runtime (components, effects, event handlers).

use crate::ports::outbound::{DialogProvider, DocumentProvider};
use crate::state::Platform;

#[derive(Clone)]
pub struct DesktopDocument;

impl DocumentProvider for DesktopDocument {
    fn set_page_title(&self, title: &str) {
        dioxus_desktop::window().set_title(title);
    }
}

#[derive(Clone)]
pub struct DesktopDialog;

impl DialogProvider for DesktopDialog {
    fn alert(&self, message: &str) {
        // window.alert() blocks the webview the same way it does in a
        // browser, which is exactly the affordance this dialog models.
        let payload = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
        let _ = dioxus::document::eval(&format!("alert({payload});"));
    }
}

/// Build the desktop platform container injected into the UI context.
pub fn create_platform() -> Platform {
    Platform::new(DesktopDocument, DesktopDialog)
}
