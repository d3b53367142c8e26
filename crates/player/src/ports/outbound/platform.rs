//! Platform abstraction ports
//!
//! These traits isolate host-specific operations so that presentation code
//! stays platform-agnostic and testable with mock implementations.

/// Host document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the page/window title
    fn set_page_title(&self, title: &str);
}

/// Blocking user-facing dialogs
pub trait DialogProvider: Clone + 'static {
    /// Show a blocking alert with the given message
    fn alert(&self, message: &str);
}
