//! Platform integration: frontmost-application lookup and the macOS
//! pasteboard backend.

#[cfg(target_os = "macos")]
pub mod macos;

/// Frontmost-application lookup used to attribute captures.
pub trait SourceAppProvider: Send + Sync {
    fn active_app_name(&self) -> Option<String>;
}

/// Provider that never reports an application.
pub struct NoSourceApp;

impl SourceAppProvider for NoSourceApp {
    fn active_app_name(&self) -> Option<String> {
        None
    }
}
