//! `window.confirm` adapter.

use platform_host::ConfirmService;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Confirmation prompts shown with the browser's native modal dialog.
pub struct WebConfirmService;

impl ConfirmService for WebConfirmService {
    fn confirm(&self, message: &str) -> bool {
        bridge::confirm(message)
    }
}
