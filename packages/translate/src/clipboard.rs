use async_trait::async_trait;

use crate::error::ClipboardError;

/// System clipboard write capability.
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard for platforms that have none; every write fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

#[async_trait(?Send)]
impl Clipboard for NoClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
