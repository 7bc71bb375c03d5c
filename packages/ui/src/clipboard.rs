use async_trait::async_trait;
use dioxus::prelude::*;
use translate::{Clipboard, ClipboardError};

/// Clipboard backed by `navigator.clipboard`, reached through `document::eval`
/// so it works in the browser and in desktop webviews alike.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvalClipboard;

#[async_trait(?Send)]
impl Clipboard for EvalClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let js = format!(
            r#"try {{
                await navigator.clipboard.writeText("{}");
                return true;
            }} catch(e) {{
                return false;
            }}"#,
            js_escape(text)
        );
        match document::eval(&js).await {
            Ok(v) if v.as_bool() == Some(true) => Ok(()),
            Ok(_) => Err(ClipboardError::Denied(
                "navigator.clipboard.writeText was rejected".to_string(),
            )),
            Err(_) => Err(ClipboardError::Unavailable),
        }
    }
}

pub(crate) fn js_escape(s: &str) -> String {
    // Escape for embedding into a double-quoted JS string literal.
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
