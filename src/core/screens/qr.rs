//! QR code generator screen.

use std::path::PathBuf;

use log::{info, warn};

use crate::core::action::Key;
use crate::core::screens::Outcome;
use crate::core::services::{Clipboard, ClipboardError};
use crate::core::state::Screen;
use crate::tools::qr::QrImage;

#[derive(Debug, Clone, Default)]
pub struct QrState {
    pub input: String,
    /// Half-block rows of the last encoded payload. Empty until Enter.
    pub code: Vec<String>,
    pub copied: bool,
    /// Where the last PNG was written. Cleared by any edit.
    pub image_path: Option<PathBuf>,
    pub message: String,
    /// Set once the clipboard reports it cannot work here; sticky for the session.
    pub clipboard_disabled: bool,
    /// Destination for generated PNGs.
    pub output_path: PathBuf,
}

impl QrState {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            ..Default::default()
        }
    }

    /// Screen-entry reset.
    pub fn reset(&mut self) {
        self.input.clear();
        self.invalidate();
        self.message.clear();
    }

    fn invalidate(&mut self) {
        self.code.clear();
        self.copied = false;
        self.image_path = None;
    }

    pub fn handle(&mut self, key: Key, clipboard: &mut dyn Clipboard) -> Outcome {
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Enter => self.generate(),
            Key::Ctrl('d') => self.copy(clipboard),
            Key::Backspace => {
                if self.input.pop().is_some() {
                    self.invalidate();
                    self.message.clear();
                }
            }
            Key::Char(c) => {
                self.input.push(c);
                self.invalidate();
                self.message.clear();
            }
            _ => {}
        }
        Outcome::Stay
    }

    fn generate(&mut self) {
        if self.input.is_empty() {
            return;
        }
        let qr = match QrImage::encode(&self.input) {
            Ok(qr) => qr,
            Err(e) => {
                self.message = format!("❌ {e}");
                return;
            }
        };
        self.code = qr.to_text_rows();
        self.copied = false;
        match qr.write_png(&self.output_path) {
            Ok(()) => {
                info!("QR image written to {}", self.output_path.display());
                self.image_path = Some(self.output_path.clone());
                self.message.clear();
            }
            Err(e) => {
                warn!("QR image not written: {}", e);
                self.image_path = None;
                self.message = format!("❌ {e}");
            }
        }
    }

    fn copy(&mut self, clipboard: &mut dyn Clipboard) {
        if self.clipboard_disabled {
            return;
        }
        let Some(path) = self.image_path.as_deref() else {
            return;
        };
        match clipboard.copy_image(path) {
            Ok(()) => {
                self.copied = true;
                self.message.clear();
            }
            Err(e @ ClipboardError::Unsupported(_)) => {
                warn!("Disabling clipboard: {}", e);
                self.clipboard_disabled = true;
                self.message = format!("❌ {e}");
            }
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                self.message = format!("❌ {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeClipboard;

    fn typed(s: &str, dir: &std::path::Path) -> QrState {
        let mut qr = QrState::new(dir.join("qrcode.png"));
        let mut clipboard = FakeClipboard::default();
        for c in s.chars() {
            qr.handle(Key::Char(c), &mut clipboard);
        }
        qr
    }

    #[test]
    fn test_enter_generates_code_and_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut qr = typed("hello", dir.path());
        qr.handle(Key::Enter, &mut FakeClipboard::default());
        assert!(!qr.code.is_empty());
        assert_eq!(qr.image_path.as_deref(), Some(dir.path().join("qrcode.png").as_path()));
        assert!(dir.path().join("qrcode.png").exists());
    }

    #[test]
    fn test_enter_on_empty_input_does_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut qr = QrState::new(dir.path().join("qrcode.png"));
        qr.handle(Key::Enter, &mut FakeClipboard::default());
        assert!(qr.code.is_empty());
        assert!(qr.image_path.is_none());
    }

    #[test]
    fn test_any_edit_clears_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut qr = typed("abc", dir.path());
        let mut clipboard = FakeClipboard::default();
        qr.handle(Key::Enter, &mut clipboard);
        qr.handle(Key::Ctrl('d'), &mut clipboard);
        assert!(qr.copied);

        qr.handle(Key::Backspace, &mut clipboard);
        assert_eq!(qr.input, "ab");
        assert!(qr.code.is_empty());
        assert!(!qr.copied);
        assert!(qr.image_path.is_none());
    }

    #[test]
    fn test_copy_needs_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let mut qr = typed("abc", dir.path());
        let mut clipboard = FakeClipboard::default();
        qr.handle(Key::Ctrl('d'), &mut clipboard);
        assert!(!qr.copied);
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn test_unsupported_clipboard_disables_feature() {
        let dir = tempfile::tempdir().unwrap();
        let mut qr = typed("abc", dir.path());
        let mut clipboard = FakeClipboard::unsupported();
        qr.handle(Key::Enter, &mut clipboard);
        qr.handle(Key::Ctrl('d'), &mut clipboard);
        assert!(qr.clipboard_disabled);
        assert!(qr.message.contains("clipboard unavailable"));
        assert_eq!(clipboard.attempts, 1);

        // Reported once, then silently skipped
        qr.handle(Key::Ctrl('d'), &mut clipboard);
        assert_eq!(clipboard.attempts, 1);

        // Survives a screen-entry reset
        qr.reset();
        assert!(qr.clipboard_disabled);
    }

    #[test]
    fn test_failed_copy_can_be_retried() {
        let dir = tempfile::tempdir().unwrap();
        let mut qr = typed("abc", dir.path());
        let mut clipboard = FakeClipboard::failing();
        qr.handle(Key::Enter, &mut clipboard);
        qr.handle(Key::Ctrl('d'), &mut clipboard);
        assert!(!qr.clipboard_disabled);
        assert!(!qr.copied);
        assert!(qr.message.contains("clipboard copy failed"));

        qr.handle(Key::Ctrl('d'), &mut clipboard);
        assert_eq!(clipboard.attempts, 2);
    }

    #[test]
    fn test_reset_keeps_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut qr = typed("abc", dir.path());
        qr.reset();
        assert!(qr.input.is_empty());
        assert_eq!(qr.output_path, dir.path().join("qrcode.png"));
    }
}
