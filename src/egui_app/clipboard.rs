//! Clipboard handles injected into the sync controller.

use eframe::egui;

pub trait Clipboard {
    fn set_text(&mut self, text: &str);
    fn text(&self) -> String;
}

/// Process-local clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: text.into(),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) {
        self.contents = text.to_string();
    }

    fn text(&self) -> String {
        self.contents.clone()
    }
}

/// Session clipboard that mirrors copies to the system clipboard via egui.
///
/// egui only delivers system clipboard contents as paste events into focused
/// text fields, so reads return the last value copied in this session.
pub struct EguiClipboard {
    ctx: egui::Context,
    session: MemoryClipboard,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            session: MemoryClipboard::new(),
        }
    }
}

impl Clipboard for EguiClipboard {
    fn set_text(&mut self, text: &str) {
        self.ctx.copy_text(text.to_string());
        self.session.set_text(text);
    }

    fn text(&self) -> String {
        self.session.text()
    }
}
