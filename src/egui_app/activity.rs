//! Operator activity log.
//!
//! A bounded, cloneable ring of entries shown in the activity panel. Every
//! entry is also forwarded to `tracing`, so the same event reaches stderr and
//! `app.log`.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Debug => write!(f, "DEBUG"),
            ActivityLevel::Info => write!(f, "INFO"),
            ActivityLevel::Warn => write!(f, "WARN"),
            ActivityLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Network,
    Sync,
    Map,
    Export,
    Clipboard,
    UI,
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityCategory::Network => write!(f, "NET"),
            ActivityCategory::Sync => write!(f, "SYNC"),
            ActivityCategory::Map => write!(f, "MAP"),
            ActivityCategory::Export => write!(f, "EXPORT"),
            ActivityCategory::Clipboard => write!(f, "CLIP"),
            ActivityCategory::UI => write!(f, "UI"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub level: ActivityLevel,
    pub category: ActivityCategory,
    pub message: String,
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {}",
            self.timestamp, self.level, self.category, self.message
        )
    }
}

/// Shared handle; clones append to the same ring.
#[derive(Clone)]
pub struct ActivityLog {
    entries: Arc<Mutex<VecDeque<ActivityEntry>>>,
    max_entries: usize,
}

impl ActivityLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            max_entries: max_entries.max(1),
        }
    }

    pub fn log(&self, level: ActivityLevel, category: ActivityCategory, message: impl Into<String>) {
        let entry = ActivityEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level,
            category,
            message: message.into(),
        };

        let category = entry.category.to_string();
        match entry.level {
            ActivityLevel::Debug => tracing::debug!(category = %category, "{}", entry.message),
            ActivityLevel::Info => tracing::info!(category = %category, "{}", entry.message),
            ActivityLevel::Warn => tracing::warn!(category = %category, "{}", entry.message),
            ActivityLevel::Error => tracing::error!(category = %category, "{}", entry.message),
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);
            while entries.len() > self.max_entries {
                entries.pop_front();
            }
        }
    }

    pub fn debug(&self, category: ActivityCategory, msg: impl Into<String>) {
        self.log(ActivityLevel::Debug, category, msg);
    }

    pub fn info(&self, category: ActivityCategory, msg: impl Into<String>) {
        self.log(ActivityLevel::Info, category, msg);
    }

    pub fn warn(&self, category: ActivityCategory, msg: impl Into<String>) {
        self.log(ActivityLevel::Warn, category, msg);
    }

    pub fn error(&self, category: ActivityCategory, msg: impl Into<String>) {
        self.log(ActivityLevel::Error, category, msg);
    }

    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn entries_by_category(&self, category: ActivityCategory) -> Vec<ActivityEntry> {
        self.filtered(|entry| entry.category == category)
    }

    pub fn entries_by_level(&self, level: ActivityLevel) -> Vec<ActivityEntry> {
        self.filtered(|entry| entry.level == level)
    }

    fn filtered(&self, keep: impl Fn(&ActivityEntry) -> bool) -> Vec<ActivityEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().filter(|entry| keep(entry)).cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }
}
