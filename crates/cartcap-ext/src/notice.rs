//! User-facing notice channel.
//!
//! A rejected mutation is surfaced to the shopper through this channel plus
//! the downgraded proceed flag, never as a Rust error.

use std::sync::Mutex;

/// Notice severity, mirroring the host's notice classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

impl NoticeKind {
    /// String representation used by host notice stores.
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }
}

/// Sink the host surfaces notices through (session flash store, API
/// response, ...).
pub trait NoticeSink: Send + Sync {
    fn push(&self, notice: Notice);
}

/// Collects notices in memory. Backs tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemoryNoticeSink {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNoticeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every collected notice, leaving the sink empty.
    pub fn drain(&self) -> Vec<Notice> {
        // Poisoned mutex means a panicking test thread; return nothing
        // instead of propagating the panic.
        match self.notices.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => Vec::new(),
        }
    }
}

impl NoticeSink for MemoryNoticeSink {
    fn push(&self, notice: Notice) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_sink() {
        let sink = MemoryNoticeSink::new();
        sink.push(Notice::error("nope"));
        sink.push(Notice::info("fyi"));

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].kind.as_str(), "error");
        assert!(sink.drain().is_empty());
    }
}
