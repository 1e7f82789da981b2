//! Transient Notifications
//!
//! Toast-style messages surfaced after validation failures, API errors
//! and successful operations. Each notice expires after a few seconds or
//! when dismissed; none of them is fatal.

use std::time::{Duration, Instant};

/// Visual flavor of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// One toast entry
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    created: Instant,
}

/// Queue of live notices, newest last
#[derive(Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

/// How long a notice stays on screen
const NOTICE_TTL: Duration = Duration::from_secs(6);

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) {
        self.items.push(Notice {
            kind,
            title: title.into(),
            message: message.into(),
            created: Instant::now(),
        });
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeKind::Success, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeKind::Error, title, message);
    }

    /// Drop expired notices; called once per frame
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.items
            .retain(|notice| now.duration_since(notice.created) < NOTICE_TTL);
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notices = Notices::new();
        assert!(notices.is_empty());

        notices.error("Erro no login", "Credenciais inválidas");
        notices.success("Campanha enviada!", "Disparada com sucesso.");
        assert_eq!(notices.iter().count(), 2);

        notices.dismiss(0);
        assert_eq!(notices.iter().count(), 1);
        assert_eq!(notices.iter().next().unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn test_dismiss_out_of_range_is_ignored() {
        let mut notices = Notices::new();
        notices.success("ok", "ok");
        notices.dismiss(5);
        assert_eq!(notices.iter().count(), 1);
    }

    #[test]
    fn test_prune_keeps_fresh_notices() {
        let mut notices = Notices::new();
        notices.success("ok", "ok");
        notices.prune();
        assert_eq!(notices.iter().count(), 1);
    }
}
