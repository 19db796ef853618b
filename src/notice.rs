//! Transient user-facing notices.
//!
//! Rejected operations surface a short message that dismisses itself after
//! a configurable duration. Only the newest notice is shown; posting a new
//! one replaces the old one and restarts the timer.

use std::time::Duration;
use web_time::Instant;

use crate::constants::DEFAULT_NOTICE_DURATION_MS;

/// A message with the moment it was posted.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub posted: Instant,
}

/// Holds at most one live notice.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    duration: Duration,
    current: Option<Notice>,
}

impl NoticeBoard {
    /// Default time a notice stays visible.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(DEFAULT_NOTICE_DURATION_MS);

    pub fn new() -> Self {
        Self::with_duration(Self::DEFAULT_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show `message` starting now.
    pub fn post(&mut self, message: impl Into<String>) {
        self.post_at(message, Instant::now());
    }

    pub fn post_at(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        log::trace!("Notice: {}", message);
        self.current = Some(Notice {
            message,
            posted: now,
        });
    }

    /// The live notice, if it has not yet expired.
    pub fn current(&self) -> Option<&str> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.posted) < self.duration)
            .map(|n| n.message.as_str())
    }

    /// Drop an expired notice. Returns true if one was removed.
    pub fn expire(&mut self) -> bool {
        self.expire_at(Instant::now())
    }

    pub fn expire_at(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.current_at(now).is_none() {
            self.current = None;
            return true;
        }
        false
    }

    /// Dismiss immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_duration() {
        assert_eq!(NoticeBoard::new().duration(), Duration::from_millis(2800));
    }

    #[test]
    fn test_notice_expires() {
        let mut board = NoticeBoard::with_duration(Duration::from_millis(100));
        let start = Instant::now();
        board.post_at("Lines cannot cross each other!", start);

        assert_eq!(
            board.current_at(start + Duration::from_millis(50)),
            Some("Lines cannot cross each other!")
        );
        assert_eq!(board.current_at(start + Duration::from_millis(100)), None);

        assert!(!board.expire_at(start + Duration::from_millis(10)));
        assert!(board.expire_at(start + Duration::from_millis(150)));
        assert!(!board.expire_at(start + Duration::from_millis(150)));
    }

    #[test]
    fn test_newer_notice_replaces_and_restarts() {
        let mut board = NoticeBoard::with_duration(Duration::from_millis(100));
        let start = Instant::now();
        board.post_at("first", start);
        board.post_at("second", start + Duration::from_millis(80));

        assert_eq!(
            board.current_at(start + Duration::from_millis(150)),
            Some("second")
        );
    }

    #[test]
    fn test_dismiss() {
        let mut board = NoticeBoard::new();
        board.post("gone");
        board.dismiss();
        assert_eq!(board.current(), None);
    }
}
