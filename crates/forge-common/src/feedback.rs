use std::time::{Duration, Instant};

/// How long a feedback message stays visible.
pub const FEEDBACK_TTL: Duration = Duration::from_millis(2600);

/// Severity of a studio feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackLevel {
    Info,
    Error,
}

/// A short user-facing message shown after a studio action.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub level: FeedbackLevel,
    pub message: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Feedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(FeedbackLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(FeedbackLevel::Error, message)
    }

    fn with_level(level: FeedbackLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
            ttl: FEEDBACK_TTL,
        }
    }

    /// Returns `true` if this message has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// Single-slot feedback display.
///
/// Showing a message replaces whatever was there and restarts the timer,
/// so a burst of actions only ever leaves the latest message on screen.
#[derive(Debug, Default)]
pub struct FeedbackBoard {
    current: Option<Feedback>,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, feedback: Feedback) {
        self.current = Some(feedback);
    }

    /// The visible message, if it has not expired yet.
    pub fn current(&self) -> Option<&Feedback> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<&Feedback> {
        self.current.as_ref().filter(|f| !f.is_expired_at(now))
    }
}
