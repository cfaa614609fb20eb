// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification is visible for a fixed duration, slides out over a short
//! fade window, and is then removed. The lifecycle is a pure function of the
//! notification's age, so display timing is testable without a clock.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a notification stays fully visible.
pub const DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Length of the slide-out/fade transition that follows.
pub const FADE_OUT: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the toast's visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Something went wrong (red).
    Error,
    /// Informational message (blue).
    #[default]
    Info,
}

impl Severity {
    /// Maps a severity name to a level. Unrecognized names fall back to
    /// `Info` rather than failing; names arrive from annotations outside
    /// this crate's control.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Returns the toast background color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Info => palette::INFO_500,
        }
    }
}

/// Lifecycle phase of a notification, derived from its age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully visible.
    Visible,
    /// Sliding out and fading.
    Dismissing,
    /// Past the fade window; remove from the display list.
    Expired,
}

/// Computes the lifecycle phase for a given age.
#[must_use]
pub fn phase_at(age: Duration) -> Phase {
    if age < DISMISS_AFTER {
        Phase::Visible
    } else if age < DISMISS_AFTER + FADE_OUT {
        Phase::Dismissing
    } else {
        Phase::Expired
    }
}

/// The message a notification displays.
///
/// Fixed strings are i18n keys resolved at render time; text received from
/// outside (a server-supplied error detail or success annotation) is shown
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationText {
    Key(String),
    Literal(String),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: NotificationText,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and text.
    pub fn new(severity: Severity, text: NotificationText) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            text,
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification from an i18n key.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, NotificationText::Key(message_key.into()))
    }

    /// Creates an error notification from an i18n key.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, NotificationText::Key(message_key.into()))
    }

    /// Creates an info notification from an i18n key.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, NotificationText::Key(message_key.into()))
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &NotificationText {
        &self.text
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        phase_at(self.age())
    }

    /// Progress of the fade transition: 0.0 while visible, rising to 1.0
    /// over the fade window.
    #[must_use]
    pub fn fade_progress(&self) -> f32 {
        let age = self.age();
        if age <= DISMISS_AFTER {
            return 0.0;
        }
        let faded = age - DISMISS_AFTER;
        (faded.as_secs_f32() / FADE_OUT.as_secs_f32()).min(1.0)
    }

    /// Rewinds the creation timestamp, simulating an older notification.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.created_at = self
            .created_at
            .checked_sub(by)
            .expect("backdate underflowed the clock");
    }
}
