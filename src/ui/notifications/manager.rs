// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the list of visible notifications. Every push renders
//! immediately; there is no visibility cap or queue. Expiry is tick-driven:
//! each notification leaves the list once its fade window has elapsed.

use super::notification::{Notification, NotificationId, Phase};
use std::collections::VecDeque;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking expiry timers.
    Tick,
}

/// Manages the visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification. It is displayed immediately.
    pub fn push(&mut self, notification: Notification) {
        self.visible.push_front(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. A miss is
    /// not an error; the notification may already have expired.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            return true;
        }
        false
    }

    /// Processes a tick event, removing notifications whose fade window has
    /// elapsed.
    ///
    /// Should be called periodically (e.g., every 100ms) while notifications
    /// are pending.
    pub fn tick(&mut self) {
        self.visible.retain(|n| n.phase() != Phase::Expired);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether any notifications are pending.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.visible.clear();
    }

    /// Rewinds every pending notification's creation timestamp.
    #[cfg(test)]
    pub(crate) fn backdate_all(&mut self, by: std::time::Duration) {
        for notification in &mut self.visible {
            notification.backdate(by);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn every_push_is_displayed_immediately() {
        let mut manager = Manager::new();
        for i in 0..10 {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), 10);
    }

    #[test]
    fn newest_notification_is_first() {
        let mut manager = Manager::new();
        manager.push(Notification::success("old"));
        let newest = Notification::success("new");
        let newest_id = newest.id();
        manager.push(newest);

        let first = manager.visible().next().expect("expected a notification");
        assert_eq!(first.id(), newest_id);
    }

    #[test]
    fn dismiss_removes_from_visible() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();

        manager.push(notification);
        assert_eq!(manager.visible_count(), 1);

        assert!(manager.dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn dismiss_twice_is_harmless() {
        let mut manager = Manager::new();
        let notification = Notification::error("test");
        let id = notification.id();
        manager.push(notification);

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::info("test"));
        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn tick_removes_expired_notifications_of_every_severity() {
        let mut manager = Manager::new();
        manager.push(Notification::success("a"));
        manager.push(Notification::error("b"));
        manager.push(Notification::info("c"));

        // Just past the visible window: still rendered, fading
        manager.backdate_all(Duration::from_millis(5100));
        manager.tick();
        assert_eq!(manager.visible_count(), 3);

        // Past the fade window: gone
        manager.backdate_all(Duration::from_millis(300));
        manager.tick();
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }
        manager.clear();
        assert!(!manager.has_notifications());
    }
}
