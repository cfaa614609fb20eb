// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (clipboard copies, request outcomes) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels and
//!   the fixed display lifecycle
//! - [`manager`] - `Manager` for the visible list and tick-driven expiry
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_notify::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-clipboard-copied"));
//!
//! // In your view function, render the overlay
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Every severity displays for 5s, then slides/fades out over 300ms
//! - No visibility cap: every push renders immediately
//! - Position: top-right corner, newest on top

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    phase_at, Notification, NotificationId, NotificationText, Phase, Severity, DISMISS_AFTER,
    FADE_OUT,
};
pub use toast::Toast;
