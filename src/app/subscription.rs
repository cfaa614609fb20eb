// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Polling interval for notification expiry. Fine enough to keep the
/// 300ms fade transition smooth.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the periodic tick subscription while notifications are pending.
///
/// The subscription is dropped when nothing is displayed so an idle window
/// schedules no timers.
pub fn create_tick_subscription(notifications_pending: bool) -> Subscription<Message> {
    if notifications_pending {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
