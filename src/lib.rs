// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` is a toast-notification and user-feedback layer built with
//! the Iced GUI framework.
//!
//! It renders transient, auto-dismissing toasts, performs clipboard writes
//! with visual feedback, and translates request-outcome events (failed or
//! completed partial-update requests) into user-visible notifications.
//! Localization uses Fluent, and user preferences live in a small
//! `settings.toml`.

#![doc(html_root_url = "https://docs.rs/iced_notify/0.1.0")]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod exchange;
pub mod i18n;
pub mod ui;
