// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::exchange;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving notification expiry.
    Tick(Instant),
    /// The demo input text changed.
    DraftChanged(String),
    /// Copy the demo input to the clipboard.
    CopyDraft,
    /// Result of an asynchronous clipboard write.
    ClipboardCopied(Result<(), Error>),
    /// A partial-update request failed.
    RequestFailed(exchange::FailedResponse),
    /// A partial-update request completed, successfully or not.
    RequestCompleted(exchange::CompletedRequest),
    /// Replay a canned request outcome through the handlers.
    Simulate(SampleRequest),
}

/// Canned request outcomes offered by the demo screen. They stand in for
/// the external request machinery that would emit the real events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRequest {
    /// 204 with a success-message annotation on the target.
    Save,
    /// 422 with a JSON body carrying a `detail` field.
    Validation,
    /// 500 with an HTML body that fails to parse as JSON.
    ServerError,
    /// 404; the completion handler must stay silent.
    NotFound,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `cs`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_NOTIFY_CONFIG_DIR` environment
    /// variable.
    pub config_dir: Option<String>,
}
