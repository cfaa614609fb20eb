// SPDX-License-Identifier: MPL-2.0
//! Request-outcome events and their translation into notifications.
//!
//! A partial-update request ends in one of two lifecycle events: a failed
//! response, or a completed response (which fires for every request, failed
//! ones included). Both are transient signals consumed exactly once; this
//! module turns them into at most one notification each.
//!
//! The failed-response message is extracted with a fallback chain: a JSON
//! body with a string `detail` field wins, an unparseable body falls back to
//! the transport's status text, and anything else falls back to a generic
//! localized message. Empty strings count as missing at every step.

use crate::ui::notifications::{Notification, NotificationText, Severity};

/// i18n key of the generic request-failure message.
pub const GENERIC_ERROR_KEY: &str = "notification-request-error";

/// Transport-level view of a finished request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transport {
    /// HTTP status code.
    pub status: u16,
    /// Status text reported by the transport, if any.
    pub status_text: Option<String>,
    /// Raw response body, if any.
    pub body: Option<String>,
}

/// A request that failed. The transport may be absent when the request
/// never produced a response at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailedResponse {
    pub transport: Option<Transport>,
}

/// The element updated by a request, carrying an optional success-message
/// annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub success_message: Option<String>,
}

/// A request that completed, successfully or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedRequest {
    pub transport: Transport,
    pub target: Option<Target>,
}

/// Extracts the user-facing message for a failed response.
pub fn failure_text(event: &FailedResponse) -> NotificationText {
    let generic = || NotificationText::Key(GENERIC_ERROR_KEY.to_string());

    let Some(transport) = &event.transport else {
        return generic();
    };
    let Some(body) = transport.body.as_deref().filter(|b| !b.is_empty()) else {
        return generic();
    };

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(parsed) => parsed
            .get("detail")
            .and_then(|detail| detail.as_str())
            .filter(|detail| !detail.is_empty())
            .map(|detail| NotificationText::Literal(detail.to_string()))
            .unwrap_or_else(generic),
        Err(_) => transport
            .status_text
            .clone()
            .filter(|text| !text.is_empty())
            .map(NotificationText::Literal)
            .unwrap_or_else(generic),
    }
}

/// Builds the error notification for a failed response.
pub fn failure_notification(event: &FailedResponse) -> Notification {
    Notification::new(Severity::Error, failure_text(event))
}

/// Builds the success notification for a completed request, if any.
///
/// Only requests that finished in the success range and updated a target
/// annotated with a success message produce one. Everything else is silent;
/// error display belongs to [`failure_notification`] alone.
pub fn completion_notification(event: &CompletedRequest) -> Option<Notification> {
    if !(200..300).contains(&event.transport.status) {
        return None;
    }
    let message = event.target.as_ref()?.success_message.clone()?;
    Some(Notification::new(
        Severity::Success,
        NotificationText::Literal(message),
    ))
}
