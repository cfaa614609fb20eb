// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every failure handled here ends in a best-effort notification; nothing
//! is retried or propagated further.

use super::{App, Message, SampleRequest};
use crate::clipboard;
use crate::exchange::{self, CompletedRequest, FailedResponse, Target, Transport};
use crate::ui::notifications::Notification;
use iced::Task;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::DraftChanged(draft) => {
                self.draft = draft;
                Task::none()
            }
            Message::CopyDraft => {
                Task::perform(clipboard::copy(self.draft.clone()), Message::ClipboardCopied)
            }
            Message::ClipboardCopied(Ok(())) => {
                self.notifications
                    .push(Notification::success("notification-clipboard-copied"));
                Task::none()
            }
            Message::ClipboardCopied(Err(err)) => {
                log::warn!("clipboard write failed: {err}");
                self.notifications
                    .push(Notification::error("notification-clipboard-error"));
                Task::none()
            }
            Message::RequestFailed(event) => {
                self.notifications
                    .push(exchange::failure_notification(&event));
                Task::none()
            }
            Message::RequestCompleted(event) => {
                if let Some(notification) = exchange::completion_notification(&event) {
                    self.notifications.push(notification);
                }
                Task::none()
            }
            Message::Simulate(sample) => {
                Task::batch(sample_messages(sample).into_iter().map(Task::done))
            }
        }
    }
}

/// Expands a canned sample into the event messages a real request would
/// produce. The completed event fires for every request; failures
/// additionally fire the failed event first.
fn sample_messages(sample: SampleRequest) -> Vec<Message> {
    match sample {
        SampleRequest::Save => {
            let transport = Transport {
                status: 204,
                status_text: Some("No Content".to_string()),
                body: None,
            };
            vec![Message::RequestCompleted(CompletedRequest {
                transport,
                target: Some(Target {
                    success_message: Some("Settings saved".to_string()),
                }),
            })]
        }
        SampleRequest::Validation => {
            let transport = Transport {
                status: 422,
                status_text: Some("Unprocessable Entity".to_string()),
                body: Some(r#"{"detail": "Invalid input"}"#.to_string()),
            };
            vec![
                Message::RequestFailed(FailedResponse {
                    transport: Some(transport.clone()),
                }),
                Message::RequestCompleted(CompletedRequest {
                    transport,
                    target: None,
                }),
            ]
        }
        SampleRequest::ServerError => {
            let transport = Transport {
                status: 500,
                status_text: Some("Internal Server Error".to_string()),
                body: Some("<html>Internal Server Error</html>".to_string()),
            };
            vec![
                Message::RequestFailed(FailedResponse {
                    transport: Some(transport.clone()),
                }),
                Message::RequestCompleted(CompletedRequest {
                    transport,
                    target: None,
                }),
            ]
        }
        SampleRequest::NotFound => {
            let transport = Transport {
                status: 404,
                status_text: Some("Not Found".to_string()),
                body: Some("Not Found".to_string()),
            };
            vec![
                Message::RequestFailed(FailedResponse {
                    transport: Some(transport.clone()),
                }),
                // Annotated target: the completion handler must still stay
                // silent for a non-success status.
                Message::RequestCompleted(CompletedRequest {
                    transport,
                    target: Some(Target {
                        success_message: Some("Settings saved".to_string()),
                    }),
                }),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::notifications::{NotificationText, Severity};
    use std::time::{Duration, Instant};

    fn first_notification(app: &App) -> &crate::ui::notifications::Notification {
        app.notifications
            .visible()
            .next()
            .expect("expected a notification")
    }

    #[test]
    fn clipboard_success_shows_exactly_one_success_toast() {
        let mut app = App::default();
        let _ = app.update(Message::ClipboardCopied(Ok(())));

        assert_eq!(app.notifications.visible_count(), 1);
        let notification = first_notification(&app);
        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(
            notification.text(),
            &NotificationText::Key("notification-clipboard-copied".to_string())
        );
    }

    #[test]
    fn clipboard_failure_shows_exactly_one_error_toast() {
        let mut app = App::default();
        let _ = app.update(Message::ClipboardCopied(Err(Error::Clipboard(
            "denied".to_string(),
        ))));

        assert_eq!(app.notifications.visible_count(), 1);
        let notification = first_notification(&app);
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(
            notification.text(),
            &NotificationText::Key("notification-clipboard-error".to_string())
        );
    }

    #[test]
    fn failed_request_shows_the_detail_message() {
        let mut app = App::default();
        let _ = app.update(Message::RequestFailed(FailedResponse {
            transport: Some(Transport {
                status: 422,
                status_text: Some("Unprocessable Entity".to_string()),
                body: Some(r#"{"detail": "KEK incorrect length"}"#.to_string()),
            }),
        }));

        let notification = first_notification(&app);
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(
            notification.text(),
            &NotificationText::Literal("KEK incorrect length".to_string())
        );
    }

    #[test]
    fn completed_request_with_annotation_shows_success() {
        let mut app = App::default();
        let _ = app.update(Message::RequestCompleted(CompletedRequest {
            transport: Transport {
                status: 204,
                status_text: None,
                body: None,
            },
            target: Some(Target {
                success_message: Some("Saved".to_string()),
            }),
        }));

        assert_eq!(app.notifications.visible_count(), 1);
        let notification = first_notification(&app);
        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(
            notification.text(),
            &NotificationText::Literal("Saved".to_string())
        );
    }

    #[test]
    fn completed_request_with_error_status_is_silent() {
        let mut app = App::default();
        let _ = app.update(Message::RequestCompleted(CompletedRequest {
            transport: Transport {
                status: 404,
                status_text: Some("Not Found".to_string()),
                body: None,
            },
            target: Some(Target {
                success_message: Some("Saved".to_string()),
            }),
        }));

        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn tick_expires_old_notifications() {
        let mut app = App::default();
        let _ = app.update(Message::ClipboardCopied(Ok(())));
        assert_eq!(app.notifications.visible_count(), 1);

        app.notifications.backdate_all(Duration::from_millis(5300));
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn draft_changes_are_stored() {
        let mut app = App::default();
        let _ = app.update(Message::DraftChanged("abc".to_string()));
        assert_eq!(app.draft, "abc");
    }

    #[test]
    fn save_sample_emits_only_the_completion_event() {
        let messages = sample_messages(SampleRequest::Save);
        assert_eq!(messages.len(), 1);
        assert!(matches!(messages[0], Message::RequestCompleted(_)));
    }

    #[test]
    fn failing_samples_emit_failure_then_completion() {
        for sample in [
            SampleRequest::Validation,
            SampleRequest::ServerError,
            SampleRequest::NotFound,
        ] {
            let messages = sample_messages(sample);
            assert_eq!(messages.len(), 2);
            assert!(matches!(messages[0], Message::RequestFailed(_)));
            assert!(matches!(messages[1], Message::RequestCompleted(_)));
        }
    }

    #[test]
    fn not_found_sample_produces_exactly_one_toast() {
        let mut app = App::default();
        for message in sample_messages(SampleRequest::NotFound) {
            let _ = app.update(message);
        }
        // The failed handler shows the status text; the annotated completion
        // stays silent.
        assert_eq!(app.notifications.visible_count(), 1);
        assert_eq!(first_notification(&app).severity(), Severity::Error);
    }
}
