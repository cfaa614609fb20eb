// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications: small solid-color
//! cards stacked in the top-right corner. During the dismissal window the
//! card fades out; the manager removes it once the window has elapsed.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationText};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let background = notification.severity().color();
        let fade = notification.fade_progress();

        let message_text = match notification.text() {
            NotificationText::Key(key) => i18n.tr(key),
            NotificationText::Literal(literal) => literal.clone(),
        };

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(palette::WHITE, fade)),
            });

        let notification_id = notification.id();
        let dismiss_button = button(
            Text::new("\u{2715}")
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(palette::WHITE, fade)),
                }),
        )
        .on_press(Message::Dismiss(notification_id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        // Layout: [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .max_width(sizing::TOAST_WIDTH)
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(background, fade))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the top-right corner, stacked vertically with the
    /// newest on top.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Applies fade progress to a color's alpha channel.
fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * (1.0 - fade),
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(background: Color, fade: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(background, fade))),
        border: iced::Border {
            color: faded(background, fade),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(palette::BLACK, fade),
            ..shadow::MD
        },
        text_color: Some(faded(palette::WHITE, fade)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let overlay = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        }))
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::WHITE,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: overlay(opacity::OVERLAY_SUBTLE),
            text_color: palette::WHITE,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: overlay(opacity::OVERLAY_MEDIUM),
            text_color: palette::WHITE,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_container_style_uses_severity_background() {
        let style = toast_container_style(Severity::Success.color(), 0.0);

        match style.background {
            Some(iced::Background::Color(color)) => {
                assert_eq!(color, Severity::Success.color());
            }
            _ => panic!("expected a solid background color"),
        }
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn fade_progress_reduces_alpha() {
        let opaque = toast_container_style(Severity::Error.color(), 0.0);
        let fading = toast_container_style(Severity::Error.color(), 0.5);

        let alpha = |style: &container::Style| match style.background {
            Some(iced::Background::Color(color)) => color.a,
            _ => panic!("expected a solid background color"),
        };

        assert!(alpha(&fading) < alpha(&opaque));
        assert_eq!(alpha(&fading), 0.5);
    }

    #[test]
    fn full_fade_is_transparent() {
        let style = toast_container_style(Severity::Info.color(), 1.0);
        match style.background {
            Some(iced::Background::Color(color)) => assert_eq!(color.a, 0.0),
            _ => panic!("expected a solid background color"),
        }
    }
}
