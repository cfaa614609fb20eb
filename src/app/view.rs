// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo screen exercises every feedback path: a clipboard form and a
//! set of canned request outcomes. The toast overlay is stacked above it.

use super::{App, Message, SampleRequest};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Toast;
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let heading = Text::new(self.i18n.tr("demo-heading")).size(typography::TITLE_MD);

        let clipboard_form = Row::new()
            .spacing(spacing::SM)
            .push(
                text_input(&self.i18n.tr("demo-input-placeholder"), &self.draft)
                    .on_input(Message::DraftChanged)
                    .width(sizing::INPUT_WIDTH),
            )
            .push(
                button(Text::new(self.i18n.tr("demo-copy-button")))
                    .on_press(Message::CopyDraft)
                    .padding(spacing::XS),
            );

        let samples_heading =
            Text::new(self.i18n.tr("demo-sample-heading")).size(typography::BODY);

        let sample_button = |key: &str, sample: SampleRequest| {
            button(Text::new(self.i18n.tr(key)).size(typography::CAPTION))
                .on_press(Message::Simulate(sample))
                .padding(spacing::XS)
        };

        let samples = Row::new()
            .spacing(spacing::XS)
            .push(sample_button("demo-sample-save", SampleRequest::Save))
            .push(sample_button("demo-sample-validation", SampleRequest::Validation))
            .push(sample_button("demo-sample-server-error", SampleRequest::ServerError))
            .push(sample_button("demo-sample-not-found", SampleRequest::NotFound));

        let content = Container::new(
            Column::new()
                .spacing(spacing::LG)
                .push(heading)
                .push(clipboard_form)
                .push(
                    Column::new()
                        .spacing(spacing::XS)
                        .push(samples_heading)
                        .push(samples),
                ),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG);

        let overlay =
            Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        Stack::new().push(content).push(overlay).into()
    }
}
