// SPDX-License-Identifier: MPL-2.0
//! The mind-reading form: language picker, text field, submit action,
//! progress section and result block.
//!
//! Everything shown is derived from one [`Session`] and the strings of its
//! current locale, so a language switch re-renders the whole form in the
//! new locale in a single frame.

use crate::domain::locale::LocaleCode;
use crate::domain::reader::Session;
use crate::i18n::fluent::LocaleStrings;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, container, pick_list, progress_bar, text, text_input, Column, Text},
    Element, Length,
};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub strings: &'a LocaleStrings,
    pub session: &'a Session,
}

/// Messages emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    InputChanged(String),
    Submit,
    LocaleSelected(LocaleCode),
}

/// Render the form.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let picker = container(
        pick_list(
            LocaleCode::ALL,
            Some(ctx.session.locale()),
            Message::LocaleSelected,
        )
        .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH)),
    )
    .align_right(Length::Fill);

    let mut form = Column::new()
        .spacing(spacing::MD)
        .push(build_title(&ctx))
        .push(build_input(&ctx))
        .push(build_submit(&ctx));

    if let Some(progress) = build_progress(&ctx) {
        form = form.push(progress);
    }
    if let Some(result) = build_result(&ctx) {
        form = form.push(result);
    }

    let card = container(form)
        .padding(spacing::LG)
        .max_width(sizing::FORM_MAX_WIDTH)
        .style(styles::container::card);

    let page = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::MD)
        .push(picker)
        .push(container(card).center_x(Length::Fill));

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}

fn build_title<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    container(Text::new(ctx.strings.title.as_str()).size(typography::TITLE_LG))
        .center_x(Length::Fill)
        .into()
}

/// The field is read-only while a run is in progress; Enter submits under the
/// same precondition as the button.
fn build_input<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let running = ctx.session.is_running();

    text_input(&ctx.strings.input_placeholder, ctx.session.input())
        .on_input_maybe((!running).then_some(Message::InputChanged))
        .on_submit_maybe(ctx.session.can_submit().then_some(Message::Submit))
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill)
        .into()
}

fn build_submit<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = container(text(ctx.strings.submit_button.as_str()).size(typography::BODY))
        .center_x(Length::Fill);

    button(label)
        .on_press_maybe(ctx.session.can_submit().then_some(Message::Submit))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::submit)
        .into()
}

/// Progress bar and phase line, only while running.
fn build_progress<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.session.is_running() {
        return None;
    }

    let completion = ctx.session.completion().as_fraction();
    let phase = ctx
        .session
        .phase(ctx.strings.loading_messages.len())
        .map_or("", |index| ctx.strings.loading_message(index));

    let status = container(text(phase).size(typography::CAPTION)).center_x(Length::Fill);

    Some(
        Column::new()
            .spacing(spacing::SM)
            .push(progress_bar(0.0..=1.0, completion))
            .push(status)
            .into(),
    )
}

/// Result heading and the echoed text, only once a run has completed.
fn build_result<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let result = ctx.session.result()?;

    let heading = Text::new(ctx.strings.result_title.as_str()).size(typography::TITLE_MD);
    let echoed = container(text(result).size(typography::BODY_LG))
        .center_x(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::result_box);

    Some(
        Column::new()
            .spacing(spacing::XS)
            .push(heading)
            .push(echoed)
            .into(),
    )
}
