// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::reader::Session;
use crate::i18n::fluent::LocaleTable;
use crate::ui::reader::{self, ViewContext as ReaderViewContext};
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub locales: &'a LocaleTable,
    pub session: &'a Session,
}

/// Renders the form in the session's current locale.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    reader::view(ReaderViewContext {
        strings: ctx.locales.strings(ctx.session.locale()),
        session: ctx.session,
    })
    .map(Message::Reader)
}
