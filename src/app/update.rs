// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::config::{ANIMATION_FIRINGS_PER_RUN, ANIMATION_TICK_INTERVAL_MS};
use super::Message;
use crate::domain::reader::{Session, TickOutcome};
use crate::ui::reader;
use iced::Task;

/// Applies one top-level message to the session.
pub fn update(session: &mut Session, message: Message) -> Task<Message> {
    match message {
        Message::Reader(reader_message) => handle_reader_message(session, reader_message),
        Message::Tick(_) => handle_tick(session),
    }
}

fn handle_reader_message(session: &mut Session, message: reader::Message) -> Task<Message> {
    match message {
        reader::Message::InputChanged(value) => {
            // The field is read-only while running; a late edit is dropped.
            if !session.is_running() {
                session.set_input(value);
            }
        }
        reader::Message::Submit => {
            if session.submit() {
                tracing::info!(
                    chars = session.input().chars().count(),
                    duration_ms = ANIMATION_TICK_INTERVAL_MS * u64::from(ANIMATION_FIRINGS_PER_RUN),
                    "reading started"
                );
            } else {
                tracing::debug!("submit ignored");
            }
        }
        reader::Message::LocaleSelected(locale) => {
            if locale != session.locale() {
                tracing::info!(
                    from = session.locale().code(),
                    to = locale.code(),
                    running = session.is_running(),
                    "language switched"
                );
                session.set_locale(locale);
            }
        }
    }
    Task::none()
}

fn handle_tick(session: &mut Session) -> Task<Message> {
    match session.tick() {
        TickOutcome::Idle => {
            tracing::trace!("stray tick while idle");
        }
        TickOutcome::Advanced(completion) => {
            tracing::trace!(completion = completion.value(), "reading advanced");
        }
        TickOutcome::Finished(_) => {
            tracing::info!("reading finished");
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::LocaleCode;
    use std::time::Instant;

    fn input(session: &mut Session, text: &str) {
        let _ = update(
            session,
            Message::Reader(reader::Message::InputChanged(text.to_string())),
        );
    }

    #[test]
    fn input_is_ignored_while_running() {
        let mut session = Session::new(LocaleCode::En);
        input(&mut session, "42");
        let _ = update(&mut session, Message::Reader(reader::Message::Submit));
        input(&mut session, "changed");
        assert_eq!(session.input(), "42");
    }

    #[test]
    fn tick_drives_session_to_result() {
        let mut session = Session::new(LocaleCode::En);
        input(&mut session, "hello");
        let _ = update(&mut session, Message::Reader(reader::Message::Submit));
        for _ in 0..ANIMATION_FIRINGS_PER_RUN {
            let _ = update(&mut session, Message::Tick(Instant::now()));
        }
        assert!(!session.is_running());
        assert_eq!(session.result(), Some("hello"));
    }

    #[test]
    fn locale_selection_applies_mid_run() {
        let mut session = Session::new(LocaleCode::En);
        input(&mut session, "x");
        let _ = update(&mut session, Message::Reader(reader::Message::Submit));
        let _ = update(&mut session, Message::Tick(Instant::now()));
        let _ = update(
            &mut session,
            Message::Reader(reader::Message::LocaleSelected(LocaleCode::Es)),
        );
        assert_eq!(session.locale(), LocaleCode::Es);
        assert!(session.is_running());
        assert_eq!(session.completion().value(), 10);
    }
}
