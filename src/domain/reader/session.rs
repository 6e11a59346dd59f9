// SPDX-License-Identifier: MPL-2.0
//! Session state for one window.
//!
//! A [`Session`] is either idle or running. Submitting captures the current
//! input and starts a run; each [`Session::tick`] then advances completion by
//! one step until it is full, and the firing after that publishes the
//! captured text as the result.
//!
//! The session stores the phase *position* (completion), never a resolved
//! phase string: the caller looks the message up in whichever locale is
//! current, so switching languages mid-run can never show a stale string.

use super::newtypes::{phase_index, CompletionPercent};
use crate::domain::locale::LocaleCode;

/// Result of a single timer firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was idle; nothing changed.
    Idle,
    /// Completion advanced to the contained value.
    Advanced(CompletionPercent),
    /// The run ended and the contained text was published.
    Finished(String),
}

/// Text captured when a run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Run {
    captured: String,
}

/// Per-window form state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    input: String,
    locale: LocaleCode,
    run: Option<Run>,
    completion: CompletionPercent,
    result: Option<String>,
}

impl Session {
    /// Creates an idle session displaying `locale`.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input text. No validation or length limit applies.
    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    #[must_use]
    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Switches the display language. Allowed at any time, including mid-run.
    pub fn set_locale(&mut self, locale: LocaleCode) {
        self.locale = locale;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    #[must_use]
    pub fn completion(&self) -> CompletionPercent {
        self.completion
    }

    /// Last published result, if a run has completed since the last submit.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Submit is allowed only with non-empty input and no run in progress.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !self.is_running()
    }

    /// Starts a run with the current input.
    ///
    /// Clears any previous result and resets completion. Returns `false` and
    /// leaves the session untouched when [`can_submit`](Self::can_submit) is
    /// `false`.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.result = None;
        self.completion = CompletionPercent::ZERO;
        self.run = Some(Run {
            captured: self.input.clone(),
        });
        true
    }

    /// Handles one timer firing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.run.is_none() {
            return TickOutcome::Idle;
        }

        if self.completion.is_complete() {
            let captured = self
                .run
                .take()
                .map(|run| run.captured)
                .unwrap_or_default();
            self.result = Some(captured.clone());
            return TickOutcome::Finished(captured);
        }

        self.completion = self.completion.advance();
        TickOutcome::Advanced(self.completion)
    }

    /// Index of the phase message to show, given the current locale's
    /// sequence length.
    ///
    /// `None` while idle and before the first firing of a run.
    #[must_use]
    pub fn phase(&self, message_count: usize) -> Option<usize> {
        if !self.is_running() || self.completion == CompletionPercent::ZERO {
            return None;
        }
        phase_index(self.completion, message_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE_COUNT: usize = 7;

    fn session_with_input(text: &str) -> Session {
        let mut session = Session::new(LocaleCode::En);
        session.set_input(text.to_string());
        session
    }

    fn run_to_completion(session: &mut Session) -> (u32, String) {
        let mut firings = 0;
        loop {
            firings += 1;
            if let TickOutcome::Finished(text) = session.tick() {
                return (firings, text);
            }
            assert!(firings < 100, "run never terminated");
        }
    }

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = Session::new(LocaleCode::It);
        assert_eq!(session.locale(), LocaleCode::It);
        assert!(!session.is_running());
        assert_eq!(session.completion(), CompletionPercent::ZERO);
        assert_eq!(session.result(), None);
        assert_eq!(session.phase(MESSAGE_COUNT), None);
    }

    #[test]
    fn cannot_submit_empty_input() {
        let mut session = Session::new(LocaleCode::En);
        assert!(!session.can_submit());
        assert!(!session.submit());
        assert!(!session.is_running());
    }

    #[test]
    fn cannot_submit_while_running() {
        let mut session = session_with_input("hello");
        assert!(session.submit());
        assert!(!session.can_submit());
        assert!(!session.submit());
    }

    #[test]
    fn submit_disabled_iff_empty_or_running_across_a_run() {
        let mut session = session_with_input("x");
        let check = |s: &Session| {
            assert_eq!(s.can_submit(), !(s.input().is_empty() || s.is_running()));
        };
        check(&session);
        session.submit();
        check(&session);
        session.set_input(String::new());
        check(&session);
        while session.is_running() {
            session.tick();
            check(&session);
        }
        check(&session);
        session.set_input("again".to_string());
        check(&session);
    }

    #[test]
    fn run_takes_eleven_firings_and_echoes_input() {
        let mut session = session_with_input("42");
        session.submit();

        let (firings, text) = run_to_completion(&mut session);

        assert_eq!(firings, 11);
        assert_eq!(text, "42");
        assert_eq!(session.result(), Some("42"));
        assert!(!session.is_running());
        assert_eq!(session.phase(MESSAGE_COUNT), None);
    }

    #[test]
    fn completion_is_monotonic_in_steps_of_ten_and_ends_at_full() {
        let mut session = session_with_input("abc");
        session.submit();

        let mut previous = session.completion().value();
        let mut seen = Vec::new();
        while let TickOutcome::Advanced(completion) = session.tick() {
            assert_eq!(completion.value(), previous + 10);
            previous = completion.value();
            seen.push(previous);
        }

        assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(session.completion(), CompletionPercent::FULL);
    }

    #[test]
    fn phases_follow_completion_fraction() {
        let mut session = session_with_input("phase");
        session.submit();
        assert_eq!(session.phase(MESSAGE_COUNT), None);

        let mut phases = Vec::new();
        while let TickOutcome::Advanced(_) = session.tick() {
            phases.push(session.phase(MESSAGE_COUNT));
        }

        let expected: Vec<Option<usize>> = [0, 1, 2, 2, 3, 4, 4, 5, 6, 6]
            .into_iter()
            .map(Some)
            .collect();
        assert_eq!(phases, expected);
    }

    #[test]
    fn result_is_the_text_captured_at_submit() {
        let mut session = session_with_input("original");
        session.submit();
        session.tick();
        session.set_input("edited mid-run".to_string());

        let (_, text) = run_to_completion(&mut session);
        assert_eq!(text, "original");
    }

    #[test]
    fn later_edits_do_not_change_published_result() {
        let mut session = session_with_input("first");
        session.submit();
        run_to_completion(&mut session);

        session.set_input("second".to_string());
        assert_eq!(session.result(), Some("first"));
    }

    #[test]
    fn resubmit_clears_previous_result_and_resets_completion() {
        let mut session = session_with_input("first");
        session.submit();
        run_to_completion(&mut session);

        session.set_input("second".to_string());
        assert!(session.submit());
        assert_eq!(session.result(), None);
        assert_eq!(session.completion(), CompletionPercent::ZERO);

        let (_, text) = run_to_completion(&mut session);
        assert_eq!(text, "second");
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut session = session_with_input("idle");
        let before = session.clone();
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session, before);
    }

    #[test]
    fn locale_switch_mid_run_keeps_progress() {
        let mut session = session_with_input("hola");
        session.submit();
        session.tick();
        session.tick();
        session.set_locale(LocaleCode::Es);

        assert_eq!(session.locale(), LocaleCode::Es);
        assert!(session.is_running());
        assert_eq!(session.completion().value(), 20);
    }

    #[test]
    fn input_is_echoed_verbatim() {
        for text in ["  spaced  ", "ünïcödé ✨", "line\nbreak", "0"] {
            let mut session = session_with_input(text);
            session.submit();
            let (_, echoed) = run_to_completion(&mut session);
            assert_eq!(echoed, text);
        }
    }
}
