// SPDX-License-Identifier: MPL-2.0
//! Supported display languages.

use std::fmt;

/// One of the display languages the application ships strings for.
///
/// The set is closed: a table entry exists for every variant, so lookups
/// by `LocaleCode` never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocaleCode {
    /// English, the baseline every unmatched preference falls back to.
    #[default]
    En,
    Es,
    It,
}

impl LocaleCode {
    /// All supported codes, in picker order.
    pub const ALL: [LocaleCode; 3] = [LocaleCode::En, LocaleCode::Es, LocaleCode::It];

    /// Locale used when nothing better matches.
    pub const BASELINE: LocaleCode = LocaleCode::En;

    /// Two-letter primary language subtag.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Es => "es",
            LocaleCode::It => "it",
        }
    }

    /// Language name written in that language, as shown in the picker.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            LocaleCode::En => "English",
            LocaleCode::Es => "Español",
            LocaleCode::It => "Italiano",
        }
    }

    /// Matches a bare primary subtag (`"es"`, `"IT"`) against the supported set.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}
