// SPDX-License-Identifier: MPL-2.0
//! Maps language tags onto the supported [`LocaleCode`] set.
//!
//! Tags come from the command line, the config file, or the host's language
//! preference. Only the primary subtag matters: `es-MX` selects Spanish.
//! Anything unrecognised falls back to [`LocaleCode::BASELINE`]; selection
//! never fails.

use crate::domain::locale::LocaleCode;
use unic_langid::LanguageIdentifier;

/// Extracts the lowercase primary language subtag from a BCP-47 or POSIX
/// style tag (`"es-MX"`, `"it_IT.UTF-8"`, `"en_US@euro"`).
///
/// Returns `None` for empty or unparsable input.
#[must_use]
pub fn primary_subtag(tag: &str) -> Option<String> {
    // POSIX locales carry an encoding and modifier that BCP-47 parsing rejects.
    let tag = tag.split(['.', '@']).next()?.trim();
    if tag.is_empty() {
        return None;
    }
    let langid: LanguageIdentifier = tag.parse().ok()?;
    let language = langid.language.as_str();
    if language == "und" {
        return None;
    }
    Some(language.to_ascii_lowercase())
}

/// Returns the supported locale for `tag`, if its primary subtag matches one.
#[must_use]
pub fn match_locale(tag: &str) -> Option<LocaleCode> {
    primary_subtag(tag).and_then(|code| LocaleCode::from_code(&code))
}

/// Locale for a single host preference: the match, or the baseline.
#[must_use]
pub fn initial_locale(preference: Option<&str>) -> LocaleCode {
    preference
        .and_then(match_locale)
        .unwrap_or(LocaleCode::BASELINE)
}

/// Picks the start-up locale from every available source.
///
/// Explicit choices are tried first, in order: command-line flag, config
/// file. The first one with a supported primary subtag wins; otherwise the
/// host preference decides, as in [`initial_locale`].
#[must_use]
pub fn resolve_locale(
    cli_lang: Option<&str>,
    config_lang: Option<&str>,
    host_preference: Option<&str>,
) -> LocaleCode {
    for (source, tag) in [("cli", cli_lang), ("config", config_lang)] {
        let Some(tag) = tag else { continue };
        if let Some(locale) = match_locale(tag) {
            tracing::debug!(source, tag, locale = locale.code(), "resolved locale");
            return locale;
        }
        tracing::debug!(source, tag, "unsupported language tag");
    }

    let locale = initial_locale(host_preference);
    tracing::debug!(
        source = "host",
        tag = host_preference.unwrap_or_default(),
        locale = locale.code(),
        "resolved locale"
    );
    locale
}
