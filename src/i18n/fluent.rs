// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed locale table.
//!
//! Each supported locale has one `<code>.ftl` resource. The resources are
//! embedded at compile time and may be overridden from a directory at start
//! up. Every resource is resolved into plain strings exactly once and
//! validated; after that, lookups are infallible.

use crate::domain::locale::LocaleCode;
use crate::error::{Error, LocaleError, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::io;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub const KEY_TITLE: &str = "title";
pub const KEY_INPUT_PLACEHOLDER: &str = "input-placeholder";
pub const KEY_SUBMIT_BUTTON: &str = "submit-button";
pub const KEY_RESULT_TITLE: &str = "result-title";
/// Phase messages are numbered from 1: `loading-message-1`, `loading-message-2`, ...
pub const KEY_LOADING_MESSAGE_PREFIX: &str = "loading-message-";

/// Fully resolved display strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStrings {
    pub title: String,
    pub input_placeholder: String,
    pub submit_button: String,
    pub result_title: String,
    pub loading_messages: Vec<String>,
}

impl LocaleStrings {
    /// Parses and validates a Fluent source for `locale`.
    pub fn from_ftl(locale: LocaleCode, source: String) -> std::result::Result<Self, LocaleError> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| LocaleError::Parse {
            locale: locale.code().to_string(),
            details: format!("{:?}", errors),
        })?;

        let langid: LanguageIdentifier = locale
            .code()
            .parse()
            .map_err(|_| LocaleError::Parse {
                locale: locale.code().to_string(),
                details: "invalid language identifier".to_string(),
            })?;
        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| LocaleError::Parse {
                locale: locale.code().to_string(),
                details: format!("{:?}", errors),
            })?;

        let required = |key: &'static str| {
            format_message(&bundle, key).ok_or_else(|| LocaleError::MissingKey {
                locale: locale.code().to_string(),
                key,
            })
        };

        let title = required(KEY_TITLE)?;
        let input_placeholder = required(KEY_INPUT_PLACEHOLDER)?;
        let submit_button = required(KEY_SUBMIT_BUTTON)?;
        let result_title = required(KEY_RESULT_TITLE)?;

        let loading_messages: Vec<String> = (1..)
            .map(|n| format_message(&bundle, &format!("{KEY_LOADING_MESSAGE_PREFIX}{n}")))
            .take_while(Option::is_some)
            .flatten()
            .collect();
        if loading_messages.is_empty() {
            return Err(LocaleError::NoPhaseMessages {
                locale: locale.code().to_string(),
            });
        }

        Ok(Self {
            title,
            input_placeholder,
            submit_button,
            result_title,
            loading_messages,
        })
    }

    /// Phase message at `index`, clamped to the last entry.
    #[must_use]
    pub fn loading_message(&self, index: usize) -> &str {
        let last = self.loading_messages.len().saturating_sub(1);
        self.loading_messages
            .get(index.min(last))
            .map_or("", String::as_str)
    }
}

fn format_message(bundle: &FluentBundle<FluentResource>, key: &str) -> Option<String> {
    let pattern = bundle.get_message(key)?.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, None, &mut errors);
    if errors.is_empty() {
        Some(value.into_owned())
    } else {
        None
    }
}

/// Display strings for every supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    en: LocaleStrings,
    es: LocaleStrings,
    it: LocaleStrings,
}

impl LocaleTable {
    /// Loads the table, preferring `i18n_dir` when given.
    ///
    /// A directory that cannot be read or fails validation is logged and the
    /// embedded resources are used instead.
    pub fn load(i18n_dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = i18n_dir {
            match Self::from_dir(dir) {
                Ok(table) => {
                    tracing::info!(dir = %dir.display(), "loaded locale resources from directory");
                    return Ok(table);
                }
                Err(err) => {
                    tracing::warn!(
                        dir = %dir.display(),
                        error = %err,
                        "falling back to embedded locale resources"
                    );
                }
            }
        }
        Self::embedded()
    }

    /// Builds the table from the resources compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_source(|locale| {
            let file = Asset::get(&format!("{}.ftl", locale.code()));
            Ok(file.map(|file| String::from_utf8_lossy(&file.data).into_owned()))
        })
    }

    /// Builds the table from `<dir>/<code>.ftl` files.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::from_source(|locale| {
            let path = dir.join(format!("{}.ftl", locale.code()));
            match std::fs::read_to_string(&path) {
                Ok(content) => Ok(Some(content)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(Error::from(err)),
            }
        })
    }

    fn from_source<F>(read: F) -> Result<Self>
    where
        F: Fn(LocaleCode) -> Result<Option<String>>,
    {
        let load = |locale: LocaleCode| -> Result<LocaleStrings> {
            let source = read(locale)?.ok_or_else(|| LocaleError::MissingLocale {
                locale: locale.code().to_string(),
            })?;
            Ok(LocaleStrings::from_ftl(locale, source)?)
        };

        let table = Self {
            en: load(LocaleCode::En)?,
            es: load(LocaleCode::Es)?,
            it: load(LocaleCode::It)?,
        };
        table.warn_on_uneven_sequences();
        Ok(table)
    }

    fn warn_on_uneven_sequences(&self) {
        let baseline = self.strings(LocaleCode::BASELINE).loading_messages.len();
        for locale in LocaleCode::ALL {
            let count = self.strings(locale).loading_messages.len();
            if count != baseline {
                tracing::warn!(
                    locale = locale.code(),
                    count,
                    baseline,
                    "loading message count differs from baseline"
                );
            }
        }
    }

    /// Strings for `locale`.
    #[must_use]
    pub fn strings(&self, locale: LocaleCode) -> &LocaleStrings {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::Es => &self.es,
            LocaleCode::It => &self.it,
        }
    }
}
