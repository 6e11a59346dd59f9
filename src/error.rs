// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Locale(LocaleError),
    Ui(String),
}

/// Problems found while loading or validating a locale table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The Fluent source could not be parsed.
    Parse { locale: String, details: String },

    /// A required message key has no value.
    MissingKey { locale: String, key: &'static str },

    /// The locale defines no loading-phase messages at all.
    NoPhaseMessages { locale: String },

    /// A supported locale has no resource file.
    MissingLocale { locale: String },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Parse { locale, details } => {
                write!(f, "failed to parse {}.ftl: {}", locale, details)
            }
            LocaleError::MissingKey { locale, key } => {
                write!(f, "locale {} is missing message '{}'", locale, key)
            }
            LocaleError::NoPhaseMessages { locale } => {
                write!(f, "locale {} defines no loading messages", locale)
            }
            LocaleError::MissingLocale { locale } => {
                write!(f, "no resource found for locale {}", locale)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
            Error::Ui(e) => write!(f, "UI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LocaleError> for Error {
    fn from(err: LocaleError) -> Self {
        Error::Locale(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Ui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn locale_error_wraps_into_error() {
        let err: Error = LocaleError::NoPhaseMessages {
            locale: "it".to_string(),
        }
        .into();
        assert_eq!(
            format!("{}", err),
            "Locale Error: locale it defines no loading messages"
        );
    }

    #[test]
    fn missing_key_names_the_key() {
        let err = LocaleError::MissingKey {
            locale: "es".to_string(),
            key: "result-title",
        };
        let message = err.to_string();
        assert!(message.contains("locale es"));
        assert!(message.contains("'result-title'"));
    }
}
