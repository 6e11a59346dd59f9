// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring to the Iced runtime.
//!
//! The `App` owns the validated locale table, the single form [`Session`] and
//! the theme. Start-up resolves configuration, the initial locale and the
//! theme once; after that every change flows through [`App::update`].

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::domain::locale::LocaleCode;
use crate::domain::reader::Session;
use crate::error::Result;
use crate::i18n::fluent::LocaleTable;
use crate::i18n::selector;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::path::Path;

/// Root Iced application state.
#[derive(Debug, Clone)]
pub struct App {
    locales: LocaleTable,
    session: Session,
    /// Resolved at construction; `theme()` never queries the desktop.
    theme: Theme,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    let app = App::new(flags)?;
    tracing::info!(locale = app.session.locale().code(), "starting");

    // iced requires a `Fn` boot; the initial state is cheap to clone.
    iced::application(move || app.clone(), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Resolves configuration, locale resources and the start-up locale.
    ///
    /// Fails only when the embedded locale resources are invalid.
    pub fn new(flags: Flags) -> Result<Self> {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default configuration");
        }

        let locales = LocaleTable::load(flags.i18n_dir.as_deref().map(Path::new))?;
        let locale = selector::resolve_locale(
            flags.lang.as_deref(),
            config.general.language.as_deref(),
            flags.host_locale.as_deref(),
        );

        Ok(Self::with_table(locales, locale, config.general.theme_mode))
    }

    /// Builds an idle application around an already loaded table.
    #[must_use]
    pub fn with_table(locales: LocaleTable, locale: LocaleCode, theme_mode: ThemeMode) -> Self {
        let theme = theme_mode.to_theme();
        tracing::debug!(?theme_mode, ?theme, "resolved theme");
        Self {
            locales,
            session: Session::new(locale),
            theme,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    /// Window title, localized like the rest of the form.
    #[must_use]
    pub fn title(&self) -> String {
        self.locales.strings(self.session.locale()).title.clone()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(&mut self.session, message)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.session.is_running())
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            locales: &self.locales,
            session: &self.session,
        })
    }
}
