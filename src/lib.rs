// SPDX-License-Identifier: MPL-2.0
//! `mind_reader` is a novelty "Mind Reader 3000" form built with the Iced GUI
//! framework.
//!
//! The user types some text, a staged fake progress animation plays, and the
//! text is revealed back as the "read" thought. The form is available in
//! English, Spanish and Italian through Fluent resources.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
