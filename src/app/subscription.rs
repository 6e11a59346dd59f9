// SPDX-License-Identifier: MPL-2.0
//! Timer subscription driving the reading animation.

use super::config::ANIMATION_TICK_INTERVAL_MS;
use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic animation tick.
///
/// The timer only exists while a run is in progress; dropping the
/// subscription when the run finishes stops it.
pub fn create_tick_subscription(is_running: bool) -> Subscription<Message> {
    if is_running {
        time::every(Duration::from_millis(ANIMATION_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
