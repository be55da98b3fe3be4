use std::time::Duration;

use fltk::{app::Sender, group::Scroll, prelude::*};

use crate::app::domain::messages::Message;
use crate::app::infrastructure::timer::TimerGuard;

/// Polls the page offset and reports changes as [`Message::Scrolled`].
/// Bursts of movement inside one interval collapse into one message.
pub struct ScrollWatcher {
    _timer: TimerGuard,
}

impl ScrollWatcher {
    pub fn start(scroll: &Scroll, interval: Duration, sender: Sender<Message>) -> Self {
        let scroll = scroll.clone();
        let mut last = scroll.yposition();

        let timer = TimerGuard::schedule(interval, move |handle| {
            let offset = scroll.yposition();
            if offset != last {
                last = offset;
                sender.send(Message::Scrolled(offset));
            }
            TimerGuard::rearm(handle, interval);
        });

        Self { _timer: timer }
    }
}
