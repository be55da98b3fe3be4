use std::time::Duration;

use fltk::app::{self, TimeoutHandle};

/// Owns one FLTK timeout and removes it when dropped, so a callback can
/// never fire after the view that scheduled it is gone.
///
/// The callback receives the handle and may re-arm itself with
/// [`TimerGuard::rearm`]; the guard keeps tracking the same handle.
pub struct TimerGuard {
    handle: TimeoutHandle,
}

impl TimerGuard {
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnMut(TimeoutHandle) + 'static,
    {
        let handle = app::add_timeout3(delay.as_secs_f64(), callback);
        Self { handle }
    }

    /// Re-arm a timeout from inside its own callback.
    pub fn rearm(handle: TimeoutHandle, delay: Duration) {
        app::repeat_timeout3(delay.as_secs_f64(), handle);
    }

    pub fn is_pending(&self) -> bool {
        app::has_timeout3(self.handle)
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if app::has_timeout3(self.handle) {
            app::remove_timeout3(self.handle);
        }
    }
}
