// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications sent to the host while the user traces.

/// A notification from a [`TouchPath`](crate::TouchPath).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchPathEvent {
    /// Progress moved forward by a pointer move; carries the new progress.
    ProgressChanged(f64),
    /// A pointer landed on traced history and a tracing gesture began.
    TouchStarted,
    /// The tracing gesture ended.
    TouchStopped,
}

/// Receives [`TouchPathEvent`]s synchronously, from inside the pointer
/// handler that caused them.
///
/// Every method defaults to doing nothing. Closures taking a
/// [`TouchPathEvent`] implement this trait too.
pub trait TouchPathListener {
    /// Progress changed to `progress`.
    fn progress_changed(&mut self, progress: f64) {
        let _ = progress;
    }

    /// A tracing gesture started.
    fn touch_started(&mut self) {}

    /// A tracing gesture stopped.
    fn touch_stopped(&mut self) {}
}

impl<F: FnMut(TouchPathEvent)> TouchPathListener for F {
    fn progress_changed(&mut self, progress: f64) {
        self(TouchPathEvent::ProgressChanged(progress));
    }

    fn touch_started(&mut self) {
        self(TouchPathEvent::TouchStarted);
    }

    fn touch_stopped(&mut self) {
        self(TouchPathEvent::TouchStopped);
    }
}

impl TouchPathEvent {
    /// Delivers this event to the matching `listener` method.
    pub fn dispatch(self, listener: &mut dyn TouchPathListener) {
        match self {
            Self::ProgressChanged(p) => listener.progress_changed(p),
            Self::TouchStarted => listener.touch_started(),
            Self::TouchStopped => listener.touch_stopped(),
        }
    }
}
