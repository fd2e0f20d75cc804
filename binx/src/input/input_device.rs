// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::pin::Pin;

use crossterm::event::{Event, EventStream};
use futures_util::{FutureExt, Stream, StreamExt};
use miette::IntoDiagnostic;

pub type CrosstermEventResult = std::io::Result<Event>;

/// Pinned event stream that can be moved into a spawned task.
pub type PinnedInputStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// Source of terminal events. In production this is crossterm's [`EventStream`], and in
/// tests it is a canned sequence of events, see [`InputDevice::new_mock`].
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
}

impl InputDevice {
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        InputDevice {
            resource: Box::pin(EventStream::new()),
        }
    }

    /// Yields the events in `generator_vec`, in order, then ends.
    #[must_use]
    pub fn new_mock(generator_vec: Vec<CrosstermEventResult>) -> InputDevice {
        let it = async_stream::stream! {
            for item in generator_vec {
                yield item;
            }
        };
        InputDevice {
            resource: Box::pin(it),
        }
    }
}

impl InputDevice {
    /// Wait for the next event.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails, or if the stream has ended.
    pub async fn next_event(&mut self) -> miette::Result<Event> {
        match self.resource.next().fuse().await {
            Some(it) => it.into_diagnostic(),
            None => miette::bail!("Failed to get next event from input source."),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::assert_eq2;

    #[tokio::test]
    async fn test_mock_yields_events_in_order_then_fails() {
        let down = Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        let mut device = InputDevice::new_mock(vec![Ok(Event::Resize(10, 5)), Ok(down.clone())]);

        assert_eq2!(device.next_event().await.unwrap(), Event::Resize(10, 5));
        assert_eq2!(device.next_event().await.unwrap(), down);
        assert!(device.next_event().await.is_err());
    }

    #[tokio::test]
    async fn test_io_error_is_reported() {
        let mut device = InputDevice::new_mock(vec![Err(std::io::Error::other("tty gone"))]);
        let err = device.next_event().await.unwrap_err();
        assert!(err.to_string().contains("tty gone"));
    }
}
