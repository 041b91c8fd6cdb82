use std::collections::VecDeque;

use super::{InputEvent, InputProvider};

/// FIFO of events pushed by the caller, drained one per poll.
#[derive(Default, Debug, Clone)]
pub struct QueuedInput {
    events: VecDeque<InputEvent>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<InputEvent> for QueuedInput {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl InputProvider for QueuedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_push_order() {
        let mut input = QueuedInput::new();
        input.push(InputEvent::Tap);
        input.push(InputEvent::Reset);

        assert_eq!(input.poll_event(), Ok(Some(InputEvent::Tap)));
        assert_eq!(input.poll_event(), Ok(Some(InputEvent::Reset)));
        assert!(input.is_empty());
        assert_eq!(input.poll_event(), Ok(None));
    }
}
