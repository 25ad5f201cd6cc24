use super::{InputSink, LogicalKey, SyntheticEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchDirection {
    Up,
    Down,
    Left,
    Right,
}

impl TouchDirection {
    fn logical_key(self) -> LogicalKey {
        match self {
            TouchDirection::Up => LogicalKey::Up,
            TouchDirection::Down => LogicalKey::Down,
            TouchDirection::Left => LogicalKey::Left,
            TouchDirection::Right => LogicalKey::Right,
        }
    }
}

/// Adapts a virtual-joystick widget's direction notifications. At most one
/// direction is active at a time: entering a different direction releases
/// the previous one before the new press, so downstream never sees
/// simultaneous opposing directions from this source, even transiently.
#[derive(Debug, Default)]
pub struct TouchAdapter {
    active: Option<LogicalKey>,
}

impl TouchAdapter {
    pub fn direction_entered(&mut self, direction: TouchDirection, sink: &mut impl InputSink) {
        let key = direction.logical_key();
        if let Some(active) = self.active {
            if active != key {
                sink.dispatch(SyntheticEvent::release(active));
            }
        }
        sink.dispatch(SyntheticEvent::press(key));
        self.active = Some(key);
    }

    /// Releasing with nothing active is a no-op, not an error.
    pub fn released(&mut self, sink: &mut impl InputSink) {
        if let Some(active) = self.active.take() {
            sink.dispatch(SyntheticEvent::release(active));
        }
    }

    pub fn active_direction(&self) -> Option<LogicalKey> {
        self.active
    }
}
