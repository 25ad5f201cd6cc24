use std::time::Instant;

mod gamepad;
mod keyboard;
mod touch;

pub use gamepad::{ControllerHost, ControllerPoller, ControllerSample};
pub use keyboard::{HostKey, KeyboardAdapter};
pub use touch::{TouchAdapter, TouchDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    A,
    B,
    Up,
    Down,
    Left,
    Right,
}

pub(crate) const LOGICAL_KEY_COUNT: usize = 6;

impl LogicalKey {
    pub(crate) const fn index(self) -> usize {
        match self {
            LogicalKey::A => 0,
            LogicalKey::B => 1,
            LogicalKey::Up => 2,
            LogicalKey::Down => 3,
            LogicalKey::Left => 4,
            LogicalKey::Right => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Press,
    Release,
}

/// One synthetic input event. Ephemeral: dispatched and discarded, never
/// stored by the layer that produced it.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticEvent {
    pub kind: EventKind,
    pub key: LogicalKey,
    pub source_timestamp: Instant,
}

impl SyntheticEvent {
    pub fn press(key: LogicalKey) -> Self {
        Self {
            kind: EventKind::Press,
            key,
            source_timestamp: Instant::now(),
        }
    }

    pub fn release(key: LogicalKey) -> Self {
        Self {
            kind: EventKind::Release,
            key,
            source_timestamp: Instant::now(),
        }
    }
}

/// Target surface for the synthetic event stream. Consumers must treat
/// events identically regardless of originating device.
pub trait InputSink {
    fn dispatch(&mut self, event: SyntheticEvent);
}

/// The union of the three input sources, dispatching onto one sink. Each
/// source keeps its own state and emits its own press/release edges; edges
/// from different sources are never merged, so simultaneous opposite
/// directions from two devices are possible and intentional.
pub struct VirtualInput {
    keyboard: KeyboardAdapter,
    touch: TouchAdapter,
    poller: ControllerPoller,
    controller_host: Option<Box<dyn ControllerHost>>,
}

impl VirtualInput {
    /// `controller_host` is the environment's enumeration capability; absent
    /// means the layer degrades to "no controllers".
    pub fn new(controller_host: Option<Box<dyn ControllerHost>>) -> Self {
        Self {
            keyboard: KeyboardAdapter::default(),
            touch: TouchAdapter::default(),
            poller: ControllerPoller::default(),
            controller_host,
        }
    }

    /// Called by the host once per rendered frame.
    pub fn frame_tick(&mut self, sink: &mut impl InputSink) {
        if let Some(host) = self.controller_host.as_deref_mut() {
            self.poller.poll(host, sink);
        }
    }

    pub fn touch_direction_entered(&mut self, direction: TouchDirection, sink: &mut impl InputSink) {
        self.touch.direction_entered(direction, sink);
    }

    pub fn touch_released(&mut self, sink: &mut impl InputSink) {
        self.touch.released(sink);
    }

    pub fn key_event(&mut self, key: HostKey, pressed: bool, sink: &mut impl InputSink) {
        self.keyboard.key_event(key, pressed, sink);
    }

    pub fn controller_disconnected(&mut self, controller_id: u32, sink: &mut impl InputSink) {
        self.poller.controller_disconnected(controller_id, sink);
    }
}
