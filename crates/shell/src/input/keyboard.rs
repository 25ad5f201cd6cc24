use super::{InputSink, LogicalKey, SyntheticEvent, LOGICAL_KEY_COUNT};

/// Physical key codes the shell recognizes; everything else never reaches
/// the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKey {
    Z,
    X,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl HostKey {
    fn logical_key(self) -> LogicalKey {
        match self {
            HostKey::Z => LogicalKey::A,
            HostKey::X => LogicalKey::B,
            HostKey::ArrowUp => LogicalKey::Up,
            HostKey::ArrowDown => LogicalKey::Down,
            HostKey::ArrowLeft => LogicalKey::Left,
            HostKey::ArrowRight => LogicalKey::Right,
        }
    }
}

/// Pass-through for physical keyboard events. Held-state bookkeeping keeps
/// OS auto-repeat keydowns from fabricating extra press edges.
#[derive(Debug, Default)]
pub struct KeyboardAdapter {
    held: [bool; LOGICAL_KEY_COUNT],
}

impl KeyboardAdapter {
    pub fn key_event(&mut self, key: HostKey, pressed: bool, sink: &mut impl InputSink) {
        let logical = key.logical_key();
        let held = &mut self.held[logical.index()];
        if pressed && !*held {
            sink.dispatch(SyntheticEvent::press(logical));
            *held = true;
        } else if !pressed && *held {
            sink.dispatch(SyntheticEvent::release(logical));
            *held = false;
        }
    }
}
