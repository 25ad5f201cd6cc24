use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use shell::{InputSink, SyntheticEvent};

/// Rendering-surface handle for the demo runtime. The input layer pushes
/// synthetic events through one clone of the handle; the runtime's frame
/// loop drains them through another.
#[derive(Clone, Default)]
pub(crate) struct DemoSurface {
    queue: Arc<Mutex<VecDeque<SyntheticEvent>>>,
}

impl DemoSurface {
    pub(crate) fn drain(&self) -> Vec<SyntheticEvent> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.drain(..).collect()
    }
}

impl InputSink for DemoSurface {
    fn dispatch(&mut self, event: SyntheticEvent) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(event);
    }
}
