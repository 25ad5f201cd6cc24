use std::collections::HashMap;

use tracing::info;

use super::{InputSink, LogicalKey, SyntheticEvent};

// Standard-gamepad slot layout: face buttons 0/1, d-pad 12-15.
const BUTTON_A_SLOT: usize = 0;
const BUTTON_B_SLOT: usize = 1;
const DPAD_UP_SLOT: usize = 12;
const DPAD_DOWN_SLOT: usize = 13;
const DPAD_LEFT_SLOT: usize = 14;
const DPAD_RIGHT_SLOT: usize = 15;

const AXIS_THRESHOLD: f32 = 0.5;

/// Environment capability that enumerates currently connected controllers.
/// Absence of a controller from one tick to the next is an implicit
/// disconnect.
pub trait ControllerHost {
    fn sample(&mut self) -> Vec<ControllerSample>;
}

#[derive(Debug, Clone)]
pub struct ControllerSample {
    pub controller_id: u32,
    pub buttons: Vec<bool>,
    pub axes: Vec<f32>,
}

#[derive(Debug)]
struct ControllerState {
    buttons: Vec<bool>,
    // Up, Down, Left, Right hold latches for axes 0/1.
    axis_held: [bool; 4],
}

const AXIS_DIRECTIONS: [LogicalKey; 4] = [
    LogicalKey::Up,
    LogicalKey::Down,
    LogicalKey::Left,
    LogicalKey::Right,
];

/// Per-frame scan of connected controllers. Buttons are edge-detected
/// against the previous snapshot; axes 0/1 use a threshold latch per
/// direction with no hysteresis band, so jitter exactly at the boundary can
/// chatter.
#[derive(Debug, Default)]
pub struct ControllerPoller {
    controllers: HashMap<u32, ControllerState>,
}

impl ControllerPoller {
    pub fn poll(&mut self, host: &mut dyn ControllerHost, sink: &mut impl InputSink) {
        let samples = host.sample();

        for sample in &samples {
            match self.controllers.get_mut(&sample.controller_id) {
                None => {
                    // First observation seeds the snapshot without emitting:
                    // buttons already held at connect stay silent until
                    // released and re-pressed.
                    info!(
                        controller_id = sample.controller_id,
                        buttons = sample.buttons.len(),
                        axes = sample.axes.len(),
                        "controller_connected"
                    );
                    self.controllers.insert(
                        sample.controller_id,
                        ControllerState {
                            buttons: sample.buttons.clone(),
                            axis_held: [false; 4],
                        },
                    );
                }
                Some(state) => {
                    diff_buttons(state, &sample.buttons, sink);
                    update_axis_latches(state, &sample.axes, sink);
                }
            }
        }

        // Absence from the enumeration is an implicit disconnect.
        let disconnected: Vec<u32> = self
            .controllers
            .keys()
            .copied()
            .filter(|id| !samples.iter().any(|sample| sample.controller_id == *id))
            .collect();
        for controller_id in disconnected {
            self.controller_disconnected(controller_id, sink);
        }
    }

    /// Explicit disconnect notification from hosts that deliver one. All of
    /// the controller's currently-active synthetic presses are
    /// force-released so nothing stays stuck.
    pub fn controller_disconnected(&mut self, controller_id: u32, sink: &mut impl InputSink) {
        if let Some(state) = self.controllers.remove(&controller_id) {
            force_release(&state, sink);
            info!(controller_id, "controller_disconnected");
        }
    }

    pub fn connected_count(&self) -> usize {
        self.controllers.len()
    }
}

fn diff_buttons(state: &mut ControllerState, buttons: &[bool], sink: &mut impl InputSink) {
    for (slot, &pressed) in buttons.iter().enumerate() {
        let was_pressed = state.buttons.get(slot).copied().unwrap_or(false);
        if pressed == was_pressed {
            continue;
        }
        // Unmapped slots still refresh the snapshot, they just emit nothing.
        if let Some(key) = logical_key_for_slot(slot) {
            if pressed {
                sink.dispatch(SyntheticEvent::press(key));
            } else {
                sink.dispatch(SyntheticEvent::release(key));
            }
        }
    }
    state.buttons.clear();
    state.buttons.extend_from_slice(buttons);
}

fn update_axis_latches(state: &mut ControllerState, axes: &[f32], sink: &mut impl InputSink) {
    // A missing axis reads as centered; input glitches never propagate.
    let x = axes.first().copied().unwrap_or(0.0);
    let y = axes.get(1).copied().unwrap_or(0.0);

    let engaged = [
        y < -AXIS_THRESHOLD, // Up
        y > AXIS_THRESHOLD,  // Down
        x < -AXIS_THRESHOLD, // Left
        x > AXIS_THRESHOLD,  // Right
    ];
    for (index, key) in AXIS_DIRECTIONS.iter().enumerate() {
        let held = &mut state.axis_held[index];
        if engaged[index] && !*held {
            sink.dispatch(SyntheticEvent::press(*key));
            *held = true;
        } else if !engaged[index] && *held {
            sink.dispatch(SyntheticEvent::release(*key));
            *held = false;
        }
    }
}

fn force_release(state: &ControllerState, sink: &mut impl InputSink) {
    for (slot, &pressed) in state.buttons.iter().enumerate() {
        if pressed {
            if let Some(key) = logical_key_for_slot(slot) {
                sink.dispatch(SyntheticEvent::release(key));
            }
        }
    }
    for (index, &held) in state.axis_held.iter().enumerate() {
        if held {
            sink.dispatch(SyntheticEvent::release(AXIS_DIRECTIONS[index]));
        }
    }
}

fn logical_key_for_slot(slot: usize) -> Option<LogicalKey> {
    match slot {
        BUTTON_A_SLOT => Some(LogicalKey::A),
        BUTTON_B_SLOT => Some(LogicalKey::B),
        DPAD_UP_SLOT => Some(LogicalKey::Up),
        DPAD_DOWN_SLOT => Some(LogicalKey::Down),
        DPAD_LEFT_SLOT => Some(LogicalKey::Left),
        DPAD_RIGHT_SLOT => Some(LogicalKey::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingSink;
    use super::super::EventKind;
    use super::*;

    struct ScriptedHost {
        ticks: Vec<Vec<ControllerSample>>,
        cursor: usize,
    }

    impl ScriptedHost {
        fn new(ticks: Vec<Vec<ControllerSample>>) -> Self {
            Self { ticks, cursor: 0 }
        }
    }

    impl ControllerHost for ScriptedHost {
        fn sample(&mut self) -> Vec<ControllerSample> {
            let tick = self.ticks.get(self.cursor).cloned().unwrap_or_default();
            self.cursor += 1;
            tick
        }
    }

    fn pad(buttons: Vec<bool>, axes: Vec<f32>) -> ControllerSample {
        ControllerSample {
            controller_id: 0,
            buttons,
            axes,
        }
    }

    fn button_row(pressed_slot: Option<usize>) -> Vec<bool> {
        let mut row = vec![false; 16];
        if let Some(slot) = pressed_slot {
            row[slot] = true;
        }
        row
    }

    #[test]
    fn button_toggle_produces_press_then_release() {
        let mut host = ScriptedHost::new(vec![
            vec![pad(button_row(None), vec![0.0, 0.0])],
            vec![pad(button_row(Some(BUTTON_A_SLOT)), vec![0.0, 0.0])],
            vec![pad(button_row(Some(BUTTON_A_SLOT)), vec![0.0, 0.0])],
            vec![pad(button_row(None), vec![0.0, 0.0])],
        ]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        for _ in 0..4 {
            poller.poll(&mut host, &mut sink);
        }

        assert_eq!(
            sink.edges(),
            vec![
                (EventKind::Press, LogicalKey::A),
                (EventKind::Release, LogicalKey::A),
            ]
        );
    }

    #[test]
    fn first_observation_seeds_snapshot_silently() {
        let mut host = ScriptedHost::new(vec![vec![pad(
            button_row(Some(BUTTON_B_SLOT)),
            vec![0.0, 0.0],
        )]]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        poller.poll(&mut host, &mut sink);

        assert!(sink.events.is_empty());
        assert_eq!(poller.connected_count(), 1);
    }

    #[test]
    fn axis_swing_latches_one_press_and_one_release() {
        let mut host = ScriptedHost::new(vec![
            vec![pad(Vec::new(), vec![0.0, 0.0])],
            vec![pad(Vec::new(), vec![0.9, 0.0])],
            vec![pad(Vec::new(), vec![0.9, 0.0])],
            vec![pad(Vec::new(), vec![0.0, 0.0])],
        ]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        for _ in 0..4 {
            poller.poll(&mut host, &mut sink);
        }

        assert_eq!(
            sink.edges(),
            vec![
                (EventKind::Press, LogicalKey::Right),
                (EventKind::Release, LogicalKey::Right),
            ]
        );
    }

    #[test]
    fn axis_at_exact_threshold_emits_nothing() {
        let mut host = ScriptedHost::new(vec![
            vec![pad(Vec::new(), vec![0.0, 0.0])],
            vec![pad(Vec::new(), vec![0.5, -0.5])],
        ]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        poller.poll(&mut host, &mut sink);
        poller.poll(&mut host, &mut sink);

        assert!(sink.events.is_empty());
    }

    #[test]
    fn horizontal_and_vertical_axes_latch_independently() {
        let mut host = ScriptedHost::new(vec![
            vec![pad(Vec::new(), vec![0.0, 0.0])],
            vec![pad(Vec::new(), vec![0.8, -0.8])],
            vec![pad(Vec::new(), vec![0.8, 0.0])],
        ]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        for _ in 0..3 {
            poller.poll(&mut host, &mut sink);
        }

        assert_eq!(
            sink.edges(),
            vec![
                (EventKind::Press, LogicalKey::Up),
                (EventKind::Press, LogicalKey::Right),
                (EventKind::Release, LogicalKey::Up),
            ]
        );
    }

    #[test]
    fn disconnect_force_releases_everything_held() {
        let mut host = ScriptedHost::new(vec![
            vec![pad(button_row(None), vec![0.0, 0.0])],
            vec![pad(button_row(Some(BUTTON_A_SLOT)), vec![0.9, 0.0])],
            Vec::new(),
        ]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        for _ in 0..3 {
            poller.poll(&mut host, &mut sink);
        }

        let edges = sink.edges();
        assert_eq!(
            &edges[..2],
            &[
                (EventKind::Press, LogicalKey::A),
                (EventKind::Press, LogicalKey::Right),
            ]
        );
        let mut released: Vec<LogicalKey> = edges[2..]
            .iter()
            .filter(|(kind, _)| *kind == EventKind::Release)
            .map(|(_, key)| *key)
            .collect();
        released.sort_by_key(|key| key.index());
        assert_eq!(released, vec![LogicalKey::A, LogicalKey::Right]);
        assert_eq!(poller.connected_count(), 0);
    }

    #[test]
    fn explicit_disconnect_mid_press_force_releases() {
        let mut host = ScriptedHost::new(vec![
            vec![pad(button_row(None), vec![0.0, 0.0])],
            vec![pad(button_row(Some(BUTTON_A_SLOT)), vec![0.0, 0.0])],
        ]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        poller.poll(&mut host, &mut sink);
        poller.poll(&mut host, &mut sink);

        poller.controller_disconnected(0, &mut sink);

        assert_eq!(
            sink.edges(),
            vec![
                (EventKind::Press, LogicalKey::A),
                (EventKind::Release, LogicalKey::A),
            ]
        );
        assert_eq!(poller.connected_count(), 0);

        // Disconnect of an unknown controller is a no-op.
        poller.controller_disconnected(7, &mut sink);
        assert_eq!(sink.events.len(), 2);
    }

    #[test]
    fn unmapped_buttons_are_silently_ignored() {
        let row_off = vec![false; 10];
        let mut row_on = vec![false; 10];
        row_on[5] = true;

        let mut host = ScriptedHost::new(vec![
            vec![pad(row_off, vec![0.0, 0.0])],
            vec![pad(row_on, vec![0.0, 0.0])],
        ]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        poller.poll(&mut host, &mut sink);
        poller.poll(&mut host, &mut sink);

        assert!(sink.events.is_empty());
    }

    #[test]
    fn missing_axes_read_as_centered() {
        let mut host = ScriptedHost::new(vec![
            vec![pad(Vec::new(), vec![0.9, 0.0])],
            vec![pad(Vec::new(), Vec::new())],
            vec![pad(Vec::new(), vec![0.9])],
        ]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        for _ in 0..3 {
            poller.poll(&mut host, &mut sink);
        }

        // Tick 1 seeds; tick 2 has no axes at all; tick 3 latches Right from
        // the only axis present.
        assert_eq!(sink.edges(), vec![(EventKind::Press, LogicalKey::Right)]);
    }

    #[test]
    fn two_controllers_are_tracked_separately() {
        let other = ControllerSample {
            controller_id: 1,
            buttons: button_row(None),
            axes: vec![0.0, 0.0],
        };
        let mut other_pressed = other.clone();
        other_pressed.buttons[BUTTON_B_SLOT] = true;

        let mut host = ScriptedHost::new(vec![
            vec![pad(button_row(None), vec![0.0, 0.0]), other.clone()],
            vec![
                pad(button_row(Some(BUTTON_A_SLOT)), vec![0.0, 0.0]),
                other_pressed,
            ],
        ]);
        let mut poller = ControllerPoller::default();
        let mut sink = RecordingSink::default();
        poller.poll(&mut host, &mut sink);
        poller.poll(&mut host, &mut sink);

        assert_eq!(
            sink.edges(),
            vec![
                (EventKind::Press, LogicalKey::A),
                (EventKind::Press, LogicalKey::B),
            ]
        );
        assert_eq!(poller.connected_count(), 2);
    }
}
