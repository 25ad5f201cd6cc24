use shell::{BootError, BootPresenter, BootStage};
use tracing::{error, info};

/// Renders boot progress into the structured log, one line per whole
/// percent step.
#[derive(Debug, Default)]
pub(crate) struct LogPresenter {
    last_whole_percent: Option<i32>,
}

impl BootPresenter for LogPresenter {
    fn stage_changed(&mut self, stage: BootStage) {
        info!(stage = ?stage, "boot_stage");
    }

    fn show_progress(&mut self, percent: f32) {
        let whole = percent.floor() as i32;
        if self.last_whole_percent != Some(whole) {
            self.last_whole_percent = Some(whole);
            info!(percent = whole, "boot_progress");
        }
    }

    fn show_gesture_prompt(&mut self) {
        info!("press enter to start playback");
    }

    fn show_failure(&mut self, error: &BootError) {
        error!(error = %error, "boot_failure_screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_sub_percent_progress_collapses_to_one_step() {
        let mut presenter = LogPresenter::default();
        presenter.show_progress(10.2);
        assert_eq!(presenter.last_whole_percent, Some(10));
        presenter.show_progress(10.9);
        assert_eq!(presenter.last_whole_percent, Some(10));
        presenter.show_progress(11.0);
        assert_eq!(presenter.last_whole_percent, Some(11));
    }
}
