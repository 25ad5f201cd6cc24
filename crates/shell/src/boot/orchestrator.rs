use thiserror::Error;
use tracing::{error, info};

use crate::fetch::{load, AssetResource, FetchError};
use crate::host::{GestureGate, GestureGateClosed};
use crate::runtime::{ContentBundle, DecodeError, GameRuntime, RuntimeInitError};

use super::progress::{
    content_fetch_percent, runtime_fetch_percent, ProgressGauge, CONTENT_DECODED_PERCENT,
    CONTENT_FETCHED_PERCENT, CONTROLLERS_READY_PERCENT, RUNTIME_FETCHED_PERCENT,
    RUNTIME_INITIALIZED_PERCENT, TOUCH_READY_PERCENT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStage {
    Idle,
    FetchingRuntime,
    InitializingRuntime,
    FetchingContent,
    Decoding,
    AwaitingUserGesture,
    Running,
    Failed,
}

#[derive(Debug, Error)]
pub enum BootError {
    #[error("failed to fetch runtime image: {0}")]
    FetchRuntime(#[source] FetchError),
    #[error("failed to initialize runtime: {0}")]
    InitializeRuntime(#[from] RuntimeInitError),
    #[error("failed to fetch content bundle: {0}")]
    FetchContent(#[source] FetchError),
    #[error("failed to decode content bundle: {0}")]
    DecodeContent(#[from] DecodeError),
    #[error("user-gesture gate closed: {0}")]
    GestureGate(#[from] GestureGateClosed),
}

/// Presentation boundary. The shell reports a single 0-100 numeric plus the
/// stage and terminal states; how any of it is drawn is the host's concern.
pub trait BootPresenter {
    fn stage_changed(&mut self, stage: BootStage);
    fn show_progress(&mut self, percent: f32);
    fn show_gesture_prompt(&mut self);
    fn show_failure(&mut self, error: &BootError);
}

/// Linear boot state machine: fetch runtime image, initialize, fetch
/// content bundle, decode, gate on a user gesture when the content carries
/// audio, then hand surface and content to the runtime. Failures in any
/// stage sink to `Failed` with no retry.
pub struct BootSequence {
    stage: BootStage,
    gauge: ProgressGauge,
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl BootSequence {
    pub fn new() -> Self {
        Self {
            stage: BootStage::Idle,
            gauge: ProgressGauge::default(),
        }
    }

    pub fn stage(&self) -> BootStage {
        self.stage
    }

    pub async fn run<R, P, A, B>(
        &mut self,
        runtime: &mut R,
        surface: R::Surface,
        runtime_image: A,
        content_bundle: B,
        gesture: GestureGate,
        presenter: &mut P,
    ) -> Result<(), BootError>
    where
        R: GameRuntime,
        P: BootPresenter,
        A: AssetResource,
        B: AssetResource,
    {
        let result = self
            .run_stages(
                runtime,
                surface,
                runtime_image,
                content_bundle,
                gesture,
                presenter,
            )
            .await;
        if let Err(error) = &result {
            self.advance(BootStage::Failed, presenter);
            error!(error = %error, "boot_failed");
            presenter.show_failure(error);
        }
        result
    }

    async fn run_stages<R, P, A, B>(
        &mut self,
        runtime: &mut R,
        surface: R::Surface,
        runtime_image: A,
        content_bundle: B,
        gesture: GestureGate,
        presenter: &mut P,
    ) -> Result<(), BootError>
    where
        R: GameRuntime,
        P: BootPresenter,
        A: AssetResource,
        B: AssetResource,
    {
        self.advance(BootStage::FetchingRuntime, presenter);
        let gauge = &mut self.gauge;
        let image = load(runtime_image, |loaded, total| {
            // Progress stays suppressed until a total is known.
            let Some(total) = total else { return };
            presenter.show_progress(gauge.advance(runtime_fetch_percent(loaded, total)));
        })
        .await
        .map_err(BootError::FetchRuntime)?;
        presenter.show_progress(self.gauge.advance(RUNTIME_FETCHED_PERCENT));

        self.advance(BootStage::InitializingRuntime, presenter);
        runtime.initialize(&image)?;
        presenter.show_progress(self.gauge.advance(RUNTIME_INITIALIZED_PERCENT));

        self.advance(BootStage::FetchingContent, presenter);
        let gauge = &mut self.gauge;
        let bundle = load(content_bundle, |loaded, total| {
            let Some(total) = total else { return };
            presenter.show_progress(gauge.advance(content_fetch_percent(loaded, total)));
        })
        .await
        .map_err(BootError::FetchContent)?;
        presenter.show_progress(self.gauge.advance(CONTENT_FETCHED_PERCENT));

        self.advance(BootStage::Decoding, presenter);
        let content = runtime.decode(&bundle)?;
        presenter.show_progress(self.gauge.advance(CONTENT_DECODED_PERCENT));

        // The input layer attaches to the surface outside the boot sequence;
        // the bar keeps its fixed wiring checkpoints regardless.
        presenter.show_progress(self.gauge.advance(TOUCH_READY_PERCENT));
        presenter.show_progress(self.gauge.advance(CONTROLLERS_READY_PERCENT));

        if content.has_audio() {
            self.advance(BootStage::AwaitingUserGesture, presenter);
            presenter.show_gesture_prompt();
            let gesture_kind = gesture.wait().await?;
            info!(gesture = ?gesture_kind, "user_gesture_received");
        }

        self.advance(BootStage::Running, presenter);
        runtime.run(surface, content).await;
        Ok(())
    }

    fn advance(&mut self, next: BootStage, presenter: &mut impl BootPresenter) {
        info!(from = ?self.stage, to = ?next, "boot_stage_advanced");
        self.stage = next;
        presenter.stage_changed(next);
    }
}
