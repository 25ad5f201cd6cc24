mod orchestrator;
mod progress;

pub use orchestrator::{BootError, BootPresenter, BootSequence, BootStage};
pub use progress::{
    content_fetch_percent, runtime_fetch_percent, ProgressGauge, CONTENT_DECODED_PERCENT,
    CONTENT_FETCHED_PERCENT, CONTROLLERS_READY_PERCENT, RUNTIME_FETCHED_PERCENT,
    RUNTIME_INITIALIZED_PERCENT, TOUCH_READY_PERCENT,
};
