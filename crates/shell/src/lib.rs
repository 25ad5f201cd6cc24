pub mod boot;
pub mod fetch;
pub mod host;
pub mod input;
pub mod runtime;

pub use boot::{
    content_fetch_percent, runtime_fetch_percent, BootError, BootPresenter, BootSequence,
    BootStage, ProgressGauge,
};
pub use fetch::{
    load, AssetResource, ByteStream, FetchError, FileResource, HttpResource, StreamAssembler,
};
pub use host::{
    GestureGate, GestureGateClosed, GestureKind, GestureTrigger, HostCapabilities, NullWallet,
    WalletBridge,
};
pub use input::{
    ControllerHost, ControllerPoller, ControllerSample, EventKind, HostKey, InputSink,
    KeyboardAdapter, LogicalKey, SyntheticEvent, TouchAdapter, TouchDirection, VirtualInput,
};
pub use runtime::{ContentBundle, DecodeError, GameRuntime, RuntimeInitError};
