use std::time::Duration;

use shell::{BootError, BootSequence, GestureGate, HostCapabilities, VirtualInput};
use tracing::error;

mod app;

use app::bootstrap::PlayerConfig;

// Display-refresh analog for the headless player, ~60Hz.
const FRAME_INTERVAL_MICROS: u64 = 16_667;

fn main() {
    let wiring = app::bootstrap::build_app();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "tokio_runtime_build_failed");
            std::process::exit(1);
        }
    };

    if let Err(err) = runtime.block_on(run(wiring.config)) {
        error!(error = %err, "startup_failed");
        std::process::exit(1);
    }
}

async fn run(config: PlayerConfig) -> Result<(), BootError> {
    let (trigger, gate) = GestureGate::new();
    app::bootstrap::spawn_gesture_listener(trigger);

    let capabilities = HostCapabilities::resolve(None, None);
    let mut input = VirtualInput::new(capabilities.controllers);
    let surface = app::DemoSurface::default();

    // The input layer goes live as soon as the surface exists, independent
    // of boot progress; events dispatched before the runtime attaches are
    // harmless no-ops.
    let mut input_surface = surface.clone();
    let input_driver = async move {
        let mut frames = tokio::time::interval(Duration::from_micros(FRAME_INTERVAL_MICROS));
        loop {
            frames.tick().await;
            input.frame_tick(&mut input_surface);
        }
    };

    let http = reqwest::Client::new();
    let mut demo = app::DemoRuntime::default();
    let mut presenter = app::LogPresenter::default();
    let mut boot = BootSequence::new();
    let boot_driver = boot.run(
        &mut demo,
        surface,
        app::asset_resource(&http, &config.runtime_asset),
        app::asset_resource(&http, &config.content_asset),
        gate,
        &mut presenter,
    );

    tokio::select! {
        result = boot_driver => result,
        _ = input_driver => Ok(()),
    }
}
