use std::time::Duration;

use serde::Deserialize;
use shell::{ContentBundle, DecodeError, GameRuntime, RuntimeInitError};
use tracing::info;

use super::surface::DemoSurface;

const RUN_TICK_MILLIS: u64 = 16;

#[derive(Debug, Deserialize)]
pub(crate) struct BundleManifest {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) has_audio: bool,
}

#[derive(Debug)]
pub(crate) struct DemoContent {
    manifest: BundleManifest,
}

impl ContentBundle for DemoContent {
    fn has_audio(&self) -> bool {
        self.manifest.has_audio
    }
}

/// Stand-in for a sandboxed game runtime: accepts any non-empty runtime
/// image, decodes the bundle's JSON manifest, and spends its run loop
/// draining the surface's synthetic event queue.
#[derive(Debug, Default)]
pub(crate) struct DemoRuntime {
    image_len: usize,
}

impl GameRuntime for DemoRuntime {
    type Content = DemoContent;
    type Surface = DemoSurface;

    fn initialize(&mut self, image: &[u8]) -> Result<(), RuntimeInitError> {
        if image.is_empty() {
            return Err(RuntimeInitError("runtime image is empty".to_string()));
        }
        self.image_len = image.len();
        info!(bytes = image.len(), "runtime_image_accepted");
        Ok(())
    }

    fn decode(&mut self, bundle: &[u8]) -> Result<DemoContent, DecodeError> {
        let mut deserializer = serde_json::Deserializer::from_slice(bundle);
        let manifest: BundleManifest = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|error| {
                DecodeError(format!(
                    "bundle manifest at {}: {}",
                    error.path(),
                    error.inner()
                ))
            })?;
        info!(
            title = %manifest.title,
            has_audio = manifest.has_audio,
            "bundle_decoded"
        );
        Ok(DemoContent { manifest })
    }

    async fn run(&mut self, surface: DemoSurface, content: DemoContent) {
        info!(
            title = %content.manifest.title,
            image_bytes = self.image_len,
            "game_started"
        );
        let mut ticks = tokio::time::interval(Duration::from_millis(RUN_TICK_MILLIS));
        loop {
            ticks.tick().await;
            for event in surface.drain() {
                info!(key = ?event.key, kind = ?event.kind, "input_event");
            }
        }
    }
}
