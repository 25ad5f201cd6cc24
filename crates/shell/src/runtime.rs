use thiserror::Error;

use crate::input::InputSink;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct RuntimeInitError(pub String);

#[derive(Debug, Error)]
#[error("{0}")]
pub struct DecodeError(pub String);

/// Decoded content bundle. Opaque beyond the one question the boot sequence
/// asks of it.
pub trait ContentBundle {
    fn has_audio(&self) -> bool;
}

/// The sandboxed game runtime, opaque to the shell: it consumes the raw
/// runtime image, decodes the content bundle, and then owns the rendering
/// surface for the rest of the process lifetime.
#[allow(async_fn_in_trait)]
pub trait GameRuntime {
    type Content: ContentBundle;
    type Surface: InputSink;

    fn initialize(&mut self, image: &[u8]) -> Result<(), RuntimeInitError>;

    fn decode(&mut self, bundle: &[u8]) -> Result<Self::Content, DecodeError>;

    /// Expected to suspend for the process lifetime.
    async fn run(&mut self, surface: Self::Surface, content: Self::Content);
}
