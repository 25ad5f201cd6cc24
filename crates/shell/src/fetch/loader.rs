use thiserror::Error;
use tracing::{debug, info};

use super::assembler::StreamAssembler;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("stream for {url} aborted after {bytes_read} bytes: {source}")]
    StreamRead {
        url: String,
        bytes_read: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// One downloadable asset. Opening performs the request; a resource is
/// consumed per load and never reused.
#[allow(async_fn_in_trait)]
pub trait AssetResource {
    type Stream: ByteStream;

    async fn open(self) -> Result<Self::Stream, FetchError>;
}

#[allow(async_fn_in_trait)]
pub trait ByteStream {
    fn origin(&self) -> &str;

    /// Total byte count declared up front, when the transport knows it.
    fn declared_size(&self) -> Option<u64>;

    /// True when the declared length does not describe the decoded body,
    /// making preallocation unsafe.
    fn transit_encoded(&self) -> bool;

    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, FetchError>;
}

/// Streams a resource to completion, invoking `on_progress` with
/// `(loaded, total?)` at every chunk boundary. The callback is never invoked
/// after this future resolves.
pub async fn load<R: AssetResource>(
    resource: R,
    mut on_progress: impl FnMut(u64, Option<u64>),
) -> Result<Vec<u8>, FetchError> {
    let mut stream = resource.open().await?;
    debug!(
        origin = stream.origin(),
        declared_size = stream.declared_size(),
        transit_encoded = stream.transit_encoded(),
        "asset_stream_opened"
    );
    let mut assembler = StreamAssembler::new(stream.declared_size(), stream.transit_encoded());

    while let Some(chunk) = stream.next_chunk().await? {
        if let Err(source) = assembler.push_chunk(chunk, &mut on_progress) {
            let bytes_read = source.received;
            return Err(FetchError::StreamRead {
                url: stream.origin().to_string(),
                bytes_read,
                source: Box::new(source),
            });
        }
    }

    let body = assembler.finish(&mut on_progress);
    info!(
        origin = stream.origin(),
        bytes = body.len(),
        "asset_loaded"
    );
    Ok(body)
}
