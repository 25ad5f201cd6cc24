use shell::fetch::{FileStream, HttpStream};
use shell::{AssetResource, ByteStream, FetchError, FileResource, HttpResource};

/// Boot assets are addressed by URL or local path, matching how a hosted
/// player resolves them relative to its own origin.
pub(crate) enum AssetLocation {
    Http(HttpResource),
    File(FileResource),
}

pub(crate) fn asset_resource(client: &reqwest::Client, location: &str) -> AssetLocation {
    if location.starts_with("http://") || location.starts_with("https://") {
        AssetLocation::Http(HttpResource::new(client.clone(), location))
    } else {
        AssetLocation::File(FileResource::new(location))
    }
}

pub(crate) enum AnyStream {
    Http(HttpStream),
    File(FileStream),
}

impl AssetResource for AssetLocation {
    type Stream = AnyStream;

    async fn open(self) -> Result<AnyStream, FetchError> {
        match self {
            AssetLocation::Http(resource) => Ok(AnyStream::Http(resource.open().await?)),
            AssetLocation::File(resource) => Ok(AnyStream::File(resource.open().await?)),
        }
    }
}

impl ByteStream for AnyStream {
    fn origin(&self) -> &str {
        match self {
            AnyStream::Http(stream) => stream.origin(),
            AnyStream::File(stream) => stream.origin(),
        }
    }

    fn declared_size(&self) -> Option<u64> {
        match self {
            AnyStream::Http(stream) => stream.declared_size(),
            AnyStream::File(stream) => stream.declared_size(),
        }
    }

    fn transit_encoded(&self) -> bool {
        match self {
            AnyStream::Http(stream) => stream.transit_encoded(),
            AnyStream::File(stream) => stream.transit_encoded(),
        }
    }

    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, FetchError> {
        match self {
            AnyStream::Http(stream) => stream.next_chunk().await,
            AnyStream::File(stream) => stream.next_chunk().await,
        }
    }
}
