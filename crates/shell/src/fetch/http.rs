use reqwest::header::{HeaderMap, CONTENT_ENCODING, CONTENT_LENGTH};
use reqwest::{Client, Response};

use super::loader::{AssetResource, ByteStream, FetchError};

// Some storage backends strip content-length and report the stored size here
// instead.
const STORED_LENGTH_HEADER: &str = "x-goog-stored-content-length";

#[derive(Debug, Clone)]
pub struct HttpResource {
    client: Client,
    url: String,
}

impl HttpResource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl AssetResource for HttpResource {
    type Stream = HttpStream;

    async fn open(self) -> Result<HttpStream, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| FetchError::Network {
                url: self.url.clone(),
                source: Box::new(source),
            })?;

        let transit_encoded = response.headers().contains_key(CONTENT_ENCODING);
        let declared_size = declared_length(response.headers());
        Ok(HttpStream {
            url: self.url,
            response,
            declared_size,
            transit_encoded,
            bytes_read: 0,
        })
    }
}

pub struct HttpStream {
    url: String,
    response: Response,
    declared_size: Option<u64>,
    transit_encoded: bool,
    bytes_read: u64,
}

impl ByteStream for HttpStream {
    fn origin(&self) -> &str {
        &self.url
    }

    fn declared_size(&self) -> Option<u64> {
        self.declared_size
    }

    fn transit_encoded(&self) -> bool {
        self.transit_encoded
    }

    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, FetchError> {
        match self.response.chunk().await {
            Ok(Some(bytes)) => {
                self.bytes_read += bytes.len() as u64;
                Ok(Some(bytes.to_vec()))
            }
            Ok(None) => Ok(None),
            Err(source) => Err(FetchError::StreamRead {
                url: self.url.clone(),
                bytes_read: self.bytes_read,
                source: Box::new(source),
            }),
        }
    }
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    header_u64(headers, CONTENT_LENGTH.as_str())
        .or_else(|| header_u64(headers, STORED_LENGTH_HEADER))
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}
