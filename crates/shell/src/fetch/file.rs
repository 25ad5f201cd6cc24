use std::fs;
use std::io::Read;
use std::path::PathBuf;

use super::loader::{AssetResource, ByteStream, FetchError};

pub const DEFAULT_FILE_CHUNK_LEN: usize = 64 * 1024;

/// Local-disk asset, read in fixed-size chunks with a known total size.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
    chunk_len: usize,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            chunk_len: DEFAULT_FILE_CHUNK_LEN,
        }
    }

    pub fn with_chunk_len(mut self, chunk_len: usize) -> Self {
        self.chunk_len = chunk_len.max(1);
        self
    }
}

impl AssetResource for FileResource {
    type Stream = FileStream;

    async fn open(self) -> Result<FileStream, FetchError> {
        let origin = self.path.display().to_string();
        let file = fs::File::open(&self.path).map_err(|source| FetchError::Network {
            url: origin.clone(),
            source: Box::new(source),
        })?;
        let declared_size = file
            .metadata()
            .map_err(|source| FetchError::Network {
                url: origin.clone(),
                source: Box::new(source),
            })?
            .len();

        Ok(FileStream {
            origin,
            file,
            chunk_len: self.chunk_len,
            declared_size,
            bytes_read: 0,
        })
    }
}

pub struct FileStream {
    origin: String,
    file: fs::File,
    chunk_len: usize,
    declared_size: u64,
    bytes_read: u64,
}

impl ByteStream for FileStream {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn declared_size(&self) -> Option<u64> {
        Some(self.declared_size)
    }

    fn transit_encoded(&self) -> bool {
        false
    }

    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, FetchError> {
        let mut buf = vec![0u8; self.chunk_len];
        match self.file.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(read) => {
                buf.truncate(read);
                self.bytes_read += read as u64;
                Ok(Some(buf))
            }
            Err(source) => Err(FetchError::StreamRead {
                url: self.origin.clone(),
                bytes_read: self.bytes_read,
                source: Box::new(source),
            }),
        }
    }
}
