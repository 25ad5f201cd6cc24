mod assembler;
mod file;
mod http;
mod loader;

pub use assembler::{DeclaredSizeExceeded, StreamAssembler};
#[cfg(test)]
pub(crate) use loader::testing;
pub use file::{FileResource, FileStream, DEFAULT_FILE_CHUNK_LEN};
pub use http::{HttpResource, HttpStream};
pub use loader::{load, AssetResource, ByteStream, FetchError};
