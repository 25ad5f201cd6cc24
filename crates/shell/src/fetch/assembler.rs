use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
#[error("stream delivered {received} bytes but declared {declared}")]
pub struct DeclaredSizeExceeded {
    pub declared: u64,
    pub received: u64,
}

/// Accumulates stream chunks into one contiguous buffer. The strategy is
/// fixed at construction: a declared size with no transit encoding gets a
/// preallocated buffer written in place; anything else collects chunks and
/// concatenates once the stream ends.
#[derive(Debug)]
pub struct StreamAssembler {
    strategy: Strategy,
    loaded: u64,
}

#[derive(Debug)]
enum Strategy {
    Preallocated { buf: Vec<u8>, total: u64 },
    Growable { chunks: Vec<Vec<u8>> },
}

impl StreamAssembler {
    pub fn new(declared_size: Option<u64>, transit_encoded: bool) -> Self {
        let strategy = match declared_size {
            Some(total) if !transit_encoded => Strategy::Preallocated {
                buf: vec![0u8; total as usize],
                total,
            },
            _ => Strategy::Growable { chunks: Vec::new() },
        };
        debug!(
            declared_size,
            transit_encoded,
            strategy = strategy.name(),
            "assembler_strategy_selected"
        );
        Self {
            strategy,
            loaded: 0,
        }
    }

    pub fn loaded(&self) -> u64 {
        self.loaded
    }

    pub fn push_chunk(
        &mut self,
        chunk: Vec<u8>,
        on_progress: &mut impl FnMut(u64, Option<u64>),
    ) -> Result<(), DeclaredSizeExceeded> {
        match &mut self.strategy {
            Strategy::Preallocated { buf, total } => {
                let start = self.loaded as usize;
                let end = start + chunk.len();
                if end as u64 > *total {
                    return Err(DeclaredSizeExceeded {
                        declared: *total,
                        received: self.loaded + chunk.len() as u64,
                    });
                }
                buf[start..end].copy_from_slice(&chunk);
                self.loaded = end as u64;
                on_progress(self.loaded, Some(*total));
            }
            Strategy::Growable { chunks } => {
                self.loaded += chunk.len() as u64;
                on_progress(self.loaded, None);
                chunks.push(chunk);
            }
        }
        Ok(())
    }

    pub fn finish(self, on_progress: &mut impl FnMut(u64, Option<u64>)) -> Vec<u8> {
        match self.strategy {
            Strategy::Preallocated { buf, .. } => buf,
            Strategy::Growable { chunks } => {
                let total: u64 = chunks.iter().map(|chunk| chunk.len() as u64).sum();
                let mut body = Vec::with_capacity(total as usize);
                for chunk in chunks {
                    body.extend_from_slice(&chunk);
                    // Second pass: now that the total is known, let the caller
                    // render a 0-100% fill while the copy proceeds.
                    on_progress(body.len() as u64, Some(total));
                }
                body
            }
        }
    }
}

impl Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Preallocated { .. } => "preallocated",
            Strategy::Growable { .. } => "growable",
        }
    }
}
