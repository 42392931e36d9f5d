use crate::types::{ChunkConfig, FormattedChunk};

const RAW_SEPARATOR: &str = " ";

/// Accumulates (raw, markup) pairs and seals a chunk whenever the pending raw
/// length becomes strictly greater than the configured maximum.
#[derive(Debug, Clone)]
pub struct ChunkAccumulator {
    config: ChunkConfig,
    chunks: Vec<FormattedChunk>,
    current_length: usize,
    current_raw: Vec<String>,
    current_html: Vec<String>,
}

impl ChunkAccumulator {
    pub fn new(config: ChunkConfig) -> Self {
        Self {
            config,
            chunks: Vec::new(),
            current_length: 0,
            current_raw: Vec::new(),
            current_html: Vec::new(),
        }
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self::new(ChunkConfig::new(max_length))
    }

    pub fn max_length(&self) -> usize {
        self.config.max_length
    }

    /// Length is counted in characters of `raw` only; separators and markup
    /// never contribute.
    pub fn add(&mut self, raw: impl Into<String>, html: impl Into<String>) {
        let raw = raw.into();
        self.current_length += raw.chars().count();
        self.current_raw.push(raw);
        self.current_html.push(html.into());
        if self.current_length > self.config.max_length {
            let chunk = self.freeze_chunk();
            self.chunks.push(chunk);
            self.reset_pending();
        }
    }

    /// Sealed chunks plus the pending one, if it holds any raw text.
    pub fn chunks(&self) -> Vec<FormattedChunk> {
        let mut chunks = self.chunks.clone();
        if self.current_length > 0 {
            chunks.push(self.freeze_chunk());
        }
        chunks
    }

    pub fn into_chunks(mut self) -> Vec<FormattedChunk> {
        if self.current_length > 0 {
            let chunk = self.freeze_chunk();
            self.chunks.push(chunk);
        }
        self.chunks
    }

    pub fn sealed_count(&self) -> usize {
        self.chunks.len()
    }

    fn freeze_chunk(&self) -> FormattedChunk {
        FormattedChunk {
            raw: self.current_raw.join(RAW_SEPARATOR),
            html: self.current_html.concat(),
        }
    }

    fn reset_pending(&mut self) {
        self.current_length = 0;
        self.current_raw.clear();
        self.current_html.clear();
    }
}

impl Default for ChunkAccumulator {
    fn default() -> Self {
        Self::new(ChunkConfig::default())
    }
}
