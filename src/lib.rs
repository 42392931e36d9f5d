pub mod chunking;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod providers;
pub mod render;
pub mod speakers;
pub mod types;

pub use chunking::ChunkAccumulator;
pub use error::{ErrorKind, TranscriptError};
pub use types::{ChunkConfig, FormattedChunk, Provider, ProviderKind, TranscriptSource};
