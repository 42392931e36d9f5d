//! Google Cloud Speech results: one paragraph per result, using the most
//! confident alternative.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use super::read_json;
use crate::chunking::ChunkAccumulator;
use crate::error::{Result, TranscriptError};
use crate::render::paragraph;
use crate::types::{ChunkConfig, FormattedChunk};

#[derive(Debug, Clone, Deserialize)]
pub struct GcsResponse {
    pub results: Vec<GcsResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GcsResult {
    pub alternatives: Vec<GcsAlternative>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GcsAlternative {
    pub transcript: String,
    pub confidence: f64,
}

pub fn process_gcs_transcript(
    source_files: &[PathBuf],
    config: ChunkConfig,
) -> Result<Vec<FormattedChunk>> {
    let mut accumulator = ChunkAccumulator::new(config);
    for path in source_files {
        let response: GcsResponse = read_json(path)?;
        debug!(path = ?path, results = response.results.len(), "loaded GCS results");
        add_results(&mut accumulator, &response)?;
    }
    Ok(accumulator.into_chunks())
}

pub fn add_results(accumulator: &mut ChunkAccumulator, response: &GcsResponse) -> Result<()> {
    for (index, result) in response.results.iter().enumerate() {
        let best = best_alternative(result).ok_or_else(|| {
            TranscriptError::MalformedInput(format!("result {index} has no alternatives"))
        })?;
        accumulator.add(best.transcript.as_str(), paragraph(&best.transcript));
    }
    Ok(())
}

/// Highest-confidence alternative; on ties the earliest one wins.
pub fn best_alternative(result: &GcsResult) -> Option<&GcsAlternative> {
    let mut best: Option<&GcsAlternative> = None;
    for alternative in &result.alternatives {
        best = match best {
            Some(current) if alternative.confidence > current.confidence => Some(alternative),
            Some(current) => Some(current),
            None => Some(alternative),
        };
    }
    best
}
