//! Pipeline driver - dispatches each transcript to its normalizer and hands
//! the chunks to a [`DocumentWriter`]

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::error::TranscriptError;
use crate::output::{render_chunk_markup, DocumentWriter};
use crate::providers::{gcs, html, watson};
use crate::types::{ChunkConfig, FormattedChunk, Provider, TranscriptSource};

/// What to do when one transcript fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the batch at the first failing transcript.
    #[default]
    Abort,
    /// Log the failure and move on to the next transcript.
    Continue,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub chunk: ChunkConfig,
    pub failure_policy: FailurePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFailure {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: Vec<String>,
    pub failed: Vec<TranscriptFailure>,
    pub chunks_written: usize,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs the normalizer matching the transcript's provider.
pub fn chunk_transcript(
    source: &TranscriptSource,
    config: ChunkConfig,
) -> Result<Vec<FormattedChunk>, TranscriptError> {
    match &source.provider {
        Provider::Gcs { source_files } => gcs::process_gcs_transcript(source_files, config),
        Provider::Watson {
            source_files,
            speakers,
        } => watson::process_watson_transcript(source_files, speakers, config),
        Provider::Html { source_files } => html::process_html_transcript(source_files, config),
    }
}

/// Chunks one transcript and writes its index documents and HTML page.
/// Returns the number of chunks written.
pub fn process_transcript<W: DocumentWriter>(
    source: &TranscriptSource,
    config: ChunkConfig,
    writer: &mut W,
) -> Result<usize, TranscriptError> {
    let chunks = chunk_transcript(source, config)?;
    let total = chunks.len();
    if total == 0 {
        warn!(transcript = %source.id, "transcript produced no chunks");
    }
    for (index, chunk) in chunks.iter().enumerate() {
        writer.write_index_document(source, index, total, chunk)?;
    }
    writer.write_html_document(source, &render_chunk_markup(&chunks))?;
    Ok(total)
}

pub fn run_batch<W: DocumentWriter>(
    sources: &[TranscriptSource],
    options: PipelineOptions,
    writer: &mut W,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for source in sources {
        info!(
            transcript = %source.id,
            provider = %source.provider.kind(),
            files = source.provider.source_files().len(),
            "processing transcript"
        );
        match process_transcript(source, options.chunk, writer) {
            Ok(chunks) => {
                info!(transcript = %source.id, chunks, "transcript complete");
                report.processed.push(source.id.clone());
                report.chunks_written += chunks;
            }
            Err(err) => match options.failure_policy {
                FailurePolicy::Abort => {
                    return Err(err)
                        .with_context(|| format!("failed to process transcript '{}'", source.id));
                }
                FailurePolicy::Continue => {
                    let message = format!("{:#}", anyhow::Error::from(err));
                    error!(transcript = %source.id, error = %message, "transcript failed; continuing");
                    report.failed.push(TranscriptFailure {
                        id: source.id.clone(),
                        message,
                    });
                }
            },
        }
    }
    Ok(report)
}
