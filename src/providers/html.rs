//! Pre-rendered HTML transcripts: top-level paragraphs are re-emitted as-is.

use std::path::PathBuf;

use scraper::{ElementRef, Html};
use tracing::debug;

use super::read_source;
use crate::chunking::ChunkAccumulator;
use crate::error::{Result, TranscriptError};
use crate::render::paragraph;
use crate::types::{ChunkConfig, FormattedChunk};

pub fn process_html_transcript(
    source_files: &[PathBuf],
    config: ChunkConfig,
) -> Result<Vec<FormattedChunk>> {
    let path = match source_files {
        [path] => path,
        [] => {
            return Err(TranscriptError::MalformedInput(
                "HTML transcripts need a source file".to_string(),
            ))
        }
        _ => {
            return Err(TranscriptError::ProtocolViolation(format!(
                "HTML transcripts take exactly one source file, found {}",
                source_files.len()
            )))
        }
    };
    let markup = read_source(path)?;
    let mut accumulator = ChunkAccumulator::new(config);
    let paragraphs = add_paragraphs(&mut accumulator, &markup);
    debug!(path = ?path, paragraphs, "loaded HTML transcript");
    Ok(accumulator.into_chunks())
}

/// Feeds every top-level `<p>` of `markup` to the accumulator and returns how
/// many were found. Anything else at the top level is skipped.
pub fn add_paragraphs(accumulator: &mut ChunkAccumulator, markup: &str) -> usize {
    let paragraphs = top_level_paragraphs(markup);
    let count = paragraphs.len();
    for text in paragraphs {
        let html = paragraph(&text);
        accumulator.add(text, html);
    }
    count
}

/// Detagged text of each top-level paragraph, in document order.
pub fn top_level_paragraphs(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    let Some(body) = document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body")
    else {
        return Vec::new();
    };
    body.children()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "p")
        .map(|element| element.text().collect::<String>())
        .collect()
}
