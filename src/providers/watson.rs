//! IBM Watson speech-to-text results: word timestamps are grouped into
//! speaker turns and each word is styled by its confidence.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use super::read_json;
use crate::chunking::ChunkAccumulator;
use crate::error::{Result, TranscriptError};
use crate::render::{escape_text, format_timestamp, render_word};
use crate::speakers::{group_by_speaker, SpeakerLabel, SpeakerLabels, WordConfidence, WordTimestamp};
use crate::types::{ChunkConfig, FormattedChunk, SpeakerNames, SpeakerTurn};

#[derive(Debug, Clone, Deserialize)]
pub struct WatsonResponse {
    pub results: Vec<WatsonResult>,
    pub speaker_labels: Vec<SpeakerLabel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatsonResult {
    pub alternatives: Vec<WatsonAlternative>,
    #[serde(rename = "final")]
    pub is_final: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatsonAlternative {
    pub transcript: String,
    #[serde(default)]
    pub confidence: f64,
    pub timestamps: Vec<WordTimestamp>,
    pub word_confidence: Vec<WordConfidence>,
}

pub fn process_watson_transcript(
    source_files: &[PathBuf],
    speakers: &SpeakerNames,
    config: ChunkConfig,
) -> Result<Vec<FormattedChunk>> {
    let mut accumulator = ChunkAccumulator::new(config);
    for path in source_files {
        let response: WatsonResponse = read_json(path)?;
        debug!(
            path = ?path,
            results = response.results.len(),
            speaker_labels = response.speaker_labels.len(),
            "loaded Watson results"
        );
        add_results(&mut accumulator, response, speakers)?;
    }
    Ok(accumulator.into_chunks())
}

pub fn add_results(
    accumulator: &mut ChunkAccumulator,
    response: WatsonResponse,
    speakers: &SpeakerNames,
) -> Result<()> {
    let labels = SpeakerLabels::new(response.speaker_labels);
    for (index, result) in response.results.iter().enumerate() {
        let alternative = validate_result(index, result)?;
        let turns = group_by_speaker(
            &alternative.timestamps,
            &alternative.word_confidence,
            &labels,
        )
        .map_err(|err| match err {
            TranscriptError::MalformedInput(detail) => {
                TranscriptError::MalformedInput(format!("result {index}: {detail}"))
            }
            other => other,
        })?;
        for turn in &turns {
            accumulator.add(turn.raw_text(), render_turn(turn, speakers));
        }
    }
    Ok(())
}

/// A usable result has exactly one alternative and is marked final.
fn validate_result(index: usize, result: &WatsonResult) -> Result<&WatsonAlternative> {
    let alternative = result.alternatives.first().ok_or_else(|| {
        TranscriptError::MalformedInput(format!("result {index} has no alternatives"))
    })?;
    if result.alternatives.len() > 1 {
        return Err(TranscriptError::ProtocolViolation(format!(
            "found {} alternatives for result {index}: {}",
            result.alternatives.len(),
            alternative.transcript
        )));
    }
    if !result.is_final {
        return Err(TranscriptError::ProtocolViolation(format!(
            "found non-final result {index}: {}",
            alternative.transcript
        )));
    }
    Ok(alternative)
}

pub fn render_turn(turn: &SpeakerTurn, speakers: &SpeakerNames) -> String {
    let words = turn
        .utterances
        .iter()
        .map(|utterance| render_word(&utterance.word, utterance.confidence))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        r#"<p><span class="speaker-name">{}</span> (<span class="speaker-timestamp">{}</span>): {}</p>"#,
        escape_text(&speakers.display_name(turn.speaker)),
        format_timestamp(turn.start_time()),
        words
    )
}
