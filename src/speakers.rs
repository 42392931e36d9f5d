//! Speaker grouping - correlates word timestamps with speaker-label intervals

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Result, TranscriptError};
use crate::types::{SpeakerTurn, Utterance};

/// `[word, start, end]` as emitted in a result's `timestamps` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordTimestamp(pub String, pub f64, pub f64);

/// `[word, score]` as emitted in a result's `word_confidence` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordConfidence(pub String, pub f64);

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeakerLabel {
    pub from: f64,
    pub to: f64,
    pub speaker: u32,
    #[serde(default)]
    pub confidence: f64,
    #[serde(rename = "final", default)]
    pub is_final: bool,
}

/// Speaker labels indexed by the exact `from` offset of their interval.
#[derive(Debug, Clone, Default)]
pub struct SpeakerLabels {
    by_start: HashMap<u64, SpeakerLabel>,
}

impl SpeakerLabels {
    pub fn new(labels: impl IntoIterator<Item = SpeakerLabel>) -> Self {
        let by_start = labels
            .into_iter()
            .map(|label| (time_key(label.from), label))
            .collect();
        Self { by_start }
    }

    pub fn get(&self, start_time: f64) -> Option<&SpeakerLabel> {
        self.by_start.get(&time_key(start_time))
    }
}

// Offsets are matched exactly; only the sign of zero is folded.
fn time_key(seconds: f64) -> u64 {
    if seconds == 0.0 {
        0.0f64.to_bits()
    } else {
        seconds.to_bits()
    }
}

/// Splits a result's words into contiguous same-speaker turns, merging in the
/// per-word confidence. The two word arrays must agree index by index.
pub fn group_by_speaker(
    timestamps: &[WordTimestamp],
    word_confidence: &[WordConfidence],
    labels: &SpeakerLabels,
) -> Result<Vec<SpeakerTurn>> {
    if timestamps.len() != word_confidence.len() {
        return Err(TranscriptError::MalformedInput(format!(
            "found {} timestamps but {} word confidences",
            timestamps.len(),
            word_confidence.len()
        )));
    }

    let mut turns = Vec::new();
    let mut current: Option<SpeakerTurn> = None;
    for (index, (timestamp, confidence)) in timestamps.iter().zip(word_confidence).enumerate() {
        let WordTimestamp(word, start_time, _) = timestamp;
        let WordConfidence(confidence_word, score) = confidence;
        if word != confidence_word {
            return Err(TranscriptError::MalformedInput(format!(
                "timestamp/word_confidence mismatch at word {index}: {word} =/= {confidence_word}"
            )));
        }

        let speaker = labels
            .get(*start_time)
            .map(|label| label.speaker)
            .ok_or_else(|| {
                TranscriptError::MalformedInput(format!(
                    "no speaker label starts at {start_time} (word {index}: {word})"
                ))
            })?;

        let mut turn = match current.take() {
            Some(turn) if turn.speaker == speaker => turn,
            Some(finished) => {
                turns.push(finished);
                SpeakerTurn::empty(speaker)
            }
            None => SpeakerTurn::empty(speaker),
        };
        turn.utterances.push(Utterance {
            word: word.clone(),
            confidence: *score,
            start_time: *start_time,
        });
        current = Some(turn);
    }

    if let Some(last) = current {
        turns.push(last);
    }
    Ok(turns)
}
