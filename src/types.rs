//! Core types for the transcript chunking pipeline

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TranscriptError;

/// Default maximum raw length of a chunk, in characters
pub const DEFAULT_CHUNK_MAX_LENGTH: usize = 1024;

/// Configuration for chunking strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    /// A chunk is sealed once its raw length is strictly greater than this
    pub max_length: usize,
}

impl ChunkConfig {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_MAX_LENGTH)
    }
}

/// A sealed unit of output: raw text for the search index plus rendered markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedChunk {
    pub raw: String,
    pub html: String,
}

/// Upstream transcript formats understood by the normalizers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Google Cloud Speech JSON: results with ranked alternatives
    Gcs,
    /// IBM Watson speech-to-text JSON: word timestamps plus speaker labels
    Watson,
    /// Pre-rendered HTML with top-level paragraphs
    Html,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Gcs => "api/gcs",
            ProviderKind::Watson => "api/watson",
            ProviderKind::Html => "html",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = TranscriptError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "api/gcs" => Ok(ProviderKind::Gcs),
            "api/watson" => Ok(ProviderKind::Watson),
            "html" => Ok(ProviderKind::Html),
            other => Err(TranscriptError::UnsupportedProviderKind(other.to_string())),
        }
    }
}

/// Display names keyed by the provider's numeric speaker id, as a string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerNames(BTreeMap<String, String>);

impl SpeakerNames {
    pub fn new(names: BTreeMap<String, String>) -> Self {
        Self(names)
    }

    /// Falls back to `Speaker <id>` when the config does not name the speaker.
    pub fn display_name(&self, speaker: u32) -> String {
        self.0
            .get(&speaker.to_string())
            .cloned()
            .unwrap_or_else(|| format!("Speaker {speaker}"))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Provider-specific inputs for one transcript job
#[derive(Debug, Clone, PartialEq)]
pub enum Provider {
    Gcs {
        source_files: Vec<PathBuf>,
    },
    Watson {
        source_files: Vec<PathBuf>,
        speakers: SpeakerNames,
    },
    Html {
        source_files: Vec<PathBuf>,
    },
}

impl Provider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Gcs { .. } => ProviderKind::Gcs,
            Provider::Watson { .. } => ProviderKind::Watson,
            Provider::Html { .. } => ProviderKind::Html,
        }
    }

    pub fn source_files(&self) -> &[PathBuf] {
        match self {
            Provider::Gcs { source_files }
            | Provider::Watson { source_files, .. }
            | Provider::Html { source_files } => source_files,
        }
    }
}

/// One transcript job read from the configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSource {
    pub id: String,
    pub title: String,
    pub provider: Provider,
}

/// A single recognized word with its confidence and start offset
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub word: String,
    pub confidence: f64,
    pub start_time: f64, // seconds
}

/// A contiguous run of utterances attributed to one speaker
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerTurn {
    pub speaker: u32,
    pub utterances: Vec<Utterance>,
}

impl SpeakerTurn {
    pub(crate) fn empty(speaker: u32) -> Self {
        Self {
            speaker,
            utterances: Vec::new(),
        }
    }

    /// Start offset of the first word in the turn.
    pub fn start_time(&self) -> f64 {
        self.utterances
            .first()
            .map(|utterance| utterance.start_time)
            .unwrap_or(0.0)
    }

    /// The turn's words joined by single spaces, unescaped.
    pub fn raw_text(&self) -> String {
        self.utterances
            .iter()
            .map(|utterance| utterance.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
