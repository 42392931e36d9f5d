use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TranscriptError};
use crate::types::{Provider, ProviderKind, SpeakerNames, TranscriptSource};

#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    transcripts: Vec<RawTranscript>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawTranscript {
    id: String,
    title: String,
    #[serde(rename = "type")]
    kind: String,
    source_files: Vec<PathBuf>,
    #[serde(default)]
    extra: Option<RawExtra>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawExtra {
    #[serde(default)]
    speakers: BTreeMap<String, String>,
}

/// Transcript jobs listed in a configuration file
#[derive(Debug, Clone)]
pub struct TranscriptConfig {
    pub path: PathBuf,
    pub transcripts: Vec<TranscriptSource>,
}

impl TranscriptConfig {
    /// Source paths are resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| TranscriptError::io(path, err))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let transcripts = parse_transcripts(&raw, base)
            .map_err(|err| match err {
                TranscriptError::Json { source, .. } => TranscriptError::json(path, source),
                other => other,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            transcripts,
        })
    }
}

pub fn parse_transcripts(raw: &str, base: &Path) -> Result<Vec<TranscriptSource>> {
    let config: RawConfig =
        serde_json::from_str(raw).map_err(|err| TranscriptError::json("<config>", err))?;
    config
        .transcripts
        .into_iter()
        .map(|entry| entry.into_source(base))
        .collect()
}

impl RawTranscript {
    fn into_source(self, base: &Path) -> Result<TranscriptSource> {
        let kind: ProviderKind = self.kind.parse()?;
        let source_files = self
            .source_files
            .into_iter()
            .map(|file| base.join(file))
            .collect();
        let provider = match kind {
            ProviderKind::Gcs => Provider::Gcs { source_files },
            ProviderKind::Watson => Provider::Watson {
                source_files,
                speakers: SpeakerNames::new(self.extra.unwrap_or_default().speakers),
            },
            ProviderKind::Html => Provider::Html { source_files },
        };
        Ok(TranscriptSource {
            id: self.id,
            title: self.title,
            provider,
        })
    }
}
