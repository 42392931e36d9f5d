//! Provider normalizers - turn each upstream transcript shape into
//! (raw, markup) pairs for the chunk accumulator

pub mod gcs;
pub mod html;
pub mod watson;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, TranscriptError};

pub(crate) fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| TranscriptError::io(path, err))
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = read_source(path)?;
    serde_json::from_str(&raw).map_err(|err| TranscriptError::json(path, err))
}
