//! Output writers - search-index JSON documents and the browsable HTML page

use std::fs;
use std::path::{Path, PathBuf};

use askama::Template;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TranscriptError};
use crate::types::{FormattedChunk, TranscriptSource};

/// Destination for the artifacts produced from one transcript.
pub trait DocumentWriter {
    fn write_index_document(
        &mut self,
        source: &TranscriptSource,
        chunk_id: usize,
        total_chunks: usize,
        chunk: &FormattedChunk,
    ) -> Result<()>;

    fn write_html_document(&mut self, source: &TranscriptSource, markup: &str) -> Result<()>;
}

/// One search-index document per chunk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexDocument<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_uri: Option<String>,
    pub title: &'a str,
    pub chunk_id: usize,
    pub total_chunks: usize,
    pub content: &'a str,
}

#[derive(Template)]
#[template(path = "transcript.html")]
struct TranscriptPage<'a> {
    title: &'a str,
    content: &'a str,
}

/// Chunk markup concatenated in order, each inside an indexed container.
pub fn render_chunk_markup(chunks: &[FormattedChunk]) -> String {
    chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| {
            format!(
                r#"<div class="transcript-chunk" id="chunk-{index}" data-chunk-id="{index}">{}</div>"#,
                chunk.html
            )
        })
        .collect()
}

pub fn render_html_document(title: &str, markup: &str) -> Result<String> {
    let page = TranscriptPage {
        title,
        content: markup,
    };
    Ok(page.render()?)
}

/// Writes `<html_dir>/<id>.html` and `<index_dir>/<id>-<chunk>.json`.
#[derive(Debug, Clone)]
pub struct FsDocumentWriter {
    html_dir: PathBuf,
    index_dir: PathBuf,
    static_base_uri: Option<String>,
}

impl FsDocumentWriter {
    pub fn new(html_dir: impl Into<PathBuf>, index_dir: impl Into<PathBuf>) -> Self {
        Self {
            html_dir: html_dir.into(),
            index_dir: index_dir.into(),
            static_base_uri: None,
        }
    }

    pub fn with_static_base_uri(mut self, base: Option<String>) -> Self {
        self.static_base_uri = base;
        self
    }

    pub fn create_dirs(&self) -> Result<()> {
        for dir in [&self.html_dir, &self.index_dir] {
            fs::create_dir_all(dir).map_err(|err| TranscriptError::io(dir, err))?;
        }
        Ok(())
    }

    pub fn html_path(&self, id: &str) -> PathBuf {
        self.html_dir.join(format!("{id}.html"))
    }

    pub fn index_path(&self, id: &str, chunk_id: usize) -> PathBuf {
        self.index_dir.join(format!("{id}-{chunk_id}.json"))
    }

    fn static_uri(&self, id: &str) -> Option<String> {
        self.static_base_uri
            .as_deref()
            .map(|base| format!("{base}{id}.html"))
    }
}

impl DocumentWriter for FsDocumentWriter {
    fn write_index_document(
        &mut self,
        source: &TranscriptSource,
        chunk_id: usize,
        total_chunks: usize,
        chunk: &FormattedChunk,
    ) -> Result<()> {
        let document = IndexDocument {
            id: &source.id,
            static_uri: self.static_uri(&source.id),
            title: &source.title,
            chunk_id,
            total_chunks,
            content: &chunk.raw,
        };
        let path = self.index_path(&source.id, chunk_id);
        let json = serde_json::to_string(&document).map_err(|err| TranscriptError::json(&path, err))?;
        write_file(&path, &json)
    }

    fn write_html_document(&mut self, source: &TranscriptSource, markup: &str) -> Result<()> {
        let document = render_html_document(&source.title, markup)?;
        write_file(&self.html_path(&source.id), &document)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|err| TranscriptError::io(path, err))?;
    debug!(path = ?path, bytes = contents.len(), "wrote output file");
    Ok(())
}
