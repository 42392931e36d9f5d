use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;

use crate::pipeline::{FailurePolicy, PipelineOptions};
use crate::types::{ChunkConfig, DEFAULT_CHUNK_MAX_LENGTH};

/// Converts speech transcripts into HTML pages and search-index documents
#[derive(Parser, Debug, Clone)]
#[command(name = "transcript-chunker")]
#[command(version, about = "Chunk speech transcripts for HTML display and search indexing", long_about = None)]
pub struct Args {
    /// Transcript configuration file (JSON with a `transcripts` array)
    #[arg(value_name = "CONFIG")]
    pub config_path: PathBuf,

    /// Directory where one HTML document per transcript is written
    #[arg(value_name = "HTML_DIR")]
    pub html_dir: PathBuf,

    /// Directory where one JSON document per chunk is written
    #[arg(value_name = "INDEX_DIR")]
    pub index_dir: PathBuf,

    /// Seal a chunk once its raw text exceeds this many characters
    #[arg(long, default_value_t = DEFAULT_CHUNK_MAX_LENGTH)]
    pub max_chunk_length: usize,

    /// Base URI of the published HTML documents, recorded in each index document
    #[arg(long, value_name = "URI")]
    pub static_base_uri: Option<String>,

    /// Log failing transcripts and continue with the rest of the batch
    #[arg(long)]
    pub keep_going: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.config_path.is_file(),
            "Config file does not exist: {:?}",
            self.config_path
        );
        ensure!(
            self.max_chunk_length > 0,
            "Max chunk length must be positive, got: {}",
            self.max_chunk_length
        );
        for dir in [&self.html_dir, &self.index_dir] {
            ensure!(
                !dir.exists() || dir.is_dir(),
                "Output path must be a directory: {:?}",
                dir
            );
        }
        Ok(())
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            chunk: ChunkConfig::new(self.max_chunk_length),
            failure_policy: if self.keep_going {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Abort
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_arguments_with_defaults() {
        let args = Args::try_parse_from(["transcript-chunker", "config.json", "html", "es"]).unwrap();
        assert_eq!(args.config_path, PathBuf::from("config.json"));
        assert_eq!(args.max_chunk_length, 1024);
        assert!(args.static_base_uri.is_none());
        let options = args.pipeline_options();
        assert_eq!(options.failure_policy, FailurePolicy::Abort);
        assert_eq!(options.chunk.max_length, 1024);
    }

    #[test]
    fn keep_going_switches_policy() {
        let args = Args::try_parse_from([
            "transcript-chunker",
            "config.json",
            "html",
            "es",
            "--keep-going",
            "--max-chunk-length",
            "5000",
        ])
        .unwrap();
        let options = args.pipeline_options();
        assert_eq!(options.failure_policy, FailurePolicy::Continue);
        assert_eq!(options.chunk.max_length, 5000);
    }

    #[test]
    fn rejects_zero_chunk_length() {
        let args = Args {
            config_path: PathBuf::from(file!()),
            html_dir: PathBuf::from("html"),
            index_dir: PathBuf::from("es"),
            max_chunk_length: 0,
            static_base_uri: None,
            keep_going: false,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn rejects_missing_config() {
        let args =
            Args::try_parse_from(["transcript-chunker", "/nonexistent/config.json", "html", "es"])
                .unwrap();
        assert!(args.validate().is_err());
    }
}
