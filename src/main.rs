use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_chunker::cli::Args;
use transcript_chunker::config::TranscriptConfig;
use transcript_chunker::output::FsDocumentWriter;
use transcript_chunker::pipeline::run_batch;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    args.validate()
        .context("Failed to validate command-line arguments")?;

    let config = TranscriptConfig::load(&args.config_path)
        .with_context(|| format!("Failed to load transcript config {:?}", args.config_path))?;
    info!(
        config = ?config.path,
        transcripts = config.transcripts.len(),
        max_chunk_length = args.max_chunk_length,
        "loaded transcript config"
    );

    let mut writer = FsDocumentWriter::new(&args.html_dir, &args.index_dir)
        .with_static_base_uri(args.static_base_uri.clone());
    writer
        .create_dirs()
        .context("Failed to create output directories")?;

    let report = run_batch(&config.transcripts, args.pipeline_options(), &mut writer)?;
    println!(
        "Processed {} transcript(s), wrote {} chunk document(s) under {:?}",
        report.processed.len(),
        report.chunks_written,
        args.index_dir
    );
    if !report.is_success() {
        for failure in &report.failed {
            eprintln!("   {}: {}", failure.id, failure.message);
        }
        bail!("{} transcript(s) failed", report.failed.len());
    }
    Ok(())
}
