//! redactar - CLI tool to turn traverse records into Spanish survey prose.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use redaccion_topografica::{
    redact_file_as, DocumentStyle, DocumentWriter, InputFormat, PlainTextWriter,
};

/// Input format override.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Comma-separated lines, eight fields each
    Lines,
    /// CSV table with an est_i,est_f,NS,grados,minutos,segundos,EW,distancia header
    Csv,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Lines => InputFormat::Lines,
            FormatArg::Csv => InputFormat::Csv,
        }
    }
}

/// Render land-survey traverse records as Spanish sentences.
#[derive(Parser, Debug)]
#[command(name = "redactar")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file (.csv with header row, anything else as comma-separated lines)
    #[arg(short, long)]
    input: PathBuf,

    /// Output document path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document heading
    #[arg(short, long)]
    title: Option<String>,

    /// Force the input format instead of detecting it from the extension
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Print sentences and errors as JSON, don't write a document
    #[arg(long)]
    preview: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let format = args
        .format
        .map(InputFormat::from)
        .unwrap_or_else(|| InputFormat::from_path(&args.input));

    info!("Processing: {} ({})", args.input.display(), format);

    let result = redact_file_as(&args.input, format)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    info!(
        "Rendered {} sentence(s), {} error(s)",
        result.sentences.len(),
        result.errors.len()
    );

    for err in &result.errors {
        warn!("{}", err);
    }

    // Preview mode
    if args.preview {
        let json = serde_json::to_string_pretty(&result)?;
        println!("{}", json);
        return Ok(());
    }

    let document = result.into_document(args.title.as_deref())?;

    let writer = PlainTextWriter;
    let bytes = writer.write_document(&document, &DocumentStyle::default())?;

    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_file_name(format.output_stem());
        path.set_extension(writer.file_extension());
        path
    });

    std::fs::write(&output_path, &bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}
