//! stl2obj: convert an STL file into the indexed mesh document used by the
//! preview renderer.

use std::path::{Path, PathBuf};

use clap::Parser;
use stl_convert::{convert_file, ConvertError, PipelineConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stl2obj")]
#[command(
    version,
    about = "Convert binary or ASCII STL into a welded, smooth-shaded mesh document"
)]
struct Cli {
    /// STL file to read.
    input: PathBuf,

    /// Output path. Writes to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pipeline configuration (JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep every triangle corner as its own vertex with flat face normals.
    #[arg(long)]
    no_weld: bool,

    /// Center the mesh and scale its largest extent to this size.
    #[arg(long, value_name = "SIZE")]
    fit: Option<f64>,

    /// Print decode and build statistics as JSON to stderr.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    let base = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    let config = apply_overrides(cli, base);
    config.validate()?;

    let conversion = convert_file(&cli.input, &config)?;

    if cli.stats {
        let report = serde_json::to_string_pretty(&conversion.report())
            .map_err(|e| ConvertError::Config(e.to_string()))?;
        eprintln!("{report}");
    }

    let document = conversion.require_geometry()?;
    match &cli.output {
        Some(path) => write_output(path, &document.text),
        None => {
            print!("{}", document.text);
            Ok(())
        }
    }
}

/// Command-line flags take precedence over the configuration file.
fn apply_overrides(cli: &Cli, mut config: PipelineConfig) -> PipelineConfig {
    if cli.no_weld {
        config.builder.weld = false;
    }
    if let Some(size) = cli.fit {
        config.builder.fit_size = Some(size);
    }
    config
}

fn write_output(path: &Path, text: &str) -> Result<(), ConvertError> {
    std::fs::write(path, text).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}
