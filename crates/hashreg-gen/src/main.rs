use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hashreg_core::config::{CliOverrides, HashregConfig, OutputFormat};
use hashreg_core::errors::{ErrorCode, GenerateError};
use hashreg_gen::output::emit_artifact;
use hashreg_gen::Generator;

/// Generate the hashcat supported hash types registry from module sources.
#[derive(Debug, Parser)]
#[command(name = "hashreg-gen", version, about)]
struct Args {
    /// hashcat `src/modules` directory (overrides HASHCAT_SRC_PATH)
    #[arg(long, value_name = "DIR")]
    source: Option<String>,

    /// Destination of the generated artifact
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Artifact format
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Follow symbolic links while scanning
    #[arg(long)]
    follow_symlinks: bool,

    /// Directory containing hashreg.toml
    #[arg(long, value_name = "DIR", default_value = ".")]
    config_dir: PathBuf,

    /// Print the artifact to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Rust,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Rust => OutputFormat::Rust,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            source_root: self.source.clone(),
            output_path: self.output.clone(),
            output_format: self.format.map(OutputFormat::from),
            follow_symlinks: self.follow_symlinks.then_some(true),
        }
    }
}

fn main() -> ExitCode {
    hashreg_core::tracing::init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.diagnostic());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), GenerateError> {
    let config = HashregConfig::load(&args.config_dir, Some(&args.overrides()))?;
    let generator = Generator::new(config);

    if args.dry_run {
        let (artifact, report) = generator.dry_run()?;
        emit_artifact(&mut std::io::stdout().lock(), &artifact, "<stdout>")?;
        tracing::info!(entries = report.entries, "dry run complete");
        return Ok(());
    }

    generator.run()?;
    Ok(())
}
