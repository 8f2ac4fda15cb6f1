use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pwd_strength_check::{
    InputSource, JsonRenderer, LineSource, OutputFormat, Renderer, Session, SessionConfig,
    TextRenderer,
};

#[derive(Parser)]
#[command(
    name = "pwd-strength",
    about = "Score password strength and suggest improvements",
    version
)]
struct Cli {
    /// Word that ends the session (case-insensitive)
    #[arg(long)]
    sentinel: Option<String>,

    /// Output format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Read passwords from a file, one per line, instead of stdin
    #[arg(long)]
    file: Option<PathBuf>,

    /// Analyze empty input instead of rejecting it
    #[arg(long)]
    allow_empty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(sentinel) = &cli.sentinel {
        config = match config.with_sentinel(sentinel) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        };
    }
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }
    let interactive = cli.file.is_none()
        && io::stdin().is_terminal()
        && config.format == OutputFormat::Text;
    config = config
        .with_allow_empty(cli.allow_empty)
        .with_interactive(interactive);

    let mut source: Box<dyn InputSource> = match &cli.file {
        Some(path) => match LineSource::open(path) {
            Ok(source) => Box::new(source),
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(LineSource::stdin()),
    };

    let renderer: Box<dyn Renderer> = match config.format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    };

    let session = Session::new(config, renderer);
    let mut stdout = io::stdout().lock();
    match session.run(source.as_mut(), &mut stdout) {
        Ok(summary) => {
            tracing::info!(
                analyzed = summary.analyzed,
                rejected = summary.rejected,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
