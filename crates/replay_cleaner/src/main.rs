mod discovery;
mod error;
mod process;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::discovery::InputFile;
use crate::error::Error;
use crate::process::{process_batch, process_document};
use crate::settings::{FileConfig, Settings};

#[derive(Debug, Parser)]
#[command(name = "replay-cleaner")]
#[command(about = "Turn captured session HTML logs into deduplicated replay scripts")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Directory scanned for `*.html` session logs.
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,

    /// Directory replay scripts are written to (created if missing).
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Optional TOML config; flags take precedence over its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter (e.g. `info`, `session_replay=debug`). Falls back to `RUST_LOG`, then `info`.
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Process the most recently modified session log.
    Latest,
    /// Process every session log in the input directory.
    All,
    /// Process one session log by path.
    File {
        /// Path to the `.html` session log.
        path: PathBuf,
    },
    /// List session logs, newest first.
    List,
    /// Process the N-th entry of `list` (1-based).
    Select {
        /// Entry number as printed by `list`.
        number: usize,
    },
}

const DEFAULT_LOG_FILTER: &str = "info";

/// Flag wins over `RUST_LOG`; an unset or blank `RUST_LOG` means the default.
fn log_filter_directive(flag: Option<String>, env: Option<String>) -> String {
    flag.or_else(|| env.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn init_logging(flag: Option<String>) -> Result<(), Error> {
    let directive = log_filter_directive(flag, std::env::var("RUST_LOG").ok());
    let env_filter =
        tracing_subscriber::EnvFilter::try_new(&directive).map_err(|err| Error::LogFilter {
            filter: directive.clone(),
            reason: err.to_string(),
        })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

fn load_settings(global: GlobalArgs) -> Result<Settings, Error> {
    let file = match global.config.as_deref() {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    Ok(Settings::resolve(file, global.input_dir, global.output_dir))
}

fn run(mut cli: Cli) -> Result<(), Error> {
    init_logging(cli.global.log_level.take())?;
    let settings = load_settings(cli.global)?;

    match cli.command {
        Command::File { path } => {
            process_document(&path, &settings)?;
        }
        Command::Latest => {
            let files = discovery::discover_inputs(&settings.input_dir)?;
            info!(count = files.len(), "found session logs");
            if let Some(file) = discovery::latest(files) {
                process_document(&file.path, &settings)?;
            }
        }
        Command::All => {
            let files = discovery::discover_inputs(&settings.input_dir)?;
            info!(count = files.len(), "found session logs");
            process_batch(files.iter().map(|f| f.path.as_path()), &settings);
        }
        Command::List => {
            let files = discovery::discover_inputs(&settings.input_dir)?;
            for (idx, file) in discovery::newest_first(files).iter().enumerate() {
                println!("{}. {}", idx + 1, file.display_name());
            }
        }
        Command::Select { number } => {
            let files = discovery::discover_inputs(&settings.input_dir)?;
            let file: InputFile = discovery::select(files, number)?;
            process_document(&file.path, &settings)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_prefers_flag_then_env_then_default() {
        assert_eq!(
            log_filter_directive(Some("debug".to_string()), Some("warn".to_string())),
            "debug"
        );
        assert_eq!(log_filter_directive(None, Some("warn".to_string())), "warn");
        assert_eq!(log_filter_directive(None, Some("  ".to_string())), "info");
        assert_eq!(log_filter_directive(None, None), "info");
    }
}
