//! Lanai - command-line front end.
//!
//! Builds a trie from words given on the command line or in a file, then
//! prints its projection or searches it.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use lanai_lib::config::{self, ConfigLoader, InputConfig, LanaiConfig, LogConfig};
use lanai_lib::data_structures::LanaiTrie;
use lanai_lib::error::{
    config::ConfigError, report_error, set_error_reporter, ErrorContext, LanaiError, LanaiResult,
    TracingErrorReporter,
};
use lanai_lib::input;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build a trie and print its projection
    Build {
        /// Words to insert
        words: Vec<String>,

        /// Read additional words from a file (.json array or one per line)
        #[clap(short, long, value_parser)]
        file: Option<PathBuf>,
    },

    /// Build a trie and look up a prefix in it
    Search {
        /// Prefix to look up
        prefix: String,

        /// Words to insert
        words: Vec<String>,

        /// Read additional words from a file (.json array or one per line)
        #[clap(short, long, value_parser)]
        file: Option<PathBuf>,

        /// List the keys below the prefix instead of printing the subtree
        #[clap(long)]
        complete: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Build { .. } => "build",
            Command::Search { .. } => "search",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so that
/// projections on stdout stay machine-readable.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Collects words from the command line followed by those in `file`.
fn collect_words(
    mut words: Vec<String>,
    file: Option<&Path>,
    input_config: &InputConfig,
) -> LanaiResult<Vec<String>> {
    if let Some(path) = file {
        words.extend(input::load_words(path, input_config)?);
    }
    Ok(words)
}

fn run(command: Command, loaded: Result<LanaiConfig, ConfigError>) -> LanaiResult<()> {
    match command {
        Command::Build { words, file } => {
            config::init_global_config(loaded?);
            let config = config::global_config();

            let trie: LanaiTrie = collect_words(words, file.as_deref(), &config.input)?
                .into_iter()
                .collect();
            info!(nodes = trie.node_count(), "trie built");

            trie.print_to(std::io::stdout().lock(), config.output.indent)?;
            Ok(())
        }
        Command::Search {
            prefix,
            words,
            file,
            complete,
        } => {
            config::init_global_config(loaded?);
            let config = config::global_config();

            let trie: LanaiTrie = collect_words(words, file.as_deref(), &config.input)?
                .into_iter()
                .collect();

            let mut stdout = std::io::stdout().lock();
            if complete {
                for key in trie.completions(&prefix)? {
                    writeln!(stdout, "{key}")?;
                }
            } else {
                let node = trie.search(&prefix)?;
                node.to_object().write_json(stdout, config.output.indent)?;
            }
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            loaded?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LanaiConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load();
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
    }

    set_error_reporter(Arc::new(TracingErrorReporter));

    let component = args.command.name();
    if let Err(e) = run(args.command, loaded) {
        report_error(ErrorContext::new(e, component));
        process::exit(1);
    }
}
