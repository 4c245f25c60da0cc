use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use llmconf::{ConfigError, LlmConfig, Provider, ProviderSpec};

#[derive(Parser)]
#[command(
    name = "llmconf",
    version,
    about = "Resolve LLM provider, model and API key from the environment"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Output format.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON object
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and print the active LLM configuration
    Show {
        /// Load variables from this file instead of searching for .env
        #[arg(long)]
        env_file: Option<PathBuf>,
        /// Do not load any .env file
        #[arg(long, conflicts_with = "env_file")]
        no_dotenv: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List supported providers and their environment variables
    Providers {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Show {
            env_file,
            no_dotenv,
            format,
        }) => {
            if let Err(e) = run_show(env_file, no_dotenv, format) {
                eprintln!("llmconf: {e}");
                std::process::exit(2);
            }
        }
        Some(Commands::Providers { format }) => run_providers(format),
        None => {
            eprintln!("Usage: llmconf <command> [args]");
            eprintln!("Run `llmconf --help` for details.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run_show(env_file: Option<PathBuf>, no_dotenv: bool, format: Format) -> Result<(), ConfigError> {
    match env_file {
        Some(path) => {
            llmconf::load_env_file(&path)?;
        }
        None if !no_dotenv => {
            llmconf::load_dotenv()?;
        }
        None => {}
    }

    let config = llmconf::load_config_from_env()?;
    match format {
        Format::Text => print!("{}", format_config(&config)),
        Format::Json => print_json(&config),
    }
    Ok(())
}

/// One entry of `providers --format json`.
#[derive(Serialize)]
struct ProviderRow {
    provider: Provider,
    #[serde(flatten)]
    spec: &'static ProviderSpec,
}

fn run_providers(format: Format) {
    match format {
        Format::Text => {
            println!(
                "{:<10} {:<18} {:<16} DEFAULT MODEL",
                "PROVIDER", "API KEY VAR", "MODEL VAR"
            );
            for p in Provider::ALL {
                let spec = p.spec();
                println!(
                    "{:<10} {:<18} {:<16} {}",
                    p.as_str(),
                    spec.api_key_var,
                    spec.model_var,
                    spec.default_model
                );
            }
        }
        Format::Json => {
            let rows: Vec<ProviderRow> = Provider::ALL
                .into_iter()
                .map(|provider| ProviderRow {
                    provider,
                    spec: provider.spec(),
                })
                .collect();
            print_json(&rows);
        }
    }
}

fn format_config(config: &LlmConfig) -> String {
    format!(
        "provider: {}\nmodel:    {}\napi_key:  {}\n",
        config.provider(),
        config.model(),
        config.masked_api_key()
    )
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("llmconf: JSON serialization failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_about() {
    println!(
        "llmconf: LLM provider configuration resolver\n\
         ├─ version:    {}\n\
         ├─ author:     {}\n\
         ├─ source:     {}\n\
         └─ licence:    {} https://opensource.org/licenses/{}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_LICENSE"),
        env!("CARGO_PKG_LICENSE"),
    );
}
