use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use secrecy::SecretString;
use signing_cli::CliConfig;
use signing_cli::command::{self, SigningKeyType, ValidateArgs};
use signing_cli::dto::ErrorResponseRestDTO;
use signing_cli::error::CliError;
use signing_core::SigningCore;
use signing_core::config::core_config::{self, AppConfig};
use signing_core::model::signature_format::SignatureFormat;
use tokio::io::AsyncReadExt;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Produce a signing payload from a signing request (JSON, `-` for stdin)
    Produce {
        #[arg(value_name = "REQUEST")]
        request: PathBuf,
    },
    /// Validate a signed artifact against the validation backend
    Validate {
        #[arg(value_name = "ARTIFACT")]
        artifact: PathBuf,
        #[arg(short, long)]
        format: SignatureFormat,
        #[arg(long)]
        file_name: Option<String>,
        #[arg(long)]
        correlation_id: Option<String>,
        /// Single attempt, transient failures are not retried
        #[arg(long)]
        no_retry: bool,
    },
    /// Compute the request signature of a signing request, as the trusted backend does
    Sign {
        #[arg(value_name = "REQUEST")]
        request: PathBuf,
        #[arg(long, value_enum, default_value = "hmac")]
        key_type: SigningKeyType,
        /// Base64 encoded key, read from REQUEST_SIGNING_KEY when omitted
        #[arg(long, env = "REQUEST_SIGNING_KEY", hide_env_values = true)]
        key: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<CliConfig> =
        core_config::AppConfig::from_files(&config_files).expect("Failed creating config");

    initialize_tracing(&app_config.app);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed creating runtime");

    match runtime.block_on(run(cli.command, app_config)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "Command failed");
            match serde_json::to_string_pretty(&ErrorResponseRestDTO::from(&error)) {
                Ok(response) => println!("{response}"),
                Err(error) => tracing::error!(%error, "Failed serializing error response"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, app_config: AppConfig<CliConfig>) -> Result<String, CliError> {
    match command {
        Command::Produce { request } => {
            let core = SigningCore::new(app_config.core, None)?;
            let request = read_input(&request).await?;
            let payload = command::produce(&core, &request).await?;
            Ok(serde_json::to_string_pretty(&payload)?)
        }
        Command::Validate {
            artifact,
            format,
            file_name,
            correlation_id,
            no_retry,
        } => {
            let core = SigningCore::new(app_config.core, None)?;
            let content = read_input(&artifact).await?;
            let result = command::validate(
                &core,
                content,
                ValidateArgs {
                    format,
                    file_name,
                    correlation_id,
                    retry: !no_retry,
                },
            )
            .await?;
            Ok(serde_json::to_string_pretty(&result)?)
        }
        Command::Sign {
            request,
            key_type,
            key,
        } => {
            let request = read_input(&request).await?;
            let signed = command::sign(&request, key_type, &SecretString::from(key))?;
            Ok(serde_json::to_string_pretty(&signed)?)
        }
    }
}

async fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        tokio::io::stdin().read_to_end(&mut buffer).await?;
        return Ok(buffer);
    }

    Ok(tokio::fs::read(path).await?)
}

fn initialize_tracing(config: &CliConfig) {
    // Create a filter based on the log level
    let default_level = config.trace_level.as_deref().unwrap_or("info");
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_level))
        .expect("Failed to create env filter");

    let tracing_layer = tracing_subscriber::registry().with(filter);

    // stdout carries command output, logs go to stderr
    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    };
}
