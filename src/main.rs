use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use expert_consult::connector::api::{Container, ContainerConfig, Router};
use expert_consult::connector::web;
use expert_consult::{Commands, DEFAULT_SECRETS_FILE};

#[derive(Parser)]
#[command(name = "expert-consult")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// dotenv file loaded before the API key is resolved
    #[arg(long, global = true, default_value = ".env")]
    env_file: String,

    /// TOML secret store consulted when OPENAI_API_KEY is not in the environment
    #[arg(long, global = true, default_value = DEFAULT_SECRETS_FILE)]
    secrets_file: String,

    /// OpenAI-compatible API root (defaults to $OPENAI_BASE_URL, then api.openai.com)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Give up on an LLM call after this many seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Answer with an offline mock instead of calling the API
    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ContainerConfig {
        env_file: PathBuf::from(expand_tilde(&cli.env_file)),
        secrets_file: PathBuf::from(expand_tilde(&cli.secrets_file)),
        base_url: cli.base_url,
        timeout: cli.timeout_secs.map(Duration::from_secs),
        mock_llm: cli.mock_llm,
    };
    let container = Container::new(config)?;
    debug!("Startup banner: {:?}", container.banner());

    match cli.command {
        Commands::Serve { bind } => {
            let banner = container.banner();
            if banner.is_error() {
                eprintln!("{}", banner.message());
            }
            web::serve(Arc::new(container), &bind).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
