//! # Dulce Terminal Storefront
//!
//! A line-oriented front end for the storefront cart: the shopper types
//! commands, the cart table is redrawn after each change, and `buy` posts
//! the order to the configured endpoint.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Dulce Terminal                                   │
//! │                                                                         │
//! │  stdin line ──► commands::parse ──► Input                               │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                          app::Storefront::handle                        │
//! │                                       │                                 │
//! │                 ┌─────────────────────┼─────────────────────┐           │
//! │                 ▼                     ▼                     ▼           │
//! │        CheckoutSession::      CheckoutSession::     CheckoutSession::   │
//! │        dispatch               press_product         checkout            │
//! │                 │                     │                     │           │
//! │                 └─────────────────────┼─────────────────────┘           │
//! │                                       ▼                                 │
//! │                        render::render_cart ──► stdout                   │
//! │                                                                         │
//! │  Logs go to stderr so the table on stdout stays readable.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (logging)
//! 3. Load configuration (file, environment, `--endpoint`)
//! 4. Build the HTTP transport and the checkout session
//! 5. Read commands until `quit` or end of input

pub mod app;
pub mod commands;
pub mod render;

use clap::Parser;
use dulce_checkout::{CheckoutConfig, CheckoutError, CheckoutSession, HttpOrderTransport};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::{Reply, Storefront};

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "dulce")]
#[command(version, about = "Dulce storefront in the terminal")]
pub struct Cli {
    /// Path to checkout.toml (default: the platform config directory)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Order endpoint, overriding file and environment
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Runs the terminal storefront until `quit` or end of input.
///
/// ## Errors
/// Configuration that cannot be loaded or validated, and stdin/stdout
/// failures. Order failures are shown to the shopper, not returned.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing();

    let config = load_config(&cli, |key| std::env::var(key).ok())?;
    info!(endpoint = %config.endpoint.url, store = %config.store.name, "Starting Dulce storefront");

    let transport = HttpOrderTransport::new(&config)?;
    let session = CheckoutSession::from_config(&config, transport);
    let mut storefront = Storefront::new(session, config.store.name.clone());

    println!("{}", storefront.banner());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let reply = match commands::parse(&line) {
            Ok(Some(input)) => storefront.handle(input).await,
            Ok(None) => continue,
            Err(err) => Reply::Text(err.to_string()),
        };

        match reply {
            Reply::Text(text) => println!("{text}"),
            Reply::Quit => break,
        }
    }

    info!("Storefront closed");
    Ok(())
}

/// Layers `--endpoint` on top of file and environment configuration.
///
/// A malformed `--config` file is an error. Problems with the file in the
/// default location only log a warning and fall back to built-in settings.
/// `env` stands in for the process environment; `--endpoint` takes the place
/// of `DULCE_ENDPOINT_URL` so a bad variable cannot fail a good flag.
fn load_config(
    cli: &Cli,
    env: impl Fn(&str) -> Option<String>,
) -> Result<CheckoutConfig, CheckoutError> {
    let lookup = |key: &str| match (&cli.endpoint, key) {
        (Some(url), "DULCE_ENDPOINT_URL") => Some(url.clone()),
        _ => env(key),
    };

    let mut config = match &cli.config {
        Some(path) => CheckoutConfig::load_with_env(Some(path.clone()), lookup)?,
        None => CheckoutConfig::load_with_env(None, lookup).unwrap_or_else(|e| {
            warn!("Failed to load checkout config: {}. Using defaults.", e);
            CheckoutConfig::default()
        }),
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.url = endpoint.clone();
        config.validate()?;
    }

    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every cart command
/// - `RUST_LOG=dulce=trace` - Trace for dulce crates only
/// - Default: warnings, plus info from dulce crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,dulce=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "dulce",
            "--config",
            "/tmp/checkout.toml",
            "--endpoint",
            "https://shop.example/api/buy",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/checkout.toml")));
        assert_eq!(cli.endpoint.as_deref(), Some("https://shop.example/api/buy"));
    }

    /// A config path that never exists, so the platform file is not read.
    fn no_file() -> Option<PathBuf> {
        Some(std::env::temp_dir().join("dulce-terminal-missing.toml"))
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_endpoint_flag_overrides_config() {
        let cli = Cli {
            config: no_file(),
            endpoint: Some("https://shop.example/api/buy".to_string()),
        };
        let config = load_config(&cli, no_env).unwrap();
        assert_eq!(config.endpoint.url, "https://shop.example/api/buy");
    }

    #[test]
    fn test_bad_endpoint_flag_is_rejected() {
        let cli = Cli {
            config: no_file(),
            endpoint: Some("ftp://shop.example".to_string()),
        };
        assert!(load_config(&cli, no_env).is_err());
    }

    #[test]
    fn test_missing_explicit_config_uses_defaults() {
        let cli = Cli {
            config: no_file(),
            endpoint: None,
        };
        let config = load_config(&cli, no_env).unwrap();
        assert_eq!(config, CheckoutConfig::default());
    }

    #[test]
    fn test_endpoint_flag_wins_over_environment() {
        let env = |key: &str| match key {
            "DULCE_ENDPOINT_URL" => Some("ftp://env.example".to_string()),
            "DULCE_STORE_NAME" => Some("Dulce Norte".to_string()),
            _ => None,
        };

        let cli = Cli {
            config: no_file(),
            endpoint: None,
        };
        assert!(matches!(load_config(&cli, env), Err(CheckoutError::InvalidUrl(_))));

        let cli = Cli {
            config: no_file(),
            endpoint: Some("https://shop.example/api/buy".to_string()),
        };
        let config = load_config(&cli, env).unwrap();
        assert_eq!(config.endpoint.url, "https://shop.example/api/buy");
        assert_eq!(config.store.name, "Dulce Norte");
    }
}
