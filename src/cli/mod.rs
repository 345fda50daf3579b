//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments, resolves configuration, and
//! dispatches to the interactive chat or one of the one-shot commands.

pub mod provider_list;
pub mod say;


use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::provider_list::list_providers;
use crate::cli::say::run_say;
use crate::core::app::{App, AppInitConfig};
use crate::core::builtin_providers::{builtin_providers, find_builtin_provider};
use crate::core::config::{Config, API_BASE_URL_ENV};
use crate::ui::chat_loop::run_chat;
use crate::ui::theme::Theme;
use crate::utils::logging::init_tracing;

#[derive(Parser)]
#[command(name = "palaver")]
#[command(version)]
#[command(about = "A terminal chat interface for a provider/model generation endpoint")]
#[command(
    long_about = "Palaver is a full-screen terminal chat interface. Pick a provider and model, \
type a message, and each submission is sent to the backend's /generate endpoint.\n\n\
Environment Variables:\n\
  API_BASE_URL      Backend base URL (defaults to http://localhost:8000)\n\n\
Controls:\n\
  Tab/Shift+Tab     Move between provider, model and input\n\
  Left/Right        Change the focused selector\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a newline\n\
  Ctrl+C/Esc        Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Provider to select at startup
    #[arg(short = 'p', long, global = true, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Model to select at startup (any name is accepted)
    #[arg(short = 'm', long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Backend base URL, overriding API_BASE_URL and the config file
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send a single prompt and print the reply
    Say {
        /// Prompt text (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// List the available providers and their models
    Providers,
}

/// Build the startup parameters from parsed flags, loaded config and the
/// environment's base URL.
pub(crate) fn resolve_init_config(
    args: &Args,
    config: &Config,
    env_base_url: Option<&str>,
) -> Result<AppInitConfig, String> {
    if let Some(provider) = args.provider.as_deref() {
        if find_builtin_provider(provider).is_none() {
            let known: Vec<&str> = builtin_providers().iter().map(|p| p.id.as_str()).collect();
            return Err(format!(
                "Unknown provider '{provider}'. Available providers: {}",
                known.join(", ")
            ));
        }
    }

    Ok(AppInitConfig {
        api_base_url: config.resolve_api_base_url(args.api_url.as_deref(), env_base_url),
        provider: args.provider.clone(),
        model: args.model.clone(),
    })
}

fn build_app(args: &Args) -> Result<App, Box<dyn Error>> {
    let config = Config::load(args.config.as_deref())?;
    let env_base_url = std::env::var(API_BASE_URL_ENV).ok();

    let init = match resolve_init_config(args, &config, env_base_url.as_deref()) {
        Ok(init) => init,
        Err(message) => {
            eprintln!("❌ {message}");
            std::process::exit(1);
        }
    };
    tracing::info!(base_url = %init.api_base_url, "resolved API base URL");

    let theme = config
        .theme
        .as_deref()
        .map(Theme::from_name)
        .unwrap_or_else(Theme::dark_default);

    Ok(App::new(init, theme))
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.debug_log.as_deref())?;

    tokio::runtime::Runtime::new()?.block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command.clone().unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let app = build_app(&args)?;
            run_chat(app).await
        }
        Commands::Say { prompt } => {
            let app = build_app(&args)?;
            run_say(prompt, app).await
        }
        Commands::Providers => {
            list_providers();
            Ok(())
        }
    }
}
