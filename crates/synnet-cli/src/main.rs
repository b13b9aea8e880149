//! Synnet CLI - Command line interface for the lexical relation engine

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::session;
use config::{config_file_path, Config};
use output::{format_response, OutputFormat};
use synnet_protocol::{Command, CommandHandler};

#[derive(Parser)]
#[command(name = "synnet")]
#[command(author, version, about = "Synsets, hypernyms and lowest common ancestors")]
pub struct Cli {
    /// Config file
    #[arg(short, long, env = "SYNNET_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format: text, json (default from config)
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read commands interactively from stdin (default)
    Repl,
    /// Run a script of commands
    Run(session::RunArgs),
    /// Run the given command lines
    Exec(session::ExecArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

/// Application context with the engine and output settings
pub struct AppContext {
    pub handler: CommandHandler,
    pub format: OutputFormat,
    pub prompt: String,
}

impl AppContext {
    /// Build the engine and run the configured preload
    ///
    /// With `strict` a failed preload is an error. Otherwise it is logged and
    /// the session starts with an empty engine.
    pub fn new(cli: &Cli, config: &Config, strict: bool) -> anyhow::Result<Self> {
        let mut handler = CommandHandler::new()?;

        if let Some((synsets, hypernyms)) = config.preload() {
            tracing::debug!("Preloading {:?} and {:?}", synsets, hypernyms);
            let loaded = handler.execute(Command::Load {
                synsets: synsets.to_path_buf(),
                hypernyms: hypernyms.to_path_buf(),
            });
            let failure = match loaded {
                Ok(response) if !response.is_error() => None,
                Ok(_) => Some("files did not validate".to_string()),
                Err(e) => Some(e.to_string()),
            };

            if let Some(reason) = failure {
                let message = format!(
                    "Failed to preload {} and {}: {}",
                    synsets.display(),
                    hypernyms.display(),
                    reason
                );
                if strict {
                    anyhow::bail!(message);
                }
                tracing::warn!("{}", message);
            }
        }

        let format: OutputFormat = cli.format.as_deref().unwrap_or(&config.format).into();

        Ok(Self {
            handler,
            format,
            prompt: config.prompt.clone(),
        })
    }

    /// Run one command line and render its response
    pub fn execute(&mut self, line: &str) -> anyhow::Result<String> {
        let response = self.handler.handle(line)?;
        Ok(format_response(&response, self.format))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting synnet CLI");

    let config_path = cli.config_path();
    if let Some(Commands::Config(args)) = &cli.command {
        return commands::config::run(args, &config_path);
    }

    let config = Config::load(&config_path);
    let interactive = matches!(cli.command, None | Some(Commands::Repl));
    let mut ctx = AppContext::new(&cli, &config, !interactive)?;

    match &cli.command {
        Some(Commands::Run(args)) => session::run_script(args, &mut ctx)?,
        Some(Commands::Exec(args)) => session::run_exec(args, &mut ctx)?,
        Some(Commands::Repl) | Some(Commands::Config(_)) | None => session::run_repl(&mut ctx)?,
    }

    Ok(())
}
