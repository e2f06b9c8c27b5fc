use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use msg_code_rust::config::AppConfig;
use msg_code_rust::logging::init_logging;
use msg_code_rust::output::write_messages;
use msg_code_rust::validation::InputValidator;
use msg_code_rust::verification::CodeExtractor;
use msg_code_rust::{CommandClipboard, CopyOutcome, MessageService, MsgCodeError, OutputFormat, ReadOptions, SqliteRepository};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (toml, yaml or json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the Messages store (defaults to ~/Library/Messages/chat.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the verification code from the newest message to the clipboard
    Code {
        /// Also print the code to stdout
        #[arg(long)]
        print: bool,
    },
    /// Print recent messages
    List {
        /// Number of newest messages to print (0 prints all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Sender label for your own messages
        #[arg(long)]
        self_label: Option<String>,

        /// Prefix each body with its date
        #[arg(long)]
        human_readable: bool,

        /// Output format (txt, csv or json)
        #[arg(short, long)]
        format: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(db) = &cli.db {
        config.store.path = db.to_string_lossy().into_owned();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    config.validate()?;

    let log_file = config.logging.file_path.as_ref().map(PathBuf::from);
    let _log_guard = init_logging(
        Some(&config.get_log_level()),
        log_file.as_deref(),
        config.logging.format == "json",
    )?;

    let store_path = config.resolve_store_path()?;
    info!(path = %store_path.display(), "Using message store");

    let repository = SqliteRepository::open(&store_path)?;
    let extractor = CodeExtractor::new(config.code.min_digits, config.code.max_digits)?;
    let service = MessageService::with_extractor(repository, extractor);

    match cli.command.unwrap_or(Commands::Code { print: false }) {
        Commands::Code { print } => copy_code(&config, &service, print),
        Commands::List {
            limit,
            self_label,
            human_readable,
            format,
        } => {
            let self_label = self_label.unwrap_or_else(|| config.output.self_label.clone());
            InputValidator::validate_self_label(&self_label)?;
            let options = ReadOptions {
                limit: limit.unwrap_or(config.store.limit),
                self_label,
                human_readable: human_readable || config.output.human_readable,
            };
            let format: OutputFormat = format.as_deref().unwrap_or(&config.output.format).parse()?;
            list_messages(&service, &options, format)
        },
    }
}

/// Copy the newest verification code; clipboard failures are logged, not fatal
fn copy_code(config: &AppConfig, service: &MessageService<SqliteRepository>, print: bool) -> Result<()> {
    let clipboard = CommandClipboard::new(config.clipboard.command.clone(), config.clipboard.args.clone());

    match service.copy_latest_code(&clipboard) {
        Ok(CopyOutcome::Copied(code)) => {
            if print {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{code}")?;
            }
            Ok(())
        },
        Ok(CopyOutcome::NoMessages) => Ok(()),
        Err(MsgCodeError::Clipboard(message)) => {
            error!("{message}");
            Ok(())
        },
        Err(e) => Err(e.into()),
    }
}

/// Print messages to stdout
fn list_messages(service: &MessageService<SqliteRepository>, options: &ReadOptions, format: OutputFormat) -> Result<()> {
    let messages = service.list_messages(options)?;
    let mut stdout = std::io::stdout().lock();
    write_messages(&mut stdout, &messages, format)?;
    Ok(())
}
