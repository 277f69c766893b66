// Rust guideline compliant 2026-10-18

//! Buildboard CLI
//!
//! Command-line front end for the buildboard dashboard services.

use buildboard_app::{AppError, DataDir};
use buildboard_cli::commands::{build::BuildAction, check::CheckTarget, resource::ResourceAction};
use buildboard_cli::output_mode::{is_json_output, set_json_output};
use buildboard_cli::{commands, create_formatter, logging, Session};
use buildboard_core::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = ".buildboard";

#[derive(Parser, Debug)]
#[command(
    name = "bbd",
    version,
    about = "Buildboard: track Path of Exile builds and resource links",
    after_help = "Examples:\n  bbd build add \"Tornado Shot\" --game poe1 --pob https://pobb.in/abc123\n  bbd build ls --filter active --search tornado\n  bbd build open bld-1a2b\n  bbd resource hide 2\n  bbd check resource Craft --url not-a-url\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Data directory holding the JSONL files and config.toml
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// User to act as (overrides config)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Log level: error, warn, info, debug (overrides config)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Manage builds
    Build {
        #[command(subcommand)]
        action: BuildAction,
    },

    /// Manage resource links
    Resource {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Validate a draft without saving it
    Check {
        #[command(subcommand)]
        target: CheckTarget,
    },
}

fn run(cli: Cli) -> anyhow::Result<Option<String>> {
    set_json_output(cli.json);
    let Some(command) = cli.command else {
        return Ok(None);
    };

    let data_dir = DataDir::open(&cli.data_dir)?;
    let config = Session::load_config(&data_dir, cli.user, cli.log_level)?;
    let json = cli.json || config.output_format == OutputFormat::Json;
    set_json_output(json);
    logging::init_tracing(&config.log_level, json)?;

    let formatter = create_formatter(json);
    let output = match command {
        Commands::Build { action } => {
            let mut session = Session::new(&data_dir, config)?;
            commands::build::execute(action, &mut session, formatter.as_ref())?
        }
        Commands::Resource { action } => {
            let mut session = Session::new(&data_dir, config)?;
            commands::resource::execute(action, &mut session, formatter.as_ref())?
        }
        Commands::Check { target } => commands::check::execute(target, formatter.as_ref())?,
    };
    Ok(Some(output))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => println!("Use --help for usage information"),
        Err(error) => {
            let error = error.downcast::<AppError>()?;
            let formatter = create_formatter(is_json_output());
            if is_json_output() {
                println!("{}", formatter.format_error(&error));
            } else {
                eprintln!("{}", formatter.format_error(&error));
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
