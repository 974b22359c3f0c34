mod config;
mod console;
mod input;

use clap::Parser;
use common::{log, logger};
use std::path::PathBuf;

use config::{Config, get_config_manager, get_config_path};
use console::ConsoleSession;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against an unbeatable computer")]
struct Args {
    /// YAML configuration file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write diagnostic log lines to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = get_config_path(args.config);
    let config_manager = get_config_manager(config_path.clone());

    if args.init_config {
        config_manager.set_config(&Config::default())?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    let config = config_manager.get_config()?;

    if args.verbose || config.log.enabled {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            config.log.prefix.clone()
        };
        logger::init_logger(prefix);
    }
    log!("Loaded configuration from {}: {:?}", config_path.display(), config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock(), config.first_player);
    let status = session.run()?;
    log!("Session finished: {:?}", status);

    Ok(())
}
