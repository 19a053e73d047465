mod app;
mod config;
mod offline;
mod presenter;
mod state;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::GameMode;
use tictactoe_common::{log, logger};
use tokio::sync::mpsc;

use app::ConsoleApp;
use config::{Config, get_config_manager};
use offline::local_game_task;
use presenter::ConsolePresenter;
use state::ClientCommand;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Play X against the computer
    Computer,
    /// Two players share the keyboard
    Human,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Computer => GameMode::HumanVsComputer,
            ModeArg::Human => GameMode::HumanVsHuman,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or an unbeatable computer")]
struct Args {
    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the mode-selection screen
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Pause before the computer replies
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    #[arg(long)]
    log_prefix: Option<String>,

    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.mode = Some(mode.into());
        }
        if let Some(delay) = self.bot_delay_ms {
            config.bot_move_delay_ms = delay;
        }
        if let Some(prefix) = &self.log_prefix {
            config.log.prefix = Some(prefix.clone());
        }
    }
}

fn spawn_input_reader(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if command_tx.send(ClientCommand::Input(line)).is_err() {
                return;
            }
        }
        let _ = command_tx.send(ClientCommand::Quit);
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
    }

    logger::init_logger(&config.log.target, config.log.prefix.clone())?;
    log!(
        "Console started with config {}",
        config_manager.content_provider().path().display()
    );
    if args.save_config {
        log!("Config saved");
    }

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    spawn_input_reader(command_tx.clone());

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = command_tx.send(ClientCommand::Quit);
        }
    });

    let mut presenter = ConsolePresenter::new(io::stdout());
    let app = ConsoleApp::new(config.mode);
    let bot_move_delay = Duration::from_millis(config.bot_move_delay_ms);
    local_game_task(app, &mut presenter, command_rx, bot_move_delay).await;

    log!("Console session finished");
    Ok(())
}
