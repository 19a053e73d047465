use std::time::Duration;
use tictactoe_common::log;
use tokio::sync::mpsc;

use crate::app::{AppAction, ConsoleApp};
use crate::presenter::ScreenPresenter;
use crate::state::ClientCommand;

/// Drives the shell until the player quits or input ends. Returns the app so
/// callers can inspect where the session stopped.
pub async fn local_game_task<P: ScreenPresenter>(
    mut app: ConsoleApp,
    presenter: &mut P,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    bot_move_delay: Duration,
) -> ConsoleApp {
    presenter.show_screen(&app);

    loop {
        let Some(command) = command_rx.recv().await else {
            break;
        };

        let line = match command {
            ClientCommand::Input(line) => line,
            ClientCommand::Quit => {
                log!("Quit requested");
                break;
            }
        };

        let step = app.handle_input(&line);
        if let Some(notice) = &step.notice {
            presenter.show_notice(notice);
        }

        match step.action {
            AppAction::Quit => break,
            AppAction::Continue => {}
            AppAction::ComputerTurn => {
                presenter.show_screen(&app);
                if !bot_move_delay.is_zero() {
                    tokio::time::sleep(bot_move_delay).await;
                }
                match app.play_computer_turn() {
                    Ok(index) => presenter.show_computer_move(index),
                    Err(e) => {
                        log!("Computer move failed: {}", e);
                        presenter.show_notice(&e.to_string());
                    }
                }
            }
        }

        presenter.show_screen(&app);
    }

    app
}
