use crate::game::{Game, Rules};
use log::debug;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// What the program shows next, as decided by the screen currently showing
#[derive(Clone, Debug)]
pub(crate) enum AppState {
    Game(Game),
    Quit,
}

/// Play games with the given rules, one after another, until the user quits
pub(crate) fn run<B: Backend>(rules: Rules, mut terminal: Terminal<B>) -> io::Result<()> {
    let mut state = AppState::Game(Game::new(rules));
    while let AppState::Game(ref mut game) = state {
        terminal.draw(|frame| game.draw(frame))?;
        if let Some(next) = game.process_input()? {
            state = next;
        }
    }
    debug!("Quitting");
    Ok(())
}
