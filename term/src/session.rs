use std::io::{self, BufRead, Write};

use sweeper_core::{Frontend, Game, Intent, MineGenerator};

use crate::command::{Command, HELP};
use crate::render::Terminal;

/// Reads commands line by line until `quit` or end of input.
pub fn run<G, R, W>(game: &mut Game<G>, input: R, terminal: &mut Terminal<W>) -> anyhow::Result<()>
where
    G: MineGenerator,
    R: BufRead,
    W: Write,
{
    terminal.render(game.board(), game.state())?;
    terminal.prompt()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            terminal.prompt()?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => terminal.notice(HELP)?,
            Ok(Command::Board) => terminal.notice(game.board())?,
            Ok(Command::Play(intent)) => play(game, intent, terminal)?,
            Err(err) => terminal.notice(err)?,
        }
        terminal.prompt()?;
    }

    log::debug!("Session finished in state {:?}", game.state());
    Ok(())
}

fn play<G: MineGenerator, W: Write>(
    game: &mut Game<G>,
    intent: Intent,
    terminal: &mut Terminal<W>,
) -> io::Result<()> {
    let update = match game.dispatch(intent) {
        Ok(update) => update,
        Err(err) => {
            log::debug!("Rejected {:?}: {}", intent, err);
            return terminal.notice(format_args!("Cannot do that: {}", err));
        }
    };
    log::debug!("{:?} -> {:?}", intent, update);

    if update.has_update() {
        terminal.render(game.board(), game.state())?;
    } else if game.is_game_over() {
        terminal.notice("The game is over, `reset` to play again")?;
    }
    if update.is_finished() {
        terminal.announce(game.state())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use sweeper_core::{FixedMineGenerator, GameConfig, GameState};

    fn play_script(mines: &[(i16, i16)], script: &str) -> (Game<FixedMineGenerator>, String) {
        let config = GameConfig::new(3, 3, mines.len() as u32).unwrap();
        let mut game = Game::new(config, FixedMineGenerator::new(mines)).unwrap();
        let mut terminal = Terminal::new(Vec::new());

        run(&mut game, Cursor::new(script), &mut terminal).unwrap();

        (game, String::from_utf8(terminal.into_inner()).unwrap())
    }

    #[test]
    fn cascade_win_is_announced() {
        let (game, output) = play_script(&[(2, 2)], "open 0 0\nquit\n");

        assert_eq!(game.state(), GameState::Won);
        assert!(output.contains("You win!"));
    }

    #[test]
    fn mine_is_announced_and_further_moves_refused() {
        let (game, output) = play_script(&[(1, 1)], "o 1 1\no 0 0\n");

        assert_eq!(game.state(), GameState::Lost);
        assert!(output.contains("Game over!"));
        assert!(output.contains("The game is over"));
        assert!(!game.view((0, 0)).unwrap().is_open);
    }

    #[test]
    fn engine_and_parse_errors_do_not_stop_the_session() {
        let (game, output) = play_script(&[(2, 2)], "o -1 0\nf 1 1\no 1 1\nwhat\nf 0 0\n");

        assert!(output.contains("Cannot do that: Position out of bounds"));
        assert!(output.contains("Cannot do that: Cell is flagged, unflag it first"));
        assert!(output.contains("Unknown command `what`"));
        assert_eq!(game.flag_count(), 2);
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn reset_after_loss_reactivates() {
        let (game, _) = play_script(&[(1, 1)], "o 1 1\nreset\n");

        assert_eq!(game.state(), GameState::Active);
        assert!(game.board().iter_cells().all(|(_, cell)| !cell.is_open()));
    }
}
