use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Active -> Won
/// - Active -> Lost
///
/// Only a reset leaves a final state, and it starts a fresh session in `Active`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Moves are accepted
    Active,
    /// Every safe cell was opened
    Won,
    /// A mine was opened
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Active
    }
}

/// One game session: the board it exclusively owns and where the game stands.
#[derive(Clone, Debug)]
pub struct Game<G = RandomMineGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    state: GameState,
}

impl Game<RandomMineGenerator> {
    /// Random layout reproducible from `seed`, following resets included.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomMineGenerator::from_seed(seed))
    }

    /// Random layout from caller-supplied entropy. The seed is logged so the game can be replayed with
    /// [`Game::with_seed`].
    pub fn random(config: GameConfig, entropy_seed: u64) -> Result<Self> {
        log::info!("Starting {:?} game with seed {}", config, entropy_seed);
        Self::with_seed(config, entropy_seed)
    }
}

impl<G: MineGenerator> Game<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let board = Self::build_board(&config, &mut generator)?;
        Ok(Self {
            config,
            generator,
            board,
            state: Default::default(),
        })
    }

    fn build_board(config: &GameConfig, generator: &mut G) -> Result<Board> {
        config.validate()?;
        let mut board = Board::new(config.height, config.width)?;
        board.place_mines(config.mines, generator)?;
        board.compute_content();
        log::debug!("New board {:?}", config);
        Ok(board)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_final()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.board.flag_count()
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count()) - i64::from(self.flag_count())
    }

    pub fn view(&self, coords: Coord2) -> Result<CellView> {
        self.board.cell_at(coords).map(CellView::from)
    }

    /// Opens a cell, ignored once the game has ended.
    pub fn handle_open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        if self.is_game_over() {
            return Ok(OpenOutcome::NoChange);
        }

        let outcome = self.board.open(coords)?;
        match outcome {
            OpenOutcome::Won => self.mark_ended(GameState::Won),
            OpenOutcome::Lost => self.mark_ended(GameState::Lost),
            _ => {}
        }
        Ok(outcome)
    }

    /// Toggles the flag on a closed cell, ignored once the game has ended or when the cell is open.
    pub fn handle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        if self.is_game_over() || self.board.cell_at(coords)?.is_open() {
            return Ok(FlagOutcome::NoChange);
        }

        self.board.toggle_flag(coords)?;
        Ok(FlagOutcome::Changed)
    }

    /// Replaces the board with a fresh one of the same configuration.
    pub fn reset(&mut self) -> Result<()> {
        self.board = Self::build_board(&self.config, &mut self.generator)?;
        self.state = GameState::Active;
        Ok(())
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<Update> {
        Ok(match intent {
            Intent::Open(coords) => Update::Opened(self.handle_open(coords)?),
            Intent::ToggleFlag(coords) => Update::Flagged(self.handle_flag(coords)?),
            Intent::Reset => {
                self.reset()?;
                Update::Reset
            }
        })
    }

    fn mark_ended(&mut self, state: GameState) {
        log::debug!("Game ended: {:?}", state);
        self.state = state;
    }
}
