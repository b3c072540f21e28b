use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Active,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Active
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    /// Whether the board needs to be redrawn
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the board needs to be redrawn
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Owns the current board of one game and replaces it after every move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    state: GameState,
}

#[derive(Deserialize)]
struct RawSession {
    config: GameConfig,
    board: Board,
    state: GameState,
}

impl TryFrom<RawSession> for GameSession {
    type Error = GameError;

    fn try_from(raw: RawSession) -> Result<Self> {
        let session = Self::with_board(raw.board);
        if session.config != raw.config || session.state != raw.state {
            log::warn!(
                "Saved session claims {:?} {:?}, board gives {:?} {:?}",
                raw.config,
                raw.state,
                session.config,
                session.state
            );
            return Err(GameError::InconsistentState);
        }
        Ok(session)
    }
}

impl GameSession {
    /// Starts a game with randomly placed mines.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let board = Board::generate(config, RandomMinefieldGenerator::new(seed))?;
        Ok(Self::with_board(board))
    }

    /// Starts a game on a prepared board, e.g. one built from an explicit mine list.
    pub fn with_board(board: Board) -> Self {
        let config = GameConfig::new_unchecked(board.size(), board.mine_count());
        let state = Self::evaluate(&board);
        Self {
            config,
            board,
            state,
        }
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

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Mines minus marks, negative when the player marked more tiles than there are mines.
    pub fn mines_left(&self) -> isize {
        self.board.mine_count() as isize - self.board.marked_tiles_count() as isize
    }

    pub fn mark(&mut self, pos: Position) -> Result<MarkOutcome> {
        self.check_active()?;

        let board = self.board.mark_tile(pos)?;
        if board == self.board {
            return Ok(MarkOutcome::NoChange);
        }
        self.board = board;
        Ok(MarkOutcome::Changed)
    }

    pub fn reveal(&mut self, pos: Position) -> Result<RevealOutcome> {
        self.check_active()?;

        let board = self.board.reveal_tile(pos)?;
        if board == self.board {
            return Ok(RevealOutcome::NoChange);
        }

        self.state = Self::evaluate(&board);
        let outcome = match self.state {
            GameState::Active => {
                self.board = board;
                RevealOutcome::Revealed
            }
            GameState::Won => {
                log::debug!("Game won");
                self.board = board;
                RevealOutcome::Won
            }
            GameState::Lost => {
                log::debug!("Game lost at {:?}", pos);
                self.board = board.expose_mines();
                RevealOutcome::HitMine
            }
        };
        Ok(outcome)
    }

    /// Throws away the current board and deals a new one with the same config.
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        *self = Self::new(self.config, seed)?;
        log::debug!("Game restarted with seed {}", seed);
        Ok(())
    }

    fn evaluate(board: &Board) -> GameState {
        if board.check_lose() {
            GameState::Lost
        } else if board.check_win() {
            GameState::Won
        } else {
            GameState::Active
        }
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
