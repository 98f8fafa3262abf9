use crate::board::{Board, MoveError, Position};
use crate::generation::{self, Difficulty, PatternType};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Generated,
    Playing,
    Solved,
}

/// A single playable game: the live board, the goal it is played
/// towards, and the accepted-move count. `Solved` is terminal; a new
/// game means a new `Game` value.
#[derive(Debug)]
pub struct Game {
    board: Board,
    target: Option<Board>,
    state: GameState,
    moves: u32,
}

impl Game {
    /// A classic numeric game: restore the reading-order arrangement.
    pub fn classic(size: usize, difficulty: Difficulty, seed: Option<u64>) -> Game {
        Game::from_board(generation::generate_puzzle(size, difficulty, seed), None)
    }

    /// A colour game: restore the generated target pattern.
    pub fn pattern(kind: PatternType, difficulty: Difficulty, seed: Option<u64>) -> Game {
        let puzzle = generation::generate_pattern_puzzle(kind, difficulty, seed);

        Game::from_board(puzzle.board, Some(puzzle.target))
    }

    /// Wraps an existing board, e.g. to resume a game. A board that
    /// already meets its goal starts in the terminal state.
    pub fn from_board(board: Board, target: Option<Board>) -> Game {
        let mut game = Game {
            board,
            target,
            state: GameState::Generated,
            moves: 0,
        };

        if game.goal_reached() {
            game.state = GameState::Solved;
        }

        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn target(&self) -> Option<&Board> {
        self.target.as_ref()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Accepted moves only; rejected slides leave the count untouched.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::Solved
    }

    /// Plays one slide. A rejected move leaves the board, the counter
    /// and the state exactly as they were.
    pub fn play(&mut self, target: Position) -> Result<GameState, MoveError> {
        if self.state == GameState::Solved {
            return Err(MoveError::Finished);
        }

        self.board = self.board.slide(target)?;
        self.moves += 1;

        self.state = if self.goal_reached() {
            GameState::Solved
        } else {
            GameState::Playing
        };

        Ok(self.state)
    }

    fn goal_reached(&self) -> bool {
        match &self.target {
            Some(target) => self.board.matches_pattern(target),
            None => self.board.is_solved(),
        }
    }
}
