use super::{Board, Color, IllegalMove, Move, Outcome, Piece, Played, Role};
use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

/// The reason why a [`Move`] could not be played in a [`Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameError {
    #[display(fmt = "the game has ended with {}", _0)]
    #[from(ignore)]
    GameHasEnded(#[error(not(source))] Outcome),

    #[display(fmt = "it is not the turn of the {} player", _0)]
    #[from(ignore)]
    TurnOfTheOpponent(#[error(not(source))] Color),

    #[display(fmt = "the {} player cannot capture its own pieces", _0)]
    #[from(ignore)]
    CaptureOfOwnPiece(#[error(not(source))] Color),

    #[display(fmt = "{}", _0)]
    IllegalMove(IllegalMove),
}

/// Holds the state of a game of chess.
///
/// A game is over as soon as either king is captured.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
    last: Option<Played>,
    captures: [Vec<Piece>; 2],
    outcome: Option<Outcome>,
}

/// The standard starting arrangement with white to move.
impl Default for Game {
    fn default() -> Self {
        Game::new(Board::default(), Color::White)
    }
}

impl Game {
    /// Starts a game from an arbitrary [`Board`] with `turn` to move.
    pub fn new(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            last: None,
            captures: [Vec::new(), Vec::new()],
            outcome: None,
        }
    }

    /// The current piece placement.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The last move played, if any.
    pub fn last(&self) -> Option<Played> {
        self.last
    }

    /// The pieces captured by a [`Color`], in the order they were taken.
    pub fn captures(&self, c: Color) -> &[Piece] {
        &self.captures[c as usize]
    }

    /// The result of the game if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The pseudo-legal [`Move`]s available to the side to move.
    ///
    /// There are none once the game has ended.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        let side = (!self.is_over()).then_some(self.turn);
        side.into_iter().flat_map(move |c| self.board.moves(c))
    }

    /// Plays a [`Move`] for the side to move, returning the captured [`Piece`], if any.
    ///
    /// The move is not validated against the rules of movement.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn), err)]
    pub fn make(&mut self, m: Move) -> Result<Option<Piece>, GameError> {
        if let Some(o) = self.outcome {
            return Err(GameError::GameHasEnded(o));
        }

        let piece = self.board[m.whence()].ok_or(IllegalMove(m))?;

        if piece.color() != self.turn {
            return Err(GameError::TurnOfTheOpponent(piece.color()));
        }

        if matches!(self.board[m.whither()], Some(p) if p.color() == self.turn) {
            return Err(GameError::CaptureOfOwnPiece(self.turn));
        }

        let capture = self.board.make(m)?;
        self.last = Some(Played(m, piece, capture));

        if let Some(p) = capture {
            self.captures[self.turn as usize].push(p);
            debug!(captured = %p);

            if p.role() == Role::King {
                self.outcome = Some(Outcome::Regicide(self.turn));
                return Ok(capture);
            }
        }

        self.turn = !self.turn;
        Ok(capture)
    }
}
