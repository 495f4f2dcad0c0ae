use crate::chess::{Game, GameError, Outcome, Played};
use derive_more::{Display, Error, From};
use std::ops::ControlFlow;
use tracing::{info, instrument, Span};

mod limits;
mod random;

pub use limits::*;
pub use random::*;

/// Trait for types that know how to pick one out of many candidates.
#[cfg_attr(test, mockall::automock)]
pub trait Select {
    /// Picks an index in the range `0..n`, where `n > 0`.
    fn select(&mut self, n: usize) -> usize;
}

/// The reason why self-play was interrupted.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "self-play was interrupted; {}", _0)]
pub struct SelfPlayError(GameError);

/// Summary of a self-play run.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{} plies played", plies)]
pub struct Report {
    /// How many plies were played.
    pub plies: u32,

    /// The result of the game, or `None` if it did not end within the limits
    /// or the side to move had no moves available.
    pub outcome: Option<Outcome>,
}

/// Drives a [`Game`] by letting both sides play randomly selected moves.
#[derive(Debug)]
pub struct SelfPlay<S> {
    selector: S,
    limits: Limits,
}

impl<S: Select> SelfPlay<S> {
    /// Constructs [`SelfPlay`] with a [`Select`]ion strategy and [`Limits`].
    pub fn new(selector: S, limits: Limits) -> Self {
        SelfPlay { selector, limits }
    }

    /// Plays a single ply, returning the move played, or `None` if no move is available.
    #[instrument(level = "trace", skip(self, game), err)]
    pub fn step(&mut self, game: &mut Game) -> Result<Option<Played>, SelfPlayError> {
        let moves: Vec<_> = game.moves().collect();

        if moves.is_empty() {
            return Ok(None);
        }

        let m = moves[self.selector.select(moves.len()) % moves.len()];
        game.make(m)?;
        Ok(game.last())
    }

    /// Plays until the game is over or the [`Limits`] are reached.
    ///
    /// The callback is invoked after every ply and may stop the run early.
    #[instrument(level = "debug", skip(self, game, on_ply), err,
        fields(limits = %self.limits, plies, outcome))]
    pub fn play<F>(&mut self, game: &mut Game, mut on_ply: F) -> Result<Report, SelfPlayError>
    where
        F: FnMut(&Game) -> ControlFlow<()>,
    {
        let mut plies = 0;

        while plies < self.limits.plies() && !game.is_over() {
            let turn = game.turn();

            match self.step(game)? {
                None => break,
                Some(played) => {
                    plies += 1;
                    info!(ply = plies, player = %turn, %played);
                    if on_ply(game).is_break() {
                        break;
                    }
                }
            }
        }

        let span = Span::current();
        span.record("plies", plies);

        if let Some(o) = game.outcome() {
            span.record("outcome", tracing::field::display(o));
        }

        Ok(Report {
            plies,
            outcome: game.outcome(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Board, Color, Move, Piece, Role, Square};
    use test_strategy::proptest;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[proptest]
    fn step_plays_the_selected_move(#[strategy(0usize..20)] i: usize) {
        let mut game = Game::default();
        let expected = game.moves().nth(i).unwrap();

        let mut selector = MockSelect::new();
        selector
            .expect_select()
            .once()
            .with(mockall::predicate::eq(20))
            .return_const(i);

        let played = SelfPlay::new(selector, Limits::None).step(&mut game)?;
        assert_eq!(played.map(|p| p.0), Some(expected));
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn step_does_nothing_if_there_are_no_moves() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Piece(Color::Black, Role::King));
        let mut game = Game::new(board, Color::White);

        let mut selector = MockSelect::new();
        selector.expect_select().never();

        assert_eq!(SelfPlay::new(selector, Limits::None).step(&mut game), Ok(None));
        assert_eq!(game, Game::new(board, Color::White));
    }

    #[proptest]
    fn play_stops_at_the_ply_limit(seed: u64, #[strategy(0u32..16)] n: u32) {
        let mut game = Game::default();
        let mut calls = 0;

        let mut selfplay = SelfPlay::new(Random::new(seed), Limits::Plies(n));
        let report = selfplay.play(&mut game, |_| {
            calls += 1;
            ControlFlow::Continue(())
        })?;

        assert!(report.plies <= n);
        assert_eq!(report.plies, calls);
        assert_eq!(report.outcome, game.outcome());
        assert!(report.outcome.is_some() || report.plies == n);
    }

    #[proptest]
    fn play_ends_when_a_king_is_captured(c: Color) {
        let mut board = Board::empty();
        board.place(sq(0, 0), Piece(c, Role::Rook));
        board.place(sq(7, 0), Piece(!c, Role::King));
        let mut game = Game::new(board, c);

        let mut selector = MockSelect::new();
        selector
            .expect_select()
            .once()
            .with(mockall::predicate::eq(14))
            .return_const(6usize);

        let mut selfplay = SelfPlay::new(selector, Limits::None);
        let report = selfplay.play(&mut game, |_| ControlFlow::Continue(()))?;
        let capture = Move::new(sq(0, 0), sq(7, 0));

        assert!(game.moves().next().is_none());
        assert_eq!(game.last().map(|p| p.0), Some(capture));
        assert_eq!(
            report,
            Report {
                plies: 1,
                outcome: Some(Outcome::Regicide(c))
            }
        );
    }

    #[proptest]
    fn play_stops_as_soon_as_the_callback_breaks(seed: u64, #[strategy(1u32..16)] n: u32) {
        let mut game = Game::default();
        let mut calls = 0;

        let mut selfplay = SelfPlay::new(Random::new(seed), Limits::None);
        let report = selfplay.play(&mut game, |_| {
            calls += 1;
            if calls < n {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })?;

        assert_eq!(report.plies, calls);
        assert!(report.plies <= n);
        assert!(report.outcome.is_some() || report.plies == n);
    }

    #[test]
    fn play_is_reproducible_given_a_seed() {
        let mut a = Game::default();
        let mut b = Game::default();

        let mut sa = SelfPlay::new(Random::new(7), Limits::Plies(64));
        let mut sb = SelfPlay::new(Random::new(7), Limits::Plies(64));

        let ra = sa.play(&mut a, |_| ControlFlow::Continue(()));
        let rb = sb.play(&mut b, |_| ControlFlow::Continue(()));

        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }
}
