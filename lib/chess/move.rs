use super::{Piece, Square};
use derive_more::{Constructor, Deref, Display};
use std::fmt;

/// A chess move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[display(fmt = "{}{}", _0, _1)]
pub struct Move(Square, Square);

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// A [`Move`] that has been played, along with the [`Piece`] moved and the one captured.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deref)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Played(#[deref] pub Move, pub Piece, pub Option<Piece>);

impl Played {
    /// The [`Piece`] moved.
    pub fn piece(&self) -> Piece {
        self.1
    }

    /// The [`Piece`] captured, if any.
    pub fn capture(&self) -> Option<Piece> {
        self.2
    }

    /// Whether this is a capture move.
    pub fn is_capture(&self) -> bool {
        self.capture().is_some()
    }
}

impl fmt::Display for Played {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece(), self.whence())?;

        if self.is_capture() {
            f.write_str("x")?;
        }

        write!(f, "{}", self.whither())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, Role};
    use test_strategy::proptest;

    #[proptest]
    fn move_has_a_source_and_a_destination(a: Square, b: Square) {
        let m = Move::new(a, b);
        assert_eq!((m.whence(), m.whither()), (a, b));
    }

    #[proptest]
    fn move_is_printed_in_pure_coordinate_notation(m: Move) {
        assert_eq!(m.to_string(), [m.whence().to_string(), m.whither().to_string()].concat());
    }

    #[proptest]
    fn played_move_dereferences_to_move(p: Played) {
        assert_eq!(*p, p.0);
    }

    #[proptest]
    fn played_move_is_a_capture_if_a_piece_was_taken(m: Move, p: Piece, c: Option<Piece>) {
        assert_eq!(Played(m, p, c).is_capture(), c.is_some());
    }

    #[test]
    fn played_move_is_printed_with_the_piece_moved() {
        let quiet = Played(
            Move::new(Square::new(0, 1).unwrap(), Square::new(2, 2).unwrap()),
            Piece(Color::White, Role::Knight),
            None,
        );

        let capture = Played(
            Move::new(Square::new(4, 3).unwrap(), Square::new(3, 4).unwrap()),
            Piece(Color::Black, Role::Pawn),
            Some(Piece(Color::White, Role::Pawn)),
        );

        assert_eq!(quiet.to_string(), "Nb1c3");
        assert_eq!(capture.to_string(), "pd5xe4");
    }
}
