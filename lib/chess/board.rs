use super::{Color, Destinations, Move, Piece, Role, Square};
use derive_more::{Display, Error};
use std::{fmt, ops::Index};
use tracing::instrument;

#[cfg(test)]
use proptest::{collection::vec, prelude::*};

/// Represents an attempt to move from a vacant [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "move `{}` departs from a vacant square", _0)]
pub struct IllegalMove(#[error(not(source))] pub Move);

const BACK_ROW: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// The piece placement on the board.
///
/// This type does not validate whether the placement it holds could arise in a game,
/// only that every square holds at most one piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Board {
    #[cfg_attr(test, strategy(vec(any::<Option<Piece>>(), 64).prop_map(|v| {
        let mut squares = [[None; 8]; 8];
        squares.iter_mut().flatten().zip(v).for_each(|(s, p)| *s = p);
        squares
    })))]
    squares: [[Option<Piece>; 8]; 8],
}

/// The standard starting arrangement, white on rows `0` and `1`.
impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for c in [Color::White, Color::Black] {
            for (col, role) in (0..).zip(BACK_ROW) {
                board.squares[c.back_row() as usize][col] = Some(Piece(c, role));
                board.squares[c.pawn_row() as usize][col] = Some(Piece(c, Role::Pawn));
            }
        }

        board
    }
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The occupant of the square at `(row, col)`.
    ///
    /// Returns `None` if the coordinates fall outside of the board,
    /// otherwise `Some` of the occupant, which may itself be `None`.
    pub fn square_at(&self, row: i8, col: i8) -> Option<Option<Piece>> {
        Square::new(row, col).map(|s| self[s])
    }

    /// Places a [`Piece`] on a [`Square`], replacing any previous occupant.
    pub fn place(&mut self, s: Square, p: Piece) {
        self.squares[s.row() as usize][s.col() as usize] = Some(p);
    }

    /// Removes the occupant of a [`Square`], if any.
    pub fn clear(&mut self, s: Square) -> Option<Piece> {
        self.squares[s.row() as usize][s.col() as usize].take()
    }

    /// An iterator over the occupied [`Square`]s and their [`Piece`]s, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |s| Some((s, self[s]?)))
    }

    /// An iterator over the [`Square`]s occupied by a [`Color`], row by row.
    pub fn by_color(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color() == c)
    }

    /// The number of pieces on the board.
    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    /// Whether the board holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// Where the piece on this [`Square`] can move to.
    pub fn destinations(&self, s: Square) -> Destinations<'_> {
        Destinations::new(self, s)
    }

    /// An iterator over the pseudo-legal [`Move`]s available to a [`Color`].
    pub fn moves(&self, c: Color) -> impl Iterator<Item = Move> + '_ {
        self.by_color(c).flat_map(move |(whence, _)| {
            self.destinations(whence)
                .map(move |whither| Move::new(whence, whither))
        })
    }

    /// Plays a [`Move`], returning the captured [`Piece`], if any.
    ///
    /// The move is not validated against the rules of movement,
    /// it is only required that the source square be occupied.
    #[instrument(level = "trace", skip(self), err)]
    pub fn make(&mut self, m: Move) -> Result<Option<Piece>, IllegalMove> {
        let piece = self.clear(m.whence()).ok_or(IllegalMove(m))?;
        let capture = self.clear(m.whither());
        self.place(m.whither(), piece);
        Ok(capture)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, s: Square) -> &Self::Output {
        &self.squares[s.row() as usize][s.col() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FILES: &str = "     a   b   c   d   e   f   g   h";
        const RULE: &str = "   +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", FILES)?;
        writeln!(f, "{}", RULE)?;

        for (row, squares) in self.squares.iter().enumerate().rev() {
            write!(f, " {} |", row + 1)?;

            for p in squares {
                match p {
                    Some(p) if f.alternate() => write!(f, " {:#} |", p)?,
                    Some(p) => write!(f, " {} |", p)?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", row + 1)?;
            writeln!(f, "{}", RULE)?;
        }

        write!(f, "{}", FILES)
    }
}
