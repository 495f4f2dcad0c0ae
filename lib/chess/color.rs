use derive_more::Display;
use std::ops::Not;

/// The color of a chess [`Piece`][`super::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// The row direction in which pawns of this color advance.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The row where pieces other than pawns of this color start.
    pub fn back_row(&self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The row where pawns of this color start.
    pub fn pawn_row(&self) -> i8 {
        self.back_row() + self.forward()
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
