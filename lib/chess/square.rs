use std::fmt::{self, Write};

/// A square on the chess board.
///
/// Rows and columns are numbered from `0` to `7`; row `0` is the first rank
/// and column `0` is the `a` file.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square {
    #[cfg_attr(test, strategy(0i8..8))]
    row: i8,
    #[cfg_attr(test, strategy(0i8..8))]
    col: i8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column, if both are within the board.
    pub fn new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// This square's row.
    pub fn row(&self) -> i8 {
        self.row
    }

    /// This square's column.
    pub fn col(&self) -> i8 {
        self.col
    }

    /// The square displaced by `(rows, cols)` from this one, if still on the board.
    pub fn offset(&self, (rows, cols): (i8, i8)) -> Option<Self> {
        Square::new(self.row + rows, self.col + cols)
    }

    /// An iterator over all squares, row by row.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(|i| Square {
            row: i / 8,
            col: i % 8,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.col as u8).into())?;
        f.write_char((b'1' + self.row as u8).into())?;
        Ok(())
    }
}
