use bitflags::bitflags;
use derive_more::Display;

bitflags! {
    /// The movement abilities of a [`Role`].
    ///
    /// Move generation dispatches on these flags rather than on the [`Role`] itself,
    /// so that a queen is simply a piece that slides both like a rook and like a bishop.
    pub struct Capabilities: u8 {
        const SLIDES_ORTHOGONALLY = 0b00001;
        const SLIDES_DIAGONALLY =   0b00010;
        const JUMPS =               0b00100;
        const PAWN =                0b01000;
        const KING =                0b10000;
    }
}

/// The type of a chess [`Piece`][`super::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Role {
    #[display(fmt = "pawn")]
    Pawn,
    #[display(fmt = "knight")]
    Knight,
    #[display(fmt = "bishop")]
    Bishop,
    #[display(fmt = "rook")]
    Rook,
    #[display(fmt = "queen")]
    Queen,
    #[display(fmt = "king")]
    King,
}

impl Role {
    /// How pieces of this role move.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Role::Pawn => Capabilities::PAWN,
            Role::Knight => Capabilities::JUMPS,
            Role::Bishop => Capabilities::SLIDES_DIAGONALLY,
            Role::Rook => Capabilities::SLIDES_ORTHOGONALLY,
            Role::Queen => Capabilities::SLIDES_ORTHOGONALLY | Capabilities::SLIDES_DIAGONALLY,
            Role::King => Capabilities::KING,
        }
    }
}
