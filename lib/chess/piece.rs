use super::{Capabilities, Color, Role};
use std::fmt::{self, Write};

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// Formats as the conventional ASCII letter, uppercase for white and lowercase for black,
/// or as the Unicode figurine when the alternate flag is set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        self.1
    }

    /// How this piece moves.
    pub fn capabilities(&self) -> Capabilities {
        self.role().capabilities()
    }

    fn letter(&self) -> char {
        let c = match self.role() {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        };

        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    fn figurine(&self) -> char {
        use Color::*;
        use Role::*;
        match (self.color(), self.role()) {
            (White, Pawn) => '♙',
            (White, Knight) => '♘',
            (White, Bishop) => '♗',
            (White, Rook) => '♖',
            (White, Queen) => '♕',
            (White, King) => '♔',
            (Black, Pawn) => '♟',
            (Black, Knight) => '♞',
            (Black, Bishop) => '♝',
            (Black, Rook) => '♜',
            (Black, Queen) => '♛',
            (Black, King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_char(self.figurine())
        } else {
            f.write_char(self.letter())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn piece_has_a_color(c: Color, r: Role) {
        assert_eq!(Piece(c, r).color(), c);
    }

    #[proptest]
    fn piece_has_a_role(c: Color, r: Role) {
        assert_eq!(Piece(c, r).role(), r);
    }

    #[proptest]
    fn piece_moves_according_to_its_role(p: Piece) {
        assert_eq!(p.capabilities(), p.role().capabilities());
    }

    #[proptest]
    fn piece_has_a_default_ascii_representation(p: Piece) {
        assert_eq!(p.to_string(), p.letter().to_string());
        assert!(p.letter().is_ascii_alphabetic());
    }

    #[proptest]
    fn white_pieces_are_printed_in_uppercase(r: Role) {
        assert!(Piece(Color::White, r).letter().is_ascii_uppercase());
        assert!(Piece(Color::Black, r).letter().is_ascii_lowercase());
    }

    #[proptest]
    fn piece_has_an_alternate_figurine_representation(p: Piece) {
        assert_eq!(format!("{:#}", p), p.figurine().to_string());
    }

    #[proptest]
    fn pieces_of_opposite_colors_have_distinct_figurines(r: Role) {
        assert_ne!(
            Piece(Color::White, r).figurine(),
            Piece(Color::Black, r).figurine()
        );
    }
}
