use super::Color;
use derive_more::Display;

/// One of the possible outcomes of a game.
///
/// Without check detection, the only way a game ends is by capturing a king.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display(fmt = "the {} king was captured by the {} player", "!*_0", _0)]
    Regicide(Color),
}

impl Outcome {
    /// The winning side.
    pub fn winner(&self) -> Color {
        match *self {
            Outcome::Regicide(c) => c,
        }
    }
}
