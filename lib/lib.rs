/// Chess domain types and pseudo-legal move generation.
pub mod chess;
/// Random self-play.
pub mod selfplay;
