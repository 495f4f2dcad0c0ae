use super::{Board, Capabilities, Color, Square};
use arrayvec::ArrayVec;

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[rustfmt::skip]
const KNIGHT: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

#[rustfmt::skip]
const KING: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// The occupancy a [`Ray`] may land on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Target {
    /// Only empty squares, as a pawn push.
    Vacant,
    /// Only squares held by the opponent, as a pawn capture.
    Hostile,
    /// Empty squares and those held by the opponent.
    Either,
}

/// A cursor walking from a square in a fixed direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Ray {
    cursor: Square,
    step: (i8, i8),
    reach: u8,
    target: Target,
    side: Color,
}

impl Ray {
    fn new(whence: Square, step: (i8, i8), reach: u8, target: Target, side: Color) -> Self {
        Ray {
            cursor: whence,
            step,
            reach,
            target,
            side,
        }
    }

    /// Advances one square, returning it if it is a destination.
    ///
    /// Once this returns `None` the ray is exhausted.
    fn advance(&mut self, board: &Board) -> Option<Square> {
        if self.reach == 0 {
            return None;
        }

        self.reach -= 1;

        let Some(sq) = self.cursor.offset(self.step) else {
            self.reach = 0;
            return None;
        };

        self.cursor = sq;

        match board[sq] {
            None if self.target != Target::Hostile => Some(sq),
            Some(p) if p.color() != self.side && self.target != Target::Vacant => {
                self.reach = 0;
                Some(sq)
            }
            _ => {
                self.reach = 0;
                None
            }
        }
    }
}

/// A lazy iterator over the [`Square`]s reachable by the piece on a given square.
///
/// Destinations are produced ray by ray in a fixed order, nearest first within each ray,
/// so iterating twice over the same [`Board`] yields identical sequences.
#[derive(Debug, Clone)]
pub struct Destinations<'a> {
    board: &'a Board,
    rays: ArrayVec<Ray, 8>,
    current: usize,
}

impl<'a> Destinations<'a> {
    pub(super) fn new(board: &'a Board, whence: Square) -> Self {
        let mut rays = ArrayVec::new();

        if let Some(piece) = board[whence] {
            let side = piece.color();
            let capabilities = piece.capabilities();

            if capabilities.contains(Capabilities::PAWN) {
                let forward = side.forward();
                let reach = if whence.row() == side.pawn_row() { 2 } else { 1 };
                rays.push(Ray::new(whence, (forward, 0), reach, Target::Vacant, side));
                rays.push(Ray::new(whence, (forward, -1), 1, Target::Hostile, side));
                rays.push(Ray::new(whence, (forward, 1), 1, Target::Hostile, side));
            }

            if capabilities.contains(Capabilities::SLIDES_ORTHOGONALLY) {
                rays.extend(ORTHOGONAL.map(|s| Ray::new(whence, s, 7, Target::Either, side)));
            }

            if capabilities.contains(Capabilities::SLIDES_DIAGONALLY) {
                rays.extend(DIAGONAL.map(|s| Ray::new(whence, s, 7, Target::Either, side)));
            }

            if capabilities.contains(Capabilities::JUMPS) {
                rays.extend(KNIGHT.map(|s| Ray::new(whence, s, 1, Target::Either, side)));
            }

            if capabilities.contains(Capabilities::KING) {
                rays.extend(KING.map(|s| Ray::new(whence, s, 1, Target::Either, side)));
            }
        }

        Destinations {
            board,
            rays,
            current: 0,
        }
    }
}

impl<'a> Iterator for Destinations<'a> {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ray) = self.rays.get_mut(self.current) {
            match ray.advance(self.board) {
                Some(sq) => return Some(sq),
                None => self.current += 1,
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.rays[self.current.min(self.rays.len())..]
            .iter()
            .map(|r| r.reach as usize)
            .sum();

        (0, Some(upper))
    }
}

impl<'a> std::iter::FusedIterator for Destinations<'a> {}
