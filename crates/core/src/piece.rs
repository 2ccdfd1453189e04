//! Piece module - the falling tetromino as an immutable value
//!
//! A [`Piece`] never changes in place. Moving or rotating returns a new copy,
//! which lets callers build candidates (kicks, ghost projection) freely and
//! only commit the one the board accepts.

use crate::shapes::{get_shape, rotation_count, PieceShape};
use crate::types::{ColorTag, PieceKind, SPAWN_POSITION};

/// A tetromino at a rotation and grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: u8,
    x: i16,
    y: i16,
}

impl Piece {
    /// Create a piece of `kind` at the spawn origin in rotation 0
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, 0, SPAWN_POSITION.0, SPAWN_POSITION.1)
    }

    /// Create a piece at an explicit rotation and origin.
    ///
    /// The rotation index is reduced modulo the kind's rotation count.
    pub fn at(kind: PieceKind, rotation: usize, x: i16, y: i16) -> Self {
        Self {
            kind,
            rotation: (rotation % rotation_count(kind)) as u8,
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> usize {
        self.rotation as usize
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn color(&self) -> ColorTag {
        self.kind.color()
    }

    /// Mino offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation as usize)
    }

    /// Same piece advanced to its next rotation state. Not validated.
    pub fn rotated(&self) -> Self {
        Self::at(self.kind, self.rotation as usize + 1, self.x, self.y)
    }

    /// Same piece translated by (dx, dy). Not validated.
    pub fn moved(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Absolute board coordinates of the four minos
    pub fn blocks(&self) -> [(i16, i16); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_new_spawns_at_origin() {
        let piece = Piece::new(PieceKind::T);

        assert_eq!(piece.kind(), PieceKind::T);
        assert_eq!(piece.rotation(), 0);
        assert_eq!((piece.x(), piece.y()), (3, 0));
    }

    #[test]
    fn test_blocks_are_translated_offsets() {
        let piece = Piece::new(PieceKind::I);
        assert_eq!(piece.blocks(), [(3, 1), (4, 1), (5, 1), (6, 1)]);

        let moved = piece.moved(-2, 5);
        assert_eq!(moved.blocks(), [(1, 6), (2, 6), (3, 6), (4, 6)]);
    }

    #[test]
    fn test_transforms_leave_original_untouched() {
        let piece = Piece::new(PieceKind::L);
        let _ = piece.rotated();
        let _ = piece.moved(1, 1);

        assert_eq!(piece, Piece::new(PieceKind::L));
    }

    #[test]
    fn test_rotated_wraps_per_kind() {
        let i = Piece::new(PieceKind::I);
        assert_eq!(i.rotated().rotation(), 1);
        assert_eq!(i.rotated().rotated(), i);

        let o = Piece::new(PieceKind::O);
        assert_eq!(o.rotated(), o);

        let t = Piece::new(PieceKind::T);
        assert_eq!(t.rotated().rotated().rotated().rotated(), t);
    }

    #[test]
    fn test_at_normalizes_rotation() {
        let s = Piece::at(PieceKind::S, 3, 0, 0);
        assert_eq!(s.rotation(), 1);
    }

    #[test]
    fn test_color_follows_kind() {
        assert_eq!(Piece::new(PieceKind::Z).color(), PieceKind::Z.color());
    }
}
