//! Rotation resolver - simple horizontal wall kicks
//!
//! This is not SRS. A rotation advances to the next state in place, and if
//! that overlaps something the resolver shifts it sideways by each offset in
//! [`KICK_OFFSETS`] (0, -1, +1, -2, +2) and keeps the first that fits.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::KICK_OFFSETS;

/// Try to rotate `piece` on `board`.
///
/// Returns the placed piece and the horizontal kick that was applied, or
/// `None` when every candidate collides.
pub fn try_rotate(board: &Board, piece: &Piece) -> Option<(Piece, i16)> {
    let rotated = piece.rotated();

    KICK_OFFSETS.iter().find_map(|&dx| {
        let candidate = rotated.moved(dx, 0);
        board.valid(&candidate).then_some((candidate, dx))
    })
}
