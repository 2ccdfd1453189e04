//! Ghost projection - where the current piece would come to rest
//!
//! Pure functions over a borrowed board; nothing here can change game state,
//! so they are safe to call while paused or after game over.

use crate::board::Board;
use crate::piece::Piece;

/// Number of rows `piece` can fall before it is blocked
pub fn drop_distance(board: &Board, piece: &Piece) -> u32 {
    let mut distance = 0;
    let mut probe = *piece;
    loop {
        let below = probe.moved(0, 1);
        if !board.valid(&below) {
            return distance;
        }
        probe = below;
        distance += 1;
    }
}

/// `piece` moved down as far as it can go
pub fn project(board: &Board, piece: &Piece) -> Piece {
    piece.moved(0, drop_distance(board, piece) as i16)
}
