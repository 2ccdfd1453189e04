//! Shape table - tetromino geometry
//!
//! Every piece kind owns an ordered list of rotation states; each state is
//! four (column, row) offsets from the piece origin. Rotating advances to the
//! next state and wraps, so O has one state, I/S/Z two, and J/L/T four.
//!
//! This table is the only place piece geometry is written down.

use crate::types::PieceKind;

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i16, i16);

/// One rotation state - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

const I_STATES: [PieceShape; 2] = [
    // horizontal, on row 1
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    // vertical, in column 2
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const O_STATES: [PieceShape; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

const S_STATES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

/// All rotation states of a kind, in rotation order
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Number of distinct rotation states for a kind
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Get the shape for a kind and rotation index (taken modulo the state count)
pub fn get_shape(kind: PieceKind, rotation: usize) -> PieceShape {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_counts_match_piece_symmetry() {
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
        assert_eq!(rotation_count(PieceKind::T), 4);
    }

    #[test]
    fn every_state_has_four_distinct_minos() {
        for kind in PieceKind::ALL {
            for shape in rotation_states(kind) {
                for (i, a) in shape.iter().enumerate() {
                    for b in &shape[i + 1..] {
                        assert_ne!(a, b, "{:?} has a duplicated mino", kind);
                    }
                }
            }
        }
    }

    #[test]
    fn offsets_fit_in_a_four_by_four_box() {
        for kind in PieceKind::ALL {
            for shape in rotation_states(kind) {
                assert!(shape
                    .iter()
                    .all(|&(x, y)| (0..4).contains(&x) && (0..4).contains(&y)));
            }
        }
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(get_shape(PieceKind::I, 2), get_shape(PieceKind::I, 0));
        assert_eq!(get_shape(PieceKind::T, 5), get_shape(PieceKind::T, 1));
        assert_eq!(get_shape(PieceKind::O, 3), get_shape(PieceKind::O, 0));
    }
}
