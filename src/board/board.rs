//! Board structure with per-color occupancy and move records

use super::bitboard::Bitboard;
use super::{Pos, Stone};

/// Why a placement was refused. Rejections never change board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("cell is outside the 15x15 grid")]
    OutOfBounds,
    #[error("cell already holds a stone")]
    Occupied,
}

/// Game board: occupancy per color plus ordered move records.
///
/// A cell can be claimed by at most one color for the lifetime of the
/// board. The two move records stay disjoint and together cover exactly
/// the occupied cells.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
    /// Black moves in placement order
    black_moves: Vec<Pos>,
    /// White moves in placement order
    white_moves: Vec<Pos>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stone at position, `None` if the cell is empty
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.black.get(pos) {
            Some(Stone::Black)
        } else if self.white.get(pos) {
            Some(Stone::White)
        } else {
            None
        }
    }

    /// Check if position holds a stone of either color
    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.black.get(pos) || self.white.get(pos)
    }

    /// Place a stone. The only mutator: an `Err` leaves the board
    /// untouched.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), PlaceError> {
        if !Pos::is_valid(pos.row as i32, pos.col as i32) {
            return Err(PlaceError::OutOfBounds);
        }
        if self.is_occupied(pos) {
            return Err(PlaceError::Occupied);
        }
        match stone {
            Stone::Black => {
                self.black.set(pos);
                self.black_moves.push(pos);
            }
            Stone::White => {
                self.white.set(pos);
                self.white_moves.push(pos);
            }
        }
        Ok(())
    }

    /// Get occupancy bitboard for a color
    #[inline]
    pub fn stones_of(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    /// Get a color's moves in placement order
    #[inline]
    pub fn moves_of(&self, stone: Stone) -> &[Pos] {
        match stone {
            Stone::Black => &self.black_moves,
            Stone::White => &self.white_moves,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Clear occupancy and both move records
    pub fn reset(&mut self) {
        self.black.clear();
        self.white.clear();
        self.black_moves.clear();
        self.white_moves.clear();
    }
}
