//! Game session: the one live board plus win tracking
//!
//! The session is the boundary the presentation layer talks to. It
//! receives "a click at board cell (col,row) by player P", performs the
//! whole placement atomically (validate, mutate, check win) and returns
//! one outcome event for the caller to render. No reentrancy: each call
//! runs to completion before the next input event is handled.

use tracing::{debug, info};

use crate::board::{Board, PlaceError, Pos, Stone};
use crate::rules::{find_winning_line, has_five_at};

/// Outcome of one click, for the presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Stone placed, game continues
    Placed { pos: Pos, color: Stone },
    /// Click had no effect. `pos` is `None` when the click fell outside
    /// the grid entirely.
    Rejected {
        pos: Option<Pos>,
        reason: RejectReason,
    },
    /// Stone placed and it completed a five-in-a-row
    Won { color: Stone, line: [Pos; 5] },
}

/// Why a click was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    OutOfBounds,
    Occupied,
    GameOver,
}

impl From<PlaceError> for RejectReason {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::OutOfBounds => RejectReason::OutOfBounds,
            PlaceError::Occupied => RejectReason::Occupied,
        }
    }
}

/// One game of Gomoku. Owns the single live [`Board`].
#[derive(Debug, Default)]
pub struct Session {
    board: Board,
    winner: Option<Stone>,
    winning_line: Option<[Pos; 5]>,
    last_move: Option<Pos>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Winning color once a five-in-a-row has been detected
    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        self.winning_line
    }

    /// The most recently placed stone, for the last-move marker
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Handle a click at raw grid coordinates for the given color.
    ///
    /// One atomic operation: out-of-grid clicks and occupied cells are
    /// rejected with no state change, accepted placements are followed
    /// by the win check before this returns.
    pub fn handle_click(&mut self, col: i32, row: i32, color: Stone) -> PlaceOutcome {
        let Some(pos) = Pos::try_from_coords(row, col) else {
            debug!(col, row, "click outside grid discarded");
            return PlaceOutcome::Rejected {
                pos: None,
                reason: RejectReason::OutOfBounds,
            };
        };

        if self.is_over() {
            // Board stays frozen after a win until the session resets
            debug!(?pos, "click after game over discarded");
            return PlaceOutcome::Rejected {
                pos: Some(pos),
                reason: RejectReason::GameOver,
            };
        }

        if let Err(err) = self.board.place(pos, color) {
            debug!(?pos, ?color, %err, "placement rejected");
            return PlaceOutcome::Rejected {
                pos: Some(pos),
                reason: err.into(),
            };
        }

        self.last_move = Some(pos);
        debug!(?pos, ?color, stones = self.board.stone_count(), "stone placed");

        if has_five_at(&self.board, pos, color) {
            // find_winning_line only fails when has_five_at does
            let line = find_winning_line(&self.board, pos, color)
                .unwrap_or([pos; 5]);
            self.winner = Some(color);
            self.winning_line = Some(line);
            info!(?color, ?line, "five in a row");
            return PlaceOutcome::Won { color, line };
        }

        PlaceOutcome::Placed { pos, color }
    }

    /// Return the session to an empty board with no winner
    pub fn reset(&mut self) {
        self.board.reset();
        self.winner = None;
        self.winning_line = None;
        self.last_move = None;
        info!("session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_outcome() {
        let mut session = Session::new();
        let outcome = session.handle_click(3, 4, Stone::Black);
        assert_eq!(
            outcome,
            PlaceOutcome::Placed {
                pos: Pos::new(4, 3),
                color: Stone::Black,
            }
        );
        assert_eq!(session.last_move(), Some(Pos::new(4, 3)));
        assert!(!session.is_over());
    }

    #[test]
    fn test_out_of_grid_click_discarded() {
        let mut session = Session::new();
        for (col, row) in [(-1, 0), (0, -1), (15, 0), (0, 15), (100, 100)] {
            let outcome = session.handle_click(col, row, Stone::White);
            assert_eq!(
                outcome,
                PlaceOutcome::Rejected {
                    pos: None,
                    reason: RejectReason::OutOfBounds,
                }
            );
        }
        assert!(session.board().is_board_empty());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = Session::new();
        session.handle_click(5, 5, Stone::Black);
        let outcome = session.handle_click(5, 5, Stone::White);
        assert_eq!(
            outcome,
            PlaceOutcome::Rejected {
                pos: Some(Pos::new(5, 5)),
                reason: RejectReason::Occupied,
            }
        );
        assert_eq!(session.board().get(Pos::new(5, 5)), Some(Stone::Black));
        assert_eq!(session.board().stone_count(), 1);
    }

    #[test]
    fn test_win_on_fifth_stone() {
        let mut session = Session::new();
        for col in 0..4 {
            let outcome = session.handle_click(col, 0, Stone::Black);
            assert!(matches!(outcome, PlaceOutcome::Placed { .. }));
        }
        let outcome = session.handle_click(4, 0, Stone::Black);
        match outcome {
            PlaceOutcome::Won { color, line } => {
                assert_eq!(color, Stone::Black);
                assert_eq!(line[0], Pos::new(0, 0));
                assert_eq!(line[4], Pos::new(0, 4));
            }
            other => panic!("expected win, got {other:?}"),
        }
        assert_eq!(session.winner(), Some(Stone::Black));
        assert!(session.winning_line().is_some());
    }

    #[test]
    fn test_board_frozen_after_win() {
        let mut session = Session::new();
        for col in 0..5 {
            session.handle_click(col, 0, Stone::Black);
        }
        assert!(session.is_over());

        let outcome = session.handle_click(7, 7, Stone::White);
        assert!(matches!(outcome, PlaceOutcome::Rejected { .. }));
        assert_eq!(session.board().stone_count(), 5);
        assert_eq!(session.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_interleaved_colors_no_cross_win() {
        let mut session = Session::new();
        // Black builds four in row 7, White sits right next to it
        for col in 3..7 {
            session.handle_click(col, 7, Stone::Black);
        }
        let outcome = session.handle_click(7, 7, Stone::White);
        assert!(matches!(outcome, PlaceOutcome::Placed { .. }));
        assert!(!session.is_over());
    }

    #[test]
    fn test_reset_returns_to_empty() {
        let mut session = Session::new();
        for col in 0..5 {
            session.handle_click(col, 0, Stone::Black);
        }
        session.reset();

        assert!(session.board().is_board_empty());
        assert_eq!(session.winner(), None);
        assert_eq!(session.winning_line(), None);
        assert_eq!(session.last_move(), None);

        // Board accepts stones again after reset
        let outcome = session.handle_click(0, 0, Stone::White);
        assert!(matches!(outcome, PlaceOutcome::Placed { .. }));
    }
}
