//! Two-player Gomoku with a native GUI
//!
//! A hotseat five-in-a-row game on a fixed 15x15 board. Left click
//! places a Black stone, right click places a White stone; the first
//! run of five or more same-color stones along any of the four line
//! directions wins.
//!
//! # Architecture
//!
//! - [`board`]: Board state — occupancy bitboards plus per-color move
//!   records, with placement validation
//! - [`rules`]: Win detection along the four line directions
//! - [`session`]: Game session translating clicks into placement
//!   outcomes for the presentation layer
//! - [`ui`]: egui/eframe presentation — start screen, board view
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{PlaceOutcome, Session, Stone};
//!
//! let mut session = Session::new();
//!
//! // Black claims the center
//! let outcome = session.handle_click(7, 7, Stone::Black);
//! assert!(matches!(outcome, PlaceOutcome::Placed { .. }));
//!
//! // The cell is taken now, White is refused
//! let outcome = session.handle_click(7, 7, Stone::White);
//! assert!(matches!(outcome, PlaceOutcome::Rejected { .. }));
//! ```

pub mod board;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, PlaceError, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use session::{PlaceOutcome, RejectReason, Session};
