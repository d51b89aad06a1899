//! Game rules for two-player Gomoku
//!
//! The only rule beyond "empty cells accept one stone" is the win
//! condition: five or more same-color stones in a row.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_five_at};
