//! Win condition checking
//!
//! A placement wins when it completes a run of five or more same-color
//! stones along any of the four line directions. Each direction is
//! scanned on both sides of the new stone and the two extensions are
//! combined into one run before moving to the next direction.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};

/// Direction vectors for line checking (4 undirected directions)
const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Five-in-a-row check at a specific position.
///
/// Only checks the 4 directions through the given position. No
/// allocation. Pure query: the board is never mutated.
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, color: Stone) -> bool {
    let sz = BOARD_SIZE as i8;
    for (dr, dc) in DIRECTIONS {
        let mut count = 1usize;
        // Positive direction
        let mut r = pos.row as i8 + dr;
        let mut c = pos.col as i8 + dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == Some(color) {
                count += 1;
                r += dr;
                c += dc;
            } else {
                break;
            }
        }
        // Negative direction
        r = pos.row as i8 - dr;
        c = pos.col as i8 - dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == Some(color) {
                count += 1;
                r -= dr;
                c -= dc;
            } else {
                break;
            }
        }
        if count >= WIN_LENGTH {
            return true;
        }
    }
    false
}

/// Find the winning line through `pos` if one exists.
///
/// Returns the first five positions of a qualifying run, ordered along
/// the direction, for the UI highlight. `None` if no direction reaches
/// five.
pub fn find_winning_line(board: &Board, pos: Pos, color: Stone) -> Option<[Pos; 5]> {
    let sz = BOARD_SIZE as i8;

    for (dr, dc) in DIRECTIONS {
        let mut line = Vec::with_capacity(WIN_LENGTH);

        // Walk to the negative end of the run, collecting as we go back
        let mut r = pos.row as i8;
        let mut c = pos.col as i8;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            let p = Pos::new(r as u8, c as u8);
            if board.get(p) == Some(color) {
                line.insert(0, p);
                r -= dr;
                c -= dc;
            } else {
                break;
            }
        }

        // Extend in positive direction (skip the placed stone)
        r = pos.row as i8 + dr;
        c = pos.col as i8 + dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            let p = Pos::new(r as u8, c as u8);
            if board.get(p) == Some(color) {
                line.push(p);
                r += dr;
                c += dc;
            } else {
                break;
            }
        }

        if line.len() >= WIN_LENGTH {
            return Some([line[0], line[1], line[2], line[3], line[4]]);
        }
    }

    None
}
