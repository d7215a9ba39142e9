use crate::{Board, Cell, PlayerId};

/// How many connected cells make a win.
pub const RUN_LENGTH: i8 = 4;

/// `(row step, column step)` per candidate direction. Leftward and
/// upward runs are covered by the same run scanned from its other end.
const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal, down-right
    (1, -1), // diagonal, down-left
];

/// Whether `player` has four connected cells in a straight line.
///
/// Tries, for every cell, the four runs of length 4 starting there. A
/// run only counts when all four coordinates are in bounds and all four
/// cells belong to `player`, so runs hanging off an edge (including
/// negative columns on the down-left diagonal) never match and are
/// never indexed. Returns on the first matching run; the redundancy of
/// visiting every start cell is fine at 42 cells per check.
pub fn four_in_a_row(board: &Board, player: PlayerId) -> bool {
    for row in 0..board.height() {
        for column in 0..board.width() {
            for (row_step, column_step) in DIRECTIONS {
                if run_is_won(board, player, row, column, row_step, column_step) {
                    return true;
                }
            }
        }
    }
    false
}

fn run_is_won(
    board: &Board,
    player: PlayerId,
    row: i8,
    column: i8,
    row_step: i8,
    column_step: i8,
) -> bool {
    (0..RUN_LENGTH).all(|k| {
        let r = row + k * row_step;
        let c = column + k * column_step;
        board.is_in_bounds(r, c) && board.get(r, c) == Cell::Taken(player)
    })
}
