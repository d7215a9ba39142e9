use crate::{Board, Cell, PlayerId};

/// Renders the board as a box-drawn grid, top row first.
///
/// Player 1 pieces show as `●`, player 2 pieces as `○`, empty cells as
/// `·`. A column index ruler is appended below the frame.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("╭");
    for _ in 0..board.width() {
        result += "──";
    }
    result += "─╮\n";

    for row in 0..board.height() {
        result += "│";
        for column in 0..board.width() {
            result += match board.get(row, column) {
                Cell::Empty => " ·",
                Cell::Taken(PlayerId::One) => " ●",
                Cell::Taken(PlayerId::Two) => " ○",
            };
        }
        result += " │\n";
    }

    result += "╰";
    for _ in 0..board.width() {
        result += "──";
    }
    result += "─╯\n ";
    for column in 0..board.width() {
        result += &format!(" {}", column);
    }
    result
}
