use serde::{Deserialize, Serialize};

use crate::{four_in_a_row, Board, PlayerId};

/// Where the game stands after a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameOutcome {
    InProgress,
    Win { player: PlayerId },
    Draw,
}

/// The one cell a move filled in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub row: i8,
    pub column: i8,
    pub player: PlayerId,
}

/// The result of forwarding a column choice to [`GameSession::play_column()`].
///
/// Only `Placed` means the board changed. The other variants are defined
/// no-ops, not errors: a full column is simply ignored and the turn does
/// not advance, an out-of-range column means the caller broke its
/// contract and gets ignored rather than a panic, and moves after a win
/// or draw are swallowed so a late click cannot corrupt a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed {
        piece: PlacedPiece,
        outcome: GameOutcome,
    },
    ColumnFull,
    OutOfBounds,
    GameOver,
}

/// One game of connect four: the board, whose turn it is, and the
/// outcome so far.
///
/// A session is a plain owned value. Callers that want several games at
/// once just hold several sessions.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    current_player: PlayerId,
    outcome: GameOutcome,
}

impl GameSession {
    /// A fresh game on the standard board, with player 1 to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            current_player: PlayerId::One,
            outcome: GameOutcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move the next [`Self::play_column()`] call will
    /// apply. Unspecified once the game is over.
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != GameOutcome::InProgress
    }

    /// The columns that still accept a drop.
    pub fn open_columns(&self) -> Vec<i8> {
        (0..self.board.width())
            .filter(|&column| self.board.find_drop_row(column).is_some())
            .collect()
    }

    /// Plays the current player's piece into `column`.
    ///
    /// On a successful drop the win check runs before the board-full
    /// check, so a move that fills the last cell while completing a line
    /// is a win, never a draw. The turn only passes to the other player
    /// when the game is still in progress afterwards.
    pub fn play_column(&mut self, column: i8) -> MoveOutcome {
        if self.is_terminal() {
            return MoveOutcome::GameOver;
        }
        if column < 0 || column >= self.board.width() {
            return MoveOutcome::OutOfBounds;
        }
        let Some(row) = self.board.find_drop_row(column) else {
            return MoveOutcome::ColumnFull;
        };

        let player = self.current_player;
        self.board.place(row, column, player);

        self.outcome = if four_in_a_row(&self.board, player) {
            GameOutcome::Win { player }
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            self.current_player = player.other();
            GameOutcome::InProgress
        };

        MoveOutcome::Placed {
            piece: PlacedPiece {
                row,
                column,
                player,
            },
            outcome: self.outcome,
        }
    }

    /// Discards the board and starts over: all cells empty, player 1 to
    /// move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
