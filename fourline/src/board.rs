use serde::{Deserialize, Serialize};

pub const BOARD_WIDTH: i8 = 7;
pub const BOARD_HEIGHT: i8 = 6;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The opponent of this player.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

/// A single cell of the grid.
///
/// A cell is set at most once per game. There is no way to clear or
/// overwrite a taken cell short of rebuilding the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(PlayerId),
}

/// A rectangular grid of cells, addressed by `(row, column)`.
///
/// Row `0` is the top row. Gravity fills a column from row `height - 1`
/// upward, so the drop row for a column is the bottommost empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i8,
    height: i8,
    /// Row-major, `cells[row * width + column]`.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: i8, height: i8) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    /// The standard 7 x 6 board.
    pub fn standard() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    pub fn width(&self) -> i8 {
        self.width
    }

    pub fn height(&self) -> i8 {
        self.height
    }

    pub fn is_in_bounds(&self, row: i8, column: i8) -> bool {
        row >= 0 && row < self.height && column >= 0 && column < self.width
    }

    /// The cell at `(row, column)`. Coordinates must be in bounds.
    pub fn get(&self, row: i8, column: i8) -> Cell {
        debug_assert!(self.is_in_bounds(row, column));
        self.cells[row as usize * self.width as usize + column as usize]
    }

    /// Scans `column` from the bottom row upward and returns the first
    /// empty row, or `None` if the column is full.
    ///
    /// `column` must be in `0..width`; the session layer checks this
    /// before calling.
    pub fn find_drop_row(&self, column: i8) -> Option<i8> {
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, column) == Cell::Empty)
    }

    /// Marks the cell at `(row, column)` as taken by `player`.
    ///
    /// The cell must be empty, which holds whenever `row` came from
    /// [`Self::find_drop_row()`].
    pub fn place(&mut self, row: i8, column: i8, player: PlayerId) {
        debug_assert!(self.get(row, column) == Cell::Empty);
        self.cells[row as usize * self.width as usize + column as usize] = Cell::Taken(player);
    }

    /// True iff no cell is empty. Board-full alone does not decide a
    /// draw: the move that filled the board may also have won, so the
    /// win check comes first.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }
}
