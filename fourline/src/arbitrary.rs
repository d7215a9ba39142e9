use crate::{Board, PlayerId};

/// A sequence of column choices, mostly valid but with the occasional
/// out-of-range pick mixed in.
#[derive(Clone, Debug)]
pub struct DropSequence(Vec<i8>);

impl DropSequence {
    pub fn columns(&self) -> impl Iterator<Item = i8> + '_ {
        self.0.iter().copied()
    }

    /// Replays the sequence onto a standard board with alternating
    /// players, skipping out-of-range and full columns.
    pub fn into_board(self) -> Board {
        let mut board = Board::standard();
        let mut player = PlayerId::One;
        for column in self.0 {
            if !(0..board.width()).contains(&column) {
                continue;
            }
            if let Some(row) = board.find_drop_row(column) {
                board.place(row, column, player);
                player = player.other();
            }
        }
        board
    }
}

impl quickcheck::Arbitrary for DropSequence {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = usize::arbitrary(g) % 60;
        let columns = (0..len)
            // Columns in -1..=7, so both edges of the valid range get hit
            .map(|_| (u8::arbitrary(g) % 9) as i8 - 1)
            .collect();
        DropSequence(columns)
    }
}

impl quickcheck::Arbitrary for PlayerId {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[PlayerId::One, PlayerId::Two]).unwrap()
    }
}
