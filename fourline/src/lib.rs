pub use board::*;
pub use game::*;
pub use visualization::*;
pub use win::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod game;
mod visualization;
mod win;
