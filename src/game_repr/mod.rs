mod board;
mod errors;
mod moves;
mod piece;
mod square;


pub use board::*;
pub use errors::*;
pub use moves::*;
pub use piece::*;
pub use square::*;
