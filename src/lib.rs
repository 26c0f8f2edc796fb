//! Rules engine and search agent for the Game of the Amazons.
//!
//! The game is played on a 10x10 board. Each side owns four queens that move
//! like chess queens; after relocating, the moved queen throws a spear (again
//! along a queen line) which occupies its target square for the rest of the
//! game. A side that cannot move loses.
//!
//! `game_repr` owns the board state, legality checks and lazy move
//! enumeration; `agent` holds the player seam and the minimax search that
//! picks moves for an automated player.

pub mod agent;
pub mod game_repr;
