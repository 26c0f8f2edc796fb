use amazons_engine::agent::{AiPlayer, Player};
use amazons_engine::game_repr::{Board, Color, Error};

/// Minimal turn loop: two automated players alternate until one side has no
/// reply. The loop owns the authoritative board; players only see a
/// reference and hand back a move.
fn main() -> Result<(), Error> {
    env_logger::init();

    let mut board = Board::new();
    let mut white = AiPlayer::new(Color::White);
    let mut black = AiPlayer::new(Color::Black);

    loop {
        if let Some(winner) = board.winner() {
            println!("\n{board}");
            println!("{winner:?} wins after {} moves", board.num_moves());
            return Ok(());
        }

        let mv = match board.turn() {
            Color::White => white.next_move(&board)?,
            Color::Black => black.next_move(&board)?,
        };
        println!("{:>3}. {:?} {mv}", board.num_moves() + 1, board.turn());
        board.make_move(mv)?;
    }
}
