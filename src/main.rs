//! Terminal chess against a second human at the same keyboard.

use referee::{GameState, PieceKind, Position};
use text_io::read;

fn read_position(input: &str) -> Option<Position> {
    match input.parse::<Position>() {
        Ok(pos) => Some(pos),
        Err(e) => {
            println!("{}", e);
            None
        }
    }
}

fn main() {
    let mut game = GameState::new();
    println!("Terminal chess. Enter moves as two squares, e.g. `e2 e4`.");
    println!("Commands: `restart`, `quit`.");
    loop {
        println!("\n{}", game);
        if let Some(outcome) = game.outcome() {
            println!("{}", outcome);
            println!("Type `restart` for a new game or `quit` to leave.");
        } else if game.is_in_check(game.side_to_move()) {
            println!("{} is in check!", game.side_to_move());
        }

        let first: String = read!();
        match first.as_str() {
            "quit" | "q" => break,
            "restart" => {
                game.restart();
                continue;
            }
            _ => {}
        }
        let source = match read_position(&first) {
            Some(pos) => pos,
            None => continue,
        };
        let second: String = read!();
        let target = match read_position(&second) {
            Some(pos) => pos,
            None => continue,
        };

        let piece = game.board().piece_at(source);
        if !game.attempt_move(piece, source, target) {
            println!("Illegal move.");
            continue;
        }
        while game.pending_promotion().is_some() {
            println!("Promote to (q, r, b, n):");
            let choice: String = read!();
            let kind = match choice.as_str() {
                "q" => PieceKind::Queen,
                "r" => PieceKind::Rook,
                "b" => PieceKind::Bishop,
                "n" => PieceKind::Knight,
                _ => continue,
            };
            game.promote(kind);
        }
        if let Some(record) = game.board().last_move() {
            println!("Played {}.", record);
        }
    }
}
