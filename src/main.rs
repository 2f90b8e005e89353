//! Interactive play loop: print the board, prompt the color on move for a
//! start and end square, report rejections and re-prompt. All validation
//! lives in the library; this binary is display and input glue only.

use std::io::{self, BufRead, Write};

use chess_validator::{BoardBuilder, Color, Game, Piece, Square};

fn demo_game() -> Game {
    // Sparse demo position: rooks on a1/h1, pawns on a2/b2, a lone
    // square-knight on d4.
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .piece(Square(0, 7), Color::White, Piece::Rook)
        .piece(Square(1, 0), Color::White, Piece::Pawn)
        .piece(Square(1, 1), Color::White, Piece::Pawn)
        .piece(Square(3, 3), Color::White, Piece::SquareKnight)
        .build()
        .expect("demo placements are on the board");
    Game::from_board(board)
}

fn prompt(stdin: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line.trim().to_string()))
}

fn main() -> io::Result<()> {
    let mut game = if std::env::args().any(|arg| arg == "--demo") {
        demo_game()
    } else {
        Game::new()
    };

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    loop {
        println!("{}", game.board());
        let turn = game.turn();
        let Some(start) = prompt(&mut stdin, &format!("{turn} player's move (start): "))? else {
            return Ok(());
        };
        let Some(end) = prompt(&mut stdin, &format!("{turn} player's move (end): "))? else {
            return Ok(());
        };
        if let Err(err) = game.attempt_move(&start, &end) {
            println!("Invalid move: {err}. Try again.");
        }
    }
}
