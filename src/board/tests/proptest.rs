//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Board, BoardBuilder, Color, Piece, Square};
use crate::game::Game;

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..8usize, 0..8usize).prop_map(|(rank, file)| Square(rank, file))
}

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    proptest::sample::select(Piece::ALL.to_vec())
}

/// A sparse random position: up to eight placements on an 8×8 board.
fn board_strategy() -> impl Strategy<Value = Board> {
    proptest::collection::vec(
        (square_strategy(), color_strategy(), piece_strategy()),
        0..=8,
    )
    .prop_map(|placements| {
        let mut builder = BoardBuilder::new();
        for (square, color, piece) in placements {
            builder = builder.piece(square, color, piece);
        }
        builder.build().unwrap()
    })
}

proptest! {
    /// Legality is a pure function: same inputs, same answer.
    #[test]
    fn prop_legality_is_pure(
        board in board_strategy(),
        piece in piece_strategy(),
        color in color_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let first = board.is_legal_move(piece, color, from, to);
        let second = board.is_legal_move(piece, color, from, to);
        prop_assert_eq!(first, second);
    }

    /// Queen legality is exactly rook-legality OR bishop-legality.
    #[test]
    fn prop_queen_is_rook_or_bishop(
        board in board_strategy(),
        color in color_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let queen = board.is_legal_move(Piece::Queen, color, from, to);
        let rook = board.is_legal_move(Piece::Rook, color, from, to);
        let bishop = board.is_legal_move(Piece::Bishop, color, from, to);
        prop_assert_eq!(queen, rook || bishop);
    }

    /// Sliders never pass through an occupied interior square, whatever the
    /// occupant's color.
    #[test]
    fn prop_slider_blocked_by_interior_occupant(
        color in color_strategy(),
        blocker_color in color_strategy(),
        step in 2..8usize,
        blocked_at in 1..8usize,
    ) {
        prop_assume!(blocked_at < step);
        let board = BoardBuilder::new()
            .piece(Square(0, 0), color, Piece::Rook)
            .piece(Square(blocked_at, 0), blocker_color, Piece::Pawn)
            .build()
            .unwrap();
        prop_assert!(!board.is_legal_move(Piece::Rook, color, Square(0, 0), Square(step, 0)));
    }

    /// A rejected attempt never mutates board or turn; an accepted one
    /// always flips the turn.
    #[test]
    fn prop_attempt_move_mutates_only_on_success(
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let mut game = Game::new();
        let before_board = game.board().clone();
        let before_turn = game.turn();

        match game.attempt_move(&from.to_string(), &to.to_string()) {
            Ok(()) => {
                prop_assert_eq!(game.turn(), before_turn.opponent());
                prop_assert_ne!(game.board(), &before_board);
            }
            Err(_) => {
                prop_assert_eq!(game.turn(), before_turn);
                prop_assert_eq!(game.board(), &before_board);
            }
        }
    }

    /// Over any sequence of attempts, the turn flips exactly on successes.
    #[test]
    fn prop_turn_alternates_on_successes(
        attempts in proptest::collection::vec((square_strategy(), square_strategy()), 1..30)
    ) {
        let mut game = Game::new();
        let mut expected = Color::White;
        for (from, to) in attempts {
            if game.attempt_move(&from.to_string(), &to.to_string()).is_ok() {
                expected = expected.opponent();
            }
            prop_assert_eq!(game.turn(), expected);
        }
    }
}
