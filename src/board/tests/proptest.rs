//! Property-based tests using proptest.

use crate::board::{Bitboard, Board, Color, Piece, Square};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn square_strategy() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(Square::from_index)
}

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn planes_overlap(board: &Board) -> bool {
    let mut seen = Bitboard::EMPTY;
    for color in Color::BOTH {
        for piece in Piece::ALL {
            let plane = board.pieces_of(color, piece);
            if !seen.and(plane).is_empty() {
                return true;
            }
            seen = seen.or(plane);
        }
    }
    false
}

fn plane_union(board: &Board) -> Bitboard {
    Color::BOTH
        .into_iter()
        .flat_map(|c| Piece::ALL.into_iter().map(move |p| (c, p)))
        .fold(Bitboard::EMPTY, |acc, (c, p)| acc.or(board.pieces_of(c, p)))
}

proptest! {
    /// Property: a set square reads back as set, and set is idempotent
    #[test]
    fn prop_set_then_is_set(bits in any::<u64>(), sq in square_strategy()) {
        let bb = Bitboard(bits);
        prop_assert!(bb.set(sq).is_set(sq));
        prop_assert_eq!(bb.set(sq).set(sq), bb.set(sq));
    }

    /// Property: clear after set restores the original bit, and clear is idempotent
    #[test]
    fn prop_clear_restores_bit(bits in any::<u64>(), sq in square_strategy()) {
        let bb = Bitboard(bits);
        let restored = bb.set(sq).clear(sq);
        prop_assert!(!restored.is_set(sq));
        prop_assert_eq!(restored.clear(sq), restored);
        if !bb.is_set(sq) {
            prop_assert_eq!(restored, bb);
        }
        // Other squares untouched
        prop_assert_eq!(restored.0 | (1u64 << sq.index()), bb.0 | (1u64 << sq.index()));
    }

    /// Property: random pseudo-legal playouts keep every board invariant
    #[test]
    fn prop_playout_keeps_invariants(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            let mover = board.side_to_move();
            let before = board.fullmove_number();

            prop_assert!(board.play_move(mv).is_ok(), "generated move {:?} rejected", mv);

            prop_assert_eq!(board.side_to_move(), mover.opponent());
            let expected_number = if mover == Color::Black { before + 1 } else { before };
            prop_assert_eq!(board.fullmove_number(), expected_number);
            prop_assert!(!planes_overlap(&board));
            prop_assert_eq!(board.all_occupied(), plane_union(&board));
            prop_assert_eq!(
                board.occupied_by(Color::White).or(board.occupied_by(Color::Black)),
                board.all_occupied()
            );
        }
    }

    /// Property: lookup is empty exactly when no plane holds the square
    #[test]
    fn prop_lookup_matches_planes(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            prop_assert!(board.play_move(mv).is_ok());
        }

        for sq in Square::all() {
            match board.piece_at(sq) {
                None => prop_assert!(!plane_union(&board).is_set(sq)),
                Some((color, piece)) => prop_assert!(board.pieces_of(color, piece).is_set(sq)),
            }
        }
    }

    /// Property: generated moves start on the mover's pieces and never land on them
    #[test]
    fn prop_moves_respect_own_occupancy(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let own = board.occupied_by(board.side_to_move());
            let enemy = board.occupied_by(board.side_to_move().opponent());
            for mv in &moves {
                prop_assert!(own.is_set(mv.from()));
                prop_assert!(!own.is_set(mv.to()));
                prop_assert_eq!(mv.is_capture(), enemy.is_set(mv.to()));
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            prop_assert!(board.play_move(mv).is_ok());
        }
    }
}
