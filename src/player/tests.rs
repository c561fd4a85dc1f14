use crate::board::square::*;
use crate::board::{Alliance, Board, PieceType, Square};
use crate::chess_move::{CastleChessMove, CastleSide, ChessMove, MoveFactory};
use crate::chess_position;

use super::MoveStatus;

fn play(board: &Board, from: Square, to: Square) -> Board {
    let chess_move = MoveFactory::create_move(board, from, to);
    let transition = board.current_player().make_move(&chess_move).unwrap();
    assert_eq!(
        MoveStatus::Done,
        transition.status(),
        "{} should be playable",
        chess_move
    );
    transition.into_board()
}

fn has_castle(board: &Board, alliance: Alliance, side: CastleSide) -> bool {
    board
        .player(alliance)
        .legal_moves()
        .iter()
        .any(|chess_move| matches!(chess_move, ChessMove::Castle(castle) if castle.side() == side))
}

#[test]
fn test_standard_position_has_twenty_moves_per_side() {
    let board = Board::create_standard_board();
    println!("{}", board);
    assert_eq!(Alliance::White, board.current_player().alliance());
    assert_eq!(20, board.white_player().legal_moves().len());
    assert_eq!(20, board.black_player().legal_moves().len());
    assert_eq!(40, board.all_legal_moves().count());

    let board = play(&board, E2, E4);
    assert_eq!(Alliance::Black, board.current_player().alliance());
    assert_eq!(20, board.current_player().legal_moves().len());
}

#[test]
fn test_black_has_twenty_replies_to_every_opening_move() {
    let board = Board::create_standard_board();
    let white = board.white_player();
    let mut played = 0;
    for chess_move in white.legal_moves() {
        let transition = white.make_move(chess_move).unwrap();
        assert!(transition.status().is_done(), "{} should be playable", chess_move);
        let after = transition.to_board();
        assert_eq!(Alliance::Black, after.current_player().alliance());
        assert_eq!(
            20,
            after.current_player().legal_moves().len(),
            "black replies after {}",
            chess_move
        );
        played += 1;
    }
    assert_eq!(20, played);
}

#[test]
fn test_fools_mate() {
    let board = Board::create_standard_board();
    let board = play(&board, F2, F3);
    let board = play(&board, E7, E5);
    let board = play(&board, G2, G4);
    let board = play(&board, D8, H4);
    println!("{}", board);

    let white = board.current_player();
    assert_eq!(Alliance::White, white.alliance());
    assert!(white.is_in_check());
    assert!(white.is_in_checkmate().unwrap());
    assert!(!white.is_in_stalemate().unwrap());
    assert!(board.is_threatened_immediate());
    assert!(board.is_end_game().unwrap());
}

#[test]
fn test_en_passant() {
    let board = Board::create_standard_board();
    let board = play(&board, A2, A3);
    let board = play(&board, D7, D5);
    let board = play(&board, A3, A4);
    let board = play(&board, D5, D4);
    let board = play(&board, E2, E4);
    println!("{}", board);

    let jumped_pawn = *board.get(E4).unwrap();
    assert_eq!(Some(&jumped_pawn), board.en_passant_pawn());

    let en_passant = MoveFactory::create_move(&board, D4, E3);
    assert!(matches!(en_passant, ChessMove::EnPassant(_)));
    assert!(board.current_player().is_move_legal(&en_passant));

    let board = play(&board, D4, E3);
    println!("{}", board);
    assert!(!board.is_occupied(E4));
    assert_eq!(Alliance::Black, board.get(E3).unwrap().alliance());
    assert_eq!(15, board.white_pieces().len());
    assert_eq!(None, board.en_passant_pawn());
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let board = Board::create_standard_board();
    let board = play(&board, E2, E4);
    let board = play(&board, A7, A6);
    let board = play(&board, E4, E5);
    let board = play(&board, D7, D5);
    assert!(MoveFactory::create_move(&board, E5, D6).is_attack());

    let board = play(&board, H2, H3);
    let board = play(&board, H7, H6);
    assert!(MoveFactory::create_move(&board, E5, D6).is_null());
}

#[test]
fn test_castling() {
    let board = chess_position! {
        r...k..r
        pppppppp
        ........
        ........
        ........
        ........
        PPPPPPPP
        R...K..R
    };
    assert!(has_castle(&board, Alliance::White, CastleSide::KingSide));
    assert!(has_castle(&board, Alliance::White, CastleSide::QueenSide));
    assert!(has_castle(&board, Alliance::Black, CastleSide::KingSide));
    assert!(has_castle(&board, Alliance::Black, CastleSide::QueenSide));

    let board = play(&board, E1, G1);
    println!("{}", board);
    let king = board.get(G1).unwrap();
    assert!(king.is_king());
    assert!(king.is_castled());
    assert!(board.get(F1).unwrap().is_rook());
    assert!(!board.is_occupied(H1));
    assert!(!has_castle(&board, Alliance::White, CastleSide::QueenSide));

    let board = play(&board, E8, C8);
    assert!(board.get(C8).unwrap().is_king());
    assert!(board.get(D8).unwrap().is_rook());
    assert!(!board.is_occupied(A8));
}

#[test]
fn test_castling_denied_through_attacked_square() {
    let board = chess_position! {
        ....kr..
        ........
        ........
        ........
        ........
        ........
        ........
        R...K..R
    };
    println!("{}", board);
    assert!(!board.white_player().is_in_check());
    assert!(!has_castle(&board, Alliance::White, CastleSide::KingSide));
    assert!(has_castle(&board, Alliance::White, CastleSide::QueenSide));
}

#[test]
fn test_queen_side_castling_blocked_by_piece_on_knight_square() {
    let board = chess_position! {
        rn..k..r
        ........
        ........
        ........
        ........
        ........
        ........
        RN..K..R
    };
    println!("{}", board);
    // c1, d1, c8 and d8 are empty and unattacked; only b1 and b8 are occupied
    assert!(!has_castle(&board, Alliance::White, CastleSide::QueenSide));
    assert!(has_castle(&board, Alliance::White, CastleSide::KingSide));
    assert!(!has_castle(&board, Alliance::Black, CastleSide::QueenSide));
    assert!(has_castle(&board, Alliance::Black, CastleSide::KingSide));

    let blocked = MoveFactory::create_move(&board, E1, C1);
    assert!(blocked.is_null());
    assert_eq!(
        MoveStatus::IllegalMove,
        board.current_player().make_move(&blocked).unwrap().status()
    );
}

#[test]
fn test_castling_denied_after_king_or_rook_moved() {
    let board = chess_position! {
        r...k..r
        ........
        ........
        ........
        ........
        ........
        ........
        R...K..R
    };
    let board = play(&board, H1, H2);
    let board = play(&board, A8, A7);
    assert!(!has_castle(&board, Alliance::White, CastleSide::KingSide));
    assert!(has_castle(&board, Alliance::White, CastleSide::QueenSide));
    assert!(has_castle(&board, Alliance::Black, CastleSide::KingSide));
    assert!(!has_castle(&board, Alliance::Black, CastleSide::QueenSide));

    let board = play(&board, E1, D1);
    let board = play(&board, A7, A8);
    let board = play(&board, D1, E1);
    assert!(!has_castle(&board, Alliance::White, CastleSide::QueenSide));
}

#[test]
fn test_castling_while_in_check_is_illegal() {
    let board = chess_position! {
        k.......
        ........
        ........
        ....r...
        ........
        ........
        ........
        ....K..R
    };
    let white = board.current_player();
    assert!(white.is_in_check());
    assert!(!has_castle(&board, Alliance::White, CastleSide::KingSide));

    let castle = ChessMove::Castle(CastleChessMove::new(
        CastleSide::KingSide,
        *white.king(),
        G1,
        *board.get(H1).unwrap(),
        F1,
    ));
    let transition = white.make_move(&castle).unwrap();
    assert_eq!(MoveStatus::IllegalMove, transition.status());
    assert_eq!(&board, transition.to_board());
}

#[test]
fn test_pinned_piece_leaves_player_in_check() {
    let board = chess_position! {
        k...r...
        ........
        ........
        ........
        ........
        ........
        ....B...
        ....K...
    };
    let bishop_move = MoveFactory::create_move(&board, E2, D3);
    assert!(board.current_player().is_move_legal(&bishop_move));

    let transition = board.current_player().make_move(&bishop_move).unwrap();
    assert_eq!(MoveStatus::LeavesPlayerInCheck, transition.status());
    assert_eq!(&board, transition.to_board());
    assert!(std::ptr::eq(&board, transition.to_board()));
    assert!(std::ptr::eq(&board, transition.from_board()));
    assert_eq!(&bishop_move, transition.chess_move());
}

#[test]
fn test_king_cannot_step_into_pawn_attack() {
    let board = chess_position! {
        k.......
        ........
        ........
        ........
        ........
        ...p....
        ........
        ....K...
    };
    // the pawn on d3 covers e2
    let transition = board
        .current_player()
        .make_move(&MoveFactory::create_move(&board, E1, E2))
        .unwrap();
    assert_eq!(MoveStatus::LeavesPlayerInCheck, transition.status());
    let transition = board
        .current_player()
        .make_move(&MoveFactory::create_move(&board, E1, F2))
        .unwrap();
    assert_eq!(MoveStatus::Done, transition.status());
}

#[test]
fn test_illegal_moves() {
    let board = Board::create_standard_board();
    let white = board.current_player();

    let transition = white.make_move(&ChessMove::Null).unwrap();
    assert_eq!(MoveStatus::IllegalMove, transition.status());

    // black's move, offered to white
    let black_move = MoveFactory::create_move(&board, E7, E5);
    assert!(!black_move.is_null());
    let transition = white.make_move(&black_move).unwrap();
    assert_eq!(MoveStatus::IllegalMove, transition.status());
    let unchanged = transition.into_board();
    assert_eq!(board, unchanged);
}

#[test]
fn test_stalemate() {
    let board = chess_position! {
        black_to_move:
        k.......
        ........
        .Q......
        ........
        ........
        ........
        ........
        .......K
    };
    let black = board.current_player();
    assert!(!black.is_in_check());
    assert_eq!(3, black.legal_moves().len());
    assert!(black.is_in_stalemate().unwrap());
    assert!(!black.is_in_checkmate().unwrap());
    assert!(board.is_end_game().unwrap());
    assert!(!board.is_threatened_immediate());
}

#[test]
fn test_back_rank_mate() {
    let board = chess_position! {
        ......k.
        .....ppp
        ........
        ........
        ........
        ........
        ........
        R.....K.
    };
    let board = play(&board, A1, A8);
    println!("{}", board);
    let black = board.current_player();
    assert!(black.is_in_check());
    assert!(black.is_in_checkmate().unwrap());
}

#[test]
fn test_promotion_through_make_move() {
    let board = chess_position! {
        ....k...
        P.......
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    let promotion = MoveFactory::create_move(&board, A7, A8);
    assert!(matches!(promotion, ChessMove::PawnPromotion(_)));
    let board = play(&board, A7, A8);
    assert_eq!(PieceType::Queen, board.get(A8).unwrap().piece_type());
    assert!(board.current_player().is_in_check());
}

#[test]
fn test_is_in_check_is_idempotent() {
    let board = Board::create_standard_board();
    let board = play(&board, E2, E4);
    let board = play(&board, F7, F6);
    let board = play(&board, D1, H5);
    let first = board.current_player().is_in_check();
    let second = board.current_player().is_in_check();
    assert!(first);
    assert_eq!(first, second);
}

#[test]
fn test_pieces_match_occupied_tiles() {
    let board = Board::create_standard_board();
    let board = play(&board, E2, E4);
    let board = play(&board, D7, D5);
    let board = play(&board, E4, D5);
    let board = play(&board, D8, D5);

    let occupied: Vec<_> = board
        .tiles()
        .iter()
        .filter_map(|tile| tile.piece())
        .copied()
        .collect();
    let mut pieces: Vec<_> = board.all_pieces().copied().collect();
    let mut tiles = occupied.clone();
    pieces.sort();
    tiles.sort();
    assert_eq!(tiles, pieces);
    assert_eq!(30, occupied.len());
    for alliance in Alliance::ALL {
        let kings = board
            .pieces(alliance)
            .iter()
            .filter(|piece| piece.is_king())
            .count();
        assert_eq!(1, kings);
    }
}

#[test]
fn test_transition_move_is_recorded() {
    let board = Board::create_standard_board();
    assert!(board.transition_move().is_null());
    let chess_move = MoveFactory::create_move(&board, G1, F3);
    let board = play(&board, G1, F3);
    assert_eq!(&chess_move, board.transition_move());
}
