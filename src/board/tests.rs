use super::square::*;
use super::*;
use crate::chess_position;

#[test]
fn test_standard_board_layout() {
    let board = Board::create_standard_board();
    println!("{}", board);

    assert_eq!(16, board.white_pieces().len());
    assert_eq!(16, board.black_pieces().len());
    assert_eq!(Alliance::White, board.next_move_maker());
    assert_eq!(None, board.en_passant_pawn());
    assert!(board.transition_move().is_null());

    assert_eq!(
        Some(&Piece::new(PieceType::Rook, Alliance::Black, A8)),
        board.get(A8)
    );
    assert_eq!(
        Some(&Piece::new(PieceType::King, Alliance::White, E1)),
        board.get(E1)
    );
    assert_eq!(
        Some(&Piece::new(PieceType::Queen, Alliance::Black, D8)),
        board.get(D8)
    );
    for square in ORDERED.iter().skip(16).take(32) {
        assert!(!board.tile(*square).is_occupied());
    }
    assert_eq!(Board::default(), board);
}

#[test]
fn test_display() {
    let board = Board::create_standard_board();
    let expected = [
        "  r  n  b  q  k  b  n  r",
        "  p  p  p  p  p  p  p  p",
        "  -  -  -  -  -  -  -  -",
        "  -  -  -  -  -  -  -  -",
        "  -  -  -  -  -  -  -  -",
        "  -  -  -  -  -  -  -  -",
        "  P  P  P  P  P  P  P  P",
        "  R  N  B  Q  K  B  N  R",
    ]
    .join("\n")
        + "\n";
    assert_eq!(expected, board.to_string());
}

#[test]
fn test_missing_king_is_an_error() {
    let mut builder = Builder::new();
    builder.set_piece(Piece::new(PieceType::King, Alliance::White, E1));
    assert_eq!(
        Err(BoardError::KingNotEstablished {
            alliance: Alliance::Black,
            count: 0
        }),
        builder.build()
    );
}

#[test]
fn test_two_kings_is_an_error() {
    let mut builder = Builder::new();
    builder
        .set_piece(Piece::new(PieceType::King, Alliance::White, E1))
        .set_piece(Piece::new(PieceType::King, Alliance::White, D1))
        .set_piece(Piece::new(PieceType::King, Alliance::Black, E8));
    assert_eq!(
        Err(BoardError::KingNotEstablished {
            alliance: Alliance::White,
            count: 2
        }),
        builder.build()
    );
}

#[test]
fn test_chess_position_macro() {
    let board = chess_position! {
        black_to_move:
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    assert_eq!(Alliance::Black, board.next_move_maker());
    assert_eq!(Alliance::Black, board.current_player().alliance());
    assert_eq!(1, board.white_pieces().len());
    assert_eq!(E8, board.black_player().king().position());
    assert_eq!(5, board.current_player().legal_moves().len());
}

#[test]
fn test_players() {
    let board = Board::create_standard_board();
    let white = board.white_player();
    assert_eq!(Alliance::White, white.alliance());
    assert_eq!(Alliance::Black, white.opponent().alliance());
    assert_eq!(E1, white.king().position());
    assert_eq!(16, white.active_pieces().len());
    assert!(!white.is_in_check());
    assert!(!board.is_threatened_immediate());
    assert!(!board.is_end_game().unwrap());
    assert_eq!("White", white.to_string());
}
