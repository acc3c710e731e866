//! End-to-end scenarios over the FEN/UCI entry points.

use chess_rules::{
    apply_uci, is_legal, status_from_fen, DrawReason, EngineError, GameStatus, Position, UciMove,
};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn legal(fen: &str, uci: &str) -> bool {
    let position = Position::from_fen(fen).expect("valid FEN");
    is_legal(&position, UciMove::parse(uci).expect("valid UCI"), true)
}

#[test]
fn test_opening_pawn_push() {
    let next = apply_uci(STARTPOS, "e2e4").unwrap();
    assert_eq!(
        next,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
    assert_eq!(
        status_from_fen(&next, &[STARTPOS]).unwrap(),
        GameStatus::InProgress
    );
}

#[test]
fn test_fools_mate() {
    let before = "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2";
    let after = apply_uci(before, "d8h4").unwrap();
    assert_eq!(
        after,
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
    );
    assert_eq!(
        status_from_fen(&after, &[before]).unwrap(),
        GameStatus::BlackWon
    );
}

#[test]
fn test_pinned_queen() {
    let fen = "4r3/8/8/8/8/8/4Q3/4K3 w - - 0 1";
    assert!(!legal(fen, "e2d1"));
    assert!(legal(fen, "e1f1"));
    assert_eq!(
        apply_uci(fen, "e2d1"),
        Err(EngineError::IllegalMove("e2d1".to_string()))
    );
}

#[test]
fn test_castling_through_attacked_square() {
    // black bishop on c4 covers f1
    let fen = "r3k2r/pppppppp/8/8/2b5/8/PPPP1PPP/R3K2R w KQkq - 0 1";
    assert!(!legal(fen, "e1g1"));
    assert!(legal(fen, "e1c1"));
    assert!(matches!(
        apply_uci(fen, "e1g1"),
        Err(EngineError::IllegalMove(_))
    ));
}

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    let mut history: Vec<String> = Vec::new();
    let mut fen = STARTPOS.to_string();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

    for (ply, uci) in shuffle.iter().cycle().take(8).enumerate() {
        let next = apply_uci(&fen, uci).unwrap();
        history.push(fen);
        fen = next;

        let status = status_from_fen(&fen, &history).unwrap();
        if ply < 7 {
            assert_eq!(status, GameStatus::InProgress, "after ply {}", ply + 1);
        } else {
            assert_eq!(status, GameStatus::Draw(DrawReason::ThreefoldRepetition));
        }
    }
    assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 8 5");
}

#[test]
fn test_illegal_move_from_wrong_side() {
    assert!(matches!(
        apply_uci(STARTPOS, "e7e5"),
        Err(EngineError::IllegalMove(_))
    ));
}

#[test]
fn test_malformed_inputs() {
    assert!(matches!(
        apply_uci("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1", "e2e4"),
        Err(EngineError::Fen(_))
    ));
    assert!(matches!(
        apply_uci(STARTPOS, "e2e9"),
        Err(EngineError::Move(_))
    ));
    assert!(matches!(
        apply_uci(STARTPOS, "e7e8x"),
        Err(EngineError::Move(_))
    ));
}

#[test]
fn test_promotion_and_underpromotion() {
    let fen = "8/4P2k/8/8/8/8/8/4K3 w - - 0 1";
    assert_eq!(apply_uci(fen, "e7e8").unwrap(), "4Q3/7k/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(apply_uci(fen, "e7e8r").unwrap(), "4R3/7k/8/8/8/8/8/4K3 b - - 0 1");
}
