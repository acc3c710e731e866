//! Command bodies for the `chess-rules` binary.
//!
//! Each command returns a serializable result; [`render`] turns it into the
//! text or JSON printed on stdout.

use std::fmt;

use anyhow::Context;
use chess_core::UciMove;
use chess_rules::{
    apply_move, game_status, legal_moves, perft, perft_divide, GameStatus, Position,
};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Debug, Serialize)]
pub struct ApplyOutput {
    pub fen: String,
    pub status: GameStatus,
}

#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub status: GameStatus,
}

#[derive(Debug, Serialize)]
pub struct LegalOutput {
    pub moves: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PerftOutput {
    pub depth: u32,
    pub nodes: u64,
    /// Count below each root move, only filled by `--divide`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub divide: Vec<(String, u64)>,
}

impl fmt::Display for ApplyOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.fen, self.status)
    }
}

impl fmt::Display for StatusOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)
    }
}

impl fmt::Display for LegalOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.join(" "))
    }
}

impl fmt::Display for PerftOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (mv, count) in &self.divide {
            writeln!(f, "{}: {}", mv, count)?;
        }
        write!(f, "Nodes searched: {}", self.nodes)
    }
}

/// Plays `uci` from `fen`. The status of the new position counts `fen`
/// itself as the last entry of the history.
pub fn apply(fen: &str, uci: &str, history: &[String]) -> anyhow::Result<ApplyOutput> {
    let position = parse_fen(fen)?;
    let mv = UciMove::parse(uci)?;
    let next = apply_move(&position, mv)?;

    let mut earlier = parse_history(history)?;
    earlier.push(position);
    let status = game_status(&next, &earlier);
    tracing::info!(mv = %mv, %status, "applied move");

    Ok(ApplyOutput {
        fen: next.to_fen(),
        status,
    })
}

pub fn status(fen: &str, history: &[String]) -> anyhow::Result<StatusOutput> {
    let position = parse_fen(fen)?;
    let earlier = parse_history(history)?;
    Ok(StatusOutput {
        status: game_status(&position, &earlier),
    })
}

pub fn legal(fen: &str) -> anyhow::Result<LegalOutput> {
    let position = parse_fen(fen)?;
    Ok(LegalOutput {
        moves: legal_moves(&position).into_iter().map(UciMove::to_uci).collect(),
    })
}

pub fn perft_count(fen: &str, depth: u32, divide: bool) -> anyhow::Result<PerftOutput> {
    let position = parse_fen(fen)?;
    let start = std::time::Instant::now();

    let (nodes, divide): (u64, _) = if divide {
        let split = perft_divide(&position, depth);
        (split.iter().map(|(_, n)| n).sum(), split)
    } else {
        (perft(&position, depth), Vec::new())
    };
    tracing::info!(
        depth,
        nodes,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "perft done"
    );

    Ok(PerftOutput {
        depth,
        nodes,
        divide,
    })
}

/// Formats a command result for stdout.
pub fn render<T>(value: &T, format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + fmt::Display,
{
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

fn parse_fen(fen: &str) -> anyhow::Result<Position> {
    Position::from_fen(fen).with_context(|| format!("invalid FEN: {}", fen))
}

fn parse_history(history: &[String]) -> anyhow::Result<Vec<Position>> {
    history.iter().map(|fen| parse_fen(fen)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::DrawReason;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_apply_prints_fen_and_status() {
        let result = apply(STARTPOS, "e2e4", &[]).unwrap();
        assert_eq!(
            result.fen,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        assert_eq!(result.status, GameStatus::InProgress);
        assert_eq!(
            render(&result, OutputFormat::Text).unwrap(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1\nin progress"
        );
    }

    #[test]
    fn test_apply_counts_input_position_as_history() {
        let history = vec![
            STARTPOS.to_string(),
            "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1".to_string(),
            "rnbqkb1r/pppppppp/5n2/8/8/5N2/PPPPPPPP/RNBQKB1R w KQkq - 2 2".to_string(),
            "rnbqkb1r/pppppppp/5n2/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 3 2".to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 4 3".to_string(),
            "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 5 3".to_string(),
        ];
        let result = apply(
            "rnbqkb1r/pppppppp/5n2/8/8/5N2/PPPPPPPP/RNBQKB1R w KQkq - 6 4",
            "f3g1",
            &history,
        )
        .unwrap();
        assert_eq!(result.status, GameStatus::InProgress);

        let mut history = history;
        history.push("rnbqkb1r/pppppppp/5n2/8/8/5N2/PPPPPPPP/RNBQKB1R w KQkq - 6 4".to_string());
        let result = apply(&result.fen, "f6g8", &history).unwrap();
        assert_eq!(
            result.status,
            GameStatus::Draw(DrawReason::ThreefoldRepetition)
        );
    }

    #[test]
    fn test_apply_rejects_illegal_and_malformed_input() {
        assert!(apply(STARTPOS, "e2e5", &[]).is_err());
        assert!(apply(STARTPOS, "e2", &[]).is_err());
        assert!(apply("not a fen", "e2e4", &[]).is_err());
        assert!(apply(STARTPOS, "e2e4", &["garbage".to_string()]).is_err());
    }

    #[test]
    fn test_status_of_checkmate() {
        let result = status(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            &[],
        )
        .unwrap();
        assert_eq!(result.status, GameStatus::BlackWon);
        assert_eq!(render(&result, OutputFormat::Text).unwrap(), "black won");
    }

    #[test]
    fn test_legal_lists_uci_moves() {
        let result = legal(STARTPOS).unwrap();
        assert_eq!(result.moves.len(), 20);
        assert!(result.moves.iter().any(|mv| mv == "g1f3"));

        let promotions = legal("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(promotions.moves.iter().any(|mv| mv == "a7a8n"));
        assert!(legal("bad").is_err());
    }

    #[test]
    fn test_legal_json() {
        let result = legal("7k/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&result, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["moves"], serde_json::json!(["a1b1", "a1a2", "a1b2"]));
    }

    #[test]
    fn test_perft_with_and_without_divide() {
        let plain = perft_count(STARTPOS, 2, false).unwrap();
        assert_eq!(plain.nodes, 400);
        assert!(plain.divide.is_empty());
        assert_eq!(render(&plain, OutputFormat::Text).unwrap(), "Nodes searched: 400");

        let split = perft_count(STARTPOS, 1, true).unwrap();
        assert_eq!(split.nodes, 20);
        assert_eq!(split.divide.len(), 20);
        let text = render(&split, OutputFormat::Text).unwrap();
        assert!(text.starts_with("a2a3: 1\n"));
        assert!(text.ends_with("Nodes searched: 20"));
    }

    #[test]
    fn test_status_json_uses_serde_names() {
        let result = status("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", &[]).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&result, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["status"], serde_json::json!({ "Draw": "Stalemate" }));
    }
}
