use pstbot::board::cozy::CozyRules;
use pstbot::board::Rules;
use pstbot::search::alphabeta::SearchConfig;
use pstbot::Session;
use std::fs::File;
use std::io::{BufRead, BufReader};

#[derive(Debug, serde::Deserialize)]
struct PosRec {
    fen: String,
    best: String,
}

fn load_positions() -> Vec<PosRec> {
    let path = std::env::var("PSTBOT_TEST_POSITIONS")
        .unwrap_or_else(|_| "tests/data/positions_sample.jsonl".to_string());
    let f = File::open(&path).expect("open positions fixture");
    BufReader::new(f)
        .lines()
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(&l).ok())
        .collect()
}

#[test]
fn fixture_positions_have_forced_best_moves() {
    let poses = load_positions();
    assert!(!poses.is_empty(), "empty fixture file");
    for rec in &poses {
        let rules = CozyRules::from_fen(&rec.fen).expect("valid fen");
        let color = rules.side_to_move();
        let mut session = Session::new(rules, color, SearchConfig::default());
        let mv = session.choose_own_move().unwrap().expect("expected a move");
        assert_eq!(mv.to_string(), rec.best, "FEN {}", rec.fen);
    }
}
