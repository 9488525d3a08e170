use pretty_assertions::assert_eq;
use pstbot::board::cozy::CozyRules;
use pstbot::board::{PieceType, Rules, Square};

const FENS: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 4",
    // En passant available on f6.
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    // Promotions for both sides.
    "7k/P7/8/8/8/8/p7/7K w - - 0 1",
];

fn roundtrip_every_move<R: Rules>(mut rules: R, label: &str) {
    let before = rules.serialize_position();
    for desc in rules.legal_moves() {
        rules.apply_move(&desc).unwrap();
        rules.undo_last_move().unwrap();
        assert_eq!(rules.serialize_position(), before, "{label}: {desc}");
    }
}

#[test]
fn cozy_apply_undo_restores_serialized_position() {
    for fen in FENS {
        roundtrip_every_move(CozyRules::from_fen(fen).unwrap(), fen);
    }
}

#[test]
fn cozy_castling_reports_king_destination_without_capture() {
    let mut rules =
        CozyRules::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    for (uci, col) in [("e1h1", 6u8), ("e1a1", 2u8)] {
        let desc = rules
            .legal_moves()
            .into_iter()
            .find(|d| d.to_string() == uci)
            .unwrap_or_else(|| panic!("{uci} not legal"));
        let m = rules.apply_move(&desc).unwrap();
        assert_eq!(
            (m.piece, m.captured, m.to),
            (PieceType::King, None, Square::new(0, col)),
            "{uci}"
        );
        rules.undo_last_move().unwrap();
    }
}

#[test]
fn cozy_undo_without_apply_is_an_error() {
    let mut rules = CozyRules::startpos();
    assert!(rules.undo_last_move().is_err());
}

#[cfg(feature = "board-pleco")]
mod pleco {
    use super::{roundtrip_every_move, FENS};
    use pstbot::board::pleco::PlecoRules;
    use pstbot::board::Rules;

    #[test]
    fn pleco_apply_undo_restores_serialized_position() {
        for fen in FENS {
            roundtrip_every_move(PlecoRules::from_fen(fen).unwrap(), fen);
        }
    }

    #[test]
    fn pleco_undo_without_apply_is_an_error() {
        let mut rules = PlecoRules::startpos();
        assert!(rules.undo_last_move().is_err());
    }

    // Positions with castling rights are matched separately: the two
    // backends print different UCI strings for castling (king-takes-rook
    // vs king destination), so the string pairing below can't line up.
    #[test]
    fn backends_agree_on_move_records() {
        use pstbot::board::cozy::CozyRules;
        for fen in [FENS[0], FENS[2], FENS[3]] {
            let mut pleco = PlecoRules::from_fen(fen).unwrap();
            let mut cozy = CozyRules::from_fen(fen).unwrap();
            let mut pleco_moves: Vec<String> =
                pleco.legal_moves().iter().map(|d| d.to_string()).collect();
            let mut cozy_moves: Vec<String> =
                cozy.legal_moves().iter().map(|d| d.to_string()).collect();
            pleco_moves.sort();
            cozy_moves.sort();
            assert_eq!(pleco_moves, cozy_moves, "legal moves differ for {fen}");

            for uci in pleco_moves {
                let pd = pleco.legal_moves().into_iter().find(|d| d.to_string() == uci).unwrap();
                let cd = cozy.legal_moves().into_iter().find(|d| d.to_string() == uci).unwrap();
                let pm = pleco.apply_move(&pd).unwrap();
                let cm = cozy.apply_move(&cd).unwrap();
                assert_eq!(pm, cm, "move record differs for {uci} in {fen}");
                pleco.undo_last_move().unwrap();
                cozy.undo_last_move().unwrap();
            }
        }
    }

    #[test]
    fn backends_agree_on_castling_records() {
        use pstbot::board::cozy::CozyRules;
        let fen = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";
        for (pleco_uci, cozy_uci) in [("e1g1", "e1h1"), ("e1c1", "e1a1")] {
            let mut pleco = PlecoRules::from_fen(fen).unwrap();
            let mut cozy = CozyRules::from_fen(fen).unwrap();
            let pd = pleco
                .legal_moves()
                .into_iter()
                .find(|d| d.to_string() == pleco_uci)
                .unwrap_or_else(|| panic!("{pleco_uci} not legal"));
            let cd = cozy
                .legal_moves()
                .into_iter()
                .find(|d| d.to_string() == cozy_uci)
                .unwrap_or_else(|| panic!("{cozy_uci} not legal"));
            assert_eq!(pleco.apply_move(&pd).unwrap(), cozy.apply_move(&cd).unwrap());
        }
    }
}
