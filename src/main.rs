use anyhow::Result;
use clap::Parser;
use pstbot::board::{Color, Rules, Square};
use pstbot::search::alphabeta::SearchConfig;
use pstbot::Session;
use std::io::{self, BufRead, Write};

#[cfg(feature = "board-pleco")]
use pstbot::board::pleco::PlecoRules as Backend;
#[cfg(not(feature = "board-pleco"))]
use pstbot::board::cozy::CozyRules as Backend;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against a fixed-depth PST engine", long_about = None)]
struct Args {
    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Search depth in plies
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn print_board(rules: &impl Rules) {
    for row in (0..8).rev() {
        print!("{} ", row + 1);
        for col in 0..8 {
            let c = match rules.piece_at(Square::new(row, col)) {
                Some((piece, color)) => {
                    use pstbot::board::PieceType::*;
                    let c = match piece {
                        Pawn => 'P',
                        Knight => 'N',
                        Bishop => 'B',
                        Rook => 'R',
                        Queen => 'Q',
                        King => 'K',
                    };
                    if color == Color::Black {
                        c.to_ascii_lowercase()
                    } else {
                        c
                    }
                }
                None => '.',
            };
            print!("{c} ");
        }
        println!();
    }
    println!("  a b c d e f g h");
}

fn get_human_move<R: Rules>(rules: &R) -> Result<R::Desc> {
    let legal = rules.legal_moves();
    let stdin = io::stdin();
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;

        let mut input = String::new();
        stdin.lock().read_line(&mut input)?;
        let input = input.trim();

        if let Some(desc) = legal.iter().find(|d| d.to_string() == input) {
            return Ok(*desc);
        }
        println!("Illegal move!");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let human_color = parse_color(&args.color)?;
    let rules = match args.fen {
        Some(fen) => Backend::from_fen(&fen)?,
        None => Backend::startpos(),
    };
    let mut session = Session::new(rules, human_color.opponent(), SearchConfig { depth: args.depth });

    loop {
        let to_move = session.rules().side_to_move();
        if session.rules().legal_moves().is_empty() {
            println!("\nNo legal moves for {to_move:?}. Game over.");
            break;
        }

        println!("\n{to_move:?}'s turn");
        print_board(session.rules());

        if to_move == human_color {
            let desc = get_human_move(session.rules())?;
            session.record_opponent_move(&desc)?;
        } else {
            match session.choose_own_move()? {
                Some(mv) => println!("Computer plays: {mv} (score {})", session.score()),
                None => {
                    println!("No legal moves available!");
                    break;
                }
            }
        }
    }

    Ok(())
}
