use std::env;
use std::fmt;
use std::process::ExitCode;
use std::time::Instant;

use log::info;

use chess_core::board::{FenError, Game, Position, STARTING_FEN};
use chess_core::perft::{perft_divide, perft_parallel};

const USAGE: &str = "usage: chess_core [--threads N] <command>

commands:
  perft <depth> [fen]    count leaf nodes
  divide <depth> [fen]   leaf nodes below each root move
  moves [fen]            list legal moves
  render [fen]           draw the board";

#[derive(Debug)]
enum CliError {
    Usage(String),
    Fen(FenError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}\n\n{USAGE}"),
            CliError::Fen(e) => write!(f, "Invalid FEN: {e}"),
        }
    }
}

impl From<FenError> for CliError {
    fn from(e: FenError) -> Self {
        CliError::Fen(e)
    }
}

struct Options {
    threads: usize,
    command: String,
    rest: Vec<String>,
}

fn parse_args(args: Vec<String>) -> Result<Options, CliError> {
    let mut threads = 1;
    let mut positional = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--threads" {
            let value = iter
                .next()
                .ok_or_else(|| CliError::Usage("--threads needs a value".to_string()))?;
            threads = value
                .parse()
                .map_err(|_| CliError::Usage(format!("invalid thread count '{value}'")))?;
        } else {
            positional.push(arg);
        }
    }

    if positional.is_empty() {
        return Err(CliError::Usage("missing command".to_string()));
    }
    let command = positional.remove(0);
    Ok(Options {
        threads,
        command,
        rest: positional,
    })
}

/// Remaining words joined as a FEN; none means the starting position.
fn position_from(words: &[String]) -> Result<Position, CliError> {
    if words.is_empty() {
        return Ok(Position::from_fen(STARTING_FEN)?);
    }
    Ok(Position::from_fen(&words.join(" "))?)
}

fn depth_and_position(rest: &[String]) -> Result<(usize, Position), CliError> {
    let Some(depth_text) = rest.first() else {
        return Err(CliError::Usage("missing depth".to_string()));
    };
    let depth = depth_text
        .parse()
        .map_err(|_| CliError::Usage(format!("invalid depth '{depth_text}'")))?;
    Ok((depth, position_from(&rest[1..])?))
}

fn run(options: Options) -> Result<(), CliError> {
    match options.command.as_str() {
        "perft" => {
            let (depth, position) = depth_and_position(&options.rest)?;
            let start = Instant::now();
            let nodes = perft_parallel(&position, depth, options.threads);
            info!(
                "perft depth {depth} threads {} took {} ms",
                options.threads,
                start.elapsed().as_millis()
            );
            println!("{nodes}");
        }
        "divide" => {
            let (depth, position) = depth_and_position(&options.rest)?;
            let mut game = Game::from_position(position);
            let divide = perft_divide(&mut game, depth);
            for (mv, nodes) in &divide {
                println!("{mv}: {nodes}");
            }
            println!();
            println!("total: {}", divide.iter().map(|&(_, n)| n).sum::<u64>());
        }
        "moves" => {
            let game = Game::from_position(position_from(&options.rest)?);
            for mv in game.legal_moves() {
                println!("{mv}");
            }
            if game.is_checkmate() {
                println!("checkmate");
            } else if game.is_stalemate() {
                println!("stalemate");
            }
        }
        "render" => {
            print!("{}", position_from(&options.rest)?.render());
        }
        other => return Err(CliError::Usage(format!("unknown command '{other}'"))),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let result = parse_args(env::args().skip(1).collect()).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
