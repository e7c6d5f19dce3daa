//! Shashki autoplay driver
//!
//! Plays the engine against itself and reports the result.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shashki::{AIEngine, Difficulty, GameConfig, GameState, GameStatus, MoveOutcome, Side};

#[derive(Parser, Debug)]
#[command(name = "shashki", about = "Russian draughts engine self-play")]
struct Cli {
    /// Board edge length (even, 4 to 12)
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Rows of men per side
    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Difficulty of the White engine (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    white: Difficulty,

    /// Difficulty of the Black engine (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    black: Difficulty,

    /// Stop after this many turns
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Do not print the board after each turn
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::new(cli.size, cli.rows)?;
    let mut state = GameState::new(&config);
    let mut white = AIEngine::new(cli.white);
    let mut black = AIEngine::new(cli.black);

    info!(
        size = config.board_size(),
        rows = config.pawn_rows(),
        white = %cli.white,
        black = %cli.black,
        "starting game"
    );
    if !cli.quiet {
        println!("{}", state.board());
    }

    let mut turn = 0;
    let status = loop {
        if turn >= cli.max_turns {
            break GameStatus::Ongoing;
        }

        let side = state.side_to_move();
        let engine = match side {
            Side::White => &mut white,
            Side::Black => &mut black,
        };

        // A side that cannot move has lost
        let Some(mv) = engine.choose_move(&mut state) else {
            break GameStatus::Won(side.opponent());
        };

        let outcome = state.apply_move(mv.from, mv.to)?;
        info!(turn, %side, %mv, ?outcome, "move played");

        match outcome {
            MoveOutcome::ContinuedStreak => continue,
            MoveOutcome::TurnEnded => {}
            MoveOutcome::Draw => break GameStatus::Draw,
            MoveOutcome::SideWon(winner) => break GameStatus::Won(winner),
        }

        turn += 1;
        if !cli.quiet {
            println!("{}", state.board());
        }
    };

    match status {
        GameStatus::Won(winner) => info!(%winner, turns = turn, "game over"),
        GameStatus::Draw => info!(turns = turn, "game drawn"),
        GameStatus::Ongoing => {
            let evaluation = white.evaluate(&mut state);
            info!(turns = turn, verdict = %evaluation.verdict, "turn limit reached");
            return Ok(());
        }
    }
    if !cli.quiet {
        println!("{}", state.board());
    }
    Ok(())
}
