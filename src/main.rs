#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use twenty48::{
    print_session, CliPlayer, GameSession, GameStatus, Player, RandomPlayer,
    DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game in the terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch a random player run a game to its terminal state.
    Auto {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    twenty48::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { size, seed } => {
            let mut rng = make_rng(seed);
            let session =
                GameSession::new(size, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            run_game(CliPlayer::new(), session, rng)
        }
        Commands::Auto { size, seed } => {
            let mut rng = make_rng(seed);
            let session =
                GameSession::new(size, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            run_game(RandomPlayer::new(), session, rng)
        }
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn run_game<P: Player>(
    mut player: P,
    mut session: GameSession,
    mut rng: SmallRng,
) -> anyhow::Result<()> {
    print_session(&session);
    loop {
        let direction = player.select_move(&mut rng, session.grid());
        let result = session
            .make_move(&mut rng, direction)
            .map_err(|e| anyhow::anyhow!(e))?;
        if result.has_updated {
            print_session(&session);
        } else {
            player.handle_rejected_move(direction);
        }
        if session.status().map_err(|e| anyhow::anyhow!(e))? == GameStatus::Lost {
            break;
        }
    }
    println!("GAME OVER");
    println!("Final score: {}", session.score());
    Ok(())
}
