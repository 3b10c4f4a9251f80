use broadside::{init_logging, CliPlayer, Session};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Battleship against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    println!("BATTLESHIP");
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut session = Session::new(CliPlayer::stdio(), rng);
    match session.run() {
        Ok(winner) => log::info!("game ended: {:?}", winner),
        Err(e) => eprintln!("Game ended early: {}", e),
    }
    Ok(())
}
