use broadside::{init_logging, AutoPlayer, Session};
use rand::{rngs::SmallRng, SeedableRng};

/// Play one headless game and print its summary as JSON.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let human = AutoPlayer::new(SmallRng::seed_from_u64(seed));
    let mut session = Session::new(human, SmallRng::seed_from_u64(seed.wrapping_add(1)));
    session.run()?;

    let summary = session
        .state()
        .summary()
        .ok_or_else(|| anyhow::anyhow!("game did not finish"))?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
