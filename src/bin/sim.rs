use clap::Parser;
use log::LevelFilter;
use minibattle::{init_logging, simulate_many, GameConfig};

/// Play scripted matches headlessly and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed of the first match; later matches use following seeds.
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long, default_value_t = minibattle::DEFAULT_GRID_SIZE)]
    grid_size: usize,
    #[arg(long, default_value_t = minibattle::DEFAULT_SHIP_COUNT)]
    ships: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args = Args::parse();
    let config = GameConfig::with_grid(args.grid_size, args.ships);
    let summary = simulate_many(config, args.seed, args.games).map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
