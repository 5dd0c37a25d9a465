#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use minibattle::{init_logging, GameConfig, TurnController};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Battleship against a random-firing AI", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(flatten)]
    settings: Settings,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct Settings {
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, global = true, default_value_t = minibattle::DEFAULT_GRID_SIZE, help = "Side length of each board")]
    grid_size: usize,
    #[arg(long, global = true, default_value_t = minibattle::DEFAULT_SHIP_COUNT, help = "Ships per side")]
    ships: usize,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal (default).
    Play,
    /// Play in a window.
    #[cfg(feature = "gui")]
    Gui,
}

#[cfg(feature = "std")]
fn controller(settings: &Settings) -> anyhow::Result<TurnController<SmallRng>> {
    let config = GameConfig::with_grid(settings.grid_size, settings.ships);
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    let rng = if let Some(s) = settings.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    TurnController::new(config, rng).map_err(|e| anyhow::anyhow!(e))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();
    let controller = controller(&cli.settings)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            runtime.block_on(minibattle::terminal::run(controller))?;
        }
        #[cfg(feature = "gui")]
        Commands::Gui => minibattle::gui::run(controller)?,
    }
    Ok(())
}
