use std::io;
use std::time::Duration;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{init_logging, BoardGenerator, GameConfig, GameLoop, SessionOptions};

#[derive(Parser)]
#[command(author, version, about = "Sink the hidden fleet in as few shots as possible.", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1500, help = "Pause after each shot, in milliseconds")]
    pause_ms: u64,
    #[arg(long, help = "Do not clear the terminal between turns")]
    no_clear: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let generator = BoardGenerator::new(GameConfig::default()).map_err(|e| anyhow::anyhow!(e))?;
    let options = SessionOptions {
        pause: Duration::from_millis(cli.pause_ms),
        clear_screen: !cli.no_clear,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = GameLoop::new(stdin.lock(), stdout.lock(), rng, generator, options);
    game.run()
}
