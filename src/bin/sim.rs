use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use salvo::{BoardGenerator, GameConfig, GameSession, Leaderboard};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <rounds>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rounds: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let generator = BoardGenerator::new(GameConfig::default())?;
    let size = generator.config().board_size;
    let mut leaderboard = Leaderboard::new();
    let mut results = Vec::with_capacity(rounds);

    for round in 1..=rounds {
        let (truth, visible) = generator.generate(&mut rng)?;
        let name = format!("sim-{}", round);
        let mut session = GameSession::new(name.clone(), truth, visible)?;

        let mut targets: Vec<(usize, usize)> = (0..size)
            .flat_map(|r| (0..size).map(move |c| (r, c)))
            .collect();
        targets.shuffle(&mut rng);
        let mut sunk = 0;
        for (r, c) in targets {
            if session.is_complete() {
                break;
            }
            if session.fire(r, c)?.is_sunk() {
                sunk += 1;
            }
        }

        leaderboard.record(name.clone(), session.shots());
        results.push(json!({
            "player": name,
            "shots": session.shots(),
            "hits": session.hits(),
            "ships_sunk": sunk,
        }));
    }

    let summary = json!({
        "seed": seed,
        "rounds": results,
        "leaderboard": leaderboard.ranked(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
