use broadside::{EventKind, FireOutcome, Game, GameConfig, GameEvent, Location, NUM_BOARDS};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;
use std::{cell::RefCell, rc::Rc};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [shots]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let shots: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => 32,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::default();
    let mut game = Game::new(config, &mut rng)?;

    let events = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&events);
    game.add_observer(EventKind::FiredAt, move |_: &GameEvent| {
        *counter.borrow_mut() += 1;
    });

    let (mut hits, mut misses, mut repeats) = (0usize, 0usize, 0usize);
    for _ in 0..shots {
        let location = Location::new(
            rng.random_range(0..NUM_BOARDS),
            rng.random_range(0..config.size),
            rng.random_range(0..config.size),
        );
        match game.fire_at(location)? {
            Some(FireOutcome::Hit) => hits += 1,
            Some(FireOutcome::Miss) => misses += 1,
            None => repeats += 1,
        }
    }

    let result = json!({
        "size": config.size,
        "shots": shots,
        "hits": hits,
        "misses": misses,
        "repeats": repeats,
        "events": *events.borrow(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
