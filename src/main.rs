#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    cli::{json_observer, parse_command, parse_size, Command},
    init_logging,
    prelude::*,
    DEFAULT_BOARD_SIZE, SHIP_PROBABILITY,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about = "Two-board battleship in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Rows and columns on each board (1-26).
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_size)]
    size: usize,
    /// Chance that a cell holds a ship segment.
    #[arg(long, default_value_t = SHIP_PROBABILITY)]
    probability: f64,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Also print every game event as a JSON line.
    #[arg(long)]
    events: bool,
}

#[cfg(feature = "std")]
fn print_help() {
    std::println!("Commands:");
    std::println!("  <board> <coord>       fire at a cell, e.g. '2 B3'");
    std::println!("  fire <board> <coord>  same as above");
    std::println!("  show                  print both boards");
    std::println!("  help                  this text");
    std::println!("  quit                  leave the game");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig {
        size: cli.size,
        probability: cli.probability,
    };
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (boards will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut app = App::new(config, &mut rng, TerminalRenderer::new())?;
    if cli.events {
        app.add_observer(EventKind::FiredAt, json_observer(io::stdout()));
    }

    print_view(&*app.view());
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line, config.size) {
            Ok(Command::Fire(location)) => match app.click(location) {
                Ok(Some(_)) => print_view(&*app.view()),
                Ok(None) => println!("{} was already fired at.", location),
                Err(e) => println!("{}", e),
            },
            Ok(Command::Show) => print_view(&*app.view()),
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => break,
            Err(msg) => println!("{}", msg),
        }
    }
    println!(
        "Shots fired: {} ({} cells hit)",
        app.view().renderer().updates(),
        app.game()
            .boards()
            .iter()
            .flat_map(|b| b.cells())
            .filter(|(_, c)| c.is_fired() && c.is_occupied())
            .count()
    );
    Ok(())
}
