use anyhow::Result;
use clap::Parser;
use log::info;

use road_crossing::simulation::{Direction, MoveResult, SimWorld, TickResult};

#[derive(Parser)]
#[command(name = "road_crossing")]
#[command(about = "Cross-the-road arcade game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value = "600")]
    ticks: u32,

    /// Seed for car generation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Headless autopilot: step forward every N frames (0 disables)
    #[arg(long, default_value = "8")]
    forward_every: u32,

    /// Print a summary and map every N frames (0 disables)
    #[arg(long, default_value = "120")]
    report_every: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            road_crossing::ui::run(cli.seed);
            return Ok(());
        }
        #[cfg(not(feature = "ui"))]
        {
            anyhow::bail!("UI feature is not enabled. Rebuild with --features ui");
        }
    }

    // Bevy installs its own logger, so env_logger is only set up for headless runs.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("road_crossing=info"),
    )
    .init();

    run_headless(&cli)
}

/// Run the game in headless mode (no graphics), stepping forward on a timer
fn run_headless(cli: &Cli) -> Result<()> {
    println!("Running road crossing in headless mode...");
    println!(
        "Ticks: {}, forward every: {}, seed: {}",
        cli.ticks,
        cli.forward_every,
        cli.seed
            .map_or_else(|| "random".to_string(), |seed| seed.to_string())
    );
    println!();

    let mut world = match cli.seed {
        Some(seed) => SimWorld::new_with_seed(seed),
        None => SimWorld::new(),
    };

    println!("Initial state:");
    world.print_summary();
    world.draw_map();
    println!();

    let mut crossings = 0u32;
    let mut collisions = 0u32;

    for tick in 1..=cli.ticks {
        if cli.forward_every > 0
            && tick % cli.forward_every == 0
            && world.move_player(Direction::Right) == MoveResult::Crossed
        {
            crossings += 1;
        }

        match world.tick() {
            TickResult::Collision => collisions += 1,
            TickResult::GameOver => {
                collisions += 1;
                println!("--- Game over after tick {} ---", tick);
                break;
            }
            TickResult::Idle | TickResult::Continue => {}
        }

        if cli.report_every > 0 && tick % cli.report_every == 0 {
            println!("--- After tick {} ---", tick);
            world.print_summary();
            world.draw_map();
            println!();
        }
    }

    info!("Crossings: {}, collisions: {}", crossings, collisions);

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map();
    println!("Crossings: {}", crossings);
    println!("Collisions: {}", collisions);

    Ok(())
}
