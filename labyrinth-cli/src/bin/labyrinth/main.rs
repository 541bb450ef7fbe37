//! Binary which generates a maze and prints it to stdout.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use anyhow::Context as _;
use clap::Parser as _;
use rand::SeedableRng as _;

use labyrinth::generate_maze;
use labyrinth_cli::logging;

mod command_options;
use command_options::{LabyrinthArgs, PointArg};

fn main() -> Result<(), anyhow::Error> {
    let options = LabyrinthArgs::parse();
    // Destructure as a check that we're using/skipping all the args
    let LabyrinthArgs {
        width: _, // used in size()
        height: _,
        start: PointArg(start),
        seed,
        highlight,
        ref logging,
    } = options;

    logging::install(logging)?;

    let seed = seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");
    let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(seed);

    let maze = generate_maze(options.size(), start, &mut rng)
        .context("failed to generate maze")?;

    let highlight = match highlight {
        Some(PointArg(point)) => {
            maze.get(point).context("invalid --highlight")?;
            Some(point)
        }
        None => None,
    };

    print!("{}", labyrinth::render(&maze, highlight));
    Ok(())
}
