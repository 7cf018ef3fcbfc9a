use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use engine::constants::{DEFAULT_INSTRUCTIONS_PER_SECOND, TIMER_FREQUENCY};
use engine::{Chip8, Config, EdgePolicy};

/// Window pixels per Chip-8 pixel.
pub const DEFAULT_SCALE: u32 = 10;

/// Largest window scale; keeps the window dimensions well inside `u32`.
pub const MAX_SCALE: i64 = 64;

/// Run a Chip-8 ROM
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the ROM file to run
    pub rom: PathBuf,

    /// Instructions executed per second
    #[arg(short, long, default_value_t = DEFAULT_INSTRUCTIONS_PER_SECOND)]
    pub ips: u32,

    /// Window pixels per Chip-8 pixel
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SCALE,
        value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE),
    )]
    pub scale: u32,

    /// Drop sprite pixels that cross the edge of the screen instead of wrapping them
    #[arg(long)]
    pub clip: bool,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't play a tone while the sound timer is running
    #[arg(short, long)]
    pub mute: bool,
}

/// Everything the host loop needs to know, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rom: PathBuf,
    /// CPU cycles between each 60Hz timer tick
    pub steps_per_frame: u32,
    pub scale: u32,
    pub config: Config,
    pub seed: Option<u64>,
    pub mute: bool,
}

impl Settings {
    /// A fresh machine configured by these settings.
    pub fn machine(&self) -> Chip8 {
        match self.seed {
            Some(seed) => Chip8::with_rng(self.config, Box::new(StdRng::seed_from_u64(seed))),
            None => Chip8::new(self.config),
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        let edges = if args.clip {
            EdgePolicy::Clip
        } else {
            EdgePolicy::Wrap
        };
        Settings {
            rom: args.rom,
            steps_per_frame: (args.ips.saturating_add(TIMER_FREQUENCY / 2) / TIMER_FREQUENCY).max(1),
            scale: args.scale,
            config: Config::with_edges(edges),
            seed: args.seed,
            mute: args.mute,
        }
    }
}
