use clap::Parser;

use chip8::cli::{Args, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::from(Args::parse());
    chip8::run::run(settings)
}
