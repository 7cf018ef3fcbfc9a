use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{error, info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use engine::constants::TIMER_FREQUENCY;
use engine::keypad::logical_key;
use engine::Step;

use crate::audio::{Beeper, Mute, Sound};
use crate::cli::Settings;
use crate::display::Display;

pub fn run(settings: Settings) -> Result<()> {
    let mut chip8 = settings.machine();

    // Load ROM
    let file = File::open(&settings.rom)
        .with_context(|| format!("unable to open {}", settings.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", settings.rom.display()))?;
    info!("successfully loaded ROM {}", settings.rom.display());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl, settings.scale)?;
    let mut sound: Box<dyn Sound> = if settings.mute {
        Box::new(Mute)
    } else {
        match Beeper::new(&sdl) {
            Ok(beeper) => Box::new(beeper),
            Err(e) => {
                warn!("audio unavailable, continuing muted: {:#}", e);
                Box::new(Mute)
            }
        }
    };
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;
    display.render(chip8.frame())?;

    // Timers tick once per frame so the frame rate is the timer rate
    let frame_time = Duration::from_secs(1) / TIMER_FREQUENCY;
    let mut last_frame = Instant::now();

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(kc) = logical_key(&key.name()) {
                        chip8.set_key_state(kc, true);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = logical_key(&key.name()) {
                        chip8.set_key_state(kc, false);
                    }
                }
                _ => continue,
            };
        }

        // Update state
        for _ in 0..settings.steps_per_frame {
            match chip8.step() {
                Ok(Step::Executed(_)) => {}
                Ok(Step::AwaitingKey) => break,
                Err(fault) => {
                    error!("halting: {}", fault);
                    return Err(fault.into());
                }
            }
        }
        chip8.tick();

        // If the frame changed, render it
        if let Some(frame) = chip8.take_frame() {
            display.render(frame)?;
        }

        if chip8.sound_active() {
            sound.start();
        } else {
            sound.stop();
        }

        // Handle timing
        let elapsed_frame_time = last_frame.elapsed();
        if frame_time > elapsed_frame_time {
            std::thread::sleep(frame_time - elapsed_frame_time);
        }
        last_frame = Instant::now();
    }

    Ok(())
}
