/// Something that can play the Chip-8's single tone.
pub trait Sound {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Plays nothing.
pub struct Mute;

impl Sound for Mute {
    fn start(&mut self) {}

    fn stop(&mut self) {}
}

#[cfg(feature = "desktop")]
pub use self::beeper::Beeper;

#[cfg(feature = "desktop")]
mod beeper {
    use anyhow::Result;
    use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

    use super::Sound;

    const TONE_FREQUENCY: f32 = 440.0;
    const VOLUME: f32 = 0.2;

    pub struct SquareWave {
        phase_step: f32,
        phase: f32,
    }

    impl AudioCallback for SquareWave {
        type Channel = f32;

        fn callback(&mut self, out: &mut [f32]) {
            for sample in out.iter_mut() {
                *sample = if self.phase < 0.5 { VOLUME } else { -VOLUME };
                self.phase = (self.phase + self.phase_step) % 1.0;
            }
        }
    }

    /// A square wave played through the default SDL2 audio device.
    pub struct Beeper {
        device: AudioDevice<SquareWave>,
        playing: bool,
    }

    impl Beeper {
        pub fn new(sdl: &sdl2::Sdl) -> Result<Self> {
            let audio = sdl.audio().map_err(anyhow::Error::msg)?;
            let desired = AudioSpecDesired {
                freq: Some(44_100),
                channels: Some(1),
                samples: None,
            };
            let device = audio
                .open_playback(None, &desired, |spec| SquareWave {
                    phase_step: TONE_FREQUENCY / spec.freq as f32,
                    phase: 0.0,
                })
                .map_err(anyhow::Error::msg)?;
            Ok(Beeper {
                device,
                playing: false,
            })
        }
    }

    impl Sound for Beeper {
        fn start(&mut self) {
            if !self.playing {
                self.device.resume();
                self.playing = true;
            }
        }

        fn stop(&mut self) {
            if self.playing {
                self.device.pause();
                self.playing = false;
            }
        }
    }
}
