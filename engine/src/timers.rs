/// # Timers
/// Two 8-bit countdown timers (delay & sound).
/// - they decrement once per tick (60Hz) until they reach 0
/// - while the sound timer is above 0 the host should play a tone
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers::default()
    }

    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}
