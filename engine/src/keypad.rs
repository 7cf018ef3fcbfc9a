use log::warn;

use crate::constants::KEY_COUNT;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// This original layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
/// Indexed by logical key.
const KEYMAP: [&str; KEY_COUNT] = [
    "X", "1", "2", "3", "Q", "W", "E", "A", "S", "D", "Z", "C", "4", "R", "F", "V",
];

/// Translates the name of a host key (e.g. `"Q"`) into a logical key.
pub fn logical_key(host_key: &str) -> Option<u8> {
    KEYMAP
        .iter()
        .position(|name| name.eq_ignore_ascii_case(host_key))
        .map(|key| key as u8)
}

/// The name of the host key bound to a logical key.
pub fn host_key(logical_key: u8) -> Option<&'static str> {
    KEYMAP.get(logical_key as usize).copied()
}

/// # Keypad
/// Tracks which of the 16 logical keys are currently held.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    held: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    /// Set the pressed status of a key; keys above 0xF are ignored.
    pub fn set(&mut self, key: u8, pressed: bool) {
        match self.held.get_mut(key as usize) {
            Some(held) => *held = pressed,
            None => warn!("ignoring state change of unknown key {:#04X}", key),
        }
    }

    pub fn is_held(&self, key: u8) -> bool {
        self.held.get(key as usize).copied().unwrap_or(false)
    }

    /// The lowest held key, if any.
    pub fn pressed_key(&self) -> Option<u8> {
        self.held.iter().position(|&held| held).map(|key| key as u8)
    }
}
