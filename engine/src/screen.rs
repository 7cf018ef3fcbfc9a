use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, SPRITE_WIDTH};

/// The FrameBuffer is indexed as [y][x]; every cell is 0 (off) or 1 (on).
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// What happens to sprite pixels that fall past the right or bottom edge of the screen.
///
/// The starting coordinate always wraps, so a sprite drawn at x=70 starts at column 6.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Pixels wrap around to the opposite edge.
    #[default]
    Wrap,
    /// Pixels past the edge are dropped.
    Clip,
}

/// # Screen
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// It is only ever changed by clearing it or by XOR-ing a sprite onto it.
#[derive(Clone)]
pub struct Screen {
    frame_buffer: FrameBuffer,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// XORs a sprite onto the screen with its top left corner at (x, y).
    ///
    /// Each byte of `rows` is one 8 pixel row, most significant bit leftmost.
    /// Returns whether any lit pixel was switched off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8], edges: EdgePolicy) -> bool {
        let origin_x = x as usize % DISPLAY_WIDTH;
        let origin_y = y as usize % DISPLAY_HEIGHT;
        let mut collision = false;

        for (row, byte) in rows.iter().enumerate() {
            let y = match Screen::place(origin_y + row, DISPLAY_HEIGHT, edges) {
                Some(y) => y,
                None => break,
            };
            for bit in 0..SPRITE_WIDTH {
                let x = match Screen::place(origin_x + bit, DISPLAY_WIDTH, edges) {
                    Some(x) => x,
                    None => break,
                };
                let pixel = (byte >> (7 - bit)) & 0x1;
                let cell = &mut self.frame_buffer[y][x];
                collision |= pixel == 1 && *cell == 1;
                *cell ^= pixel;
            }
        }

        collision
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.frame_buffer[y][x]
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    fn place(coordinate: usize, size: usize, edges: EdgePolicy) -> Option<usize> {
        match edges {
            EdgePolicy::Wrap => Some(coordinate % size),
            EdgePolicy::Clip if coordinate < size => Some(coordinate),
            EdgePolicy::Clip => None,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
