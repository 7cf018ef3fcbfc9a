use engine::FrameBuffer;

/// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
///
/// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
///
/// This creates a black and white rendering by:
/// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
/// - Triplicating each element of that 1D array to represent the RGB values of each pixel
/// - Multiplying each value by 255 to convert from a binary state to 0-255 intensity
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .iter()
        .flat_map(|row| row.iter())
        .flat_map(|pixel| std::iter::repeat(pixel * 255).take(3))
        .collect()
}

#[cfg(feature = "desktop")]
pub use self::window::Display;

#[cfg(feature = "desktop")]
mod window {
    use anyhow::{Context, Result};
    use sdl2::pixels::PixelFormatEnum;
    use sdl2::render::WindowCanvas;

    use engine::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
    use engine::FrameBuffer;

    use super::frame_to_texture;

    /// # Display
    /// The Chip-8 display is composed of 64x32 pixels black/white pixels.
    /// The on/off state of these pixels is encoded as 1/0 respectively in a 2d array.
    /// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
    pub struct Display {
        canvas: WindowCanvas,
    }

    impl Display {
        /// Creates a new display object bound to an sdl2 context.
        ///
        /// # Arguments
        /// * `sdl` an sdl2 context with which to draw
        /// * `scale` the size multiplier for each pixel
        pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self> {
            let video_subsystem = sdl.video().map_err(anyhow::Error::msg)?;
            let window = video_subsystem
                .window(
                    "Emu-8",
                    DISPLAY_WIDTH as u32 * scale,
                    DISPLAY_HEIGHT as u32 * scale,
                )
                .position_centered()
                .opengl()
                .build()
                .context("unable to create window")?;
            let canvas = window
                .into_canvas()
                .build()
                .context("unable to create canvas")?;

            Ok(Display { canvas })
        }

        /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
        ///
        /// # Arguments
        /// * `frame` a Chip-8 FrameBuffer
        pub fn render(&mut self, frame: &FrameBuffer) -> Result<()> {
            let texture_creator = self.canvas.texture_creator();

            let mut texture = texture_creator
                .create_texture_streaming(
                    PixelFormatEnum::RGB24,
                    DISPLAY_WIDTH as u32,
                    DISPLAY_HEIGHT as u32,
                )
                .context("unable to create texture")?;

            let pixels = frame_to_texture(frame);
            texture
                .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                    buffer.copy_from_slice(&pixels);
                })
                .map_err(anyhow::Error::msg)?;

            self.canvas
                .copy(&texture, None, None)
                .map_err(anyhow::Error::msg)?;
            self.canvas.present();
            Ok(())
        }
    }
}
