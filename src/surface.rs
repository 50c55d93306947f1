use super::error::SurfaceError;
use super::sink::{quantize_color, PixelSink};
use super::vec::Color;
use image::{Rgba, RgbaImage};
use std::convert::Infallible;
use tracing::debug;

// Byte layout of one pixel in memory, lowest address first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    // R G B A
    Rgba32,
    // B G R A
    Bgra32,
    // 0xAARRGGBB packed into a native-endian u32, as window surfaces usually are
    Argb8888,
    // R G B, no padding
    Rgb24,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba32 | PixelFormat::Bgra32 | PixelFormat::Argb8888 => 4,
            PixelFormat::Rgb24 => 3,
        }
    }

    // Alpha is always opaque
    pub fn map_rgb(self, r: u8, g: u8, b: u8) -> u32 {
        let (r, g, b) = (r as u32, g as u32, b as u32);
        match self {
            PixelFormat::Rgba32 => r | g << 8 | b << 16 | 0xff << 24,
            PixelFormat::Bgra32 | PixelFormat::Argb8888 => b | g << 8 | r << 16 | 0xff << 24,
            PixelFormat::Rgb24 => r | g << 8 | b << 16,
        }
    }

    fn to_bytes(self, pixel: u32) -> [u8; 4] {
        match self {
            PixelFormat::Argb8888 => pixel.to_ne_bytes(),
            _ => pixel.to_le_bytes(),
        }
    }

    // Back to [r, g, b, a]
    pub fn unmap(self, bytes: &[u8]) -> [u8; 4] {
        match self {
            PixelFormat::Rgba32 => [bytes[0], bytes[1], bytes[2], bytes[3]],
            PixelFormat::Bgra32 => [bytes[2], bytes[1], bytes[0], bytes[3]],
            PixelFormat::Argb8888 => {
                let [b, g, r, a] = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
                    .to_le_bytes();
                [r, g, b, a]
            }
            PixelFormat::Rgb24 => [bytes[0], bytes[1], bytes[2], 0xff],
        }
    }

    pub fn store(self, dest: &mut [u8], color: Color) {
        let [r, g, b] = quantize_color(color);
        let bpp = self.bytes_per_pixel();
        dest[..bpp].copy_from_slice(&self.to_bytes(self.map_rgb(r, g, b))[..bpp]);
    }
}

// y = 0 is the top row. Rows start every `pitch` bytes; any padding after a row's
// pixels is never written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: usize,
    height: usize,
    pitch: usize,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Result<Self, SurfaceError> {
        let pitch = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or(SurfaceError::TooLarge {
                pitch: usize::MAX,
                height,
            })?;
        Self::with_pitch(width, height, pitch, format)
    }

    pub fn with_pitch(
        width: usize,
        height: usize,
        pitch: usize,
        format: PixelFormat,
    ) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::ZeroSize { width, height });
        }
        let row_bytes = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or(SurfaceError::TooLarge { pitch, height })?;
        if pitch < row_bytes {
            return Err(SurfaceError::PitchTooSmall { pitch, row_bytes });
        }
        let len = pitch
            .checked_mul(height)
            .ok_or(SurfaceError::TooLarge { pitch, height })?;

        debug!(width, height, pitch, ?format, "created surface");
        Ok(Self {
            width,
            height,
            pitch,
            format,
            pixels: vec![0; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} surface",
            self.width,
            self.height
        );
        y * self.pitch + x * self.format.bytes_per_pixel()
    }

    pub fn write_color(&mut self, x: usize, y: usize, color: Color) {
        let offset = self.offset(x, y);
        self.format.store(&mut self.pixels[offset..], color);
    }

    pub fn rgba_at(&self, x: usize, y: usize) -> [u8; 4] {
        let offset = self.offset(x, y);
        self.format.unmap(&self.pixels[offset..])
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgba(self.rgba_at(x as usize, y as usize))
        })
    }
}

impl PixelSink for Surface {
    type Error = Infallible;

    fn put_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), Infallible> {
        self.write_color(x, y, color);
        Ok(())
    }
}
