use super::sink::{quantize_color, PixelSink};
use super::vec::Color;
use std::io::{self, Write};

// Pixels are written in arrival order, so they must come top row first
pub struct PpmWriter<W: Write> {
    out: W,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(mut out: W, width: usize, height: usize) -> io::Result<Self> {
        // ASCII
        writeln!(out, "P3")?;
        // Dimensions
        writeln!(out, "{} {}", width, height)?;
        // Max color
        writeln!(out, "255")?;
        Ok(Self { out })
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_color(color: Color) -> String {
    let [r, g, b] = quantize_color(color);
    format!("{} {} {}", r, g, b)
}

impl<W: Write> PixelSink for PpmWriter<W> {
    type Error = io::Error;

    fn put_pixel(&mut self, _x: usize, _y: usize, color: Color) -> io::Result<()> {
        writeln!(self.out, "{}", format_color(color))
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
