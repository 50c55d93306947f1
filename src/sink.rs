use super::vec::Color;

// Just under 256 so a full-intensity channel lands on 255 without clamping
pub const CHANNEL_SCALE: f64 = 255.999;

// Out-of-range input saturates to 0 or 255
pub fn quantize(channel: f64) -> u8 {
    (CHANNEL_SCALE * channel) as u8
}

pub fn quantize_color(color: Color) -> [u8; 3] {
    [
        quantize(color.r()),
        quantize(color.g()),
        quantize(color.b()),
    ]
}

/// Destination for rendered pixels.
///
/// `(x, y)` has `y = 0` on the top row. The renderer writes every pixel exactly once and
/// calls [`finish`](PixelSink::finish) after the last one; the sink's contents are only
/// complete after that.
pub trait PixelSink {
    type Error;

    fn put_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), Self::Error>;

    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_intensity_is_255() {
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.0), 0);
    }

    #[test]
    fn truncates_rather_than_rounds() {
        // 255.999 * 0.5 = 127.9995
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(0.7), 179);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(quantize(-0.25), 0);
        assert_eq!(quantize(1.5), 255);
        assert_eq!(quantize(f64::NAN), 0);
    }

    #[test]
    fn color_quantizes_per_channel() {
        assert_eq!(quantize_color(Color::new(1.0, 0.0, 0.5)), [255, 0, 127]);
    }
}
