use super::error::ConfigError;
use super::vec::Point3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub image_width: usize,
    pub aspect_ratio: f64,
    pub viewport_height: f64,
    pub focal_length: f64,
    pub origin: Point3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            viewport_height: 2.0,
            focal_length: 1.0,
            origin: Point3::zero(),
        }
    }
}

impl RenderConfig {
    pub fn new(image_width: usize, aspect_ratio: f64) -> Self {
        Self {
            image_width,
            aspect_ratio,
            ..Self::default()
        }
    }

    pub fn with_viewport_height(self, viewport_height: f64) -> Self {
        Self {
            viewport_height,
            ..self
        }
    }

    pub fn with_focal_length(self, focal_length: f64) -> Self {
        Self {
            focal_length,
            ..self
        }
    }

    pub fn with_origin(self, origin: Point3) -> Self {
        Self { origin, ..self }
    }

    // Truncates, like the integer cast it replaces
    pub fn image_height(&self) -> usize {
        (self.image_width as f64 / self.aspect_ratio) as usize
    }

    pub fn viewport_width(&self) -> f64 {
        self.aspect_ratio * self.viewport_height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if self.image_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if !positive(self.aspect_ratio) {
            return Err(ConfigError::InvalidAspectRatio(self.aspect_ratio));
        }
        if !positive(self.viewport_height) {
            return Err(ConfigError::InvalidViewportHeight(self.viewport_height));
        }
        if !positive(self.focal_length) {
            return Err(ConfigError::InvalidFocalLength(self.focal_length));
        }
        if self.image_height() < 1 {
            return Err(ConfigError::NoRows {
                width: self.image_width,
                aspect_ratio: self.aspect_ratio,
            });
        }
        Ok(())
    }
}
