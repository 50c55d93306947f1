use super::config::RenderConfig;
use super::ray::Ray;
use super::vec::{Point3, Vec3};

// Looks down -z. (u, v) = (0, 0) is the lower left corner of the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    origin: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Point3,
}

impl Camera {
    pub fn new(config: &RenderConfig) -> Self {
        let origin = config.origin;
        let horizontal = Vec3::new(config.viewport_width(), 0.0, 0.0);
        let vertical = Vec3::new(0.0, config.viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, config.focal_length);

        Self {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }

    pub fn lower_left_corner(&self) -> Point3 {
        self.lower_left_corner
    }

    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        let on_viewport = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, on_viewport - self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_viewport_geometry() {
        let camera = Camera::new(&RenderConfig::default());
        assert_relative_eq!(camera.horizontal().x(), 32.0 / 9.0);
        assert_eq!(camera.vertical(), Vec3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(camera.lower_left_corner().x(), -16.0 / 9.0);
        assert_eq!(camera.lower_left_corner().y(), -1.0);
        assert_eq!(camera.lower_left_corner().z(), -1.0);
    }

    #[test]
    fn corners_span_the_image_plane() {
        let config = RenderConfig::default()
            .with_focal_length(2.5)
            .with_origin(Point3::new(1.0, 2.0, 3.0));
        let camera = Camera::new(&config);

        for (u, v) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.5, 0.5)] {
            let ray = camera.get_ray(u, v);
            assert_eq!(ray.origin(), config.origin);
            // Every viewport point sits one focal length in front of the camera
            assert_relative_eq!(ray.direction().z(), -2.5);
        }

        let centre = camera.get_ray(0.5, 0.5).direction();
        assert_relative_eq!(centre.x(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(centre.y(), 0.0, epsilon = 1e-12);

        let top_right = camera.get_ray(1.0, 1.0).direction();
        assert_relative_eq!(top_right.x(), config.viewport_width() / 2.0, epsilon = 1e-12);
        assert_relative_eq!(top_right.y(), 1.0, epsilon = 1e-12);
    }
}
