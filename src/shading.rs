use super::ray::Ray;
use super::sphere::Sphere;
use super::vec::{Color, Point3};

pub const SPHERE: Sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5);

pub const HORIZON: Color = Color::new(1.0, 1.0, 1.0);
pub const ZENITH: Color = Color::new(0.5, 0.7, 1.0);

pub fn ray_color(ray: &Ray) -> Color {
    if let Some(t) = SPHERE.hit(ray) {
        // Map the unit normal from [-1, 1] into [0, 1] per channel
        let normal = SPHERE.normal_at(ray.at(t));
        0.5 * (normal + 1.0)
    } else {
        sky_color(ray)
    }
}

// White at the horizon to blue straight up
pub fn sky_color(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalized();
    let s = 0.5 * (unit_direction.y() + 1.0);
    HORIZON.lerp(ZENITH, s)
}
