use super::ray::Ray;
use super::vec::{Point3, Vec3};

// Returned by hit_sphere when the ray's line misses the sphere entirely
pub const NO_HIT: f64 = -1.0;

/// Nearest root of `|O + tD - C|^2 = r^2`, or [`NO_HIT`].
///
/// The result can still be zero or negative when the sphere sits behind the ray origin;
/// callers must treat `t <= 0` as "nothing visible along this ray".
pub fn hit_sphere(center: Point3, radius: f64, ray: &Ray) -> f64 {
    let oc = ray.origin() - center;
    // Quadratic formula with b = 2 * half_b
    let a = ray.direction().length_squared();
    let half_b = oc.dot(ray.direction());
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        NO_HIT
    } else {
        // Smaller root only; the sphere is opaque and we never start inside it
        (-half_b - discriminant.sqrt()) / a
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    pub const fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    // Forward hits only
    pub fn hit(&self, ray: &Ray) -> Option<f64> {
        let t = hit_sphere(self.center, self.radius, ray);
        (t > 0.0).then_some(t)
    }

    pub fn normal_at(&self, position: Point3) -> Vec3 {
        (position - self.center).normalized()
    }
}
