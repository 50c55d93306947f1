mod scalar;
mod simd;

pub use scalar::Scalar;
pub use simd::Simd;

pub type Components = [f64; 3];

pub trait VecBackend {
    fn add(a: Components, b: Components) -> Components;
    fn sub(a: Components, b: Components) -> Components;
    // Component-wise
    fn mul(a: Components, b: Components) -> Components;
    fn scale(v: Components, s: f64) -> Components;
    fn dot(a: Components, b: Components) -> f64;
    fn cross(a: Components, b: Components) -> Components;

    fn length_squared(v: Components) -> f64 {
        Self::dot(v, v)
    }

    fn length(v: Components) -> f64 {
        Self::length_squared(v).sqrt()
    }
}

// Both backends must agree to within rounding; the `simd` feature picks the one Vec3 uses
#[cfg(feature = "simd")]
pub type ActiveBackend = Simd;

#[cfg(not(feature = "simd"))]
pub type ActiveBackend = Scalar;
