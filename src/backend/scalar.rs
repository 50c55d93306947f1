use super::{Components, VecBackend};

pub struct Scalar;

impl VecBackend for Scalar {
    #[inline]
    fn add(a: Components, b: Components) -> Components {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    #[inline]
    fn sub(a: Components, b: Components) -> Components {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    #[inline]
    fn mul(a: Components, b: Components) -> Components {
        [a[0] * b[0], a[1] * b[1], a[2] * b[2]]
    }

    #[inline]
    fn scale(v: Components, s: f64) -> Components {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    #[inline]
    fn dot(a: Components, b: Components) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[inline]
    fn cross(a: Components, b: Components) -> Components {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }
}
