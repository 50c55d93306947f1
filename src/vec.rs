use super::backend::{ActiveBackend, Components, VecBackend};
use std::fmt;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

// Added to the length before dividing in normalized(), so a zero vector
// normalises to zero instead of NaN
pub const NORMALIZE_EPSILON: f64 = f64::MIN_POSITIVE;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    e: Components,
}

pub type Point3 = Vec3;
pub type Color = Vec3;

impl Vec3 {
    pub const fn new(e0: f64, e1: f64, e2: f64) -> Self {
        Self { e: [e0, e1, e2] }
    }

    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    pub const fn one() -> Self {
        Self::splat(1.0)
    }

    pub const fn to_array(self) -> [f64; 3] {
        self.e
    }

    pub fn x(self) -> f64 {
        self.e[0]
    }

    pub fn y(self) -> f64 {
        self.e[1]
    }

    pub fn z(self) -> f64 {
        self.e[2]
    }

    // Channel names for when the vector is a Color
    pub fn r(self) -> f64 {
        self.e[0]
    }

    pub fn g(self) -> f64 {
        self.e[1]
    }

    pub fn b(self) -> f64 {
        self.e[2]
    }

    pub fn dot(self, other: Self) -> f64 {
        ActiveBackend::dot(self.e, other.e)
    }

    pub fn cross(self, other: Self) -> Self {
        Self {
            e: ActiveBackend::cross(self.e, other.e),
        }
    }

    pub fn length_squared(self) -> f64 {
        ActiveBackend::length_squared(self.e)
    }

    pub fn length(self) -> f64 {
        ActiveBackend::length(self.e)
    }

    pub fn normalized(self) -> Self {
        self * (1.0 / (self.length() + NORMALIZE_EPSILON))
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        (1.0 - t) * self + t * other
    }

    pub fn is_finite(self) -> bool {
        self.e.iter().all(|c| c.is_finite())
    }
}

// Free-function forms of the same operations

pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

pub fn length(v: Vec3) -> f64 {
    v.length()
}

pub fn length_squared(v: Vec3) -> f64 {
    v.length_squared()
}

pub fn normalize(v: Vec3) -> Vec3 {
    v.normalized()
}

impl From<[f64; 3]> for Vec3 {
    fn from(e: [f64; 3]) -> Self {
        Self { e }
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        assert!(index < 3, "Vec3 index out of range: {index}");
        &self.e[index]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        assert!(index < 3, "Vec3 index out of range: {index}");
        &mut self.e[index]
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            e: ActiveBackend::add(self.e, rhs.e),
        }
    }
}

impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Broadcast add, used to shift normals from [-1, 1] up to [0, 2]
impl Add<f64> for Vec3 {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        self + Self::splat(rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            e: ActiveBackend::sub(self.e, rhs.e),
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            e: ActiveBackend::scale(self.e, rhs),
        }
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            e: ActiveBackend::mul(self.e, rhs.e),
        }
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    // Multiplies by the reciprocal; dividing by zero gives IEEE infinities, not an error
    fn div(self, rhs: f64) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        (-1.0) * self
    }
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self[0], self[1], self[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn samples() -> [Vec3; 5] {
        [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.5, 4.25, 0.0),
            Vec3::new(1e-3, -7.0, 2.5),
            Vec3::new(100.0, 0.1, -33.0),
            Vec3::zero(),
        ]
    }

    fn assert_vec_close(a: Vec3, b: Vec3, epsilon: f64) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = epsilon);
        }
    }

    #[test]
    fn addition_laws() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a + b, b + a);
                for c in samples() {
                    assert_vec_close((a + b) + c, a + (b + c), 1e-12);
                }
            }
        }
    }

    #[test]
    fn scaling_distributes_over_addition() {
        for a in samples() {
            for b in samples() {
                for s in [0.0, -1.5, 2.0, 1e3] {
                    assert_vec_close(s * (a + b), s * a + s * b, 1e-9);
                    assert_eq!(s * a, a * s);
                }
            }
        }
    }

    #[test]
    fn dot_and_cross_laws() {
        for a in samples() {
            assert_eq!(a.length_squared(), a.dot(a));
            assert_eq!(length_squared(a), a.length_squared());
            for b in samples() {
                assert_eq!(a.dot(b), b.dot(a));
                assert_eq!(a.cross(b), -b.cross(a));
                assert_eq!(dot(a, b), a.dot(b));
                assert_eq!(cross(a, b), a.cross(b));
            }
        }
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
    }

    #[test]
    fn length_of_pythagorean_triple() {
        let v = Vec3::new(3.0, 4.0, 12.0);
        assert_eq!(v.length_squared(), 169.0);
        assert_eq!(v.length(), 13.0);
        assert_eq!(length(v), 13.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        for v in samples().into_iter().filter(|v| v.length() > 0.0) {
            assert_abs_diff_eq!(v.normalized().length(), 1.0, epsilon = 1e-6);
            assert_eq!(normalize(v), v.normalized());
        }
    }

    #[test]
    fn normalizing_zero_stays_finite() {
        let n = Vec3::zero().normalized();
        assert!(n.is_finite());
        assert_eq!(n, Vec3::zero());
    }

    #[test]
    fn division_is_scaling_by_reciprocal() {
        let v = Vec3::new(2.0, -4.0, 8.0);
        assert_eq!(v / 2.0, Vec3::new(1.0, -2.0, 4.0));
        let mut w = v;
        w /= 4.0;
        assert_eq!(w, v * 0.25);
    }

    #[test]
    fn compound_assignment_matches_operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);
        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= 3.0;
        assert_eq!(c, 3.0 * a);
    }

    #[test]
    fn lerp_endpoints() {
        let from = Color::one();
        let to = Color::new(0.5, 0.7, 1.0);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn color_accessors_alias_components() {
        let c = Color::new(0.1, 0.2, 0.3);
        assert_eq!((c.r(), c.g(), c.b()), (c.x(), c.y(), c.z()));
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn index_reads_and_writes() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);
        assert_eq!(v.y(), 5.0);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn index_out_of_range_panics() {
        let v = Vec3::zero();
        let _ = v[3];
    }

    #[test]
    fn display_format() {
        assert_eq!(Vec3::new(1.0, -2.5, 0.0).to_string(), "(1 -2.5 0)");
    }
}
