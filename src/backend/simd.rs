use super::{Components, VecBackend};
use lanes::Lanes;

// Four f64 lanes, the last one padding. Horizontal sums go x, y, z to match Scalar.
pub struct Simd;

impl VecBackend for Simd {
    #[inline]
    fn add(a: Components, b: Components) -> Components {
        Lanes::load(a).add(Lanes::load(b)).xyz()
    }

    #[inline]
    fn sub(a: Components, b: Components) -> Components {
        Lanes::load(a).sub(Lanes::load(b)).xyz()
    }

    #[inline]
    fn mul(a: Components, b: Components) -> Components {
        Lanes::load(a).mul(Lanes::load(b)).xyz()
    }

    #[inline]
    fn scale(v: Components, s: f64) -> Components {
        Lanes::load(v).mul(Lanes::splat(s)).xyz()
    }

    #[inline]
    fn dot(a: Components, b: Components) -> f64 {
        let [x, y, z] = Lanes::load(a).mul(Lanes::load(b)).xyz();
        x + y + z
    }

    #[inline]
    fn cross(a: Components, b: Components) -> Components {
        // a.yzx * b.zxy - a.zxy * b.yzx
        let a_yzx = Lanes::load([a[1], a[2], a[0]]);
        let b_zxy = Lanes::load([b[2], b[0], b[1]]);
        let a_zxy = Lanes::load([a[2], a[0], a[1]]);
        let b_yzx = Lanes::load([b[1], b[2], b[0]]);
        a_yzx.mul(b_zxy).sub(a_zxy.mul(b_yzx)).xyz()
    }
}

#[cfg(target_arch = "x86_64")]
mod lanes {
    use super::Components;
    use std::arch::x86_64::{
        __m128d, _mm_add_pd, _mm_mul_pd, _mm_set1_pd, _mm_set_pd, _mm_storeu_pd, _mm_sub_pd,
    };

    // [x, y] and [z, 0]
    #[derive(Clone, Copy)]
    pub(super) struct Lanes {
        lo: __m128d,
        hi: __m128d,
    }

    // SAFETY (all blocks below): SSE2 is part of the x86_64 baseline, so these intrinsics
    // are always available on this target.
    impl Lanes {
        #[inline(always)]
        pub(super) fn load(v: Components) -> Self {
            unsafe {
                Self {
                    lo: _mm_set_pd(v[1], v[0]),
                    hi: _mm_set_pd(0.0, v[2]),
                }
            }
        }

        #[inline(always)]
        pub(super) fn splat(s: f64) -> Self {
            unsafe {
                let r = _mm_set1_pd(s);
                Self { lo: r, hi: r }
            }
        }

        #[inline(always)]
        pub(super) fn add(self, rhs: Self) -> Self {
            unsafe {
                Self {
                    lo: _mm_add_pd(self.lo, rhs.lo),
                    hi: _mm_add_pd(self.hi, rhs.hi),
                }
            }
        }

        #[inline(always)]
        pub(super) fn sub(self, rhs: Self) -> Self {
            unsafe {
                Self {
                    lo: _mm_sub_pd(self.lo, rhs.lo),
                    hi: _mm_sub_pd(self.hi, rhs.hi),
                }
            }
        }

        #[inline(always)]
        pub(super) fn mul(self, rhs: Self) -> Self {
            unsafe {
                Self {
                    lo: _mm_mul_pd(self.lo, rhs.lo),
                    hi: _mm_mul_pd(self.hi, rhs.hi),
                }
            }
        }

        #[inline(always)]
        pub(super) fn xyz(self) -> Components {
            let mut out = [0.0f64; 4];
            unsafe {
                _mm_storeu_pd(out.as_mut_ptr(), self.lo);
                _mm_storeu_pd(out.as_mut_ptr().add(2), self.hi);
            }
            [out[0], out[1], out[2]]
        }
    }
}

#[cfg(not(target_arch = "x86_64"))]
mod lanes {
    use super::Components;

    #[derive(Clone, Copy)]
    pub(super) struct Lanes([f64; 4]);

    impl Lanes {
        #[inline(always)]
        pub(super) fn load(v: Components) -> Self {
            Self([v[0], v[1], v[2], 0.0])
        }

        #[inline(always)]
        pub(super) fn splat(s: f64) -> Self {
            Self([s; 4])
        }

        #[inline(always)]
        pub(super) fn add(self, rhs: Self) -> Self {
            Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
        }

        #[inline(always)]
        pub(super) fn sub(self, rhs: Self) -> Self {
            Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
        }

        #[inline(always)]
        pub(super) fn mul(self, rhs: Self) -> Self {
            Self(std::array::from_fn(|i| self.0[i] * rhs.0[i]))
        }

        #[inline(always)]
        pub(super) fn xyz(self) -> Components {
            [self.0[0], self.0[1], self.0[2]]
        }
    }
}
