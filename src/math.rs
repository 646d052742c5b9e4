//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn powf(x: f64, n: f64) -> f64 {
    x.powf(n)
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn powf(x: f64, n: f64) -> f64 {
    libm::pow(x, n)
}
