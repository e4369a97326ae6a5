//! Exponentiation by repeated squaring and the Euclidean gcd.

use std::ops::{MulAssign, Rem};

use num_traits::{One, Zero};

use crate::error::WideIntError;
use crate::wide::WideInt;
use crate::width::Width;

/// `base^exp` by repeated squaring, for any type with a multiplicative
/// identity.
///
/// ```
/// assert_eq!(wideint::pow::pow(3u64, 4), 81);
/// assert_eq!(wideint::pow::pow(2u32, 0), 1);
/// ```
pub fn pow<T>(mut base: T, mut exp: u64) -> T
where
    T: One + MulAssign + Clone,
{
    let mut acc = T::one();
    while exp != 0 {
        if exp & 1 == 1 {
            acc *= base.clone();
        }
        exp >>= 1;
        if exp != 0 {
            base *= base.clone();
        }
    }
    acc
}

/// Euclidean greatest common divisor.
pub fn gcd<T>(x: T, y: T) -> T
where
    T: Zero + Rem<Output = T> + Copy + PartialEq,
{
    let (mut x, mut y) = (x, y);
    while !y.is_zero() {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

impl WideInt {
    /// `self^exp` by repeated squaring, wrapping at the operand's width.
    ///
    /// A runtime-width value has no free-standing identity, so the
    /// accumulator starts from a one of the operand's own layout.
    pub fn pow(&self, mut exp: u64) -> WideInt {
        let mut base = self.clone();
        let mut acc = WideInt::one(self.width(), self.signed);
        while exp != 0 {
            if exp & 1 == 1 {
                acc = acc.mul(&base);
            }
            exp >>= 1;
            if exp != 0 {
                base = base.mul(&base);
            }
        }
        acc
    }

    /// Greatest common divisor of the absolute values, under the common
    /// layout. Magnitudes are taken one limb wider so the most-negative
    /// value contributes its exact magnitude.
    pub fn gcd(&self, other: &WideInt) -> Result<WideInt, WideIntError> {
        let (lhs, rhs) = self.promote_with(other);
        let width = lhs.width();
        let signed = lhs.signed;
        let (mut x, mut y) = if signed {
            let wide = Width::from_bytes(width.bytes() + 1);
            (
                lhs.with_layout(wide, true).abs(),
                rhs.with_layout(wide, true).abs(),
            )
        } else {
            (lhs, rhs)
        };
        while !y.is_zero() {
            let (_, r) = x.div_rem(&y)?;
            x = y;
            y = r;
        }
        Ok(x.with_layout(width, signed))
    }
}
