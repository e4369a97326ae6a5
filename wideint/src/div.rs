//! Division engine: binary long division by repeated shift-subtract.
//!
//! Signed operands divide through their magnitudes and restore signs so
//! that `quot * divisor + rem == dividend` holds under truncation toward
//! zero. Magnitudes are taken one limb wider than the operating width so
//! the most-negative value negates exactly; results are truncated back.

use std::cmp::Ordering;

use crate::error::WideIntError;
use crate::wide::WideInt;
use crate::width::Width;

impl WideInt {
    /// Truncating division: `(quotient, remainder)` under the common
    /// layout. The remainder takes the dividend's sign.
    ///
    /// ```
    /// use wideint::{WideInt, Width};
    ///
    /// let a = WideInt::from_i64(-7, Width::W8, true);
    /// let b = WideInt::from_i64(2, Width::W8, true);
    /// let (q, r) = a.div_rem(&b).unwrap();
    /// assert_eq!(q.to_i64(), -3);
    /// assert_eq!(r.to_i64(), -1);
    /// ```
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), WideIntError> {
        let (lhs, rhs) = self.promote_with(other);
        if rhs.is_zero() {
            return Err(WideIntError::DivisionByZero);
        }
        let width = lhs.width();
        if lhs.is_zero() {
            let zero = WideInt::zero(width, lhs.signed);
            return Ok((zero.clone(), zero));
        }
        if !lhs.signed {
            return Ok(lhs.udiv(&rhs));
        }
        let wide = Width::from_bytes(width.bytes() + 1);
        let wl = lhs.with_layout(wide, true);
        let wr = rhs.with_layout(wide, true);
        let (mut quot, mut rem) = wl.abs().udiv(&wr.abs());
        if lhs.is_negative() != rhs.is_negative() {
            quot.negate();
        }
        if lhs.is_negative() {
            rem.negate();
        }
        Ok((quot.with_layout(width, true), rem.with_layout(width, true)))
    }

    /// Shift-subtract long division. Operands share a layout, the divisor
    /// is nonzero, and neither is negative under its interpretation.
    ///
    /// Each round aligns the divisor's highest set bit under the
    /// remainder's, backs off one position if the shifted divisor
    /// overshoots, subtracts, and accumulates the corresponding power of
    /// two — one quotient bit per round, at most one round per operand
    /// bit.
    pub(crate) fn udiv(&self, rhs: &Self) -> (Self, Self) {
        let width = self.width();
        let mut quot = WideInt::zero(width, self.signed);
        let mut rem = self.clone();
        let Some(rbits) = rhs.top_bit() else {
            return (quot, rem);
        };
        loop {
            match rem.compare(rhs) {
                Ordering::Greater => {
                    let Some(bits) = rem.top_bit() else {
                        break;
                    };
                    let mut shift = bits - rbits;
                    let mut q = rhs.shl(shift as u32);
                    if q.compare(&rem) == Ordering::Greater && shift > 0 {
                        shift -= 1;
                        q = q.shr(1);
                    }
                    rem = rem.sub(&q);
                    quot = quot.add(&WideInt::exp2(shift, width, quot.signed));
                }
                Ordering::Equal => {
                    quot = quot.increment();
                    rem.set_zero();
                    break;
                }
                Ordering::Less => break,
            }
        }
        (quot, rem)
    }

    /// Truncating quotient.
    pub fn div(&self, other: &Self) -> Result<Self, WideIntError> {
        Ok(self.div_rem(other)?.0)
    }

    /// Remainder with the dividend's sign.
    pub fn rem(&self, other: &Self) -> Result<Self, WideIntError> {
        Ok(self.div_rem(other)?.1)
    }
}
