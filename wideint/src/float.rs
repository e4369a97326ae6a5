//! Float round-trips: truncating conversions between wide integers and
//! native floats, built on the [`FloatParts`] decomposition.

use crate::error::WideIntError;
use crate::fpbits::FloatParts;
use crate::wide::WideInt;
use crate::width::Width;

impl WideInt {
    /// Truncating conversion from `f64`: the full fraction lands in the
    /// low limbs and shifts by the residual exponent, then the sign is
    /// applied. Non-finite inputs yield zero. Widths narrower than the
    /// 53-bit fraction truncate the fraction itself.
    pub fn from_f64(value: f64, width: Width, signed: bool) -> Self {
        if !value.is_finite() {
            return Self::zero(width, signed);
        }
        Self::from_parts(FloatParts::from_f64(value), width, signed)
    }

    /// Truncating conversion from `f32`.
    pub fn from_f32(value: f32, width: Width, signed: bool) -> Self {
        if !value.is_finite() {
            return Self::zero(width, signed);
        }
        Self::from_parts(FloatParts::from_f32(value), width, signed)
    }

    fn from_parts(parts: FloatParts, width: Width, signed: bool) -> Self {
        let mut ret = Self::from_u64(parts.fraction, width, signed);
        if ret.is_zero() {
            return ret;
        }
        ret = ret.shift(parts.partial_log2());
        if parts.sign {
            ret.negate();
        }
        ret
    }

    /// Truncating conversion to `f64`: the magnitude's `log2` becomes
    /// the exponent and the magnitude shifts down to the fraction width.
    /// Zero has no logarithm and is rejected.
    pub fn to_f64(&self) -> Result<f64, WideIntError> {
        let mag = self.abs().to_unsigned();
        let exponent = mag.log2()? as i32;
        let fraction = mag
            .shift(-exponent + FloatParts::F64_FRACTION_BITS as i32)
            .to_u64();
        Ok(FloatParts {
            sign: self.is_negative(),
            exponent,
            fraction,
            fraction_bits: FloatParts::F64_FRACTION_BITS,
        }
        .to_f64())
    }

    /// Truncating conversion to `f32`.
    pub fn to_f32(&self) -> Result<f32, WideIntError> {
        let mag = self.abs().to_unsigned();
        let exponent = mag.log2()? as i32;
        let fraction = mag
            .shift(-exponent + FloatParts::F32_FRACTION_BITS as i32)
            .to_u64();
        Ok(FloatParts {
            sign: self.is_negative(),
            exponent,
            fraction,
            fraction_bits: FloatParts::F32_FRACTION_BITS,
        }
        .to_f32())
    }
}
