//! Bounded random sampling: uniform draws by rejection, with a masked
//! boundary byte so the expected retry count stays below two.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::WideIntError;
use crate::wide::WideInt;

impl WideInt {
    /// Uniform sample in `[0, upper]`.
    ///
    /// Limbs strictly below the bound's highest set byte are drawn
    /// freely; the boundary byte is drawn under a power-of-two mask
    /// covering the bound's bit length; samples above the bound are
    /// rejected and redrawn. A negative bound is an error and a zero
    /// bound always yields zero.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, upper: &WideInt) -> Result<WideInt, WideIntError> {
        if upper.is_negative() {
            return Err(WideIntError::InvalidOperand("negative upper bound"));
        }
        let mut ret = WideInt::zero(upper.width(), upper.signed);
        let Some(bits) = upper.top_bit() else {
            return Ok(ret);
        };
        let full = bits / 8;
        let mask_bits = bits % 8 + 1;
        let mask = ((1u16 << mask_bits) - 1) as u8;
        loop {
            for limb in &mut ret.limbs[..full] {
                *limb = rng.gen();
            }
            ret.limbs[full] = rng.gen::<u8>() & mask;
            if ret.compare(upper) != Ordering::Greater {
                return Ok(ret);
            }
        }
    }

    /// Uniform sample in `[lower, upper]`: a `[0, upper - lower]` draw
    /// shifted by `lower`.
    pub fn random_range<R: Rng + ?Sized>(
        rng: &mut R,
        lower: &WideInt,
        upper: &WideInt,
    ) -> Result<WideInt, WideIntError> {
        let span = upper.sub(lower);
        Ok(lower.add(&WideInt::random(rng, &span)?))
    }
}
