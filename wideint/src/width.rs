use crate::error::WideIntError;

/// Bit width of a [`WideInt`](crate::WideInt): a positive multiple of 8.
///
/// The width of a value is fixed when it is constructed and never changes
/// in place; cross-width conversion goes through
/// [`WideInt::resize`](crate::WideInt::resize).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Width(usize);

impl Width {
    pub const W8: Width = Width(8);
    pub const W16: Width = Width(16);
    pub const W32: Width = Width(32);
    pub const W64: Width = Width(64);
    pub const W128: Width = Width(128);
    pub const W256: Width = Width(256);
    pub const W512: Width = Width(512);

    /// Validated construction from a bit count.
    ///
    /// ```
    /// use wideint::Width;
    ///
    /// assert_eq!(Width::from_bits(64), Ok(Width::W64));
    /// assert!(Width::from_bits(12).is_err());
    /// assert!(Width::from_bits(0).is_err());
    /// ```
    pub fn from_bits(bits: usize) -> Result<Width, WideIntError> {
        if bits == 0 || bits % 8 != 0 {
            return Err(WideIntError::InvalidWidth(bits));
        }
        Ok(Width(bits))
    }

    /// Width covering `bytes` limbs. Callers guarantee `bytes > 0`.
    #[inline]
    pub(crate) fn from_bytes(bytes: usize) -> Width {
        Width(bytes * 8)
    }

    /// Number of bits.
    #[inline]
    pub fn bits(self) -> usize {
        self.0
    }

    /// Number of 8-bit limbs.
    #[inline]
    pub fn bytes(self) -> usize {
        self.0 / 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        assert_eq!(Width::from_bits(8), Ok(Width::W8));
        assert_eq!(Width::from_bits(24).map(|w| w.bytes()), Ok(3));
        assert_eq!(Width::from_bits(0), Err(WideIntError::InvalidWidth(0)));
        assert_eq!(Width::from_bits(9), Err(WideIntError::InvalidWidth(9)));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Width::W256.bits(), 256);
        assert_eq!(Width::W256.bytes(), 32);
    }
}
