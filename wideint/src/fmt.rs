//! Base-2..36 text conversion and the formatting trait family.
//!
//! Encoding divides the exact absolute value by the base and maps each
//! remainder through the shared digit table; decoding folds characters
//! left-to-right into `acc * base + digit`. The magnitude loop runs one
//! limb wider than the value so the most-negative value of a width
//! formats its true magnitude.

use std::fmt;

use crate::error::WideIntError;
use crate::wide::WideInt;
use crate::width::Width;

impl WideInt {
    /// Render in `base` (2..=36), lowercase or uppercase letters for
    /// digits above 9, with a leading `-` for negative values.
    ///
    /// ```
    /// use wideint::{WideInt, Width};
    ///
    /// let a = WideInt::from_u64(255, Width::W16, false);
    /// assert_eq!(a.to_string_radix(16, true).unwrap(), "FF");
    /// ```
    pub fn to_string_radix(&self, base: u32, uppercase: bool) -> Result<String, WideIntError> {
        if !radix::is_valid(base) {
            return Err(WideIntError::InvalidBase(base));
        }
        Ok(self.format_radix(base, uppercase))
    }

    /// Digit loop over the exact magnitude; `base` is already validated.
    fn format_radix(&self, base: u32, uppercase: bool) -> String {
        let wide = Width::from_bytes(self.limbs.len() + 1);
        let mut mag = self.with_layout(wide, self.signed).abs().to_unsigned();
        let divisor = WideInt::from_u64(base as u64, wide, false);
        let mut digits = Vec::new();
        loop {
            let (q, r) = mag.udiv(&divisor);
            digits.push(radix::digit_to_char_raw(r.to_u64() as u32, uppercase));
            mag = q;
            if mag.is_zero() {
                break;
            }
        }
        if self.is_negative() {
            digits.push('-');
        }
        digits.iter().rev().collect()
    }

    /// Parse a numeral in `base` into the given layout, wrapping at the
    /// width like the arithmetic does. An optional leading `+`/`-` is
    /// consumed first; any other non-digit character is an error.
    pub fn from_str_radix(
        s: &str,
        base: u32,
        width: Width,
        signed: bool,
    ) -> Result<Self, WideIntError> {
        if !radix::is_valid(base) {
            return Err(WideIntError::InvalidBase(base));
        }
        if s.is_empty() {
            return Err(WideIntError::InvalidFormat);
        }
        let (negative, digits) = split_sign(s);
        Self::accumulate(digits, base, width, signed, negative)
    }

    /// Parse with the base inferred from a literal prefix: `0x`/`0X` is
    /// hexadecimal, `0b`/`0B` binary, a remaining leading `0` octal, and
    /// anything else decimal. The sign is consumed before the prefix.
    ///
    /// ```
    /// use wideint::{WideInt, Width};
    ///
    /// let a = WideInt::from_str_auto("0x1A", Width::W32, true).unwrap();
    /// assert_eq!(a.to_i64(), 26);
    /// let b = WideInt::from_str_auto("-0b101", Width::W32, true).unwrap();
    /// assert_eq!(b.to_i64(), -5);
    /// ```
    pub fn from_str_auto(s: &str, width: Width, signed: bool) -> Result<Self, WideIntError> {
        if s.is_empty() {
            return Err(WideIntError::InvalidFormat);
        }
        let (negative, rest) = split_sign(s);
        let (base, digits) = if let Some(r) = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
        {
            (radix::HEX, r)
        } else if let Some(r) = rest
            .strip_prefix("0b")
            .or_else(|| rest.strip_prefix("0B"))
        {
            (radix::BIN, r)
        } else if let Some(r) = rest.strip_prefix('0') {
            (radix::OCT, r)
        } else {
            (radix::DEC, rest)
        };
        Self::accumulate(digits, base, width, signed, negative)
    }

    fn accumulate(
        digits: &str,
        base: u32,
        width: Width,
        signed: bool,
        negative: bool,
    ) -> Result<Self, WideIntError> {
        let mut ret = WideInt::zero(width, signed);
        let scale = WideInt::from_u64(base as u64, width, signed);
        for ch in digits.chars() {
            let digit = radix::char_to_digit(ch, base).ok_or(WideIntError::InvalidDigit(ch))?;
            ret = ret.mul(&scale);
            ret.add_small(digit as u8);
        }
        if negative {
            ret.negate();
        }
        Ok(ret)
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

impl fmt::Display for WideInt {
    /// Signed decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_radix(radix::DEC, false))
    }
}

impl fmt::Debug for WideInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WideInt{}{}(0x{})",
            self.width().bits(),
            if self.signed { "i" } else { "u" },
            self.to_unsigned().format_radix(radix::HEX, false)
        )
    }
}

impl fmt::LowerHex for WideInt {
    /// Hexadecimal over the unsigned reinterpretation; `#` prepends `0x`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{}", self.to_unsigned().format_radix(radix::HEX, false))
    }
}

impl fmt::UpperHex for WideInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{}", self.to_unsigned().format_radix(radix::HEX, true))
    }
}

impl fmt::Octal for WideInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0o")?;
        }
        write!(f, "{}", self.to_unsigned().format_radix(radix::OCT, false))
    }
}

impl fmt::Binary for WideInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        write!(f, "{}", self.to_unsigned().format_radix(radix::BIN, false))
    }
}
