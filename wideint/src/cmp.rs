//! Sign-aware ordering. Negative values sort before non-negative ones;
//! within a sign, limbs compare most-significant first by unsigned byte
//! value.
//!
//! Only `PartialEq`/`PartialOrd` are implemented: the preserved
//! mixed-width promotion tie-break makes cross-width equality
//! non-transitive (`i8 -1` equals `u8 255`, `u8 255` equals `u16 255`,
//! but `i8 -1` does not equal `u16 255`), so the `Eq`/`Ord`/`Hash`
//! contracts cannot be honored. Within a single layout the relation is a
//! total order consistent with two's-complement numeric value.

use std::cmp::Ordering;

use crate::wide::WideInt;

impl WideInt {
    /// Compare under the common layout.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.limbs.len() == other.limbs.len() && self.signed == other.signed {
            return self.compare_same(other);
        }
        let (lhs, rhs) = self.promote_with(other);
        lhs.compare_same(&rhs)
    }

    fn compare_same(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        for i in (0..self.limbs.len()).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for WideInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for WideInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::Width;

    fn i16v(val: i64) -> WideInt {
        WideInt::from_i64(val, Width::W16, true)
    }

    #[test]
    fn test_order_matches_native() {
        let vals = [-32768i64, -1000, -1, 0, 1, 999, 32767];
        for &a in &vals {
            for &b in &vals {
                assert_eq!(i16v(a).compare(&i16v(b)), a.cmp(&b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_unsigned_order() {
        let a = WideInt::from_u64(0xFF00, Width::W16, false);
        let b = WideInt::from_u64(0x00FF, Width::W16, false);
        assert!(a > b);
        assert!(b < a);
    }

    #[test]
    fn test_negative_sorts_below() {
        assert!(i16v(-1) < i16v(0));
        assert!(i16v(-32768) < i16v(32767));
    }

    #[test]
    fn test_cross_width_compare() {
        let narrow = WideInt::from_u64(200, Width::W8, false);
        let wide = WideInt::from_u64(200, Width::W32, false);
        assert_eq!(narrow, wide);
        assert!(narrow < WideInt::from_u64(201, Width::W32, false));
    }

    #[test]
    fn test_signed_negative_vs_wider() {
        // -1 sign-extends before comparing against a wider operand
        let a = WideInt::from_i64(-1, Width::W8, true);
        let b = WideInt::from_i64(-1, Width::W32, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_promotion_quirk_preserved() {
        // equal width, mixed signs: compared as unsigned, so -1 == 255
        let a = WideInt::from_i64(-1, Width::W8, true);
        let b = WideInt::from_u64(255, Width::W8, false);
        assert_eq!(a, b);
        // but against a wider unsigned operand the sign extension shows
        let c = WideInt::from_u64(255, Width::W16, false);
        assert_ne!(a, c);
    }
}
