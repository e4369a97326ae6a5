//! Bitwise and arithmetic core: complement, two's-complement negation,
//! carry-propagating add/sub, and the schoolbook multiply.

use crate::wide::WideInt;

impl WideInt {
    /// Bitwise NOT of every limb.
    pub fn bit_not(&self) -> Self {
        WideInt {
            limbs: self.limbs.iter().map(|&l| !l).collect(),
            signed: self.signed,
        }
    }

    /// Two's-complement negation: complement plus one. Defined for
    /// unsigned values too, where it wraps modulo `2^width`.
    pub fn neg(&self) -> Self {
        let mut ret = self.bit_not();
        ret.add_small(1);
        ret
    }

    /// In-place two's-complement negation.
    pub(crate) fn negate(&mut self) {
        for limb in &mut self.limbs {
            *limb = !*limb;
        }
        self.add_small(1);
    }

    /// Limb-wise addition of a same-layout value; the carry past the top
    /// limb is discarded.
    pub(crate) fn add_assign_same(&mut self, rhs: &WideInt) {
        debug_assert_eq!(self.limbs.len(), rhs.limbs.len());
        let mut carry = 0u16;
        for (a, &b) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            carry += *a as u16 + b as u16;
            *a = carry as u8;
            carry >>= 8;
        }
    }

    /// Add a single-limb value, propagating the carry upward.
    pub(crate) fn add_small(&mut self, val: u8) {
        let mut carry = val as u16;
        for limb in &mut self.limbs {
            if carry == 0 {
                break;
            }
            carry += *limb as u16;
            *limb = carry as u8;
            carry >>= 8;
        }
    }

    /// Wrapping addition under the common layout.
    pub fn add(&self, other: &Self) -> Self {
        let (mut lhs, rhs) = self.promote_with(other);
        lhs.add_assign_same(&rhs);
        lhs
    }

    /// Wrapping subtraction: addition of the negated operand.
    pub fn sub(&self, other: &Self) -> Self {
        let (mut lhs, rhs) = self.promote_with(other);
        lhs.add_assign_same(&rhs.neg());
        lhs
    }

    /// The value plus one, wrapping.
    pub fn increment(&self) -> Self {
        let mut ret = self.clone();
        ret.add_small(1);
        ret
    }

    /// The value minus one, wrapping.
    pub fn decrement(&self) -> Self {
        let one = WideInt::one(self.width(), self.signed);
        let mut ret = self.clone();
        ret.add_assign_same(&one.neg());
        ret
    }

    /// Limb-wise AND under the common layout.
    pub fn bit_and(&self, other: &Self) -> Self {
        let (mut lhs, rhs) = self.promote_with(other);
        for (a, &b) in lhs.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *a &= b;
        }
        lhs
    }

    /// Limb-wise OR under the common layout.
    pub fn bit_or(&self, other: &Self) -> Self {
        let (mut lhs, rhs) = self.promote_with(other);
        for (a, &b) in lhs.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *a |= b;
        }
        lhs
    }

    /// Limb-wise XOR under the common layout.
    pub fn bit_xor(&self, other: &Self) -> Self {
        let (mut lhs, rhs) = self.promote_with(other);
        for (a, &b) in lhs.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *a ^= b;
        }
        lhs
    }

    /// Schoolbook multiply over the raw operand limbs, accumulated into
    /// the promoted layout. Operands are not sign-extended first; limbs
    /// at or beyond the result width are dropped, so the product wraps
    /// like a native fixed-width multiply.
    pub fn mul(&self, other: &Self) -> Self {
        let (width, signed) = self.promoted(other);
        let mut out = vec![0u8; width.bytes()];
        for (i, &a) in self.limbs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let mut carry = 0u32;
            for (j, &b) in other.limbs.iter().enumerate() {
                let Some(slot) = out.get_mut(i + j) else {
                    break;
                };
                carry += *slot as u32 + a as u32 * b as u32;
                *slot = carry as u8;
                carry >>= 8;
            }
            // carry continues past the narrower operand's limbs
            let mut k = i + other.limbs.len();
            while carry != 0 && k < out.len() {
                carry += out[k] as u32;
                out[k] = carry as u8;
                carry >>= 8;
                k += 1;
            }
        }
        WideInt { limbs: out, signed }
    }
}
