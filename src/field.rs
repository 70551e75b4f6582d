//! Arithmetic in 𝔽ₚ, p = 2²⁵⁵ − 19, for the Elligator2 map.
//!
//! curve25519-dalek keeps its field type private, so the few operations the
//! map needs live here. Elements are five unsigned 51-bit limbs. Every input
//! to this module is derived from public data (a message digest), so
//! exponentiation scans the exponent in variable time.

#![allow(clippy::cast_possible_truncation)]

use core::ops::{Add, Mul, Neg, Sub};

const LOW_51: u64 = (1 << 51) - 1;

/// Montgomery curve coefficient A of Curve25519.
const MONTGOMERY_A: FieldElement = FieldElement([486_662, 0, 0, 0, 0]);

/// p − 2, little-endian.
const P_MINUS_2: [u8; 32] = {
    let mut e = [0xFF; 32];
    e[0] = 0xEB;
    e[31] = 0x7F;
    e
};

/// (p − 1) / 2, little-endian.
const HALF_P_MINUS_1: [u8; 32] = {
    let mut e = [0xFF; 32];
    e[0] = 0xF6;
    e[31] = 0x3F;
    e
};

#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldElement([u64; 5]);

impl FieldElement {
    pub(crate) const ZERO: Self = Self([0; 5]);
    pub(crate) const ONE: Self = Self([1, 0, 0, 0, 0]);

    /// Load 255 bits; the top bit of byte 31 is ignored. Values ≥ p are
    /// accepted and act as their residue.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Self {
        let load8 = |offset: usize| {
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[offset..offset + 8]);
            u64::from_le_bytes(word)
        };
        Self([
            load8(0) & LOW_51,
            (load8(6) >> 3) & LOW_51,
            (load8(12) >> 6) & LOW_51,
            (load8(19) >> 1) & LOW_51,
            (load8(24) >> 12) & LOW_51,
        ])
    }

    /// Canonical little-endian encoding, fully reduced mod p.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut limbs = Self::carry(self.0).0;

        // q = 1 iff the value is ≥ p
        let mut q = (limbs[0] + 19) >> 51;
        for limb in &limbs[1..] {
            q = (limb + q) >> 51;
        }
        limbs[0] += 19 * q;
        for i in 0..4 {
            limbs[i + 1] += limbs[i] >> 51;
            limbs[i] &= LOW_51;
        }
        limbs[4] &= LOW_51;

        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut bits = 0;
        let mut index = 0;
        for limb in limbs {
            acc |= u128::from(limb) << bits;
            bits += 51;
            while bits >= 8 && index < 32 {
                out[index] = acc.to_le_bytes()[0];
                acc >>= 8;
                bits -= 8;
                index += 1;
            }
        }
        if index < 32 {
            out[index] = acc.to_le_bytes()[0];
        }
        out
    }

    // Weak reduction: every limb back under 2^51 plus a small carry.
    fn carry(mut limbs: [u64; 5]) -> Self {
        let c = limbs.map(|l| l >> 51);
        for limb in &mut limbs {
            *limb &= LOW_51;
        }
        limbs[0] += c[4] * 19;
        limbs[1] += c[0];
        limbs[2] += c[1];
        limbs[3] += c[2];
        limbs[4] += c[3];
        Self(limbs)
    }

    pub(crate) fn square(&self) -> Self {
        *self * *self
    }

    /// `self^exp` for a little-endian exponent.
    fn pow(&self, exp: &[u8; 32]) -> Self {
        let mut acc = Self::ONE;
        for byte in exp.iter().rev() {
            for bit in (0..8).rev() {
                acc = acc.square();
                if (byte >> bit) & 1 == 1 {
                    acc = acc * *self;
                }
            }
        }
        acc
    }

    /// Multiplicative inverse; zero maps to zero.
    pub(crate) fn invert(&self) -> Self {
        self.pow(&P_MINUS_2)
    }

    /// Legendre symbol test: true when the element is a nonzero non-square.
    pub(crate) fn is_non_square(&self) -> bool {
        self.pow(&HALF_P_MINUS_1) == -Self::ONE
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for FieldElement {}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut limbs = self.0;
        for (l, r) in limbs.iter_mut().zip(rhs.0) {
            *l += r;
        }
        Self::carry(limbs)
    }
}

impl Sub for FieldElement {
    type Output = Self;

    // 16p is added first so no limb underflows.
    fn sub(self, rhs: Self) -> Self {
        const SIXTEEN_P: [u64; 5] = [
            36_028_797_018_963_664,
            36_028_797_018_963_952,
            36_028_797_018_963_952,
            36_028_797_018_963_952,
            36_028_797_018_963_952,
        ];
        let mut limbs = [0u64; 5];
        for i in 0..5 {
            limbs[i] = (self.0[i] + SIXTEEN_P[i]) - rhs.0[i];
        }
        Self::carry(limbs)
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        #[inline]
        fn m(x: u64, y: u64) -> u128 {
            u128::from(x) * u128::from(y)
        }

        let a = self.0;
        let b = rhs.0;
        let b1 = b[1] * 19;
        let b2 = b[2] * 19;
        let b3 = b[3] * 19;
        let b4 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1) + m(a[3], b2) + m(a[2], b3) + m(a[1], b4);
        let mut c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2) + m(a[3], b3) + m(a[2], b4);
        let mut c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3) + m(a[3], b4);
        let mut c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4);
        let mut c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        c1 += c0 >> 51;
        c2 += c1 >> 51;
        c3 += c2 >> 51;
        c4 += c3 >> 51;

        let mut out = [
            (c0 as u64) & LOW_51,
            (c1 as u64) & LOW_51,
            (c2 as u64) & LOW_51,
            (c3 as u64) & LOW_51,
            (c4 as u64) & LOW_51,
        ];
        out[0] += ((c4 >> 51) as u64) * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51;
        Self(out)
    }
}

/// Elligator2: map a field representative to the u-coordinate of a point on
/// the Montgomery form of Curve25519, using 2 as the non-square.
///
/// d = −A / (1 + 2r²); u = d when d³ + A·d² + d is a square, else u = −d − A.
pub(crate) fn elligator2_u(r: &FieldElement) -> FieldElement {
    let d = -MONTGOMERY_A * (FieldElement::ONE + (*r + *r) * *r).invert();
    let eps = d * (d.square() + MONTGOMERY_A * d + FieldElement::ONE);
    if eps.is_non_square() {
        -d - MONTGOMERY_A
    } else {
        d
    }
}
