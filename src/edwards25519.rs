//! Edwards25519 provider backed by curve25519-dalek.

use curve25519_dalek::{
    edwards::{CompressedEdwardsY, EdwardsPoint},
    montgomery::MontgomeryPoint,
    scalar::Scalar,
    traits::IsIdentity,
};
use subtle::ConstantTimeEq;

use crate::{
    field::{elligator2_u, FieldElement},
    group::CurveGroup,
};

/// The twisted Edwards form of Curve25519 with the standard Ed25519 basepoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edwards25519;

impl CurveGroup for Edwards25519 {
    type Point = EdwardsPoint;
    type Scalar = Scalar;

    #[inline]
    fn decode(bytes: &[u8; 32]) -> Option<EdwardsPoint> {
        CompressedEdwardsY(*bytes).decompress()
    }

    fn decode_prime_order(bytes: &[u8; 32]) -> Option<EdwardsPoint> {
        let point = CompressedEdwardsY(*bytes).decompress()?;
        // decompress() tolerates y >= p; re-encoding exposes it
        let canonical: bool = point.compress().as_bytes()[..].ct_eq(&bytes[..]).into();
        (canonical && point.is_torsion_free()).then_some(point)
    }

    #[inline]
    fn encode(point: &EdwardsPoint) -> [u8; 32] {
        point.compress().to_bytes()
    }

    /// Elligator2 on the low 255 bits, then the birational map to Edwards
    /// with the sign of x taken from the top bit.
    fn map_to_curve(bytes: &[u8; 32]) -> EdwardsPoint {
        let sign = bytes[31] >> 7;
        let u = elligator2_u(&FieldElement::from_bytes(bytes));
        // u = -1 is outside the image of the map
        MontgomeryPoint(u.to_bytes()).to_edwards(sign).unwrap_or_default()
    }

    #[inline]
    fn is_identity(point: &EdwardsPoint) -> bool {
        point.is_identity()
    }

    #[inline]
    fn add(a: &EdwardsPoint, b: &EdwardsPoint) -> EdwardsPoint {
        a + b
    }

    #[inline]
    fn double(point: &EdwardsPoint) -> EdwardsPoint {
        point + point
    }

    #[inline]
    fn neg(point: &EdwardsPoint) -> EdwardsPoint {
        -point
    }

    #[inline]
    fn mul_base(s: &Scalar) -> EdwardsPoint {
        EdwardsPoint::mul_base(s)
    }

    #[inline]
    fn mul(s: &Scalar, point: &EdwardsPoint) -> EdwardsPoint {
        point * s
    }

    #[inline]
    fn double_mul_base(a: &Scalar, p: &EdwardsPoint, b: &Scalar) -> EdwardsPoint {
        EdwardsPoint::vartime_double_scalar_mul_basepoint(a, p, b)
    }

    #[inline]
    fn double_mul(a: &Scalar, p: &EdwardsPoint, b: &Scalar, q: &EdwardsPoint) -> EdwardsPoint {
        p * a + q * b
    }

    #[inline]
    fn scalar_reduce_wide(bytes: &[u8; 64]) -> Scalar {
        Scalar::from_bytes_mod_order_wide(bytes)
    }

    #[inline]
    fn scalar_from_bytes(bytes: &[u8; 32]) -> Scalar {
        Scalar::from_bytes_mod_order(*bytes)
    }

    #[inline]
    fn scalar_to_bytes(s: &Scalar) -> [u8; 32] {
        s.to_bytes()
    }

    #[inline]
    fn scalar_neg(s: &Scalar) -> Scalar {
        -s
    }

    #[inline]
    fn scalar_mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        a * b + c
    }
}
