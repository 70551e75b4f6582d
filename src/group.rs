//! Curve arithmetic provider boundary.
//!
//! The signature and VRF layers never touch field elements or point
//! representations directly; everything they need from the group goes through
//! this trait. [`crate::Edwards25519`] is the production provider.

/// Prime-order group with 32-byte point and scalar encodings.
///
/// All functions are pure. Implementations are zero-sized markers; the
/// protocol code is generic over them (`sign_over::<C>`, `prove_over::<C>`, ...).
pub trait CurveGroup {
    type Point: Copy;
    type Scalar: Copy;

    /// Decode a compressed point. No subgroup check.
    fn decode(bytes: &[u8; 32]) -> Option<Self::Point>;

    /// Decode a compressed point, requiring a canonical encoding and
    /// membership in the prime-order subgroup generated by the basepoint.
    fn decode_prime_order(bytes: &[u8; 32]) -> Option<Self::Point>;

    fn encode(point: &Self::Point) -> [u8; 32];

    /// Deterministic map from 32 uniform bytes onto the curve. Total; the
    /// result may carry a small-order component.
    fn map_to_curve(bytes: &[u8; 32]) -> Self::Point;

    fn is_identity(point: &Self::Point) -> bool;

    fn add(a: &Self::Point, b: &Self::Point) -> Self::Point;

    fn double(point: &Self::Point) -> Self::Point;

    fn neg(point: &Self::Point) -> Self::Point;

    /// `s·B` for the fixed basepoint `B`.
    fn mul_base(s: &Self::Scalar) -> Self::Point;

    /// `s·P`.
    fn mul(s: &Self::Scalar, point: &Self::Point) -> Self::Point;

    /// `a·P + b·B`. May run in variable time; only call on public inputs.
    fn double_mul_base(a: &Self::Scalar, p: &Self::Point, b: &Self::Scalar) -> Self::Point;

    /// `a·P + b·Q`.
    fn double_mul(
        a: &Self::Scalar,
        p: &Self::Point,
        b: &Self::Scalar,
        q: &Self::Point,
    ) -> Self::Point;

    /// Reduce a 512-bit little-endian integer modulo the group order.
    fn scalar_reduce_wide(bytes: &[u8; 64]) -> Self::Scalar;

    /// Reduce a 256-bit little-endian integer modulo the group order.
    fn scalar_from_bytes(bytes: &[u8; 32]) -> Self::Scalar;

    /// Canonical little-endian encoding.
    fn scalar_to_bytes(s: &Self::Scalar) -> [u8; 32];

    fn scalar_neg(s: &Self::Scalar) -> Self::Scalar;

    /// `a·b + c` modulo the group order.
    fn scalar_mul_add(a: &Self::Scalar, b: &Self::Scalar, c: &Self::Scalar) -> Self::Scalar;
}
