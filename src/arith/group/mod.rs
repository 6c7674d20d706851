use core::fmt::Debug;

use rand_core::RngCore;

use crate::{BackendError, FieldElement};

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::{G1, G2, Gt};

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use ark_bls12_381::{G1, G2, Gt};

/// Elliptic curve point abstraction for G1 and G2 groups.
///
/// Points are kept in projective coordinates; the byte encodings are the
/// affine compressed and uncompressed forms of the backend.
///
/// # Type Parameters
///
/// - `F`: The scalar field type used for scalar multiplication
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use pairing_arith::{CurvePoint, FieldElement, Fr, G1};
///
/// let mut rng = thread_rng();
/// let scalar = <Fr as FieldElement>::random(&mut rng);
///
/// // Point operations
/// let g = <G1 as CurvePoint<Fr>>::generator();
/// let point = CurvePoint::mul_scalar(&g, &scalar);
/// let doubled = CurvePoint::add(&point, &point);
/// let neg = CurvePoint::negate(&point);
///
/// // Encodings
/// let compressed = CurvePoint::to_compressed(&point);
/// assert_eq!(compressed.len(), <G1 as CurvePoint<Fr>>::COMPRESSED_BYTES);
/// ```
pub trait CurvePoint<F: FieldElement>: Clone + Copy + Send + Sync + Debug + PartialEq + 'static {
    /// Length of the uncompressed (canonical) encoding.
    const UNCOMPRESSED_BYTES: usize;
    /// Length of the compressed encoding.
    const COMPRESSED_BYTES: usize;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Samples a uniformly random group element.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Hashes `msg` onto the curve under the domain separation tag `dst`.
    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Result<Self, BackendError>;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs elliptic curve point subtraction.
    fn sub(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Serializes the affine point without compression.
    fn to_uncompressed(&self) -> Vec<u8>;

    /// Deserializes and validates (on curve, in subgroup) an uncompressed point.
    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError>;

    /// Serializes the affine x-coordinate plus sign flags.
    fn to_compressed(&self) -> Vec<u8>;

    /// Decompresses and validates a compressed point.
    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError>;
}

/// Pairing target group (GT) abstraction.
///
/// This trait represents the target group of the pairing operation, which is
/// a multiplicative subgroup of the extension field. Method names use
/// multiplicative language (`combine`, `invert`) even where the backend
/// writes the group additively.
///
/// # Example
///
/// ```rust,no_run
/// use pairing_arith::{CurvePoint, Fr, G1, G2, PairingBackend, PairingEngine, TargetGroup};
///
/// let g1 = <G1 as CurvePoint<Fr>>::generator();
/// let g2 = <G2 as CurvePoint<Fr>>::generator();
///
/// // Compute pairing
/// let gt = PairingEngine::pairing(&g1, &g2);
///
/// // Target group operations
/// let gt_squared = TargetGroup::combine(&gt, &gt);
/// assert_eq!(TargetGroup::combine(&gt_squared, &TargetGroup::invert(&gt)), gt);
/// ```
pub trait TargetGroup: Clone + Send + Sync + Debug + PartialEq + 'static {
    /// Scalar field type for exponentiation.
    type Scalar: FieldElement;

    /// Length of the canonical byte encoding.
    const BYTES: usize;

    /// Returns the multiplicative identity element.
    fn identity() -> Self;

    /// Returns `e(g1, g2)` for the standard generators.
    fn generator() -> Self;

    /// Checks if this is the identity element.
    fn is_identity(&self) -> bool;

    /// Samples a uniformly random element of the prime-order subgroup.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Performs scalar multiplication (exponentiation in multiplicative notation).
    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self;

    /// Combines (multiplies) two target group elements.
    fn combine(&self, other: &Self) -> Self;

    /// Returns the group inverse.
    fn invert(&self) -> Self;

    /// Serializes this element to its canonical byte representation.
    fn to_repr(&self) -> Vec<u8>;

    /// Deserializes an element from its canonical byte representation.
    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError>;
}
