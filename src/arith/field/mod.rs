use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;

use crate::BackendError;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::Fr;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use ark_bls12_381::Fr;

/// Field element abstraction for scalar field (Zr) operations.
///
/// This trait abstracts over the scalar field Fr of the elliptic curve. The
/// byte representation is fixed-width big-endian for every backend so scalar
/// encodings are interchangeable between them.
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use pairing_arith::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = Fr::random(&mut rng);
///
/// // Field operations
/// let inv = FieldElement::invert(&a).expect("non-zero element");
/// assert_eq!(a * inv, <Fr as FieldElement>::one());
///
/// // Serialization
/// let bytes = FieldElement::to_repr(&a);
/// let recovered = <Fr as FieldElement>::from_repr(&bytes).expect("valid repr");
/// assert_eq!(a, recovered);
/// ```
pub trait FieldElement:
    Clone
    + Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Length of the canonical byte representation.
    const BYTES: usize;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Generates a random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Raises this element to a power represented as a 256-bit little-endian integer.
    fn pow(&self, exp: &[u64; 4]) -> Self;

    /// Serializes this field element to `BYTES` big-endian bytes.
    fn to_repr(&self) -> Vec<u8>;

    /// Deserializes a field element from its big-endian byte representation.
    ///
    /// Returns an error if the length is wrong or the value is not reduced
    /// modulo the field order.
    fn from_repr(repr: &[u8]) -> Result<Self, BackendError>;

    /// Convert u64 to self.
    fn from_u64(n: u64) -> Self;

    /// Checks if this element is zero.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Convert a signed integer to self, mapping `-n` to the additive inverse of `n`.
    fn from_i64(n: i64) -> Self {
        let magnitude = Self::from_u64(n.unsigned_abs());
        if n < 0 { -magnitude } else { magnitude }
    }

    /// Returns the canonical integer value as little-endian 64-bit limbs.
    fn to_limbs(&self) -> [u64; 4] {
        let repr = self.to_repr();
        let mut limbs = [0u64; 4];
        for (i, byte) in repr.iter().rev().enumerate().take(32) {
            limbs[i / 8] |= u64::from(*byte) << (8 * (i % 8));
        }
        limbs
    }

    /// Reduces 64 little-endian bytes modulo the field order.
    ///
    /// Used to map uniform hash output to a field element with negligible bias.
    fn from_uniform_bytes(bytes: &[u8; 64]) -> Self {
        let radix = Self::from_u64(u64::MAX) + Self::one();
        bytes.chunks_exact(8).rev().fold(Self::zero(), |acc, chunk| {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(chunk);
            acc * radix + Self::from_u64(u64::from_le_bytes(limb))
        })
    }
}

/// Hashes `msg` into the field under the domain separation tag `dst`.
///
/// The BLAKE3 key-derivation mode is keyed with `dst`, and 64 bytes of its
/// extendable output are reduced modulo the field order.
pub fn hash_to_field<F: FieldElement>(msg: &[u8], dst: &str) -> F {
    let mut hasher = blake3::Hasher::new_derive_key(dst);
    hasher.update(msg);
    let mut wide = [0u8; 64];
    hasher.finalize_xof().fill(&mut wide);
    F::from_uniform_bytes(&wide)
}

/// Returns the big-endian bytes of the field order r.
pub fn field_order<F: FieldElement>() -> Vec<u8> {
    // r - 1 is the largest canonical value; add one with carry.
    let mut bytes = (-F::one()).to_repr();
    for byte in bytes.iter_mut().rev() {
        let (sum, carry) = byte.overflowing_add(1);
        *byte = sum;
        if !carry {
            break;
        }
    }
    bytes
}
