use std::fmt::Debug;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::PairingEngine;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use ark_bls12_381::PairingEngine;

use crate::{BackendError, CurveId, CurvePoint, FieldElement, TargetGroup};

/// Main backend trait that ties together all cryptographic operations.
///
/// Concrete backends (the blstrs-based and the Arkworks-based
/// [`PairingEngine`]) implement this trait. It aggregates the per-group
/// traits and provides pairing operations.
///
/// # Type Parameters
///
/// - `Scalar`: The scalar field type (Zr)
/// - `G1`: The first elliptic curve group
/// - `G2`: The second elliptic curve group
/// - `Target`: The pairing target group (GT)
///
/// # Symmetric pairings
///
/// A backend whose G1 and G2 are the same group reports
/// [`is_symmetric`](PairingBackend::is_symmetric) and provides the identity
/// maps between the two source types. Asymmetric backends keep the defaults.
///
/// # Example
///
/// ```rust,no_run
/// use pairing_arith::{CurvePoint, PairingBackend, PairingEngine};
///
/// // Access backend types
/// type Scalar = <PairingEngine as PairingBackend>::Scalar;
/// type G1 = <PairingEngine as PairingBackend>::G1;
/// type G2 = <PairingEngine as PairingBackend>::G2;
///
/// let g1 = <G1 as CurvePoint<Scalar>>::generator();
/// let g2 = <G2 as CurvePoint<Scalar>>::generator();
///
/// // Compute pairing: e(G1, G2) -> GT
/// let result = PairingEngine::pairing(&g1, &g2);
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Human readable backend name, used in logs.
    const NAME: &'static str;
    /// The curve this backend evaluates pairings on.
    const CURVE: CurveId;

    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
    /// Pairing target group (GT).
    type Target: TargetGroup<Scalar = Self::Scalar>;

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Computes a product of pairings: `∏ e(g1[i], g2[i])`.
    ///
    /// This is more efficient than computing individual pairings and multiplying.
    /// Returns an error if the input arrays have different lengths.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError>;

    /// Whether G1 and G2 are the same group.
    fn is_symmetric() -> bool {
        false
    }

    /// Views a G1 point as a G2 point. `None` unless the pairing is symmetric.
    fn g1_as_g2(_point: &Self::G1) -> Option<Self::G2> {
        None
    }

    /// Views a G2 point as a G1 point. `None` unless the pairing is symmetric.
    fn g2_as_g1(_point: &Self::G2) -> Option<Self::G1> {
        None
    }
}
