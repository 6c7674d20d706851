//! A symmetric pairing over the exponent model, for tests.
//!
//! Every group is represented by discrete logarithms in Zr: a point is the
//! scalar `x` standing for `x * g`, and the pairing multiplies exponents.
//! The map is bilinear and symmetric, so it exercises the code paths that no
//! BLS12-381 backend reaches. It offers no security whatsoever.

use rand_core::RngCore;

use crate::{
    BackendError, CurveId, CurvePoint, FieldElement, Fr, PairingBackend, TargetGroup,
    hash_to_field,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ExpPoint(pub(crate) Fr);

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ExpTarget(pub(crate) Fr);

fn dst_str(dst: &[u8]) -> Result<&str, BackendError> {
    core::str::from_utf8(dst).map_err(|_| BackendError::Other("dst is not utf-8".into()))
}

impl CurvePoint<Fr> for ExpPoint {
    const UNCOMPRESSED_BYTES: usize = <Fr as FieldElement>::BYTES;
    const COMPRESSED_BYTES: usize = <Fr as FieldElement>::BYTES;

    fn identity() -> Self {
        ExpPoint(<Fr as FieldElement>::zero())
    }

    fn generator() -> Self {
        ExpPoint(<Fr as FieldElement>::one())
    }

    fn is_identity(&self) -> bool {
        FieldElement::is_zero(&self.0)
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        ExpPoint(<Fr as FieldElement>::random(rng))
    }

    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Result<Self, BackendError> {
        Ok(ExpPoint(hash_to_field(msg, dst_str(dst)?)))
    }

    fn add(&self, other: &Self) -> Self {
        ExpPoint(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        ExpPoint(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        ExpPoint(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        ExpPoint(self.0 * *scalar)
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        FieldElement::to_repr(&self.0)
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        <Fr as FieldElement>::from_repr(bytes).map(ExpPoint)
    }

    fn to_compressed(&self) -> Vec<u8> {
        FieldElement::to_repr(&self.0)
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        <Fr as FieldElement>::from_repr(bytes).map(ExpPoint)
    }
}

impl TargetGroup for ExpTarget {
    type Scalar = Fr;

    const BYTES: usize = <Fr as FieldElement>::BYTES;

    fn identity() -> Self {
        ExpTarget(<Fr as FieldElement>::zero())
    }

    fn generator() -> Self {
        ExpTarget(<Fr as FieldElement>::one())
    }

    fn is_identity(&self) -> bool {
        FieldElement::is_zero(&self.0)
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        ExpTarget(<Fr as FieldElement>::random(rng))
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        ExpTarget(self.0 * *scalar)
    }

    fn combine(&self, other: &Self) -> Self {
        ExpTarget(self.0 + other.0)
    }

    fn invert(&self) -> Self {
        ExpTarget(-self.0)
    }

    fn to_repr(&self) -> Vec<u8> {
        FieldElement::to_repr(&self.0)
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        <Fr as FieldElement>::from_repr(bytes).map(ExpTarget)
    }
}

#[derive(Debug)]
pub(crate) struct ExponentPairing;

impl PairingBackend for ExponentPairing {
    const NAME: &'static str = "exponent-model";
    const CURVE: CurveId = CurveId::Bls12_381;

    type Scalar = Fr;
    type G1 = ExpPoint;
    type G2 = ExpPoint;
    type Target = ExpTarget;

    fn pairing(g1: &ExpPoint, g2: &ExpPoint) -> ExpTarget {
        ExpTarget(g1.0 * g2.0)
    }

    fn multi_pairing(g1: &[ExpPoint], g2: &[ExpPoint]) -> Result<ExpTarget, BackendError> {
        if g1.len() != g2.len() {
            return Err(BackendError::Math("pairing length mismatch"));
        }
        let sum = g1
            .iter()
            .zip(g2)
            .fold(<Fr as FieldElement>::zero(), |acc, (p, q)| acc + p.0 * q.0);
        Ok(ExpTarget(sum))
    }

    fn is_symmetric() -> bool {
        true
    }

    fn g1_as_g2(point: &ExpPoint) -> Option<ExpPoint> {
        Some(*point)
    }

    fn g2_as_g1(point: &ExpPoint) -> Option<ExpPoint> {
        Some(*point)
    }
}
