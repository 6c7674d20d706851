//! blst-backed scalar field for BLS12-381.
//!
//! Implements [`FieldElement`] for `blstrs::Scalar`. Compiled when the Cargo
//! feature `blst` is enabled.

use blstrs::Scalar;
use ff::Field;
use rand_core::RngCore;

use crate::{BackendError, FieldElement};

pub type Fr = Scalar;

impl FieldElement for Scalar {
    const BYTES: usize = 32;

    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <Scalar as Field>::random(rng)
    }

    fn invert(&self) -> Option<Self> {
        Field::invert(self).into()
    }

    fn pow(&self, exp: &[u64; 4]) -> Self {
        self.pow_vartime(exp)
    }

    fn to_repr(&self) -> Vec<u8> {
        self.to_bytes_be().to_vec()
    }

    fn from_repr(repr: &[u8]) -> Result<Self, BackendError> {
        let bytes: [u8; 32] = repr
            .try_into()
            .map_err(|_| BackendError::Serialization("invalid scalar length"))?;
        Option::<Scalar>::from(Scalar::from_bytes_be(&bytes))
            .ok_or(BackendError::Serialization("invalid scalar bytes"))
    }

    fn from_u64(n: u64) -> Self {
        Scalar::from(n)
    }

    fn is_zero(&self) -> bool {
        bool::from(Field::is_zero(self))
    }
}
