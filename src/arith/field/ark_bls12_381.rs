use ark_bls12_381::Fr as ArkFr;
use ark_ff::{Field, One as ArkOne, PrimeField, UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::RngCore;

use crate::{BackendError, FieldElement};

pub type Fr = ArkFr;

impl FieldElement for Fr {
    const BYTES: usize = 32;

    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        ArkOne::one()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fr::rand(rng)
    }

    fn invert(&self) -> Option<Self> {
        self.inverse()
    }

    fn pow(&self, exp: &[u64; 4]) -> Self {
        Field::pow(self, exp)
    }

    // Arkworks writes little-endian; flip to the crate-wide big-endian layout.
    fn to_repr(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::BYTES);
        self.serialize_compressed(&mut bytes)
            .expect("in-memory scalar serialization");
        bytes.reverse();
        bytes
    }

    fn from_repr(repr: &[u8]) -> Result<Self, BackendError> {
        if repr.len() != Self::BYTES {
            return Err(BackendError::Serialization("invalid scalar length"));
        }
        let mut le = repr.to_vec();
        le.reverse();
        Self::deserialize_compressed(le.as_slice())
            .map_err(|_| BackendError::Serialization("invalid scalar bytes"))
    }

    fn from_u64(n: u64) -> Self {
        Fr::from(n)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn from_uniform_bytes(bytes: &[u8; 64]) -> Self {
        Fr::from_le_bytes_mod_order(bytes)
    }
}

#[cfg(test)]
mod tests {
    use rand::{RngCore, SeedableRng, rngs::StdRng};

    use super::*;

    fn horner(bytes: &[u8; 64]) -> Fr {
        let radix = Fr::from(u64::MAX) + Fr::from(1u64);
        bytes.chunks_exact(8).rev().fold(Fr::from(0u64), |acc, chunk| {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(chunk);
            acc * radix + Fr::from(u64::from_le_bytes(limb))
        })
    }

    #[test]
    fn wide_reduction_reads_little_endian() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bytes = [0xffu8; 64];
        assert_eq!(Fr::from_uniform_bytes(&bytes), horner(&bytes));
        rng.fill_bytes(&mut bytes);
        assert_eq!(Fr::from_uniform_bytes(&bytes), horner(&bytes));
    }

    #[test]
    fn repr_is_big_endian() {
        let repr = FieldElement::to_repr(&Fr::from(0x0102u64));
        assert_eq!(repr.len(), Fr::BYTES);
        assert_eq!(repr[30..], [0x01, 0x02]);
        assert_eq!(<Fr as FieldElement>::from_repr(&repr).unwrap(), Fr::from(0x0102u64));
        assert!(<Fr as FieldElement>::from_repr(&repr[1..]).is_err());
    }
}
