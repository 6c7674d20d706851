//! Arkworks BLS12-381 group operations.
//!
//! [`G1`], [`G2`] and [`Gt`] wrap the Arkworks projective points and
//! `PairingOutput<Bls12_381>`. Hash-to-curve uses the RFC 9380
//! `XMD:SHA-256_SSWU_RO_` suites through the Wahby–Boneh map.
//!
//! # Feature Flag
//!
//! This module is only available when the `ark_bls12381` feature is enabled.

use ark_bls12_381::{Bls12_381, G1Affine, G1Projective, G2Affine, G2Projective, g1, g2};
use ark_ec::hashing::curve_maps::wb::WBMap;
use ark_ec::hashing::map_to_curve_hasher::MapToCurveBasedHasher;
use ark_ec::hashing::HashToCurve;
use ark_ec::pairing::PairingOutput;
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
use ark_ff::field_hashers::DefaultFieldHasher;
use ark_ff::{UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::RngCore;
use sha2::Sha256;

use crate::{BackendError, CurvePoint, Fr, TargetGroup};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1(pub G1Projective);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2(pub G2Projective);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gt(pub PairingOutput<Bls12_381>);

type G1Hasher = MapToCurveBasedHasher<G1Projective, DefaultFieldHasher<Sha256, 128>, WBMap<g1::Config>>;
type G2Hasher = MapToCurveBasedHasher<G2Projective, DefaultFieldHasher<Sha256, 128>, WBMap<g2::Config>>;

fn write<T: CanonicalSerialize>(value: &T, compressed: bool) -> Vec<u8> {
    let mut bytes = Vec::new();
    let res = if compressed {
        value.serialize_compressed(&mut bytes)
    } else {
        value.serialize_uncompressed(&mut bytes)
    };
    res.expect("in-memory serialization should not fail");
    bytes
}

fn read<T: CanonicalDeserialize>(
    bytes: &[u8],
    len: usize,
    compressed: bool,
    what: &'static str,
) -> Result<T, BackendError> {
    if bytes.len() != len {
        return Err(BackendError::Serialization(what));
    }
    let res = if compressed {
        T::deserialize_compressed(bytes)
    } else {
        T::deserialize_uncompressed(bytes)
    };
    res.map_err(|_| BackendError::Serialization(what))
}

impl CurvePoint<Fr> for G1 {
    const UNCOMPRESSED_BYTES: usize = 96;
    const COMPRESSED_BYTES: usize = 48;

    fn identity() -> Self {
        G1(G1Projective::zero())
    }

    fn generator() -> Self {
        G1(G1Projective::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        G1(G1Projective::rand(rng))
    }

    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Result<Self, BackendError> {
        let hasher = G1Hasher::new(dst).map_err(|e| BackendError::Other(e.to_string()))?;
        hasher
            .hash(msg)
            .map(|p| G1(p.into_group()))
            .map_err(|e| BackendError::Other(e.to_string()))
    }

    fn add(&self, other: &Self) -> Self {
        G1(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        G1(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        G1(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G1(self.0 * *scalar)
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        write(&self.0.into_affine(), false)
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        read::<G1Affine>(bytes, Self::UNCOMPRESSED_BYTES, false, "invalid G1 point")
            .map(|p| G1(p.into_group()))
    }

    fn to_compressed(&self) -> Vec<u8> {
        write(&self.0.into_affine(), true)
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        read::<G1Affine>(bytes, Self::COMPRESSED_BYTES, true, "invalid compressed G1 point")
            .map(|p| G1(p.into_group()))
    }
}

impl CurvePoint<Fr> for G2 {
    const UNCOMPRESSED_BYTES: usize = 192;
    const COMPRESSED_BYTES: usize = 96;

    fn identity() -> Self {
        G2(G2Projective::zero())
    }

    fn generator() -> Self {
        G2(G2Projective::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        G2(G2Projective::rand(rng))
    }

    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Result<Self, BackendError> {
        let hasher = G2Hasher::new(dst).map_err(|e| BackendError::Other(e.to_string()))?;
        hasher
            .hash(msg)
            .map(|p| G2(p.into_group()))
            .map_err(|e| BackendError::Other(e.to_string()))
    }

    fn add(&self, other: &Self) -> Self {
        G2(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        G2(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        G2(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G2(self.0 * *scalar)
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        write(&self.0.into_affine(), false)
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        read::<G2Affine>(bytes, Self::UNCOMPRESSED_BYTES, false, "invalid G2 point")
            .map(|p| G2(p.into_group()))
    }

    fn to_compressed(&self) -> Vec<u8> {
        write(&self.0.into_affine(), true)
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        read::<G2Affine>(bytes, Self::COMPRESSED_BYTES, true, "invalid compressed G2 point")
            .map(|p| G2(p.into_group()))
    }
}

impl TargetGroup for Gt {
    type Scalar = Fr;

    // Fq12 written coefficient by coefficient, 12 * 48 bytes.
    const BYTES: usize = 576;

    fn identity() -> Self {
        Gt(PairingOutput::zero())
    }

    fn generator() -> Self {
        Gt(PairingOutput::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Gt(PairingOutput::<Bls12_381>::generator() * Fr::rand(rng))
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        Gt(self.0 * *scalar)
    }

    // Arkworks writes GT additively.
    fn combine(&self, other: &Self) -> Self {
        Gt(self.0 + other.0)
    }

    fn invert(&self) -> Self {
        Gt(-self.0)
    }

    fn to_repr(&self) -> Vec<u8> {
        write(&self.0, false)
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        read::<PairingOutput<Bls12_381>>(bytes, Self::BYTES, false, "invalid GT bytes").map(Gt)
    }
}
