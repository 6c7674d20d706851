//! blst-backed concrete group types for BLS12-381.
//!
//! This module implements the [`CurvePoint`] and [`TargetGroup`] traits for
//! the `blstrs` projective points and target group.
//!
//! Exported types include:
//! - `G1`, `G2` - projective curve points (48/96-byte compressed, 96/192-byte uncompressed)
//! - `Gt` - target group element, encoded in its 288-byte torus-compressed form
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use std::io::Cursor;

use blstrs::{Compress, G1Affine, G1Projective, G2Affine, G2Projective, Gt as BlstGt, Scalar};
use group::Group;
use rand_core::RngCore;

use crate::{BackendError, CurvePoint, TargetGroup};

pub type G1 = G1Projective;
pub type G2 = G2Projective;
pub type Gt = BlstGt;

/// Byte length of the blstrs compressed `Gt` encoding.
const GT_BYTES: usize = 288;

fn fixed<const N: usize>(bytes: &[u8], what: &'static str) -> Result<[u8; N], BackendError> {
    bytes.try_into().map_err(|_| BackendError::Serialization(what))
}

impl CurvePoint<Scalar> for G1 {
    const UNCOMPRESSED_BYTES: usize = 96;
    const COMPRESSED_BYTES: usize = 48;

    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <G1Projective as Group>::random(rng)
    }

    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Result<Self, BackendError> {
        Ok(G1Projective::hash_to_curve(msg, dst, &[]))
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn negate(&self) -> Self {
        -self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        G1Affine::from(self).to_uncompressed().to_vec()
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes = fixed::<96>(bytes, "invalid G1 length")?;
        Option::<G1Affine>::from(G1Affine::from_uncompressed(&bytes))
            .map(G1Projective::from)
            .ok_or(BackendError::Serialization("invalid G1 point"))
    }

    fn to_compressed(&self) -> Vec<u8> {
        G1Affine::from(self).to_compressed().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes = fixed::<48>(bytes, "invalid compressed G1 length")?;
        Option::<G1Affine>::from(G1Affine::from_compressed(&bytes))
            .map(G1Projective::from)
            .ok_or(BackendError::Serialization("invalid compressed G1 point"))
    }
}

impl CurvePoint<Scalar> for G2 {
    const UNCOMPRESSED_BYTES: usize = 192;
    const COMPRESSED_BYTES: usize = 96;

    fn identity() -> Self {
        <G2Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G2Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <G2Projective as Group>::random(rng)
    }

    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Result<Self, BackendError> {
        Ok(G2Projective::hash_to_curve(msg, dst, &[]))
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn negate(&self) -> Self {
        -self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        G2Affine::from(self).to_uncompressed().to_vec()
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes = fixed::<192>(bytes, "invalid G2 length")?;
        Option::<G2Affine>::from(G2Affine::from_uncompressed(&bytes))
            .map(G2Projective::from)
            .ok_or(BackendError::Serialization("invalid G2 point"))
    }

    fn to_compressed(&self) -> Vec<u8> {
        G2Affine::from(self).to_compressed().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes = fixed::<96>(bytes, "invalid compressed G2 length")?;
        Option::<G2Affine>::from(G2Affine::from_compressed(&bytes))
            .map(G2Projective::from)
            .ok_or(BackendError::Serialization("invalid compressed G2 point"))
    }
}

impl TargetGroup for Gt {
    type Scalar = Scalar;

    const BYTES: usize = GT_BYTES;

    fn identity() -> Self {
        <Gt as Group>::identity()
    }

    fn generator() -> Self {
        <Gt as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Gt as Group>::is_identity(self).into()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <Gt as Group>::random(rng)
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        *self * *scalar
    }

    fn combine(&self, other: &Self) -> Self {
        *self + *other
    }

    fn invert(&self) -> Self {
        -*self
    }

    // Torus compression has no image for the identity, which is written as
    // all zeros instead.
    fn to_repr(&self) -> Vec<u8> {
        if TargetGroup::is_identity(self) {
            return vec![0u8; GT_BYTES];
        }
        let mut bytes = Vec::with_capacity(GT_BYTES);
        self.write_compressed(&mut bytes)
            .map_err(|_| BackendError::Serialization("gt serialization failure"))
            .expect("in-memory serialization should not fail");
        bytes
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        if bytes.len() != GT_BYTES {
            return Err(BackendError::Serialization("invalid GT length"));
        }
        if bytes.iter().all(|b| *b == 0) {
            return Ok(<Gt as Group>::identity());
        }
        Gt::read_compressed(&mut Cursor::new(bytes))
            .map_err(|_| BackendError::Serialization("invalid GT bytes"))
    }
}
