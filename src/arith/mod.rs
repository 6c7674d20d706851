//! Cryptographic backend abstractions and implementations.
//!
//! This module provides trait abstractions over the curve arithmetic this
//! crate consumes, allowing multiple backend implementations (blstrs,
//! Arkworks) to provide unified interfaces.
//!
//! # Architecture
//!
//! - **[`field`]**: Scalar field operations (Zr) - addition, multiplication, inversion, hashing
//! - **[`group`]**: Elliptic curve point operations (G1, G2, GT) - addition, scalar multiplication, encodings
//! - **[`pairing`]**: Bilinear pairing operations - `e(G1, G2) -> GT`
//!
//! # Backend Support
//!
//! | Feature | Backend | Curve | Status |
//! |---------|---------|-------|--------|
//! | `blst` (default) | blstrs | BLS12-381 | Stable |
//! | `ark_bls12381` | Arkworks | BLS12-381 | Stable |
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use pairing_arith::{CurvePoint, FieldElement, PairingBackend, PairingEngine, TargetGroup};
//!
//! type Scalar = <PairingEngine as PairingBackend>::Scalar;
//! type G1 = <PairingEngine as PairingBackend>::G1;
//! type G2 = <PairingEngine as PairingBackend>::G2;
//!
//! // Field operations
//! let mut rng = thread_rng();
//! let scalar = <Scalar as FieldElement>::random(&mut rng);
//! let inv = FieldElement::invert(&scalar).expect("non-zero scalar");
//!
//! // Curve operations
//! let g1 = <G1 as CurvePoint<Scalar>>::generator();
//! let point = CurvePoint::mul_scalar(&g1, &scalar);
//!
//! // Pairing operation
//! let g2 = <G2 as CurvePoint<Scalar>>::generator();
//! let gt = PairingEngine::pairing(&point, &g2);
//! assert_eq!(TargetGroup::mul_scalar(&gt, &inv), PairingEngine::pairing(&g1, &g2));
//! ```

mod field;
pub use field::*;

mod group;
pub use group::*;

mod pairing;
pub use pairing::*;
