//! # pairing-arith: typed arithmetic over bilinear pairings
//!
//! This crate manages elements of the four groups of a pairing-friendly
//! curve (the source groups G1 and G2, the target group GT and the scalar
//! field Zr) and exposes arithmetic, randomization, hashing to elements,
//! byte encodings and pairing evaluation on them. Every element is bound to
//! the [`PairingContext`] it was created against, and operations only ever
//! combine elements of the same group and context.
//!
//! ## Architecture
//!
//! - **[`config`]**: [`PairingParameters`] and [`CurveId`], including the
//!   line-based text description accepted by [`PairingContext::from_description`].
//! - **Backend traits**: [`FieldElement`], [`CurvePoint`], [`TargetGroup`] and
//!   [`PairingBackend`] abstract the curve arithmetic; [`PairingEngine`] is the
//!   implementation selected by Cargo feature.
//! - **[`PairingContext`]**: immutable, shared parameters; group orders, byte
//!   lengths, symmetry and pairing evaluation.
//! - **[`Element`]**: a value in one group, with in-place arithmetic, hashing
//!   and encodings. [`ElementSeed`] deserializes elements into a context.
//! - **[`errors`]**: [`Error`] for callers and [`BackendError`] for backends.
//!
//! ## Quick Example
//!
//! ```rust
//! use pairing_arith::{PairingContext, PairingParameters};
//! use rand::thread_rng;
//!
//! let ctx = PairingContext::new(PairingParameters::default().with_hash_domain("DEMO-BLS"))?;
//! let mut rng = thread_rng();
//!
//! // Key pair: x in Zr, X = g2^x.
//! let mut g = ctx.g2();
//! g.set_generator()?;
//! let mut x = ctx.zr();
//! x.set_random(&mut rng);
//! let mut pk = ctx.g2();
//! pk.pow_scalar(&g, &x)?;
//!
//! // Sign: H(m)^x.
//! let mut h = ctx.g1();
//! h.set_from_hash("hello")?;
//! let mut sig = ctx.g1();
//! sig.pow_scalar(&h, &x)?;
//!
//! // Verify: e(sig, g) == e(H(m), X).
//! assert_eq!(ctx.pair(&sig, &g)?, ctx.pair(&h, &pk)?);
//!
//! // Elements travel as bytes.
//! let bytes = sig.to_compressed_bytes()?;
//! let back = pairing_arith::Element::from_compressed_bytes(&ctx, sig.group(), &bytes)?;
//! assert_eq!(back, sig);
//! # Ok::<(), pairing_arith::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! Exactly one backend must be enabled:
//!
//! - **`blst`** (default): blstrs backend for BLS12-381
//! - **`ark_bls12381`**: Arkworks backend for BLS12-381
//!
//! ## Performance
//!
//! Product pairings share a single final exponentiation across all terms, and
//! the blst backend prepares their G2 inputs in parallel with Rayon.

#[cfg(not(any(feature = "blst", feature = "ark_bls12381")))]
compile_error!("enable one backend feature: `blst` or `ark_bls12381`");

#[cfg(all(feature = "blst", feature = "ark_bls12381"))]
compile_error!("features `blst` and `ark_bls12381` are mutually exclusive");

mod arith;
mod bilinear;
pub mod config;
mod context;
mod element;
pub mod errors;
mod serde_impl;

#[cfg(test)]
mod testing;

pub use arith::*;
pub use config::{CurveId, DEFAULT_HASH_DOMAIN, PairingParameters};
pub use context::*;
pub use element::Element;
pub use errors::{BackendError, Error, Mismatch};
pub use serde_impl::ElementSeed;
