//! Shared pairing parameters.
//!
//! A [`PairingContext`] is built once from [`PairingParameters`] and then
//! handed to every element created against it. The context is a cheap handle
//! around reference-counted, immutable state: cloning it never copies the
//! parameters, and the state is released only once the last context handle
//! and the last element referencing it are gone. Elements therefore can never
//! outlive the parameters that give them meaning.
//!
//! Context identity is the identity of that shared state. Two contexts built
//! from equal parameters are still different contexts, and their elements do
//! not mix.

use core::fmt;
use core::marker::PhantomData;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CurvePoint, Element, FieldElement, PairingBackend, PairingEngine, PairingParameters,
    TargetGroup, errors::Error, field_order,
};

/// The four groups of a pairing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Group {
    /// First source group.
    G1,
    /// Second source group.
    G2,
    /// Target group.
    #[serde(rename = "GT")]
    Gt,
    /// Scalar field.
    Zr,
}

impl Group {
    /// Every group, in declaration order.
    pub const ALL: [Group; 4] = [Group::G1, Group::G2, Group::Gt, Group::Zr];

    /// Whether the group has a compressed point encoding.
    pub fn supports_compression(&self) -> bool {
        matches!(self, Group::G1 | Group::G2)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Group::G1 => "G1",
            Group::G2 => "G2",
            Group::Gt => "GT",
            Group::Zr => "Zr",
        })
    }
}

struct ContextState {
    params: PairingParameters,
    order: Vec<u8>,
    dst: [String; 4],
}

/// Immutable pairing parameters shared by every element created against them.
///
/// # Example
///
/// ```rust
/// use pairing_arith::{Group, PairingContext, PairingParameters};
///
/// let ctx = PairingContext::new(PairingParameters::default())?;
/// assert!(!ctx.is_symmetric());
/// assert_eq!(ctx.group_byte_length(Group::Zr), 32);
/// assert_eq!(ctx.compressed_byte_length(Group::G1)?, 48);
/// assert!(ctx.compressed_byte_length(Group::Gt).is_err());
/// # Ok::<(), pairing_arith::Error>(())
/// ```
pub struct PairingContext<B: PairingBackend = PairingEngine> {
    state: Arc<ContextState>,
    _backend: PhantomData<B>,
}

impl PairingContext {
    /// Builds a context for the compiled [`PairingEngine`].
    ///
    /// Fails with [`Error::InvalidParameters`] when the description is
    /// malformed or names a curve the compiled backend does not serve.
    pub fn new(params: PairingParameters) -> Result<Self, Error> {
        Self::create(params)
    }

    /// Parses a text description and builds a context from it.
    ///
    /// See [`PairingParameters`] for the accepted format.
    pub fn from_description(description: &str) -> Result<Self, Error> {
        Self::create(description.parse()?)
    }
}

impl<B: PairingBackend> PairingContext<B> {
    /// Builds a context over backend `B` from validated parameters.
    pub fn create(params: PairingParameters) -> Result<Self, Error> {
        params.validate()?;
        if params.curve != B::CURVE {
            return Err(Error::InvalidParameters(format!(
                "curve {} is not served by the {} backend ({})",
                params.curve,
                B::NAME,
                B::CURVE
            )));
        }
        let dst = Group::ALL.map(|group| params.dst(group));
        let state = ContextState {
            order: field_order::<B::Scalar>(),
            params,
            dst,
        };
        debug!(
            backend = B::NAME,
            curve = %state.params.curve,
            symmetric = B::is_symmetric(),
            hash_domain = %state.params.hash_domain,
            "pairing context created"
        );
        Ok(Self {
            state: Arc::new(state),
            _backend: PhantomData,
        })
    }

    /// The parameters this context was built from.
    pub fn parameters(&self) -> &PairingParameters {
        &self.state.params
    }

    /// True if G1 and G2 are the same group.
    pub fn is_symmetric(&self) -> bool {
        B::is_symmetric()
    }

    /// Big-endian bytes of the order of `group`.
    ///
    /// All four groups of the supported pairings have the same prime order r.
    pub fn group_order(&self, _group: Group) -> &[u8] {
        &self.state.order
    }

    /// Exact length of the canonical encoding of an element of `group`.
    pub fn group_byte_length(&self, group: Group) -> usize {
        match group {
            Group::G1 => <B::G1 as CurvePoint<B::Scalar>>::UNCOMPRESSED_BYTES,
            Group::G2 => <B::G2 as CurvePoint<B::Scalar>>::UNCOMPRESSED_BYTES,
            Group::Gt => <B::Target as TargetGroup>::BYTES,
            Group::Zr => <B::Scalar as FieldElement>::BYTES,
        }
    }

    /// Exact length of the compressed encoding of an element of `group`.
    ///
    /// Only G1 and G2 have a compressed encoding; GT and Zr fail with
    /// [`Error::UnsupportedOperation`].
    pub fn compressed_byte_length(&self, group: Group) -> Result<usize, Error> {
        match group {
            Group::G1 => Ok(<B::G1 as CurvePoint<B::Scalar>>::COMPRESSED_BYTES),
            Group::G2 => Ok(<B::G2 as CurvePoint<B::Scalar>>::COMPRESSED_BYTES),
            Group::Gt | Group::Zr => Err(Error::unsupported("compressed encoding", group)),
        }
    }

    /// Whether `other` is the same context (not merely equal parameters).
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    pub(crate) fn dst(&self, group: Group) -> &str {
        // `dst` is laid out in `Group::ALL` order, which is declaration order.
        &self.state.dst[group as usize]
    }

    /// A fresh element of `group`, set to its identity.
    pub fn element(&self, group: Group) -> Element<B> {
        Element::new(self, group)
    }

    /// A fresh G1 element (identity).
    pub fn g1(&self) -> Element<B> {
        self.element(Group::G1)
    }

    /// A fresh G2 element (identity).
    pub fn g2(&self) -> Element<B> {
        self.element(Group::G2)
    }

    /// A fresh GT element (identity).
    pub fn gt(&self) -> Element<B> {
        self.element(Group::Gt)
    }

    /// A fresh Zr element (zero).
    pub fn zr(&self) -> Element<B> {
        self.element(Group::Zr)
    }
}

impl<B: PairingBackend> Clone for PairingContext<B> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            _backend: PhantomData,
        }
    }
}

impl<B: PairingBackend> fmt::Debug for PairingContext<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingContext")
            .field("backend", &B::NAME)
            .field("curve", &self.state.params.curve)
            .field("hash_domain", &self.state.params.hash_domain)
            .field("symmetric", &B::is_symmetric())
            .finish()
    }
}
