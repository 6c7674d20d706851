//! Group elements bound to a pairing context.
//!
//! An [`Element`] owns one value of G1, G2, GT or Zr together with a handle
//! to the [`PairingContext`] it was created against. The group tag is the
//! variant of the stored value, so it is fixed at creation and can never
//! drift from the value. Every mutating operation writes into the receiver
//! and first checks that all operands share its group and context, failing
//! with [`Error::GroupMismatch`] otherwise.
//!
//! # Example
//!
//! ```rust
//! use pairing_arith::{Group, PairingContext, PairingParameters};
//! use rand::thread_rng;
//!
//! let ctx = PairingContext::new(PairingParameters::default())?;
//! let mut rng = thread_rng();
//!
//! let mut a = ctx.zr();
//! a.set_random(&mut rng);
//! let mut b = a.init_same_as();
//! b.set_integer(3)?;
//!
//! let mut sum = ctx.zr();
//! sum.add(&a, &b)?;
//!
//! // Zr and G1 never mix.
//! assert!(sum.add(&a, &ctx.g1()).is_err());
//! # Ok::<(), pairing_arith::Error>(())
//! ```

mod codec;
mod ops;

use core::cmp::Ordering;
use core::fmt;

use rand_core::{CryptoRng, RngCore};
use tracing::instrument;

use crate::{
    CurvePoint, FieldElement, Group, PairingBackend, PairingContext, PairingEngine, TargetGroup,
    errors::{Error, Mismatch},
    hash_to_field,
};

/// The value of an element, one variant per group.
pub(crate) enum Value<B: PairingBackend> {
    G1(B::G1),
    G2(B::G2),
    Gt(B::Target),
    Zr(B::Scalar),
}

impl<B: PairingBackend> Value<B> {
    fn identity(group: Group) -> Self {
        match group {
            Group::G1 => Value::G1(<B::G1 as CurvePoint<B::Scalar>>::identity()),
            Group::G2 => Value::G2(<B::G2 as CurvePoint<B::Scalar>>::identity()),
            Group::Gt => Value::Gt(<B::Target as TargetGroup>::identity()),
            Group::Zr => Value::Zr(<B::Scalar as FieldElement>::zero()),
        }
    }

    pub(crate) fn group(&self) -> Group {
        match self {
            Value::G1(_) => Group::G1,
            Value::G2(_) => Group::G2,
            Value::Gt(_) => Group::Gt,
            Value::Zr(_) => Group::Zr,
        }
    }
}

impl<B: PairingBackend> Clone for Value<B> {
    fn clone(&self) -> Self {
        match self {
            Value::G1(p) => Value::G1(*p),
            Value::G2(q) => Value::G2(*q),
            Value::Gt(t) => Value::Gt(t.clone()),
            Value::Zr(s) => Value::Zr(*s),
        }
    }
}

impl<B: PairingBackend> PartialEq for Value<B> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::G1(a), Value::G1(b)) => a == b,
            (Value::G2(a), Value::G2(b)) => a == b,
            (Value::Gt(a), Value::Gt(b)) => a == b,
            (Value::Zr(a), Value::Zr(b)) => a == b,
            _ => false,
        }
    }
}

/// A value in one of the groups of a pairing, bound to its context.
pub struct Element<B: PairingBackend = PairingEngine> {
    pub(crate) ctx: PairingContext<B>,
    pub(crate) value: Value<B>,
}

impl<B: PairingBackend> Element<B> {
    /// Allocates an element of `group` under `ctx`, set to the group identity
    /// (zero for Zr).
    #[doc(alias = "init")]
    pub fn new(ctx: &PairingContext<B>, group: Group) -> Self {
        Self::from_value(ctx.clone(), Value::identity(group))
    }

    pub(crate) fn from_value(ctx: PairingContext<B>, value: Value<B>) -> Self {
        Self { ctx, value }
    }

    /// A new element with the same group and context as `self`, set to the
    /// identity. The value is not copied.
    pub fn init_same_as(&self) -> Self {
        Self::new(&self.ctx, self.group())
    }

    /// The group this element belongs to.
    pub fn group(&self) -> Group {
        self.value.group()
    }

    /// The context this element was created against.
    pub fn context(&self) -> &PairingContext<B> {
        &self.ctx
    }

    /// Sets the additive identity. For G1, G2 and GT this is the group identity.
    pub fn set_zero(&mut self) {
        self.value = Value::identity(self.group());
    }

    /// Sets the multiplicative identity. For G1, G2 and GT this is the group identity.
    pub fn set_one(&mut self) {
        self.value = match self.group() {
            Group::Zr => Value::Zr(<B::Scalar as FieldElement>::one()),
            group => Value::identity(group),
        };
    }

    /// Sets a Zr element to the residue of `n`.
    ///
    /// Other groups have no integer embedding and fail with
    /// [`Error::UnsupportedOperation`].
    pub fn set_integer(&mut self, n: i64) -> Result<(), Error> {
        if self.group() != Group::Zr {
            return Err(Error::unsupported("integer assignment", self.group()));
        }
        self.value = Value::Zr(<B::Scalar as FieldElement>::from_i64(n));
        Ok(())
    }

    /// Copies the value of `other`, which must share group and context.
    pub fn set(&mut self, other: &Self) -> Result<(), Error> {
        self.ensure_compatible(other)?;
        self.value = other.value.clone();
        Ok(())
    }

    /// Sets the standard generator of G1, G2 or GT (`e(g1, g2)` for GT).
    pub fn set_generator(&mut self) -> Result<(), Error> {
        self.value = match self.group() {
            Group::G1 => Value::G1(<B::G1 as CurvePoint<B::Scalar>>::generator()),
            Group::G2 => Value::G2(<B::G2 as CurvePoint<B::Scalar>>::generator()),
            Group::Gt => Value::Gt(<B::Target as TargetGroup>::generator()),
            Group::Zr => return Err(Error::unsupported("generator", Group::Zr)),
        };
        Ok(())
    }

    /// Draws a uniformly random value of the element's group from `rng`.
    pub fn set_random<R: RngCore + CryptoRng + ?Sized>(&mut self, rng: &mut R) {
        self.value = match self.group() {
            Group::G1 => Value::G1(<B::G1 as CurvePoint<B::Scalar>>::random(rng)),
            Group::G2 => Value::G2(<B::G2 as CurvePoint<B::Scalar>>::random(rng)),
            Group::Gt => Value::Gt(<B::Target as TargetGroup>::random(rng)),
            Group::Zr => Value::Zr(<B::Scalar as FieldElement>::random(rng)),
        };
    }

    /// Deterministically maps `data` into the element's group.
    ///
    /// The same bytes under contexts with the same hash domain always give
    /// the same element. G1 and G2 use RFC 9380 hash-to-curve; Zr reduces a
    /// wide BLAKE3 output; GT raises the generator to the Zr hash of `data`.
    ///
    /// A GT hash is therefore `g^h` for a publicly computable `h`: its
    /// discrete logarithm is known to everyone, so it must not be used where
    /// a random oracle into GT is required.
    #[instrument(level = "trace", skip_all, fields(group = %self.group()))]
    pub fn set_from_hash(&mut self, data: impl AsRef<[u8]>) -> Result<(), Error> {
        let data = data.as_ref();
        let dst = self.ctx.dst(self.group());
        self.value = match self.group() {
            Group::G1 => Value::G1(<B::G1 as CurvePoint<B::Scalar>>::hash_to_curve(
                data,
                dst.as_bytes(),
            )?),
            Group::G2 => Value::G2(<B::G2 as CurvePoint<B::Scalar>>::hash_to_curve(
                data,
                dst.as_bytes(),
            )?),
            Group::Gt => Value::Gt(
                <B::Target as TargetGroup>::generator()
                    .mul_scalar(&hash_to_field::<B::Scalar>(data, dst)),
            ),
            Group::Zr => Value::Zr(hash_to_field::<B::Scalar>(data, dst)),
        };
        Ok(())
    }

    /// Value equality; fails with [`Error::GroupMismatch`] across groups or contexts.
    pub fn compare_equal(&self, other: &Self) -> Result<bool, Error> {
        self.ensure_compatible(other)?;
        Ok(self.value == other.value)
    }

    /// True for zero in Zr and for the identity elsewhere.
    pub fn is_zero(&self) -> bool {
        self.value.is_identity()
    }

    /// True for one in Zr and for the identity elsewhere.
    pub fn is_one(&self) -> bool {
        match &self.value {
            Value::Zr(s) => *s == <B::Scalar as FieldElement>::one(),
            _ => self.is_zero(),
        }
    }

    pub(crate) fn ensure_compatible(&self, other: &Self) -> Result<(), Error> {
        if !self.ctx.same_as(&other.ctx) {
            return Err(Error::GroupMismatch(Mismatch::Context));
        }
        if self.group() != other.group() {
            return Err(Error::group_mismatch(self.group(), other.group()));
        }
        Ok(())
    }
}

impl<B: PairingBackend> Clone for Element<B> {
    fn clone(&self) -> Self {
        Self::from_value(self.ctx.clone(), self.value.clone())
    }
}

/// Equal when group, context and value all match. Use
/// [`Element::compare_equal`] to have mismatches reported as errors.
impl<B: PairingBackend> PartialEq for Element<B> {
    fn eq(&self, other: &Self) -> bool {
        self.ctx.same_as(&other.ctx) && self.value == other.value
    }
}

/// Zr elements are ordered by their integer value in `[0, r)`. G1, G2 and
/// GT have no natural order, so their elements are either equal or
/// unordered. Elements of different groups or contexts are unordered.
impl<B: PairingBackend> PartialOrd for Element<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.ctx.same_as(&other.ctx) {
            return None;
        }
        match (&self.value, &other.value) {
            // Fixed-width big-endian, so byte order is integer order.
            (Value::Zr(a), Value::Zr(b)) => Some(a.to_repr().cmp(&b.to_repr())),
            (a, b) if a == b => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl<B: PairingBackend> fmt::Debug for Element<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("group", &self.group())
            .field("bytes", &hex::encode(self.to_bytes()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::PairingParameters;
    use crate::testing::ExponentPairing;

    fn ctx() -> PairingContext {
        PairingContext::new(PairingParameters::default()).unwrap()
    }

    #[test]
    fn fresh_elements_are_identities() {
        let ctx = ctx();
        for group in Group::ALL {
            let e = ctx.element(group);
            assert_eq!(e.group(), group);
            assert!(e.is_zero(), "{group} not zero");
        }
        assert!(!ctx.zr().is_one());
        assert!(ctx.g1().is_one());
    }

    #[test]
    fn init_same_as_resets_value() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(3);
        let mut a = ctx.g2();
        a.set_random(&mut rng);
        let b = a.init_same_as();
        assert_eq!(b.group(), Group::G2);
        assert!(b.context().same_as(&ctx));
        assert!(b.is_zero());
        assert!(!a.is_zero());
    }

    #[test]
    fn set_copies_only_matching_elements() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(4);
        let mut a = ctx.zr();
        a.set_random(&mut rng);
        let mut b = ctx.zr();
        b.set(&a).unwrap();
        assert_eq!(a, b);

        let mut g = ctx.g1();
        assert!(matches!(
            g.set(&a),
            Err(Error::GroupMismatch(Mismatch::Group {
                expected: Group::G1,
                found: Group::Zr
            }))
        ));
    }

    #[test]
    fn integers_only_embed_in_zr() {
        let ctx = ctx();
        let mut z = ctx.zr();
        z.set_integer(-1).unwrap();
        let mut one = ctx.zr();
        one.set_one();
        let mut sum = ctx.zr();
        sum.add(&z, &one).unwrap();
        assert!(sum.is_zero());

        assert!(matches!(
            ctx.gt().set_integer(2),
            Err(Error::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn generator_is_not_identity() {
        let ctx = ctx();
        for group in [Group::G1, Group::G2, Group::Gt] {
            let mut e = ctx.element(group);
            e.set_generator().unwrap();
            assert!(!e.is_zero());
        }
        assert!(ctx.zr().set_generator().is_err());
    }

    #[test]
    fn hashing_is_deterministic_per_domain() {
        let ctx = ctx();
        let other = PairingContext::<PairingEngine>::new(
            PairingParameters::default().with_hash_domain("OTHER"),
        )
        .unwrap();
        for group in Group::ALL {
            let mut a = ctx.element(group);
            let mut b = ctx.element(group);
            a.set_from_hash("alice@example.com").unwrap();
            b.set_from_hash(b"alice@example.com").unwrap();
            assert!(a.compare_equal(&b).unwrap(), "{group} hash not stable");

            let mut c = ctx.element(group);
            c.set_from_hash("bob@example.com").unwrap();
            assert!(!a.compare_equal(&c).unwrap());

            let mut d = other.element(group);
            d.set_from_hash("alice@example.com").unwrap();
            assert_ne!(a.to_bytes(), d.to_bytes(), "{group} ignores domain");
        }
    }

    #[test]
    fn gt_hash_has_public_exponent() {
        let ctx = ctx();
        let mut hashed = ctx.gt();
        hashed.set_from_hash("carol").unwrap();

        let mut h = ctx.zr();
        h.value = Value::Zr(hash_to_field(b"carol", ctx.dst(Group::Gt)));
        let mut g = ctx.gt();
        g.set_generator().unwrap();
        let mut expected = ctx.gt();
        expected.pow_scalar(&g, &h).unwrap();
        assert_eq!(hashed, expected);
    }

    #[test]
    fn compare_equal_rejects_mismatch() {
        let a = ctx();
        let b = ctx();
        assert!(matches!(
            a.g1().compare_equal(&b.g1()),
            Err(Error::GroupMismatch(Mismatch::Context))
        ));
        assert!(matches!(
            a.g1().compare_equal(&a.g2()),
            Err(Error::GroupMismatch(_))
        ));
        assert_ne!(a.g1(), b.g1());
    }

    #[test]
    fn elements_keep_context_alive() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut e = {
            let ctx = ctx();
            ctx.g1()
        };
        e.set_random(&mut rng);
        let mut twice = e.init_same_as();
        twice.double(&e).unwrap();
        assert_eq!(twice.context().group_byte_length(Group::G1), 96);
    }

    #[test]
    fn debug_prints_group_and_hex() {
        let ctx = ctx();
        let mut z = ctx.zr();
        z.set_integer(0x1f).unwrap();
        let dbg = format!("{z:?}");
        assert!(dbg.contains("Zr"));
        assert!(dbg.ends_with("001f\" }"), "{dbg}");
        assert!(dbg.contains(&hex::encode(z.to_bytes())));
    }

    #[test]
    fn zr_orders_by_integer_value() {
        let ctx = ctx();
        let mut ten = ctx.zr();
        let mut eleven = ctx.zr();
        let mut minus_one = ctx.zr();
        ten.set_integer(10).unwrap();
        eleven.set_integer(11).unwrap();
        minus_one.set_integer(-1).unwrap();

        assert!(ten < eleven);
        assert!(eleven > ten);
        assert!(ten <= ten.clone());
        assert_eq!(ten.partial_cmp(&ten.clone()), Some(Ordering::Equal));
        // -1 is r - 1, the largest canonical value.
        assert!(minus_one > eleven);
    }

    #[test]
    fn curve_elements_are_only_equal_or_unordered() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(12);
        for group in [Group::G1, Group::G2, Group::Gt] {
            let mut a = ctx.element(group);
            let mut b = ctx.element(group);
            a.set_random(&mut rng);
            b.set_random(&mut rng);
            assert_eq!(a.partial_cmp(&a.clone()), Some(Ordering::Equal), "{group}");
            assert_eq!(a.partial_cmp(&b), None, "{group}");
        }
    }

    #[test]
    fn mismatched_elements_are_unordered() {
        let ctx = ctx();
        let other = self::ctx();
        let mut a = ctx.zr();
        a.set_integer(3).unwrap();
        let mut b = other.zr();
        b.set_integer(4).unwrap();
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(ctx.zr().partial_cmp(&ctx.g1()), None);
    }

    #[test]
    fn symmetric_backend_is_reported() {
        let ctx = PairingContext::<ExponentPairing>::create(PairingParameters::default()).unwrap();
        assert!(ctx.is_symmetric());
        assert_eq!(ctx.g1().group(), Group::G1);
    }
}
