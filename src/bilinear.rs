//! Pairing evaluation on elements.
//!
//! [`PairingContext::pair`] evaluates `e(a, b)` for `a` in G1 and `b` in G2.
//! [`PairingContext::product_pairing`] evaluates `∏ e(aᵢ, bᵢ)` with a single
//! final exponentiation, which is what signature and IBE verification
//! equations want. When the context is symmetric either operand may come
//! from either source group.

use tracing::instrument;

use crate::{
    Group, PairingBackend, PairingContext,
    element::{Element, Value},
    errors::{Error, Mismatch},
};

impl<B: PairingBackend> PairingContext<B> {
    /// Evaluates the pairing of `a` and `b` into a new GT element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pairing_arith::{PairingContext, PairingParameters};
    ///
    /// let ctx = PairingContext::new(PairingParameters::default())?;
    /// let mut p = ctx.g1();
    /// let mut q = ctx.g2();
    /// p.set_from_hash("alice")?;
    /// q.set_generator()?;
    ///
    /// let mut p2 = ctx.g1();
    /// p2.double(&p)?;
    /// let lhs = ctx.pair(&p2, &q)?;
    ///
    /// let e = ctx.pair(&p, &q)?;
    /// let mut rhs = ctx.gt();
    /// rhs.square(&e)?;
    /// assert_eq!(lhs, rhs);
    /// # Ok::<(), pairing_arith::Error>(())
    /// ```
    #[instrument(level = "trace", skip_all, fields(backend = B::NAME))]
    pub fn pair(&self, a: &Element<B>, b: &Element<B>) -> Result<Element<B>, Error> {
        let (p, q) = self.source_points(a, b)?;
        Ok(Element::from_value(
            self.clone(),
            Value::Gt(B::pairing(&p, &q)),
        ))
    }

    /// Evaluates `∏ e(left[i], right[i])` into a new GT element.
    ///
    /// Fails with [`Error::LengthMismatch`] when the slices differ in length
    /// and with [`Error::EmptyInput`] when both are empty.
    #[instrument(level = "trace", skip_all, fields(backend = B::NAME, terms = left.len()))]
    pub fn product_pairing(
        &self,
        left: &[Element<B>],
        right: &[Element<B>],
    ) -> Result<Element<B>, Error> {
        if left.len() != right.len() {
            return Err(Error::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        if left.is_empty() {
            return Err(Error::EmptyInput);
        }
        let (g1, g2): (Vec<B::G1>, Vec<B::G2>) = left
            .iter()
            .zip(right)
            .map(|(a, b)| self.source_points(a, b))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();
        let t = B::multi_pairing(&g1, &g2)?;
        Ok(Element::from_value(self.clone(), Value::Gt(t)))
    }

    fn source_points(&self, a: &Element<B>, b: &Element<B>) -> Result<(B::G1, B::G2), Error> {
        if !self.same_as(a.context()) || !self.same_as(b.context()) {
            return Err(Error::GroupMismatch(Mismatch::Context));
        }
        let symmetric = B::is_symmetric();
        let p = match &a.value {
            Value::G1(p) => *p,
            Value::G2(q) if symmetric => {
                B::g2_as_g1(q).ok_or(Error::group_mismatch(Group::G1, Group::G2))?
            }
            other => return Err(Error::group_mismatch(Group::G1, other.group())),
        };
        let q = match &b.value {
            Value::G2(q) => *q,
            Value::G1(p) if symmetric => {
                B::g1_as_g2(p).ok_or(Error::group_mismatch(Group::G2, Group::G1))?
            }
            other => return Err(Error::group_mismatch(Group::G2, other.group())),
        };
        Ok((p, q))
    }
}
