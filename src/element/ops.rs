//! Group and field arithmetic on elements.
//!
//! G1 and G2 are written additively by the backends and GT multiplicatively,
//! but at this layer every group answers to both vocabularies: `add` and
//! `mul` are the group operation, `sub` and `div` combine with the inverse,
//! and `mul_scalar` and `pow_scalar` both exponentiate. Only Zr distinguishes
//! them, as a field.
//!
//! `invert` and `div` treat the identity of every group like the zero of Zr
//! and fail with [`Error::NotInvertible`]; `neg` and `sub` accept it.

use crate::{
    CurvePoint, FieldElement, Group, PairingBackend, TargetGroup,
    errors::{Error, Mismatch},
};

use super::{Element, Value};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn inverts_rhs(self) -> bool {
        matches!(self, Op::Sub | Op::Div)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Scaling {
    Mul,
    Pow,
}

impl<B: PairingBackend> Value<B> {
    pub(super) fn is_identity(&self) -> bool {
        match self {
            Value::G1(p) => p.is_identity(),
            Value::G2(q) => q.is_identity(),
            Value::Gt(t) => t.is_identity(),
            Value::Zr(s) => s.is_zero(),
        }
    }

    fn combine(&self, other: &Self, op: Op) -> Result<Self, Error> {
        if op == Op::Div && other.is_identity() {
            return Err(Error::NotInvertible);
        }
        let inv = op.inverts_rhs();
        Ok(match (self, other) {
            (Value::G1(a), Value::G1(b)) => Value::G1(if inv { a.sub(b) } else { a.add(b) }),
            (Value::G2(a), Value::G2(b)) => Value::G2(if inv { a.sub(b) } else { a.add(b) }),
            (Value::Gt(a), Value::Gt(b)) => Value::Gt(if inv {
                a.combine(&b.invert())
            } else {
                a.combine(b)
            }),
            (Value::Zr(a), Value::Zr(b)) => Value::Zr(match op {
                Op::Add => *a + *b,
                Op::Sub => *a - *b,
                Op::Mul => *a * *b,
                Op::Div => *a * b.invert().ok_or(Error::NotInvertible)?,
            }),
            (a, b) => return Err(Error::group_mismatch(a.group(), b.group())),
        })
    }

    fn inverse(&self) -> Result<Self, Error> {
        if self.is_identity() {
            return Err(Error::NotInvertible);
        }
        Ok(match self {
            Value::G1(p) => Value::G1(p.negate()),
            Value::G2(q) => Value::G2(q.negate()),
            Value::Gt(t) => Value::Gt(t.invert()),
            Value::Zr(s) => Value::Zr(s.invert().ok_or(Error::NotInvertible)?),
        })
    }

    fn negate(&self) -> Self {
        match self {
            Value::Zr(s) => Value::Zr(-*s),
            Value::G1(p) => Value::G1(p.negate()),
            Value::G2(q) => Value::G2(q.negate()),
            Value::Gt(t) => Value::Gt(t.invert()),
        }
    }

    fn scale(&self, k: &B::Scalar, how: Scaling) -> Self {
        match self {
            Value::G1(p) => Value::G1(p.mul_scalar(k)),
            Value::G2(q) => Value::G2(q.mul_scalar(k)),
            Value::Gt(t) => Value::Gt(t.mul_scalar(k)),
            Value::Zr(s) => Value::Zr(match how {
                Scaling::Mul => *s * *k,
                Scaling::Pow => s.pow(&k.to_limbs()),
            }),
        }
    }
}

impl<B: PairingBackend> Element<B> {
    /// `self = a + b`.
    pub fn add(&mut self, a: &Self, b: &Self) -> Result<(), Error> {
        self.binary(a, b, Op::Add)
    }

    /// `self = a - b`.
    pub fn sub(&mut self, a: &Self, b: &Self) -> Result<(), Error> {
        self.binary(a, b, Op::Sub)
    }

    /// `self = a * b`. Same as [`add`](Self::add) outside Zr.
    pub fn mul(&mut self, a: &Self, b: &Self) -> Result<(), Error> {
        self.binary(a, b, Op::Mul)
    }

    /// `self = a / b`.
    ///
    /// Fails with [`Error::NotInvertible`] if `b` is zero or the identity.
    pub fn div(&mut self, a: &Self, b: &Self) -> Result<(), Error> {
        self.binary(a, b, Op::Div)
    }

    /// `self = a * n` for a machine integer `n`.
    pub fn mul_integer(&mut self, a: &Self, n: i64) -> Result<(), Error> {
        self.ensure_compatible(a)?;
        let k = <B::Scalar as FieldElement>::from_i64(n);
        self.value = a.value.scale(&k, Scaling::Mul);
        Ok(())
    }

    /// `self = a * z` where `z` is a Zr element of the same context.
    pub fn mul_scalar(&mut self, a: &Self, z: &Self) -> Result<(), Error> {
        self.ensure_compatible(a)?;
        let k = *self.scalar_operand(z)?;
        self.value = a.value.scale(&k, Scaling::Mul);
        Ok(())
    }

    /// `self = a ^ n` where `n` is a Zr element of the same context.
    ///
    /// For G1, G2 and GT this is the same as [`mul_scalar`](Self::mul_scalar).
    pub fn pow_scalar(&mut self, a: &Self, n: &Self) -> Result<(), Error> {
        self.ensure_compatible(a)?;
        let k = *self.scalar_operand(n)?;
        self.value = a.value.scale(&k, Scaling::Pow);
        Ok(())
    }

    /// `self = a⁻¹`: the field inverse in Zr, the group inverse elsewhere.
    ///
    /// Fails with [`Error::NotInvertible`] if `a` is zero or the identity.
    pub fn invert(&mut self, a: &Self) -> Result<(), Error> {
        self.ensure_compatible(a)?;
        self.value = a.value.inverse()?;
        Ok(())
    }

    /// `self = -a`. Outside Zr this is the group inverse.
    pub fn neg(&mut self, a: &Self) -> Result<(), Error> {
        self.ensure_compatible(a)?;
        self.value = a.value.negate();
        Ok(())
    }

    /// `self = a * a`.
    pub fn square(&mut self, a: &Self) -> Result<(), Error> {
        self.binary(a, a, Op::Mul)
    }

    /// `self = a + a`.
    pub fn double(&mut self, a: &Self) -> Result<(), Error> {
        self.binary(a, a, Op::Add)
    }

    /// `self += rhs`.
    pub fn add_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        self.binary_assign(rhs, Op::Add)
    }

    /// `self -= rhs`.
    pub fn sub_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        self.binary_assign(rhs, Op::Sub)
    }

    /// `self *= rhs`.
    pub fn mul_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        self.binary_assign(rhs, Op::Mul)
    }

    /// `self /= rhs`. On failure `self` is left unchanged.
    pub fn div_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        self.binary_assign(rhs, Op::Div)
    }

    /// `self = self ^ n`.
    pub fn pow_scalar_assign(&mut self, n: &Self) -> Result<(), Error> {
        let k = *self.scalar_operand(n)?;
        self.value = self.value.scale(&k, Scaling::Pow);
        Ok(())
    }

    /// `self = self⁻¹`. On failure `self` is left unchanged.
    pub fn invert_assign(&mut self) -> Result<(), Error> {
        self.value = self.value.inverse()?;
        Ok(())
    }

    fn binary(&mut self, a: &Self, b: &Self, op: Op) -> Result<(), Error> {
        self.ensure_compatible(a)?;
        self.ensure_compatible(b)?;
        self.value = a.value.combine(&b.value, op)?;
        Ok(())
    }

    fn binary_assign(&mut self, rhs: &Self, op: Op) -> Result<(), Error> {
        self.ensure_compatible(rhs)?;
        self.value = self.value.combine(&rhs.value, op)?;
        Ok(())
    }

    fn scalar_operand<'a>(&self, z: &'a Self) -> Result<&'a B::Scalar, Error> {
        if !self.ctx.same_as(&z.ctx) {
            return Err(Error::GroupMismatch(Mismatch::Context));
        }
        match &z.value {
            Value::Zr(k) => Ok(k),
            other => Err(Error::group_mismatch(Group::Zr, other.group())),
        }
    }
}
