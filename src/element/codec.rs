//! Byte encodings of elements.
//!
//! Canonical encodings have exactly [`PairingContext::group_byte_length`]
//! bytes: uncompressed affine points for G1 and G2, the backend's canonical
//! form for GT and 32 big-endian bytes for Zr. G1 and G2 additionally have a
//! compressed form. Decoding rejects wrong lengths and anything that is not a
//! member of the group, and never modifies the receiver on failure.

use tracing::trace;

use crate::{
    BackendError, CurvePoint, FieldElement, Group, PairingBackend, PairingContext, TargetGroup,
    errors::Error,
};

use super::{Element, Value};

impl<B: PairingBackend> Element<B> {
    /// Canonical encoding, `group_byte_length(group)` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match &self.value {
            Value::G1(p) => p.to_uncompressed(),
            Value::G2(q) => q.to_uncompressed(),
            Value::Gt(t) => t.to_repr(),
            Value::Zr(s) => s.to_repr(),
        }
    }

    /// Length of [`to_bytes`](Self::to_bytes).
    pub fn byte_length(&self) -> usize {
        self.ctx.group_byte_length(self.group())
    }

    /// Length of [`to_compressed_bytes`](Self::to_compressed_bytes).
    pub fn compressed_byte_length(&self) -> Result<usize, Error> {
        self.ctx.compressed_byte_length(self.group())
    }

    /// Compressed encoding. Only G1 and G2 have one.
    pub fn to_compressed_bytes(&self) -> Result<Vec<u8>, Error> {
        match &self.value {
            Value::G1(p) => Ok(p.to_compressed()),
            Value::G2(q) => Ok(q.to_compressed()),
            other => Err(Error::unsupported("compressed encoding", other.group())),
        }
    }

    /// Replaces the value with the decoding of `data`.
    pub fn set_from_bytes(&mut self, data: &[u8]) -> Result<(), Error> {
        let group = self.group();
        let expected = self.byte_length();
        check_length(group, expected, data)?;
        let decoded = match group {
            Group::G1 => <B::G1 as CurvePoint<B::Scalar>>::from_uncompressed(data).map(Value::G1),
            Group::G2 => <B::G2 as CurvePoint<B::Scalar>>::from_uncompressed(data).map(Value::G2),
            Group::Gt => <B::Target as TargetGroup>::from_repr(data).map(Value::Gt),
            Group::Zr => <B::Scalar as FieldElement>::from_repr(data).map(Value::Zr),
        };
        self.value = decoded.map_err(|err| rejected(group, err))?;
        Ok(())
    }

    /// Replaces the value with the decoding of compressed `data`.
    pub fn set_from_compressed_bytes(&mut self, data: &[u8]) -> Result<(), Error> {
        let group = self.group();
        let expected = self.compressed_byte_length()?;
        check_length(group, expected, data)?;
        let decoded = match group {
            Group::G1 => <B::G1 as CurvePoint<B::Scalar>>::from_compressed(data).map(Value::G1),
            Group::G2 => <B::G2 as CurvePoint<B::Scalar>>::from_compressed(data).map(Value::G2),
            Group::Gt | Group::Zr => {
                return Err(Error::unsupported("compressed encoding", group));
            }
        };
        self.value = decoded.map_err(|err| rejected(group, err))?;
        Ok(())
    }

    /// Decodes a new element of `group` from its canonical encoding.
    pub fn from_bytes(ctx: &PairingContext<B>, group: Group, data: &[u8]) -> Result<Self, Error> {
        let mut e = Self::new(ctx, group);
        e.set_from_bytes(data)?;
        Ok(e)
    }

    /// Decodes a new element of `group` from its compressed encoding.
    pub fn from_compressed_bytes(
        ctx: &PairingContext<B>,
        group: Group,
        data: &[u8],
    ) -> Result<Self, Error> {
        let mut e = Self::new(ctx, group);
        e.set_from_compressed_bytes(data)?;
        Ok(e)
    }
}

fn check_length(group: Group, expected: usize, data: &[u8]) -> Result<(), Error> {
    if data.len() != expected {
        trace!(%group, expected, got = data.len(), "rejected encoding length");
        return Err(Error::Decode(format!(
            "{group} encoding must be {expected} bytes, got {}",
            data.len()
        )));
    }
    Ok(())
}

fn rejected(group: Group, err: BackendError) -> Error {
    trace!(%group, %err, "rejected encoding");
    Error::Decode(format!("invalid {group} encoding: {err}"))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::PairingParameters;

    fn ctx() -> PairingContext {
        PairingContext::new(PairingParameters::default()).unwrap()
    }

    #[test]
    fn canonical_round_trip_in_every_group() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(21);
        for group in Group::ALL {
            let mut a = ctx.element(group);
            a.set_random(&mut rng);
            let bytes = a.to_bytes();
            assert_eq!(bytes.len(), ctx.group_byte_length(group), "{group}");
            assert_eq!(bytes, a.to_bytes(), "{group} encoding not deterministic");

            let b = Element::from_bytes(&ctx, group, &bytes).unwrap();
            assert_eq!(a, b, "{group}");
        }
    }

    #[test]
    fn compressed_round_trip_in_source_groups() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(22);
        for group in [Group::G1, Group::G2] {
            let mut a = ctx.element(group);
            a.set_random(&mut rng);
            let bytes = a.to_compressed_bytes().unwrap();
            assert_eq!(bytes.len(), a.compressed_byte_length().unwrap());
            assert!(bytes.len() < a.byte_length());

            let mut b = ctx.element(group);
            b.set_from_compressed_bytes(&bytes).unwrap();
            assert_eq!(a, b, "{group}");
        }
    }

    #[test]
    fn identity_round_trips() {
        let ctx = ctx();
        for group in Group::ALL {
            let zero = ctx.element(group);
            let back = Element::from_bytes(&ctx, group, &zero.to_bytes()).unwrap();
            assert!(back.is_zero(), "{group}");
        }
    }

    #[test]
    fn compression_is_unsupported_for_gt_and_zr() {
        let ctx = ctx();
        for group in [Group::Gt, Group::Zr] {
            let e = ctx.element(group);
            assert!(matches!(
                e.to_compressed_bytes(),
                Err(Error::UnsupportedOperation { .. })
            ));
            assert!(matches!(
                Element::from_compressed_bytes(&ctx, group, &[0u8; 48]),
                Err(Error::UnsupportedOperation { .. })
            ));
        }
    }

    #[test]
    fn truncated_gt_is_a_decode_error() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(23);
        let mut t = ctx.gt();
        t.set_random(&mut rng);
        let before = t.clone();
        let bytes = t.to_bytes();

        let err = t.set_from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(t, before, "receiver must be unchanged");
    }

    #[test]
    fn invalid_members_are_rejected() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(24);

        // r itself is not a canonical scalar.
        let order = ctx.group_order(Group::Zr).to_vec();
        assert!(matches!(
            Element::from_bytes(&ctx, Group::Zr, &order),
            Err(Error::Decode(_))
        ));

        let mut p = ctx.g1();
        p.set_random(&mut rng);
        let mut bytes = p.to_bytes();
        let last = bytes.len() - 1;
        bytes[last] ^= 1;
        assert!(matches!(
            Element::from_bytes(&ctx, Group::G1, &bytes),
            Err(Error::Decode(_))
        ));

        // Compressed flag set, x above the base field modulus.
        let mut bad = [0xffu8; 96];
        bad[0] = 0x9f;
        assert!(matches!(
            Element::from_compressed_bytes(&ctx, Group::G2, &bad),
            Err(Error::Decode(_))
        ));
    }
}
