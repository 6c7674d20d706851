//! Serde support for elements.
//!
//! An element serializes as its group and canonical encoding. Decoding needs
//! the context the element belongs to, so there is no `Deserialize` impl;
//! deserialization goes through [`ElementSeed`], a [`DeserializeSeed`] bound
//! to a context.
//!
//! # Example
//!
//! ```rust
//! use pairing_arith::{ElementSeed, Group, PairingContext, PairingParameters};
//! use serde::de::DeserializeSeed;
//!
//! let ctx = PairingContext::new(PairingParameters::default())?;
//! let mut sig = ctx.g1();
//! sig.set_from_hash("message")?;
//!
//! let json = serde_json::to_string(&sig).unwrap();
//! let mut de = serde_json::Deserializer::from_str(&json);
//! let back = ElementSeed::expecting(&ctx, Group::G1).deserialize(&mut de).unwrap();
//! assert_eq!(back, sig);
//! # Ok::<(), pairing_arith::Error>(())
//! ```

use serde::de::{self, DeserializeSeed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Element, Group, PairingBackend, PairingContext, errors::Error};

impl<B: PairingBackend> Serialize for Element<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Element", 2)?;
        state.serialize_field("group", &self.group())?;
        state.serialize_field("bytes", &self.to_bytes())?;
        state.end()
    }
}

/// Deserializes an [`Element`] into a given context.
pub struct ElementSeed<'a, B: PairingBackend> {
    ctx: &'a PairingContext<B>,
    group: Option<Group>,
}

impl<'a, B: PairingBackend> ElementSeed<'a, B> {
    /// Accepts an element of any group.
    pub fn new(ctx: &'a PairingContext<B>) -> Self {
        Self { ctx, group: None }
    }

    /// Accepts only elements of `group`.
    pub fn expecting(ctx: &'a PairingContext<B>, group: Group) -> Self {
        Self {
            ctx,
            group: Some(group),
        }
    }
}

impl<'de, B: PairingBackend> DeserializeSeed<'de> for ElementSeed<'_, B> {
    type Value = Element<B>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ElementHelper {
            group: Group,
            bytes: Vec<u8>,
        }

        let helper = ElementHelper::deserialize(deserializer)?;
        if let Some(expected) = self.group {
            if helper.group != expected {
                return Err(de::Error::custom(Error::group_mismatch(
                    expected,
                    helper.group,
                )));
            }
        }
        Element::from_bytes(self.ctx, helper.group, &helper.bytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::PairingParameters;

    fn ctx() -> PairingContext {
        PairingContext::new(PairingParameters::default()).unwrap()
    }

    fn from_json(seed: ElementSeed<'_, crate::PairingEngine>, json: &str) -> serde_json::Result<Element> {
        let mut de = serde_json::Deserializer::from_str(json);
        seed.deserialize(&mut de)
    }

    #[test]
    fn elements_round_trip_through_json() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(41);
        for group in Group::ALL {
            let mut e = ctx.element(group);
            e.set_random(&mut rng);
            let json = serde_json::to_string(&e).unwrap();
            let back = from_json(ElementSeed::new(&ctx), &json).unwrap();
            assert_eq!(back, e, "{group}");
            assert!(back.context().same_as(&ctx));
        }
    }

    #[test]
    fn json_names_the_group() {
        let ctx = ctx();
        let json = serde_json::to_value(ctx.gt()).unwrap();
        assert_eq!(json["group"], "GT");
        assert_eq!(
            json["bytes"].as_array().map(Vec::len),
            Some(ctx.group_byte_length(Group::Gt))
        );
    }

    #[test]
    fn unexpected_group_is_rejected() {
        let ctx = ctx();
        let json = serde_json::to_string(&ctx.g2()).unwrap();
        let err = from_json(ElementSeed::expecting(&ctx, Group::G1), &json).unwrap_err();
        assert!(err.to_string().contains("group mismatch"), "{err}");
    }

    #[test]
    fn bad_bytes_are_rejected() {
        let ctx = ctx();
        let err = from_json(ElementSeed::new(&ctx), r#"{"group":"Zr","bytes":[1,2,3]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("decode error"), "{err}");
    }
}
