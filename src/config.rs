//! Pairing parameter types.
//!
//! A [`PairingParameters`] value is the raw description a
//! [`PairingContext`](crate::PairingContext) is built from: which curve the
//! context speaks for and the hash domain used to derive the domain
//! separation tags of hash-to-element.
//!
//! Parameters can be built in code, deserialized with serde, or parsed from a
//! line-oriented text description:
//!
//! ```rust
//! use pairing_arith::{CurveId, PairingParameters};
//!
//! let params: PairingParameters = "curve bls12-381\nhash_domain MY-APP-V1"
//!     .parse()
//!     .expect("valid description");
//! assert_eq!(params.curve, CurveId::Bls12_381);
//! assert_eq!(params.hash_domain, "MY-APP-V1");
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Group, errors::Error};

/// Domain used when the caller does not configure one.
pub const DEFAULT_HASH_DOMAIN: &str = "PAIRING-ARITH-V01";

/// Longest domain separation tag accepted by RFC 9380 `expand_message_xmd`.
const MAX_DST_LEN: usize = 255;

/// Supported pairing-friendly elliptic curves.
///
/// - **BLS12-381**: A 381-bit curve providing ~128 bits of security. Served by
///   both the blstrs and the Arkworks backend.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CurveId {
    /// BLS12-381 curve (~128-bit security)
    #[serde(rename = "bls12-381")]
    Bls12_381,
}

impl CurveId {
    /// Canonical lower-case name used in text descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            CurveId::Bls12_381 => "bls12-381",
        }
    }

    /// Curve tag embedded in domain separation tags.
    fn dst_tag(&self) -> &'static str {
        match self {
            CurveId::Bls12_381 => "BLS12381",
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "bls12-381" | "bls12381" => Ok(CurveId::Bls12_381),
            other => Err(Error::InvalidParameters(format!("unknown curve `{other}`"))),
        }
    }
}

fn default_hash_domain() -> String {
    DEFAULT_HASH_DOMAIN.to_owned()
}

/// Description of a pairing context.
///
/// # Fields
///
/// - `curve`: The curve the context is defined over.
/// - `hash_domain`: Application domain mixed into every hash-to-element
///   domain separation tag. Printable ASCII without whitespace.
///
/// # Example
///
/// ```rust
/// use pairing_arith::{CurveId, PairingParameters};
///
/// let params = PairingParameters::new(CurveId::Bls12_381).with_hash_domain("IBE-V1");
/// params.validate().expect("valid parameters");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PairingParameters {
    /// The pairing-friendly curve
    pub curve: CurveId,
    /// Hash-to-element domain
    #[serde(default = "default_hash_domain")]
    pub hash_domain: String,
}

impl PairingParameters {
    /// Parameters for `curve` with the default hash domain.
    pub fn new(curve: CurveId) -> Self {
        Self {
            curve,
            hash_domain: default_hash_domain(),
        }
    }

    /// Replaces the hash domain.
    pub fn with_hash_domain(mut self, domain: impl Into<String>) -> Self {
        self.hash_domain = domain.into();
        self
    }

    /// Validates the parameters.
    ///
    /// This checks that:
    /// - The hash domain is non-empty printable ASCII without whitespace
    /// - Every derived domain separation tag fits in 255 bytes
    pub fn validate(&self) -> Result<(), Error> {
        if self.hash_domain.is_empty() {
            return Err(Error::InvalidParameters("hash domain is empty".into()));
        }
        if !self.hash_domain.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(Error::InvalidParameters(
                "hash domain must be printable ASCII without whitespace".into(),
            ));
        }
        for group in Group::ALL {
            let dst = self.dst(group);
            if dst.len() > MAX_DST_LEN {
                return Err(Error::InvalidParameters(format!(
                    "{group} domain separation tag is {} bytes, limit is {MAX_DST_LEN}",
                    dst.len()
                )));
            }
        }
        Ok(())
    }

    /// Domain separation tag used when hashing into `group`.
    ///
    /// The format is part of the wire contract: changing it changes every
    /// hash-to-element output.
    pub fn dst(&self, group: Group) -> String {
        let suite = match group {
            Group::G1 => "G1_XMD:SHA-256_SSWU_RO_",
            Group::G2 => "G2_XMD:SHA-256_SSWU_RO_",
            Group::Gt => "GT_BLAKE3_",
            Group::Zr => "Zr_BLAKE3_",
        };
        format!("{}_{}{}", self.hash_domain, self.curve.dst_tag(), suite)
    }
}

impl Default for PairingParameters {
    fn default() -> Self {
        Self::new(CurveId::Bls12_381)
    }
}

impl FromStr for PairingParameters {
    type Err = Error;

    /// Parses a line-oriented `key value` description.
    ///
    /// Recognised keys are `curve` (alias `type`) and `hash_domain`. Blank
    /// lines and lines starting with `#` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut curve = None;
        let mut hash_domain = None;

        for (lineno, raw) in s.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once(char::is_whitespace)
                .map(|(k, v)| (k, v.trim()))
                .ok_or_else(|| {
                    Error::InvalidParameters(format!("line {}: missing value", lineno + 1))
                })?;
            match key {
                "curve" | "type" => {
                    if curve.replace(value.parse::<CurveId>()?).is_some() {
                        return Err(Error::InvalidParameters(format!(
                            "line {}: duplicate curve",
                            lineno + 1
                        )));
                    }
                }
                "hash_domain" => {
                    if hash_domain.replace(value.to_owned()).is_some() {
                        return Err(Error::InvalidParameters(format!(
                            "line {}: duplicate hash_domain",
                            lineno + 1
                        )));
                    }
                }
                other => {
                    return Err(Error::InvalidParameters(format!(
                        "line {}: unknown key `{other}`",
                        lineno + 1
                    )));
                }
            }
        }

        let curve =
            curve.ok_or_else(|| Error::InvalidParameters("missing `curve` entry".into()))?;
        let params = Self {
            curve,
            hash_domain: hash_domain.unwrap_or_else(default_hash_domain),
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_description() {
        let params: PairingParameters = "# app parameters\n\ntype BLS12_381\nhash_domain X-V2\n"
            .parse()
            .unwrap();
        assert_eq!(params.curve, CurveId::Bls12_381);
        assert_eq!(params.hash_domain, "X-V2");
    }

    #[test]
    fn default_domain_when_absent() {
        let params: PairingParameters = "curve bls12-381".parse().unwrap();
        assert_eq!(params.hash_domain, DEFAULT_HASH_DOMAIN);
    }

    #[test]
    fn rejects_malformed_descriptions() {
        for text in [
            "",
            "curve",
            "curve bn254",
            "curve bls12-381\ncurve bls12-381",
            "curve bls12-381\nprime 7",
            "curve bls12-381\nhash_domain two words",
        ] {
            assert!(
                matches!(
                    text.parse::<PairingParameters>(),
                    Err(Error::InvalidParameters(_))
                ),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn rejects_oversized_domain() {
        let params = PairingParameters::default().with_hash_domain("D".repeat(240));
        assert!(matches!(params.validate(), Err(Error::InvalidParameters(_))));
    }

    #[test]
    fn dst_format_is_stable() {
        let params = PairingParameters::default().with_hash_domain("APP");
        assert_eq!(params.dst(Group::G1), "APP_BLS12381G1_XMD:SHA-256_SSWU_RO_");
        assert_eq!(params.dst(Group::Zr), "APP_BLS12381Zr_BLAKE3_");
    }

    #[test]
    fn serde_roundtrip_uses_default_domain() {
        let params: PairingParameters = serde_json::from_str(r#"{"curve":"bls12-381"}"#).unwrap();
        assert_eq!(params, PairingParameters::default());
        let json = serde_json::to_string(&params).unwrap();
        let back: PairingParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
