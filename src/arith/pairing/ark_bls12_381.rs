use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;

use crate::{BackendError, CurveId, Fr, G1, G2, Gt, PairingBackend};

#[derive(Debug)]
pub struct PairingEngine;

impl PairingBackend for PairingEngine {
    const NAME: &'static str = "arkworks";
    const CURVE: CurveId = CurveId::Bls12_381;

    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        Gt(Bls12_381::pairing(g1.0, g2.0))
    }

    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError> {
        if g1.len() != g2.len() {
            return Err(BackendError::Math("pairing length mismatch"));
        }
        Ok(Gt(Bls12_381::multi_pairing(
            g1.iter().map(|p| p.0),
            g2.iter().map(|q| q.0),
        )))
    }
}
