use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;
use tracing_subscriber::fmt;

use pairing_arith::{Element, Error, Group, PairingContext};

const SIGNERS: usize = 8;

struct Signer {
    secret: Element,
    public: Element,
}

fn sign(ctx: &PairingContext, secret: &Element, message: &str) -> Result<Element, Error> {
    let mut h = ctx.g1();
    h.set_from_hash(message)?;
    let mut sig = ctx.g1();
    sig.pow_scalar(&h, secret)?;
    Ok(sig)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_target(false)
        .with_ansi(false)
        .init();

    let ctx = PairingContext::from_description("curve bls12-381\nhash_domain BLS-DEMO-V1")?;
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    let mut g = ctx.g2();
    g.set_generator()?;

    let signers = (0..SIGNERS)
        .map(|_| -> Result<Signer, Error> {
            let mut secret = ctx.zr();
            secret.set_random(&mut rng);
            let mut public = ctx.g2();
            public.pow_scalar(&g, &secret)?;
            Ok(Signer { secret, public })
        })
        .collect::<Result<Vec<_>, _>>()?;
    info!(signers = SIGNERS, "generated key pairs");

    // Single signature: e(sig, g) == e(H(m), pk), checked as e(sig, g) * e(H(m), -pk) == 1.
    let message = "transfer 10 coins to bob";
    let sig = sign(&ctx, &signers[0].secret, message)?;
    let wire = sig.to_compressed_bytes()?;
    info!(bytes = wire.len(), "signature encoded");

    let received = Element::from_compressed_bytes(&ctx, Group::G1, &wire)?;
    let mut h = ctx.g1();
    h.set_from_hash(message)?;
    let mut neg_pk = ctx.g2();
    neg_pk.neg(&signers[0].public)?;
    let check = ctx.product_pairing(&[received, h], &[g.clone(), neg_pk])?;
    info!(valid = check.is_one(), "single signature verified");

    // Batch verification of distinct messages with one product pairing.
    let messages: Vec<String> = (0..SIGNERS).map(|i| format!("message #{i}")).collect();
    let mut aggregate = ctx.g1();
    let mut left = Vec::with_capacity(SIGNERS + 1);
    let mut right = Vec::with_capacity(SIGNERS + 1);
    for (signer, message) in signers.iter().zip(&messages) {
        aggregate.add_assign(&sign(&ctx, &signer.secret, message)?)?;
        let mut h = ctx.g1();
        h.set_from_hash(message)?;
        let mut neg_pk = ctx.g2();
        neg_pk.neg(&signer.public)?;
        left.push(h);
        right.push(neg_pk);
    }
    left.push(aggregate);
    right.push(g);
    let batch = ctx.product_pairing(&left, &right)?;
    info!(valid = batch.is_one(), terms = left.len(), "aggregate signature verified");

    Ok(())
}
