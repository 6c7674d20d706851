use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use pairing_arith::{Element, Group, PairingContext, PairingParameters};

fn random(ctx: &PairingContext, group: Group, rng: &mut ChaCha20Rng) -> Element {
    let mut e = ctx.element(group);
    e.set_random(rng);
    e
}

/// Compares `n` separate pairings multiplied together against one product
/// pairing over the same `n` terms.
pub fn bench_pairing(c: &mut Criterion) {
    let ctx = PairingContext::new(PairingParameters::default()).expect("default parameters");
    let mut rng = ChaCha20Rng::seed_from_u64(0xdead_beef);

    let mut group = c.benchmark_group("pairing");
    for n in [1usize, 4, 16] {
        let left: Vec<_> = (0..n).map(|_| random(&ctx, Group::G1, &mut rng)).collect();
        let right: Vec<_> = (0..n).map(|_| random(&ctx, Group::G2, &mut rng)).collect();

        group.bench_with_input(BenchmarkId::new("separate", n), &n, |b, _| {
            b.iter(|| {
                let mut acc = ctx.gt();
                for (p, q) in left.iter().zip(&right) {
                    acc.mul_assign(&ctx.pair(black_box(p), black_box(q)).unwrap())
                        .unwrap();
                }
                black_box(acc);
            });
        });

        group.bench_with_input(BenchmarkId::new("product", n), &n, |b, _| {
            b.iter(|| {
                let res = ctx
                    .product_pairing(black_box(&left), black_box(&right))
                    .unwrap();
                black_box(res);
            });
        });
    }
    group.finish();
}

pub fn bench_hashing(c: &mut Criterion) {
    let ctx = PairingContext::new(PairingParameters::default()).expect("default parameters");
    for group in Group::ALL {
        c.bench_function(&format!("hash_to/{group}"), |b| {
            let mut e = ctx.element(group);
            b.iter(|| e.set_from_hash(black_box(b"alice@example.com")).unwrap());
        });
    }
}

criterion_group!(benches, bench_pairing, bench_hashing);
criterion_main!(benches);
