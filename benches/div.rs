use criterion::*;
use decint::{BigInt, Sign, CHUNK_BASE};
use mimalloc::MiMalloc;
use rand::Rng;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn value(len: usize, seed: u64, sign: Sign) -> BigInt {
    let mut rng: Pcg64 = Seeder::from(seed).make_rng();
    let chunks = (0..len).map(|_| rng.gen_range(0..CHUNK_BASE)).collect();

    BigInt::from_chunks(sign, chunks).unwrap()
}

fn bench_div(c: &mut Criterion) {
    let shapes = vec![(8, 2), (32, 4), (64, 32), (128, 16), (256, 128)];

    for (a_len, b_len) in shapes.iter().cloned() {
        let a = value(a_len, 5, Sign::Negative);
        let b = value(b_len, 6, Sign::Positive);

        c.bench_function(&format!("div_floor {a_len} by {b_len} chunks"), |bench| {
            bench.iter(|| black_box(&a).div_floor(black_box(&b)).unwrap())
        });
        c.bench_function(&format!("div_rem_floor {a_len} by {b_len} chunks"), |bench| {
            bench.iter(|| black_box(&a).div_rem_floor(black_box(&b)).unwrap())
        });
    }
}

fn bench_parse_render(c: &mut Criterion) {
    let text = value(512, 7, Sign::Negative).to_string();

    c.bench_function("parse 4608 digits", |bench| {
        bench.iter(|| black_box(&text).parse::<BigInt>().unwrap())
    });

    let v: BigInt = text.parse().unwrap();
    c.bench_function("render 4608 digits", |bench| {
        bench.iter(|| black_box(&v).to_string())
    });
}

pub fn div_benchmark(c: &mut Criterion) {
    bench_div(c);
    bench_parse_render(c);
}

criterion_group!(benches, div_benchmark);
criterion_main!(benches);
