use criterion::{black_box, criterion_group, criterion_main, Criterion};

use password_stretcher::{MangleConfig, Mangler};

fn wordlist() -> Vec<Vec<u8>> {
    [
        "password", "dragon", "monkey", "shadow", "master", "qwerty", "letmein",
        "baseball", "football", "superman", "sunshine", "princess", "trustno1",
    ]
    .iter()
    .map(|w| w.as_bytes().to_vec())
    .collect()
}

fn mangle_benchmark(c: &mut Criterion) {
    c.bench_function("leet + capswap, 100k candidates", |b| {
        b.iter(|| {
            let config = MangleConfig {
                leet: true,
                capswap: true,
                target_size: Some(100_000),
                ..Default::default()
            };
            let mangler = Mangler::new(black_box(wordlist()), config).unwrap();
            let mut total = 0usize;
            for word in mangler {
                total += word.len();
            }
            black_box(total);
        })
    });

    c.bench_function("depth 2 permutations", |b| {
        b.iter(|| {
            let config = MangleConfig {
                perm_depth: 2,
                ..Default::default()
            };
            let mangler = Mangler::new(black_box(wordlist()), config).unwrap();
            black_box(mangler.into_iter().count());
        })
    });
}

criterion_group!(benches, mangle_benchmark);
criterion_main!(benches);
