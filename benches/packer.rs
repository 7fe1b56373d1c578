use criterion::*;
use rand::prelude::*;
use subset_packer::*;

fn build_input(num_lines: usize, num_items: usize) -> String {
    let mut rng: StdRng = SeedableRng::seed_from_u64(1);

    (0..num_lines)
        .map(|_| {
            let items: Vec<String> = (1..=num_items)
                .map(|id| {
                    format!(
                        "({},{:.2},€{})",
                        id,
                        rng.gen_range(1.0..100.0),
                        rng.gen_range(1..=100)
                    )
                })
                .collect();
            format!("{} : {}", rng.gen_range(10..=100), items.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn benchmark_pack(c: &mut Criterion) {
    let input = build_input(4, 15);

    c.bench_function("pack random packages", |b| {
        b.iter(|| {
            let _ = Packer::new().pack(black_box(&input), |_| {});
        })
    });
}

criterion_group!(benches, benchmark_pack);
criterion_main!(benches);
