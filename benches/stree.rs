use stree::config::{Config, Style};
use stree::render::render;
use stree::trie::Trie;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{distr::Alphanumeric, rng, Rng};

fn random_lines(population: usize, size: usize) -> Vec<String> {
    (0..population)
        .map(|_| {
            rng()
                .sample_iter(&Alphanumeric)
                .take(rng().random_range(1..=size))
                .map(char::from)
                .collect()
        })
        .collect()
}

fn trie_ingest(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 1000;

    let mut group = c.benchmark_group("ingest");
    for size in [BASE_SIZE, 4 * BASE_SIZE, 16 * BASE_SIZE, 64 * BASE_SIZE].iter() {
        let lines = random_lines(POPULATION_SIZE, *size);
        group.throughput(Throughput::Elements(POPULATION_SIZE as u64));
        group.bench_with_input(BenchmarkId::new("lines (char)", size), &lines, |b, lines| {
            b.iter(|| lines.iter().collect::<Trie>())
        });
    }
    group.finish();
}

fn trie_render(c: &mut Criterion) {
    static POPULATION_SIZE: usize = 10000;
    static SIZE: usize = 32;

    let trie: Trie = random_lines(POPULATION_SIZE, SIZE).iter().collect();
    let mut group = c.benchmark_group("render");
    for style in [Style::Lines, Style::Parens, Style::Braces, Style::Graph] {
        let config = Config::new().with_style(style);
        group.bench_function(BenchmarkId::new("alphabetical", format!("{style:?}")), |b| {
            b.iter(|| render(&trie, &config))
        });
        let config = config.with_prepend_frequency(true);
        group.bench_function(BenchmarkId::new("by count", format!("{style:?}")), |b| {
            b.iter(|| render(&trie, &config))
        });
    }
    group.finish();
}

criterion_group!(benches, trie_ingest, trie_render);
criterion_main!(benches);
