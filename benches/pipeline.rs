use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flatopt::{flat, graph, knapsack};

fn knapsack_input(n: usize) -> String {
    let mut input = format!("{} {}\n", n, n * 25);
    for i in 0..n {
        input.push_str(&format!("{} {}\n", (i * 37) % 101 + 1, (i * 53) % 97 + 1));
    }
    input
}

// a ring plus chords, with every edge also present reversed
fn coloring_input(n: usize) -> String {
    let mut edges = vec![];
    for i in 0..n {
        edges.push((i, (i + 1) % n));
        edges.push(((i + 1) % n, i));
        if i % 3 == 0 {
            edges.push((i, (i + n / 2) % n));
        }
    }
    edges.retain(|(a, b)| a != b);
    let mut input = format!("{} {}\n", n, edges.len());
    for (a, b) in edges {
        input.push_str(&format!("{} {}\n", a, b));
    }
    input
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for n in [100, 1_000, 10_000] {
        let input = knapsack_input(n);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("knapsack", n), &input, |b, input| {
            b.iter(|| flat::parse_knapsack(black_box(input)).unwrap())
        });

        let input = coloring_input(n);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("coloring", n), &input, |b, input| {
            b.iter(|| flat::parse_coloring(black_box(input)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("building");

    for n in [100, 1_000, 10_000] {
        let instance = flat::parse_knapsack(&knapsack_input(n)).unwrap();
        group.bench_with_input(BenchmarkId::new("knapsack_model", n), &instance, |b, instance| {
            b.iter(|| knapsack::build_model(black_box(instance)))
        });

        let instance = flat::parse_coloring(&coloring_input(n)).unwrap();
        group.bench_with_input(BenchmarkId::new("graph", n), &instance, |b, instance| {
            b.iter(|| graph::build_graph(black_box(instance)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parsing, benchmark_building);
criterion_main!(benches);
