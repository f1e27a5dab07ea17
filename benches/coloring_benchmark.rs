use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use satcolor::Graph;

/// Four-neighbor grid, listed row-major with symmetric links.
fn grid_entries(side: usize) -> Vec<(usize, Vec<usize>)> {
    (0..side * side)
        .map(|v| {
            let (r, c) = (v / side, v % side);
            let mut nbrs = Vec::with_capacity(4);
            if r > 0 {
                nbrs.push(v - side);
            }
            if c > 0 {
                nbrs.push(v - 1);
            }
            if c + 1 < side {
                nbrs.push(v + 1);
            }
            if r + 1 < side {
                nbrs.push(v + side);
            }
            (v, nbrs)
        })
        .collect()
}

/// Deterministic pseudo-random graph with roughly `n * avg_degree / 2` edges.
fn random_entries(n: usize, avg_degree: usize) -> Vec<(usize, Vec<usize>)> {
    let mut adjacency = vec![Vec::new(); n];
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for _ in 0..n * avg_degree / 2 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let u = (state % n as u64) as usize;
        let v = ((state >> 32) % n as u64) as usize;
        if u != v && !adjacency[u].contains(&v) {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
    }
    adjacency.into_iter().enumerate().collect()
}

fn bench_colorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("colorize");

    for side in [32usize, 128] {
        let entries = grid_entries(side);
        group.bench_with_input(BenchmarkId::new("grid", side * side), &entries, |b, entries| {
            b.iter(|| {
                let mut graph = Graph::from_adjacency(entries.clone()).unwrap();
                graph.colorize().unwrap();
                black_box(graph.color_count())
            });
        });
    }

    for n in [1_000usize, 10_000] {
        let entries = random_entries(n, 8);
        group.bench_with_input(BenchmarkId::new("random_all_components", n), &entries, |b, entries| {
            b.iter(|| {
                let mut graph = Graph::from_adjacency(entries.clone()).unwrap();
                graph.colorize_all_components().unwrap();
                black_box(graph.color_count())
            });
        });
    }

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut graph = Graph::from_adjacency(random_entries(10_000, 8)).unwrap();
    graph.colorize_all_components().unwrap();

    c.bench_function("saturation_stats_10k", |b| {
        b.iter(|| black_box(graph.saturation_stats()));
    });
}

criterion_group!(benches, bench_colorize, bench_statistics);
criterion_main!(benches);
