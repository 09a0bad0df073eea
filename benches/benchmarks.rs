//! Criterion benchmarks for dgraph.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dgraph::graph::DirectedGraph;

/// Build a random graph with roughly `edges_per_vertex` out-edges per vertex.
fn make_random_graph(vertex_count: u32, edges_per_vertex: u32) -> DirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = DirectedGraph::new();
    for v in 0..vertex_count {
        graph.add_vertex(v).unwrap();
    }
    for v in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            graph
                .add_weighted_edge(v, target, rng.gen_range(0.1..10.0))
                .unwrap();
        }
    }
    graph
}

fn bench_add_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_edges");
    for &n in &[1_000u32, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| make_random_graph(n, 4));
        });
    }
    group.finish();
}

fn bench_traversals(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 4);
    c.bench_function("dfs_10k", |b| b.iter(|| graph.dfs(&0u32)));
    c.bench_function("bfs_10k", |b| b.iter(|| graph.bfs(&0u32)));
}

fn bench_degree_queries(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 4);
    c.bench_function("in_degree_10k", |b| b.iter(|| graph.in_degree(&42u32)));
    c.bench_function("predecessors_10k", |b| {
        b.iter(|| graph.predecessors(&42u32))
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    let graph = make_random_graph(5_000, 4);
    c.bench_function("remove_vertex_5k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| g.remove_vertex(&17u32),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_add_edges,
    bench_traversals,
    bench_degree_queries,
    bench_remove_vertex
);
criterion_main!(benches);
