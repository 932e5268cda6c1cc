//! 最小生成树与最短路径算法的 Criterion 基准测试
//!
//! 按图规模对比同一引擎内三种算法的耗时

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphalgo::{minimum_spanning_tree, shortest_paths, Graph, MstAlgorithm, ShortestPathAlgorithm};

/// 确定性的测试图：一条保证连通的链，加上每个顶点 `extra` 条由哈希生成的边
fn random_graph(n: u32, extra: u32, directed: bool, seed: u64) -> Graph<u32> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut edges = Vec::with_capacity((n * (extra + 1)) as usize);
    for v in 1..n {
        edges.push((v - 1, v, f64::from(v % 7 + 1)));
    }
    for v in 0..n {
        for k in 0..extra {
            let mut hasher = DefaultHasher::new();
            (seed, v, k).hash(&mut hasher);
            let h = hasher.finish();
            let target = (h % u64::from(n)) as u32;
            let weight = ((h >> 32) % 100) as f64 + 1.0;
            edges.push((v, target, weight));
        }
    }
    Graph::new(directed, 0..n, edges).expect("有效的图")
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("MST");

    for size in [50u32, 200, 1000].iter() {
        let graph = random_graph(*size, 4, false, 42);

        for algorithm in MstAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), size, |b, _| {
                b.iter(|| minimum_spanning_tree(black_box(&graph), algorithm).expect("连通图"));
            });
        }
    }

    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("ShortestPath");

    for size in [50u32, 100, 200].iter() {
        let graph = random_graph(*size, 4, true, 7);

        for algorithm in ShortestPathAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), size, |b, _| {
                b.iter(|| shortest_paths(black_box(&graph), &0, algorithm).expect("有效的起点"));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_mst, bench_shortest_path);
criterion_main!(benches);
