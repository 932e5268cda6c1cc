//! 测试数据生成模块
//!
//! 提供各种测试图的生成函数

use graphalgo::Graph;

/// 七个顶点的无向连通图，最小生成树总权重为 12
pub fn seven_vertex_graph() -> Graph<i32> {
    Graph::undirected(
        1..=7,
        [
            (1, 2, 4.0),
            (1, 3, 1.0),
            (2, 3, 3.0),
            (2, 4, 2.0),
            (3, 5, 5.0),
            (4, 5, 1.0),
            (4, 6, 6.0),
            (5, 6, 2.0),
            (5, 7, 7.0),
            (6, 7, 3.0),
        ],
    )
    .expect("有效的测试图")
}

/// 在七顶点图基础上增加一个孤立顶点
pub fn seven_vertex_graph_with_isolated() -> Graph<i32> {
    let base = seven_vertex_graph();
    let edges: Vec<(i32, i32, f64)> = base
        .edges()
        .iter()
        .map(|e| (e.source, e.destination, e.weight))
        .collect();
    Graph::undirected(1..=8, edges).expect("有效的测试图")
}

/// A 到 E 的有向图，从 A 出发的最短距离为 {A:0, B:1, C:3, D:4, E:7}
pub fn a_to_e_graph() -> Graph<char> {
    Graph::directed(
        ['A', 'B', 'C', 'D', 'E'],
        [
            ('A', 'B', 1.0),
            ('A', 'C', 4.0),
            ('B', 'C', 2.0),
            ('B', 'D', 5.0),
            ('C', 'D', 1.0),
            ('D', 'E', 3.0),
            ('C', 'E', 6.0),
        ],
    )
    .expect("有效的测试图")
}

/// A 到 E 图的期望距离
pub fn a_to_e_expected() -> Vec<(char, f64)> {
    vec![('A', 0.0), ('B', 1.0), ('C', 3.0), ('D', 4.0), ('E', 7.0)]
}

/// 含可达负权环 B -> C -> D -> B 的有向图
pub fn negative_cycle_graph() -> Graph<char> {
    Graph::directed(
        ['A', 'B', 'C', 'D'],
        [
            ('A', 'B', 1.0),
            ('B', 'C', 1.0),
            ('C', 'D', -3.0),
            ('D', 'B', 1.0),
        ],
    )
    .expect("有效的测试图")
}

/// 由种子边构造的连通无向图：先连一条链保证连通，再追加额外边
pub fn connected_graph(n: u32, extra: &[(u32, u32, u8)], chain_weights: &[u8]) -> Graph<u32> {
    let mut edges = Vec::new();
    for v in 1..n {
        let weight = chain_weights.get(v as usize - 1).copied().unwrap_or(1);
        edges.push((v - 1, v, f64::from(weight)));
    }
    for &(a, b, w) in extra {
        edges.push((a % n, b % n, f64::from(w)));
    }
    Graph::undirected(0..n, edges).expect("有效的测试图")
}
