//! 算法模块
//!
//! 包含最小生成树（Prim、Kruskal、Borůvka）与单源最短路径
//! （Dijkstra、Floyd-Warshall、Bellman-Ford）算法实现。
//! 每个算法都是独立可调用的具名操作，调度层通过 [`MstAlgorithm`] 和
//! [`ShortestPathAlgorithm`] 按名称或菜单编号选择，不需要了解内部实现。

pub mod bellman_ford;
pub mod boruvka;
pub mod cross_check;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;
pub mod result;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{GraphError, GraphResult, VertexId};
use crate::graph::Graph;

// 重新导出常用算法结构体
pub use bellman_ford::BellmanFord;
pub use boruvka::Boruvka;
pub use cross_check::{CrossCheck, MstComparison, ShortestPathComparison};
pub use dijkstra::Dijkstra;
pub use floyd_warshall::FloydWarshall;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use result::{MstResult, ShortestPaths};

/// 最小生成树算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
    Boruvka,
}

impl MstAlgorithm {
    pub const ALL: [MstAlgorithm; 3] = [MstAlgorithm::Prim, MstAlgorithm::Kruskal, MstAlgorithm::Boruvka];

    pub fn name(&self) -> &'static str {
        match self {
            MstAlgorithm::Prim => "prim",
            MstAlgorithm::Kruskal => "kruskal",
            MstAlgorithm::Boruvka => "boruvka",
        }
    }

    pub fn run<V: VertexId>(&self, graph: &Graph<V>) -> GraphResult<MstResult<V>> {
        match self {
            MstAlgorithm::Prim => Prim::minimum_spanning_tree(graph),
            MstAlgorithm::Kruskal => Kruskal::minimum_spanning_tree(graph),
            MstAlgorithm::Boruvka => Boruvka::minimum_spanning_tree(graph),
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 接受算法名称（不区分大小写）或菜单编号 1-3
impl FromStr for MstAlgorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "prim" => Ok(MstAlgorithm::Prim),
            "2" | "kruskal" => Ok(MstAlgorithm::Kruskal),
            "3" | "boruvka" | "borůvka" => Ok(MstAlgorithm::Boruvka),
            _ => Err(GraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// 单源最短路径算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortestPathAlgorithm {
    Dijkstra,
    FloydWarshall,
    BellmanFord,
}

impl ShortestPathAlgorithm {
    pub const ALL: [ShortestPathAlgorithm; 3] = [
        ShortestPathAlgorithm::Dijkstra,
        ShortestPathAlgorithm::FloydWarshall,
        ShortestPathAlgorithm::BellmanFord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShortestPathAlgorithm::Dijkstra => "dijkstra",
            ShortestPathAlgorithm::FloydWarshall => "floyd-warshall",
            ShortestPathAlgorithm::BellmanFord => "bellman-ford",
        }
    }

    pub fn run<V: VertexId>(&self, graph: &Graph<V>, source: &V) -> GraphResult<ShortestPaths<V>> {
        match self {
            ShortestPathAlgorithm::Dijkstra => Dijkstra::shortest_paths(graph, source),
            ShortestPathAlgorithm::FloydWarshall => FloydWarshall::shortest_paths(graph, source),
            ShortestPathAlgorithm::BellmanFord => BellmanFord::shortest_paths(graph, source),
        }
    }
}

impl fmt::Display for ShortestPathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 接受算法名称（不区分大小写，`-`/`_`/空格等价）或菜单编号 1-3
impl FromStr for ShortestPathAlgorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match normalized.as_str() {
            "1" | "dijkstra" => Ok(ShortestPathAlgorithm::Dijkstra),
            "2" | "floydwarshall" => Ok(ShortestPathAlgorithm::FloydWarshall),
            "3" | "bellmanford" => Ok(ShortestPathAlgorithm::BellmanFord),
            _ => Err(GraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// 用指定算法计算最小生成树
pub fn minimum_spanning_tree<V: VertexId>(
    graph: &Graph<V>,
    algorithm: MstAlgorithm,
) -> GraphResult<MstResult<V>> {
    log::debug!(
        "running {} over {} vertices / {} edges",
        algorithm,
        graph.vertex_count(),
        graph.edge_count()
    );
    algorithm.run(graph)
}

/// 用指定算法计算单源最短路径
pub fn shortest_paths<V: VertexId>(
    graph: &Graph<V>,
    source: &V,
    algorithm: ShortestPathAlgorithm,
) -> GraphResult<ShortestPaths<V>> {
    log::debug!("running {} from {:?}", algorithm, source);
    algorithm.run(graph, source)
}
