//! GraphAlgo - 小规模带权图上的最小生成树与单源最短路径算法
//!
//! 提供三种最小生成树算法（Prim、Kruskal、Borůvka）、三种单源最短路径算法
//! （Dijkstra、Floyd-Warshall、Bellman-Ford），以及它们依赖的最小堆和并查集。
//! 所有算法都是同步的纯函数：输入只读的图，返回可序列化的结果或明确的错误。

pub mod collections;
pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::core::{Edge, ErrorCode, GraphError, GraphResult, VertexId};
pub use crate::graph::{Graph, GraphDefinition};
pub use crate::services::algorithm::{
    minimum_spanning_tree, shortest_paths, MstAlgorithm, MstResult, ShortestPathAlgorithm,
    ShortestPaths,
};
