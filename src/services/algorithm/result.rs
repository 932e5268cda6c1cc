//! 算法结果类型
//!
//! 结果都是可序列化的纯数据，可视化等外部协作方直接消费，
//! 不暴露堆、并查集等内部结构。

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::{Edge, GraphError, GraphResult, VertexId};
use crate::graph::Graph;

/// 最小生成树结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult<V> {
    /// 按接受顺序排列的树边
    pub edges: Vec<Edge<V>>,
    /// 树边权重之和
    pub total_weight: f64,
}

impl<V> MstResult<V> {
    pub fn from_edges(edges: Vec<Edge<V>>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            edges,
            total_weight,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// 单源最短路径结果
///
/// 图中每个顶点都有一项距离，不可达的顶点距离为 `f64::INFINITY`，不会被省略
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<V: Ord> {
    pub source: V,
    pub distances: BTreeMap<V, f64>,
    /// 最短路径树中每个可达顶点（起点除外）的前驱
    pub predecessors: BTreeMap<V, V>,
}

impl<V: VertexId> ShortestPaths<V> {
    /// 获取到目标顶点的最短距离
    pub fn distance_to(&self, target: &V) -> Option<f64> {
        self.distances.get(target).copied()
    }

    pub fn is_reachable(&self, target: &V) -> bool {
        self.distance_to(target).is_some_and(f64::is_finite)
    }

    /// 所有可达顶点，按顶点顺序
    pub fn reachable(&self) -> impl Iterator<Item = (&V, f64)> {
        self.distances
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(v, d)| (v, *d))
    }

    /// 重建从起点到目标顶点的路径
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            let predecessor = self.predecessors.get(current)?;
            // 前驱链出现环时放弃重建
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(predecessor.clone());
            current = predecessor;
        }

        path.reverse();
        Some(path)
    }
}

/// 生成树算法的公共前置检查
pub(crate) fn validate_spanning_input<V: VertexId>(graph: &Graph<V>) -> GraphResult<()> {
    if graph.vertex_count() == 0 {
        return Err(GraphError::EmptyGraph);
    }
    if graph.is_directed() {
        return Err(GraphError::NotUndirected);
    }
    Ok(())
}

/// 把调用方给出的起点解析为图内部持有的顶点引用
pub(crate) fn resolve_source<'a, V: VertexId>(graph: &'a Graph<V>, source: &V) -> GraphResult<&'a V> {
    graph
        .index_of(source)
        .map(|i| &graph.vertices()[i])
        .ok_or_else(|| GraphError::unknown_vertex(source))
}
