//! Floyd-Warshall算法模块
//!
//! 计算完整的 |V|×|V| 距离矩阵，时间复杂度O(V^3)，适用于小规模稠密图。
//! 对外只返回起点所在的那一行。

use crate::core::{GraphError, GraphResult, VertexId};
use crate::graph::Graph;

use super::result::{resolve_source, ShortestPaths};

/// Floyd-Warshall算法结构体
pub struct FloydWarshall;

/// 全源距离矩阵，下标与图的顶点注册顺序一致
struct DistanceMatrix {
    dist: Vec<Vec<f64>>,
    /// `pred[i][j]` 为 i 到 j 最短路径上 j 的前驱
    pred: Vec<Vec<Option<usize>>>,
}

impl DistanceMatrix {
    fn build<V: VertexId>(graph: &Graph<V>) -> GraphResult<Self> {
        let n = graph.vertex_count();
        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut pred = vec![vec![None; n]; n];

        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0.0;
        }

        // 平行边取最小权重
        for (u, v, weight) in graph.arcs() {
            let i = graph.index_of(u).ok_or_else(|| GraphError::unknown_vertex(u))?;
            let j = graph.index_of(v).ok_or_else(|| GraphError::unknown_vertex(v))?;
            if weight < dist[i][j] {
                dist[i][j] = weight;
                pred[i][j] = Some(i);
            }
        }

        // 中间顶点 k 必须在最外层
        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i][k];
                if d_ik == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let d_kj = dist[k][j];
                    if d_kj == f64::INFINITY {
                        continue;
                    }
                    let new_dist = d_ik + d_kj;
                    if new_dist < dist[i][j] {
                        dist[i][j] = new_dist;
                        pred[i][j] = pred[k][j];
                    }
                }
            }
        }

        Ok(Self { dist, pred })
    }

    /// 从 source 可达、且位于负权环上的顶点
    fn reachable_negative_cycle(&self, source: usize) -> Option<usize> {
        (0..self.dist.len())
            .find(|&k| self.dist[source][k] != f64::INFINITY && self.dist[k][k] < 0.0)
    }

    /// 沿前驱矩阵收集经过 k 的环
    fn cycle_through(&self, k: usize) -> Vec<usize> {
        let mut cycle = vec![k];
        let mut current = self.pred[k][k];
        while let Some(node) = current {
            if node == k || cycle.len() > self.dist.len() {
                break;
            }
            cycle.push(node);
            current = self.pred[k][node];
        }
        cycle.reverse();
        cycle
    }
}

impl FloydWarshall {
    /// 计算从起点到所有顶点的最短距离
    ///
    /// 内部计算全源矩阵，只返回起点行。起点可达负权环时返回 `NegativeCycle`。
    ///
    /// 路径权重按 i→k、k→j 两段相加，求和顺序与 Dijkstra、Bellman-Ford 沿路径逐边累加不同，
    /// 小数权重下结果可能只在最后一位有差异。与其他算法比较时应使用
    /// `AlgorithmConfig::tolerance` 容差，而不是逐位相等。
    pub fn shortest_paths<V: VertexId>(graph: &Graph<V>, source: &V) -> GraphResult<ShortestPaths<V>> {
        let source = resolve_source(graph, source)?;
        let s = graph.index_of(source).ok_or_else(|| GraphError::unknown_vertex(source))?;
        let vertices = graph.vertices();

        let matrix = DistanceMatrix::build(graph)?;
        if let Some(k) = matrix.reachable_negative_cycle(s) {
            let cycle: Vec<&V> = matrix.cycle_through(k).into_iter().map(|i| &vertices[i]).collect();
            return Err(GraphError::negative_cycle(&cycle));
        }

        log::debug!("floyd-warshall computed {}x{} matrix", vertices.len(), vertices.len());
        Ok(ShortestPaths {
            source: source.clone(),
            distances: vertices
                .iter()
                .zip(matrix.dist[s].iter())
                .map(|(v, d)| (v.clone(), *d))
                .collect(),
            predecessors: vertices
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != s)
                .filter_map(|(j, v)| matrix.pred[s][j].map(|p| (v.clone(), vertices[p].clone())))
                .collect(),
        })
    }
}
