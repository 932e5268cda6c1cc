//! Bellman-Ford算法模块
//!
//! 包含Bellman-Ford最短路径算法实现
//! 支持负权边，检测到可达负权环时返回错误而不是不完整的距离

use std::collections::HashMap;

use crate::core::{GraphError, GraphResult, VertexId};
use crate::graph::Graph;

use super::result::{resolve_source, ShortestPaths};

/// Bellman-Ford算法结构体
pub struct BellmanFord;

/// 一轮松弛的工作状态
struct Relaxation<'a, V> {
    distances: HashMap<&'a V, f64>,
    predecessors: HashMap<&'a V, &'a V>,
}

impl<'a, V: VertexId> Relaxation<'a, V> {
    fn new(graph: &'a Graph<V>, initial: f64) -> Self {
        Self {
            distances: graph.vertices().iter().map(|v| (v, initial)).collect(),
            predecessors: HashMap::new(),
        }
    }

    fn distance(&self, vertex: &V) -> f64 {
        self.distances.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// 对所有弧做一轮松弛，返回本轮最后一个被更新的顶点
    fn pass(&mut self, arcs: &[(&'a V, &'a V, f64)]) -> Option<&'a V> {
        let mut last_updated = None;
        for &(u, v, weight) in arcs {
            let dist_u = self.distance(u);
            if dist_u == f64::INFINITY {
                continue;
            }

            let new_dist = dist_u + weight;
            if new_dist < self.distance(v) {
                self.distances.insert(v, new_dist);
                self.predecessors.insert(v, u);
                last_updated = Some(v);
            }
        }
        last_updated
    }

    /// 从第 n 轮仍被更新的顶点回溯出负权环
    ///
    /// 先沿前驱回溯 n 步保证进入环内，再收集环上的顶点
    fn trace_cycle(&self, start: &'a V, steps: usize) -> Vec<V> {
        let mut current = start;
        for _ in 0..steps {
            match self.predecessors.get(current) {
                Some(&pred) => current = pred,
                None => break,
            }
        }

        let anchor = current;
        let mut cycle = vec![anchor.clone()];
        while let Some(&pred) = self.predecessors.get(current) {
            if pred == anchor || cycle.len() > steps {
                break;
            }
            cycle.push(pred.clone());
            current = pred;
        }

        cycle.reverse();
        cycle
    }
}

impl BellmanFord {
    /// 执行Bellman-Ford算法
    ///
    /// 最多执行 |V|-1 轮松弛（某一轮没有更新即已到达不动点，提前结束），
    /// 然后再执行一轮检测；仍能松弛说明存在从起点可达的负权环，返回 `NegativeCycle`
    pub fn shortest_paths<V: VertexId>(graph: &Graph<V>, source: &V) -> GraphResult<ShortestPaths<V>> {
        let source = resolve_source(graph, source)?;
        let arcs: Vec<(&V, &V, f64)> = graph.arcs().collect();
        let n = graph.vertex_count();

        let mut state = Relaxation::new(graph, f64::INFINITY);
        state.distances.insert(source, 0.0);

        let mut passes = 0;
        for _ in 0..n.saturating_sub(1) {
            passes += 1;
            if state.pass(&arcs).is_none() {
                break;
            }
        }

        if let Some(updated) = state.pass(&arcs) {
            let cycle = state.trace_cycle(updated, n);
            log::debug!("bellman-ford from {:?} found negative cycle {:?}", source, cycle);
            return Err(GraphError::negative_cycle(&cycle));
        }

        log::debug!("bellman-ford from {:?} converged after {} passes", source, passes);
        Ok(ShortestPaths {
            source: source.clone(),
            distances: state
                .distances
                .iter()
                .map(|(v, d)| ((*v).clone(), *d))
                .collect(),
            predecessors: state
                .predecessors
                .iter()
                .map(|(v, p)| ((*v).clone(), (*p).clone()))
                .collect(),
        })
    }

    /// 查找图中任意位置的负权环（如果存在）
    ///
    /// 所有顶点初始距离为 0，相当于从一个连向所有顶点的虚拟起点出发
    pub fn find_negative_cycle<V: VertexId>(graph: &Graph<V>) -> Option<Vec<V>> {
        let arcs: Vec<(&V, &V, f64)> = graph.arcs().collect();
        let n = graph.vertex_count();
        let mut state = Relaxation::new(graph, 0.0);

        let mut last_updated = None;
        for _ in 0..n {
            last_updated = state.pass(&arcs);
            if last_updated.is_none() {
                break;
            }
        }

        last_updated.map(|start| state.trace_cycle(start, n))
    }

    /// 获取所有可达顶点
    pub fn reachable_nodes<V: VertexId>(graph: &Graph<V>, source: &V) -> GraphResult<Vec<V>> {
        let paths = Self::shortest_paths(graph, source)?;
        Ok(paths.reachable().map(|(v, _)| v.clone()).collect())
    }
}
