//! Dijkstra算法模块
//!
//! 包含非负权图的单源最短路径算法实现

use std::collections::{BTreeMap, HashMap};

use crate::collections::{HeapEntry, MinHeap};
use crate::core::{GraphError, GraphResult, VertexId};
use crate::graph::Graph;

use super::result::{resolve_source, ShortestPaths};

/// Dijkstra算法结构体
pub struct Dijkstra;

impl Dijkstra {
    /// 计算从起点到所有顶点的最短距离
    ///
    /// 要求所有边权非负，否则返回 `InvalidWeight`。
    /// 堆采用惰性删除：弹出的距离大于已记录的最优距离时视为过期条目跳过。
    pub fn shortest_paths<V: VertexId>(graph: &Graph<V>, source: &V) -> GraphResult<ShortestPaths<V>> {
        let source = resolve_source(graph, source)?;
        if let Some(edge) = graph.first_negative_edge() {
            return Err(GraphError::invalid_weight(
                &edge.source,
                &edge.destination,
                edge.weight,
            ));
        }

        let mut distances: HashMap<&V, f64> = graph
            .vertices()
            .iter()
            .map(|v| (v, f64::INFINITY))
            .collect();
        let mut predecessors: HashMap<&V, &V> = HashMap::new();
        let mut to_visit: MinHeap<&V> = MinHeap::with_capacity(graph.vertex_count());

        distances.insert(source, 0.0);
        to_visit.push(0.0, source);

        let mut settled = 0;
        while !to_visit.is_empty() {
            let HeapEntry {
                key: distance,
                payload: node,
            } = to_visit.pop()?;
            if distance > distances.get(node).copied().unwrap_or(f64::INFINITY) {
                continue;
            }
            settled += 1;

            for (neighbor, weight) in graph.neighbors(node) {
                let new_distance = distance + weight;
                if new_distance < distances.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                    distances.insert(neighbor, new_distance);
                    predecessors.insert(neighbor, node);
                    to_visit.push(new_distance, neighbor);
                }
            }
        }

        log::debug!("dijkstra from {:?} settled {} vertices", source, settled);
        Ok(ShortestPaths {
            source: source.clone(),
            distances: distances
                .into_iter()
                .map(|(v, d)| (v.clone(), d))
                .collect::<BTreeMap<_, _>>(),
            predecessors: predecessors
                .into_iter()
                .map(|(v, p)| (v.clone(), p.clone()))
                .collect(),
        })
    }

    /// 查找从起点到目标顶点的最短路径
    ///
    /// 目标不可达时返回 `Ok(None)`
    pub fn shortest_path<V: VertexId>(
        graph: &Graph<V>,
        source: &V,
        target: &V,
    ) -> GraphResult<Option<(Vec<V>, f64)>> {
        resolve_source(graph, target)?;
        let paths = Self::shortest_paths(graph, source)?;
        Ok(paths
            .path_to(target)
            .zip(paths.distance_to(target)))
    }
}
