//! Prim算法模块
//!
//! 从固定起点向外生长生成树，用最小堆维护候选边

use std::collections::HashSet;

use crate::collections::{HeapEntry, MinHeap};
use crate::core::{Edge, GraphError, GraphResult, VertexId};
use crate::graph::Graph;

use super::result::{validate_spanning_input, MstResult};

/// Prim算法结构体
pub struct Prim;

impl Prim {
    /// 计算最小生成树
    ///
    /// 起点取注册顺序中的第一个顶点。堆中条目的负载为 (终点, 起点)，
    /// 权重相同时按终点标识再按起点标识弹出。终点已访问的条目属于过期条目，弹出后丢弃。
    pub fn minimum_spanning_tree<V: VertexId>(graph: &Graph<V>) -> GraphResult<MstResult<V>> {
        validate_spanning_input(graph)?;

        let total = graph.vertex_count();
        let start = graph.vertices().first().ok_or(GraphError::EmptyGraph)?;

        let mut visited: HashSet<&V> = HashSet::with_capacity(total);
        let mut frontier: MinHeap<(&V, &V)> = MinHeap::new();
        let mut accepted = Vec::with_capacity(total - 1);

        visited.insert(start);
        for (neighbor, weight) in graph.neighbors(start) {
            frontier.push(weight, (neighbor, start));
        }

        while visited.len() < total {
            if frontier.is_empty() {
                return Err(GraphError::DisconnectedGraph {
                    accepted: accepted.len(),
                    required: total - 1,
                });
            }

            let HeapEntry {
                key: weight,
                payload: (to, from),
            } = frontier.pop()?;
            if !visited.insert(to) {
                continue;
            }

            accepted.push(Edge::new(from.clone(), to.clone(), weight));
            for (next, next_weight) in graph.neighbors(to) {
                if !visited.contains(next) {
                    frontier.push(next_weight, (next, to));
                }
            }
        }

        log::debug!("prim spanned {} vertices from {:?}", total, start);
        Ok(MstResult::from_edges(accepted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_spanning_tree() {
        let graph = Graph::undirected(
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
        .expect("valid graph");

        let result = Prim::minimum_spanning_tree(&graph).expect("connected graph");
        assert_eq!(result.total_weight, 12.0);
        assert_eq!(
            result.edges,
            vec![
                Edge::new(1, 3, 1.0),
                Edge::new(3, 2, 3.0),
                Edge::new(2, 4, 2.0),
                Edge::new(4, 5, 1.0),
                Edge::new(5, 6, 2.0),
                Edge::new(6, 7, 3.0),
            ]
        );
    }

    #[test]
    fn test_tie_broken_by_destination() {
        let graph = Graph::undirected(
            ['A', 'C', 'B'],
            [('A', 'C', 1.0), ('A', 'B', 1.0), ('B', 'C', 1.0)],
        )
        .expect("valid graph");
        let result = Prim::minimum_spanning_tree(&graph).expect("connected graph");
        assert_eq!(
            result.edges,
            vec![Edge::new('A', 'B', 1.0), Edge::new('A', 'C', 1.0)]
        );
    }

    #[test]
    fn test_disconnected_graph() {
        let graph = Graph::undirected([1, 2, 3, 4], [(1, 2, 1.0), (3, 4, 1.0)]).expect("valid graph");
        assert_eq!(
            Prim::minimum_spanning_tree(&graph),
            Err(GraphError::DisconnectedGraph {
                accepted: 1,
                required: 3
            })
        );
    }

    #[test]
    fn test_isolated_start_vertex() {
        let graph = Graph::undirected([0, 1, 2], [(1, 2, 1.0)]).expect("valid graph");
        assert!(matches!(
            Prim::minimum_spanning_tree(&graph),
            Err(GraphError::DisconnectedGraph { accepted: 0, .. })
        ));
    }

    #[test]
    fn test_self_loop_ignored() {
        let graph = Graph::undirected([1, 2], [(1, 1, -5.0), (1, 2, 2.0)]).expect("valid graph");
        let result = Prim::minimum_spanning_tree(&graph).expect("connected graph");
        assert_eq!(result.edges, vec![Edge::new(1, 2, 2.0)]);
    }

    #[test]
    fn test_directed_graph_rejected() {
        let graph = Graph::directed([1, 2], [(1, 2, 1.0)]).expect("valid graph");
        assert_eq!(Prim::minimum_spanning_tree(&graph), Err(GraphError::NotUndirected));
    }
}
