//! Kruskal算法模块
//!
//! 按权重升序扫描所有边，用并查集判断是否成环

use std::cmp::Ordering;

use crate::collections::UnionFind;
use crate::core::{Edge, GraphError, GraphResult, VertexId};
use crate::graph::Graph;

use super::result::{validate_spanning_input, MstResult};

/// Kruskal算法结构体
pub struct Kruskal;

/// 边的全序：权重升序，权重相同时按规范化端点，最后按插入顺序
///
/// Kruskal 和 Borůvka 共用这一比较规则，平局时选出的边集合可复现
pub(crate) fn edge_order<V: VertexId>(edges: &[Edge<V>], a: usize, b: usize) -> Ordering {
    let (ea, eb) = (&edges[a], &edges[b]);
    ea.weight
        .total_cmp(&eb.weight)
        .then_with(|| ea.normalized_endpoints().cmp(&eb.normalized_endpoints()))
        .then_with(|| a.cmp(&b))
}

impl Kruskal {
    /// 计算最小生成树
    ///
    /// 图必须是非空的无向图；图不连通时返回 `DisconnectedGraph`
    pub fn minimum_spanning_tree<V: VertexId>(graph: &Graph<V>) -> GraphResult<MstResult<V>> {
        validate_spanning_input(graph)?;

        let edges = graph.edges();
        let required = graph.vertex_count() - 1;

        let mut order: Vec<usize> = (0..edges.len()).collect();
        order.sort_by(|&a, &b| edge_order(edges, a, b));

        let mut components: UnionFind<V> = graph.vertices().iter().cloned().collect();
        let mut accepted = Vec::with_capacity(required);

        for index in order {
            if accepted.len() == required {
                break;
            }
            let edge = &edges[index];
            if components.union(&edge.source, &edge.destination)? {
                accepted.push(edge.clone());
            }
        }

        if accepted.len() < required {
            return Err(GraphError::DisconnectedGraph {
                accepted: accepted.len(),
                required,
            });
        }

        log::debug!(
            "kruskal accepted {} edges out of {}",
            accepted.len(),
            edges.len()
        );
        Ok(MstResult::from_edges(accepted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven_vertex_graph() -> Graph<i32> {
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
        .expect("valid graph")
    }

    #[test]
    fn test_minimum_spanning_tree() {
        let result = Kruskal::minimum_spanning_tree(&seven_vertex_graph()).expect("connected graph");
        assert_eq!(result.len(), 6);
        assert_eq!(result.total_weight, 12.0);
        assert_eq!(
            result.edges,
            vec![
                Edge::new(1, 3, 1.0),
                Edge::new(4, 5, 1.0),
                Edge::new(2, 4, 2.0),
                Edge::new(5, 6, 2.0),
                Edge::new(2, 3, 3.0),
                Edge::new(6, 7, 3.0),
            ]
        );
    }

    #[test]
    fn test_ties_resolved_by_endpoints() {
        // 三条等权边组成三角形，按端点顺序应选 (a,b) 和 (a,c)
        let graph = Graph::undirected(
            ["a", "b", "c"],
            [("b", "c", 1.0), ("c", "a", 1.0), ("a", "b", 1.0)],
        )
        .expect("valid graph");
        let result = Kruskal::minimum_spanning_tree(&graph).expect("connected graph");
        assert_eq!(
            result.edges,
            vec![Edge::new("a", "b", 1.0), Edge::new("c", "a", 1.0)]
        );
    }

    #[test]
    fn test_disconnected_graph() {
        let graph = Graph::undirected([1, 2, 3], [(1, 2, 1.0)]).expect("valid graph");
        assert_eq!(
            Kruskal::minimum_spanning_tree(&graph),
            Err(GraphError::DisconnectedGraph {
                accepted: 1,
                required: 2
            })
        );
    }

    #[test]
    fn test_single_vertex_and_empty_graph() {
        let single = Graph::undirected([1], Vec::<Edge<i32>>::new()).expect("valid graph");
        let result = Kruskal::minimum_spanning_tree(&single).expect("single vertex");
        assert!(result.is_empty());
        assert_eq!(result.total_weight, 0.0);

        let empty = Graph::<i32>::undirected(Vec::new(), Vec::<Edge<i32>>::new()).expect("valid graph");
        assert_eq!(Kruskal::minimum_spanning_tree(&empty), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn test_negative_weights_and_parallel_edges() {
        let graph = Graph::undirected(
            [1, 2, 3],
            [(1, 2, 5.0), (1, 2, -2.0), (2, 3, 0.0), (1, 3, -1.0)],
        )
        .expect("valid graph");
        let result = Kruskal::minimum_spanning_tree(&graph).expect("connected graph");
        assert_eq!(result.total_weight, -3.0);
    }
}
