//! Borůvka算法模块
//!
//! 每一轮为每个连通分量选出最便宜的外连边，再统一合并，
//! 分量个数每轮至少减半，共 O(log V) 轮

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::collections::UnionFind;
use crate::core::{GraphError, GraphResult, VertexId};
use crate::graph::Graph;

use super::kruskal::edge_order;
use super::result::{validate_spanning_input, MstResult};

/// Borůvka算法结构体
pub struct Boruvka;

impl Boruvka {
    /// 计算最小生成树
    ///
    /// 同一条边可能同时是两个分量的最便宜边，合并前重新检查两端是否已连通，
    /// 避免同一轮中重复接受
    pub fn minimum_spanning_tree<V: VertexId>(graph: &Graph<V>) -> GraphResult<MstResult<V>> {
        validate_spanning_input(graph)?;

        let edges = graph.edges();
        let required = graph.vertex_count() - 1;
        let mut components: UnionFind<V> = graph.vertices().iter().cloned().collect();
        let mut accepted = Vec::with_capacity(required);
        let mut rounds = 0;

        while components.component_count() > 1 {
            rounds += 1;

            // 分量根 -> 最便宜边的下标
            let mut cheapest: BTreeMap<V, usize> = BTreeMap::new();
            for (index, edge) in edges.iter().enumerate() {
                let root_u = components.find(&edge.source)?;
                let root_v = components.find(&edge.destination)?;
                if root_u == root_v {
                    continue;
                }

                for root in [root_u, root_v] {
                    let improves = match cheapest.get(&root) {
                        Some(&best) => edge_order(edges, index, best) == Ordering::Less,
                        None => true,
                    };
                    if improves {
                        cheapest.insert(root, index);
                    }
                }
            }

            if cheapest.is_empty() {
                return Err(GraphError::DisconnectedGraph {
                    accepted: accepted.len(),
                    required,
                });
            }

            let mut chosen: Vec<usize> = cheapest.into_values().collect();
            chosen.sort_unstable();
            chosen.dedup();

            for index in chosen {
                let edge = &edges[index];
                if components.find(&edge.source)? != components.find(&edge.destination)? {
                    components.union(&edge.source, &edge.destination)?;
                    accepted.push(edge.clone());
                }
            }
        }

        log::debug!("boruvka finished in {} rounds", rounds);
        Ok(MstResult::from_edges(accepted))
    }
}
