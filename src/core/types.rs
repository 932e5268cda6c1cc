//! 核心数据类型
//!
//! 顶点标识和带权边

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// 顶点标识
///
/// 任何可比较、可哈希的类型都可以作为顶点，例如整数或字符串。
/// 全序用于优先队列和边排序的确定性平局裁决。
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> VertexId for T {}

/// 带权边
///
/// 无向图中 `(u, v, w)` 与 `(v, u, w)` 等价，只存储一次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V> {
    pub source: V,
    pub destination: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V, weight: f64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

impl<V: VertexId> Edge<V> {
    /// 端点按全序排列后的二元组，用于无向边的确定性排序
    pub fn normalized_endpoints(&self) -> (&V, &V) {
        if self.source <= self.destination {
            (&self.source, &self.destination)
        } else {
            (&self.destination, &self.source)
        }
    }

    /// 给定一个端点，返回另一个端点
    pub fn opposite(&self, vertex: &V) -> Option<&V> {
        if *vertex == self.source {
            Some(&self.destination)
        } else if *vertex == self.destination {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl<V> From<(V, V, f64)> for Edge<V> {
    fn from((source, destination, weight): (V, V, f64)) -> Self {
        Self::new(source, destination, weight)
    }
}
