//! 算法交叉校验
//!
//! 在同一张只读图上并行运行同一引擎的全部三种算法，
//! 检查结果是否一致：生成树总权重相同，最短距离映射相同。
//! 每个算法持有自己的堆或并查集，图本身不被修改，因此可以安全并行。

use rayon::prelude::*;

use crate::core::{GraphResult, VertexId};
use crate::graph::Graph;

use super::{MstAlgorithm, MstResult, ShortestPathAlgorithm, ShortestPaths};

/// 交叉校验入口
pub struct CrossCheck;

/// 三种生成树算法的结果
#[derive(Debug, Clone)]
pub struct MstComparison<V> {
    pub vertex_count: usize,
    pub results: Vec<(MstAlgorithm, MstResult<V>)>,
}

impl<V> MstComparison<V> {
    /// 所有结果都有 |V|-1 条边且总权重在容差内一致
    pub fn agrees(&self, tolerance: f64) -> bool {
        let required = self.vertex_count.saturating_sub(1);
        let Some((_, first)) = self.results.first() else {
            return true;
        };
        self.results.iter().all(|(_, result)| {
            result.len() == required && (result.total_weight - first.total_weight).abs() <= tolerance
        })
    }
}

/// 三种最短路径算法的结果
#[derive(Debug, Clone)]
pub struct ShortestPathComparison<V: Ord> {
    pub results: Vec<(ShortestPathAlgorithm, ShortestPaths<V>)>,
}

impl<V: VertexId> ShortestPathComparison<V> {
    /// 所有结果覆盖相同的顶点，且每个顶点的距离在容差内一致（无穷远必须同为无穷远）
    pub fn agrees(&self, tolerance: f64) -> bool {
        let Some((_, first)) = self.results.first() else {
            return true;
        };
        self.results.iter().all(|(_, paths)| {
            paths.distances.len() == first.distances.len()
                && paths.distances.iter().all(|(vertex, d)| {
                    first
                        .distance_to(vertex)
                        .is_some_and(|expected| distances_match(*d, expected, tolerance))
                })
        })
    }

    /// 第一对不一致的顶点及各算法给出的距离
    pub fn first_disagreement(&self, tolerance: f64) -> Option<(V, Vec<(ShortestPathAlgorithm, f64)>)> {
        let (_, first) = self.results.first()?;
        first.distances.keys().find_map(|vertex| {
            let observed: Vec<(ShortestPathAlgorithm, f64)> = self
                .results
                .iter()
                .map(|(algorithm, paths)| (*algorithm, paths.distance_to(vertex).unwrap_or(f64::NAN)))
                .collect();
            let baseline = observed[0].1;
            let consistent = observed
                .iter()
                .all(|(_, d)| distances_match(*d, baseline, tolerance));
            (!consistent).then(|| (vertex.clone(), observed))
        })
    }
}

fn distances_match(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= tolerance
}

impl CrossCheck {
    /// 并行运行 Prim、Kruskal、Borůvka
    ///
    /// 任一算法失败（例如图不连通）时返回该错误
    pub fn spanning_trees<V>(graph: &Graph<V>) -> GraphResult<MstComparison<V>>
    where
        V: VertexId + Send + Sync,
    {
        let results = MstAlgorithm::ALL
            .as_slice()
            .par_iter()
            .map(|algorithm| algorithm.run(graph).map(|result| (*algorithm, result)))
            .collect::<GraphResult<Vec<_>>>()?;

        Ok(MstComparison {
            vertex_count: graph.vertex_count(),
            results,
        })
    }

    /// 并行运行 Dijkstra、Floyd-Warshall、Bellman-Ford
    pub fn shortest_paths<V>(graph: &Graph<V>, source: &V) -> GraphResult<ShortestPathComparison<V>>
    where
        V: VertexId + Send + Sync,
    {
        let results = ShortestPathAlgorithm::ALL
            .as_slice()
            .par_iter()
            .map(|algorithm| algorithm.run(graph, source).map(|paths| (*algorithm, paths)))
            .collect::<GraphResult<Vec<_>>>()?;

        Ok(ShortestPathComparison { results })
    }
}
