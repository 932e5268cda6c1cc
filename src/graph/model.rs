//! 带权图容器
//!
//! 构建一次，之后只读。任何算法都不会在运行中增删顶点或边，
//! 因此同一个 `Graph` 可以被多个线程上的不同算法同时读取。

use std::collections::{HashMap, HashSet};

use crate::core::{Edge, GraphError, GraphResult, VertexId};

/// 带权图
///
/// 无向图中每条边只存储一次，但两个端点的邻接表都能遍历到它；
/// 有向图中边只出现在起点的邻接表里。
#[derive(Debug, Clone)]
pub struct Graph<V: VertexId> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    edges: Vec<Edge<V>>,
    /// 每个顶点的 (邻居下标, 边下标) 列表
    adjacency: Vec<Vec<(usize, usize)>>,
    directed: bool,
}

impl<V: VertexId> Graph<V> {
    /// 构建图
    ///
    /// 顶点重复返回 `DuplicateVertex`，边引用未注册的顶点返回 `InvalidEdge`，
    /// 权重为 NaN 或无穷返回 `InvalidWeight`
    pub fn new<I, E>(directed: bool, vertices: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        let mut graph = Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            directed,
        };

        for vertex in vertices {
            if graph.index.contains_key(&vertex) {
                return Err(GraphError::duplicate_vertex(&vertex));
            }
            graph.index.insert(vertex.clone(), graph.vertices.len());
            graph.vertices.push(vertex);
            graph.adjacency.push(Vec::new());
        }

        for edge in edges {
            graph.add_edge(edge.into())?;
        }

        log::trace!(
            "built {} graph with {} vertices and {} edges",
            if directed { "directed" } else { "undirected" },
            graph.vertices.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    /// 构建无向图
    pub fn undirected<I, E>(vertices: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        Self::new(false, vertices, edges)
    }

    /// 构建有向图
    pub fn directed<I, E>(vertices: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        Self::new(true, vertices, edges)
    }

    /// 仅由边列表构建图，顶点按首次出现的顺序注册
    pub fn from_edges<E>(directed: bool, edges: E) -> GraphResult<Self>
    where
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        let edges: Vec<Edge<V>> = edges.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        let mut vertices = Vec::new();
        for edge in &edges {
            for endpoint in [&edge.source, &edge.destination] {
                if seen.insert(endpoint.clone()) {
                    vertices.push(endpoint.clone());
                }
            }
        }
        Self::new(directed, vertices, edges)
    }

    fn add_edge(&mut self, edge: Edge<V>) -> GraphResult<()> {
        let (from, to) = match (self.index.get(&edge.source), self.index.get(&edge.destination)) {
            (Some(&from), Some(&to)) => (from, to),
            _ => return Err(GraphError::invalid_edge(&edge.source, &edge.destination)),
        };
        if !edge.weight.is_finite() {
            return Err(GraphError::invalid_weight(
                &edge.source,
                &edge.destination,
                edge.weight,
            ));
        }

        let edge_index = self.edges.len();
        self.adjacency[from].push((to, edge_index));
        if !self.directed && from != to {
            self.adjacency[to].push((from, edge_index));
        }
        self.edges.push(edge);
        Ok(())
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 按注册顺序返回所有顶点
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// 按插入顺序返回所有边
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// 顶点在注册顺序中的下标
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// 从顶点出发可以走到的邻居及边权
    ///
    /// 无向图返回所有关联边的另一端，有向图只返回出边。未注册的顶点没有邻居。
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, f64)> + 'a {
        let slots: &'a [(usize, usize)] = match self.index.get(vertex) {
            Some(&i) => &self.adjacency[i],
            None => &[],
        };
        slots
            .iter()
            .map(move |&(neighbor, edge)| (&self.vertices[neighbor], self.edges[edge].weight))
    }

    /// 所有有向弧 (起点, 终点, 权重)
    ///
    /// 无向图的每条边展开为两个方向的弧（自环只出现一次）
    pub fn arcs(&self) -> impl Iterator<Item = (&V, &V, f64)> + '_ {
        let directed = self.directed;
        self.edges.iter().flat_map(move |e| {
            let forward = (&e.source, &e.destination, e.weight);
            let backward = (!directed && e.source != e.destination)
                .then_some((&e.destination, &e.source, e.weight));
            std::iter::once(forward).chain(backward)
        })
    }

    /// 第一条负权边（如果存在）
    pub fn first_negative_edge(&self) -> Option<&Edge<V>> {
        self.edges.iter().find(|e| e.weight < 0.0)
    }

    /// 转换为有向图，无向边展开为两条有向边
    pub fn to_directed(&self) -> Graph<V> {
        if self.directed {
            return self.clone();
        }

        let mut graph = Graph {
            vertices: self.vertices.clone(),
            index: self.index.clone(),
            edges: Vec::with_capacity(self.edges.len() * 2),
            adjacency: vec![Vec::new(); self.vertices.len()],
            directed: true,
        };
        for (from, slots) in self.adjacency.iter().enumerate() {
            for &(to, edge) in slots {
                graph.adjacency[from].push((to, graph.edges.len()));
                graph.edges.push(Edge::new(
                    self.vertices[from].clone(),
                    self.vertices[to].clone(),
                    self.edges[edge].weight,
                ));
            }
        }
        graph
    }
}
