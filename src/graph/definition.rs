//! 图定义
//!
//! 调用方以纯数据形式描述一张图：顶点列表加 (起点, 终点, 权重) 三元组。
//! 支持 TOML 与 JSON 两种格式，例如：
//!
//! ```toml
//! directed = false
//! vertices = [1, 2, 3]
//! edges = [[1, 2, 4.0], [2, 3, 1.5]]
//! ```
//!
//! 省略 `vertices` 时按边中首次出现的顺序注册顶点。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{GraphError, GraphResult, VertexId};
use crate::graph::Graph;

/// 图的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>"))]
pub struct GraphDefinition<V> {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub vertices: Vec<V>,
    #[serde(default)]
    pub edges: Vec<(V, V, f64)>,
}

impl<V: VertexId> GraphDefinition<V> {
    /// 校验并构建只读图
    pub fn build(&self) -> GraphResult<Graph<V>> {
        let edges = self.edges.iter().cloned();
        if self.vertices.is_empty() {
            Graph::from_edges(self.directed, edges)
        } else {
            Graph::new(self.directed, self.vertices.iter().cloned(), edges)
        }
    }
}

impl<V: VertexId + DeserializeOwned> GraphDefinition<V> {
    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 从文件加载，按扩展名选择格式
    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(GraphError::Parse(format!(
                "不支持的图定义文件格式: {}",
                path.display()
            ))),
        }
    }
}

impl<V: VertexId> From<&Graph<V>> for GraphDefinition<V> {
    fn from(graph: &Graph<V>) -> Self {
        Self {
            directed: graph.is_directed(),
            vertices: graph.vertices().to_vec(),
            edges: graph
                .edges()
                .iter()
                .map(|e| (e.source.clone(), e.destination.clone(), e.weight))
                .collect(),
        }
    }
}
