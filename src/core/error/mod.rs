//! 统一错误处理系统
//!
//! 所有算法都是确定性的纯计算，任何错误都直接返回给调用方，不做重试，
//! 也不在库内部打印。顶点标识以 `Debug` 形式记录在错误中，
//! 这样错误类型不必携带顶点的泛型参数。

use std::fmt::Debug;

use thiserror::Error;

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode};

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;

/// 图算法错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("无效边: ({from} -> {to}) 引用了未注册的顶点")]
    InvalidEdge { from: String, to: String },

    #[error("顶点未找到: {0}")]
    UnknownVertex(String),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(String),

    #[error("对空堆执行pop")]
    EmptyHeap,

    #[error("图为空，至少需要一个顶点")]
    EmptyGraph,

    #[error("生成树算法要求无向图")]
    NotUndirected,

    #[error("图不连通: 生成树只找到 {accepted}/{required} 条边")]
    DisconnectedGraph { accepted: usize, required: usize },

    #[error("检测到可达负权环: {0}")]
    NegativeCycle(String),

    #[error("无效权重: ({from} -> {to}) 权重为 {weight}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("未知算法: {0}")]
    UnknownAlgorithm(String),

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("IO错误: {0}")]
    Io(String),
}

impl GraphError {
    pub fn unknown_vertex<V: Debug>(vertex: &V) -> Self {
        GraphError::UnknownVertex(format!("{:?}", vertex))
    }

    pub fn duplicate_vertex<V: Debug>(vertex: &V) -> Self {
        GraphError::DuplicateVertex(format!("{:?}", vertex))
    }

    pub fn invalid_edge<V: Debug>(source: &V, destination: &V) -> Self {
        GraphError::InvalidEdge {
            from: format!("{:?}", source),
            to: format!("{:?}", destination),
        }
    }

    pub fn invalid_weight<V: Debug>(source: &V, destination: &V, weight: f64) -> Self {
        GraphError::InvalidWeight {
            from: format!("{:?}", source),
            to: format!("{:?}", destination),
            weight,
        }
    }

    pub fn negative_cycle<V: Debug>(cycle: &[V]) -> Self {
        let rendered: Vec<String> = cycle.iter().map(|v| format!("{:?}", v)).collect();
        GraphError::NegativeCycle(rendered.join(" -> "))
    }

    /// 获取对外错误码
    pub fn code(&self) -> ErrorCode {
        match self {
            GraphError::InvalidEdge { .. } => ErrorCode::InvalidEdge,
            GraphError::UnknownVertex(_) => ErrorCode::UnknownVertex,
            GraphError::DuplicateVertex(_) => ErrorCode::DuplicateVertex,
            GraphError::EmptyHeap => ErrorCode::InternalError,
            GraphError::EmptyGraph => ErrorCode::EmptyGraph,
            GraphError::NotUndirected => ErrorCode::InvalidDirection,
            GraphError::DisconnectedGraph { .. } => ErrorCode::DisconnectedGraph,
            GraphError::NegativeCycle(_) => ErrorCode::NegativeCycle,
            GraphError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            GraphError::UnknownAlgorithm(_) => ErrorCode::UnknownAlgorithm,
            GraphError::Parse(_) => ErrorCode::ParseError,
            GraphError::Io(_) => ErrorCode::IoError,
        }
    }
}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        GraphError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(e: toml::de::Error) -> Self {
        GraphError::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::Parse(e.to_string())
    }
}
