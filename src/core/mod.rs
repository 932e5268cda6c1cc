pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{ErrorCategory, ErrorCode, GraphError, GraphResult};

// 核心数据类型
pub use types::{Edge, VertexId};
