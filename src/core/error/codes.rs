//! 对外错误码定义
//!
//! 错误码格式: XXYY
//! - XX: 错误类别 (01=解析, 02=执行, 03=验证, 05=资源, 09=系统)
//! - YY: 具体错误
//!
//! 调度层（菜单、命令行等）只需要错误码和出错的输入即可向用户展示，
//! 不需要了解算法内部结构

use serde::{Deserialize, Serialize};

/// 对外错误码
///
/// 错误码一旦定义不应随意修改，保证调用方兼容性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // ==================== 解析错误 (01xx) ====================
    /// 图定义或配置解析失败
    ParseError = 101,
    /// 未知算法名称
    UnknownAlgorithm = 102,

    // ==================== 执行错误 (02xx) ====================
    /// 图不连通，无法生成生成树
    DisconnectedGraph = 201,
    /// 存在可达负权环
    NegativeCycle = 202,

    // ==================== 验证错误 (03xx) ====================
    /// 边引用了未注册的顶点
    InvalidEdge = 301,
    /// 权重不合法（负权或NaN）
    InvalidWeight = 302,
    /// 空图
    EmptyGraph = 303,
    /// 图方向与算法要求不符
    InvalidDirection = 304,

    // ==================== 资源错误 (05xx) ====================
    /// 顶点未找到
    UnknownVertex = 500,
    /// 顶点已存在
    DuplicateVertex = 501,

    // ==================== 系统错误 (09xx) ====================
    /// 内部错误，算法实现缺陷
    InternalError = 900,
    /// IO错误
    IoError = 901,
}

impl ErrorCode {
    /// 获取错误码的 i32 值
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 根据 i32 值获取错误码
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            101 => Some(ErrorCode::ParseError),
            102 => Some(ErrorCode::UnknownAlgorithm),
            201 => Some(ErrorCode::DisconnectedGraph),
            202 => Some(ErrorCode::NegativeCycle),
            301 => Some(ErrorCode::InvalidEdge),
            302 => Some(ErrorCode::InvalidWeight),
            303 => Some(ErrorCode::EmptyGraph),
            304 => Some(ErrorCode::InvalidDirection),
            500 => Some(ErrorCode::UnknownVertex),
            501 => Some(ErrorCode::DuplicateVertex),
            900 => Some(ErrorCode::InternalError),
            901 => Some(ErrorCode::IoError),
            _ => None,
        }
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self.as_i32() {
            100..=199 => ErrorCategory::Parse,
            200..=299 => ErrorCategory::Execution,
            300..=399 => ErrorCategory::Validation,
            500..=599 => ErrorCategory::Resource,
            _ => ErrorCategory::System,
        }
    }

    /// 获取默认的错误消息
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "解析错误",
            ErrorCode::UnknownAlgorithm => "未知算法",
            ErrorCode::DisconnectedGraph => "图不连通",
            ErrorCode::NegativeCycle => "存在负权环",
            ErrorCode::InvalidEdge => "无效边",
            ErrorCode::InvalidWeight => "无效权重",
            ErrorCode::EmptyGraph => "空图",
            ErrorCode::InvalidDirection => "图方向不符",
            ErrorCode::UnknownVertex => "顶点未找到",
            ErrorCode::DuplicateVertex => "顶点已存在",
            ErrorCode::InternalError => "内部错误",
            ErrorCode::IoError => "IO错误",
        }
    }

    /// 判断是否为调用方输入导致的错误
    pub fn is_client_error(&self) -> bool {
        !matches!(self.category(), ErrorCategory::System)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.default_message())
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Parse,
    Execution,
    Validation,
    Resource,
    System,
}
