//! 图模型模块
//!
//! 包含运行期只读的带权图容器，以及从 TOML/JSON 描述构建图的入口

pub mod definition;
pub mod model;

pub use definition::GraphDefinition;
pub use model::Graph;
