//! 算法依赖的专用数据结构
//!
//! - [`MinHeap`]: 数组实现的二叉最小堆，惰性删除，Prim和Dijkstra使用
//! - [`UnionFind`]: 带路径压缩的并查集，Kruskal和Borůvka使用

pub mod min_heap;
pub mod union_find;

pub use min_heap::{HeapEntry, MinHeap};
pub use union_find::UnionFind;
