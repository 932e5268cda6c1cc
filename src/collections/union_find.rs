//! 并查集（不相交集合森林）
//!
//! 父指针映射 vertex -> vertex，顶点映射到自身时即为根。
//! `find` 采用迭代实现：先沿父指针找到根，再把路径上每个节点直接指向根，
//! 长链上也不会产生深递归。
//!
//! 合并规则固定为把第二个集合的根挂到第一个集合的根之下，结果可复现。

use std::collections::HashMap;

use crate::core::{GraphError, GraphResult, VertexId};

/// 并查集
#[derive(Debug, Clone)]
pub struct UnionFind<V: VertexId> {
    parent: HashMap<V, V>,
    components: usize,
}

impl<V: VertexId> Default for UnionFind<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> UnionFind<V> {
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            components: 0,
        }
    }

    /// 注册一个单元素集合，已存在时返回 false
    pub fn insert(&mut self, vertex: V) -> bool {
        if self.parent.contains_key(&vertex) {
            return false;
        }
        self.parent.insert(vertex.clone(), vertex);
        self.components += 1;
        true
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.parent.contains_key(vertex)
    }

    /// 已注册的元素个数
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 当前不相交集合的个数
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// 查找代表元，并压缩路径
    pub fn find(&mut self, vertex: &V) -> GraphResult<V> {
        let mut root = vertex.clone();
        loop {
            let parent = self
                .parent
                .get(&root)
                .ok_or_else(|| GraphError::unknown_vertex(vertex))?;
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        let mut current = vertex.clone();
        while current != root {
            match self.parent.insert(current, root.clone()) {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(root)
    }

    /// 合并两个元素所在的集合
    ///
    /// 返回是否发生了合并；两者已在同一集合时不做任何修改
    pub fn union(&mut self, a: &V, b: &V) -> GraphResult<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }

        self.parent.insert(root_b, root_a);
        self.components -= 1;
        Ok(true)
    }

    /// 判断两个元素是否在同一集合
    pub fn connected(&mut self, a: &V, b: &V) -> GraphResult<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }
}

impl<V: VertexId> FromIterator<V> for UnionFind<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut uf = UnionFind::new();
        for vertex in iter {
            uf.insert(vertex);
        }
        uf
    }
}
