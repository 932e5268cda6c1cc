//! 二叉最小堆
//!
//! 数组下标 `i` 的元素键值不大于其子节点 `2i+1` 和 `2i+2`。
//!
//! 这是一个惰性删除的优先队列：不提供 decrease-key，
//! 指向已确定顶点的过期条目留在堆中，由调用方在弹出时丢弃。
//! 算法只需要尽力取得当前最小值，因此没有采用可寻址的索引堆。

use std::cmp::Ordering;

use crate::core::{GraphError, GraphResult};

/// 堆条目：数值键加负载
///
/// 排序规则：键升序，键相同时按负载的全序升序（通常是顶点标识），
/// 保证弹出顺序可复现
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry<P> {
    pub key: f64,
    pub payload: P,
}

impl<P: Ord> HeapEntry<P> {
    fn order(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.payload.cmp(&other.payload))
    }
}

/// 数组实现的二叉最小堆
#[derive(Debug, Clone)]
pub struct MinHeap<P> {
    entries: Vec<HeapEntry<P>>,
}

impl<P: Ord> Default for MinHeap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord> MinHeap<P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 查看最小条目但不移除
    pub fn peek(&self) -> Option<&HeapEntry<P>> {
        self.entries.first()
    }

    /// 插入条目，O(log n)
    pub fn push(&mut self, key: f64, payload: P) {
        self.entries.push(HeapEntry { key, payload });
        self.sift_up(self.entries.len() - 1);
    }

    /// 移除并返回最小条目，O(log n)
    ///
    /// 对空堆调用返回 [`GraphError::EmptyHeap`]，算法在调用前应先检查 `is_empty`
    pub fn pop(&mut self) -> GraphResult<HeapEntry<P>> {
        if self.entries.is_empty() {
            return Err(GraphError::EmptyHeap);
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop().ok_or(GraphError::EmptyHeap)?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(entry)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a].order(&self.entries[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            // 两个子节点相等时选左子节点
            let mut child = left;
            if right < len && self.less(right, left) {
                child = right;
            }

            if !self.less(child, index) {
                break;
            }
            self.entries.swap(index, child);
            index = child;
        }
    }

    #[cfg(test)]
    fn satisfies_heap_order(&self) -> bool {
        (1..self.entries.len()).all(|i| !self.less(i, (i - 1) / 2))
    }
}

impl<P: Ord> FromIterator<(f64, P)> for MinHeap<P> {
    fn from_iter<I: IntoIterator<Item = (f64, P)>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        for (key, payload) in iter {
            heap.push(key, payload);
        }
        heap
    }
}
