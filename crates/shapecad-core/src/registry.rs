//! 图形注册表
//!
//! 以整数标识符为键的图形容器（arena）：
//! - 标识符从 1 开始单调递增，删除后不复用
//! - 注册表独占所有图形，外部只能借用
//! - 迭代顺序即插入顺序（标识符单调，按键排序等价于插入顺序）

use crate::entity::{Shape, ShapeId};
use crate::error::RegistryError;
use std::collections::BTreeMap;

/// 注册表快照：全部图形 + 下一个标识符
///
/// 用于持久化；保存后再加载必须得到完全相同的注册表。
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub shapes: BTreeMap<ShapeId, Shape>,
    pub next_id: u64,
}

/// 图形注册表
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    shapes: BTreeMap<ShapeId, Shape>,
    next_id: u64,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self {
            shapes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// 下一次 `create` 将分配的标识符
    pub fn next_id(&self) -> ShapeId {
        ShapeId::new(self.next_id)
    }

    /// 注册图形，返回分配的标识符
    ///
    /// 计数器到达 `u64::MAX` 后不再分配，返回 [`RegistryError::IdsExhausted`]。
    pub fn create(&mut self, mut shape: Shape) -> Result<ShapeId, RegistryError> {
        let id = ShapeId::new(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(RegistryError::IdsExhausted)?;

        shape.assign_id(id);
        tracing::debug!("Registered shape {} as id {}", shape.name(), id);
        self.shapes.insert(id, shape);
        Ok(id)
    }

    pub fn get(&self, id: ShapeId) -> Result<&Shape, RegistryError> {
        self.shapes.get(&id).ok_or(RegistryError::NotFound(id))
    }

    pub fn delete(&mut self, id: ShapeId) -> Result<Shape, RegistryError> {
        self.shapes.remove(&id).ok_or(RegistryError::NotFound(id))
    }

    /// 删除全部图形，返回删除数量（计数器不回退）
    pub fn clear(&mut self) -> usize {
        let count = self.shapes.len();
        self.shapes.clear();
        count
    }

    /// 按插入顺序列出所有图形
    pub fn list(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// 整体替换内容（用于加载），调用方负责确认
    pub fn replace_all(&mut self, shapes: BTreeMap<ShapeId, Shape>, next_id: u64) {
        self.shapes = shapes;
        self.next_id = next_id;
    }

    /// 导出快照
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            shapes: self.shapes.clone(),
            next_id: self.next_id,
        }
    }

    /// 从快照恢复
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.replace_all(snapshot.shapes, snapshot.next_id);
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
