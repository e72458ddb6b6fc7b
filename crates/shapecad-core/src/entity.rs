//! 图形实体：标识符 + 名称 + 几何数据

use crate::geometry::{Geometry, Metrics};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// 图形唯一标识符（由注册表分配，从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShapeId(u64);

impl ShapeId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 图形
///
/// 新建的图形没有标识符，注册到 [`ShapeRegistry`](crate::registry::ShapeRegistry) 时才分配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: Option<ShapeId>,
    name: String,
    geometry: Geometry,
}

impl Shape {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: None,
            name: name.into(),
            geometry,
        }
    }

    pub fn id(&self) -> Option<ShapeId> {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: ShapeId) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn dimension(&self) -> u8 {
        self.geometry.dimension()
    }

    /// 结构化信息记录
    ///
    /// 包含 `id`、`name`、`type`、`dimension`、图元特有字段以及派生度量
    /// （2D 为 `area`/`perimeter`，3D 为 `volume`/`surface_area`）。
    /// 度量计算失败时以 `calculation_error` 字段代替，不会使整个请求失败。
    pub fn info(&self) -> Value {
        let mut info = Map::new();
        info.insert(
            "id".to_string(),
            self.id.map_or(Value::Null, |id| Value::from(id.get())),
        );
        info.insert("name".to_string(), Value::from(self.name.clone()));
        info.insert("type".to_string(), Value::from(self.geometry.type_name()));
        info.insert("dimension".to_string(), Value::from(self.dimension()));
        info.extend(self.geometry.specific_info());

        match self.geometry.metrics() {
            Ok(Metrics::Planar { area, perimeter }) => {
                info.insert("area".to_string(), Value::from(area));
                info.insert("perimeter".to_string(), Value::from(perimeter));
            }
            Ok(Metrics::Solid {
                volume,
                surface_area,
            }) => {
                info.insert("volume".to_string(), Value::from(volume));
                info.insert("surface_area".to_string(), Value::from(surface_area));
            }
            Err(e) => {
                tracing::debug!("Metric calculation failed for {}: {}", self.name, e);
                info.insert("calculation_error".to_string(), Value::from(e.to_string()));
            }
        }

        Value::Object(info)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} ({}): {}", self.name, id, self.geometry),
            None => write!(f, "{} (unassigned): {}", self.name, self.geometry),
        }
    }
}
